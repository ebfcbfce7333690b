//! The three health probes.
//!
//! Each probe catches every failure at its origin and reports a boolean (or
//! a retained per-item result list); no error ever escapes a probe. Events
//! are written to the health log as the probe runs.
//!
//! - [`dns`] - OS-resolver lookups for the fixed host list
//! - [`net`] - One bounded HEAD request to the reachability endpoint
//! - [`pkg`] - Presence-only checks for required Python packages

pub mod dns;
pub mod net;
pub mod pkg;

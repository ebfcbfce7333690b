//! Vitals - devcontainer health diagnostics.
//!
//! Vitals runs three independent probes against the current sandbox — DNS
//! resolution of a fixed host list, one bounded HTTPS reachability request,
//! and presence checks for required Python packages — then reports through
//! an append-only event log, an overwritten human-readable status banner,
//! and the process exit code.
//!
//! # Modules
//!
//! - [`checkup`] - Probe orchestration and exit-code policy
//! - [`cli`] - Command-line interface and terminal echo
//! - [`error`] - Error types and result aliases
//! - [`probes`] - The DNS, reachability, and package probes
//! - [`report`] - Event log and status banner writers
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vitals::checkup;
//!
//! let report = checkup::run_checkup(Path::new("/workspace/logs"), false).unwrap();
//! println!("sandbox ready: {}", report.overall);
//! ```

pub mod checkup;
pub mod cli;
pub mod error;
pub mod probes;
pub mod report;

pub use error::{Result, VitalsError};

//! DNS resolution probe.
//!
//! Resolves each configured hostname through the operating system resolver
//! (`ToSocketAddrs`), relying on the OS default timeout. A host that fails
//! to resolve is recorded and the loop moves on; one dead name never hides
//! the state of the others.

use std::net::ToSocketAddrs;

use crate::report::HealthLog;

/// Port handed to the resolver call; `ToSocketAddrs` requires one, the
/// lookup itself does not care which.
const PROBE_PORT: u16 = 443;

/// Resolve a single hostname via the OS resolver.
///
/// Returns the first resolved address, or an error category string built
/// from the resolver error.
pub fn resolve_host(host: &str) -> std::result::Result<String, String> {
    match (host, PROBE_PORT).to_socket_addrs() {
        Ok(mut addrs) => match addrs.next() {
            Some(addr) => Ok(addr.ip().to_string()),
            None => Err("NoAddress:resolver returned an empty set".to_string()),
        },
        Err(e) => Err(format!("{:?}:{}", e.kind(), e)),
    }
}

/// Probe every host in `hosts`, logging one `DNS_OK`/`DNS_FAIL` line each.
///
/// Returns true only if every host resolved.
pub fn check_dns(log: &mut HealthLog, hosts: &[&str]) -> bool {
    let mut ok = true;
    for host in hosts {
        match resolve_host(host) {
            Ok(ip) => {
                tracing::debug!("resolved {} to {}", host, ip);
                log.event("DNS_OK", &[("host", host), ("ip", &ip)]);
            }
            Err(err) => {
                ok = false;
                tracing::debug!("failed to resolve {}: {}", host, err);
                log.event("DNS_FAIL", &[("host", host), ("err", &err)]);
            }
        }
    }
    ok
}

//! Internet reachability probe.
//!
//! One HEAD request to the configured endpoint with a bounded wait. Any
//! 2xx/3xx response counts as reachable; error statuses, timeouts, refused
//! connections, and TLS failures are all recorded failures.

use std::time::Duration;

use crate::report::HealthLog;

/// Issue a single HEAD request, returning the response status code or an
/// error category string.
pub fn probe_endpoint(url: &str, timeout: Duration) -> std::result::Result<u16, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("ClientBuild:{}", e))?;

    match client.head(url).send() {
        Ok(response) => Ok(response.status().as_u16()),
        Err(e) => Err(classify_error(&e)),
    }
}

/// Whether a status code counts as reachable.
pub fn is_reachable_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Map a reqwest error to a short category plus its message.
fn classify_error(e: &reqwest::Error) -> String {
    let category = if e.is_timeout() {
        "Timeout"
    } else if e.is_connect() {
        "Connect"
    } else if e.is_request() {
        "Request"
    } else {
        "Other"
    };
    format!("{}:{}", category, e)
}

/// Probe the endpoint once, logging `NET_OK` or `NET_FAIL`.
pub fn check_reachability(log: &mut HealthLog, url: &str, timeout: Duration) -> bool {
    match probe_endpoint(url, timeout) {
        Ok(status) if is_reachable_status(status) => {
            tracing::debug!("reachability probe to {} returned {}", url, status);
            log.event("NET_OK", &[("status", &status.to_string())]);
            true
        }
        Ok(status) => {
            tracing::debug!("reachability probe to {} returned {}", url, status);
            log.event("NET_FAIL", &[("status", &status.to_string())]);
            false
        }
        Err(err) => {
            tracing::debug!("reachability probe to {} failed: {}", url, err);
            log.event("NET_FAIL", &[("err", &err)]);
            false
        }
    }
}

//! Probe orchestration and exit-code policy.
//!
//! One checkup is a strictly linear pass: start event, DNS, reachability,
//! packages, summary, banner. Probe failures surface only as booleans; the
//! exit-code decision lives here and nowhere else.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::probes::{dns, net, pkg};
use crate::report::{self, BannerData, HealthLog, PackageStatus};

/// Hostnames the DNS probe resolves.
pub const DNS_HOSTS: &[&str] = &["github.com", "pypi.org", "google.com"];

/// Python packages the sandbox must provide.
pub const REQUIRED_PACKAGES: &[&str] = &["netmiko", "ntc_templates"];

/// Endpoint for the reachability probe.
pub const REACHABILITY_URL: &str = "https://www.google.com";

/// Bound on the reachability request.
pub const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default directory for the event log and status banner.
pub const DEFAULT_LOG_DIR: &str = "/workspace/logs";

/// Aggregated results of one checkup run.
#[derive(Debug)]
pub struct CheckupReport {
    /// Every configured host resolved.
    pub dns_ok: bool,
    /// The reachability endpoint answered with a 2xx/3xx status.
    pub net_ok: bool,
    /// Per-package presence results, in configured order.
    pub packages: Vec<PackageStatus>,
    /// Conjunction of the three probe outcomes.
    pub overall: bool,
}

impl CheckupReport {
    /// Whether every required package was found.
    pub fn pkg_ok(&self) -> bool {
        self.packages.iter().all(|p| p.present)
    }
}

/// Process exit code for a finished run.
///
/// Shallow runs never fail the calling process; deep runs fail it when the
/// sandbox is unhealthy.
pub fn exit_code(overall: bool, deep: bool) -> u8 {
    if overall || !deep {
        0
    } else {
        1
    }
}

/// Run the full checkup, writing the event log and banner under `log_dir`.
pub fn run_checkup(log_dir: &Path, deep: bool) -> Result<CheckupReport> {
    let mut log = HealthLog::open(log_dir)?;
    log.event(
        "HEALTH_START",
        &[("ts", &report::now_iso()), ("deep", &deep.to_string())],
    );

    let dns_ok = dns::check_dns(&mut log, DNS_HOSTS);
    let net_ok = net::check_reachability(&mut log, REACHABILITY_URL, REACHABILITY_TIMEOUT);
    let interpreter = pkg::find_interpreter();
    let packages = pkg::check_packages(&mut log, REQUIRED_PACKAGES, interpreter.as_deref());

    let pkg_ok = packages.iter().all(|p| p.present);
    let overall = dns_ok && net_ok && pkg_ok;

    log.event(
        "HEALTH_SUMMARY",
        &[
            ("dns", &dns_ok.to_string()),
            ("net", &net_ok.to_string()),
            ("pkg", &pkg_ok.to_string()),
            ("overall", &overall.to_string()),
        ],
    );
    log.event("HEALTH_END", &[("ts", &report::now_iso())]);

    report::write_banner(
        log_dir,
        &BannerData {
            dns_ok,
            net_ok,
            packages: packages.clone(),
            overall,
            log_path: log.path().to_path_buf(),
        },
    )?;

    Ok(CheckupReport {
        dns_ok,
        net_ok,
        packages,
        overall,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(dns_ok: bool, net_ok: bool, pkg_present: bool) -> CheckupReport {
        let packages = vec![
            PackageStatus {
                name: "netmiko".to_string(),
                present: true,
            },
            PackageStatus {
                name: "ntc_templates".to_string(),
                present: pkg_present,
            },
        ];
        let overall = dns_ok && net_ok && pkg_present;
        CheckupReport {
            dns_ok,
            net_ok,
            packages,
            overall,
        }
    }

    #[test]
    fn exit_code_is_zero_when_healthy() {
        assert_eq!(exit_code(true, false), 0);
        assert_eq!(exit_code(true, true), 0);
    }

    #[test]
    fn shallow_mode_never_fails_the_caller() {
        assert_eq!(exit_code(false, false), 0);
    }

    #[test]
    fn deep_mode_fails_on_unhealthy() {
        assert_eq!(exit_code(false, true), 1);
    }

    #[test]
    fn one_missing_package_makes_overall_false() {
        let report = report_with(true, true, false);
        assert!(report.dns_ok);
        assert!(report.net_ok);
        assert!(!report.pkg_ok());
        assert!(!report.overall);
    }

    #[test]
    fn all_probes_passing_makes_overall_true() {
        let report = report_with(true, true, true);
        assert!(report.pkg_ok());
        assert!(report.overall);
    }

    #[test]
    fn configured_constants_are_populated() {
        assert!(!DNS_HOSTS.is_empty());
        assert!(!REQUIRED_PACKAGES.is_empty());
        assert!(REACHABILITY_URL.starts_with("https://"));
        assert_eq!(REACHABILITY_TIMEOUT, Duration::from_secs(5));
    }
}

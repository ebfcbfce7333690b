//! Event log and status banner output.
//!
//! Two files, two lifetimes: the event log is append-only and grows across
//! runs, while the banner is overwritten each run and reflects only the
//! latest. Every timestamp written here is UTC ISO-8601 with a literal `Z`
//! suffix.

use chrono::{SecondsFormat, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, VitalsError};

/// File name of the append-only event log.
pub const LOG_FILE: &str = "devcontainer_health.log";

/// File name of the overwritten status banner.
pub const BANNER_FILE: &str = "DEVCONTAINER_STATUS.txt";

const BANNER_TOP: &str = "================= DEVCONTAINER HEALTH =================";
const BANNER_BOTTOM: &str = "=======================================================";

/// Current UTC time as ISO-8601 with a literal `Z` suffix (never `+00:00`).
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Render a boolean as the banner's PASS/FAIL wording.
pub fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Presence result for a single required package.
#[derive(Debug, Clone)]
pub struct PackageStatus {
    /// Package name as configured.
    pub name: String,
    /// Whether a loadable spec was found.
    pub present: bool,
}

/// Append-only writer for the health event log.
///
/// Opening the log creates the parent directory if absent. Each event is a
/// single `TAG key=value ...` line flushed immediately, so a killed run
/// still leaves every completed event on disk.
#[derive(Debug)]
pub struct HealthLog {
    path: PathBuf,
    file: File,
}

impl HealthLog {
    /// Open (or create) the event log inside `log_dir`.
    pub fn open(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir).map_err(|source| VitalsError::LogDirCreate {
            path: log_dir.to_path_buf(),
            source,
        })?;

        let path = log_dir.join(LOG_FILE);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| VitalsError::OutputWrite {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, file })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `TAG key=value ...` event line.
    pub fn event(&mut self, tag: &str, fields: &[(&str, &str)]) {
        let mut line = String::from(tag);
        for (key, value) in fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(value);
        }
        // A failed append must not abort the run; the probes keep going and
        // the banner write surfaces a dead disk as a real error.
        if let Err(e) = writeln!(self.file, "{}", line).and_then(|_| self.file.flush()) {
            tracing::warn!("Could not append to {}: {}", self.path.display(), e);
        }
    }
}

/// Data the banner renders for one run.
#[derive(Debug, Clone)]
pub struct BannerData {
    pub dns_ok: bool,
    pub net_ok: bool,
    pub packages: Vec<PackageStatus>,
    pub overall: bool,
    /// Where the detailed log lives, for the pointer line.
    pub log_path: PathBuf,
}

/// Render the fixed-format status banner block.
pub fn render_banner(data: &BannerData) -> String {
    let mut lines = vec![
        BANNER_TOP.to_string(),
        format!("Time (UTC): {}", now_iso()),
        format!("DNS resolution: {}", pass_fail(data.dns_ok)),
        format!("Internet reachability: {}", pass_fail(data.net_ok)),
        "Required Python packages:".to_string(),
    ];
    for pkg in &data.packages {
        let state = if pkg.present { "OK" } else { "MISSING" };
        lines.push(format!("  - {}: {}", pkg.name, state));
    }
    let overall = if data.overall {
        "READY ✅"
    } else {
        "NOT READY ❌"
    };
    lines.push(format!("Overall status: {}", overall));
    lines.push(format!("Details: {}", data.log_path.display()));
    lines.push(BANNER_BOTTOM.to_string());

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

/// Overwrite the banner file inside `log_dir`, returning its path.
pub fn write_banner(log_dir: &Path, data: &BannerData) -> Result<PathBuf> {
    let path = log_dir.join(BANNER_FILE);
    fs::write(&path, render_banner(data)).map_err(|source| VitalsError::OutputWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

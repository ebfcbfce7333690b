//! Required-package probe.
//!
//! Asks the Python interpreter whether each required package has a loadable
//! spec (`importlib.util.find_spec`). This is an existence check against the
//! import machinery only — the package body is never imported, so a broken
//! package cannot crash the probe.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::report::{HealthLog, PackageStatus};

/// Interpreter binary the probe looks for on PATH.
const INTERPRETER: &str = "python3";

/// One-liner handed to the interpreter; exits 0 when a spec exists.
const FIND_SPEC: &str =
    "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec(sys.argv[1]) else 1)";

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use the
/// `which` command — `which` behavior varies across systems and is
/// sometimes a shell builtin with inconsistent error handling.
fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Locate the Python interpreter on the current PATH.
pub fn find_interpreter() -> Option<PathBuf> {
    resolve_tool_path(INTERPRETER, &parse_system_path())
}

/// Check a single package against a specific interpreter.
///
/// A failed spawn counts as the package being absent; the probe never
/// surfaces a process error.
pub fn probe_package(interpreter: &Path, name: &str) -> PackageStatus {
    let present = Command::new(interpreter)
        .arg("-c")
        .arg(FIND_SPEC)
        .arg(name)
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false);

    PackageStatus {
        name: name.to_string(),
        present,
    }
}

/// Probe every package in `packages`, logging one `PKG_OK`/`PKG_FAIL` line
/// each.
///
/// When no interpreter is available every package is recorded missing with
/// a `NoInterpreter` category rather than erroring out. The per-package
/// results are retained so the banner can annotate each package without
/// re-checking.
pub fn check_packages(
    log: &mut HealthLog,
    packages: &[&str],
    interpreter: Option<&Path>,
) -> Vec<PackageStatus> {
    if interpreter.is_none() {
        tracing::debug!("no {} on PATH, marking all packages missing", INTERPRETER);
    }

    let mut results = Vec::with_capacity(packages.len());
    for name in packages {
        let status = match interpreter {
            Some(python) => probe_package(python, name),
            None => PackageStatus {
                name: name.to_string(),
                present: false,
            },
        };

        if status.present {
            log.event("PKG_OK", &[("name", name)]);
        } else if interpreter.is_some() {
            log.event("PKG_FAIL", &[("name", name)]);
        } else {
            log.event("PKG_FAIL", &[("name", name), ("err", "NoInterpreter")]);
        }
        results.push(status);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake interpreter that reports only `present_pkg` as found.
    ///
    /// The probe invokes `<interpreter> -c <code> <pkg>`, so the package
    /// name arrives as `$3`.
    #[cfg(unix)]
    fn create_fake_interpreter(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("python3");
        fs::write(
            &path,
            "#!/bin/sh\ncase \"$3\" in present_pkg) exit 0 ;; *) exit 1 ;; esac\n",
        )
        .unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn probe_reports_present_package() {
        let temp = TempDir::new().unwrap();
        let python = create_fake_interpreter(temp.path());

        let status = probe_package(&python, "present_pkg");
        assert_eq!(status.name, "present_pkg");
        assert!(status.present);
    }

    #[cfg(unix)]
    #[test]
    fn probe_reports_absent_package() {
        let temp = TempDir::new().unwrap();
        let python = create_fake_interpreter(temp.path());

        assert!(!probe_package(&python, "definitely_absent").present);
    }

    #[test]
    fn failed_spawn_counts_as_absent() {
        let status = probe_package(Path::new("/nonexistent/python3"), "netmiko");
        assert!(!status.present);
    }

    #[cfg(unix)]
    #[test]
    fn check_packages_logs_and_retains_per_package_results() {
        let temp = TempDir::new().unwrap();
        let python = create_fake_interpreter(temp.path());
        let mut log = HealthLog::open(temp.path()).unwrap();

        let results = check_packages(
            &mut log,
            &["present_pkg", "missing_pkg"],
            Some(python.as_path()),
        );

        assert_eq!(results.len(), 2);
        assert!(results[0].present);
        assert!(!results[1].present);

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("PKG_OK name=present_pkg"));
        assert!(content.contains("PKG_FAIL name=missing_pkg"));
    }

    #[test]
    fn missing_interpreter_marks_all_packages_missing() {
        let temp = TempDir::new().unwrap();
        let mut log = HealthLog::open(temp.path()).unwrap();

        let results = check_packages(&mut log, &["netmiko", "ntc_templates"], None);
        assert!(results.iter().all(|p| !p.present));

        let content = fs::read_to_string(log.path()).unwrap();
        assert!(content.contains("PKG_FAIL name=netmiko err=NoInterpreter"));
        assert!(content.contains("PKG_FAIL name=ntc_templates err=NoInterpreter"));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_finds_first_executable_match() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::create_dir_all(&dir_b).unwrap();

        // Non-executable in dir_a must be skipped.
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_interpreter(&dir_b);

        let result = resolve_tool_path("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_tool_path("python3", &[temp.path().to_path_buf()]).is_none());
    }
}

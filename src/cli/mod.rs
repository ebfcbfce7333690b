//! Command-line interface.
//!
//! - [`args`] - Argument definitions
//!
//! [`run`] executes the checkup and echoes the results to the terminal;
//! the files under the log directory carry the durable record.

pub mod args;

pub use args::Cli;

use console::style;

use crate::checkup::{self, CheckupReport};
use crate::error::Result;
use crate::report;

/// Execute the checkup for the parsed CLI and return the process exit code.
pub fn run(cli: &Cli) -> Result<u8> {
    let checkup_report = checkup::run_checkup(&cli.log_dir, cli.deep)?;

    if !cli.quiet {
        print_report(&checkup_report);
    }

    Ok(checkup::exit_code(checkup_report.overall, cli.deep))
}

/// Echo the probe results to stdout, colored when attached to a terminal.
fn print_report(checkup_report: &CheckupReport) {
    println!("DNS resolution: {}", colored_pass_fail(checkup_report.dns_ok));
    println!(
        "Internet reachability: {}",
        colored_pass_fail(checkup_report.net_ok)
    );
    println!("Required Python packages:");
    for pkg in &checkup_report.packages {
        let state = if pkg.present {
            style("OK").green()
        } else {
            style("MISSING").red()
        };
        println!("  - {}: {}", pkg.name, state);
    }

    let overall = if checkup_report.overall {
        style("READY").green().bold()
    } else {
        style("NOT READY").red().bold()
    };
    println!("Overall status: {}", overall);
}

fn colored_pass_fail(ok: bool) -> console::StyledObject<&'static str> {
    let text = report::pass_fail(ok);
    if ok {
        style(text).green()
    } else {
        style(text).red()
    }
}

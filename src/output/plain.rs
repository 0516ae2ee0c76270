//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use crate::types::{ProbeOutcome, Report, ReportEntry};
use console::{style, Style};
use std::io::{self, Write};

const LOGO: &str = r"
     ____        _     _            _
    / ___| _   _| |__ | | ___   ___| | __
    \___ \| | | | '_ \| |/ _ \ / __| |/ /
     ___) | |_| | |_) | | (_) | (__|   <
    |____/ \__,_|_.__/|_|\___/ \___|_|\_\
";

/// Print the startup logo.
pub fn print_banner() {
    println!("{}", style(LOGO).cyan());
    println!(
        "    {} v{}",
        style("Subdomain Finder").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
}

/// Style for a probe outcome: 2xx is highlighted, everything else is plain.
pub fn outcome_style(outcome: &ProbeOutcome) -> Style {
    if outcome.is_success() {
        Style::new().green()
    } else {
        Style::new()
    }
}

/// Render one report line, `<host> - [<outcome>]`.
///
/// `styled` decides whether escape codes are emitted at all.
pub fn format_entry(entry: &ReportEntry, styled: bool) -> String {
    let style = outcome_style(&entry.outcome).force_styling(styled);
    format!(
        "{} - {}",
        entry.host,
        style.apply_to(format!("[{}]", entry.outcome))
    )
}

/// Print every report line to stdout.
pub fn print_report(report: &Report) -> io::Result<()> {
    let styled = console::colors_enabled();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for entry in report {
        writeln!(out, "{}", format_entry(entry, styled))?;
    }

    out.flush()
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("•").dim(), msg);
}

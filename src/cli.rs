//! Command-line interface definitions for sublock.
//!
//! Uses `clap` derive macros for declarative argument parsing.

use crate::config::settings::DEFAULT_MAX_CONCURRENCY;
use crate::types::Domain;
use clap::Parser;

/// Automated subdomain finder and status checker.
#[derive(Parser, Debug)]
#[command(name = "sublock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Automated Subdomain Finder and Status Checker", long_about = None)]
pub struct Args {
    /// The target domain to find subdomains for
    #[arg(value_name = "DOMAIN")]
    pub domain: Domain,

    /// Number of threads for parallel checking
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY, value_parser = parse_threads)]
    pub threads: usize,
}

/// Parse a worker count, rejecting zero.
fn parse_threads(s: &str) -> Result<usize, String> {
    let threads: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid thread count: {}", s))?;
    if threads == 0 {
        return Err("thread count must be at least 1".to_string());
    }
    Ok(threads)
}

//! # sublock - Subdomain Finder and Status Checker
//!
//! sublock discovers the subdomains of a domain from certificate-transparency
//! records, keeps the ones that resolve, and checks each over HTTP.
//!
//! ## Pipeline
//!
//! 1. **Fetch** candidate names from crt.sh ([`source`])
//! 2. **Resolve** each candidate's A record, dropping dead names ([`dns`])
//! 3. **Probe** the survivors with bounded concurrency ([`prober`])
//! 4. **Report** one line per host, successes highlighted ([`output`])
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use sublock::config::PipelineConfig;
//! use sublock::pipeline::{Pipeline, PipelineOutcome};
//! use sublock::types::Domain;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pipeline = Pipeline::with_defaults(PipelineConfig::default()).unwrap();
//!     let domain = Domain::new("example.com").unwrap();
//!
//!     if let PipelineOutcome::Done(report) = pipeline.run(&domain).await {
//!         for entry in &report {
//!             println!("{} {}", entry.host, entry.outcome);
//!         }
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Domain, candidate set, probe outcomes and the report
//! - [`source`] - The `CandidateSource` trait and the crt.sh source
//! - [`dns`] - The `HostResolver` trait and the sequential DNS filter
//! - [`prober`] - The `Prober` trait, HTTP prober and the worker pool
//! - [`pipeline`] - Stage sequencing and terminal states
//! - [`config`] - Defaults and pipeline configuration
//! - [`error`] - Error types
//! - [`output`] - Console formatting

pub mod cli;
pub mod config;
pub mod dns;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prober;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::{FetchError, ResolveError, RunError, SetupError};
pub use pipeline::{Pipeline, PipelineOutcome};
pub use types::{CandidateSet, Domain, ProbeOutcome, Report, ReportEntry};

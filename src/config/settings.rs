//! Default settings and the pipeline configuration.
//!
//! There is no configuration file: these defaults apply unless a caller
//! overrides them through the builder methods.

use std::time::Duration;

/// Default number of concurrent probe workers.
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

/// Per-request timeout for HTTP status probes.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Request timeout for the certificate-transparency lookup.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Base URL of the certificate-transparency lookup service.
pub const CRT_SH_BASE_URL: &str = "https://crt.sh";

/// Maximum redirect hops followed by a probe under the follow policy.
pub const MAX_REDIRECTS: usize = 10;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Maximum number of probes in flight at once (never below 1).
    pub max_concurrency: usize,
    /// Print stage progress lines and progress bars.
    pub show_progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            show_progress: false,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker count. Zero is raised to one.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Enable console progress output.
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }
}

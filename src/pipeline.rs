//! Pipeline orchestration: fetch, resolve, probe, report.
//!
//! Stages run strictly one after another. An empty stage result ends the run
//! early with its own terminal state, so later stages are never invoked.

use crate::config::PipelineConfig;
use crate::dns::{resolve_dns, HostResolver, SystemResolver};
use crate::error::{FetchError, RunResult, SetupResult};
use crate::output;
use crate::prober::{probe_all, HttpProber, Prober};
use crate::source::{CandidateSource, CrtShSource};
use crate::types::{CandidateSet, Domain, Report};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The source returned no candidates (or failed).
    NoSubdomains,
    /// Candidates were found but none resolved.
    NoValidSubdomains { candidates: usize },
    /// Every resolved host was probed.
    Done(Report),
}

impl PipelineOutcome {
    /// The message shown for an early stop, if this is one.
    pub fn terminal_message(&self) -> Option<&'static str> {
        match self {
            Self::NoSubdomains => Some("No subdomains found."),
            Self::NoValidSubdomains { .. } => Some("No valid subdomains with DNS resolution."),
            Self::Done(_) => None,
        }
    }

    /// The report, if probing ran.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Done(report) => Some(report),
            _ => None,
        }
    }
}

/// The subdomain discovery and status-check pipeline.
pub struct Pipeline {
    source: Arc<dyn CandidateSource>,
    resolver: Arc<dyn HostResolver>,
    prober: Arc<dyn Prober>,
    config: PipelineConfig,
}

impl Pipeline {
    /// Assemble a pipeline from its collaborators.
    pub fn new(
        source: Arc<dyn CandidateSource>,
        resolver: Arc<dyn HostResolver>,
        prober: Arc<dyn Prober>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            source,
            resolver,
            prober,
            config,
        }
    }

    /// Pipeline over crt.sh, the system resolver and plain HTTP probes.
    pub fn with_defaults(config: PipelineConfig) -> SetupResult<Self> {
        Ok(Self::new(
            Arc::new(CrtShSource::new()?),
            Arc::new(SystemResolver::new()),
            Arc::new(HttpProber::new()?),
            config,
        ))
    }

    /// Run every stage for `domain`.
    pub async fn run(&self, domain: &Domain) -> PipelineOutcome {
        let start = Instant::now();

        let candidates = self.fetch_subdomains(domain).await;
        if candidates.is_empty() {
            info!(%domain, "no candidates, stopping");
            return PipelineOutcome::NoSubdomains;
        }
        let candidate_count = candidates.len();

        self.announce("Resolving DNS for found subdomains...");
        let progress = self.progress_bar(candidate_count, "resolving");
        let resolved = resolve_dns(
            self.resolver.as_ref(),
            candidates.into_sorted_vec(),
            progress.as_ref(),
        )
        .await;
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
        info!(candidates = candidate_count, resolved = resolved.len(), "dns filtering done");

        if resolved.is_empty() {
            return PipelineOutcome::NoValidSubdomains {
                candidates: candidate_count,
            };
        }

        self.announce(&format!(
            "Found {} valid subdomains. Checking HTTP status...",
            resolved.len()
        ));
        let progress = self.progress_bar(resolved.len(), "probing");
        let report = probe_all(
            Arc::clone(&self.prober),
            resolved,
            self.config.max_concurrency,
            progress.as_ref(),
        )
        .await;
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        info!(
            probed = report.len(),
            up = report.success_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "probing done"
        );
        PipelineOutcome::Done(report)
    }

    /// Fetch candidates, turning every source failure into an empty set.
    pub async fn fetch_subdomains(&self, domain: &Domain) -> CandidateSet {
        self.announce(&format!("Fetching subdomains for: {}", domain));

        match self.source.fetch(domain).await {
            Ok(candidates) => {
                info!(source = self.source.name(), count = candidates.len(), "fetched candidates");
                self.announce(&format!("Found {} candidate subdomains.", candidates.len()));
                candidates
            }
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "candidate fetch failed");
                if self.config.show_progress {
                    match &e {
                        FetchError::Status(code) => output::print_error(&format!(
                            "Failed to fetch subdomains from {}. Status code: {}",
                            self.source.name(),
                            code
                        )),
                        _ => output::print_error(&format!("Error fetching subdomains: {}", e)),
                    }
                }
                CandidateSet::new()
            }
        }
    }

    fn announce(&self, msg: &str) {
        if self.config.show_progress {
            output::print_info(msg);
        }
    }

    fn progress_bar(&self, len: usize, msg: &'static str) -> Option<ProgressBar> {
        if !self.config.show_progress {
            return None;
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb.set_message(msg);
        Some(pb)
    }
}

/// Run the default pipeline for `domain` and print the result.
pub async fn find_and_check_subdomains(
    domain: &Domain,
    max_concurrency: usize,
) -> RunResult<PipelineOutcome> {
    let config = PipelineConfig::new()
        .with_max_concurrency(max_concurrency)
        .with_progress();
    let pipeline = Pipeline::with_defaults(config)?;

    let outcome = pipeline.run(domain).await;
    match &outcome {
        PipelineOutcome::Done(report) => output::print_report(report)?,
        other => {
            if let Some(msg) = other.terminal_message() {
                output::print_info(msg);
            }
        }
    }

    Ok(outcome)
}

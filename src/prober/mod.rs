//! Status probing - coordinates concurrent HTTP checks of resolved hosts.
//!
//! [`probe_all`] is the worker pool: it keeps at most `max_concurrency`
//! probes in flight and returns the report in submission order, whatever
//! order the probes finish in.

pub mod http;

pub use http::{HttpProber, ProbeConfig, RedirectPolicy};

use crate::types::{ProbeOutcome, Report, ReportEntry};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::sync::Arc;

/// Trait for host probe implementations.
///
/// A probe never fails: every way a check can end maps to a
/// [`ProbeOutcome`].
#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe a single host.
    async fn probe(&self, host: &str) -> ProbeOutcome;
}

/// Probe one host and pair the outcome with it.
pub async fn check_subdomain(prober: &dyn Prober, host: String) -> ReportEntry {
    let outcome = prober.probe(&host).await;
    ReportEntry::new(host, outcome)
}

/// Probe every host with bounded concurrency.
///
/// Entries come back in the order of `hosts`, one per host.
pub async fn probe_all(
    prober: Arc<dyn Prober>,
    hosts: Vec<String>,
    max_concurrency: usize,
    progress: Option<&ProgressBar>,
) -> Report {
    let total = hosts.len();

    let mut indexed: Vec<(usize, ReportEntry)> = stream::iter(hosts.into_iter().enumerate())
        .map(|(index, host)| {
            let prober = Arc::clone(&prober);
            let progress = progress.cloned();

            async move {
                let entry = check_subdomain(prober.as_ref(), host).await;

                if let Some(ref pb) = progress {
                    pb.inc(1);
                    if entry.outcome.is_success() {
                        pb.set_message(format!("{} is up", entry.host));
                    }
                }

                (index, entry)
            }
        })
        .buffer_unordered(max_concurrency.max(1))
        .collect()
        .await;

    debug_assert_eq!(indexed.len(), total);
    indexed.sort_by_key(|(index, _)| *index);

    Report::new(indexed.into_iter().map(|(_, entry)| entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Finishes later for hosts earlier in the list.
    struct ReverseDelayProber {
        delays_ms: HashMap<String, u64>,
    }

    #[async_trait]
    impl Prober for ReverseDelayProber {
        async fn probe(&self, host: &str) -> ProbeOutcome {
            let delay = self.delays_ms.get(host).copied().unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            ProbeOutcome::Status(200)
        }
    }

    /// Records the highest number of simultaneous probes.
    #[derive(Default)]
    struct CountingProber {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Prober for CountingProber {
        async fn probe(&self, _host: &str) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            ProbeOutcome::ConnectionFailed
        }
    }

    fn hosts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("h{}.example.com", i)).collect()
    }

    #[tokio::test]
    async fn test_report_in_submission_order() {
        let input = hosts(5);
        let delays_ms = input
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), (5 - i as u64) * 20))
            .collect();
        let prober: Arc<dyn Prober> = Arc::new(ReverseDelayProber { delays_ms });

        let report = probe_all(prober, input.clone(), 5, None).await;

        let order: Vec<&str> = report.iter().map(|e| e.host.as_str()).collect();
        assert_eq!(order, input.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let counting = Arc::new(CountingProber::default());
        let prober: Arc<dyn Prober> = counting.clone();

        let report = probe_all(prober, hosts(12), 3, None).await;

        assert_eq!(report.len(), 12);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 12);
        assert!(counting.peak.load(Ordering::SeqCst) <= 3);
        assert_eq!(counting.peak.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_one_outcome_per_host() {
        let counting = Arc::new(CountingProber::default());
        let input = hosts(7);

        let report = probe_all(counting.clone(), input.clone(), 2, None).await;

        assert_eq!(report.len(), input.len());
        for host in &input {
            assert_eq!(report.iter().filter(|e| &e.host == host).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_zero_concurrency_still_probes() {
        let counting = Arc::new(CountingProber::default());

        let report = probe_all(counting.clone(), hosts(2), 0, None).await;

        assert_eq!(report.len(), 2);
        assert_eq!(counting.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let counting = Arc::new(CountingProber::default());
        let report = probe_all(counting.clone(), Vec::new(), 4, None).await;

        assert!(report.is_empty());
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_check_subdomain_pairs_host() {
        let prober = CountingProber::default();
        let entry = check_subdomain(&prober, "www.example.com".to_string()).await;

        assert_eq!(entry.host, "www.example.com");
        assert_eq!(entry.outcome, ProbeOutcome::ConnectionFailed);
    }
}

//! DNS filtering - keeps only candidates with a live A record.
//!
//! Lookups run one after another. Total latency therefore grows with the
//! number of candidates times the resolver's per-lookup timeout.

pub mod system;

pub use system::SystemResolver;

use crate::error::ResolveResult;
use async_trait::async_trait;
use indicatif::ProgressBar;
use tracing::{debug, warn};

/// Trait for A-record existence checks.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Succeed if `host` has at least one A record.
    async fn resolve_a(&self, host: &str) -> ResolveResult<()>;
}

/// Filter candidates down to those that resolve, preserving input order.
///
/// Every lookup is its own failure boundary: NXDOMAIN, empty answers and
/// timeouts drop the candidate silently, and any other resolver error is
/// logged before the candidate is dropped. Filtering always continues with
/// the remaining names.
pub async fn resolve_dns<I>(
    resolver: &dyn HostResolver,
    candidates: I,
    progress: Option<&ProgressBar>,
) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut resolved = Vec::new();

    for host in candidates {
        match resolver.resolve_a(&host).await {
            Ok(()) => resolved.push(host),
            Err(e) if e.is_expected() => {
                debug!(%host, reason = %e, "dropping unresolved candidate");
            }
            Err(e) => {
                warn!(%host, error = %e, "unexpected resolver failure, skipping candidate");
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use std::collections::HashMap;

    struct FixedResolver(HashMap<&'static str, ResolveResult<()>>);

    #[async_trait]
    impl HostResolver for FixedResolver {
        async fn resolve_a(&self, host: &str) -> ResolveResult<()> {
            self.0.get(host).cloned().unwrap_or(Err(ResolveError::NxDomain))
        }
    }

    fn hosts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_keeps_resolving_hosts_in_input_order() {
        let resolver = FixedResolver(HashMap::from([
            ("c.example.com", Ok(())),
            ("a.example.com", Ok(())),
        ]));

        let resolved = resolve_dns(
            &resolver,
            hosts(&["c.example.com", "b.example.com", "a.example.com"]),
            None,
        )
        .await;

        assert_eq!(resolved, hosts(&["c.example.com", "a.example.com"]));
    }

    #[tokio::test]
    async fn test_expected_failures_dropped() {
        let resolver = FixedResolver(HashMap::from([
            ("nx.example.com", Err(ResolveError::NxDomain)),
            ("empty.example.com", Err(ResolveError::NoAnswer)),
            ("slow.example.com", Err(ResolveError::Timeout)),
        ]));

        let resolved = resolve_dns(
            &resolver,
            hosts(&["nx.example.com", "empty.example.com", "slow.example.com"]),
            None,
        )
        .await;

        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_failure_does_not_stop_filtering() {
        let resolver = FixedResolver(HashMap::from([
            ("broken.example.com", Err(ResolveError::Other("io error".into()))),
            ("www.example.com", Ok(())),
        ]));

        let resolved = resolve_dns(
            &resolver,
            hosts(&["broken.example.com", "www.example.com"]),
            None,
        )
        .await;

        assert_eq!(resolved, hosts(&["www.example.com"]));
    }

    #[tokio::test]
    async fn test_output_is_subset_of_input() {
        let resolver = FixedResolver(HashMap::from([
            ("a.example.com", Ok(())),
            ("not-asked.example.com", Ok(())),
        ]));
        let input = hosts(&["a.example.com", "b.example.com"]);

        let resolved = resolve_dns(&resolver, input.clone(), None).await;

        assert!(resolved.iter().all(|h| input.contains(h)));
    }

    #[tokio::test]
    async fn test_progress_advances_per_candidate() {
        let resolver = FixedResolver(HashMap::new());
        let pb = ProgressBar::hidden();

        resolve_dns(&resolver, hosts(&["a", "b", "c"]), Some(&pb)).await;

        assert_eq!(pb.position(), 3);
    }
}

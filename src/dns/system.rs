//! System resolver backed by trust-dns.

use crate::dns::HostResolver;
use crate::error::{ResolveError, ResolveResult};
use async_trait::async_trait;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::error::{ResolveError as DnsError, ResolveErrorKind};
use trust_dns_resolver::proto::op::ResponseCode;
use trust_dns_resolver::TokioAsyncResolver;
use tracing::warn;

/// A-record resolver using the host's DNS configuration.
pub struct SystemResolver {
    resolver: TokioAsyncResolver,
}

impl SystemResolver {
    /// Build a resolver from `/etc/resolv.conf` (or the platform
    /// equivalent), falling back to the library defaults when the system
    /// configuration cannot be read.
    pub fn new() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            warn!(error = %e, "system resolver configuration unavailable, using defaults");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { resolver }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve_a(&self, host: &str) -> ResolveResult<()> {
        let lookup = self
            .resolver
            .ipv4_lookup(host)
            .await
            .map_err(|e| classify_resolve_error(&e))?;

        if lookup.iter().next().is_none() {
            return Err(ResolveError::NoAnswer);
        }
        Ok(())
    }
}

/// Map a trust-dns failure onto the resolution failure classes.
pub fn classify_resolve_error(err: &DnsError) -> ResolveError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                ResolveError::NxDomain
            } else {
                ResolveError::NoAnswer
            }
        }
        ResolveErrorKind::Timeout => ResolveError::Timeout,
        _ => ResolveError::Other(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_timeout() {
        let err = DnsError::from(ResolveErrorKind::Timeout);
        assert_eq!(classify_resolve_error(&err), ResolveError::Timeout);
    }

    #[test]
    fn test_classify_unexpected() {
        let err = DnsError::from(ResolveErrorKind::Message("socket closed"));
        let classified = classify_resolve_error(&err);
        assert!(matches!(classified, ResolveError::Other(_)));
        assert!(!classified.is_expected());
    }
}

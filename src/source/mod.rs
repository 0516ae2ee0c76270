//! Candidate sources - where subdomain names come from.
//!
//! Discovery sits behind the [`CandidateSource`] trait so the pipeline does
//! not depend on any particular provider. The only built-in source is the
//! crt.sh certificate-transparency search.

pub mod crtsh;

pub use crtsh::CrtShSource;

use crate::error::FetchResult;
use crate::types::{CandidateSet, Domain};
use async_trait::async_trait;

/// Trait for subdomain discovery sources.
///
/// # Example
///
/// ```ignore
/// use sublock::source::{CandidateSource, CrtShSource};
///
/// async fn names<S: CandidateSource>(source: &S, domain: &Domain) -> usize {
///     source.fetch(domain).await.map(|set| set.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Short human-readable name of the source, used in messages.
    fn name(&self) -> &str;

    /// Fetch every candidate hostname the source knows for `domain`.
    async fn fetch(&self, domain: &Domain) -> FetchResult<CandidateSet>;
}

//! crt.sh certificate-transparency search.
//!
//! Queries `?q=%.<domain>&output=json`, which returns one JSON object per
//! matching certificate. Only the `name_value` field is used; it holds every
//! name on the certificate, one per line.

use crate::config::settings::{CRT_SH_BASE_URL, FETCH_TIMEOUT, USER_AGENT};
use crate::error::{FetchError, FetchResult, SetupError, SetupResult};
use crate::source::CandidateSource;
use crate::types::{CandidateSet, Domain};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct CrtShEntry {
    name_value: String,
}

/// Candidate source backed by crt.sh (or any service with the same shape).
pub struct CrtShSource {
    client: Client,
    base_url: String,
}

impl CrtShSource {
    /// Create a source pointing at the public crt.sh service.
    pub fn new() -> SetupResult<Self> {
        Self::with_base_url(CRT_SH_BASE_URL)
    }

    /// Create a source pointing at another service honouring the crt.sh
    /// JSON output format.
    pub fn with_base_url(base_url: impl Into<String>) -> SetupResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(SetupError::HttpClient)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build the wildcard query URL for a domain.
    pub fn query_url(&self, domain: &Domain) -> String {
        format!("{}/?q=%25.{}&output=json", self.base_url, domain)
    }
}

#[async_trait]
impl CandidateSource for CrtShSource {
    fn name(&self) -> &str {
        "crt.sh"
    }

    async fn fetch(&self, domain: &Domain) -> FetchResult<CandidateSet> {
        let url = self.query_url(domain);
        debug!(%url, "querying certificate transparency log");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let candidates = parse_name_values(&body)?;
        debug!(count = candidates.len(), "parsed candidate names");
        Ok(candidates)
    }
}

/// Parse a crt.sh JSON body into a candidate set.
pub fn parse_name_values(body: &str) -> FetchResult<CandidateSet> {
    let entries: Vec<CrtShEntry> = serde_json::from_str(body)?;

    let mut candidates = CandidateSet::new();
    for entry in &entries {
        candidates.extend_from_name_field(&entry.name_value);
    }
    Ok(candidates)
}

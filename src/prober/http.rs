//! Plain HTTP status prober.
//!
//! Sends a single `GET http://<host>` and records the status code, or why no
//! status was obtained.

use crate::config::settings::{MAX_REDIRECTS, PROBE_TIMEOUT, USER_AGENT};
use crate::error::{SetupError, SetupResult};
use crate::prober::Prober;
use crate::types::ProbeOutcome;
use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::time::Duration;
use tracing::debug;

/// How a probe treats HTTP redirects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow redirects (up to the given number of hops) and report the final
    /// status.
    Follow(usize),
    /// Report the first response verbatim, including 3xx codes.
    None,
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::Follow(MAX_REDIRECTS)
    }
}

impl From<RedirectPolicy> for redirect::Policy {
    fn from(policy: RedirectPolicy) -> Self {
        match policy {
            RedirectPolicy::Follow(max) => redirect::Policy::limited(max),
            RedirectPolicy::None => redirect::Policy::none(),
        }
    }
}

/// Configuration for HTTP probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Redirect handling.
    pub redirects: RedirectPolicy,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
            redirects: RedirectPolicy::default(),
        }
    }
}

impl ProbeConfig {
    /// Create a probe configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the redirect policy.
    pub fn with_redirects(mut self, redirects: RedirectPolicy) -> Self {
        self.redirects = redirects;
        self
    }
}

/// HTTP status prober.
///
/// Holds one shared `reqwest` client, so all probes reuse its connection
/// pool.
pub struct HttpProber {
    client: Client,
    config: ProbeConfig,
}

impl HttpProber {
    /// Create a prober with the default 3 second timeout.
    pub fn new() -> SetupResult<Self> {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a prober from an explicit configuration.
    pub fn with_config(config: ProbeConfig) -> SetupResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .redirect(config.redirects.into())
            .build()
            .map_err(SetupError::HttpClient)?;

        Ok(Self { client, config })
    }

    /// The configuration this prober was built with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, host: &str) -> ProbeOutcome {
        let url = format!("http://{}", host);

        match self.client.get(&url).send().await {
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(e) => {
                let outcome = classify_error(&e);
                debug!(%host, error = %e, %outcome, "probe failed");
                outcome
            }
        }
    }
}

/// Map a client error onto a probe outcome.
///
/// Timeouts are checked first: a connect that times out reports both
/// conditions. Everything else, from refused connections to redirect loops,
/// counts as a failed connection.
pub fn classify_error(err: &reqwest::Error) -> ProbeOutcome {
    if err.is_timeout() {
        ProbeOutcome::TimedOut
    } else {
        ProbeOutcome::ConnectionFailed
    }
}

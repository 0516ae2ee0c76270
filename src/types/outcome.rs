//! Probe outcomes and the ordered report built from them.

use std::fmt;

/// Result of probing a single host over HTTP.
///
/// Exactly one variant is produced per probed host; a failed probe is a
/// valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// The host answered with this HTTP status code.
    Status(u16),
    /// The connection could not be established or the exchange failed.
    ConnectionFailed,
    /// No response within the probe timeout.
    TimedOut,
}

impl ProbeOutcome {
    /// True for 2xx status codes only.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Status(code) if (200..300).contains(code))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "{}", code),
            Self::ConnectionFailed => write!(f, "Connection Failed"),
            Self::TimedOut => write!(f, "Timeout"),
        }
    }
}

/// One line of the report: a host and how its probe ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub host: String,
    pub outcome: ProbeOutcome,
}

impl ReportEntry {
    /// Create a new report entry.
    pub fn new(host: impl Into<String>, outcome: ProbeOutcome) -> Self {
        Self {
            host: host.into(),
            outcome,
        }
    }
}

/// Probe results for every resolved host, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Create a report from entries already in submission order.
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of hosts that answered with a 2xx status.
    pub fn success_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_success()).count()
    }

    /// Look up the outcome recorded for a host.
    pub fn outcome_for(&self, host: &str) -> Option<ProbeOutcome> {
        self.entries
            .iter()
            .find(|e| e.host == host)
            .map(|e| e.outcome)
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

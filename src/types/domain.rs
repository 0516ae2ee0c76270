//! The root domain being searched.

use std::fmt;
use std::str::FromStr;

/// A root domain to search for subdomains (e.g. `example.com`).
///
/// Only emptiness is checked. Anything else the upstream service does not
/// recognise simply produces no candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Create a domain, trimming whitespace and one trailing dot.
    pub fn new(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();
        let s = s.strip_suffix('.').unwrap_or(s);
        if s.is_empty() {
            return Err(DomainError::Empty);
        }
        Ok(Self(s.to_string()))
    }

    /// Get the domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error type for domain parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("domain must not be empty")]
    Empty,
}

//! Candidate hostnames discovered from certificate records.

use std::collections::BTreeSet;

/// A deduplicated, sorted set of candidate hostnames.
///
/// Backed by a `BTreeSet`, so iteration is always in sorted order and
/// downstream stages see a deterministic sequence. Empty names are never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    names: BTreeSet<String>,
}

impl CandidateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single name. Whitespace is trimmed; blank names are ignored.
    ///
    /// Returns `true` if the name was not already present.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.names.insert(name.to_string())
    }

    /// Insert every name of a certificate name field.
    ///
    /// A single field may aggregate several Subject Alternative Names, one
    /// per line.
    pub fn extend_from_name_field(&mut self, field: &str) {
        for line in field.lines() {
            self.insert(line);
        }
    }

    /// Number of unique names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no names were found.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Consume the set into a sorted vector.
    pub fn into_sorted_vec(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

//! Core type definitions using newtype patterns for type safety.
//!
//! These types carry the data between pipeline stages: the searched
//! [`Domain`], the discovered [`CandidateSet`], and the final [`Report`].

mod candidates;
mod domain;
mod outcome;

pub use candidates::CandidateSet;
pub use domain::{Domain, DomainError};
pub use outcome::{ProbeOutcome, Report, ReportEntry};

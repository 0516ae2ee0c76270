//! Configuration for sublock.
//!
//! Holds the built-in defaults (timeouts, worker count, lookup service URL)
//! and the builder-style [`PipelineConfig`].

pub mod settings;

pub use settings::PipelineConfig;

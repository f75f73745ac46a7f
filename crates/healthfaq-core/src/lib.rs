//! Shared language enum, configuration and error types for HealthFAQ.

pub mod config;
pub mod error;
pub mod language;

pub use config::{DataPaths, HealthFaqConfig, PipelineMode};
pub use error::{Error, Result};
pub use language::Language;

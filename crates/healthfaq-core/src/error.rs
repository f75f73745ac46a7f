//! Error types for HealthFAQ.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for Outlay
//!
//! The analytics engine itself never fails. These errors come from the
//! surrounding layers: loading transactions and reading configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Transaction source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, Error>;

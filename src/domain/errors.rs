//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Data provider error: {0}")]
    DataProvider(String),

    /// A record arrived in a shape the core cannot use (e.g. non-numeric weekday).
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}

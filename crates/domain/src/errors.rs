//! Error types used outside the request pipeline
//!
//! Gateway failures are classified separately (see `labelprint-core`); this
//! enum covers configuration, storage and other local faults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for LabelPrint
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LabelPrintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for LabelPrint operations
pub type Result<T> = std::result::Result<T, LabelPrintError>;

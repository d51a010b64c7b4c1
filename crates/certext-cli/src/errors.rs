//! CLI error type.

use certext_codec::{DecodeError, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {source_name}: {source}")]
    Io {
        source_name: String,
        source: std::io::Error,
    },
    #[error("input is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("input is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid value: {0}")]
    Validation(#[from] ValidationError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown display name '{0}'")]
    UnknownDisplayName(String),
}

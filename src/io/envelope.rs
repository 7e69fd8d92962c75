//! JSON output envelope for `--json` mode.
//!
//! One envelope shape for success and failure, designed for Unix piping:
//! stdout carries exactly one JSON object per invocation.

use serde::{Deserialize, Serialize};

use super::exit_code::ExitCode;

/// Schema version for this envelope format.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Operation outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Error,
}

/// Machine-readable result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Ok,
    ParseError,
    ConfigError,
}

/// Unified JSON output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = serde_json::Value> {
    /// Operation outcome
    pub status: Status,

    /// Machine-readable result code
    pub code: ResultCode,

    /// Unix exit code (0-255)
    pub exit_code: u8,

    /// Human-readable message
    pub message: String,

    /// Result payload (null on error)
    pub data: Option<T>,

    /// Schema version (semver)
    pub schema_version: String,
}

/// Payload for a computed result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeData {
    /// The second distinct maximum (or the `0` sentinel)
    pub result: f64,

    /// How many tokens were supplied
    pub input_count: usize,
}

impl<T> Envelope<T> {
    /// Create a success envelope with data.
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            code: ResultCode::Ok,
            exit_code: ExitCode::Success.code(),
            message: "ok".to_string(),
            data: Some(data),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Create an error envelope with no data.
    pub fn error(code: ResultCode, exit_code: ExitCode, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            code,
            exit_code: exit_code.code(),
            message: message.into(),
            data: None,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }
}

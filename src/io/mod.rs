//! Input/Output handling for the CLI.
//!
//! Provides:
//! - Unified output formatting (text, JSON)
//! - Consistent exit codes

pub mod envelope;
pub mod exit_code;

pub use envelope::{ComputeData, Envelope, ResultCode, SCHEMA_VERSION, Status};
pub use exit_code::ExitCode;

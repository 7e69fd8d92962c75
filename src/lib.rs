//! Second distinct maximum of a numeric sequence.
//!
//! The core contract lives in [`compute::second_distinct_max`]; everything
//! else is the CLI wrapper around it: token validation, configuration,
//! logging, and output formatting.

pub mod cli;
pub mod compute;
pub mod config;
pub mod io;
pub mod logging;
pub mod parse;

pub use compute::second_distinct_max;
pub use config::Settings;
pub use parse::{ParseError, ParseResult, parse_tokens};

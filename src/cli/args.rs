//! CLI argument parsing using clap.

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Second distinct maximum of a list of numbers
#[derive(Parser, Debug)]
#[command(
    name = "secondmax",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print the second-largest distinct value of the given numbers",
    long_about = "Print the second-largest value among the distinct values given.\n\
                  Prints 0 when no second distinct value exists (fewer than two\n\
                  arguments, or all arguments equal).",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Numeric tokens to evaluate
    #[arg(value_name = "TOKENS", allow_negative_numbers = true)]
    pub tokens: Vec<String>,

    /// Emit a JSON envelope instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Path to a custom settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_and_flags() {
        let cli = Cli::parse_from(["secondmax", "--json", "10", "10", "3", "7"]);
        assert!(cli.json);
        assert_eq!(cli.tokens, vec!["10", "10", "3", "7"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn negative_numbers_are_tokens_not_flags() {
        let cli = Cli::parse_from(["secondmax", "-1", "-5", "-2.5"]);
        assert_eq!(cli.tokens, vec!["-1", "-5", "-2.5"]);
    }
}

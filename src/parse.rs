//! Token parsing for the CLI wrapper.
//!
//! The core computation assumes well-formed numeric input; validating raw
//! tokens is the wrapper's job. Any token that does not parse as a finite
//! decimal number is rejected here with its position, and the core is never
//! invoked with the offending sequence.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("token '{token}' at position {position} is not a number")]
    InvalidToken { token: String, position: usize },

    #[error("token '{token}' at position {position} is not finite")]
    NonFinite { token: String, position: usize },
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Convert raw tokens to numbers using standard decimal parsing.
///
/// Positions in errors are 1-based, matching how a shell user counts
/// arguments. Tokens like `inf` and `NaN` parse as `f64` but are rejected:
/// the comparison contract downstream is only defined for finite values.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> ParseResult<Vec<f64>> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let token = token.as_ref();
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidToken {
                token: token.to_string(),
                position: i + 1,
            })?;
            if !value.is_finite() {
                return Err(ParseError::NonFinite {
                    token: token.to_string(),
                    position: i + 1,
                });
            }
            tracing::debug!(position = i + 1, value, "parsed token");
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_floats_and_negatives() {
        let parsed = parse_tokens(&["10", "-5", "2.5", "1e3"]).unwrap();
        assert_eq!(parsed, vec![10.0, -5.0, 2.5, 1000.0]);
    }

    #[test]
    fn empty_token_list_is_ok() {
        assert_eq!(parse_tokens::<&str>(&[]).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn reports_token_and_position() {
        let err = parse_tokens(&["1", "two", "3"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidToken {
                token: "two".to_string(),
                position: 2,
            }
        );
        assert_eq!(err.to_string(), "token 'two' at position 2 is not a number");
    }

    #[test]
    fn rejects_non_finite_tokens() {
        let err = parse_tokens(&["1", "NaN"]).unwrap_err();
        assert!(matches!(err, ParseError::NonFinite { position: 2, .. }));
        let err = parse_tokens(&["inf", "2"]).unwrap_err();
        assert!(matches!(err, ParseError::NonFinite { position: 1, .. }));
    }
}

//! Second distinct maximum over a numeric sequence.
//!
//! The computation is pure and order-independent: a single scan finds the
//! overall maximum, a second scan finds the largest value strictly below it.

/// Return the second-largest value among the distinct values present.
///
/// Returns `0.0` when no such value exists: fewer than two inputs, or all
/// inputs equal. Duplicate maxima do not count as a second value, so
/// `[5, 5, 3]` yields `3`, not `5`.
///
/// Note the sentinel is ambiguous by inheritance: `0` can mean "no second
/// distinct value" or be a legitimately computed result (`[0, -5]` yields
/// `-5`, but `[3, 3]` and `[1, 0]` both yield `0` for different reasons).
/// Callers that need to tell these apart must inspect the input themselves;
/// the original semantics collapse all of them into `0` and we preserve that.
///
/// Precondition: `values` contains no NaN. Parsing upstream guarantees this
/// for CLI input (see [`crate::parse::parse_tokens`]).
pub fn second_distinct_max(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let max = values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    values
        .iter()
        .copied()
        .filter(|&v| v < max)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

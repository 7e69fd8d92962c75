//! Command execution: parse tokens, run the computation, render output.

use tracing::debug;

use crate::compute::second_distinct_max;
use crate::config::Settings;
use crate::io::{ComputeData, Envelope, ExitCode, ResultCode};
use crate::parse::parse_tokens;

/// Run the computation over raw CLI tokens and print the result.
///
/// With 0 or 1 tokens the original script prints `0` without attempting any
/// parsing, so the sentinel short-circuits ahead of validation here too.
pub fn run(tokens: &[String], settings: &Settings, json_flag: bool) -> ExitCode {
    let json = json_flag || settings.output.json;

    if tokens.len() < 2 {
        debug!(count = tokens.len(), "fewer than two tokens, sentinel result");
        return emit_result(0.0, tokens.len(), json);
    }

    let values = match parse_tokens(tokens) {
        Ok(values) => values,
        Err(e) => {
            if json {
                let envelope: Envelope<ComputeData> =
                    Envelope::error(ResultCode::ParseError, ExitCode::InvalidInput, e.to_string());
                print_envelope(&envelope);
            } else {
                eprintln!("Error: {e}");
            }
            return ExitCode::InvalidInput;
        }
    };

    let result = second_distinct_max(&values);
    debug!(result, count = values.len(), "computed second distinct max");
    emit_result(result, values.len(), json)
}

fn emit_result(result: f64, input_count: usize, json: bool) -> ExitCode {
    if json {
        print_envelope(&Envelope::success(ComputeData {
            result,
            input_count,
        }));
    } else {
        // f64 Display renders integral values without a trailing ".0",
        // matching the original's Number output (7, -2, 2.5).
        println!("{result}");
    }
    ExitCode::Success
}

fn print_envelope(envelope: &Envelope<ComputeData>) {
    match serde_json::to_string_pretty(envelope) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Error serializing output: {e}"),
    }
}

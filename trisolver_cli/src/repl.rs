//! # REPL Loop
//!
//! Reads one command per line, solves it and prints the report. The loop is
//! generic over its input and output so tests can drive it with in-memory
//! buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info};
use trisolver_core::report::format_result;
use trisolver_core::{parse_line, solve, Command, SolverSettings, TriError, TriResult};

/// Printed before each line is read
pub const PROMPT: &str = "-> ";

/// Banner printed once when the session starts
pub fn banner() -> String {
    format!("TriSolver {}", env!("CARGO_PKG_VERSION"))
}

/// Run the session until a quit keyword or end of input.
///
/// Usage mistakes and impossible triangles are reported and the loop
/// continues; only I/O failures end it with an error.
pub fn run_repl_with<R, W>(input: &mut R, out: &mut W, settings: &SolverSettings) -> TriResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", banner()).map_err(|e| TriError::io("write banner", &e))?;

    let mut line = String::new();
    loop {
        write!(out, "\n{PROMPT}").map_err(|e| TriError::io("write prompt", &e))?;
        out.flush().map_err(|e| TriError::io("flush output", &e))?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| TriError::io("read line", &e))?;
        if read == 0 {
            info!("end of input");
            break;
        }

        let result = match parse_line(&line) {
            Ok(Command::Quit) => {
                info!("quit keyword received");
                break;
            }
            Ok(Command::Solve(request)) => solve(&request, settings),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            debug!(code = e.error_code(), error = %e, "command rejected");
        }

        let text = format_result(result, settings)?;
        out.write_all(text.as_bytes())
            .map_err(|e| TriError::io("write report", &e))?;
    }

    Ok(())
}

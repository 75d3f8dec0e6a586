//! # Command Parsing
//!
//! Turns one line of user input into a [`Command`]. A line is a mode token
//! followed by three numbers:
//!
//! ```text
//! SSS a b c
//! SAS a gamma b
//! ASA alpha c beta
//! SSA b c beta
//! ```
//!
//! Tokens are case-insensitive and whitespace-separated. Anything after the
//! third number is ignored. A blank line is a usage error with the mode as
//! its missing parameter.
//!
//! ## Example
//!
//! ```rust
//! use trisolver_core::command::{parse_line, Command};
//! use trisolver_core::solvers::Mode;
//!
//! let cmd = parse_line("sss 3 4 5").unwrap();
//! assert_eq!(cmd, Command::Solve(Mode::Sss.input([3.0, 4.0, 5.0])));
//!
//! assert_eq!(parse_line("Bye").unwrap(), Command::Quit);
//! assert!(parse_line("XYZ 1 2 3").unwrap_err().is_usage());
//! ```

use tracing::debug;

use crate::errors::{TriError, TriResult};
use crate::solvers::{Mode, SolveInput};

/// Keywords that end the session (case-insensitive)
pub const QUIT_KEYWORDS: [&str; 3] = ["QUIT", "EXIT", "BYE"];

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A quit keyword
    Quit,
    /// A mode with its three values
    Solve(SolveInput),
}

/// Whether `token` is a quit keyword
pub fn is_quit_keyword(token: &str) -> bool {
    QUIT_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(token))
}

fn parse_number(field: &str, token: Option<&str>) -> TriResult<f64> {
    let token = token.ok_or_else(|| TriError::missing_parameter(field))?;
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TriError::invalid_number(field, token)),
    }
}

/// Parse one line of input.
///
/// # Returns
///
/// * `Ok(Command)` - Quit keyword or a solve request
/// * `Err(TriError)` - Blank line, unknown mode or bad parameters; always a
///   usage error
pub fn parse_line(line: &str) -> TriResult<Command> {
    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Err(TriError::missing_parameter("mode"));
    };

    if is_quit_keyword(head) {
        return Ok(Command::Quit);
    }

    let mode: Mode = head.parse()?;
    let [p1, p2, p3] = mode.parameters();
    let values = [
        parse_number(p1, tokens.next())?,
        parse_number(p2, tokens.next())?,
        parse_number(p3, tokens.next())?,
    ];

    let rest: Vec<&str> = tokens.collect();
    if !rest.is_empty() {
        debug!(ignored = ?rest, "trailing tokens ignored");
    }

    Ok(Command::Solve(mode.input(values)))
}

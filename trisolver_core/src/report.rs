//! # Report Formatting
//!
//! Plain-text rendering of solve results for the terminal. All numbers use
//! fixed-point notation with `SolverSettings::precision` decimals.
//!
//! ## Layout
//!
//! ```text
//! Format: SSS
//! a =   3.000   alpha =     36.870
//! b =   4.000   beta  =     53.130
//! c =   5.000   gamma =     90.000
//! Perimeter =   12.000
//! Area      =    6.000
//! Type      = scalene, right
//! ```
//!
//! The mode name is padded to ten columns and each block ends with a line
//! holding a single space. The SSA alternate solution opens with `--> gamma'` instead of `Format:`.

use crate::errors::{TriError, TriResult};
use crate::settings::SolverSettings;
use crate::solvers::{Mode, SolveOutcome};
use crate::triangle::{Solution, Variant};

/// Printed when the inputs describe no triangle
pub const IMPOSSIBLE_MESSAGE: &str = "Impossible triangle";

/// Column width for numeric fields
const FIELD_WIDTH: usize = 8;

/// The mode name after `Format: ` is left-aligned in this many columns
const HEADER_WIDTH: usize = 10;

/// The hint printed for malformed commands.
///
/// It has no trailing newline; the next prompt starts on a fresh line.
///
/// ```rust
/// let hint = trisolver_core::report::usage_hint();
/// assert!(hint.starts_with("Bad command : Format # # #"));
/// assert!(hint.contains("SSS | SAS | ASA | SSA"));
/// ```
pub fn usage_hint() -> String {
    let modes: Vec<&str> = Mode::ALL.iter().map(Mode::as_str).collect();
    format!(
        "Bad command : Format # # #\nwhere Format = {}\n      # = a real number",
        modes.join(" | ")
    )
}

/// Render one solution, closed by a line holding a single space.
pub fn format_solution(sol: &Solution, precision: usize) -> String {
    let t = &sol.triangle;
    let w = FIELD_WIDTH;
    let p = precision;

    let header = match sol.variant {
        Variant::Primary => format!("Format: {:<HEADER_WIDTH$}", sol.mode.as_str()),
        Variant::GammaPrime => "--> gamma'".to_string(),
    };
    let lines = [
        header,
        format!("a =   {:<w$.p$}alpha =   {:>w$.p$}", t.a, t.alpha.0),
        format!("b =   {:<w$.p$}beta  =   {:>w$.p$}", t.b, t.beta.0),
        format!("c =   {:<w$.p$}gamma =   {:>w$.p$}", t.c, t.gamma.0),
        format!("Perimeter = {:>w$.p$}", sol.perimeter),
        format!("Area      = {:>w$.p$}", sol.area),
        format!("Type      = {:>w$} {}", format!("{},", sol.kind), sol.class),
    ];

    let mut out = lines.join("\n");
    out.push_str("\n \n");
    out
}

/// Render every solution in an outcome, primary first.
pub fn format_outcome(outcome: &SolveOutcome, settings: &SolverSettings) -> String {
    outcome
        .solutions()
        .into_iter()
        .map(|sol| format_solution(sol, settings.precision))
        .collect()
}

/// Render the result of a solve, success or failure.
///
/// Usage errors yield the usage hint; impossible configurations yield
/// [`IMPOSSIBLE_MESSAGE`]. Other errors are returned to the caller.
pub fn format_result(
    result: TriResult<SolveOutcome>,
    settings: &SolverSettings,
) -> TriResult<String> {
    match result {
        Ok(outcome) => Ok(format_outcome(&outcome, settings)),
        Err(e) if e.is_usage() => Ok(usage_hint()),
        Err(TriError::Impossible { .. }) => Ok(format!("{IMPOSSIBLE_MESSAGE}\n")),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::solve;

    fn report(mode: Mode, values: [f64; 3]) -> String {
        let settings = SolverSettings::default();
        format_result(solve(&mode.input(values), &settings), &settings).unwrap()
    }

    #[test]
    fn test_345_report() {
        let expected = concat!(
            "Format: SSS       \n",
            "a =   3.000   alpha =     36.870\n",
            "b =   4.000   beta  =     53.130\n",
            "c =   5.000   gamma =     90.000\n",
            "Perimeter =   12.000\n",
            "Area      =    6.000\n",
            "Type      = scalene, right\n",
            " \n",
        );
        assert_eq!(report(Mode::Sss, [3.0, 4.0, 5.0]), expected);
    }

    #[test]
    fn test_ambiguous_report_has_prime_header() {
        let text = report(Mode::Ssa, [6.0, 8.0, 30.0]);
        assert!(text.starts_with("Format: SSA       \n"));
        assert!(text.contains(" \n--> gamma'\n"));
        assert!(text.ends_with("\n \n"));
        assert_eq!(text.matches("--> gamma'").count(), 1);
        assert_eq!(text.matches("Perimeter").count(), 2);
        assert!(text.contains("gamma =     41.810"));
        assert!(text.contains("gamma =    138.190"));
    }

    #[test]
    fn test_long_type_name() {
        let text = report(Mode::Sss, [2.0, 2.0, 3.5]);
        assert!(text.contains("Type      = isosceles, obtuse\n"));
    }

    #[test]
    fn test_impossible_report() {
        assert_eq!(report(Mode::Asa, [100.0, 5.0, 90.0]), "Impossible triangle\n");
    }

    #[test]
    fn test_precision_setting() {
        let settings = SolverSettings {
            precision: 1,
            ..SolverSettings::default()
        };
        let text = format_result(solve(&Mode::Sss.input([3.0, 4.0, 5.0]), &settings), &settings)
            .unwrap();
        assert!(text.contains("Area      =      6.0\n"));
    }

    #[test]
    fn test_usage_and_fatal_errors() {
        let settings = SolverSettings::default();
        let usage = format_result(Err(TriError::unknown_mode("XYZ")), &settings).unwrap();
        assert_eq!(usage, usage_hint());

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(format_result(Err(TriError::io("read", &io)), &settings).is_err());
    }

    #[test]
    fn test_usage_hint_layout() {
        assert_eq!(
            usage_hint(),
            "Bad command : Format # # #\nwhere Format = SSS | SAS | ASA | SSA\n      # = a real number"
        );
    }
}

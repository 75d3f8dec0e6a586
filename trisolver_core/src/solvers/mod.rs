//! # Triangle Solvers
//!
//! One solver per classical configuration. Each follows the pattern:
//!
//! - `*Input` - The three known values (JSON-serializable)
//! - `solve(input, cmp) -> TriResult<...>` - Pure solving function
//!
//! [`SolveInput`] wraps the four inputs in a tagged enum and [`solve`]
//! dispatches on it.
//!
//! ## Available Solvers
//!
//! - [`sss`] - Three sides
//! - [`sas`] - Two sides and the included angle
//! - [`asa`] - Two angles and the included side
//! - [`ssa`] - Two sides and a non-included angle (ambiguous case)
//!
//! ## Example
//!
//! ```rust
//! use trisolver_core::settings::SolverSettings;
//! use trisolver_core::solvers::{solve, Mode, SolveOutcome};
//!
//! let input = Mode::Sss.input([3.0, 4.0, 5.0]);
//! let outcome = solve(&input, &SolverSettings::default()).unwrap();
//!
//! match outcome {
//!     SolveOutcome::Single(sol) => assert!((sol.area - 6.0).abs() < 1e-9),
//!     SolveOutcome::Ambiguous { .. } => unreachable!("only SSA is ambiguous"),
//! }
//! ```

pub mod asa;
pub mod sas;
pub mod ssa;
pub mod sss;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{TriError, TriResult};
use crate::settings::SolverSettings;
use crate::triangle::Solution;
use crate::units::Degrees;

// Re-export commonly used types
pub use asa::AsaInput;
pub use sas::SasInput;
pub use ssa::SsaInput;
pub use sss::SssInput;

/// Which three values are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Sss,
    Sas,
    Asa,
    Ssa,
}

impl Mode {
    /// Every mode, in the order the usage hint lists them
    pub const ALL: [Mode; 4] = [Mode::Sss, Mode::Sas, Mode::Asa, Mode::Ssa];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Sss => "SSS",
            Mode::Sas => "SAS",
            Mode::Asa => "ASA",
            Mode::Ssa => "SSA",
        }
    }

    /// Names of the three parameters, in input order
    pub fn parameters(&self) -> [&'static str; 3] {
        match self {
            Mode::Sss => ["a", "b", "c"],
            Mode::Sas => ["a", "gamma", "b"],
            Mode::Asa => ["alpha", "c", "beta"],
            Mode::Ssa => ["b", "c", "beta"],
        }
    }

    /// Build the solver input from three values given in parameter order
    pub fn input(&self, values: [f64; 3]) -> SolveInput {
        let [x, y, z] = values;
        match self {
            Mode::Sss => SolveInput::Sss(SssInput { a: x, b: y, c: z }),
            Mode::Sas => SolveInput::Sas(SasInput {
                a: x,
                gamma: Degrees(y),
                b: z,
            }),
            Mode::Asa => SolveInput::Asa(AsaInput {
                alpha: Degrees(x),
                c: y,
                beta: Degrees(z),
            }),
            Mode::Ssa => SolveInput::Ssa(SsaInput {
                b: x,
                c: y,
                beta: Degrees(z),
            }),
        }
    }
}

impl FromStr for Mode {
    type Err = TriError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == upper)
            .ok_or_else(|| TriError::unknown_mode(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known values for one solve, tagged by mode.
///
/// ## JSON Example
///
/// ```json
/// { "mode": "SAS", "a": 3.0, "gamma": 90.0, "b": 4.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "UPPERCASE")]
pub enum SolveInput {
    Sss(SssInput),
    Sas(SasInput),
    Asa(AsaInput),
    Ssa(SsaInput),
}

impl SolveInput {
    pub fn mode(&self) -> Mode {
        match self {
            SolveInput::Sss(_) => Mode::Sss,
            SolveInput::Sas(_) => Mode::Sas,
            SolveInput::Asa(_) => Mode::Asa,
            SolveInput::Ssa(_) => Mode::Ssa,
        }
    }
}

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// Exactly one triangle fits the inputs
    Single(Solution),
    /// SSA ambiguous case: two triangles fit
    Ambiguous {
        primary: Solution,
        alternate: Solution,
    },
}

impl SolveOutcome {
    /// All solutions, primary first
    pub fn solutions(&self) -> Vec<&Solution> {
        match self {
            SolveOutcome::Single(sol) => vec![sol],
            SolveOutcome::Ambiguous { primary, alternate } => vec![primary, alternate],
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> TriResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Solve a triangle from its known values.
///
/// # Returns
///
/// * `Ok(SolveOutcome)` - One triangle, or two for an ambiguous SSA input
/// * `Err(TriError::Impossible)` - No triangle has these values
pub fn solve(input: &SolveInput, settings: &SolverSettings) -> TriResult<SolveOutcome> {
    debug!(mode = %input.mode(), ?input, "solving");
    let cmp = settings.comparison;
    match input {
        SolveInput::Sss(i) => sss::solve(i, cmp).map(SolveOutcome::Single),
        SolveInput::Sas(i) => sas::solve(i, cmp).map(SolveOutcome::Single),
        SolveInput::Asa(i) => asa::solve(i, cmp).map(SolveOutcome::Single),
        SolveInput::Ssa(i) => ssa::solve(i, cmp),
    }
}

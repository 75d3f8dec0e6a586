//! # Solver Settings
//!
//! Knobs shared by every solve: how floating-point equality is judged and how
//! many decimals a report carries. Callers hold a `SolverSettings` and pass it
//! by reference; there is no global state.
//!
//! ## Example
//!
//! ```rust
//! use trisolver_core::settings::{Comparison, SolverSettings};
//!
//! let settings = SolverSettings::default();
//! assert!(settings.comparison.equal(0.1 + 0.2, 0.3));
//!
//! let strict = SolverSettings::strict();
//! assert!(!strict.comparison.equal(0.1 + 0.2, 0.3));
//! ```

use serde::{Deserialize, Serialize};

/// Default tolerance for [`Comparison::Tolerant`]
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Default number of decimals in a report
pub const DEFAULT_PRECISION: usize = 3;

/// How two floating-point quantities are compared for equality.
///
/// Angles and the SSA discriminant live on a fixed scale and go through
/// [`Comparison::equal`]. Side lengths can be any size, so equal sides are
/// judged by [`Comparison::same_length`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Comparison {
    /// Bit-for-bit `==`
    Strict,
    /// `|x - y| <= epsilon * max(1, |x|, |y|)`
    Tolerant { epsilon: f64 },
}

impl Comparison {
    /// Whether `x` and `y` count as equal
    pub fn equal(&self, x: f64, y: f64) -> bool {
        match *self {
            Comparison::Strict => x == y,
            Comparison::Tolerant { epsilon } => {
                let scale = 1.0_f64.max(x.abs()).max(y.abs());
                (x - y).abs() <= epsilon * scale
            }
        }
    }

    /// Whether two lengths count as equal, relative to the longer one.
    ///
    /// Unlike [`Comparison::equal`] there is no absolute floor, so very
    /// small triangles are classified the same as their scaled-up copies.
    pub fn same_length(&self, x: f64, y: f64) -> bool {
        match *self {
            Comparison::Strict => x == y,
            Comparison::Tolerant { epsilon } => {
                (x - y).abs() <= epsilon * x.abs().max(y.abs())
            }
        }
    }

    /// Strictly greater than, with values that compare equal excluded
    pub fn greater(&self, x: f64, y: f64) -> bool {
        x > y && !self.equal(x, y)
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::Tolerant {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Settings applied to every solve and report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverSettings {
    /// Equality rule for angle sums, right angles and equal sides
    pub comparison: Comparison,

    /// Decimal places printed for sides, angles, area and perimeter
    pub precision: usize,
}

impl SolverSettings {
    /// Settings with exact floating-point equality
    pub fn strict() -> Self {
        SolverSettings {
            comparison: Comparison::Strict,
            ..Self::default()
        }
    }
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            comparison: Comparison::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

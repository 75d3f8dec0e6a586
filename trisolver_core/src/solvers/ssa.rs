//! # SSA: Two Sides and a Non-Included Angle
//!
//! The ambiguous case. Given sides `b`, `c` and the angle `beta` opposite
//! `b`, the law of sines gives `sin(gamma)`:
//!
//! ```text
//! D = (c / b)·sin(beta)
//! ```
//!
//! - `D > 1`: the side `b` is too short to reach; no triangle.
//! - `D = 1`: `b` just touches; one right triangle with `gamma = 90°`.
//! - `D < 1`: `gamma = arcsin(D)`. When `b < c`, the supplementary angle
//!   `gamma' = 180° − gamma` may give a second triangle.
//!
//! ```text
//!                  C
//!                 /|\
//!              b / | \ b
//!               /  |  \
//!   ───A───────B'──┴───B────
//!        (gamma')   (gamma)
//! ```
//!
//! When `b ≥ c` the second triangle would need `beta + gamma' ≥ 180°`, so only
//! the first solution is reported.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::law_of_sines_side;
use crate::errors::{TriError, TriResult};
use crate::settings::Comparison;
use crate::solvers::{Mode, SolveOutcome};
use crate::triangle::{Solution, Triangle, Variant};
use crate::units::{Degrees, RIGHT_ANGLE, STRAIGHT_ANGLE};

/// Two sides and the angle opposite the first of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SsaInput {
    pub b: f64,
    pub c: f64,
    pub beta: Degrees,
}

impl SsaInput {
    /// Copy with every value made non-negative
    pub fn normalized(&self) -> Self {
        SsaInput {
            b: self.b.abs(),
            c: self.c.abs(),
            beta: self.beta.abs(),
        }
    }

    /// The sine of gamma implied by the law of sines
    pub fn discriminant(&self) -> f64 {
        (self.c / self.b) * self.beta.sin()
    }
}

/// Build the triangle for a chosen gamma; `a` follows from the law of sines.
fn triangle_for(b: f64, c: f64, beta: Degrees, gamma: Degrees) -> Triangle {
    let alpha = STRAIGHT_ANGLE - beta - gamma;
    Triangle {
        a: law_of_sines_side(b, beta, alpha),
        b,
        c,
        alpha,
        beta,
        gamma,
    }
}

/// Solve from two sides and a non-included angle.
///
/// # Returns
///
/// * `Ok(SolveOutcome::Single)` - One triangle
/// * `Ok(SolveOutcome::Ambiguous)` - Two triangles (`b < c`, `D < 1`)
/// * `Err(TriError::Impossible)` - No triangle
///
/// # Example
///
/// ```rust
/// use trisolver_core::settings::Comparison;
/// use trisolver_core::solvers::ssa::{solve, SsaInput};
/// use trisolver_core::units::Degrees;
///
/// let input = SsaInput { b: 6.0, c: 8.0, beta: Degrees(30.0) };
/// let outcome = solve(&input, Comparison::default()).unwrap();
/// let gammas: Vec<f64> = outcome.solutions().iter().map(|s| s.triangle.gamma.0).collect();
/// assert_eq!(gammas.len(), 2);
/// assert!((gammas[0] + gammas[1] - 180.0).abs() < 1e-9);
/// ```
pub fn solve(input: &SsaInput, cmp: Comparison) -> TriResult<SolveOutcome> {
    let input = input.normalized();
    let SsaInput { b, c, beta } = input;

    if b <= 0.0 || c <= 0.0 {
        return Err(TriError::impossible(
            Mode::Ssa.as_str(),
            format!("sides {b}, {c} must be positive"),
        ));
    }
    if beta.0 <= 0.0 || beta >= STRAIGHT_ANGLE {
        return Err(TriError::impossible(
            Mode::Ssa.as_str(),
            format!("angle beta = {} must lie strictly between 0 and 180", beta.0),
        ));
    }

    let d = input.discriminant();
    debug!(d, "SSA discriminant");

    if cmp.greater(d, 1.0) {
        warn!(d, "side b is too short to close the triangle");
        return Err(TriError::impossible(
            Mode::Ssa.as_str(),
            format!("sin(gamma) = {d} exceeds 1"),
        ));
    }

    if cmp.equal(d, 1.0) {
        debug!("SSA tangent case, gamma = 90");
        let triangle = triangle_for(b, c, beta, RIGHT_ANGLE);
        return Solution::from_triangle(Mode::Ssa, Variant::Primary, triangle, cmp)
            .map(SolveOutcome::Single);
    }

    let gamma = Degrees::asin(d);
    let primary = Solution::from_triangle(
        Mode::Ssa,
        Variant::Primary,
        triangle_for(b, c, beta, gamma),
        cmp,
    )?;

    if b >= c {
        debug!(b, c, "b >= c, obtuse alternative suppressed");
        return Ok(SolveOutcome::Single(primary));
    }

    let gamma_prime = gamma.supplement();
    let alternate = triangle_for(b, c, beta, gamma_prime);
    if !cmp.greater(alternate.alpha.0, 0.0) {
        debug!(alpha = alternate.alpha.0, "gamma' leaves no room for alpha");
        return Ok(SolveOutcome::Single(primary));
    }

    match Solution::from_triangle(Mode::Ssa, Variant::GammaPrime, alternate, cmp) {
        Ok(alternate) => Ok(SolveOutcome::Ambiguous { primary, alternate }),
        Err(e) => {
            debug!(error = %e, "gamma' triangle rejected");
            Ok(SolveOutcome::Single(primary))
        }
    }
}

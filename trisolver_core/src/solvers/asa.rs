//! # ASA: Two Angles and the Included Side
//!
//! Given angles `alpha` and `beta` and the side `c` between them, the third
//! angle is whatever is left of 180°, and the law of sines gives the other
//! two sides:
//!
//! ```text
//! gamma = 180 − alpha − beta
//! a = c·sin(alpha) / sin(gamma)
//! b = c·sin(beta)  / sin(gamma)
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::equations::law_of_sines_side;
use crate::errors::{TriError, TriResult};
use crate::settings::Comparison;
use crate::solvers::Mode;
use crate::triangle::{Solution, Triangle, Variant};
use crate::units::{Degrees, STRAIGHT_ANGLE};

/// Two angles and the side joining their vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsaInput {
    pub alpha: Degrees,
    pub c: f64,
    pub beta: Degrees,
}

impl AsaInput {
    /// Copy with every value made non-negative
    pub fn normalized(&self) -> Self {
        AsaInput {
            alpha: self.alpha.abs(),
            c: self.c.abs(),
            beta: self.beta.abs(),
        }
    }
}

/// Solve from two angles and their included side.
pub fn solve(input: &AsaInput, cmp: Comparison) -> TriResult<Solution> {
    let AsaInput { alpha, c, beta } = input.normalized();
    let gamma = STRAIGHT_ANGLE - alpha - beta;

    if gamma.0 <= 0.0 {
        warn!(alpha = alpha.0, beta = beta.0, "angles leave no room for gamma");
        return Err(TriError::impossible(
            Mode::Asa.as_str(),
            format!("alpha + beta = {} leaves no third angle", (alpha + beta).0),
        ));
    }

    let triangle = Triangle {
        a: law_of_sines_side(c, gamma, alpha),
        b: law_of_sines_side(c, gamma, beta),
        c,
        alpha,
        beta,
        gamma,
    };

    Solution::from_triangle(Mode::Asa, Variant::Primary, triangle, cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangle::{TriangleClass, TriangleType};

    fn run(alpha: f64, c: f64, beta: f64) -> TriResult<Solution> {
        solve(
            &AsaInput { alpha: Degrees(alpha), c, beta: Degrees(beta) },
            Comparison::default(),
        )
    }

    #[test]
    fn test_law_of_sines_ratio() {
        for (alpha, c, beta) in [(30.0, 10.0, 60.0), (45.0, 7.0, 100.0), (20.0, 3.0, 20.0)] {
            let t = run(alpha, c, beta).unwrap().triangle;
            let ratio = t.b / t.a;
            let expected = Degrees(beta).sin() / Degrees(alpha).sin();
            assert!((ratio - expected).abs() < 1e-9, "{alpha} {c} {beta}");
        }
    }

    #[test]
    fn test_30_60_90() {
        let sol = run(30.0, 2.0, 60.0).unwrap();
        let t = sol.triangle;
        assert!((t.gamma.0 - 90.0).abs() < 1e-12);
        assert!((t.a - 1.0).abs() < 1e-9);
        assert!((t.b - 3.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(sol.class, TriangleClass::Right);
    }

    #[test]
    fn test_equal_base_angles_isosceles() {
        let sol = run(50.0, 4.0, 50.0).unwrap();
        assert_eq!(sol.kind, TriangleType::Isosceles);
        assert!((sol.triangle.a - sol.triangle.b).abs() < 1e-12);
    }

    #[test]
    fn test_angles_too_large() {
        assert!(run(100.0, 5.0, 80.0).is_err());
        assert!(run(120.0, 5.0, 90.0).is_err());
    }

    #[test]
    fn test_zero_side() {
        assert!(run(40.0, 0.0, 40.0).is_err());
    }
}

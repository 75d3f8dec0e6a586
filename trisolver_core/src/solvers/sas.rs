//! # SAS: Two Sides and the Included Angle
//!
//! Given sides `a`, `b` and the angle `gamma` between them, the third side
//! comes from the law of cosines, then the remaining angles from the law of
//! cosines exactly as in SSS.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::equations::{law_of_cosines_angle, law_of_cosines_side};
use crate::errors::{TriError, TriResult};
use crate::settings::Comparison;
use crate::solvers::Mode;
use crate::triangle::{Solution, Triangle, Variant};
use crate::units::{Degrees, STRAIGHT_ANGLE};

/// Two sides and the angle they enclose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SasInput {
    pub a: f64,
    pub gamma: Degrees,
    pub b: f64,
}

impl SasInput {
    /// Copy with every value made non-negative
    pub fn normalized(&self) -> Self {
        SasInput {
            a: self.a.abs(),
            gamma: self.gamma.abs(),
            b: self.b.abs(),
        }
    }
}

/// Solve from two sides and their included angle.
pub fn solve(input: &SasInput, cmp: Comparison) -> TriResult<Solution> {
    let SasInput { a, gamma, b } = input.normalized();

    if gamma.0 <= 0.0 || gamma >= STRAIGHT_ANGLE {
        warn!(gamma = gamma.0, "included angle out of range");
        return Err(TriError::impossible(
            Mode::Sas.as_str(),
            format!("included angle {} must lie strictly between 0 and 180", gamma.0),
        ));
    }

    let c = law_of_cosines_side(a, b, gamma);
    let triangle = Triangle {
        a,
        b,
        c,
        alpha: law_of_cosines_angle(a, b, c),
        beta: law_of_cosines_angle(b, c, a),
        gamma,
    };

    Solution::from_triangle(Mode::Sas, Variant::Primary, triangle, cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::sss::{self, SssInput};
    use crate::triangle::TriangleClass;

    fn run(a: f64, gamma: f64, b: f64) -> TriResult<Solution> {
        solve(&SasInput { a, gamma: Degrees(gamma), b }, Comparison::default())
    }

    #[test]
    fn test_right_angle_gives_345() {
        let sol = run(3.0, 90.0, 4.0).unwrap();
        assert!((sol.triangle.c - 5.0).abs() < 1e-9);
        assert_eq!(sol.class, TriangleClass::Right);
        assert!((sol.area - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_matches_sss_on_resulting_sides() {
        for (a, gamma, b) in [(5.0, 40.0, 7.0), (2.0, 120.0, 3.0), (9.0, 75.5, 9.0)] {
            let sas = run(a, gamma, b).unwrap().triangle;
            let sss = sss::solve(
                &SssInput { a: sas.a, b: sas.b, c: sas.c },
                Comparison::default(),
            )
            .unwrap()
            .triangle;
            assert!((sas.alpha.0 - sss.alpha.0).abs() < 1e-9);
            assert!((sas.beta.0 - sss.beta.0).abs() < 1e-9);
            assert!((sas.gamma.0 - sss.gamma.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_values_are_absolute() {
        let sol = run(-3.0, -90.0, 4.0).unwrap();
        assert_eq!(sol.triangle.gamma.0, 90.0);
        assert!((sol.triangle.c - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_angle() {
        assert!(run(3.0, 0.0, 4.0).is_err());
        assert!(run(3.0, 180.0, 4.0).is_err());
        assert!(run(3.0, 250.0, 4.0).is_err());
    }

    #[test]
    fn test_zero_side() {
        assert!(run(0.0, 60.0, 4.0).is_err());
    }
}

//! # SSS: Three Sides
//!
//! Every angle follows from the law of cosines. Sides are taken as absolute
//! values; the triple must satisfy the triangle inequality.
//!
//! ## Example
//!
//! ```rust
//! use trisolver_core::settings::Comparison;
//! use trisolver_core::solvers::sss::{solve, SssInput};
//!
//! let sol = solve(&SssInput { a: 3.0, b: 4.0, c: 5.0 }, Comparison::default()).unwrap();
//! assert!((sol.triangle.gamma.0 - 90.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::equations::{law_of_cosines_angle, satisfies_triangle_inequality};
use crate::errors::{TriError, TriResult};
use crate::settings::Comparison;
use crate::solvers::Mode;
use crate::triangle::{Solution, Triangle, Variant};

/// Three known sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SssInput {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl SssInput {
    /// Copy with every value made non-negative
    pub fn normalized(&self) -> Self {
        SssInput {
            a: self.a.abs(),
            b: self.b.abs(),
            c: self.c.abs(),
        }
    }
}

/// Solve from three sides.
pub fn solve(input: &SssInput, cmp: Comparison) -> TriResult<Solution> {
    let SssInput { a, b, c } = input.normalized();

    if !satisfies_triangle_inequality(a, b, c) {
        warn!(a, b, c, "sides violate the triangle inequality");
        return Err(TriError::impossible(
            Mode::Sss.as_str(),
            format!("sides {a}, {b}, {c} violate the triangle inequality"),
        ));
    }

    let triangle = Triangle {
        a,
        b,
        c,
        alpha: law_of_cosines_angle(a, b, c),
        beta: law_of_cosines_angle(b, c, a),
        gamma: law_of_cosines_angle(c, a, b),
    };

    Solution::from_triangle(Mode::Sss, Variant::Primary, triangle, cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::law_of_cosines_side;
    use crate::triangle::{TriangleClass, TriangleType};

    fn run(a: f64, b: f64, c: f64) -> TriResult<Solution> {
        solve(&SssInput { a, b, c }, Comparison::default())
    }

    #[test]
    fn test_345_right_triangle() {
        let sol = run(3.0, 4.0, 5.0).unwrap();
        let t = sol.triangle;
        assert!((t.alpha.0 - 36.870).abs() < 1e-3);
        assert!((t.beta.0 - 53.130).abs() < 1e-3);
        assert!((t.gamma.0 - 90.0).abs() < 1e-9);
        assert!((sol.area - 6.0).abs() < 1e-9);
        assert!((sol.perimeter - 12.0).abs() < 1e-12);
        assert_eq!(sol.kind, TriangleType::Scalene);
        assert_eq!(sol.class, TriangleClass::Right);
    }

    #[test]
    fn test_angles_sum_to_180() {
        for (a, b, c) in [(5.0, 6.0, 7.0), (2.0, 2.0, 3.5), (10.0, 10.0, 10.0), (1.0, 1.5, 2.4)] {
            let t = run(a, b, c).unwrap().triangle;
            assert!((t.angle_sum().0 - 180.0).abs() < 1e-9, "{a} {b} {c}");
        }
    }

    #[test]
    fn test_law_of_cosines_recovers_sides() {
        let t = run(5.0, 6.0, 7.0).unwrap().triangle;
        assert!((law_of_cosines_side(t.b, t.c, t.alpha) - t.a).abs() < 1e-9);
        assert!((law_of_cosines_side(t.c, t.a, t.beta) - t.b).abs() < 1e-9);
        assert!((law_of_cosines_side(t.a, t.b, t.gamma) - t.c).abs() < 1e-9);
    }

    #[test]
    fn test_equilateral() {
        let sol = run(4.0, 4.0, 4.0).unwrap();
        assert_eq!(sol.kind, TriangleType::Equilateral);
        assert_eq!(sol.class, TriangleClass::Acute);
    }

    #[test]
    fn test_obtuse_isosceles() {
        let sol = run(2.0, 2.0, 3.5).unwrap();
        assert_eq!(sol.kind, TriangleType::Isosceles);
        assert_eq!(sol.class, TriangleClass::Obtuse);
    }

    #[test]
    fn test_tiny_scalene_is_not_equilateral() {
        let sol = run(1e-10, 1.5e-10, 2e-10).unwrap();
        assert_eq!(sol.kind, TriangleType::Scalene);
        assert_eq!(sol.class, TriangleClass::Obtuse);
        assert!((sol.triangle.gamma.0 - 104.478).abs() < 1e-3);

        let sol = run(0.5e-9, 1.2e-9, 1.3e-9).unwrap();
        assert_eq!(sol.kind, TriangleType::Scalene);
        assert_eq!(sol.class, TriangleClass::Right);
    }

    #[test]
    fn test_huge_equilateral() {
        let sol = run(1e200, 1e200, 1e200).unwrap();
        for angle in sol.triangle.angles() {
            assert!((angle.0 - 60.0).abs() < 1e-9);
        }
        assert_eq!(sol.kind, TriangleType::Equilateral);
        assert_eq!(sol.class, TriangleClass::Acute);
        assert!((sol.perimeter / 3e200 - 1.0).abs() < 1e-12);

        let sol = run(3e150, 4e150, 5e150).unwrap();
        assert_eq!(sol.class, TriangleClass::Right);
        assert!((sol.area / 6e300 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_sides_are_absolute() {
        let sol = run(-3.0, 4.0, -5.0).unwrap();
        assert_eq!(sol.triangle.a, 3.0);
        assert_eq!(sol.triangle.c, 5.0);
    }

    #[test]
    fn test_impossible_sides() {
        assert!(run(1.0, 2.0, 10.0).is_err());
        assert!(run(1.0, 2.0, 3.0).is_err());
        assert!(run(0.0, 0.0, 0.0).is_err());
    }
}

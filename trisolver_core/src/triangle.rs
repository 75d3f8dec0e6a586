//! # Triangle Model
//!
//! A fully solved triangle and the quantities derived from it.
//!
//! ## Structure
//!
//! ```text
//! Solution
//! ├── variant: Variant (primary, or the SSA gamma-prime alternate)
//! ├── triangle: Triangle (sides a, b, c; angles alpha, beta, gamma)
//! ├── area, perimeter
//! └── kind: TriangleType, class: TriangleClass
//! ```
//!
//! A `Solution` is only ever built through [`Solution::from_triangle`], which
//! runs the validity checks first. Holding one means the triangle is real.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::equations::{heron_area, perimeter};
use crate::errors::{TriError, TriResult};
use crate::settings::Comparison;
use crate::solvers::Mode;
use crate::units::{Degrees, RIGHT_ANGLE, STRAIGHT_ANGLE};

/// Three sides and three angles. Side `a` faces `alpha`, `b` faces `beta`,
/// `c` faces `gamma`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: Degrees,
    pub beta: Degrees,
    pub gamma: Degrees,
}

impl Triangle {
    /// Sum of the interior angles
    pub fn angle_sum(&self) -> Degrees {
        self.alpha + self.beta + self.gamma
    }

    /// Sides as an array, in a-b-c order
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Angles as an array, in alpha-beta-gamma order
    pub fn angles(&self) -> [Degrees; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Check that this is a real triangle.
    ///
    /// Every side must be positive and finite, every angle positive, and the
    /// angles must sum to 180° under `cmp`.
    pub fn validate(&self, mode: Mode, cmp: Comparison) -> TriResult<()> {
        for (name, side) in ["a", "b", "c"].iter().zip(self.sides()) {
            if !side.is_finite() || side <= 0.0 {
                return Err(TriError::impossible(
                    mode.as_str(),
                    format!("side {name} = {side} is not a positive length"),
                ));
            }
        }
        for (name, angle) in ["alpha", "beta", "gamma"].iter().zip(self.angles()) {
            if !angle.0.is_finite() || angle.0 <= 0.0 {
                return Err(TriError::impossible(
                    mode.as_str(),
                    format!("angle {name} = {} is not positive", angle.0),
                ));
            }
        }
        let sum = self.angle_sum();
        if !cmp.equal(sum.0, STRAIGHT_ANGLE.0) {
            return Err(TriError::impossible(
                mode.as_str(),
                format!("angles sum to {} instead of 180", sum.0),
            ));
        }
        Ok(())
    }
}

/// Classification by side lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleType {
    /// No two sides equal
    Scalene,
    /// Exactly two sides equal
    Isosceles,
    /// All three sides equal
    Equilateral,
}

impl TriangleType {
    /// Classify three side lengths
    pub fn classify(a: f64, b: f64, c: f64, cmp: Comparison) -> Self {
        let (ab, ac, bc) = (
            cmp.same_length(a, b),
            cmp.same_length(a, c),
            cmp.same_length(b, c),
        );
        if !ab && !ac && !bc {
            TriangleType::Scalene
        } else if ab && ac && bc {
            TriangleType::Equilateral
        } else {
            TriangleType::Isosceles
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleType::Scalene => "scalene",
            TriangleType::Isosceles => "isosceles",
            TriangleType::Equilateral => "equilateral",
        }
    }
}

impl fmt::Display for TriangleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification by largest angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleClass {
    /// Every angle below 90°
    Acute,
    /// One angle of 90°
    Right,
    /// One angle above 90°
    Obtuse,
}

impl TriangleClass {
    /// Classify three angles
    pub fn classify(angles: [Degrees; 3], cmp: Comparison) -> Self {
        if angles.iter().any(|angle| cmp.equal(angle.0, RIGHT_ANGLE.0)) {
            TriangleClass::Right
        } else if angles.iter().all(|angle| angle.0 < RIGHT_ANGLE.0) {
            TriangleClass::Acute
        } else {
            TriangleClass::Obtuse
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleClass::Acute => "acute",
            TriangleClass::Right => "right",
            TriangleClass::Obtuse => "obtuse",
        }
    }
}

impl fmt::Display for TriangleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the (at most two) SSA triangles a solution is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The only solution, or the acute-gamma SSA solution
    Primary,
    /// The SSA solution with gamma' = 180 - gamma
    GammaPrime,
}

/// A validated triangle together with its derived quantities.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "SSS",
///   "variant": "primary",
///   "triangle": { "a": 3.0, "b": 4.0, "c": 5.0,
///                 "alpha": 36.87, "beta": 53.13, "gamma": 90.0 },
///   "area": 6.0,
///   "perimeter": 12.0,
///   "kind": "scalene",
///   "class": "right"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub mode: Mode,
    pub variant: Variant,
    pub triangle: Triangle,
    pub area: f64,
    pub perimeter: f64,
    pub kind: TriangleType,
    pub class: TriangleClass,
}

impl Solution {
    /// Validate `triangle` and compute area, perimeter, type and class.
    pub fn from_triangle(
        mode: Mode,
        variant: Variant,
        triangle: Triangle,
        cmp: Comparison,
    ) -> TriResult<Self> {
        triangle.validate(mode, cmp)?;
        let Triangle { a, b, c, .. } = triangle;
        Ok(Solution {
            mode,
            variant,
            triangle,
            area: heron_area(a, b, c),
            perimeter: perimeter(a, b, c),
            kind: TriangleType::classify(a, b, c, cmp),
            class: TriangleClass::classify(triangle.angles(), cmp),
        })
    }
}

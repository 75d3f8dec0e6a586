//! # Unit Types
//!
//! Type-safe wrappers for angles. Users enter and read degrees, while the
//! standard trigonometric functions work in radians; the newtypes keep the two
//! from being mixed up inside the solvers.
//!
//! Conversions multiply by exactly π/180 or 180/π.
//!
//! ## Example
//!
//! ```rust
//! use trisolver_core::units::{Degrees, Radians};
//!
//! let right = Degrees(90.0);
//! let rad: Radians = right.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// A straight angle; the interior angles of a triangle sum to this.
pub const STRAIGHT_ANGLE: Degrees = Degrees(180.0);

/// A right angle.
pub const RIGHT_ANGLE: Degrees = Degrees(90.0);

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0 * (PI / 180.0))
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0 * (180.0 / PI))
    }
}

impl Degrees {
    /// Sine of the angle
    pub fn sin(self) -> f64 {
        Radians::from(self).0.sin()
    }

    /// Cosine of the angle
    pub fn cos(self) -> f64 {
        Radians::from(self).0.cos()
    }

    /// Inverse cosine, returned in degrees. NaN outside [-1, 1].
    pub fn acos(ratio: f64) -> Self {
        Radians(ratio.acos()).into()
    }

    /// Inverse sine, returned in degrees. NaN outside [-1, 1].
    pub fn asin(ratio: f64) -> Self {
        Radians(ratio.asin()).into()
    }

    /// Supplementary angle (180 - self)
    pub fn supplement(self) -> Self {
        STRAIGHT_ANGLE - self
    }

    /// Absolute value of the angle
    pub fn abs(self) -> Self {
        Degrees(self.0.abs())
    }
}

// ============================================================================
// Arithmetic Implementations (angle sums and differences)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }
    };
}

impl_arithmetic!(Degrees);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - PI).abs() < 1e-15);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg: Degrees = Radians(PI).into();
        assert!((deg.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_trig_in_degrees() {
        assert!((Degrees(30.0).sin() - 0.5).abs() < 1e-12);
        assert!((Degrees(60.0).cos() - 0.5).abs() < 1e-12);
        assert!((Degrees::asin(0.5).0 - 30.0).abs() < 1e-9);
        assert!((Degrees::acos(0.0).0 - 90.0).abs() < 1e-12);
        assert!(Degrees::acos(1.5).0.is_nan());
    }

    #[test]
    fn test_arithmetic() {
        let a = Degrees(100.0);
        let b = Degrees(30.0);
        assert_eq!((a + b).0, 130.0);
        assert_eq!((a - b).0, 70.0);
        assert_eq!(b.supplement().0, 150.0);
        assert_eq!(Degrees(-45.0).abs().0, 45.0);
    }

    #[test]
    fn test_serialization() {
        let deg = Degrees(36.5);
        let json = serde_json::to_string(&deg).unwrap();
        assert_eq!(json, "36.5");

        let roundtrip: Degrees = serde_json::from_str(&json).unwrap();
        assert_eq!(deg, roundtrip);
    }
}

//! # Area and Perimeter
//!
//! Both depend only on the three side lengths, so they are computed after
//! a solver has filled in every side.

use super::length_scale;

/// Half the perimeter
#[inline]
pub fn semi_perimeter(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 2.0
}

/// Sum of the three sides
#[inline]
pub fn perimeter(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

/// Area from three sides (Heron's formula)
///
/// # Formula
/// ```text
/// s = (a + b + c) / 2
/// A = √(s(s − a)(s − b)(s − c))
/// ```
///
/// The sides are scaled toward 1 before the product is formed, so the result
/// is finite whenever the true area is.
///
/// # Returns
/// Area in square units of input; NaN for an infeasible triple.
///
/// # Example
/// ```rust
/// use trisolver_core::equations::area::heron_area;
///
/// let area = heron_area(3.0, 4.0, 5.0);
/// assert!((area - 6.0).abs() < 1e-12);
/// ```
#[inline]
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let scale = length_scale(a.abs().max(b.abs()).max(c.abs()));
    let (a, b, c) = (a / scale, b / scale, c / scale);
    let s = semi_perimeter(a, b, c);
    (s * (s - a) * (s - b) * (s - c)).sqrt() * scale * scale
}

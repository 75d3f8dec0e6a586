//! # Trigonometric Relations
//!
//! The law of cosines and the law of sines, in the forms the solvers need.
//!
//! None of these functions validate their inputs. An impossible configuration
//! shows up as NaN or a non-positive value, which the solvers reject.

use super::length_scale;
use crate::units::Degrees;

// =============================================================================
// LAW OF COSINES
// =============================================================================

/// Angle opposite side `opposite`, given all three sides
///
/// ```text
///            /\
///     adj_1 /  \ adj_2
///          / θ  \        ← θ is NOT here; θ faces `opposite`
///         /______\
///         opposite
/// ```
///
/// # Formula
/// θ = arccos((adj₁² + adj₂² − opposite²) / (2·adj₁·adj₂))
///
/// # Arguments
/// * `opposite` - Side facing the angle
/// * `adj_1`, `adj_2` - The two sides enclosing the angle
///
/// # Returns
/// Angle in degrees; NaN when the sides violate the triangle inequality.
///
/// # Example
/// ```rust
/// use trisolver_core::equations::trig::law_of_cosines_angle;
///
/// // 3-4-5 right triangle: the angle facing 5 is 90°
/// let gamma = law_of_cosines_angle(5.0, 3.0, 4.0);
/// assert!((gamma.0 - 90.0).abs() < 1e-12);
/// ```
#[inline]
pub fn law_of_cosines_angle(opposite: f64, adj_1: f64, adj_2: f64) -> Degrees {
    let scale = length_scale(opposite.abs().max(adj_1.abs()).max(adj_2.abs()));
    let (opposite, adj_1, adj_2) = (opposite / scale, adj_1 / scale, adj_2 / scale);
    let cosine = (adj_1 * adj_1 + adj_2 * adj_2 - opposite * opposite) / (2.0 * adj_1 * adj_2);
    Degrees::acos(cosine)
}

/// Side opposite an angle, given the two enclosing sides and the angle
///
/// # Formula
/// c = √(a² + b² − 2ab·cos γ)
///
/// # Example
/// ```rust
/// use trisolver_core::equations::trig::law_of_cosines_side;
/// use trisolver_core::units::Degrees;
///
/// let c = law_of_cosines_side(3.0, 4.0, Degrees(90.0));
/// assert!((c - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn law_of_cosines_side(adj_1: f64, adj_2: f64, included: Degrees) -> f64 {
    let scale = length_scale(adj_1.abs().max(adj_2.abs()));
    let (adj_1, adj_2) = (adj_1 / scale, adj_2 / scale);
    (adj_1 * adj_1 + adj_2 * adj_2 - 2.0 * adj_1 * adj_2 * included.cos()).sqrt() * scale
}

// =============================================================================
// LAW OF SINES
// =============================================================================

/// Side opposite `target`, from a known side/opposite-angle pair
///
/// # Formula
/// x = known_side · sin(target) / sin(known_angle)
///
/// # Arguments
/// * `known_side` - A side whose opposite angle is known
/// * `known_angle` - The angle facing `known_side`
/// * `target` - The angle facing the side to compute
#[inline]
pub fn law_of_sines_side(known_side: f64, known_angle: Degrees, target: Degrees) -> f64 {
    known_side * (target.sin() / known_angle.sin())
}

// =============================================================================
// FEASIBILITY
// =============================================================================

/// Each side is strictly shorter than the sum of the other two
///
/// Degenerate (collinear) triples fail.
#[inline]
pub fn satisfies_triangle_inequality(a: f64, b: f64, c: f64) -> bool {
    a < b + c && b < a + c && c < a + b
}

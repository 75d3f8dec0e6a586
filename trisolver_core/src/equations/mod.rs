//! # Triangle Equations
//!
//! This module contains the trigonometric and geometric relations used by the
//! solvers. Keeping them in one place means every solver computes a given
//! quantity the same way.
//!
//! ## Modules
//!
//! - [`trig`] - Law of cosines and law of sines
//! - [`area`] - Heron's formula and perimeter
//!
//! ## Notation
//!
//! ```text
//!                 C
//!                / \
//!               / γ \
//!            b /     \ a
//!             /       \
//!            / α     β \
//!           A───────────B
//!                 c
//! ```
//!
//! - Side `a` is opposite angle `α` (alpha), `b` opposite `β` (beta),
//!   `c` opposite `γ` (gamma)
//! - Angles are in degrees unless a function says otherwise
//! - Formulas that square side lengths first divide them by a power of two
//!   near the longest side, so any finite triangle stays representable
//!
//! ## References
//!
//! - Law of cosines: c² = a² + b² − 2ab·cos γ
//! - Law of sines: a / sin α = b / sin β = c / sin γ
//! - Heron of Alexandria, *Metrica*, I.8

pub mod area;
pub mod trig;

// Re-export commonly used items
pub use area::{heron_area, perimeter, semi_perimeter};
pub use trig::{
    law_of_cosines_angle,
    law_of_cosines_side,
    law_of_sines_side,
    satisfies_triangle_inequality,
};

/// Power of two at or below `longest`, used to bring side lengths near 1
/// before they are squared.
///
/// Dividing by a power of two is exact, so ordinary inputs give the same bits
/// as the unscaled formula. Zero, subnormal and non-finite values scale by 1.
#[inline]
pub(crate) fn length_scale(longest: f64) -> f64 {
    const EXPONENT_BITS: u64 = 0x7ff0_0000_0000_0000;
    let scale = f64::from_bits(longest.abs().to_bits() & EXPONENT_BITS);
    if scale.is_normal() {
        scale
    } else {
        1.0
    }
}

//! # Stress and Safety Formulas
//!
//! Peak bending and shear stress from section forces, and the yield-based
//! safety factor. Inputs are SI (N, N·m, m², m³); stresses come back in MPa.

use crate::units::{Megapascals, Pascals};

/// Shear distribution factor applied to the average shear stress.
///
/// 1.5 is the peak/average ratio of the parabolic distribution over a
/// rectangle. It is applied to every shape.
pub const SHEAR_DISTRIBUTION_FACTOR: f64 = 1.5;

/// Peak bending stress in MPa
///
/// # Formula
/// σ = M/Z
///
/// # Example
/// ```rust
/// use beam_core::equations::stress::bending_stress_mpa;
///
/// // 10 kN·m on Z = 2e-4 m³ -> 50 MPa
/// assert!((bending_stress_mpa(10_000.0, 2.0e-4) - 50.0).abs() < 1e-9);
/// ```
#[inline]
pub fn bending_stress_mpa(moment_nm: f64, section_modulus_m3: f64) -> f64 {
    Megapascals::from(Pascals(moment_nm / section_modulus_m3)).0
}

/// Peak shear stress in MPa
///
/// # Formula
/// τ = 1.5·V/A
#[inline]
pub fn shear_stress_mpa(shear_n: f64, area_m2: f64) -> f64 {
    Megapascals::from(Pascals(SHEAR_DISTRIBUTION_FACTOR * shear_n / area_m2)).0
}

/// Yield safety factor
///
/// # Formula
/// SF = Fy/σ
///
/// A zero stress gives ∞ and a zero yield strength over zero stress gives
/// NaN; both are returned as-is.
#[inline]
pub fn safety_factor(yield_strength_mpa: f64, normal_stress_mpa: f64) -> f64 {
    yield_strength_mpa / normal_stress_mpa
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bending_stress() {
        assert!((bending_stress_mpa(5_000.0, 1.0e-4) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_shear_stress_uses_parabolic_factor() {
        // 10 kN on 0.01 m² -> 1 MPa average, 1.5 MPa peak
        assert!((shear_stress_mpa(10_000.0, 0.01) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_safety_factor() {
        assert!((safety_factor(250.0, 50.0) - 5.0).abs() < 1e-12);
        assert_eq!(safety_factor(250.0, 0.0), f64::INFINITY);
        assert!(safety_factor(0.0, 0.0).is_nan());
    }
}

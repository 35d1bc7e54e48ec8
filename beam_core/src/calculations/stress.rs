//! Stress & Safety Evaluator
//!
//! Turns the solver's peak moment and shear into stresses for a given
//! section, and compares the bending stress with the material's yield
//! strength.

use serde::{Deserialize, Serialize};

use crate::equations::stress as eq;
use crate::sections::SectionProperties;

/// Peak stresses and the resulting safety factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Bending stress M/Z (MPa)
    pub normal_stress_mpa: f64,
    /// Shear stress 1.5·V/A (MPa)
    pub shear_stress_mpa: f64,
    /// Yield strength over bending stress
    pub safety_factor: f64,
}

/// Evaluate stresses and the yield safety factor.
///
/// Zero stress or zero section values are not special-cased; the
/// resulting ∞/NaN is returned unchanged.
///
/// # Example
/// ```rust
/// use beam_core::calculations::stress::evaluate_stress;
/// use beam_core::sections::CrossSection;
///
/// let section = CrossSection::rectangular(100.0, 200.0).properties();
/// let stress = evaluate_stress(10_000.0, 5_000.0, &section, 250.0);
/// assert!((stress.normal_stress_mpa - 15.0).abs() < 1e-3);
/// ```
pub fn evaluate_stress(
    max_moment_nm: f64,
    max_shear_n: f64,
    section: &SectionProperties,
    yield_strength_mpa: f64,
) -> StressResult {
    let normal_stress_mpa = eq::bending_stress_mpa(max_moment_nm, section.section_modulus_m3);
    StressResult {
        normal_stress_mpa,
        shear_stress_mpa: eq::shear_stress_mpa(max_shear_n, section.area_m2),
        safety_factor: eq::safety_factor(yield_strength_mpa, normal_stress_mpa),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(area_m2: f64, section_modulus_m3: f64) -> SectionProperties {
        SectionProperties {
            area_m2,
            moment_of_inertia_m4: 0.0,
            section_modulus_m3,
        }
    }

    #[test]
    fn test_a36_safety_factor_of_five() {
        // 5 kN·m on Z = 1e-4 m³ -> 50 MPa
        let stress = evaluate_stress(5_000.0, 0.0, &section(0.01, 1.0e-4), 250.0);
        assert!((stress.normal_stress_mpa - 50.0).abs() < 1e-9);
        assert!((stress.safety_factor - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_shear_stress_independent_of_shape() {
        let stress = evaluate_stress(0.0, 20_000.0, &section(0.02, 1.0), 250.0);
        assert!((stress.shear_stress_mpa - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_unloaded_beam_has_infinite_safety_factor() {
        let stress = evaluate_stress(0.0, 0.0, &section(0.01, 1.0e-4), 250.0);
        assert_eq!(stress.normal_stress_mpa, 0.0);
        assert_eq!(stress.safety_factor, f64::INFINITY);
    }

    #[test]
    fn test_zero_section_propagates() {
        let stress = evaluate_stress(1_000.0, 1_000.0, &section(0.0, 0.0), 250.0);
        assert_eq!(stress.normal_stress_mpa, f64::INFINITY);
        assert_eq!(stress.shear_stress_mpa, f64::INFINITY);
        assert_eq!(stress.safety_factor, 0.0);
    }
}

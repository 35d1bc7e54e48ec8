//! # Beam Analysis
//!
//! Runs the full kernel for one beam: reactions and maxima from the
//! solver, section properties, stresses, safety factor and the derived
//! quantities (centroid height, self weight).
//!
//! The analysis never validates its inputs. Degenerate geometry (coincident
//! supports, zero-size sections, zero yield strength) flows through as
//! NaN or infinity and is logged at `warn` level. Call
//! [`BeamInput::validate`](crate::calculations::beam::BeamInput::validate)
//! first when the input comes from a user.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::analysis::analyze;
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::loads::Load;
//! use beam_core::materials::Material;
//! use beam_core::sections::CrossSection;
//!
//! let result = analyze(
//!     &BeamConfig::cantilever(2000.0),
//!     &[Load::point(1000.0, 2000.0)],
//!     &CrossSection::rectangular(100.0, 200.0),
//!     &Material::default(),
//! );
//! assert!((result.reaction_left_n - 1000.0).abs() < 1e-9);
//! assert!((result.max_bending_moment_nm - 2000.0).abs() < 1e-9);
//! assert_eq!(result.reaction_right_n, None);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::calculations::beam::BeamConfig;
use crate::calculations::diagrams::DEFAULT_SAMPLE_COUNT;
use crate::calculations::solver;
use crate::calculations::stress::evaluate_stress;
use crate::loads::Load;
use crate::materials::Material;
use crate::sections::CrossSection;
use crate::units::{mm_to_m, round2, Newtons, GRAVITY_M_S2};

/// How cantilever curves combine several loads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CantileverSampling {
    /// Sum every load's contribution at each station
    #[default]
    Superposed,
    /// Evaluate loads one at a time; the last load in the list wins.
    /// Kept for reproducing older reports.
    Independent,
}

/// Knobs for curve sampling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Stations per curve, including both ends
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Cantilever load combination policy
    #[serde(default)]
    pub cantilever_sampling: CantileverSampling,
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            sample_count: DEFAULT_SAMPLE_COUNT,
            cantilever_sampling: CantileverSampling::default(),
        }
    }
}

/// Results of one beam analysis (full precision)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Left support or fixed-end reaction (N)
    pub reaction_left_n: f64,
    /// Right support reaction (N); absent for cantilevers
    pub reaction_right_n: Option<f64>,
    /// Maximum shear force magnitude (N)
    pub max_shear_force_n: f64,
    /// Maximum bending moment magnitude (N·m)
    pub max_bending_moment_nm: f64,
    /// Bending stress at the extreme fiber (MPa)
    pub max_normal_stress_mpa: f64,
    /// Average-based shear stress, 1.5·V/A (MPa)
    pub max_shear_stress_mpa: f64,
    /// Yield strength over bending stress
    pub safety_factor: f64,
    /// Centroid height above the bottom fiber (mm)
    pub center_of_gravity_mm: f64,
    /// Cross-sectional area (m²)
    pub area_m2: f64,
    /// Moment of inertia (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Elastic section modulus (m³)
    pub section_modulus_m3: f64,
    /// Self weight over the full length (N)
    pub beam_weight_n: f64,
}

impl AnalysisResult {
    /// Copy with every value rounded to two decimals, for display.
    ///
    /// Section properties in m⁴ and m³ round to zero for most real
    /// sections; they are left at full precision.
    pub fn rounded(&self) -> Self {
        AnalysisResult {
            reaction_left_n: round2(self.reaction_left_n),
            reaction_right_n: self.reaction_right_n.map(round2),
            max_shear_force_n: round2(self.max_shear_force_n),
            max_bending_moment_nm: round2(self.max_bending_moment_nm),
            max_normal_stress_mpa: round2(self.max_normal_stress_mpa),
            max_shear_stress_mpa: round2(self.max_shear_stress_mpa),
            safety_factor: round2(self.safety_factor),
            center_of_gravity_mm: round2(self.center_of_gravity_mm),
            beam_weight_n: round2(self.beam_weight_n),
            ..*self
        }
    }

    /// True when every reported value is finite
    pub fn is_finite(&self) -> bool {
        [
            self.reaction_left_n,
            self.reaction_right_n.unwrap_or(0.0),
            self.max_shear_force_n,
            self.max_bending_moment_nm,
            self.max_normal_stress_mpa,
            self.max_shear_stress_mpa,
            self.safety_factor,
            self.beam_weight_n,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Analyze a beam.
///
/// Pure function of its inputs; nothing is cached between calls.
pub fn analyze(
    config: &BeamConfig,
    loads: &[Load],
    cross_section: &CrossSection,
    material: &Material,
) -> AnalysisResult {
    debug!(
        "analyzing {} beam, L = {} mm, {} load(s), {} section, {}",
        config.beam_type.name(),
        config.length_mm,
        loads.len(),
        cross_section.shape_name(),
        material
    );

    let solution = solver::solve(config, loads);
    let section = cross_section.properties();
    let props = material.properties();

    let stress = evaluate_stress(
        solution.max_moment_nm,
        solution.max_shear_n,
        &section,
        props.yield_strength_mpa,
    );

    let mass_kg = props.density_kg_m3 * section.area_m2 * mm_to_m(config.length_mm);
    let beam_weight = Newtons(mass_kg * GRAVITY_M_S2);

    let result = AnalysisResult {
        reaction_left_n: solution.reactions.r1_n,
        reaction_right_n: solution.reactions.r2_n,
        max_shear_force_n: solution.max_shear_n,
        max_bending_moment_nm: solution.max_moment_nm,
        max_normal_stress_mpa: stress.normal_stress_mpa,
        max_shear_stress_mpa: stress.shear_stress_mpa,
        safety_factor: stress.safety_factor,
        center_of_gravity_mm: cross_section.centroid_height_mm(),
        area_m2: section.area_m2,
        moment_of_inertia_m4: section.moment_of_inertia_m4,
        section_modulus_m3: section.section_modulus_m3,
        beam_weight_n: beam_weight.value(),
    };

    // An unloaded beam has an infinite safety factor; that alone is not worth a warning.
    let unloaded = solution.max_moment_nm == 0.0 && result.safety_factor.is_infinite();
    if !result.is_finite() && !unloaded {
        warn!(
            "non-finite analysis result (M = {}, sigma = {}, SF = {}); check supports and section",
            result.max_bending_moment_nm, result.max_normal_stress_mpa, result.safety_factor
        );
    }

    result
}

//! # Beam Configuration and Input
//!
//! [`BeamConfig`] describes the beam itself (length and support
//! arrangement). [`BeamInput`] bundles everything one analysis needs:
//! configuration, loads, cross-section and material.
//!
//! ## Beam Types
//!
//! - **Simple**: pin/roller supports at `left_support_mm` and
//!   `right_support_mm`; the beam may overhang either support
//! - **Cantilever**: fixed at x = 0, free at x = length
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use beam_core::calculations::beam::{BeamConfig, BeamInput};
//! use beam_core::loads::Load;
//! use beam_core::materials::{Material, MaterialGrade};
//! use beam_core::sections::CrossSection;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     config: BeamConfig::simply_supported(4000.0),
//!     loads: vec![Load::point(10_000.0, 2000.0)],
//!     cross_section: CrossSection::rectangular(100.0, 200.0),
//!     material: Material::preset(MaterialGrade::SteelA36),
//! };
//! input.validate().unwrap();
//!
//! let result = input.analyze();
//! assert!((result.reaction_left_n - 5000.0).abs() < 1e-9);
//! assert!((result.max_bending_moment_nm - 10_000.0).abs() < 1e-6);
//! ```
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "B-1",
//!   "config": {
//!     "length_mm": 4000.0,
//!     "beam_type": { "type": "Simple", "left_support_mm": 0.0, "right_support_mm": 4000.0 }
//!   },
//!   "loads": [
//!     { "kind": "Point", "magnitude_n": 10000.0, "position_mm": 2000.0 }
//!   ],
//!   "cross_section": { "shape": "Rectangular", "width_mm": 100.0, "height_mm": 200.0 },
//!   "material": { "type": "Preset", "grade": "A36" }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::analysis::{self, AnalysisOptions, AnalysisResult};
use crate::calculations::diagrams::{self, Curves};
use crate::errors::{CalcError, CalcResult};
use crate::loads::{validate_loads, Load};
use crate::materials::Material;
use crate::sections::CrossSection;

/// Support arrangement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BeamType {
    /// Two vertical supports (pin at left, roller at right)
    Simple {
        left_support_mm: f64,
        right_support_mm: f64,
    },
    /// Fixed at x = 0, free at the far end
    Cantilever,
}

impl BeamType {
    /// Get the beam type as a string
    pub fn name(&self) -> &'static str {
        match self {
            BeamType::Simple { .. } => "Simple",
            BeamType::Cantilever => "Cantilever",
        }
    }
}

/// Beam geometry and supports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Overall beam length (mm)
    pub length_mm: f64,
    /// Support arrangement
    pub beam_type: BeamType,
}

impl BeamConfig {
    /// Simple beam with supports at arbitrary positions
    pub fn simple(length_mm: f64, left_support_mm: f64, right_support_mm: f64) -> Self {
        BeamConfig {
            length_mm,
            beam_type: BeamType::Simple {
                left_support_mm,
                right_support_mm,
            },
        }
    }

    /// Simple beam supported at both ends
    pub fn simply_supported(length_mm: f64) -> Self {
        BeamConfig::simple(length_mm, 0.0, length_mm)
    }

    /// Cantilever fixed at x = 0
    pub fn cantilever(length_mm: f64) -> Self {
        BeamConfig {
            length_mm,
            beam_type: BeamType::Cantilever,
        }
    }

    /// Check length and support ordering: 0 ≤ left < right ≤ length.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.length_mm > 0.0) || !self.length_mm.is_finite() {
            return Err(CalcError::invalid_input(
                "length_mm",
                self.length_mm.to_string(),
                "Beam length must be a positive number",
            ));
        }

        if let BeamType::Simple {
            left_support_mm,
            right_support_mm,
        } = self.beam_type
        {
            if !(0.0..=self.length_mm).contains(&left_support_mm) {
                return Err(CalcError::invalid_input(
                    "left_support_mm",
                    left_support_mm.to_string(),
                    format!("Support must lie on the beam (0 to {} mm)", self.length_mm),
                ));
            }
            if !(0.0..=self.length_mm).contains(&right_support_mm) {
                return Err(CalcError::invalid_input(
                    "right_support_mm",
                    right_support_mm.to_string(),
                    format!("Support must lie on the beam (0 to {} mm)", self.length_mm),
                ));
            }
            if left_support_mm >= right_support_mm {
                return Err(CalcError::invalid_input(
                    "right_support_mm",
                    right_support_mm.to_string(),
                    format!(
                        "Right support must be beyond the left support ({} mm)",
                        left_support_mm
                    ),
                ));
            }
        }

        Ok(())
    }
}

impl Default for BeamConfig {
    fn default() -> Self {
        BeamConfig::simply_supported(1000.0)
    }
}

/// Everything one beam analysis needs.
///
/// Inputs are never mutated by the analysis; change a field and call
/// [`BeamInput::analyze`] again to get fresh results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1", "Crane rail")
    #[serde(default)]
    pub label: String,

    /// Length and supports
    pub config: BeamConfig,

    /// Applied loads (1 to 3)
    pub loads: Vec<Load>,

    /// Cross-section shape and dimensions
    pub cross_section: CrossSection,

    /// Material preset or custom properties
    pub material: Material,
}

impl BeamInput {
    /// Validate input parameters.
    ///
    /// The analysis itself does not call this; invalid geometry there simply
    /// produces NaN or infinite results.
    pub fn validate(&self) -> CalcResult<()> {
        self.config.validate()?;
        validate_loads(&self.loads, self.config.length_mm)?;
        self.cross_section.validate()?;
        self.material.validate()
    }

    /// Run the analysis
    pub fn analyze(&self) -> AnalysisResult {
        analysis::analyze(&self.config, &self.loads, &self.cross_section, &self.material)
    }

    /// Sample shear and moment curves with default options
    pub fn curves(&self) -> Curves {
        self.curves_with(&AnalysisOptions::default())
    }

    /// Sample shear and moment curves with explicit options
    pub fn curves_with(&self, options: &AnalysisOptions) -> Curves {
        diagrams::sample_curves_with(&self.config, &self.loads, options)
    }
}

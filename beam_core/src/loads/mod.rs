//! # Loads
//!
//! Applied loads for beam analysis. A beam carries between one and three
//! loads, each either a concentrated point load or a uniform load over part
//! (or all) of the beam.
//!
//! ## Units
//!
//! - Point load magnitude: N
//! - Uniform load magnitude: N/m
//! - Positions: mm measured from the left end of the beam
//!
//! A positive magnitude acts downward; a negative magnitude reverses the
//! load direction.
//!
//! ## JSON Format
//!
//! ```json
//! { "kind": "Point", "magnitude_n": 5000.0, "position_mm": 1500.0 }
//! { "kind": "Uniform", "magnitude_n_per_m": 2000.0, "start_mm": 0.0, "end_mm": 3000.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::{Load, validate_loads};
//!
//! let loads = vec![
//!     Load::point(5000.0, 1500.0),
//!     Load::uniform(2000.0, 0.0, 3000.0),
//! ];
//! assert!(validate_loads(&loads, 3000.0).is_ok());
//! assert!((loads[1].total_force_n() - 6000.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::mm_to_m;

/// Fewest loads an analysis accepts
pub const MIN_LOADS: usize = 1;

/// Most loads an analysis accepts
pub const MAX_LOADS: usize = 3;

/// A single load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Load {
    /// Concentrated load (N) at a position (mm)
    Point { magnitude_n: f64, position_mm: f64 },

    /// Uniform load (N/m) between two positions (mm)
    Uniform {
        magnitude_n_per_m: f64,
        start_mm: f64,
        end_mm: f64,
    },
}

impl Load {
    /// Create a point load
    pub fn point(magnitude_n: f64, position_mm: f64) -> Self {
        Load::Point {
            magnitude_n,
            position_mm,
        }
    }

    /// Create a uniform load over [start_mm, end_mm]
    pub fn uniform(magnitude_n_per_m: f64, start_mm: f64, end_mm: f64) -> Self {
        Load::Uniform {
            magnitude_n_per_m,
            start_mm,
            end_mm,
        }
    }

    /// Load magnitude as entered (N or N/m)
    pub fn magnitude(&self) -> f64 {
        match self {
            Load::Point { magnitude_n, .. } => *magnitude_n,
            Load::Uniform {
                magnitude_n_per_m, ..
            } => *magnitude_n_per_m,
        }
    }

    /// Start position (mm); the load position for point loads
    pub fn start_mm(&self) -> f64 {
        match self {
            Load::Point { position_mm, .. } => *position_mm,
            Load::Uniform { start_mm, .. } => *start_mm,
        }
    }

    /// End position (mm), present only for uniform loads
    pub fn end_mm(&self) -> Option<f64> {
        match self {
            Load::Point { .. } => None,
            Load::Uniform { end_mm, .. } => Some(*end_mm),
        }
    }

    /// Resultant force in N (uniform: magnitude times loaded length in m)
    pub fn total_force_n(&self) -> f64 {
        match self {
            Load::Point { magnitude_n, .. } => *magnitude_n,
            Load::Uniform {
                magnitude_n_per_m,
                start_mm,
                end_mm,
            } => magnitude_n_per_m * mm_to_m(end_mm - start_mm),
        }
    }

    /// Short description for reports, e.g. "Point 5000.00 N @ 1500.0 mm"
    pub fn describe(&self) -> String {
        match self {
            Load::Point {
                magnitude_n,
                position_mm,
            } => format!("Point {:.2} N @ {:.1} mm", magnitude_n, position_mm),
            Load::Uniform {
                magnitude_n_per_m,
                start_mm,
                end_mm,
            } => format!(
                "Uniform {:.2} N/m from {:.1} to {:.1} mm",
                magnitude_n_per_m, start_mm, end_mm
            ),
        }
    }

    /// Check this load's positions against the beam length.
    ///
    /// `index` is only used to name the offending field.
    pub fn validate(&self, index: usize, length_mm: f64) -> CalcResult<()> {
        if !self.magnitude().is_finite() {
            return Err(CalcError::invalid_input(
                format!("loads[{}].magnitude", index),
                self.magnitude().to_string(),
                "Magnitude must be a finite number",
            ));
        }

        let start = self.start_mm();
        if !(0.0..=length_mm).contains(&start) {
            let field = match self {
                Load::Point { .. } => "position_mm",
                Load::Uniform { .. } => "start_mm",
            };
            return Err(CalcError::invalid_input(
                format!("loads[{}].{}", index, field),
                start.to_string(),
                format!("Position must be within the beam (0 to {} mm)", length_mm),
            ));
        }

        if let Some(end) = self.end_mm() {
            if end <= start || end > length_mm {
                return Err(CalcError::invalid_input(
                    format!("loads[{}].end_mm", index),
                    end.to_string(),
                    format!(
                        "End must be greater than start ({} mm) and at most {} mm",
                        start, length_mm
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Validate a load list: 1..=3 entries, each within the beam.
pub fn validate_loads(loads: &[Load], length_mm: f64) -> CalcResult<()> {
    if loads.len() < MIN_LOADS || loads.len() > MAX_LOADS {
        return Err(CalcError::LoadCount {
            count: loads.len(),
            min: MIN_LOADS,
            max: MAX_LOADS,
        });
    }
    for (index, load) in loads.iter().enumerate() {
        load.validate(index, length_mm)?;
    }
    Ok(())
}

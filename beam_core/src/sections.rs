//! # Cross-Sections
//!
//! Section shapes and their geometric properties. Dimensions are entered in
//! millimeters and converted to meters before the property formulas run,
//! so properties come out in m², m⁴ and m³.
//!
//! ## JSON Format
//!
//! ```json
//! { "shape": "Rectangular", "width_mm": 100.0, "height_mm": 200.0 }
//! { "shape": "IBeam", "flange_width_mm": 100.0, "flange_thickness_mm": 10.0,
//!   "web_thickness_mm": 6.0, "height_mm": 200.0 }
//! { "shape": "Circular", "diameter_mm": 100.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::CrossSection;
//!
//! let props = CrossSection::rectangular(100.0, 200.0).properties();
//! assert!((props.area_m2 - 0.02).abs() < 1e-12);
//! assert!((props.moment_of_inertia_m4 - 6.667e-5).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::section as eq;
use crate::errors::{CalcError, CalcResult};
use crate::units::mm_to_m;

/// Beam cross-section shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum CrossSection {
    /// Solid rectangle
    Rectangular { width_mm: f64, height_mm: f64 },

    /// Doubly symmetric I-beam
    IBeam {
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
        height_mm: f64,
    },

    /// C-channel bending about its strong axis
    CChannel {
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
        height_mm: f64,
    },

    /// Solid round bar
    Circular { diameter_mm: f64 },
}

/// Geometric properties of a cross-section (SI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (m²)
    pub area_m2: f64,
    /// Moment of inertia about the bending axis (m⁴)
    pub moment_of_inertia_m4: f64,
    /// Elastic section modulus (m³)
    pub section_modulus_m3: f64,
}

impl CrossSection {
    /// Create a rectangular section
    pub fn rectangular(width_mm: f64, height_mm: f64) -> Self {
        CrossSection::Rectangular {
            width_mm,
            height_mm,
        }
    }

    /// Create an I-beam section
    pub fn i_beam(
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
        height_mm: f64,
    ) -> Self {
        CrossSection::IBeam {
            flange_width_mm,
            flange_thickness_mm,
            web_thickness_mm,
            height_mm,
        }
    }

    /// Create a C-channel section
    pub fn c_channel(
        flange_width_mm: f64,
        flange_thickness_mm: f64,
        web_thickness_mm: f64,
        height_mm: f64,
    ) -> Self {
        CrossSection::CChannel {
            flange_width_mm,
            flange_thickness_mm,
            web_thickness_mm,
            height_mm,
        }
    }

    /// Create a circular section
    pub fn circular(diameter_mm: f64) -> Self {
        CrossSection::Circular { diameter_mm }
    }

    /// Display name of the shape
    pub fn shape_name(&self) -> &'static str {
        match self {
            CrossSection::Rectangular { .. } => "Rectangular",
            CrossSection::IBeam { .. } => "I-Beam",
            CrossSection::CChannel { .. } => "C-Channel",
            CrossSection::Circular { .. } => "Circular",
        }
    }

    /// Overall depth in the bending plane (mm)
    pub fn depth_mm(&self) -> f64 {
        match self {
            CrossSection::Rectangular { height_mm, .. }
            | CrossSection::IBeam { height_mm, .. }
            | CrossSection::CChannel { height_mm, .. } => *height_mm,
            CrossSection::Circular { diameter_mm } => *diameter_mm,
        }
    }

    /// Height of the centroid above the bottom fiber (mm).
    ///
    /// Every supported shape is symmetric about its bending axis.
    pub fn centroid_height_mm(&self) -> f64 {
        self.depth_mm() / 2.0
    }

    /// Compute area, moment of inertia and section modulus.
    ///
    /// No validation happens here; degenerate dimensions give NaN/∞.
    pub fn properties(&self) -> SectionProperties {
        section_properties(self)
    }

    /// Check that all dimensions are positive and flanges fit the height.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            CrossSection::Rectangular {
                width_mm,
                height_mm,
            } => {
                require_positive("width_mm", width_mm)?;
                require_positive("height_mm", height_mm)
            }
            CrossSection::IBeam {
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
                height_mm,
            }
            | CrossSection::CChannel {
                flange_width_mm,
                flange_thickness_mm,
                web_thickness_mm,
                height_mm,
            } => {
                require_positive("flange_width_mm", flange_width_mm)?;
                require_positive("flange_thickness_mm", flange_thickness_mm)?;
                require_positive("web_thickness_mm", web_thickness_mm)?;
                require_positive("height_mm", height_mm)?;
                if height_mm <= 2.0 * flange_thickness_mm {
                    return Err(CalcError::invalid_input(
                        "height_mm",
                        height_mm.to_string(),
                        format!(
                            "Height must exceed twice the flange thickness ({} mm)",
                            2.0 * flange_thickness_mm
                        ),
                    ));
                }
                Ok(())
            }
            CrossSection::Circular { diameter_mm } => require_positive("diameter_mm", diameter_mm),
        }
    }
}

impl Default for CrossSection {
    fn default() -> Self {
        CrossSection::rectangular(100.0, 200.0)
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    // Written as a negated comparison so NaN is rejected too
    if !(value > 0.0) {
        return Err(CalcError::invalid_input(
            format!("cross_section.{}", field),
            value.to_string(),
            "Dimension must be positive",
        ));
    }
    Ok(())
}

/// Area, moment of inertia and section modulus of a cross-section in SI.
pub fn section_properties(shape: &CrossSection) -> SectionProperties {
    match *shape {
        CrossSection::Rectangular {
            width_mm,
            height_mm,
        } => {
            let b = mm_to_m(width_mm);
            let h = mm_to_m(height_mm);
            let i = eq::rectangular_moment_of_inertia(b, h);
            SectionProperties {
                area_m2: eq::rectangular_area(b, h),
                moment_of_inertia_m4: i,
                section_modulus_m3: eq::section_modulus(i, h / 2.0),
            }
        }
        CrossSection::IBeam {
            flange_width_mm,
            flange_thickness_mm,
            web_thickness_mm,
            height_mm,
        } => {
            let (bf, tf, tw, h) = (
                mm_to_m(flange_width_mm),
                mm_to_m(flange_thickness_mm),
                mm_to_m(web_thickness_mm),
                mm_to_m(height_mm),
            );
            let i = eq::i_beam_moment_of_inertia(bf, tf, tw, h);
            SectionProperties {
                area_m2: eq::flanged_area(bf, tf, tw, h),
                moment_of_inertia_m4: i,
                section_modulus_m3: eq::section_modulus(i, h / 2.0),
            }
        }
        CrossSection::CChannel {
            flange_width_mm,
            flange_thickness_mm,
            web_thickness_mm,
            height_mm,
        } => {
            let (bf, tf, tw, h) = (
                mm_to_m(flange_width_mm),
                mm_to_m(flange_thickness_mm),
                mm_to_m(web_thickness_mm),
                mm_to_m(height_mm),
            );
            let i = eq::c_channel_moment_of_inertia(bf, tf, tw, h);
            SectionProperties {
                area_m2: eq::flanged_area(bf, tf, tw, h),
                moment_of_inertia_m4: i,
                section_modulus_m3: eq::section_modulus(i, h / 2.0),
            }
        }
        CrossSection::Circular { diameter_mm } => {
            let d = mm_to_m(diameter_mm);
            let i = eq::circular_moment_of_inertia(d);
            SectionProperties {
                area_m2: eq::circular_area(d),
                moment_of_inertia_m4: i,
                section_modulus_m3: eq::section_modulus(i, d / 2.0),
            }
        }
    }
}

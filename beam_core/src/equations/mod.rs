//! # Beam Mechanics Equations
//!
//! The closed-form formulas behind the analysis kernel, kept in one place
//! so each can be checked against a reference on its own.
//!
//! ## Modules
//!
//! - [`beam`] - Reactions and section forces for simple and cantilever beams
//! - [`section`] - Cross-section properties (A, I, Z)
//! - [`stress`] - Bending/shear stress and safety factor
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Reactions**: Positive upward
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Net upward force on the free body left of the section

pub mod beam;
pub mod section;
pub mod stress;

pub use section::{
    c_channel_moment_of_inertia,
    circular_area,
    circular_moment_of_inertia,
    flanged_area,
    i_beam_moment_of_inertia,
    rectangular_area,
    rectangular_moment_of_inertia,
    section_modulus,
};

pub use stress::{bending_stress_mpa, safety_factor, shear_stress_mpa};

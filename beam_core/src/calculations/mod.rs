//! # Beam Calculations
//!
//! The analysis kernel. Each stage is a pure function of its inputs:
//!
//! - [`solver`] - Support reactions and scalar shear/moment maxima
//! - [`diagrams`] - Shear and moment curves sampled along the beam
//! - [`stress`] - Bending/shear stress and the yield safety factor
//! - [`analysis`] - Runs all of the above and the derived quantities
//! - [`beam`] - Beam configuration and the input bundle
//!
//! ## LLM Integration
//!
//! All inputs and results are JSON-serializable; validation failures come
//! back as structured [`CalcError`](crate::errors::CalcError) values.

pub mod analysis;
pub mod beam;
pub mod diagrams;
pub mod solver;
pub mod stress;

// Re-export commonly used types
pub use analysis::{analyze, AnalysisOptions, AnalysisResult, CantileverSampling};
pub use beam::{BeamConfig, BeamInput, BeamType};
pub use diagrams::{sample_curves, sample_curves_with, Curves, DEFAULT_SAMPLE_COUNT};
pub use solver::{solve, Reactions, Solution};
pub use stress::{evaluate_stress, StressResult};

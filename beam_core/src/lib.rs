//! # beam_core - Statically Determinate Beam Analysis
//!
//! `beam_core` computes support reactions, shear and moment curves,
//! stresses and a yield safety factor for simple and cantilever beams
//! under point and uniform loads. All inputs and outputs are
//! JSON-serializable, so the engine can sit behind a CLI, a web form or
//! an AI assistant without extra glue.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **SI Throughout**: Geometry in mm at the boundary, N/m/Pa inside
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{BeamConfig, BeamInput, CrossSection, Load, Material, MaterialGrade};
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     config: BeamConfig::simply_supported(6000.0),
//!     loads: vec![Load::uniform(5000.0, 0.0, 6000.0), Load::point(12_000.0, 3000.0)],
//!     cross_section: CrossSection::i_beam(150.0, 10.7, 7.1, 300.0),
//!     material: Material::preset(MaterialGrade::SteelA992),
//! };
//! input.validate()?;
//!
//! let result = input.analyze();
//! let curves = input.curves();
//! assert_eq!(curves.moment.len(), 100);
//! println!("{}", serde_json::to_string_pretty(&result.rounded()).unwrap());
//! # Ok::<(), beam_core::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Solver, curve sampler, stress evaluation, analysis
//! - [`equations`] - Closed-form beam, section and stress formulas
//! - [`loads`] - Point and uniform loads
//! - [`sections`] - Cross-section shapes and their properties
//! - [`materials`] - Preset grades and custom materials
//! - [`project`] - Project container and metadata
//! - [`file_io`] - Atomic project saves and input file loading
//! - [`report`] - Plain-text reports and CSV curves
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod project;
pub mod report;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, sample_curves, AnalysisOptions, AnalysisResult, BeamConfig, BeamInput, BeamType,
    CantileverSampling, Curves,
};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_beam_input, load_project, save_project};
pub use loads::Load;
pub use materials::{Material, MaterialGrade};
pub use project::{Project, ProjectMetadata};
pub use sections::{CrossSection, SectionProperties};

//! # Materials
//!
//! Material definitions for beam analysis. A material is either a preset
//! grade from the built-in table or a custom record supplying the three
//! properties the analysis needs.
//!
//! ## JSON Serialization
//!
//! Materials serialize with a "type" discriminator:
//!
//! ```json
//! { "type": "Preset", "grade": "A36" }
//! { "type": "Custom", "name": "Test alloy", "yield_strength_mpa": 300.0,
//!   "elastic_modulus_gpa": 150.0, "density_kg_m3": 7000.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Material, MaterialGrade};
//!
//! let steel = Material::preset(MaterialGrade::SteelA36);
//! let props = steel.properties();
//! assert_eq!(props.yield_strength_mpa, 250.0);
//! assert_eq!(props.poissons_ratio, Some(0.26));
//! ```

pub mod presets;

pub use presets::{GradeProperties, MaterialGrade};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Gigapascals, Megapascals};

/// Material properties as seen by the analysis
///
/// Poisson's ratio and thermal expansion are only known for preset grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Elastic modulus (GPa)
    pub elastic_modulus_gpa: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Poisson's ratio
    pub poissons_ratio: Option<f64>,
    /// Coefficient of thermal expansion (1/°C)
    pub thermal_expansion_per_c: Option<f64>,
}

impl MaterialProperties {
    /// Elastic modulus as a typed value
    pub fn elastic_modulus(&self) -> Gigapascals {
        Gigapascals(self.elastic_modulus_gpa)
    }

    /// Elastic modulus in the same unit as stresses (MPa)
    pub fn elastic_modulus_mpa(&self) -> f64 {
        Megapascals::from(self.elastic_modulus()).value()
    }
}

/// User-defined material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMaterial {
    /// Free-form name shown in reports
    #[serde(default)]
    pub name: String,
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Elastic modulus (GPa)
    pub elastic_modulus_gpa: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
}

/// Beam material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Material {
    /// Built-in grade
    Preset { grade: MaterialGrade },
    /// Caller-supplied properties
    Custom(CustomMaterial),
}

impl Material {
    /// Create a preset material
    pub fn preset(grade: MaterialGrade) -> Self {
        Material::Preset { grade }
    }

    /// Create a custom material
    pub fn custom(
        name: impl Into<String>,
        yield_strength_mpa: f64,
        elastic_modulus_gpa: f64,
        density_kg_m3: f64,
    ) -> Self {
        Material::Custom(CustomMaterial {
            name: name.into(),
            yield_strength_mpa,
            elastic_modulus_gpa,
            density_kg_m3,
        })
    }

    /// Look up a preset material by grade code
    pub fn from_code(code: &str) -> CalcResult<Self> {
        Ok(Material::preset(code.parse()?))
    }

    /// Get the properties the analysis works with
    pub fn properties(&self) -> MaterialProperties {
        match self {
            Material::Preset { grade } => {
                let p = grade.properties();
                MaterialProperties {
                    yield_strength_mpa: p.yield_strength_mpa,
                    elastic_modulus_gpa: p.elastic_modulus_gpa,
                    density_kg_m3: p.density_kg_m3,
                    poissons_ratio: Some(p.poissons_ratio),
                    thermal_expansion_per_c: Some(p.thermal_expansion_per_c),
                }
            }
            Material::Custom(custom) => MaterialProperties {
                yield_strength_mpa: custom.yield_strength_mpa,
                elastic_modulus_gpa: custom.elastic_modulus_gpa,
                density_kg_m3: custom.density_kg_m3,
                poissons_ratio: None,
                thermal_expansion_per_c: None,
            },
        }
    }

    /// Get display name for this material
    pub fn display_name(&self) -> String {
        match self {
            Material::Preset { grade } => grade.display_name().to_string(),
            Material::Custom(custom) if custom.name.is_empty() => "Custom material".to_string(),
            Material::Custom(custom) => custom.name.clone(),
        }
    }

    /// Check that yield strength, elastic modulus and density are positive.
    pub fn validate(&self) -> CalcResult<()> {
        let props = self.properties();
        let checks = [
            ("yield_strength_mpa", props.yield_strength_mpa),
            ("elastic_modulus_gpa", props.elastic_modulus_gpa),
            ("density_kg_m3", props.density_kg_m3),
        ];
        for (field, value) in checks {
            if !(value > 0.0) {
                return Err(CalcError::invalid_input(
                    format!("material.{}", field),
                    value.to_string(),
                    "Material property must be positive",
                ));
            }
        }
        Ok(())
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::preset(MaterialGrade::SteelA36)
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<MaterialGrade> for Material {
    fn from(grade: MaterialGrade) -> Self {
        Material::preset(grade)
    }
}

impl From<CustomMaterial> for Material {
    fn from(custom: CustomMaterial) -> Self {
        Material::Custom(custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_properties() {
        let props = Material::preset(MaterialGrade::Aluminum6061T6).properties();
        assert_eq!(props.yield_strength_mpa, 276.0);
        assert_eq!(props.density_kg_m3, 2700.0);
        assert_eq!(props.poissons_ratio, Some(0.33));
    }

    #[test]
    fn test_custom_properties() {
        let mat = Material::custom("Test alloy", 300.0, 150.0, 7000.0);
        let props = mat.properties();
        assert_eq!(props.yield_strength_mpa, 300.0);
        assert_eq!(props.elastic_modulus_gpa, 150.0);
        assert_eq!(props.elastic_modulus(), Gigapascals(150.0));
        assert_eq!(props.elastic_modulus_mpa(), 150_000.0);
        assert_eq!(props.poissons_ratio, None);
        assert_eq!(mat.display_name(), "Test alloy");
        assert_eq!(Material::custom("", 1.0, 1.0, 1.0).display_name(), "Custom material");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Material::from_code("a992").unwrap(), Material::preset(MaterialGrade::SteelA992));
        assert!(Material::from_code("mithril").is_err());
    }

    #[test]
    fn test_validate() {
        assert!(Material::default().validate().is_ok());
        assert!(Material::custom("Zero yield", 0.0, 200.0, 7850.0).validate().is_err());
        assert!(Material::custom("No density", 250.0, 200.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_material_serialization() {
        let steel = Material::preset(MaterialGrade::SteelA36);
        let json = serde_json::to_string(&steel).unwrap();
        assert_eq!(json, r#"{"type":"Preset","grade":"A36"}"#);
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(steel, parsed);

        let custom = Material::custom("Test", 300.0, 150.0, 7000.0);
        let json = serde_json::to_string(&custom).unwrap();
        assert!(json.contains("\"type\":\"Custom\""));
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(custom, parsed);
    }

    #[test]
    fn test_default() {
        assert!(matches!(
            Material::default(),
            Material::Preset {
                grade: MaterialGrade::SteelA36
            }
        ));
    }
}

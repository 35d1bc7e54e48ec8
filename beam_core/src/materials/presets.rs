//! Preset Material Grades
//!
//! Nominal properties for common structural metals and one timber grade.
//! Values are typical handbook figures for room temperature.
//!
//! | Grade            | Fy (MPa) | E (GPa) | ρ (kg/m³) | ν     | α (µm/m·°C) |
//! |------------------|----------|---------|-----------|-------|-------------|
//! | A36 steel        | 250      | 200     | 7850      | 0.26  | 11.7        |
//! | A992 steel       | 345      | 200     | 7850      | 0.30  | 11.7        |
//! | Stainless 304    | 215      | 193     | 8000      | 0.29  | 17.3        |
//! | Aluminum 6061-T6 | 276      | 68.9    | 2700      | 0.33  | 23.6        |
//! | Aluminum 7075-T6 | 503      | 71.7    | 2810      | 0.33  | 23.4        |
//! | Ti-6Al-4V        | 880      | 113.8   | 4430      | 0.342 | 8.6         |
//! | Glulam GL24h     | 24       | 11.5    | 420       | 0.30  | 5.0         |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CalcError;

/// Named material grade with a fixed property record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialGrade {
    #[serde(rename = "A36")]
    SteelA36,
    #[serde(rename = "A992")]
    SteelA992,
    #[serde(rename = "SS304")]
    Stainless304,
    #[serde(rename = "6061-T6")]
    Aluminum6061T6,
    #[serde(rename = "7075-T6")]
    Aluminum7075T6,
    #[serde(rename = "Ti-6Al-4V")]
    Titanium6Al4V,
    #[serde(rename = "GL24h")]
    GlulamGl24h,
}

/// Full property record of a preset grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeProperties {
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Elastic modulus (GPa)
    pub elastic_modulus_gpa: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Poisson's ratio
    pub poissons_ratio: f64,
    /// Coefficient of thermal expansion (1/°C)
    pub thermal_expansion_per_c: f64,
}

impl MaterialGrade {
    /// All preset grades for iteration
    pub const ALL: [MaterialGrade; 7] = [
        MaterialGrade::SteelA36,
        MaterialGrade::SteelA992,
        MaterialGrade::Stainless304,
        MaterialGrade::Aluminum6061T6,
        MaterialGrade::Aluminum7075T6,
        MaterialGrade::Titanium6Al4V,
        MaterialGrade::GlulamGl24h,
    ];

    /// Short code used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            MaterialGrade::SteelA36 => "A36",
            MaterialGrade::SteelA992 => "A992",
            MaterialGrade::Stainless304 => "SS304",
            MaterialGrade::Aluminum6061T6 => "6061-T6",
            MaterialGrade::Aluminum7075T6 => "7075-T6",
            MaterialGrade::Titanium6Al4V => "Ti-6Al-4V",
            MaterialGrade::GlulamGl24h => "GL24h",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialGrade::SteelA36 => "Structural Steel (ASTM A36)",
            MaterialGrade::SteelA992 => "Structural Steel (ASTM A992)",
            MaterialGrade::Stainless304 => "Stainless Steel 304",
            MaterialGrade::Aluminum6061T6 => "Aluminum 6061-T6",
            MaterialGrade::Aluminum7075T6 => "Aluminum 7075-T6",
            MaterialGrade::Titanium6Al4V => "Titanium Ti-6Al-4V",
            MaterialGrade::GlulamGl24h => "Glulam Timber GL24h",
        }
    }

    /// Property record for this grade
    pub fn properties(&self) -> GradeProperties {
        let (fy, e, rho, nu, alpha) = match self {
            MaterialGrade::SteelA36 => (250.0, 200.0, 7850.0, 0.26, 11.7e-6),
            MaterialGrade::SteelA992 => (345.0, 200.0, 7850.0, 0.30, 11.7e-6),
            MaterialGrade::Stainless304 => (215.0, 193.0, 8000.0, 0.29, 17.3e-6),
            MaterialGrade::Aluminum6061T6 => (276.0, 68.9, 2700.0, 0.33, 23.6e-6),
            MaterialGrade::Aluminum7075T6 => (503.0, 71.7, 2810.0, 0.33, 23.4e-6),
            MaterialGrade::Titanium6Al4V => (880.0, 113.8, 4430.0, 0.342, 8.6e-6),
            MaterialGrade::GlulamGl24h => (24.0, 11.5, 420.0, 0.30, 5.0e-6),
        };
        GradeProperties {
            yield_strength_mpa: fy,
            elastic_modulus_gpa: e,
            density_kg_m3: rho,
            poissons_ratio: nu,
            thermal_expansion_per_c: alpha,
        }
    }
}

impl std::fmt::Display for MaterialGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MaterialGrade {
    type Err = CalcError;

    /// Parse a grade code, ignoring case ("a36", "6061-t6", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MaterialGrade::ALL
            .iter()
            .copied()
            .find(|grade| grade.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::material_not_found(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a36_properties() {
        let props = MaterialGrade::SteelA36.properties();
        assert_eq!(props.yield_strength_mpa, 250.0);
        assert_eq!(props.elastic_modulus_gpa, 200.0);
        assert_eq!(props.density_kg_m3, 7850.0);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("A36".parse::<MaterialGrade>().unwrap(), MaterialGrade::SteelA36);
        assert_eq!(" 6061-t6 ".parse::<MaterialGrade>().unwrap(), MaterialGrade::Aluminum6061T6);
        let err = "unobtainium".parse::<MaterialGrade>().unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_codes_roundtrip_through_serde() {
        for grade in MaterialGrade::ALL {
            let json = serde_json::to_string(&grade).unwrap();
            assert_eq!(json, format!("\"{}\"", grade.code()));
            assert_eq!(grade.code().parse::<MaterialGrade>().unwrap(), grade);
        }
    }

    #[test]
    fn test_all_grades_physical() {
        for grade in MaterialGrade::ALL {
            let p = grade.properties();
            assert!(p.yield_strength_mpa > 0.0, "{}", grade);
            assert!(p.density_kg_m3 > 0.0, "{}", grade);
            assert!(p.poissons_ratio > 0.0 && p.poissons_ratio < 0.5, "{}", grade);
        }
    }
}

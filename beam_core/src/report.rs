//! # Text Reports
//!
//! Plain-text calculation reports and CSV export of sampled curves.
//!
//! ## Architecture
//!
//! - The report layout is an embedded template string
//! - Data is injected by placeholder replacement
//! - Numbers are rounded to two decimals here and nowhere earlier
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{BeamConfig, BeamInput};
//! use beam_core::loads::Load;
//! use beam_core::report::render_text;
//!
//! let input = BeamInput {
//!     label: "B-1".to_string(),
//!     config: BeamConfig::simply_supported(4000.0),
//!     loads: vec![Load::point(10_000.0, 2000.0)],
//!     cross_section: Default::default(),
//!     material: Default::default(),
//! };
//! let report = render_text(&input, &input.analyze(), "John Engineer", "25-001");
//! assert!(report.contains("Max Bending Moment"));
//! assert!(report.contains("10000.00"));
//! ```

use std::fmt::Write;

use chrono::Utc;

use crate::calculations::beam::{BeamInput, BeamType};
use crate::calculations::{AnalysisResult, Curves};
use crate::project::Project;
use crate::sections::CrossSection;

/// Report layout for a single beam
const BEAM_TEMPLATE: &str = "\
==============================================================
 BEAM ANALYSIS: {{BEAM_LABEL}}
==============================================================
 Engineer: {{ENGINEER}}
 Job ID:   {{JOB_ID}}
 Date:     {{DATE}}
--------------------------------------------------------------
 INPUT
--------------------------------------------------------------
 Beam Type        {{BEAM_TYPE}}
 Length           {{LENGTH}} mm
{{SUPPORTS}} Section          {{SECTION}}
 Material         {{MATERIAL}}
 Elastic Modulus  {{ELASTIC}} MPa
 Loads
{{LOADS}}--------------------------------------------------------------
 SECTION PROPERTIES
--------------------------------------------------------------
 Area                      {{AREA}} m²
 Moment of Inertia         {{INERTIA}} m⁴
 Section Modulus           {{MODULUS}} m³
 Center of Gravity         {{CG}} mm
 Beam Weight               {{WEIGHT}} N
--------------------------------------------------------------
 RESULTS
--------------------------------------------------------------
{{REACTIONS}} Max Shear Force           {{SHEAR}} N
 Max Bending Moment        {{MOMENT}} N·m
 Max Normal Stress         {{SIGMA}} MPa
 Max Shear Stress          {{TAU}} MPa
 Safety Factor (yield)     {{SF}}
==============================================================
";

/// Render a plain-text report for one analyzed beam.
///
/// `result` should come from `input.analyze()`; the report does not
/// re-run the analysis.
pub fn render_text(input: &BeamInput, result: &AnalysisResult, engineer: &str, job_id: &str) -> String {
    let supports = match input.config.beam_type {
        BeamType::Simple {
            left_support_mm,
            right_support_mm,
        } => format!(
            " Supports         {:.1} mm / {:.1} mm\n",
            left_support_mm, right_support_mm
        ),
        BeamType::Cantilever => " Supports         fixed at 0 mm\n".to_string(),
    };

    let loads = input.loads.iter().enumerate().fold(String::new(), |mut out, (i, load)| {
        let _ = writeln!(out, "   {}. {}", i + 1, load.describe());
        out
    });

    let reactions = match result.reaction_right_n {
        Some(right) => format!(
            " Reaction R1               {:.2} N\n Reaction R2               {:.2} N\n",
            result.reaction_left_n, right
        ),
        None => format!(" Reaction R1               {:.2} N\n", result.reaction_left_n),
    };

    BEAM_TEMPLATE
        .replace("{{BEAM_LABEL}}", display_label(&input.label))
        .replace("{{ENGINEER}}", engineer)
        .replace("{{JOB_ID}}", job_id)
        .replace("{{DATE}}", &Utc::now().format("%Y-%m-%d %H:%M UTC").to_string())
        .replace("{{BEAM_TYPE}}", input.config.beam_type.name())
        .replace("{{LENGTH}}", &format!("{:.1}", input.config.length_mm))
        .replace("{{SUPPORTS}}", &supports)
        .replace("{{SECTION}}", &describe_section(&input.cross_section))
        .replace("{{MATERIAL}}", &input.material.display_name())
        .replace(
            "{{ELASTIC}}",
            &format!("{:.0}", input.material.properties().elastic_modulus_mpa()),
        )
        .replace("{{LOADS}}", &loads)
        .replace("{{AREA}}", &format!("{:.4e}", result.area_m2))
        .replace("{{INERTIA}}", &format!("{:.4e}", result.moment_of_inertia_m4))
        .replace("{{MODULUS}}", &format!("{:.4e}", result.section_modulus_m3))
        .replace("{{CG}}", &format!("{:.2}", result.center_of_gravity_mm))
        .replace("{{WEIGHT}}", &format!("{:.2}", result.beam_weight_n))
        .replace("{{REACTIONS}}", &reactions)
        .replace("{{SHEAR}}", &format!("{:.2}", result.max_shear_force_n))
        .replace("{{MOMENT}}", &format!("{:.2}", result.max_bending_moment_nm))
        .replace("{{SIGMA}}", &format!("{:.2}", result.max_normal_stress_mpa))
        .replace("{{TAU}}", &format!("{:.2}", result.max_shear_stress_mpa))
        .replace("{{SF}}", &format!("{:.2}", result.safety_factor))
}

/// Render every beam of a project, sorted by label.
pub fn render_project_text(project: &Project) -> String {
    let mut out = format!(
        "Project {} for {} ({} beams)\n\n",
        project.meta.job_id,
        project.meta.client,
        project.item_count()
    );
    for (_, input, result) in project.analyze_all() {
        out.push_str(&render_text(input, &result, &project.meta.engineer, &project.meta.job_id));
        out.push('\n');
    }
    out
}

/// Export sampled curves as CSV: `position_mm,shear_n,moment_nm`.
///
/// Both curves are expected to share the same stations, as produced by
/// the curve sampler.
pub fn curves_to_csv(curves: &Curves) -> String {
    let mut out = String::from("position_mm,shear_n,moment_nm\n");
    for ((x, shear), (_, moment)) in curves.shear.iter().zip(&curves.moment) {
        let _ = writeln!(out, "{:.2},{:.2},{:.2}", x, shear, moment);
    }
    out
}

fn display_label(label: &str) -> &str {
    if label.is_empty() {
        "(unnamed)"
    } else {
        label
    }
}

fn describe_section(section: &CrossSection) -> String {
    match *section {
        CrossSection::Rectangular {
            width_mm,
            height_mm,
        } => format!("Rectangular {:.1} x {:.1} mm", width_mm, height_mm),
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
        } => format!(
            "{} h={:.1} bf={:.1} tf={:.1} tw={:.1} mm",
            section.shape_name(),
            height_mm,
            flange_width_mm,
            flange_thickness_mm,
            web_thickness_mm
        ),
        CrossSection::Circular { diameter_mm } => format!("Circular d={:.1} mm", diameter_mm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::beam::BeamConfig;
    use crate::loads::Load;
    use crate::materials::{Material, MaterialGrade};

    fn cantilever() -> BeamInput {
        BeamInput {
            label: String::new(),
            config: BeamConfig::cantilever(2000.0),
            loads: vec![Load::point(1000.0, 2000.0), Load::uniform(250.0, 0.0, 1000.0)],
            cross_section: CrossSection::i_beam(100.0, 8.0, 5.0, 160.0),
            material: Material::preset(MaterialGrade::Titanium6Al4V),
        }
    }

    #[test]
    fn test_report_contents() {
        let input = cantilever();
        let report = render_text(&input, &input.analyze(), "Jane", "25-007");

        assert!(report.contains("BEAM ANALYSIS: (unnamed)"));
        assert!(report.contains("Jane"));
        assert!(report.contains("Cantilever"));
        assert!(report.contains("fixed at 0 mm"));
        assert!(report.contains("1. Point 1000.00 N @ 2000.0 mm"));
        assert!(report.contains("2. Uniform 250.00 N/m"));
        assert!(report.contains("IBeam h=160.0"));
        // R1 = 1000 + 250 * 1
        assert!(report.contains("Reaction R1               1250.00 N"));
        assert!(!report.contains("Reaction R2"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn test_simple_report_lists_both_reactions() {
        let input = BeamInput {
            label: "B-9".to_string(),
            config: BeamConfig::simple(5000.0, 1000.0, 4000.0),
            loads: vec![Load::point(3000.0, 2500.0)],
            cross_section: CrossSection::circular(80.0),
            material: Material::default(),
        };
        let report = render_text(&input, &input.analyze(), "", "");
        assert!(report.contains("Supports         1000.0 mm / 4000.0 mm"));
        assert!(report.contains("Reaction R2               1500.00 N"));
        // A36: 200 GPa
        assert!(report.contains("Elastic Modulus  200000 MPa"));
    }

    #[test]
    fn test_project_report() {
        let mut project = Project::new("Jane", "25-007", "Client Co");
        project.add_item(cantilever());
        let report = render_project_text(&project);
        assert!(report.starts_with("Project 25-007 for Client Co (1 beams)"));
        assert!(report.contains("Max Bending Moment"));
    }

    #[test]
    fn test_curves_csv() {
        let input = cantilever();
        let csv = curves_to_csv(&input.curves());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "position_mm,shear_n,moment_nm");
        assert_eq!(lines.len(), 101);
        // Fixed end: V = 1250, M = -(1000 * 2 + 250 * 0.5)
        assert_eq!(lines[1], "0.00,1250.00,-2125.00");
        assert!(lines[100].starts_with("2000.00,1000.00,"));
    }
}

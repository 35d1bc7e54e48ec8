//! # Beam CLI Application
//!
//! Command-line front end for `beam_core`.
//!
//! ```text
//! beam_cli [INPUT.json] [--json] [--report] [--csv PATH] [--legacy-cantilever]
//! ```
//!
//! With no input file the CLI prompts for a span and a midspan point load
//! and analyzes a demo steel beam. Set `RUST_LOG=debug` for kernel logging.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{debug, error};

use beam_core::calculations::{AnalysisOptions, AnalysisResult, BeamConfig, BeamInput, CantileverSampling};
use beam_core::file_io::{load_beam_input, write_text};
use beam_core::loads::Load;
use beam_core::materials::{Material, MaterialGrade};
use beam_core::report::{curves_to_csv, render_text};
use beam_core::sections::CrossSection;
use beam_core::CalcError;

const USAGE: &str = "\
Usage: beam_cli [INPUT.json] [options]

Options:
  --json                 Print results as JSON only
  --report               Print a plain-text calculation report
  --csv PATH             Write sampled shear/moment curves to PATH
  --legacy-cantilever    Sample cantilever curves one load at a time
  -h, --help             Show this help";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    input: Option<PathBuf>,
    json: bool,
    report: bool,
    csv: Option<PathBuf>,
    legacy_cantilever: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--report" => parsed.report = true,
            "--legacy-cantilever" => parsed.legacy_cantilever = true,
            "-h" | "--help" => parsed.help = true,
            "--csv" => {
                let path = args.next().ok_or("--csv requires a file path")?;
                parsed.csv = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            path => {
                if parsed.input.is_some() {
                    return Err(format!("Unexpected extra argument: {}", path));
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(parsed)
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn demo_input() -> BeamInput {
    println!("Beam CLI - Beam Analysis Calculator");
    println!("===================================");
    println!();
    println!("No input file given. Running simple demo...");
    println!();

    let length_mm = prompt_f64("Enter beam length (mm) [4000.0]: ", 4000.0);
    let load_n = prompt_f64("Enter midspan point load (N) [10000.0]: ", 10_000.0);
    println!();

    BeamInput {
        label: "CLI-Demo".to_string(),
        config: BeamConfig::simply_supported(length_mm),
        loads: vec![Load::point(load_n, length_mm / 2.0)],
        cross_section: CrossSection::i_beam(100.0, 8.5, 5.6, 200.0),
        material: Material::preset(MaterialGrade::SteelA36),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), CalcError> {
    let input = match &args.input {
        Some(path) => load_beam_input(path)?,
        None => demo_input(),
    };
    input.validate()?;

    let options = AnalysisOptions {
        cantilever_sampling: if args.legacy_cantilever {
            CantileverSampling::Independent
        } else {
            CantileverSampling::Superposed
        },
        ..AnalysisOptions::default()
    };
    debug!("options: {:?}", options);

    let result = input.analyze();

    if let Some(path) = &args.csv {
        write_curves(&input, &options, path)?;
    }

    if args.json {
        let json = serde_json::to_string_pretty(&result.rounded()).map_err(CalcError::serialization)?;
        println!("{}", json);
        return Ok(());
    }

    if args.report {
        print!("{}", render_text(&input, &result, "", ""));
        return Ok(());
    }

    print_summary(&input, &result);
    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&result.rounded()) {
        println!("{}", json);
    }
    Ok(())
}

fn write_curves(input: &BeamInput, options: &AnalysisOptions, path: &Path) -> Result<(), CalcError> {
    let curves = input.curves_with(options);
    write_text(path, &curves_to_csv(&curves))?;
    println!("Wrote {} curve samples to {}", curves.shear.len(), path.display());
    Ok(())
}

fn print_summary(input: &BeamInput, result: &AnalysisResult) {
    let r = result.rounded();

    println!("═══════════════════════════════════════");
    println!("  BEAM ANALYSIS RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Type:     {}", input.config.beam_type.name());
    println!("  Length:   {:.1} mm", input.config.length_mm);
    println!("  Section:  {}", input.cross_section.shape_name());
    println!("  Material: {}", input.material);
    println!("  E:        {:.0} MPa", input.material.properties().elastic_modulus_mpa());
    for load in &input.loads {
        println!("  Load:     {}", load.describe());
    }
    println!();
    println!("Reactions:");
    println!("  R1 = {:.2} N", r.reaction_left_n);
    if let Some(r2) = r.reaction_right_n {
        println!("  R2 = {:.2} N", r2);
    }
    println!();
    println!("Demand:");
    println!("  V_max = {:.2} N", r.max_shear_force_n);
    println!("  M_max = {:.2} N·m", r.max_bending_moment_nm);
    println!("  σ_max = {:.2} MPa", r.max_normal_stress_mpa);
    println!("  τ_max = {:.2} MPa", r.max_shear_stress_mpa);
    println!();
    println!("Section:");
    println!("  I  = {:.4e} m⁴", r.moment_of_inertia_m4);
    println!("  Z  = {:.4e} m³", r.section_modulus_m3);
    println!("  CG = {:.2} mm", r.center_of_gravity_mm);
    println!("  W  = {:.2} N", r.beam_weight_n);
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  SAFETY FACTOR: {:.2} {}",
        r.safety_factor,
        status_icon(r.safety_factor >= 1.0)
    );
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<CliArgs, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_flags() {
        let parsed = args(&["beam.json", "--json", "--csv", "out.csv", "--legacy-cantilever"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("beam.json")));
        assert!(parsed.json);
        assert!(!parsed.report);
        assert_eq!(parsed.csv, Some(PathBuf::from("out.csv")));
        assert!(parsed.legacy_cantilever);
    }

    #[test]
    fn test_no_args_runs_demo() {
        assert_eq!(args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(args(&["--csv"]).is_err());
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }
}

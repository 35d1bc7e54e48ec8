//! Shear and Moment Curve Sampler
//!
//! Samples the internal shear force and bending moment at evenly spaced
//! stations from x = 0 to x = length. Curves are rebuilt from scratch on
//! every call.
//!
//! Each curve is a `Vec<(position_mm, value)>`; shear values are in N and
//! moment values in N·m.
//!
//! ## Simple Beams
//!
//! Values are superposed: reaction steps switch on once a station reaches
//! their support, point loads subtract their full magnitude once passed,
//! and uniform loads subtract the portion lying left of the station.
//!
//! ## Cantilevers
//!
//! See [`CantileverSampling`]. The default superposes all loads. The
//! `Independent` policy evaluates each load on its own and keeps whatever
//! the last load in the list produced, so earlier loads never show up in
//! the curve.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::BeamConfig;
//! use beam_core::calculations::diagrams::sample_curves;
//! use beam_core::loads::Load;
//!
//! let config = BeamConfig::simply_supported(3000.0);
//! let curves = sample_curves(&config, &[Load::point(900.0, 1500.0)]);
//!
//! assert_eq!(curves.shear.len(), 100);
//! assert_eq!(curves.shear[0], (0.0, 450.0));
//! assert_eq!(curves.moment.last().unwrap().0, 3000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::analysis::{AnalysisOptions, CantileverSampling};
use crate::calculations::beam::{BeamConfig, BeamType};
use crate::calculations::solver::{self, simple_moment_at, simple_shear_at, Reactions};
use crate::equations::beam as eq;
use crate::loads::Load;
use crate::units::mm_to_m;

/// Number of stations in a default curve
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Sampled shear and moment curves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curves {
    /// (position mm, shear N)
    pub shear: Vec<(f64, f64)>,
    /// (position mm, moment N·m)
    pub moment: Vec<(f64, f64)>,
}

impl Curves {
    /// Largest |shear| on the sampled curve (N)
    pub fn peak_shear(&self) -> f64 {
        peak(&self.shear)
    }

    /// Largest |moment| on the sampled curve (N·m)
    pub fn peak_moment(&self) -> f64 {
        peak(&self.moment)
    }
}

fn peak(curve: &[(f64, f64)]) -> f64 {
    curve
        .iter()
        .map(|(_, value)| value.abs())
        .fold(0.0, solver::nan_max)
}

/// Evenly spaced stations over [0, length] (mm).
///
/// The last station is exactly `length_mm`.
pub fn sample_positions(length_mm: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| length_mm * (i as f64 / last))
                .collect()
        }
    }
}

/// Sample 100-point curves, solving the reactions internally.
pub fn sample_curves(config: &BeamConfig, loads: &[Load]) -> Curves {
    sample_curves_with(config, loads, &AnalysisOptions::default())
}

/// Sample curves with explicit options, solving the reactions internally.
pub fn sample_curves_with(config: &BeamConfig, loads: &[Load], options: &AnalysisOptions) -> Curves {
    let solution = solver::solve(config, loads);
    sample_curves_from(config, loads, &solution.reactions, options)
}

/// Sample curves from reactions that were already solved.
pub fn sample_curves_from(
    config: &BeamConfig,
    loads: &[Load],
    reactions: &Reactions,
    options: &AnalysisOptions,
) -> Curves {
    let positions = sample_positions(config.length_mm, options.sample_count);

    let (shear, moment) = match config.beam_type {
        BeamType::Simple {
            left_support_mm,
            right_support_mm,
        } => {
            let left = mm_to_m(left_support_mm);
            let right = mm_to_m(right_support_mm);
            let r1 = reactions.r1_n;
            let r2 = reactions.r2_n.unwrap_or(0.0);
            positions
                .iter()
                .map(|&pos| {
                    let x = mm_to_m(pos);
                    (
                        (pos, simple_shear_at(left, right, r1, r2, loads, x)),
                        (pos, simple_moment_at(left, right, r1, r2, loads, x)),
                    )
                })
                .unzip()
        }
        BeamType::Cantilever => positions
            .iter()
            .map(|&pos| {
                let (v, m) = match options.cantilever_sampling {
                    CantileverSampling::Superposed => cantilever_superposed(loads, mm_to_m(pos)),
                    CantileverSampling::Independent => cantilever_independent(loads, mm_to_m(pos)),
                };
                ((pos, v), (pos, m))
            })
            .unzip(),
    };

    Curves { shear, moment }
}

/// Shear and moment of one load on a cantilever at x (m)
fn cantilever_single(load: &Load, x: f64) -> (f64, f64) {
    match *load {
        Load::Point {
            magnitude_n,
            position_mm,
        } => {
            let a = mm_to_m(position_mm);
            (
                eq::cantilever_point_shear(magnitude_n, a, x),
                eq::cantilever_point_moment(magnitude_n, a, x),
            )
        }
        Load::Uniform {
            magnitude_n_per_m,
            start_mm,
            end_mm,
        } => {
            let (x0, x1) = (mm_to_m(start_mm), mm_to_m(end_mm));
            (
                eq::cantilever_uniform_shear(magnitude_n_per_m, x0, x1, x),
                eq::cantilever_uniform_moment(magnitude_n_per_m, x0, x1, x),
            )
        }
    }
}

fn cantilever_superposed(loads: &[Load], x: f64) -> (f64, f64) {
    loads.iter().fold((0.0, 0.0), |(v, m), load| {
        let (dv, dm) = cantilever_single(load, x);
        (v + dv, m + dm)
    })
}

fn cantilever_independent(loads: &[Load], x: f64) -> (f64, f64) {
    // Each load overwrites the previous one; the last load wins.
    let mut sample = (0.0, 0.0);
    for load in loads {
        sample = cantilever_single(load, x);
    }
    sample
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_sample_positions() {
        let positions = sample_positions(2500.0, 100);
        assert_eq!(positions.len(), 100);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[99], 2500.0);
        assert!(sample_positions(2500.0, 0).is_empty());
        assert_eq!(sample_positions(2500.0, 1), vec![0.0]);
    }

    #[test]
    fn test_simple_beam_shear_closes() {
        let config = BeamConfig::simply_supported(4000.0);
        let curves = sample_curves(&config, &[Load::uniform(1000.0, 0.0, 4000.0)]);

        // V(0) = R1, V(L) = R1 - wL + R2 = 0
        assert!((curves.shear[0].1 - 2000.0).abs() < EPSILON);
        assert!(curves.shear[99].1.abs() < EPSILON);
        // Moment closes at both supports
        assert!(curves.moment[0].1.abs() < EPSILON);
        assert!(curves.moment[99].1.abs() < EPSILON);
    }

    #[test]
    fn test_simple_beam_moment_peak_near_midspan() {
        let config = BeamConfig::simply_supported(4000.0);
        let curves = sample_curves(&config, &[Load::uniform(1000.0, 0.0, 4000.0)]);
        // wL²/8 = 2000 N·m; sampled stations straddle midspan
        let peak = curves.peak_moment();
        assert!(peak <= 2000.0 + EPSILON);
        assert!(peak > 1999.0);
    }

    #[test]
    fn test_overhang_moment_hogs_over_support() {
        // Supports at 0 and 3 m, tip load at 4 m
        let config = BeamConfig::simple(4000.0, 0.0, 3000.0);
        let curves = sample_curves(&config, &[Load::point(1000.0, 4000.0)]);
        let at_support = curves
            .moment
            .iter()
            .min_by(|a, b| (a.0 - 3000.0).abs().total_cmp(&(b.0 - 3000.0).abs()))
            .unwrap();
        assert!(at_support.1 < 0.0);
    }

    #[test]
    fn test_cantilever_superposed() {
        let config = BeamConfig::cantilever(2000.0);
        let loads = [Load::point(1000.0, 2000.0), Load::point(500.0, 1000.0)];
        let curves = sample_curves(&config, &loads);

        // At the fixed end both loads act
        assert!((curves.shear[0].1 - 1500.0).abs() < EPSILON);
        assert!((curves.moment[0].1 + 2500.0).abs() < EPSILON);
        // At the tip only the end load remains
        assert!((curves.shear[99].1 - 1000.0).abs() < EPSILON);
        assert!(curves.moment[99].1.abs() < EPSILON);
    }

    #[test]
    fn test_cantilever_independent_last_load_wins() {
        let config = BeamConfig::cantilever(2000.0);
        let loads = [Load::point(1000.0, 2000.0), Load::point(500.0, 1000.0)];
        let options = AnalysisOptions {
            cantilever_sampling: CantileverSampling::Independent,
            ..AnalysisOptions::default()
        };
        let curves = sample_curves_with(&config, &loads, &options);

        assert!((curves.shear[0].1 - 500.0).abs() < EPSILON);
        assert!((curves.moment[0].1 + 500.0).abs() < EPSILON);
        // Past the last load the curve drops to zero even though the end load remains
        assert_eq!(curves.shear[99].1, 0.0);
    }

    #[test]
    fn test_custom_sample_count() {
        let config = BeamConfig::cantilever(1000.0);
        let options = AnalysisOptions {
            sample_count: 11,
            ..AnalysisOptions::default()
        };
        let curves = sample_curves_with(&config, &[Load::uniform(100.0, 0.0, 1000.0)], &options);
        assert_eq!(curves.shear.len(), 11);
        assert!((curves.shear[5].1 - 50.0).abs() < EPSILON);
    }
}

//! Reaction & Extremum Solver
//!
//! Solves the two statically determinate beam types for their support
//! reactions and the scalar shear/moment maxima.
//!
//! ## Simple Beams
//!
//! Reactions come from moments about each support, accumulated load by
//! load. A uniform load acts as its resultant at the loaded centroid.
//!
//! - `max_shear = max(|R1|, |R2|)`
//! - `max_moment` is the largest |M(x)| over a fixed set of stations: each
//!   point load's position and both ends of each uniform load. There is no
//!   search between stations, so two overlapping uniform loads can peak
//!   somewhere that is never evaluated. Existing results depend on this
//!   station set; keep it.
//! - At a station, `M(x) = R1·(x - left) - Σ(load moments up to x)`. R1
//!   counts at every station, even left of the left support, and R2 never
//!   enters. The sampled curves use step reactions instead, so the two
//!   disagree outside the supports.
//!
//! ## Cantilevers
//!
//! Fixed at x = 0. `R1` is the sum of all load resultants; there is no R2.
//! `max_moment` is the largest single-load fixed-end moment (loads are not
//! summed here).
//!
//! ## Units
//!
//! Positions arrive in mm and are converted to m first, so reactions are in
//! N and moments in N·m.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::calculations::beam::{BeamConfig, BeamType};
use crate::equations::beam as eq;
use crate::loads::Load;
use crate::units::mm_to_m;

/// Support reactions (N, positive upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Left support (simple) or fixed end (cantilever)
    pub r1_n: f64,
    /// Right support; `None` for cantilevers
    pub r2_n: Option<f64>,
}

/// Reactions plus the scalar maxima derived from them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Support reactions
    pub reactions: Reactions,
    /// Maximum shear force magnitude (N)
    pub max_shear_n: f64,
    /// Maximum bending moment magnitude (N·m)
    pub max_moment_nm: f64,
}

/// `max` that lets NaN win, so degenerate input stays visible.
pub(crate) fn nan_max(acc: f64, value: f64) -> f64 {
    if acc.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        acc.max(value)
    }
}

/// Solve reactions and maxima for a beam and its loads.
pub fn solve(config: &BeamConfig, loads: &[Load]) -> Solution {
    match config.beam_type {
        BeamType::Simple {
            left_support_mm,
            right_support_mm,
        } => solve_simple(mm_to_m(left_support_mm), mm_to_m(right_support_mm), loads),
        BeamType::Cantilever => solve_cantilever(loads),
    }
}

/// Reactions of a simple beam with supports at `left` and `right` (m).
pub fn simple_reactions(left: f64, right: f64, loads: &[Load]) -> (f64, f64) {
    loads.iter().fold((0.0, 0.0), |(r1, r2), load| {
        let (dr1, dr2) = match *load {
            Load::Point {
                magnitude_n,
                position_mm,
            } => eq::point_load_reactions(magnitude_n, mm_to_m(position_mm), left, right),
            Load::Uniform {
                magnitude_n_per_m,
                start_mm,
                end_mm,
            } => {
                let (total, centroid) =
                    eq::uniform_load_resultant(magnitude_n_per_m, mm_to_m(start_mm), mm_to_m(end_mm));
                eq::point_load_reactions(total, centroid, left, right)
            }
        };
        (r1 + dr1, r2 + dr2)
    })
}

/// Shear at x (m) on a simple beam: reactions passed minus loads passed.
pub fn simple_shear_at(left: f64, right: f64, r1: f64, r2: f64, loads: &[Load], x: f64) -> f64 {
    let supports = eq::reaction_shear(r1, left, x) + eq::reaction_shear(r2, right, x);
    let applied: f64 = loads
        .iter()
        .map(|load| match *load {
            Load::Point {
                magnitude_n,
                position_mm,
            } => eq::point_load_shear(magnitude_n, mm_to_m(position_mm), x),
            Load::Uniform {
                magnitude_n_per_m,
                start_mm,
                end_mm,
            } => eq::uniform_load_shear(magnitude_n_per_m, mm_to_m(start_mm), mm_to_m(end_mm), x),
        })
        .sum();
    supports - applied
}

/// Sum of applied-load moments about x (m), counting only loads left of x.
fn applied_moment(loads: &[Load], x: f64) -> f64 {
    loads
        .iter()
        .map(|load| match *load {
            Load::Point {
                magnitude_n,
                position_mm,
            } => eq::point_load_moment(magnitude_n, mm_to_m(position_mm), x),
            Load::Uniform {
                magnitude_n_per_m,
                start_mm,
                end_mm,
            } => eq::uniform_load_moment(magnitude_n_per_m, mm_to_m(start_mm), mm_to_m(end_mm), x),
        })
        .sum()
}

/// Moment at x (m) on a simple beam, with each reaction acting only past
/// its support. Used for the sampled curves.
///
/// Between the supports this is `R1·(x - left) - Σ(load moments up to x)`.
pub fn simple_moment_at(left: f64, right: f64, r1: f64, r2: f64, loads: &[Load], x: f64) -> f64 {
    eq::reaction_moment(r1, left, x) + eq::reaction_moment(r2, right, x) - applied_moment(loads, x)
}

/// Moment at a load station x (m): `R1·(x - left) - Σ(load moments up to x)`.
///
/// R1 acts at every x and R2 is left out, so an overhang station left of
/// the left support or right of the right one still reports its moment.
pub fn simple_station_moment(left: f64, r1: f64, loads: &[Load], x: f64) -> f64 {
    r1 * (x - left) - applied_moment(loads, x)
}

/// Stations where the simple-beam moment is evaluated (m).
fn moment_stations(loads: &[Load]) -> Vec<f64> {
    loads
        .iter()
        .flat_map(|load| match *load {
            Load::Point { position_mm, .. } => vec![mm_to_m(position_mm)],
            Load::Uniform {
                start_mm, end_mm, ..
            } => vec![mm_to_m(start_mm), mm_to_m(end_mm)],
        })
        .collect()
}

fn solve_simple(left: f64, right: f64, loads: &[Load]) -> Solution {
    let (r1, r2) = simple_reactions(left, right, loads);

    let max_moment = moment_stations(loads)
        .into_iter()
        .map(|x| simple_station_moment(left, r1, loads, x).abs())
        .fold(0.0, nan_max);

    trace!("simple beam: R1 = {r1} N, R2 = {r2} N, M_max = {max_moment} N·m");

    Solution {
        reactions: Reactions {
            r1_n: r1,
            r2_n: Some(r2),
        },
        max_shear_n: nan_max(r1.abs(), r2.abs()),
        max_moment_nm: max_moment,
    }
}

fn solve_cantilever(loads: &[Load]) -> Solution {
    let r1: f64 = loads.iter().map(Load::total_force_n).sum();

    let max_moment = loads
        .iter()
        .map(|load| match *load {
            Load::Point {
                magnitude_n,
                position_mm,
            } => eq::cantilever_point_fixed_moment(magnitude_n, mm_to_m(position_mm)),
            Load::Uniform {
                magnitude_n_per_m,
                start_mm,
                end_mm,
            } => eq::cantilever_uniform_fixed_moment(
                magnitude_n_per_m,
                mm_to_m(start_mm),
                mm_to_m(end_mm),
            ),
        })
        .map(f64::abs)
        .fold(0.0, nan_max);

    trace!("cantilever: R1 = {r1} N, M_max = {max_moment} N·m");

    Solution {
        reactions: Reactions {
            r1_n: r1,
            r2_n: None,
        },
        max_shear_n: r1.abs(),
        max_moment_nm: max_moment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    #[test]
    fn test_midspan_point_load() {
        let config = BeamConfig::simply_supported(4000.0);
        let solution = solve(&config, &[Load::point(1000.0, 2000.0)]);

        assert!(approx_eq(solution.reactions.r1_n, 500.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), 500.0));
        assert!(approx_eq(solution.max_shear_n, 500.0));
        // PL/4 = 1000 * 4 / 4
        assert!(approx_eq(solution.max_moment_nm, 1000.0));
    }

    #[test]
    fn test_asymmetric_point_load() {
        // 1000 N at 3 m on a 10 m span
        let config = BeamConfig::simply_supported(10_000.0);
        let solution = solve(&config, &[Load::point(1000.0, 3000.0)]);

        assert!(approx_eq(solution.reactions.r1_n, 700.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), 300.0));
        assert!(approx_eq(solution.max_shear_n, 700.0));
        // Pab/L = 1000 * 3 * 7 / 10
        assert!(approx_eq(solution.max_moment_nm, 2100.0));
    }

    #[test]
    fn test_inset_supports() {
        // Supports at 1 m and 5 m, load at 2 m
        let config = BeamConfig::simple(6000.0, 1000.0, 5000.0);
        let solution = solve(&config, &[Load::point(4000.0, 2000.0)]);

        assert!(approx_eq(solution.reactions.r1_n, 3000.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), 1000.0));
        // R1 * (2 - 1)
        assert!(approx_eq(solution.max_moment_nm, 3000.0));
    }

    #[test]
    fn test_full_uniform_load_uses_edge_stations() {
        // 2 kN/m over 4 m: reactions wL/2; moment only checked at the ends
        let config = BeamConfig::simply_supported(4000.0);
        let solution = solve(&config, &[Load::uniform(2000.0, 0.0, 4000.0)]);

        assert!(approx_eq(solution.reactions.r1_n, 4000.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), 4000.0));
        // Both stations sit on supports, so the reported peak is zero even
        // though wL²/8 = 4000 N·m occurs at midspan.
        assert!(solution.max_moment_nm.abs() < EPSILON);
    }

    #[test]
    fn test_partial_uniform_load() {
        // 1 kN/m from 2 m to 4 m on a 6 m span
        let config = BeamConfig::simply_supported(6000.0);
        let solution = solve(&config, &[Load::uniform(1000.0, 2000.0, 4000.0)]);

        assert!(approx_eq(solution.reactions.r1_n, 1000.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), 1000.0));
        // M(2) = 1000 * 2 = 2000; M(4) = 1000 * 4 - 2000 * 1 = 2000
        assert!(approx_eq(solution.max_moment_nm, 2000.0));
    }

    #[test]
    fn test_negative_load_reports_magnitude() {
        let config = BeamConfig::simply_supported(4000.0);
        let solution = solve(&config, &[Load::point(-1000.0, 2000.0)]);
        assert!(approx_eq(solution.reactions.r1_n, -500.0));
        assert!(approx_eq(solution.max_shear_n, 500.0));
        assert!(approx_eq(solution.max_moment_nm, 1000.0));
    }

    #[test]
    fn test_cantilever_end_load() {
        let config = BeamConfig::cantilever(2000.0);
        let solution = solve(&config, &[Load::point(1500.0, 2000.0)]);

        assert!(approx_eq(solution.reactions.r1_n, 1500.0));
        assert_eq!(solution.reactions.r2_n, None);
        assert!(approx_eq(solution.max_shear_n, 1500.0));
        assert!(approx_eq(solution.max_moment_nm, 3000.0));
    }

    #[test]
    fn test_cantilever_takes_largest_single_load_moment() {
        let config = BeamConfig::cantilever(3000.0);
        let loads = [Load::point(1000.0, 3000.0), Load::uniform(500.0, 0.0, 2000.0)];
        let solution = solve(&config, &loads);

        // R1 = 1000 + 500 * 2
        assert!(approx_eq(solution.reactions.r1_n, 2000.0));
        // max(1000 * 3, 1000 * 1) -- not the 4000 N·m sum
        assert!(approx_eq(solution.max_moment_nm, 3000.0));
    }

    #[test]
    fn test_right_overhang_tip_load() {
        // Supports at 0 m and 3 m, 1 kN at the 4 m tip
        let config = BeamConfig::simple(4000.0, 0.0, 3000.0);
        let solution = solve(&config, &[Load::point(1000.0, 4000.0)]);

        // R1 = 1000 * (3 - 4) / 3
        assert!(approx_eq(solution.reactions.r1_n, -1000.0 / 3.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), 4000.0 / 3.0));
        // |R1 * (4 - 0)|, the load itself contributes nothing at its own station
        assert!(approx_eq(solution.max_moment_nm, 4000.0 / 3.0));
    }

    #[test]
    fn test_left_overhang_load() {
        // Supports at 1 m and 5 m, 1 kN at 0.5 m
        let config = BeamConfig::simple(5000.0, 1000.0, 5000.0);
        let solution = solve(&config, &[Load::point(1000.0, 500.0)]);

        // R1 = 1000 * (5 - 0.5) / 4
        assert!(approx_eq(solution.reactions.r1_n, 1125.0));
        assert!(approx_eq(solution.reactions.r2_n.unwrap(), -125.0));
        // |1125 * (0.5 - 1)|
        assert!(approx_eq(solution.max_moment_nm, 562.5));
    }

    #[test]
    fn test_station_moment_differs_from_curve_outside_supports() {
        let loads = [Load::point(1000.0, 4000.0)];
        let (r1, r2) = simple_reactions(0.0, 3.0, &loads);

        assert!(approx_eq(simple_station_moment(0.0, r1, &loads, 4.0), -4000.0 / 3.0));
        // Step reactions: R1 and R2 both passed, cancelling the tip load
        assert!(simple_moment_at(0.0, 3.0, r1, r2, &loads, 4.0).abs() < EPSILON);
        // Inside the span the two agree
        assert!(approx_eq(
            simple_station_moment(0.0, r1, &loads, 2.0),
            simple_moment_at(0.0, 3.0, r1, r2, &loads, 2.0)
        ));
    }

    #[test]
    fn test_coincident_supports_give_infinite_moment() {
        let config = BeamConfig::simple(1000.0, 500.0, 500.0);
        let solution = solve(&config, &[Load::point(100.0, 800.0)]);
        assert!(solution.reactions.r1_n.is_infinite());
        assert!(solution.max_shear_n.is_infinite());
        // -inf * (0.8 - 0.5) at the load station
        assert!(solution.max_moment_nm.is_infinite());
    }

    #[test]
    fn test_nan_max() {
        assert_eq!(nan_max(1.0, 2.0), 2.0);
        assert!(nan_max(f64::NAN, 2.0).is_nan());
        assert!(nan_max(1.0, f64::NAN).is_nan());
    }
}

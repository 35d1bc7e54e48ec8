//! # Statically Determinate Beam Formulas
//!
//! Equilibrium formulas for the two supported beam types:
//!
//! - **Simple**: pin and roller at arbitrary positions `left` and `right`
//!   (overhangs allowed on either side)
//! - **Cantilever**: fixed at x = 0, free at x = L
//!
//! Positions are measured from the left end of the beam, not from a support.
//!
//! ## Notation
//!
//! - `x` = Section position along the beam
//! - `a` = Point load position
//! - `x0`, `x1` = Start and end of a uniform load
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `R1`, `R2` = Left and right support reactions
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Reactions: Positive upward
//! - Shear: Sum of forces on the free body left of the section, upward positive
//! - Moment: Positive sagging; a cantilever under downward load hogs (negative)

use crate::units::{Meters, Newtons};

// =============================================================================
// SIMPLE BEAM REACTIONS
// =============================================================================

/// Reactions for a point load P at `a` on supports at `left` and `right`
///
/// ```text
///          P
///          ↓
///    ──────┬─────────────
///      △   a         △
///     R1            R2
///    left          right
/// ```
///
/// # Formulas (moments about each support)
/// - R1 = P(right - a)/(right - left)
/// - R2 = P(a - left)/(right - left)
///
/// `left == right` divides by zero and yields NaN/∞.
#[inline]
pub fn point_load_reactions(p: f64, a: f64, left: f64, right: f64) -> (f64, f64) {
    let span = right - left;
    (p * (right - a) / span, p * (a - left) / span)
}

/// Resultant of a uniform load w over [x0, x1]
///
/// # Returns
/// (W, c) where W = w(x1 - x0) and c = (x0 + x1)/2
#[inline]
pub fn uniform_load_resultant(w: f64, x0: f64, x1: f64) -> (f64, f64) {
    (w * (x1 - x0), (x0 + x1) / 2.0)
}

// =============================================================================
// SECTION CONTRIBUTIONS (free body left of x)
// =============================================================================

/// Shear contribution of an upward reaction R at `position`
///
/// The reaction turns on once the section reaches its support.
#[inline]
pub fn reaction_shear(r: f64, position: f64, x: f64) -> f64 {
    if x >= position {
        r
    } else {
        0.0
    }
}

/// Moment contribution of an upward reaction R at `position`
#[inline]
pub fn reaction_moment(r: f64, position: f64, x: f64) -> f64 {
    if x >= position {
        r * (x - position)
    } else {
        0.0
    }
}

/// Shear carried by a point load once the section has passed it
#[inline]
pub fn point_load_shear(p: f64, a: f64, x: f64) -> f64 {
    if x >= a {
        p
    } else {
        0.0
    }
}

/// Moment of a point load about the section at x
///
/// # Formula
/// M = P(x - a) for x ≥ a, otherwise 0
#[inline]
pub fn point_load_moment(p: f64, a: f64, x: f64) -> f64 {
    if x >= a {
        p * (x - a)
    } else {
        0.0
    }
}

/// Length of a uniform load [x0, x1] lying to the left of x
///
/// # Formula
/// min(x - x0, x1 - x0), or 0 before the load starts
#[inline]
pub fn uniform_load_covered_length(x0: f64, x1: f64, x: f64) -> f64 {
    if x <= x0 {
        0.0
    } else {
        (x - x0).min(x1 - x0)
    }
}

/// Shear carried by the part of a uniform load left of x
#[inline]
pub fn uniform_load_shear(w: f64, x0: f64, x1: f64, x: f64) -> f64 {
    w * uniform_load_covered_length(x0, x1, x)
}

/// Moment of the part of a uniform load left of x about the section
///
/// # Formula
/// With covered length s: M = w·s·(x - x0 - s/2)
#[inline]
pub fn uniform_load_moment(w: f64, x0: f64, x1: f64, x: f64) -> f64 {
    let covered = uniform_load_covered_length(x0, x1, x);
    w * covered * (x - x0 - covered / 2.0)
}

// =============================================================================
// CANTILEVER FORMULAS (fixed at x = 0, free at x = L)
// =============================================================================

/// Fixed-end moment magnitude for a point load P at `a` on a cantilever
///
/// ```text
///    ▌        P
///    ▌        ↓
///    ▌────────┬─────
///    ▌←── a ──→
///   fixed         free (L)
/// ```
///
/// # Formula
/// M = P·a (lever arm measured from the fixed end)
///
/// Measured from the free end instead (a' = L - a) this is the familiar
/// M = P(L - a').
#[inline]
pub fn cantilever_point_fixed_moment(p: f64, a: f64) -> f64 {
    (Newtons(p) * Meters(a)).value()
}

/// Fixed-end moment magnitude for a uniform load w over [x0, x1]
///
/// # Formula
/// M = w(x1 - x0)·c, with c = (x0 + x1)/2
#[inline]
pub fn cantilever_uniform_fixed_moment(w: f64, x0: f64, x1: f64) -> f64 {
    let (total, centroid) = uniform_load_resultant(w, x0, x1);
    (Newtons(total) * Meters(centroid)).value()
}

/// Shear at x due to a point load on a cantilever
///
/// The section carries the load while the load lies at or beyond it.
#[inline]
pub fn cantilever_point_shear(p: f64, a: f64, x: f64) -> f64 {
    if x <= a {
        p
    } else {
        0.0
    }
}

/// Moment at x due to a point load on a cantilever (hogging, negative)
///
/// # Formula
/// M(x) = -P(a - x) for x ≤ a, otherwise 0
#[inline]
pub fn cantilever_point_moment(p: f64, a: f64, x: f64) -> f64 {
    if x <= a {
        -p * (a - x)
    } else {
        0.0
    }
}

/// Portion of a uniform load [x0, x1] lying to the right of x
///
/// # Returns
/// (start, end) of the remaining portion; empty once x ≥ x1
#[inline]
fn remaining_span(x0: f64, x1: f64, x: f64) -> (f64, f64) {
    let start = x.max(x0).min(x1);
    (start, x1)
}

/// Shear at x due to a uniform load on a cantilever
#[inline]
pub fn cantilever_uniform_shear(w: f64, x0: f64, x1: f64, x: f64) -> f64 {
    let (start, end) = remaining_span(x0, x1, x);
    w * (end - start)
}

/// Moment at x due to a uniform load on a cantilever (hogging, negative)
///
/// # Formula
/// M(x) = -w·s·(c_s - x), where s is the remaining length and c_s its centroid
#[inline]
pub fn cantilever_uniform_moment(w: f64, x0: f64, x1: f64, x: f64) -> f64 {
    let (start, end) = remaining_span(x0, x1, x);
    let (total, centroid) = uniform_load_resultant(w, start, end);
    -total * (centroid - x)
}

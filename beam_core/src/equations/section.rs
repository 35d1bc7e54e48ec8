//! # Cross-Section Property Formulas
//!
//! Formulas for the geometric properties of the supported cross-sections.
//! Every function is unit-agnostic: pass consistent units (the kernel
//! passes meters) and the result comes back in the matching power.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia about the horizontal centroidal axis
//! - `Z` = Section modulus (I/c, where c = distance to extreme fiber)
//! - `b`, `h` = Width and height of a rectangle
//! - `bf`, `tf` = Flange width and flange thickness
//! - `tw` = Web thickness
//! - `d` = Diameter
//!
//! ## Flange Terms
//!
//! The I-beam and C-channel flange terms are deliberately not the same
//! expression. The I-beam flange uses `bf·tf³/6 + 2·bf·tf·((h-tf)/2)²`
//! while the channel flange uses `bf·tf³/12 + bf·tf·((h-tf)/2)²`. Results
//! must match the established calculator output, so neither is replaced by
//! a textbook formula.

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Cross-sectional area of a solid rectangle
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(0.1, 0.2);
/// assert!((area - 0.02).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Moment of inertia of a solid rectangle about its strong axis
///
/// # Formula
/// I = b·h³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(0.1, 0.2);
/// assert!((i - 6.6667e-5).abs() < 1e-8);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// I-BEAM AND C-CHANNEL
// Two flanges of bf × tf joined by a web of tw × (h - 2tf)
// =============================================================================

/// Cross-sectional area of a flanged section (I-beam or C-channel)
///
/// ```text
///     ┌─────────────┐  ← flange bf × tf
///     └────┐   ┌────┘
///          │   │       ← web tw × (h - 2tf)
///     ┌────┘   └────┐
///     └─────────────┘
/// ```
///
/// # Formula
/// A = 2·bf·tf + (h - 2tf)·tw
#[inline]
pub fn flanged_area(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * bf * tf + (h - 2.0 * tf) * tw
}

/// Moment of inertia of the web between the two flanges
///
/// # Formula
/// I_web = tw·(h - 2tf)³/12
#[inline]
pub fn web_moment_of_inertia(tf: f64, tw: f64, h: f64) -> f64 {
    tw * (h - 2.0 * tf).powi(3) / 12.0
}

/// Flange contribution for an I-beam (one flange)
///
/// # Formula
/// I_flange = bf·tf³/6 + 2·bf·tf·((h - tf)/2)²
#[inline]
pub fn i_beam_flange_moment_of_inertia(bf: f64, tf: f64, h: f64) -> f64 {
    let arm = (h - tf) / 2.0;
    bf * tf.powi(3) / 6.0 + 2.0 * bf * tf * arm * arm
}

/// Flange contribution for a C-channel (one flange)
///
/// # Formula
/// I_flange = bf·tf³/12 + bf·tf·((h - tf)/2)²
#[inline]
pub fn c_channel_flange_moment_of_inertia(bf: f64, tf: f64, h: f64) -> f64 {
    let arm = (h - tf) / 2.0;
    bf * tf.powi(3) / 12.0 + bf * tf * arm * arm
}

/// Moment of inertia of an I-beam
///
/// # Formula
/// I = 2·I_flange + I_web
#[inline]
pub fn i_beam_moment_of_inertia(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * i_beam_flange_moment_of_inertia(bf, tf, h) + web_moment_of_inertia(tf, tw, h)
}

/// Moment of inertia of a C-channel
///
/// # Formula
/// I = 2·I_flange + I_web
#[inline]
pub fn c_channel_moment_of_inertia(bf: f64, tf: f64, tw: f64, h: f64) -> f64 {
    2.0 * c_channel_flange_moment_of_inertia(bf, tf, h) + web_moment_of_inertia(tf, tw, h)
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Cross-sectional area of a solid circle
///
/// # Formula
/// A = π·d²/4
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * d * d / 4.0
}

/// Moment of inertia of a solid circle about a diameter
///
/// # Formula
/// I = π·d⁴/64
///
/// # Example
/// ```rust
/// use beam_core::equations::section::circular_moment_of_inertia;
///
/// let i = circular_moment_of_inertia(0.1);
/// assert!((i - 4.909e-6).abs() < 1e-9);
/// ```
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

// =============================================================================
// SECTION MODULUS
// =============================================================================

/// Elastic section modulus from moment of inertia and extreme fiber distance
///
/// # Formula
/// Z = I/c
///
/// All supported shapes are symmetric about the bending axis, so `c` is
/// half the overall depth (h/2 or d/2).
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1e-12)
    }

    #[test]
    fn test_rectangle() {
        assert!(approx_eq(rectangular_area(0.1, 0.2), 0.02));
        assert!(approx_eq(rectangular_moment_of_inertia(0.1, 0.2), 0.1 * 0.008 / 12.0));
    }

    #[test]
    fn test_flanged_area() {
        // 100 wide, 10 flanges, 6 web, 200 deep (mm) -> 2*1000 + 180*6
        let a = flanged_area(100.0, 10.0, 6.0, 200.0);
        assert!(approx_eq(a, 3080.0), "A = {}", a);
    }

    #[test]
    fn test_i_beam_flange_term() {
        // 100 x 10 flange on a 200 deep section (mm)
        let i = i_beam_flange_moment_of_inertia(100.0, 10.0, 200.0);
        let expected = 100.0 * 1000.0 / 6.0 + 2.0 * 100.0 * 10.0 * 95.0 * 95.0;
        assert!(approx_eq(i, expected), "I_flange = {}", i);
    }

    #[test]
    fn test_channel_flange_differs_from_i_beam() {
        let i_flange = i_beam_flange_moment_of_inertia(100.0, 10.0, 200.0);
        let c_flange = c_channel_flange_moment_of_inertia(100.0, 10.0, 200.0);
        assert!(approx_eq(i_flange, 2.0 * c_flange));
        assert!(i_beam_moment_of_inertia(100.0, 10.0, 6.0, 200.0)
            > c_channel_moment_of_inertia(100.0, 10.0, 6.0, 200.0));
    }

    #[test]
    fn test_web_term() {
        let i = web_moment_of_inertia(10.0, 6.0, 200.0);
        assert!(approx_eq(i, 6.0 * 180.0_f64.powi(3) / 12.0));
    }

    #[test]
    fn test_circle() {
        assert!((circular_area(0.1) - 0.007854).abs() < 1e-6);
        assert!((circular_moment_of_inertia(0.1) - 4.909e-6).abs() < 1e-9);
    }

    #[test]
    fn test_section_modulus() {
        let i = rectangular_moment_of_inertia(0.1, 0.2);
        let z = section_modulus(i, 0.1);
        // Z = b*h^2/6 for a rectangle
        assert!(approx_eq(z, 0.1 * 0.04 / 6.0));
    }

    #[test]
    fn test_degenerate_section_propagates_nan() {
        assert!(section_modulus(0.0, 0.0).is_nan());
    }
}

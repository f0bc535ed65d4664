//! Angle normalization helpers.
//!
//! All three functions are total: any finite input maps into the target range,
//! and applying a function to its own output returns the same value.

use std::f64::consts::{PI, TAU};

/// Wrap an angle in degrees to [0, 360).
pub fn wrap_deg(x: f64) -> f64 {
    if (0.0..360.0).contains(&x) {
        return x;
    }
    let r = x.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap an angle in degrees to (-180, 180].
pub fn wrap_signed_deg(x: f64) -> f64 {
    if x > -180.0 && x <= 180.0 {
        return x;
    }
    let r = wrap_deg(x);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Wrap an angle in radians to (-π, π].
pub fn wrap_signed_rad(x: f64) -> f64 {
    if x > -PI && x <= PI {
        return x;
    }
    let mut r = x.rem_euclid(TAU);
    if r >= TAU {
        r = 0.0;
    }
    if r > PI { r - TAU } else { r }
}

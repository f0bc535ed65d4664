//! Logarithmic radial scaling from AU to drawing units.
//!
//! Inner planets sit within a couple of AU while Neptune is at 30, so a linear
//! map would crush Mercury through Mars into a few pixels. The radius is
//! compressed with `ln(1 + r)` while the polar angle is kept, which keeps every
//! planet on screen without changing where it is around the Sun.

use bevy::math::DVec2;

use crate::ephemeris::PlanetData;
use crate::time::centuries_since_j2000;
use crate::types::{ORIGIN_EPSILON_AU, RMAX_PADDING};

/// Map a heliocentric AU position to drawing units.
///
/// `r_max_au` maps to exactly `r_px_max`; larger radii land beyond it (no
/// clamping). Points within `1e-12` AU of the Sun collapse to the origin.
pub fn map_log_radial(p_au: DVec2, r_max_au: f64, r_px_max: f64) -> DVec2 {
    let r = p_au.length();
    if r <= ORIGIN_EPSILON_AU {
        return DVec2::ZERO;
    }

    let theta = p_au.y.atan2(p_au.x);
    let r_norm = r.ln_1p() / r_max_au.ln_1p();
    let r_px = r_norm * r_px_max;
    DVec2::new(r_px * theta.cos(), r_px * theta.sin())
}

/// Convert an ecliptic-oriented point to screen orientation (y down).
pub fn to_screen(p: DVec2) -> DVec2 {
    DVec2::new(p.x, -p.y)
}

/// Largest aphelion a(1+e) over the table at `jd`, padded by 3%.
///
/// This is the AU radius that maps to the edge of the drawing radius. An empty
/// table yields 0.
pub fn compute_rmax_au(planets: &[PlanetData], jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    planets
        .iter()
        .map(|p| p.elements.osculating(t).aphelion())
        .fold(0.0, f64::max)
        * RMAX_PADDING
}

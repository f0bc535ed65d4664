//! Orbit outline geometry.
//!
//! Each outline is the osculating ellipse at the span midpoint, sampled
//! uniformly in true anomaly and passed through the same log-radial map as the
//! planet markers. It is the instantaneous shape of the orbit, not the slowly
//! precessing path the planet actually traces over the span.

use bevy::math::DVec2;
use std::f64::consts::TAU;

use super::scaling::{map_log_radial, to_screen};
use crate::ephemeris::{OrbitalElements, PlanetId};
use crate::time::centuries_since_j2000;

/// Number of segments per outline (the closing point makes it 721 vertices).
pub const ORBIT_SEGMENTS: usize = 720;

/// Stroke opacity of orbit outlines.
pub const ORBIT_OPACITY: f64 = 0.45;

/// Closed outline in heliocentric AU: `segments + 1` points, last equal to first.
pub fn orbit_outline_au(elements: &OrbitalElements, jd: f64, segments: usize) -> Vec<DVec2> {
    let osc = elements.osculating(centuries_since_j2000(jd));
    (0..=segments)
        .map(|i| {
            let nu = TAU * i as f64 / segments as f64;
            osc.perifocal_to_ecliptic(osc.perifocal_at_true(nu))
        })
        .collect()
}

/// Closed outline in screen coordinates.
pub fn orbit_outline(
    elements: &OrbitalElements,
    jd: f64,
    segments: usize,
    r_max_au: f64,
    r_px_max: f64,
) -> Vec<DVec2> {
    orbit_outline_au(elements, jd, segments)
        .into_iter()
        .map(|p| to_screen(map_log_radial(p, r_max_au, r_px_max)))
        .collect()
}

/// Stroke colour for a planet's orbit path.
pub fn orbit_color(id: PlanetId) -> &'static str {
    match id {
        PlanetId::Mercury => "#9a9a9a",
        PlanetId::Venus => "#e6d9b3",
        PlanetId::Earth => "#3380cc",
        PlanetId::Mars => "#cc6633",
        PlanetId::Jupiter => "#ccb399",
        PlanetId::Saturn => "#e6d999",
        PlanetId::Uranus => "#99cce6",
        PlanetId::Neptune => "#4d80e6",
    }
}

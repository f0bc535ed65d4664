//! Animated planet markers: keyframe tracks and marker styling.

use bevy::math::DVec2;

use super::scaling::{map_log_radial, to_screen};
use crate::ephemeris::{OrbitalElements, PlanetId, position_au};

/// Screen-space keyframes for one planet, one value per sample time.
///
/// `xs` and `ys` always have equal length; samples are equally spaced in time
/// except possibly the last one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeTrack {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl KeyframeTrack {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn point(&self, i: usize) -> Option<DVec2> {
        Some(DVec2::new(*self.xs.get(i)?, *self.ys.get(i)?))
    }

    /// Position at the start of the span, used for the first animation frame.
    pub fn initial(&self) -> Option<DVec2> {
        self.point(0)
    }

    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| DVec2::new(x, y))
    }
}

/// Sample a planet's mapped screen position at each of `times` (JD).
pub fn sample_track(
    elements: &OrbitalElements,
    times: &[f64],
    r_max_au: f64,
    r_px_max: f64,
) -> KeyframeTrack {
    let (xs, ys) = times
        .iter()
        .map(|&jd| to_screen(map_log_radial(position_au(elements, jd), r_max_au, r_px_max)))
        .map(|p| (p.x, p.y))
        .unzip();
    KeyframeTrack { xs, ys }
}

/// Fill colour of a planet marker.
pub fn body_color(id: PlanetId) -> &'static str {
    match id {
        PlanetId::Mercury => "#b5b5b5",
        PlanetId::Venus => "#f2e2b8",
        PlanetId::Earth => "#4da6ff",
        PlanetId::Mars => "#e0703a",
        PlanetId::Jupiter => "#e3c59f",
        PlanetId::Saturn => "#f0dc9c",
        PlanetId::Uranus => "#a8e0f0",
        PlanetId::Neptune => "#5c8cff",
    }
}

/// Marker radius in drawing units. Gas giants are drawn larger.
pub fn marker_radius(id: PlanetId) -> f64 {
    match id {
        PlanetId::Mercury => 3.0,
        PlanetId::Venus | PlanetId::Earth => 4.5,
        PlanetId::Mars => 3.5,
        PlanetId::Jupiter => 8.0,
        PlanetId::Saturn => 7.0,
        PlanetId::Uranus | PlanetId::Neptune => 5.5,
    }
}

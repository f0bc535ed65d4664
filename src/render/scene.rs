//! Scene assembly: turns the element table, a time span and a layout into
//! plain drawable geometry.
//!
//! The result carries no markup; `render::document` owns serialization.

use bevy::math::DVec2;
use bevy::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::SceneConfig;
use super::bodies::{KeyframeTrack, sample_track};
use super::orbits::orbit_outline;
use super::scaling::compute_rmax_au;
use crate::ephemeris::{PlanetData, PlanetId};
use crate::time::TimeSpan;

/// Drawable geometry of one planet.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyGeometry {
    pub id: PlanetId,
    /// Closed outline of the midpoint osculating ellipse, screen coordinates.
    pub outline: Vec<DVec2>,
    /// Animated marker positions, screen coordinates.
    pub track: KeyframeTrack,
}

impl BodyGeometry {
    /// Marker position at the start of the span.
    pub fn initial_position(&self) -> DVec2 {
        self.track.initial().unwrap_or(DVec2::ZERO)
    }
}

/// Complete set of drawable artifacts for one scene.
///
/// Bodies keep the table order, which is the draw order: all orbits first,
/// then the Sun, then the planet markers on top.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct Scene {
    pub span: TimeSpan,
    pub config: SceneConfig,
    /// AU radius mapped to `config.r_px_max`.
    pub r_max_au: f64,
    pub bodies: Vec<BodyGeometry>,
}

impl Scene {
    /// Keyframes are sampled at `span`'s step; `config` only shapes the layout.
    pub fn assemble(planets: &[PlanetData], span: &TimeSpan, config: &SceneConfig) -> Self {
        let midpoint = span.midpoint();
        let r_max_au = compute_rmax_au(planets, midpoint);
        let times = span.sample_times();

        let build = |planet: &PlanetData| BodyGeometry {
            id: planet.id,
            outline: orbit_outline(
                &planet.elements,
                midpoint,
                config.orbit_segments,
                r_max_au,
                config.r_px_max,
            ),
            track: sample_track(&planet.elements, &times, r_max_au, config.r_px_max),
        };

        #[cfg(feature = "parallel")]
        let bodies = planets.par_iter().map(build).collect();
        #[cfg(not(feature = "parallel"))]
        let bodies = planets.iter().map(build).collect();

        Self {
            span: *span,
            config: config.clone(),
            r_max_au,
            bodies,
        }
    }

    /// Keyframes per planet (identical for every body).
    pub fn keyframe_count(&self) -> usize {
        self.bodies.first().map_or(0, |b| b.track.len())
    }

    pub fn body(&self, id: PlanetId) -> Option<&BodyGeometry> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::ELEMENT_TABLE;
    use crate::ephemeris::position_au;
    use crate::render::scaling::{map_log_radial, to_screen};
    use crate::time::julian_day;
    use crate::types::J2000_JD;

    fn year_span() -> TimeSpan {
        let start = julian_day(2025, 1, 1);
        TimeSpan::new(start, start + 365.0, 5.0).unwrap()
    }

    #[test]
    fn test_assemble_all_planets_in_order() {
        let scene = Scene::assemble(&ELEMENT_TABLE, &year_span(), &SceneConfig::default());
        let ids: Vec<_> = scene.bodies.iter().map(|b| b.id).collect();
        assert_eq!(ids, PlanetId::ALL);
    }

    #[test]
    fn test_geometry_counts() {
        let span = year_span();
        let scene = Scene::assemble(&ELEMENT_TABLE, &span, &SceneConfig::default());
        assert_eq!(scene.keyframe_count(), 74);
        for body in &scene.bodies {
            assert_eq!(body.outline.len(), 721, "{}", body.id.name());
            assert_eq!(body.track.len(), span.sample_count());
            assert_eq!(body.track.xs.len(), body.track.ys.len());
        }
    }

    #[test]
    fn test_everything_within_drawing_radius() {
        let config = SceneConfig::default();
        let scene = Scene::assemble(&ELEMENT_TABLE, &year_span(), &config);
        for body in &scene.bodies {
            for p in body.outline.iter().copied().chain(body.track.points()) {
                assert!(
                    p.length() <= config.r_px_max + 1e-9,
                    "{} point {:?} off the drawing radius",
                    body.id.name(),
                    p
                );
            }
        }
    }

    #[test]
    fn test_initial_position_is_span_start() {
        let span = year_span();
        let scene = Scene::assemble(&ELEMENT_TABLE, &span, &SceneConfig::default());
        let earth = scene.body(PlanetId::Earth).unwrap();
        let expected = to_screen(map_log_radial(
            position_au(PlanetId::Earth.elements(), span.start()),
            scene.r_max_au,
            scene.config.r_px_max,
        ));
        assert_eq!(earth.initial_position(), expected);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let span = year_span();
        let config = SceneConfig::default();
        let a = Scene::assemble(&ELEMENT_TABLE, &span, &config);
        let b = Scene::assemble(&ELEMENT_TABLE, &span, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_keyframes_follow_span_step() {
        let span = TimeSpan::new(J2000_JD, J2000_JD + 30.0, 10.0).unwrap();
        let config = SceneConfig {
            dur_seconds: 5.0,
            ..SceneConfig::default()
        };
        let scene = Scene::assemble(&ELEMENT_TABLE, &span, &config);
        assert_eq!(scene.keyframe_count(), 4);
        assert_eq!(scene.span.step_days(), 10.0);

        let fine = TimeSpan::new(J2000_JD, J2000_JD + 30.0, 1.0).unwrap();
        let scene = Scene::assemble(&ELEMENT_TABLE, &fine, &config);
        assert_eq!(scene.keyframe_count(), 31);
    }

    #[test]
    fn test_empty_table() {
        let scene = Scene::assemble(&[], &year_span(), &SceneConfig::default());
        assert!(scene.bodies.is_empty());
        assert_eq!(scene.keyframe_count(), 0);
    }
}

//! Scene construction and output for the log-scaled orrery.
//!
//! This module maps propagated planet positions onto the drawing surface,
//! assembles the orbit outlines and marker keyframes, and writes the animated
//! SVG document.

pub mod bodies;
pub mod document;
pub mod orbits;
pub mod scaling;
pub mod scene;

use std::path::PathBuf;

use bevy::prelude::*;

use crate::ephemeris::Ephemeris;
use crate::time::TimeSpan;

use self::orbits::ORBIT_SEGMENTS;

// Re-export for use in other modules
pub use self::bodies::KeyframeTrack;
pub use self::document::SceneWriteError;
pub use self::scaling::{compute_rmax_au, map_log_radial, to_screen};
pub use self::scene::{BodyGeometry, Scene};

/// Canvas and animation layout.
///
/// The keyframe step is not part of the layout; it belongs to [`TimeSpan`].
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Half-width of the square canvas (drawing units).
    pub view_half: f64,
    /// Drawing radius that `r_max_au` maps onto.
    pub r_px_max: f64,
    /// Length of one animation loop in seconds.
    pub dur_seconds: f64,
    /// Segments per orbit outline.
    pub orbit_segments: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            view_half: 500.0,
            r_px_max: 460.0,
            dur_seconds: 60.0,
            orbit_segments: ORBIT_SEGMENTS,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive and finite (got {value})")]
    NotPositive { name: &'static str, value: f64 },

    #[error("drawing radius {r_px_max} does not fit in the canvas half-extent {view_half}")]
    RadiusExceedsCanvas { r_px_max: f64, view_half: f64 },

    #[error("orbit outlines need at least 3 segments (got {0})")]
    TooFewSegments(usize),
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("view_half", self.view_half),
            ("r_px_max", self.r_px_max),
            ("dur_seconds", self.dur_seconds),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.r_px_max > self.view_half {
            return Err(ConfigError::RadiusExceedsCanvas {
                r_px_max: self.r_px_max,
                view_half: self.view_half,
            });
        }
        if self.orbit_segments < 3 {
            return Err(ConfigError::TooFewSegments(self.orbit_segments));
        }
        Ok(())
    }
}

/// Destination of the rendered document.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct OutputPath(pub PathBuf);

impl Default for OutputPath {
    fn default() -> Self {
        Self(PathBuf::from("solar_system.svg"))
    }
}

/// Plugin that assembles the scene at startup and writes it out once.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        // Resources inserted before the plugin take precedence
        app.init_resource::<Ephemeris>()
            .init_resource::<TimeSpan>()
            .init_resource::<SceneConfig>()
            .init_resource::<OutputPath>()
            .add_systems(Startup, assemble_scene)
            .add_systems(PostStartup, write_scene);
    }
}

/// Build the scene geometry from the configured resources.
fn assemble_scene(
    mut commands: Commands,
    ephemeris: Res<Ephemeris>,
    span: Res<TimeSpan>,
    config: Res<SceneConfig>,
) {
    let scene = Scene::assemble(ephemeris.planets(), &span, &config);

    info!(
        "Assembled {} planets from {} to {} ({} keyframes, r_max = {:.3} AU)",
        scene.bodies.len(),
        crate::time::format_jd(span.start()),
        crate::time::format_jd(span.end()),
        scene.keyframe_count(),
        scene.r_max_au
    );
    for body in &scene.bodies {
        debug!(
            "{}: {} outline points, starts at ({:.1}, {:.1})",
            body.id.name(),
            body.outline.len(),
            body.initial_position().x,
            body.initial_position().y
        );
    }

    commands.insert_resource(scene);
}

/// Write the assembled scene, then request exit.
///
/// A failed write is reported and turned into an error exit code; it never panics.
fn write_scene(scene: Res<Scene>, output: Res<OutputPath>, mut exit: MessageWriter<AppExit>) {
    match document::write_document(&scene, &output.0) {
        Ok(()) => {
            info!("Wrote {}", output.0.display());
            exit.write(AppExit::Success);
        }
        Err(err) => {
            error!("{err}");
            exit.write(AppExit::error());
        }
    }
}

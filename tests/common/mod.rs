//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use orrery::ephemeris::ELEMENT_TABLE;
use orrery::render::{Scene, SceneConfig};
use orrery::time::{TimeSpan, julian_day};

/// A span of `days` starting on the given calendar date.
pub fn span_from(year: i32, month: u32, day: u32, days: f64, step_days: f64) -> TimeSpan {
    let start = julian_day(year, month, day);
    TimeSpan::new(start, start + days, step_days).unwrap()
}

/// Scene for the full planet table with the default layout.
pub fn default_scene(span: &TimeSpan) -> Scene {
    Scene::assemble(&ELEMENT_TABLE, span, &SceneConfig::default())
}

/// Unique scratch path under the system temp directory.
pub fn scratch_svg(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("orrery-{}-{name}.svg", std::process::id()))
}

/// Angle of a screen-space point, converted back to the ecliptic orientation.
pub fn ecliptic_angle(p: bevy::math::DVec2) -> f64 {
    (-p.y).atan2(p.x)
}

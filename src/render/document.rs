//! SVG document output for an assembled scene.
//!
//! Coordinates and keyframe values are written with one decimal place. The
//! canvas is centred on the Sun: the view box spans `[-view_half, view_half]`
//! on both axes.

use std::path::{Path as FsPath, PathBuf};

use bevy::math::DVec2;
use svg::Document;
use svg::node::element::{
    Animate, Circle, Definitions, Filter, FilterEffectGaussianBlur, FilterEffectMerge,
    FilterEffectMergeNode, Group, Path, RadialGradient, Rectangle, Stop, Text,
};

use super::bodies::{body_color, marker_radius};
use super::orbits::{ORBIT_OPACITY, orbit_color};
use super::scene::{BodyGeometry, Scene};
use crate::time::format_jd;

const GLOW_FILTER_ID: &str = "glow";
const BACKGROUND_ID: &str = "space";
const SUN_COLOR: &str = "#ffcc33";
const SUN_RADIUS: f64 = 7.0;
const SUN_RING_RADIUS: f64 = 12.0;

#[derive(thiserror::Error, Debug)]
pub enum SceneWriteError {
    #[error("failed to write scene to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Format a value with one decimal, normalizing negative zero.
fn fmt1(v: f64) -> String {
    let s = format!("{v:.1}");
    if s == "-0.0" { "0.0".to_string() } else { s }
}

/// Closed path data `M x,y L x,y ... Z` for an outline.
pub fn path_data(points: &[DVec2]) -> String {
    let mut d = String::with_capacity(points.len() * 14);
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push(cmd);
        d.push_str(&fmt1(p.x));
        d.push(',');
        d.push_str(&fmt1(p.y));
        d.push(' ');
    }
    if !points.is_empty() {
        d.push('Z');
    }
    d
}

/// Keyframe values joined with `;` for an `<animate>` element.
pub fn keyframe_values(values: &[f64]) -> String {
    values.iter().map(|&v| fmt1(v)).collect::<Vec<_>>().join(";")
}

fn definitions() -> Definitions {
    let glow = Filter::new()
        .set("id", GLOW_FILTER_ID)
        .set("x", "-100%")
        .set("y", "-100%")
        .set("width", "300%")
        .set("height", "300%")
        .add(
            FilterEffectGaussianBlur::new()
                .set("stdDeviation", 2.5)
                .set("result", "blur"),
        )
        .add(
            FilterEffectMerge::new()
                .add(FilterEffectMergeNode::new().set("in", "blur"))
                .add(FilterEffectMergeNode::new().set("in", "SourceGraphic")),
        );

    let background = RadialGradient::new()
        .set("id", BACKGROUND_ID)
        .set("cx", "50%")
        .set("cy", "50%")
        .set("r", "70%")
        .add(Stop::new().set("offset", "0%").set("stop-color", "#0d1330"))
        .add(Stop::new().set("offset", "100%").set("stop-color", "#020308"));

    Definitions::new().add(glow).add(background)
}

fn orbit_path(body: &BodyGeometry) -> Path {
    Path::new()
        .set("d", path_data(&body.outline))
        .set("fill", "none")
        .set("stroke", orbit_color(body.id))
        .set("stroke-width", 1)
        .set("stroke-opacity", ORBIT_OPACITY)
}

fn sun() -> Group {
    Group::new()
        .set("id", "sun")
        .add(
            Circle::new()
                .set("cx", 0)
                .set("cy", 0)
                .set("r", SUN_RING_RADIUS)
                .set("fill", "none")
                .set("stroke", SUN_COLOR)
                .set("stroke-opacity", 0.25),
        )
        .add(
            Circle::new()
                .set("cx", 0)
                .set("cy", 0)
                .set("r", SUN_RADIUS)
                .set("fill", SUN_COLOR)
                .set("filter", format!("url(#{GLOW_FILTER_ID})")),
        )
}

fn axis_animation(attribute: &str, values: &[f64], dur_seconds: f64) -> Animate {
    Animate::new()
        .set("attributeName", attribute)
        .set("values", keyframe_values(values))
        .set("dur", format!("{dur_seconds}s"))
        .set("calcMode", "linear")
        .set("repeatCount", "indefinite")
}

fn planet_marker(body: &BodyGeometry, dur_seconds: f64) -> Circle {
    let start = body.initial_position();
    Circle::new()
        .set("id", body.id.name().to_lowercase())
        .set("cx", fmt1(start.x))
        .set("cy", fmt1(start.y))
        .set("r", marker_radius(body.id))
        .set("fill", body_color(body.id))
        .set("filter", format!("url(#{GLOW_FILTER_ID})"))
        .add(axis_animation("cx", &body.track.xs, dur_seconds))
        .add(axis_animation("cy", &body.track.ys, dur_seconds))
}

fn caption(scene: &Scene) -> Text {
    let half = scene.config.view_half;
    Text::new(format!(
        "{} to {}",
        format_jd(scene.span.start()),
        format_jd(scene.span.end())
    ))
    .set("x", fmt1(-half + 16.0))
    .set("y", fmt1(half - 16.0))
    .set("fill", "#8a96b0")
    .set("font-family", "sans-serif")
    .set("font-size", 12)
}

/// Build the SVG document for a scene.
///
/// Layer order: background, orbit outlines, Sun, planet markers, caption.
pub fn build_document(scene: &Scene) -> Document {
    let half = scene.config.view_half;
    let size = 2.0 * half;

    let mut orbits = Group::new().set("id", "orbits");
    for body in &scene.bodies {
        orbits = orbits.add(orbit_path(body));
    }

    let mut planets = Group::new().set("id", "planets");
    for body in &scene.bodies {
        planets = planets.add(planet_marker(body, scene.config.dur_seconds));
    }

    Document::new()
        .set("width", size)
        .set("height", size)
        .set(
            "viewBox",
            format!("{} {} {} {}", fmt1(-half), fmt1(-half), fmt1(size), fmt1(size)),
        )
        .add(definitions())
        .add(
            Rectangle::new()
                .set("x", fmt1(-half))
                .set("y", fmt1(-half))
                .set("width", fmt1(size))
                .set("height", fmt1(size))
                .set("fill", format!("url(#{BACKGROUND_ID})")),
        )
        .add(orbits)
        .add(sun())
        .add(planets)
        .add(caption(scene))
}

/// Serialize a scene and write it to `path` in one operation.
pub fn write_document(scene: &Scene, path: &FsPath) -> Result<(), SceneWriteError> {
    svg::save(path, &build_document(scene)).map_err(|source| SceneWriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

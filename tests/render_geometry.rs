//! Scene geometry tests across the full planet table.
//!
//! These check properties of the assembled scene rather than single functions:
//! radial ordering, angle preservation through the log map, and motion rates.

mod common;

use approx::assert_relative_eq;
use orrery::ephemeris::{ELEMENT_TABLE, PlanetId, position_au};
use orrery::render::{SceneConfig, compute_rmax_au, map_log_radial};

use common::{default_scene, ecliptic_angle, span_from};

fn mean_outline_radius(points: &[bevy::math::DVec2]) -> f64 {
    points.iter().map(|p| p.length()).sum::<f64>() / points.len() as f64
}

#[test]
fn test_orbits_nest_in_table_order() {
    let scene = default_scene(&span_from(2025, 1, 1, 365.0, 5.0));
    let radii: Vec<f64> = scene
        .bodies
        .iter()
        .map(|b| mean_outline_radius(&b.outline))
        .collect();
    for pair in radii.windows(2) {
        assert!(pair[0] < pair[1], "outline radii not increasing: {radii:?}");
    }
}

#[test]
fn test_outermost_orbit_inside_drawing_radius() {
    let span = span_from(2025, 1, 1, 365.0, 5.0);
    let scene = default_scene(&span);
    let neptune = scene.body(PlanetId::Neptune).unwrap();
    let max_r = neptune.outline.iter().map(|p| p.length()).fold(0.0, f64::max);

    // The 3% padding keeps the widest aphelion just short of the edge
    let expected = (1.0 + scene.r_max_au / 1.03).ln() / (1.0 + scene.r_max_au).ln()
        * scene.config.r_px_max;
    assert_relative_eq!(max_r, expected, max_relative = 1e-6);
    assert!(max_r < scene.config.r_px_max);
}

#[test]
fn test_rmax_set_by_neptune() {
    let jd = span_from(2025, 1, 1, 0.0, 1.0).start();
    let neptune_only = compute_rmax_au(&ELEMENT_TABLE[7..], jd);
    assert_relative_eq!(compute_rmax_au(&ELEMENT_TABLE, jd), neptune_only);
    assert!(neptune_only > 30.0 * 1.03 && neptune_only < 31.5 * 1.03);
}

#[test]
fn test_marker_angles_match_heliocentric_angles() {
    let span = span_from(2040, 5, 17, 120.0, 10.0);
    let scene = default_scene(&span);
    let times = span.sample_times();

    for body in &scene.bodies {
        for (i, &jd) in times.iter().enumerate() {
            let p_au = position_au(body.id.elements(), jd);
            let p_screen = body.track.point(i).unwrap();
            let diff = (ecliptic_angle(p_screen) - p_au.y.atan2(p_au.x)).sin();
            assert!(diff.abs() < 1e-9, "{} at sample {i}", body.id.name());
        }
    }
}

#[test]
fn test_inner_planets_move_faster_on_screen() {
    let scene = default_scene(&span_from(2025, 1, 1, 30.0, 30.0));
    let swept = |id: PlanetId| {
        let track = &scene.body(id).unwrap().track;
        let a = track.point(0).unwrap();
        let b = track.point(track.len() - 1).unwrap();
        let cos = a.dot(b) / (a.length() * b.length());
        cos.clamp(-1.0, 1.0).acos()
    };

    // Mercury's period is 88 days, so even near aphelion it sweeps over a radian
    assert!(swept(PlanetId::Mercury) > 1.0);
    assert!(swept(PlanetId::Mercury) > swept(PlanetId::Earth));
    assert!(swept(PlanetId::Earth) > swept(PlanetId::Jupiter));
    assert!(swept(PlanetId::Jupiter) > swept(PlanetId::Neptune));
}

#[test]
fn test_earth_outline_nearly_circular() {
    let scene = default_scene(&span_from(2025, 1, 1, 365.0, 5.0));
    let earth = scene.body(PlanetId::Earth).unwrap();
    let expected = map_log_radial(
        bevy::math::DVec2::X,
        scene.r_max_au,
        SceneConfig::default().r_px_max,
    )
    .x;
    for p in &earth.outline {
        assert_relative_eq!(p.length(), expected, max_relative = 0.03);
    }
}

#[test]
fn test_earth_returns_after_one_year() {
    let scene = default_scene(&span_from(2025, 1, 1, 365.25, 365.25));
    let track = &scene.body(PlanetId::Earth).unwrap().track;
    assert_eq!(track.len(), 2);
    let start = track.point(0).unwrap();
    let end = track.point(1).unwrap();
    assert!(start.distance(end) < 1.0, "{start:?} vs {end:?}");
}

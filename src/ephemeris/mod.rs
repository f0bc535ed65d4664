//! Ephemeris module for computing heliocentric planet positions.
//!
//! Positions come from analytic Keplerian elements with secular rates (and,
//! for the outer planets, periodic mean anomaly terms). There is no N-body
//! integration: every planet is an independent two-body problem.
//!
//! Coordinate frame:
//! - 2D heliocentric (Sun at origin), J2000 ecliptic plane, AU.
//! - The out-of-plane component is discarded after rotation.

pub mod data;
pub mod kepler;

#[cfg(test)]
mod proptest_ephemeris;

pub use data::{ELEMENT_TABLE, PlanetData, PlanetId};

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::angle::{wrap_deg, wrap_signed_deg, wrap_signed_rad};
use crate::time::centuries_since_j2000;
use crate::types::DEG_TO_RAD;

use self::kepler::solve_eccentric_anomaly;

/// Additional mean anomaly terms for Jupiter through Neptune (degrees).
///
/// `M += b·T² + c·cos(f·T) + s·sin(f·T)`, with `f·T` in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAnomalyCorrection {
    pub b: f64,
    pub c: f64,
    pub s: f64,
    pub f: f64,
}

impl MeanAnomalyCorrection {
    pub const NONE: Self = Self {
        b: 0.0,
        c: 0.0,
        s: 0.0,
        f: 0.0,
    };

    /// Whether any term is non-zero (inner planets carry none).
    pub fn is_active(&self) -> bool {
        self.b != 0.0 || self.c != 0.0 || self.s != 0.0 || self.f != 0.0
    }

    /// Correction in degrees at `t` Julian centuries from J2000.
    pub fn at(&self, t: f64) -> f64 {
        let arg = self.f * t * DEG_TO_RAD;
        self.b * t * t + self.c * arg.cos() + self.s * arg.sin()
    }
}

/// Keplerian elements at J2000 plus their linear rates.
/// Distances in AU, angles in degrees, rates per Julian century.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub semi_major_axis_rate: f64,
    pub eccentricity: f64,
    pub eccentricity_rate: f64,
    pub inclination: f64,
    pub inclination_rate: f64,
    pub mean_longitude: f64,
    pub mean_longitude_rate: f64,
    /// Longitude of perihelion ϖ
    pub long_perihelion: f64,
    pub long_perihelion_rate: f64,
    /// Longitude of the ascending node Ω
    pub long_node: f64,
    pub long_node_rate: f64,
    pub correction: MeanAnomalyCorrection,
}

impl OrbitalElements {
    /// Elements extrapolated to `t` centuries from J2000, angles wrapped to [0, 360).
    pub fn osculating(&self, t: f64) -> OsculatingElements {
        OsculatingElements {
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * t,
            eccentricity: self.eccentricity + self.eccentricity_rate * t,
            inclination: wrap_deg(self.inclination + self.inclination_rate * t),
            mean_longitude: wrap_deg(self.mean_longitude + self.mean_longitude_rate * t),
            long_perihelion: wrap_deg(self.long_perihelion + self.long_perihelion_rate * t),
            long_node: wrap_deg(self.long_node + self.long_node_rate * t),
        }
    }

    /// Mean anomaly in radians, normalized to (-π, π].
    pub fn mean_anomaly(&self, osc: &OsculatingElements, t: f64) -> f64 {
        let mut m = osc.mean_longitude - osc.long_perihelion;
        if self.correction.is_active() {
            m += self.correction.at(t);
        }
        wrap_signed_rad(wrap_signed_deg(m) * DEG_TO_RAD)
    }
}

/// Elements evaluated at a specific epoch. Angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OsculatingElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub mean_longitude: f64,
    pub long_perihelion: f64,
    pub long_node: f64,
}

impl OsculatingElements {
    /// Aphelion distance a(1+e) in AU.
    pub fn aphelion(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Argument of perihelion ω = ϖ - Ω, in [0, 360).
    pub fn argument_of_perihelion(&self) -> f64 {
        wrap_deg(self.long_perihelion - self.long_node)
    }

    /// Perifocal position for a given eccentric anomaly (x toward perihelion).
    pub fn perifocal_at_eccentric(&self, eccentric_anomaly: f64) -> DVec2 {
        let a = self.semi_major_axis;
        let e = self.eccentricity;
        DVec2::new(
            a * (eccentric_anomaly.cos() - e),
            a * (1.0 - e * e).sqrt() * eccentric_anomaly.sin(),
        )
    }

    /// Perifocal position for a given true anomaly, from r = a(1-e²)/(1+e·cos ν).
    pub fn perifocal_at_true(&self, true_anomaly: f64) -> DVec2 {
        let e = self.eccentricity;
        let r = self.semi_major_axis * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());
        DVec2::new(r * true_anomaly.cos(), r * true_anomaly.sin())
    }

    /// Rotate a perifocal point into the ecliptic plane through (ω, I, Ω),
    /// keeping only the in-plane components.
    pub fn perifocal_to_ecliptic(&self, p: DVec2) -> DVec2 {
        let w = self.argument_of_perihelion() * DEG_TO_RAD;
        let node = self.long_node * DEG_TO_RAD;
        let inc = self.inclination * DEG_TO_RAD;

        let (sin_w, cos_w) = w.sin_cos();
        let (sin_n, cos_n) = node.sin_cos();
        let cos_i = inc.cos();

        let x = (cos_w * cos_n - sin_w * sin_n * cos_i) * p.x
            + (-sin_w * cos_n - cos_w * sin_n * cos_i) * p.y;
        let y = (cos_w * sin_n + sin_w * cos_n * cos_i) * p.x
            + (-sin_w * sin_n + cos_w * cos_n * cos_i) * p.y;
        DVec2::new(x, y)
    }
}

/// Heliocentric ecliptic position in AU at Julian Day `jd`.
pub fn position_au(elements: &OrbitalElements, jd: f64) -> DVec2 {
    let t = centuries_since_j2000(jd);
    let osc = elements.osculating(t);
    let m = elements.mean_anomaly(&osc, t);
    let e_anomaly = solve_eccentric_anomaly(m, osc.eccentricity);
    osc.perifocal_to_ecliptic(osc.perifocal_at_eccentric(e_anomaly))
}

/// Resource holding the element table used to build a scene.
#[derive(Resource, Clone, Debug)]
pub struct Ephemeris {
    planets: Vec<PlanetData>,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::new(ELEMENT_TABLE.to_vec())
    }
}

impl Ephemeris {
    /// Ephemeris over a custom table. Row order is the draw order.
    pub fn new(planets: Vec<PlanetData>) -> Self {
        Self { planets }
    }

    pub fn planets(&self) -> &[PlanetData] {
        &self.planets
    }
}

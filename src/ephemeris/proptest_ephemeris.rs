//! Property-based tests for ephemeris computations using proptest.
//!
//! These tests verify that angle wrapping, the Kepler solver and the
//! propagator keep their expected properties across a wide range of inputs.

use proptest::prelude::*;
use std::f64::consts::PI;

use super::kepler::solve_eccentric_anomaly;
use super::{ELEMENT_TABLE, position_au};
use crate::angle::{wrap_deg, wrap_signed_deg, wrap_signed_rad};
use crate::time::centuries_since_j2000;
use crate::types::DEG_TO_RAD;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// wrap_deg lands in [0, 360) and is idempotent.
    #[test]
    fn prop_wrap_deg_range_and_idempotence(x in -1.0e7f64..1.0e7) {
        let w = wrap_deg(x);
        prop_assert!((0.0..360.0).contains(&w), "wrap_deg({}) = {}", x, w);
        prop_assert_eq!(wrap_deg(w), w);
    }

    /// wrap_signed_deg lands in (-180, 180] and is idempotent.
    #[test]
    fn prop_wrap_signed_deg_range_and_idempotence(x in -1.0e7f64..1.0e7) {
        let w = wrap_signed_deg(x);
        prop_assert!(w > -180.0 && w <= 180.0, "wrap_signed_deg({}) = {}", x, w);
        prop_assert_eq!(wrap_signed_deg(w), w);
    }

    /// Degree and radian wrapping agree after conversion.
    #[test]
    fn prop_wrap_degree_radian_agreement(x in -1.0e6f64..1.0e6) {
        let rad = wrap_signed_deg(x) * DEG_TO_RAD;
        prop_assert_eq!(wrap_signed_rad(rad), rad);
    }

    /// wrap_signed_rad lands in (-π, π] and preserves the angle modulo 2π.
    #[test]
    fn prop_wrap_signed_rad_equivalent_angle(x in -1.0e4f64..1.0e4) {
        let w = wrap_signed_rad(x);
        prop_assert!(w > -PI && w <= PI);
        prop_assert!((w.sin() - x.sin()).abs() < 1e-9);
        prop_assert!((w.cos() - x.cos()).abs() < 1e-9);
    }

    /// The fixed iteration budget solves Kepler's equation for planetary eccentricities.
    #[test]
    fn prop_kepler_solver_residual(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.2,
    ) {
        let m = wrap_signed_rad(-PI + mean_anomaly_normalized * 2.0 * PI);
        let e_anom = solve_eccentric_anomaly(m, eccentricity);
        let residual = (e_anom - eccentricity * e_anom.sin() - m).abs();
        prop_assert!(
            residual < 1e-9,
            "Kepler solver failed: M={}, e={}, E={}, residual={}",
            m, eccentricity, e_anom, residual
        );
    }

    /// Projected distance never exceeds the osculating aphelion.
    #[test]
    fn prop_position_bounded_by_aphelion(
        index in 0usize..8,
        days in -36525.0f64..36525.0,
    ) {
        let row = &ELEMENT_TABLE[index];
        let jd = 2451545.0 + days;
        let osc = row.elements.osculating(centuries_since_j2000(jd));
        let r = position_au(&row.elements, jd).length();
        prop_assert!(r.is_finite());
        prop_assert!(r <= osc.aphelion() + 1e-9, "{}: r = {}", row.id.name(), r);
    }

    /// Position changes smoothly from one day to the next.
    #[test]
    fn prop_position_continuity(
        index in 0usize..8,
        days in -3650.0f64..3650.0,
    ) {
        let row = &ELEMENT_TABLE[index];
        let jd = 2451545.0 + days;
        let p0 = position_au(&row.elements, jd);
        let p1 = position_au(&row.elements, jd + 1.0);
        // Mercury, the fastest planet, moves well under 0.05 AU per day
        prop_assert!((p1 - p0).length() < 0.05, "{}: jump of {}", row.id.name(), (p1 - p0).length());
    }
}

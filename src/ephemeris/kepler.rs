//! Kepler equation solver using a fixed-budget Newton's method.

/// Number of Newton iterations applied to Kepler's equation.
pub const KEPLER_ITERATIONS: usize = 10;

/// Solve Kepler's equation M = E - e*sin(E) for eccentric anomaly E
/// using Newton's method.
///
/// # Arguments
/// * `mean_anomaly` - Mean anomaly M in radians, expected in (-π, π]
/// * `eccentricity` - Orbital eccentricity in [0, 1)
///
/// # Returns
/// Eccentric anomaly E in radians
///
/// # Robustness
/// The iteration is seeded with E = M and always runs `KEPLER_ITERATIONS`
/// steps with no convergence check. For the planetary eccentricities in the
/// element table (e < 0.25) this reaches double precision well before the
/// budget runs out. Orbits approaching e = 1 are outside the supported range
/// and return whatever the fixed budget yields.
pub fn solve_eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anomaly = mean_anomaly;

    for _ in 0..KEPLER_ITERATIONS {
        // f(E) = E - e*sin(E) - M
        let f = e_anomaly - eccentricity * e_anomaly.sin() - mean_anomaly;
        // f'(E) = 1 - e*cos(E)
        let f_prime = 1.0 - eccentricity * e_anomaly.cos();

        e_anomaly -= f / f_prime;
    }

    e_anomaly
}

//! Shared constants for the orbital propagation pipeline.

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Julian Day of the J2000.0 epoch (January 1, 2000, 12:00 TT)
pub const J2000_JD: f64 = 2451545.0;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Radius below which a point is treated as the Sun's position (AU).
pub const ORIGIN_EPSILON_AU: f64 = 1e-12;

/// Padding applied to the largest aphelion so outer orbits stay on canvas.
pub const RMAX_PADDING: f64 = 1.03;

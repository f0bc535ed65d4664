//! Calendar and Julian Day conversions, and the sampled time span of a scene.
//!
//! All dates are proleptic Gregorian at 0h UT. No leap seconds or time zones.

use bevy::prelude::*;
use chrono::{Datelike, NaiveDate};

use crate::types::{DAYS_PER_CENTURY, J2000_JD};

/// Default keyframe spacing in days.
pub const DEFAULT_STEP_DAYS: f64 = 2.0;

/// Default animation length when no end date is given.
pub const DEFAULT_SPAN_DAYS: u64 = 365;

/// Upper bound on keyframes per planet.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Julian Day at 0h UT for a proleptic Gregorian calendar date.
///
/// Out-of-range month/day values are not rejected; they produce a defined but
/// meaningless day number.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045;
    jdn as f64 - 0.5
}

/// Calendar date `(year, month, day)` containing the given Julian Day.
pub fn calendar_date(jd: f64) -> (i32, u32, u32) {
    let jdn = (jd + 0.5).floor() as i64;
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146097);
    let c = a - (146097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u32, day as u32)
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Format a Julian Day as `YYYY-MM-DD`.
pub fn format_jd(jd: f64) -> String {
    let (y, m, d) = calendar_date(jd);
    format!("{y:04}-{m:02}-{d:02}")
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeSpanError {
    #[error("time span ends before it starts ({start} > {end})")]
    Inverted { start: f64, end: f64 },

    #[error("invalid sample step: {0} days (must be positive)")]
    InvalidStep(f64),

    #[error("non-finite time span bound")]
    NonFinite,

    #[error(
        "span of {duration} days at a {step} day step exceeds {limit} samples",
        limit = MAX_SAMPLES
    )]
    TooManySamples { duration: f64, step: f64 },
}

/// Time range of an animated scene, sampled every `step_days`.
///
/// Construction enforces `start <= end` and a positive finite step, so sampling
/// never fails.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct TimeSpan {
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
}

impl Default for TimeSpan {
    /// One year from today, sampled every `DEFAULT_STEP_DAYS`.
    fn default() -> Self {
        let today = chrono::Local::now().date_naive();
        let start_jd = julian_day(today.year(), today.month(), today.day());
        Self {
            start_jd,
            end_jd: start_jd + DEFAULT_SPAN_DAYS as f64,
            step_days: DEFAULT_STEP_DAYS,
        }
    }
}

impl TimeSpan {
    pub fn new(start_jd: f64, end_jd: f64, step_days: f64) -> Result<Self, TimeSpanError> {
        if !start_jd.is_finite() || !end_jd.is_finite() {
            return Err(TimeSpanError::NonFinite);
        }
        if step_days <= 0.0 || !step_days.is_finite() {
            return Err(TimeSpanError::InvalidStep(step_days));
        }
        if start_jd > end_jd {
            return Err(TimeSpanError::Inverted {
                start: start_jd,
                end: end_jd,
            });
        }
        let duration = end_jd - start_jd;
        if duration / step_days >= MAX_SAMPLES as f64 {
            return Err(TimeSpanError::TooManySamples {
                duration,
                step: step_days,
            });
        }
        Ok(Self {
            start_jd,
            end_jd,
            step_days,
        })
    }

    /// Span between two calendar dates (both at 0h UT).
    pub fn from_dates(
        start: NaiveDate,
        end: NaiveDate,
        step_days: f64,
    ) -> Result<Self, TimeSpanError> {
        Self::new(
            julian_day(start.year(), start.month(), start.day()),
            julian_day(end.year(), end.month(), end.day()),
            step_days,
        )
    }

    pub fn start(&self) -> f64 {
        self.start_jd
    }

    pub fn end(&self) -> f64 {
        self.end_jd
    }

    pub fn step_days(&self) -> f64 {
        self.step_days
    }

    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Epoch at which orbit outlines and `r_max_au` are evaluated.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start_jd + self.end_jd)
    }

    /// Number of keyframe samples: `floor(duration / step) + 1`.
    ///
    /// A non-empty span always keeps both of its endpoints, so a step longer
    /// than the span still yields two samples.
    pub fn sample_count(&self) -> usize {
        let n = ((self.duration_days() / self.step_days).floor() as usize).saturating_add(1);
        if self.duration_days() > 0.0 { n.max(2) } else { n }
    }

    /// Keyframe sample times in JD.
    ///
    /// Samples are `step_days` apart starting at `start`; the last one is
    /// pinned to `end` exactly, even when the step does not divide the span.
    pub fn sample_times(&self) -> Vec<f64> {
        let n = self.sample_count();
        let mut times: Vec<f64> = (0..n)
            .map(|i| self.start_jd + i as f64 * self.step_days)
            .collect();
        if let Some(last) = times.last_mut() {
            *last = self.end_jd;
        }
        times
    }
}

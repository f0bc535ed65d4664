//! Command-line interface for rendering an orrery animation.

use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use clap::Parser;

use crate::render::{ConfigError, OutputPath, SceneConfig};
use crate::time::{DEFAULT_SPAN_DAYS, DEFAULT_STEP_DAYS, TimeSpan, TimeSpanError};

#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "Render the planets' motion as an animated, log-scaled SVG")]
#[command(version)]
pub struct Cli {
    /// First day of the animation, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the animation, YYYY-MM-DD (defaults to a year after start)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Days between animation keyframes
    #[arg(long, default_value_t = DEFAULT_STEP_DAYS)]
    pub step_days: f64,

    /// Length of one animation loop in seconds
    #[arg(long, default_value_t = 60.0)]
    pub duration: f64,

    /// Half-width of the square canvas
    #[arg(long, default_value_t = 500.0)]
    pub view_half: f64,

    /// Drawing radius of the outermost orbit
    #[arg(long, default_value_t = 460.0)]
    pub r_px_max: f64,

    /// Output SVG file
    #[arg(short, long, default_value = "solar_system.svg")]
    pub output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CliError {
    #[error("cannot extend start date {0} by the default span")]
    DateOutOfRange(NaiveDate),

    #[error(transparent)]
    Span(#[from] TimeSpanError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Validated inputs for one rendering run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub span: TimeSpan,
    pub config: SceneConfig,
    pub output: OutputPath,
    pub verbose: bool,
}

impl Cli {
    /// Resolve defaults against `today` and validate everything.
    pub fn into_settings(self, today: NaiveDate) -> Result<Settings, CliError> {
        let config = SceneConfig {
            view_half: self.view_half,
            r_px_max: self.r_px_max,
            dur_seconds: self.duration,
            ..SceneConfig::default()
        };
        config.validate()?;

        let start = self.start.unwrap_or(today);
        let end = match self.end {
            Some(end) => end,
            None => start
                .checked_add_days(Days::new(DEFAULT_SPAN_DAYS))
                .ok_or(CliError::DateOutOfRange(start))?,
        };
        let span = TimeSpan::from_dates(start, end, self.step_days)?;

        Ok(Settings {
            span,
            config,
            output: OutputPath(self.output),
            verbose: self.verbose,
        })
    }
}

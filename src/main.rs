//! Orrery - Log-Scaled Solar System Animation
//!
//! Renders one animated SVG of the planets over a date range and exits.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use orrery::cli::Cli;
use orrery::ephemeris::Ephemeris;
use orrery::render::ScenePlugin;

fn main() -> AppExit {
    let today = chrono::Local::now().date_naive();
    let settings = match Cli::parse().into_settings(today) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err}");
            return AppExit::error();
        }
    };

    let level = if settings.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin {
            level,
            ..default()
        })
        // Insert resources before the plugin that depends on them
        .insert_resource(Ephemeris::default())
        .insert_resource(settings.span)
        .insert_resource(settings.config)
        .insert_resource(settings.output)
        .add_plugins(ScenePlugin)
        .run()
}

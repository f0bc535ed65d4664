//! Orrery - Log-Scaled Solar System Animation
//!
//! A library crate that propagates the eight planets from JPL mean Keplerian
//! elements and renders their motion as a self-contained animated SVG.

pub mod angle;
pub mod cli;
pub mod ephemeris;
pub mod render;
pub mod time;
pub mod types;

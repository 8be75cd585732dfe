//! Entrance-to-line route planning.
//!
//! Routes follow the road network: up the central spine to the target's
//! latitude band, across to its side of the road, then to the line itself.
//! This keeps drawn paths on roads instead of cutting diagonally across
//! other lines' polygons.

mod config;
mod route;

pub use config::PlannerConfig;
pub use route::{Band, Route, Side, classify_band, classify_side, plan_route};

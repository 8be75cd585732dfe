//! Static market geometry.
//!
//! Generates the polygon and label anchor of every market line, and the
//! fixed junction graph of the road network. Everything here is derived
//! from hand-tuned per-market constants at startup; there is no I/O and
//! construction cannot fail.

mod builder;
mod geometry;
mod junctions;

pub use builder::{LayoutConfig, build_layout};
pub use geometry::LineLayout;
pub use junctions::{Junction, JunctionGraph, build_junctions};

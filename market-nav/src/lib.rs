//! Market navigation core.
//!
//! A pure, stateless library that models a single market as named lines
//! arranged around a fixed road network, matches free-text product queries
//! to the line that sells them, and plans a walkable route from the market
//! entrance to any line through a small junction graph.

pub mod domain;
pub mod layout;
pub mod market;
pub mod planner;
pub mod search;

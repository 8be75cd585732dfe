//! Domain types for the market navigator.
//!
//! This module contains the core value types shared by the layout, planner,
//! and search modules. Types validate their invariants at construction time,
//! so code that receives them can trust their validity.

mod catalog;
mod line_id;
mod point;

pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use line_id::{InvalidLineId, LineId};
pub use point::GeoPoint;

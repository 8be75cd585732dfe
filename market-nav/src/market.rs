//! The market as one immutable object.
//!
//! Everything the planner and a renderer need — the line layout table, the
//! junction graph, and per-market tuning — is built here once at startup
//! and only read afterwards. There is no interior mutability: a `Market`
//! can be shared across threads freely with no locking.

use std::collections::HashMap;

use crate::domain::{GeoPoint, LineId};
use crate::layout::{
    JunctionGraph, LayoutConfig, LineLayout, build_junctions, build_layout,
};
use crate::planner::{PlannerConfig, Route, classify_band, classify_side, plan_route};

/// Band half-height for Bamenda Main Market. Coupled to the block geometry
/// in [`LayoutConfig::default`]; not a general tuning knob.
const BAMENDA_BAND_EPSILON: f64 = 0.001;

/// A market: layouts, junctions, and planner configuration, built once.
#[derive(Debug, Clone)]
pub struct Market {
    layout_config: LayoutConfig,
    planner_config: PlannerConfig,
    layouts: HashMap<LineId, LineLayout>,
    junctions: JunctionGraph,
}

impl Market {
    /// Build a market from its geometry and side groups.
    ///
    /// The id lists drive both the column layout (order = stacking order,
    /// top first) and the planner's side classification.
    pub fn new(
        layout_config: LayoutConfig,
        band_epsilon: f64,
        left_ids: Vec<LineId>,
        right_ids: Vec<LineId>,
    ) -> Self {
        let layouts = build_layout(&layout_config, &left_ids, &right_ids);
        let junctions = build_junctions(&layout_config);
        let planner_config = PlannerConfig::new(band_epsilon, left_ids, right_ids);

        Self {
            layout_config,
            planner_config,
            layouts,
            junctions,
        }
    }

    /// The Bamenda Main Market instance.
    ///
    /// Five Roman-numeral lines west of the central road, ten decimal lines
    /// east of it, both columns stacked from the north end.
    pub fn bamenda() -> Self {
        let left = ids(&["LV", "LIV", "LIII", "LII", "LI"]);
        let right = ids(&[
            "L1", "L2", "L3", "L4", "L5", "L6", "L7", "L8", "L9", "L10",
        ]);

        Self::new(LayoutConfig::default(), BAMENDA_BAND_EPSILON, left, right)
    }

    /// Layout of a single line, if it exists.
    pub fn layout(&self, id: &LineId) -> Option<&LineLayout> {
        self.layouts.get(id)
    }

    /// All line layouts, for rendering the market polygons.
    pub fn layouts(&self) -> &HashMap<LineId, LineLayout> {
        &self.layouts
    }

    /// The junction graph.
    pub fn junctions(&self) -> &JunctionGraph {
        &self.junctions
    }

    /// The geometry constants this market was built from.
    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout_config
    }

    /// The planner configuration this market was built from.
    pub fn planner_config(&self) -> &PlannerConfig {
        &self.planner_config
    }

    /// The road network as polylines, for visualisation.
    pub fn roads(&self) -> Vec<Vec<GeoPoint>> {
        self.junctions.roads()
    }

    /// Plan the walk from the entrance to a line.
    ///
    /// Returns the empty route when the id has no layout — "no route
    /// available" is a result, not an error.
    pub fn plan_route(&self, id: &LineId) -> Route {
        let Some(target) = self.layouts.get(id) else {
            return Route::empty();
        };

        let band = classify_band(
            target.label_anchor,
            self.layout_config.center.lat,
            self.planner_config.band_epsilon,
        );
        let side = classify_side(id, &self.planner_config);

        plan_route(target, band, side, &self.junctions)
    }
}

fn ids(raw: &[&str]) -> Vec<LineId> {
    raw.iter().filter_map(|s| LineId::parse(s).ok()).collect()
}

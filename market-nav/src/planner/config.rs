//! Planner configuration.

use std::collections::HashSet;

use crate::domain::LineId;

/// Route-planning parameters for one market instance.
///
/// Like the layout constants, these are market data rather than tunable
/// algorithm parameters: the band width is coupled to the specific block
/// geometry, and the side groups are an authored enumeration.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Half-height of the middle latitude band, in degrees.
    ///
    /// Anchors below `center.lat - band_epsilon` are in the bottom band,
    /// those above `center.lat + band_epsilon` in the top band, everything
    /// else in the middle band.
    pub band_epsilon: f64,

    /// Ids of the lines on the left side of the road.
    ///
    /// Side classification is membership in this set, not a coordinate
    /// comparison. Ids outside both groups route as right-side.
    pub left_ids: HashSet<LineId>,

    /// Ids of the lines on the right side of the road.
    ///
    /// Not consulted for routing (everything not in `left_ids` goes right);
    /// kept so the planner can tell a genuine right-side line apart from an
    /// id that was never assigned to either group.
    pub right_ids: HashSet<LineId>,
}

impl PlannerConfig {
    /// Create a configuration from the two side groups.
    pub fn new(
        band_epsilon: f64,
        left_ids: impl IntoIterator<Item = LineId>,
        right_ids: impl IntoIterator<Item = LineId>,
    ) -> Self {
        Self {
            band_epsilon,
            left_ids: left_ids.into_iter().collect(),
            right_ids: right_ids.into_iter().collect(),
        }
    }
}

//! Market layout generation.
//!
//! Lays two columns of equal-size blocks out symmetrically around the market
//! centre, leaving a gap between them for the central road. Blocks in a
//! column are stacked top-first, one per line id, each separated from the
//! next by a fixed gap.

use std::collections::HashMap;

use crate::domain::{GeoPoint, LineId};

use super::geometry::{LineLayout, block_center, block_corners};

/// Fill colour for left-column lines.
const LEFT_COLOR: &str = "#60a5fa";

/// Fill colour for right-column lines.
const RIGHT_COLOR: &str = "#f472b6";

/// Geometry constants for one market instance.
///
/// These are hand-tuned values for a specific market, not parameters of a
/// general layout algorithm. The defaults describe Bamenda Main Market.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Market centre point.
    pub center: GeoPoint,

    /// Block width in degrees of longitude.
    pub block_width: f64,

    /// Block height in degrees of latitude.
    pub block_height: f64,

    /// Vertical gap between consecutive blocks in a column.
    pub row_gap: f64,

    /// Longitude offset from the centre to each column's road-side edge.
    pub column_offset: f64,

    /// How far south of the centre the entrance sits.
    pub entrance_offset: f64,

    /// Latitude offset of the top and bottom junction rows.
    pub junction_offset: f64,
}

impl LayoutConfig {
    /// Latitude of the topmost block's top edge.
    pub fn top_lat(&self) -> f64 {
        self.center.lat + self.block_height * 2.5
    }

    /// Vertical distance between consecutive top-left anchors in a column.
    pub fn row_pitch(&self) -> f64 {
        self.block_height + self.row_gap
    }

    /// Longitude of the left column's western edge.
    pub fn left_column_lng(&self) -> f64 {
        self.center.lng - self.column_offset - self.block_width
    }

    /// Longitude of the right column's western edge.
    pub fn right_column_lng(&self) -> f64 {
        self.center.lng + self.column_offset
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        // Bamenda Main Market, approximated around its centre point.
        Self {
            center: GeoPoint::new(5.9631, 10.1591),
            block_width: 0.00025,
            block_height: 0.00015,
            row_gap: 0.00005,
            column_offset: 0.0005,
            entrance_offset: 0.0020,
            junction_offset: 0.0015,
        }
    }
}

/// Generate the layout of every market line.
///
/// Each id list becomes one vertical column of blocks, first id topmost,
/// descending by `row_pitch` per step so consecutive lines are adjacent
/// with no overlap. The two columns mirror each other around the central
/// road.
pub fn build_layout(
    config: &LayoutConfig,
    left_ids: &[LineId],
    right_ids: &[LineId],
) -> HashMap<LineId, LineLayout> {
    let mut layouts = HashMap::with_capacity(left_ids.len() + right_ids.len());
    place_column(&mut layouts, config, left_ids, config.left_column_lng(), LEFT_COLOR);
    place_column(&mut layouts, config, right_ids, config.right_column_lng(), RIGHT_COLOR);
    layouts
}

fn place_column(
    out: &mut HashMap<LineId, LineLayout>,
    config: &LayoutConfig,
    ids: &[LineId],
    column_lng: f64,
    color: &str,
) {
    for (row, id) in ids.iter().enumerate() {
        let top_left = GeoPoint::new(
            config.top_lat() - row as f64 * config.row_pitch(),
            column_lng,
        );
        let corners = block_corners(top_left, config.block_width, config.block_height);

        out.insert(
            id.clone(),
            LineLayout {
                id: id.clone(),
                boundary: corners.to_vec(),
                label_anchor: block_center(&corners),
                color: color.to_string(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn ids(raw: &[&str]) -> Vec<LineId> {
        raw.iter().map(|s| id(s)).collect()
    }

    #[test]
    fn default_config_is_bamenda() {
        let config = LayoutConfig::default();
        assert_eq!(config.center, GeoPoint::new(5.9631, 10.1591));
        assert_eq!(config.block_width, 0.00025);
        assert_eq!(config.block_height, 0.00015);
        assert_eq!(config.row_gap, 0.00005);
        assert_eq!(config.column_offset, 0.0005);
        assert_eq!(config.entrance_offset, 0.0020);
        assert_eq!(config.junction_offset, 0.0015);
    }

    #[test]
    fn one_layout_per_id() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LI", "LII"]), &ids(&["L1", "L2", "L3"]));
        assert_eq!(layouts.len(), 5);
        assert!(layouts.contains_key(&id("LII")));
        assert!(layouts.contains_key(&id("L3")));
    }

    #[test]
    fn first_id_is_topmost() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LV", "LIV"]), &[]);

        let top = layouts[&id("LV")].label_anchor.lat;
        let below = layouts[&id("LIV")].label_anchor.lat;
        assert!(top > below);
    }

    #[test]
    fn consecutive_blocks_are_adjacent_without_overlap() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LV", "LIV", "LIII"]), &[]);

        // Bottom edge of one block sits exactly one gap above the next
        // block's top edge.
        let upper_bottom = layouts[&id("LV")].boundary[2].lat;
        let lower_top = layouts[&id("LIV")].boundary[0].lat;
        assert!((upper_bottom - lower_top - config.row_gap).abs() < 1e-12);
    }

    #[test]
    fn columns_mirror_around_the_road() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LI"]), &ids(&["L1"]));

        // The left block's eastern edge and the right block's western edge
        // are each one column offset from the centre longitude.
        let left_east = layouts[&id("LI")].boundary[1].lng;
        let right_west = layouts[&id("L1")].boundary[0].lng;
        assert!((left_east - (config.center.lng - config.column_offset)).abs() < 1e-12);
        assert!((right_west - (config.center.lng + config.column_offset)).abs() < 1e-12);
    }

    #[test]
    fn anchor_is_the_block_centroid() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LI"]), &[]);

        let layout = &layouts[&id("LI")];
        let expected_lat = (layout.boundary[0].lat + layout.boundary[2].lat) / 2.0;
        let expected_lng = (layout.boundary[0].lng + layout.boundary[2].lng) / 2.0;
        assert!((layout.label_anchor.lat - expected_lat).abs() < 1e-12);
        assert!((layout.label_anchor.lng - expected_lng).abs() < 1e-12);
    }

    #[test]
    fn columns_are_colored_per_side() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LI"]), &ids(&["L1"]));
        assert_eq!(layouts[&id("LI")].color, LEFT_COLOR);
        assert_eq!(layouts[&id("L1")].color, RIGHT_COLOR);
    }

    #[test]
    fn boundary_is_a_quadrilateral() {
        let config = LayoutConfig::default();
        let layouts = build_layout(&config, &ids(&["LI"]), &[]);
        assert_eq!(layouts[&id("LI")].boundary.len(), 4);
    }
}

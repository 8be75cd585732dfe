//! Block geometry for market lines.

use crate::domain::{GeoPoint, LineId};

/// Rendered geometry for one market line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Line id; foreign key into the catalog.
    pub id: LineId,
    /// Corner points of the line's polygon. Insertion order is the winding
    /// order; it matters for rendering but not for routing.
    pub boundary: Vec<GeoPoint>,
    /// Polygon centroid. Used as both the visual label position and the
    /// routing destination.
    pub label_anchor: GeoPoint,
    /// Display colour (hex). No routing meaning.
    pub color: String,
}

/// Four corners of an axis-aligned block, clockwise from the given top-left
/// point.
pub(crate) fn block_corners(top_left: GeoPoint, width: f64, height: f64) -> [GeoPoint; 4] {
    [
        GeoPoint::new(top_left.lat, top_left.lng),
        GeoPoint::new(top_left.lat, top_left.lng + width),
        GeoPoint::new(top_left.lat - height, top_left.lng + width),
        GeoPoint::new(top_left.lat - height, top_left.lng),
    ]
}

/// Centre of a block: midpoint of the top-left and bottom-right corners.
pub(crate) fn block_center(corners: &[GeoPoint; 4]) -> GeoPoint {
    GeoPoint::new(
        (corners[0].lat + corners[2].lat) / 2.0,
        (corners[0].lng + corners[2].lng) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_wind_clockwise_from_top_left() {
        let corners = block_corners(GeoPoint::new(5.0, 10.0), 0.2, 0.1);
        assert_eq!(
            corners,
            [
                GeoPoint::new(5.0, 10.0),
                GeoPoint::new(5.0, 10.2),
                GeoPoint::new(4.9, 10.2),
                GeoPoint::new(4.9, 10.0),
            ]
        );
    }

    #[test]
    fn center_is_the_block_midpoint() {
        let corners = block_corners(GeoPoint::new(5.0, 10.0), 0.2, 0.1);
        let center = block_center(&corners);
        assert!((center.lat - 4.95).abs() < 1e-12);
        assert!((center.lng - 10.1).abs() < 1e-12);
    }
}

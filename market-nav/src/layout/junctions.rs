//! The market road network.
//!
//! A fixed set of named junctions: a central spine running north from the
//! entrance through the market, crossed by three horizontal spurs that reach
//! the side columns. The graph is derived once from the market geometry and
//! never changes at runtime.

use crate::domain::GeoPoint;

use super::builder::LayoutConfig;

/// A named waypoint in the road network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Junction {
    /// The single market entrance, south of everything else.
    Entrance,
    /// Spine junction at the bottom latitude band.
    BottomCenter,
    /// Spine junction at the market centre.
    MiddleCenter,
    /// Spine junction at the top latitude band.
    TopCenter,
    /// Left-column access at the bottom band.
    LeftBottom,
    /// Left-column access at the middle band.
    LeftMiddle,
    /// Left-column access at the top band.
    LeftTop,
    /// Right-column access at the bottom band.
    RightBottom,
    /// Right-column access at the middle band.
    RightMiddle,
    /// Right-column access at the top band.
    RightTop,
}

impl Junction {
    /// Every junction, in no particular order.
    pub const ALL: [Junction; 10] = [
        Junction::Entrance,
        Junction::BottomCenter,
        Junction::MiddleCenter,
        Junction::TopCenter,
        Junction::LeftBottom,
        Junction::LeftMiddle,
        Junction::LeftTop,
        Junction::RightBottom,
        Junction::RightMiddle,
        Junction::RightTop,
    ];
}

/// Junction positions for one market.
///
/// Immutable after construction; share freely.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionGraph {
    entrance: GeoPoint,
    bottom_center: GeoPoint,
    middle_center: GeoPoint,
    top_center: GeoPoint,
    left_bottom: GeoPoint,
    left_middle: GeoPoint,
    left_top: GeoPoint,
    right_bottom: GeoPoint,
    right_middle: GeoPoint,
    right_top: GeoPoint,
}

impl JunctionGraph {
    /// Position of a junction.
    pub fn position(&self, junction: Junction) -> GeoPoint {
        match junction {
            Junction::Entrance => self.entrance,
            Junction::BottomCenter => self.bottom_center,
            Junction::MiddleCenter => self.middle_center,
            Junction::TopCenter => self.top_center,
            Junction::LeftBottom => self.left_bottom,
            Junction::LeftMiddle => self.left_middle,
            Junction::LeftTop => self.left_top,
            Junction::RightBottom => self.right_bottom,
            Junction::RightMiddle => self.right_middle,
            Junction::RightTop => self.right_top,
        }
    }

    /// The full road network as polylines, for visualisation independent of
    /// any specific route: the central spine plus the three crossbars.
    pub fn roads(&self) -> Vec<Vec<GeoPoint>> {
        vec![
            vec![
                self.entrance,
                self.bottom_center,
                self.middle_center,
                self.top_center,
            ],
            vec![self.left_bottom, self.bottom_center, self.right_bottom],
            vec![self.left_middle, self.middle_center, self.right_middle],
            vec![self.left_top, self.top_center, self.right_top],
        ]
    }
}

/// Derive the junction graph from the market geometry.
///
/// The spine sits on the centre longitude; side junctions sit on each
/// column's road-side edge, at the same three latitudes as the spine's
/// band junctions.
pub fn build_junctions(config: &LayoutConfig) -> JunctionGraph {
    let spine_lng = config.center.lng;
    let left_lng = config.center.lng - config.column_offset;
    let right_lng = config.center.lng + config.column_offset;

    let bottom_lat = config.center.lat - config.junction_offset;
    let middle_lat = config.center.lat;
    let top_lat = config.center.lat + config.junction_offset;

    JunctionGraph {
        entrance: GeoPoint::new(config.center.lat - config.entrance_offset, spine_lng),
        bottom_center: GeoPoint::new(bottom_lat, spine_lng),
        middle_center: GeoPoint::new(middle_lat, spine_lng),
        top_center: GeoPoint::new(top_lat, spine_lng),
        left_bottom: GeoPoint::new(bottom_lat, left_lng),
        left_middle: GeoPoint::new(middle_lat, left_lng),
        left_top: GeoPoint::new(top_lat, left_lng),
        right_bottom: GeoPoint::new(bottom_lat, right_lng),
        right_middle: GeoPoint::new(middle_lat, right_lng),
        right_top: GeoPoint::new(top_lat, right_lng),
    }
}

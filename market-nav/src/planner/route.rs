//! Route synthesis over the junction graph.

use tracing::debug;

use crate::domain::{GeoPoint, LineId};
use crate::layout::{Junction, JunctionGraph, LineLayout};

use super::config::PlannerConfig;

/// Latitude band of a line relative to the market centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Below `center - band_epsilon`.
    Bottom,
    /// Within `band_epsilon` of the centre.
    Middle,
    /// Above `center + band_epsilon`.
    Top,
}

/// Side of the central road a line sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Classify an anchor's latitude band.
///
/// Total: every latitude falls in exactly one band.
pub fn classify_band(anchor: GeoPoint, center_lat: f64, band_epsilon: f64) -> Band {
    if anchor.lat < center_lat - band_epsilon {
        Band::Bottom
    } else if anchor.lat < center_lat + band_epsilon {
        Band::Middle
    } else {
        Band::Top
    }
}

/// Classify which side of the road a line id belongs to.
///
/// Membership in the enumerated left group wins; everything else routes
/// right. An id in neither group still routes right, but is worth a log
/// line since it usually means a line was added without updating the
/// side groups.
pub fn classify_side(id: &LineId, config: &PlannerConfig) -> Side {
    if config.left_ids.contains(id) {
        return Side::Left;
    }
    if !config.right_ids.contains(id) {
        debug!(line = %id, "line id is in neither side group; routing as right side");
    }
    Side::Right
}

/// Spine junctions to traverse for a band, in walking order from the
/// entrance.
fn spine(band: Band) -> &'static [Junction] {
    match band {
        Band::Bottom => &[Junction::BottomCenter],
        Band::Middle => &[Junction::BottomCenter, Junction::MiddleCenter],
        Band::Top => &[
            Junction::BottomCenter,
            Junction::MiddleCenter,
            Junction::TopCenter,
        ],
    }
}

/// The side junction where the route leaves the spine.
fn branch(band: Band, side: Side) -> Junction {
    match (band, side) {
        (Band::Bottom, Side::Left) => Junction::LeftBottom,
        (Band::Middle, Side::Left) => Junction::LeftMiddle,
        (Band::Top, Side::Left) => Junction::LeftTop,
        (Band::Bottom, Side::Right) => Junction::RightBottom,
        (Band::Middle, Side::Right) => Junction::RightMiddle,
        (Band::Top, Side::Right) => Junction::RightTop,
    }
}

/// An ordered walk through the market.
///
/// Non-empty routes start at the entrance and end at a line's label anchor,
/// passing through 2-4 junctions on the way. Produced fresh per query;
/// never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    waypoints: Vec<GeoPoint>,
}

impl Route {
    /// Creates a route from ordered waypoints.
    pub fn new(waypoints: Vec<GeoPoint>) -> Self {
        Self { waypoints }
    }

    /// The empty route: "no route available".
    pub fn empty() -> Self {
        Self::default()
    }

    /// The waypoints in walking order.
    pub fn waypoints(&self) -> &[GeoPoint] {
        &self.waypoints
    }

    /// Number of waypoints.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns true if there is no route.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First waypoint (the entrance, for a planned route).
    pub fn start(&self) -> Option<GeoPoint> {
        self.waypoints.first().copied()
    }

    /// Last waypoint (the target's label anchor, for a planned route).
    pub fn end(&self) -> Option<GeoPoint> {
        self.waypoints.last().copied()
    }

    /// Total great-circle length of the route in metres.
    pub fn length_meters(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance_meters(&pair[1]))
            .sum()
    }

    /// South-west and north-east corners of the route's bounding box, for
    /// fitting a map viewport. `None` for the empty route.
    pub fn bounds(&self) -> Option<(GeoPoint, GeoPoint)> {
        let first = self.waypoints.first()?;
        let mut south_west = *first;
        let mut north_east = *first;

        for point in &self.waypoints[1..] {
            south_west.lat = south_west.lat.min(point.lat);
            south_west.lng = south_west.lng.min(point.lng);
            north_east.lat = north_east.lat.max(point.lat);
            north_east.lng = north_east.lng.max(point.lng);
        }

        Some((south_west, north_east))
    }
}

/// Build the walkable route from the entrance to a line.
///
/// The route walks the spine monotonically up to the target band's centre
/// junction, branches to the band's side junction, then finishes at the
/// line's label anchor.
pub fn plan_route(
    target: &LineLayout,
    band: Band,
    side: Side,
    junctions: &JunctionGraph,
) -> Route {
    let spine = spine(band);

    let mut waypoints = Vec::with_capacity(spine.len() + 3);
    waypoints.push(junctions.position(Junction::Entrance));
    for junction in spine {
        waypoints.push(junctions.position(*junction));
    }
    waypoints.push(junctions.position(branch(band, side)));
    waypoints.push(target.label_anchor);

    debug!(
        line = %target.id,
        ?band,
        ?side,
        waypoints = waypoints.len(),
        "planned route"
    );

    Route::new(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, build_junctions, build_layout};

    fn id(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    #[test]
    fn band_thresholds() {
        let center = 5.9631;
        let eps = 0.001;

        assert_eq!(
            classify_band(GeoPoint::new(center - 0.0015, 0.0), center, eps),
            Band::Bottom
        );
        assert_eq!(
            classify_band(GeoPoint::new(center, 0.0), center, eps),
            Band::Middle
        );
        assert_eq!(
            classify_band(GeoPoint::new(center + 0.0015, 0.0), center, eps),
            Band::Top
        );

        // Boundary latitudes are inclusive upward: exactly on a threshold
        // falls into the higher band.
        assert_eq!(
            classify_band(GeoPoint::new(center - eps, 0.0), center, eps),
            Band::Middle
        );
        assert_eq!(
            classify_band(GeoPoint::new(center + eps, 0.0), center, eps),
            Band::Top
        );
    }

    #[test]
    fn side_is_membership_not_geometry() {
        let config = PlannerConfig::new(0.001, vec![id("LI")], vec![id("L1")]);

        assert_eq!(classify_side(&id("LI"), &config), Side::Left);
        assert_eq!(classify_side(&id("L1"), &config), Side::Right);
        // Unknown ids fall back to the right side.
        assert_eq!(classify_side(&id("L99"), &config), Side::Right);
    }

    #[test]
    fn spine_lengthens_with_band() {
        assert_eq!(spine(Band::Bottom).len(), 1);
        assert_eq!(spine(Band::Middle).len(), 2);
        assert_eq!(spine(Band::Top).len(), 3);
        assert_eq!(spine(Band::Top)[0], Junction::BottomCenter);
        assert_eq!(spine(Band::Top)[2], Junction::TopCenter);
    }

    #[test]
    fn branch_matches_band_and_side() {
        assert_eq!(branch(Band::Middle, Side::Left), Junction::LeftMiddle);
        assert_eq!(branch(Band::Bottom, Side::Right), Junction::RightBottom);
        assert_eq!(branch(Band::Top, Side::Left), Junction::LeftTop);
    }

    #[test]
    fn planned_route_runs_entrance_to_anchor() {
        let config = LayoutConfig::default();
        let junctions = build_junctions(&config);
        let layouts = build_layout(&config, &[id("LI")], &[]);
        let target = &layouts[&id("LI")];

        let route = plan_route(target, Band::Middle, Side::Left, &junctions);

        assert_eq!(route.start(), Some(junctions.position(Junction::Entrance)));
        assert_eq!(route.end(), Some(target.label_anchor));
        // entrance, two spine junctions, side junction, anchor
        assert_eq!(route.len(), 5);
        assert_eq!(
            route.waypoints()[3],
            junctions.position(Junction::LeftMiddle)
        );
    }

    #[test]
    fn empty_route() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert_eq!(route.len(), 0);
        assert_eq!(route.start(), None);
        assert_eq!(route.end(), None);
        assert_eq!(route.length_meters(), 0.0);
        assert_eq!(route.bounds(), None);
    }

    #[test]
    fn length_sums_segment_distances() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let c = GeoPoint::new(2.0, 0.0);
        let route = Route::new(vec![a, b, c]);

        let expected = a.distance_meters(&b) + b.distance_meters(&c);
        assert!((route.length_meters() - expected).abs() < 1e-9);
    }

    #[test]
    fn bounds_enclose_every_waypoint() {
        let route = Route::new(vec![
            GeoPoint::new(5.0, 10.2),
            GeoPoint::new(5.2, 10.0),
            GeoPoint::new(5.1, 10.1),
        ]);

        let (south_west, north_east) = route.bounds().unwrap();
        assert_eq!(south_west, GeoPoint::new(5.0, 10.0));
        assert_eq!(north_east, GeoPoint::new(5.2, 10.2));
    }
}

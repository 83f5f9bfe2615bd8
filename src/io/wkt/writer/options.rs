use serde::{Deserialize, Serialize};

use crate::algorithm::orientation;
use crate::geometry::{Polygon, RingRole};

/// Which ordinates the writer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOutput {
    /// Write the `Z`, `M` or `ZM` suffix and the matching ordinates of Z- or M-aware
    /// geometries.
    #[default]
    Declared,

    /// Write only X and Y, whatever the geometry's awareness.
    Xy,
}

/// Decides how the rings of a [Polygon] are split into WKT polygons.
///
/// The host polygon is a flat bag of rings, so a polygon with several exterior rings has no
/// single correct rendering. A single group is written as `POLYGON`, several as
/// `MULTIPOLYGON`.
pub trait RingGrouping {
    /// Ring indices of each polygon to write, in output order. Every ring should appear in
    /// exactly one group. Indices past the last ring are skipped by the writer.
    fn group_rings(&self, polygon: &Polygon) -> Vec<Vec<usize>>;
}

/// The built-in [RingGrouping] policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolygonGrouping {
    /// Every ring in one `POLYGON`, in stored order.
    #[default]
    Single,

    /// One polygon per exterior ring, read from orientation (clockwise is exterior). Each hole
    /// joins the first exterior ring containing it, or else the nearest exterior ring stored
    /// before it.
    ByOrientation,
}

impl RingGrouping for PolygonGrouping {
    fn group_rings(&self, polygon: &Polygon) -> Vec<Vec<usize>> {
        match self {
            PolygonGrouping::Single => vec![(0..polygon.num_rings()).collect()],
            PolygonGrouping::ByOrientation => group_by_orientation(polygon),
        }
    }
}

fn group_by_orientation(polygon: &Polygon) -> Vec<Vec<usize>> {
    let rings = polygon.rings();
    let outers: Vec<usize> = (0..rings.len())
        .filter(|&i| polygon.ring_role(i) == Some(RingRole::Outer))
        .collect();
    if outers.len() < 2 {
        return PolygonGrouping::Single.group_rings(polygon);
    }

    let mut groups: Vec<Vec<usize>> = outers.iter().map(|&i| vec![i]).collect();
    for (i, ring) in rings.iter().enumerate() {
        if polygon.ring_role(i) != Some(RingRole::Inner) {
            continue;
        }
        let slot = outers
            .iter()
            .position(|&o| orientation::ring_contains(&rings[o], ring))
            .or_else(|| outers.iter().rposition(|&o| o < i))
            .unwrap_or(0);
        groups[slot].push(i);
    }
    groups
}

/// Options for writing WKT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WktWriterOptions {
    pub coordinates: CoordinateOutput,
    pub polygons: PolygonGrouping,
}

impl WktWriterOptions {
    pub fn new(coordinates: CoordinateOutput, polygons: PolygonGrouping) -> Self {
        Self {
            coordinates,
            polygons,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::ring::{ccw_square, cw_square, far_square, inner_square};

    fn hole(mut ring: crate::geometry::Ring) -> crate::geometry::Ring {
        if ring.is_clockwise() {
            ring.reverse();
        }
        ring
    }

    #[test]
    fn single_keeps_stored_order() {
        let polygon = Polygon::new(vec![cw_square(), far_square(), hole(inner_square())]);
        assert_eq!(
            PolygonGrouping::Single.group_rings(&polygon),
            vec![vec![0, 1, 2]]
        );
    }

    #[test]
    fn one_exterior_is_one_group() {
        let polygon = Polygon::new(vec![cw_square(), ccw_square()]);
        assert_eq!(
            PolygonGrouping::ByOrientation.group_rings(&polygon),
            vec![vec![0, 1]]
        );
    }

    #[test]
    fn holes_join_containing_exterior() {
        let polygon = Polygon::new(vec![cw_square(), far_square(), hole(inner_square())]);
        assert_eq!(
            PolygonGrouping::ByOrientation.group_rings(&polygon),
            vec![vec![0, 2], vec![1]]
        );
    }

    #[test]
    fn uncontained_hole_joins_preceding_exterior() {
        // The hole lies inside neither exterior.
        let stray = hole(crate::test::ring::open_square());
        let polygon = Polygon::new(vec![far_square(), inner_square(), stray]);
        let groups = PolygonGrouping::ByOrientation.group_rings(&polygon);
        assert_eq!(groups, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn options_serde() {
        let options = WktWriterOptions::new(CoordinateOutput::Xy, PolygonGrouping::ByOrientation);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"coordinates":"xy","polygons":"by_orientation"}"#);
        assert_eq!(
            serde_json::from_str::<WktWriterOptions>(&json).unwrap(),
            options
        );

        let defaults: WktWriterOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, WktWriterOptions::default());
        assert_eq!(defaults.coordinates, CoordinateOutput::Declared);
        assert_eq!(defaults.polygons, PolygonGrouping::Single);
    }
}

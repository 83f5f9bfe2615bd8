//! Ring orientation and nesting, in the host convention: clockwise rings are exteriors,
//! counter-clockwise rings are holes.

use geo::winding_order::WindingOrder;
use geo::Contains as _Contains;
use geo::Winding as _Winding;

use crate::geometry::{Ring, RingRole};

fn closed_line_string(ring: &Ring) -> geo::LineString {
    let mut line_string = ring.to_line_string();
    line_string.close();
    line_string
}

/// Whether the ring runs clockwise. Degenerate rings without a winding order are not.
pub fn is_clockwise(ring: &Ring) -> bool {
    closed_line_string(ring).is_cw()
}

/// The role a ring plays judged by orientation alone.
///
/// Rings with no winding order (fewer than three distinct points, or collinear) count as
/// exteriors.
pub fn ring_role(ring: &Ring) -> RingRole {
    match closed_line_string(ring).winding_order() {
        Some(WindingOrder::CounterClockwise) => RingRole::Inner,
        Some(WindingOrder::Clockwise) | None => RingRole::Outer,
    }
}

/// Whether `inner` lies within the area bounded by `outer`.
pub fn ring_contains(outer: &Ring, inner: &Ring) -> bool {
    if outer.num_points() < 3 || inner.is_empty() {
        return false;
    }
    let area = geo::Polygon::new(closed_line_string(outer), vec![]);
    area.contains(&inner.to_line_string())
}

/// The number of other rings in `rings` that contain the `i`th ring.
pub fn nesting_depth(rings: &[Ring], i: usize) -> usize {
    let ring = &rings[i];
    rings
        .iter()
        .enumerate()
        .filter(|(j, other)| *j != i && ring_contains(other, ring))
        .count()
}

use crate::dimension::Dimension;
use crate::geometry::Polygon;
use crate::io::wkt::writer::{
    header, output_dim, part_list, point_list, CoordinateOutput, RingGrouping,
};

fn rings_to_wkt(polygon: &Polygon, ring_indices: &[usize], dim: Dimension) -> String {
    part_list(
        ring_indices
            .iter()
            .filter_map(|&i| polygon.rings().get(i))
            .map(|ring| point_list(ring.points(), dim)),
    )
}

/// Write a [Polygon], splitting its rings into WKT polygons with `grouping`.
///
/// One group is written as `POLYGON ((..),(..))`, several as `MULTIPOLYGON (((..)),((..)))`.
/// A polygon without rings is written as an empty string. Ring indices from `grouping` that
/// are out of range are skipped.
pub fn polygon_to_wkt(
    polygon: &Polygon,
    coordinates: CoordinateOutput,
    grouping: &impl RingGrouping,
) -> String {
    if polygon.num_rings() == 0 {
        return String::new();
    }
    let dim = output_dim(polygon.dim(), coordinates);
    let groups = grouping.group_rings(polygon);
    match groups.as_slice() {
        [] => {
            let all: Vec<usize> = (0..polygon.num_rings()).collect();
            header("POLYGON", dim) + &rings_to_wkt(polygon, &all, dim)
        }
        [group] => header("POLYGON", dim) + &rings_to_wkt(polygon, group, dim),
        groups => {
            header("MULTIPOLYGON", dim)
                + &part_list(groups.iter().map(|group| rings_to_wkt(polygon, group, dim)))
        }
    }
}

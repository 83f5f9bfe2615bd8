use crate::geometry::Multipoint;
use crate::io::wkt::writer::{header, output_dim, point_list, CoordinateOutput};

/// Write a [Multipoint] as `MULTIPOINT (X Y,X Y)`.
///
/// A multipoint without points keeps its keyword but has nothing after it.
pub fn multipoint_to_wkt(multipoint: &Multipoint, coordinates: CoordinateOutput) -> String {
    let dim = output_dim(multipoint.dim(), coordinates);
    header("MULTIPOINT", dim) + &point_list(multipoint.points(), dim)
}

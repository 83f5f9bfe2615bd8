use crate::geometry::Polyline;
use crate::io::wkt::writer::{header, output_dim, part_list, point_list, CoordinateOutput};

/// Write a [Polyline]: `LINESTRING` for one path, `MULTILINESTRING` for several.
///
/// A polyline without paths is written as an empty string.
pub fn polyline_to_wkt(polyline: &Polyline, coordinates: CoordinateOutput) -> String {
    let dim = output_dim(polyline.dim(), coordinates);
    match polyline.paths() {
        [] => String::new(),
        [path] => header("LINESTRING", dim) + &point_list(path.points(), dim),
        paths => {
            header("MULTILINESTRING", dim)
                + &part_list(paths.iter().map(|path| point_list(path.points(), dim)))
        }
    }
}

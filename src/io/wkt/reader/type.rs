use std::fmt::Display;

use phf::phf_map;

/// The geometry type named by a WKT keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WktType {
    /// Empty input or an unrecognized keyword.
    #[default]
    None,
    Point,
    LineString,
    Polygon,
    Triangle,
    PolyhedralSurface,
    Tin,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

static KEYWORDS: phf::Map<&'static str, WktType> = phf_map! {
    "POINT" => WktType::Point,
    "LINESTRING" => WktType::LineString,
    "POLYGON" => WktType::Polygon,
    "TRIANGLE" => WktType::Triangle,
    "POLYHEDRALSURFACE" => WktType::PolyhedralSurface,
    "TIN" => WktType::Tin,
    "MULTIPOINT" => WktType::MultiPoint,
    "MULTILINESTRING" => WktType::MultiLineString,
    "MULTIPOLYGON" => WktType::MultiPolygon,
    "GEOMETRYCOLLECTION" => WktType::GeometryCollection,
};

impl WktType {
    /// Look up an upper-case keyword.
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        KEYWORDS.get(keyword).copied()
    }

    /// Split a keyword such as `POINTZM` into its type and attached `Z`/`M` flags.
    ///
    /// The keyword is matched case-insensitively. Unrecognized keywords map to
    /// [WktType::None] with both flags unset.
    pub fn parse_keyword(keyword: &str) -> (Self, bool, bool) {
        let upper = keyword.to_ascii_uppercase();
        if let Some(wkt_type) = Self::from_keyword(&upper) {
            return (wkt_type, false, false);
        }
        for (suffix, has_z, has_m) in [("ZM", true, true), ("Z", true, false), ("M", false, true)]
        {
            if let Some(stem) = upper.strip_suffix(suffix) {
                if let Some(wkt_type) = Self::from_keyword(stem) {
                    return (wkt_type, has_z, has_m);
                }
            }
        }
        (WktType::None, false, false)
    }

    /// The canonical upper-case keyword; empty for [WktType::None].
    pub fn keyword(&self) -> &'static str {
        match self {
            WktType::None => "",
            WktType::Point => "POINT",
            WktType::LineString => "LINESTRING",
            WktType::Polygon => "POLYGON",
            WktType::Triangle => "TRIANGLE",
            WktType::PolyhedralSurface => "POLYHEDRALSURFACE",
            WktType::Tin => "TIN",
            WktType::MultiPoint => "MULTIPOINT",
            WktType::MultiLineString => "MULTILINESTRING",
            WktType::MultiPolygon => "MULTIPOLYGON",
            WktType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

impl Display for WktType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

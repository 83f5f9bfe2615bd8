use tracing::{debug, trace};

use crate::dimension::Dimension;
use crate::error::{WktError, WktResult};
use crate::geometry::{GeometryKind, RingRole};
use crate::io::wkt::reader::r#type::WktType;
use crate::io::wkt::reader::token::{WktText, WktToken};
use crate::provider::GeometryProvider;

/// Parse a WKT string into a geometry created by `provider`.
///
/// Returns `Ok(None)` for empty input or input not naming a recognized geometry type.
///
/// ```
/// use geowkt::geometry::Geometry;
/// use geowkt::provider::MemoryProvider;
///
/// let geometry = geowkt::read_wkt("LINESTRING (30 10, 10 30, 40 40)", &MemoryProvider)
///     .unwrap()
///     .unwrap();
/// let Geometry::Polyline(polyline) = geometry else {
///     panic!("expected a polyline");
/// };
/// assert_eq!(polyline.paths()[0].num_points(), 3);
/// ```
pub fn read_wkt<P: GeometryProvider>(s: &str, provider: &P) -> WktResult<Option<P::Geometry>> {
    let text = WktText::parse(s)?;
    build_geometry(&text, provider)
}

/// Build a geometry from already tokenized WKT.
pub fn build_geometry<P: GeometryProvider>(
    text: &WktText,
    provider: &P,
) -> WktResult<Option<P::Geometry>> {
    if text.geometry_type() == WktType::None {
        return Ok(None);
    }
    debug!(
        wkt_type = %text.geometry_type(),
        dim = %text.dimension(),
        "building geometry from WKT"
    );
    GeometryBuilder::new(provider, text.dimension())
        .build(text.token())
        .map(Some)
}

trait ProviderResultExt<T> {
    fn provider_err(self) -> WktResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ProviderResultExt<T> for Result<T, E> {
    fn provider_err(self) -> WktResult<T> {
        self.map_err(WktError::provider)
    }
}

/// Walks a token tree for one tagged geometry, creating primitives through the provider.
struct GeometryBuilder<'a, P: GeometryProvider> {
    provider: &'a P,
    dim: Dimension,
}

impl<'a, P: GeometryProvider> GeometryBuilder<'a, P> {
    fn new(provider: &'a P, dim: Dimension) -> Self {
        Self { provider, dim }
    }

    fn build(&self, token: &WktToken) -> WktResult<P::Geometry> {
        match token.wkt_type() {
            WktType::Point => self.point(token),
            WktType::LineString => self.line_string(token),
            WktType::Polygon | WktType::Triangle => self.polygon(token),
            WktType::MultiPoint => self.multi_point(token),
            WktType::MultiLineString => self.multi_line_string(token),
            WktType::MultiPolygon | WktType::Tin => self.multi_polygon(token),
            WktType::PolyhedralSurface => self.multi_patch(token),
            WktType::GeometryCollection => self.geometry_collection(token),
            WktType::None => Err(WktError::UnsupportedType(token.wkt_type().to_string())),
        }
    }

    fn create(&self, kind: GeometryKind) -> WktResult<P::Geometry> {
        self.provider.create(kind).provider_err()
    }

    /// Mark a geometry Z- and M-aware according to the header, whatever its values.
    fn make_zm_aware(&self, geometry: &mut P::Geometry) -> WktResult<()> {
        if self.dim.has_z() {
            self.provider.set_z_aware(geometry, true).provider_err()?;
        }
        if self.dim.has_m() {
            self.provider.set_m_aware(geometry, true).provider_err()?;
        }
        Ok(())
    }

    /// Normalize and mark a freshly assembled top-level geometry.
    fn finish(&self, mut geometry: P::Geometry) -> WktResult<P::Geometry> {
        self.provider.normalize(&mut geometry).provider_err()?;
        self.make_zm_aware(&mut geometry)?;
        Ok(geometry)
    }

    fn point(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let coord = self.dim.resolve(token.coords())?;

        let mut point = self.create(GeometryKind::Point)?;
        self.provider
            .put_coords(&mut point, coord.x, coord.y)
            .provider_err()?;
        if let Some(z) = coord.z {
            self.provider.set_z(&mut point, z).provider_err()?;
        }
        if let Some(m) = coord.m {
            self.provider.set_m(&mut point, m).provider_err()?;
        }
        self.make_zm_aware(&mut point)?;
        Ok(point)
    }

    /// A path or ring holding one point per item of `token`.
    fn point_sequence(&self, kind: GeometryKind, token: &WktToken) -> WktResult<P::Geometry> {
        let mut sequence = self.create(kind)?;
        for item in token.items() {
            let point = self.point(item)?;
            self.provider.add_point(&mut sequence, point).provider_err()?;
        }
        self.make_zm_aware(&mut sequence)?;
        Ok(sequence)
    }

    fn path(&self, token: &WktToken) -> WktResult<P::Geometry> {
        self.point_sequence(GeometryKind::Path, token)
    }

    fn ring(&self, token: &WktToken) -> WktResult<P::Geometry> {
        self.point_sequence(GeometryKind::Ring, token)
    }

    fn multi_point(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut multi_point = self.create(GeometryKind::Multipoint)?;
        for item in token.items() {
            let point = self.point(item)?;
            self.provider
                .add_point(&mut multi_point, point)
                .provider_err()?;
        }
        self.finish(multi_point)
    }

    fn line_string(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut polyline = self.create(GeometryKind::Polyline)?;
        if !token.is_empty() {
            let path = self.path(token)?;
            self.provider
                .add_geometry(&mut polyline, path)
                .provider_err()?;
        }
        self.finish(polyline)
    }

    fn multi_line_string(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut polyline = self.create(GeometryKind::Polyline)?;
        for line_string in token.items() {
            let path = self.path(line_string)?;
            self.provider
                .add_geometry(&mut polyline, path)
                .provider_err()?;
        }
        self.finish(polyline)
    }

    /// Rings are added in WKT order and orientation; any re-orientation is left to the
    /// provider's normalize.
    fn polygon(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut polygon = self.create(GeometryKind::Polygon)?;
        for ring_token in token.items() {
            let ring = self.ring(ring_token)?;
            self.provider
                .add_geometry(&mut polygon, ring)
                .provider_err()?;
        }
        self.finish(polygon)
    }

    /// Every ring of every member polygon lands in one flat polygon; the grouping into
    /// separate polygons is not kept.
    fn multi_polygon(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut polygon = self.create(GeometryKind::Polygon)?;
        for polygon_token in token.items() {
            for ring_token in polygon_token.items() {
                let ring = self.ring(ring_token)?;
                self.provider
                    .add_geometry(&mut polygon, ring)
                    .provider_err()?;
            }
        }
        self.finish(polygon)
    }

    /// The first ring of each member polygon is tagged as an outer ring, the rest as inner.
    fn multi_patch(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut multi_patch = self.create(GeometryKind::MultiPatch)?;
        let mut ring_index = 0;
        for polygon_token in token.items() {
            for (i, ring_token) in polygon_token.items().iter().enumerate() {
                let ring = self.ring(ring_token)?;
                self.provider
                    .add_geometry(&mut multi_patch, ring)
                    .provider_err()?;
                let role = if i == 0 {
                    RingRole::Outer
                } else {
                    RingRole::Inner
                };
                self.provider
                    .set_ring_role(&mut multi_patch, ring_index, role)
                    .provider_err()?;
                ring_index += 1;
            }
        }
        self.finish(multi_patch)
    }

    /// Each member is built as a geometry in its own right, from its own header. The bag
    /// itself is not normalized.
    fn geometry_collection(&self, token: &WktToken) -> WktResult<P::Geometry> {
        let mut bag = self.create(GeometryKind::GeometryBag)?;
        for member in token.items() {
            trace!(wkt_type = %member.wkt_type(), dim = %member.dim(), "collection member");
            let geometry = GeometryBuilder::new(self.provider, member.dim()).build(member)?;
            self.provider.add_geometry(&mut bag, geometry).provider_err()?;
        }
        self.make_zm_aware(&mut bag)?;
        Ok(bag)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Geometry, Point};
    use crate::provider::MemoryProvider;
    use crate::test::provider::{Call, RecordingProvider};

    fn read(s: &str) -> Geometry {
        read_wkt(s, &MemoryProvider).unwrap().unwrap()
    }

    #[test]
    fn point() {
        let Geometry::Point(point) = read("POINT (30 10)") else {
            panic!("expected point");
        };
        assert_eq!(point, Point::new(30., 10.));
        assert_eq!(point.dim(), Dimension::XY);
    }

    #[test]
    fn point_zm() {
        let Geometry::Point(point) = read("POINT ZM (1 2 3 4)") else {
            panic!("expected point");
        };
        assert_eq!(point.dim(), Dimension::XYZM);
        assert_relative_eq!(point.z(), 3.);
        assert_relative_eq!(point.m(), 4.);

        let Geometry::Point(point) = read("POINT M (1 2 3)") else {
            panic!("expected point");
        };
        assert_eq!(point.dim(), Dimension::XYM);
        assert_relative_eq!(point.m(), 3.);
        assert_relative_eq!(point.z(), 0.);
    }

    #[test]
    fn line_string_keeps_order() {
        let Geometry::Polyline(polyline) = read("LINESTRING (30 10, 10 30, 40 40)") else {
            panic!("expected polyline");
        };
        assert_eq!(polyline.num_paths(), 1);
        let xy: Vec<(f64, f64)> = polyline.paths()[0]
            .points()
            .iter()
            .map(|p| (p.x(), p.y()))
            .collect();
        assert_eq!(xy, vec![(30., 10.), (10., 30.), (40., 40.)]);
    }

    #[test]
    fn multi_line_string() {
        let Geometry::Polyline(polyline) =
            read("MULTILINESTRING ((10 10, 20 20, 10 40),(40 40, 30 30, 40 20, 30 10))")
        else {
            panic!("expected polyline");
        };
        assert_eq!(polyline.num_paths(), 2);
        assert_eq!(polyline.paths()[1].num_points(), 4);
    }

    #[test]
    fn multi_point_forms() {
        for s in [
            "MULTIPOINT ((10 40), (40 30), (20 20), (30 10))",
            "MULTIPOINT (10 40, 40 30, 20 20, 30 10)",
        ] {
            let Geometry::Multipoint(mp) = read(s) else {
                panic!("expected multipoint");
            };
            assert_eq!(mp.num_points(), 4);
        }

        let Geometry::Multipoint(mp) = read("MULTIPOINT (10 40)") else {
            panic!("expected multipoint");
        };
        assert_eq!(mp.num_points(), 1);
    }

    #[test]
    fn polygon_with_hole() {
        let Geometry::Polygon(polygon) =
            read("POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10),(20 30, 35 35, 30 20, 20 30))")
        else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.exterior_ring_count(), 1);
        assert_eq!(polygon.ring_role(0), Some(RingRole::Outer));
        assert_eq!(polygon.ring_role(1), Some(RingRole::Inner));
    }

    #[test]
    fn triangle_is_polygon() {
        let Geometry::Polygon(polygon) = read("TRIANGLE ((0 0, 0 1, 1 0, 0 0))") else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.num_rings(), 1);
    }

    #[test]
    fn multi_polygon_is_flattened() {
        let Geometry::Polygon(polygon) = read(
            "MULTIPOLYGON (((30 20, 10 40, 45 40, 30 20)),((15 5, 40 10, 10 20, 5 10, 15 5)))",
        ) else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.exterior_ring_count(), 2);
    }

    #[test]
    fn tin_is_flattened() {
        let Geometry::Polygon(polygon) =
            read("TIN Z (((0 0 0, 0 1 0, 1 0 0, 0 0 0)), ((0 1 0, 1 1 0, 1 0 0, 0 1 0)))")
        else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.num_rings(), 2);
    }

    #[test]
    fn polyhedral_surface_roles() {
        let provider = RecordingProvider::new();
        let geometry = read_wkt(
            "POLYHEDRALSURFACE (((0 0, 0 10, 10 10, 10 0, 0 0),(2 2, 4 2, 4 4, 2 4, 2 2)),((20 20, 20 30, 30 30, 20 20)))",
            &provider,
        )
        .unwrap()
        .unwrap();

        let Geometry::MultiPatch(patch) = geometry else {
            panic!("expected multipatch");
        };
        assert_eq!(patch.num_rings(), 3);
        assert_eq!(patch.ring_role(0), Some(RingRole::Outer));
        assert_eq!(patch.ring_role(1), Some(RingRole::Inner));
        assert_eq!(patch.ring_role(2), Some(RingRole::Outer));

        let roles: Vec<Call> = provider
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::SetRingRole(..)))
            .collect();
        assert_eq!(
            roles,
            vec![
                Call::SetRingRole(0, RingRole::Outer),
                Call::SetRingRole(1, RingRole::Inner),
                Call::SetRingRole(2, RingRole::Outer),
            ]
        );
    }

    #[test]
    fn rings_added_in_wkt_order() {
        let provider = RecordingProvider::new();
        read_wkt("POLYGON ((0 0, 1 0, 1 1, 0 0))", &provider).unwrap();
        let coords: Vec<Call> = provider
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::PutCoords(..)))
            .collect();
        assert_eq!(
            coords,
            vec![
                Call::PutCoords(0., 0.),
                Call::PutCoords(1., 0.),
                Call::PutCoords(1., 1.),
                Call::PutCoords(0., 0.),
            ]
        );
    }

    #[test]
    fn normalize_once_per_top_level_geometry() {
        let cases = [
            ("MULTIPOINT (1 2, 3 4)", GeometryKind::Multipoint),
            ("LINESTRING (1 2, 3 4)", GeometryKind::Polyline),
            ("MULTILINESTRING ((1 2, 3 4))", GeometryKind::Polyline),
            ("POLYGON ((0 0, 0 1, 1 0, 0 0))", GeometryKind::Polygon),
            ("MULTIPOLYGON (((0 0, 0 1, 1 0, 0 0)))", GeometryKind::Polygon),
            (
                "POLYHEDRALSURFACE (((0 0, 0 1, 1 0, 0 0)))",
                GeometryKind::MultiPatch,
            ),
        ];
        for (s, kind) in cases {
            let provider = RecordingProvider::new();
            read_wkt(s, &provider).unwrap();
            let normalized: Vec<Call> = provider
                .calls()
                .into_iter()
                .filter(|c| matches!(c, Call::Normalize(_)))
                .collect();
            assert_eq!(normalized, vec![Call::Normalize(kind)], "{s}");
        }
    }

    #[test]
    fn point_is_not_normalized() {
        let provider = RecordingProvider::new();
        read_wkt("POINT (1 2)", &provider).unwrap();
        assert_eq!(provider.count(|c| matches!(c, Call::Normalize(_))), 0);
    }

    #[test]
    fn geometry_collection() {
        let provider = RecordingProvider::new();
        let geometry = read_wkt(
            "GEOMETRYCOLLECTION (POINT (40 10), LINESTRING (10 10, 20 20, 10 40), POLYGON ((40 40, 20 45, 45 30, 40 40)))",
            &provider,
        )
        .unwrap()
        .unwrap();

        let Geometry::GeometryBag(bag) = geometry else {
            panic!("expected geometry bag");
        };
        let kinds: Vec<GeometryKind> = bag.geometries().iter().map(Geometry::kind).collect();
        assert_eq!(
            kinds,
            vec![
                GeometryKind::Point,
                GeometryKind::Polyline,
                GeometryKind::Polygon
            ]
        );

        // Members are normalized, the bag is not.
        assert_eq!(
            provider.count(|c| matches!(c, Call::Normalize(GeometryKind::GeometryBag))),
            0
        );
        assert_eq!(provider.count(|c| matches!(c, Call::Normalize(_))), 2);
    }

    #[test]
    fn nested_geometry_collection() {
        let Geometry::GeometryBag(bag) =
            read("GEOMETRYCOLLECTION (GEOMETRYCOLLECTION (POINT (1 2)), POINT (3 4))")
        else {
            panic!("expected geometry bag");
        };
        assert_eq!(bag.num_geometries(), 2);
        assert_eq!(bag.geometries()[0].kind(), GeometryKind::GeometryBag);
    }

    #[test]
    fn collection_members_keep_their_own_dimension() {
        let Geometry::GeometryBag(bag) =
            read("GEOMETRYCOLLECTION Z (POINT M (1 2 3), POINT (4 5 6))")
        else {
            panic!("expected geometry bag");
        };
        assert_eq!(bag.dim(), Dimension::XYZ);
        assert_eq!(bag.geometries()[0].dim(), Dimension::XYM);
        assert_eq!(bag.geometries()[1].dim(), Dimension::XYZ);

        let Geometry::Point(point) = &bag.geometries()[0] else {
            panic!("expected point");
        };
        assert_relative_eq!(point.m(), 3.);
        assert_relative_eq!(point.z(), 0.);
    }

    #[test]
    fn untagged_collection_member_is_unsupported() {
        let err = read_wkt("GEOMETRYCOLLECTION ((1 2))", &MemoryProvider).unwrap_err();
        assert!(matches!(err, WktError::UnsupportedType(ref t) if t == "None"));
    }

    #[test]
    fn empty_input_is_none() {
        assert!(read_wkt("", &MemoryProvider).unwrap().is_none());
        assert!(read_wkt("  \t\n ", &MemoryProvider).unwrap().is_none());
        assert!(read_wkt("CIRCULARSTRING (1 2, 3 4)", &MemoryProvider)
            .unwrap()
            .is_none());
    }

    #[test]
    fn empty_geometries() {
        let Geometry::Multipoint(mp) = read("MULTIPOINT EMPTY") else {
            panic!("expected multipoint");
        };
        assert_eq!(mp.num_points(), 0);

        let Geometry::Polyline(polyline) = read("LINESTRING EMPTY") else {
            panic!("expected polyline");
        };
        assert_eq!(polyline.num_paths(), 0);

        assert!(matches!(
            read_wkt("POINT EMPTY", &MemoryProvider),
            Err(WktError::MalformedInput(_))
        ));
    }

    #[test]
    fn wrong_arity_is_malformed() {
        for s in [
            "POINT (1 2 3)",
            "POINT Z (1 2)",
            "POINT M (1 2 3 4)",
            "POINT ZM (1 2 3)",
            "LINESTRING (1 2, 3 4 5)",
            "POLYGON Z ((0 0 0, 0 1 0, 1 0, 0 0 0))",
        ] {
            assert!(
                matches!(read_wkt(s, &MemoryProvider), Err(WktError::MalformedInput(_))),
                "{s}"
            );
        }
    }

    #[test]
    fn zero_z_is_still_z_aware() {
        let Geometry::Polygon(polygon) = read("POLYGON Z ((0 0 0, 0 1 0, 1 1 0, 0 0 0))") else {
            panic!("expected polygon");
        };
        assert!(polygon.dim().has_z());
        for ring in polygon.rings() {
            assert!(ring.dim().has_z());
            assert!(ring.points().iter().all(|p| p.dim().has_z() && p.z() == 0.));
        }
    }

    #[test]
    fn every_point_marked_aware() {
        let provider = RecordingProvider::new();
        read_wkt("MULTIPOINT M (1 2 3, 4 5 6)", &provider).unwrap();
        assert_eq!(
            provider.count(|c| matches!(c, Call::SetMAware(GeometryKind::Point, true))),
            2
        );
        assert_eq!(
            provider.count(|c| matches!(c, Call::SetMAware(GeometryKind::Multipoint, true))),
            1
        );
        assert_eq!(provider.count(|c| matches!(c, Call::SetZAware(..))), 0);
    }

    #[test]
    fn provider_errors_pass_through() {
        let provider = RecordingProvider::refusing(GeometryKind::Ring);
        let err = read_wkt("POLYGON ((0 0, 0 1, 1 0, 0 0))", &provider).unwrap_err();
        assert_eq!(err.to_string(), "refusing to create Ring");
        let WktError::Provider(inner) = err else {
            panic!("expected provider error");
        };
        assert!(inner
            .downcast_ref::<crate::test::provider::RecordingError>()
            .is_some());
    }
}

use crate::geometry::Point;

pub(crate) fn p0() -> Point {
    Point::new(30., 10.)
}

pub(crate) fn p1() -> Point {
    Point::new(10., 30.)
}

pub(crate) fn p2() -> Point {
    Point::new(40., 40.)
}

/// A Z-aware point whose Z value is zero.
pub(crate) fn p_z0() -> Point {
    let mut point = Point::new(1., 2.);
    point.set_z_aware(true);
    point
}

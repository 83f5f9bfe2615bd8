use crate::dimension::Dimension;

/// A single point. Z and M values are always stored; whether they are meaningful is decided
/// by the point's [Dimension].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
    m: f64,
    dim: Dimension,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn put_coords(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    pub fn set_m(&mut self, m: f64) {
        self.m = m;
    }

    pub fn set_z_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_z(aware);
    }

    pub fn set_m_aware(&mut self, aware: bool) {
        self.dim = self.dim.with_m(aware);
    }

    /// Whether both points sit at the same X/Y location.
    pub(crate) fn xy_eq(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// A hashable X/Y key agreeing with [Point::xy_eq] for non-NaN ordinates.
    pub(crate) fn xy_key(&self) -> (u64, u64) {
        // -0.0 and 0.0 compare equal, so they must share a key.
        fn bits(v: f64) -> u64 {
            if v == 0.0 {
                0.0f64.to_bits()
            } else {
                v.to_bits()
            }
        }
        (bits(self.x), bits(self.y))
    }
}

impl From<&Point> for geo::Coord {
    fn from(value: &Point) -> Self {
        geo::coord! { x: value.x, y: value.y }
    }
}

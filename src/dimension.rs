use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::{WktError, WktResult};

/// The coordinate dimension of a geometry.
///
/// This is a schema property: a geometry is Z- or M-aware regardless of whether any of its
/// points carry a non-zero Z or M value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Construct from the `hasZ` and `hasM` flags of a WKT header.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// This dimension with Z awareness switched on or off, keeping M awareness.
    pub fn with_z(self, aware: bool) -> Self {
        Self::from_flags(aware, self.has_m())
    }

    /// This dimension with M awareness switched on or off, keeping Z awareness.
    pub fn with_m(self, aware: bool) -> Self {
        Self::from_flags(self.has_z(), aware)
    }

    /// The WKT header suffix for this dimension: `""`, `"Z"`, `"M"` or `"ZM"`.
    pub fn wkt_suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => "Z",
            Dimension::XYM => "M",
            Dimension::XYZM => "ZM",
        }
    }

    /// Validate a coordinate tuple against this dimension.
    ///
    /// The tuple must hold exactly [`size`][Self::size] values. With a single extra ordinate
    /// it is Z when the dimension has Z and M otherwise; with two it is Z then M.
    pub fn resolve(&self, values: &[f64]) -> WktResult<Coord> {
        if values.len() != self.size() {
            return Err(WktError::MalformedInput(format!(
                "wrong number of elements, expecting {} but found {}",
                self.expected_shape(),
                values.len()
            )));
        }

        let mut coord = Coord::new(values[0], values[1]);
        match self {
            Dimension::XY => {}
            Dimension::XYZ => coord.z = Some(values[2]),
            Dimension::XYM => coord.m = Some(values[2]),
            Dimension::XYZM => {
                coord.z = Some(values[2]);
                coord.m = Some(values[3]);
            }
        }
        Ok(coord)
    }

    fn expected_shape(&self) -> &'static str {
        match self {
            Dimension::XY => "x and y",
            Dimension::XYZ => "x y z",
            Dimension::XYM => "x y m",
            Dimension::XYZM => "x y z m",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// A validated coordinate tuple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    const ALL: [Dimension; 4] = [
        Dimension::XY,
        Dimension::XYZ,
        Dimension::XYM,
        Dimension::XYZM,
    ];

    #[test]
    fn from_flags() {
        assert_eq!(Dimension::from_flags(false, false), Dimension::XY);
        assert_eq!(Dimension::from_flags(true, false), Dimension::XYZ);
        assert_eq!(Dimension::from_flags(false, true), Dimension::XYM);
        assert_eq!(Dimension::from_flags(true, true), Dimension::XYZM);

        for dim in ALL {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
        }
    }

    #[test]
    fn resolve_third_ordinate() {
        let xyz = Dimension::XYZ.resolve(&[1., 2., 3.]).unwrap();
        assert_eq!(xyz.z, Some(3.));
        assert_eq!(xyz.m, None);

        let xym = Dimension::XYM.resolve(&[1., 2., 3.]).unwrap();
        assert_eq!(xym.z, None);
        assert_eq!(xym.m, Some(3.));

        let xyzm = Dimension::XYZM.resolve(&[1., 2., 3., 4.]).unwrap();
        assert_eq!(xyzm.z, Some(3.));
        assert_eq!(xyzm.m, Some(4.));
    }

    #[test]
    fn resolve_names_expected_shape() {
        let err = Dimension::XYM.resolve(&[1., 2.]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mal-formed WKT: wrong number of elements, expecting x y m but found 2"
        );

        let err = Dimension::XY.resolve(&[1., 2., 3.]).unwrap_err();
        assert!(err.to_string().contains("expecting x and y"));
    }

    proptest! {
        #[test]
        fn arity_mismatch_is_malformed(
            dim in proptest::sample::select(ALL.to_vec()),
            arity in 0usize..8,
        ) {
            let values = vec![1.5; arity];
            let result = dim.resolve(&values);
            if arity == dim.size() {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(matches!(result, Err(WktError::MalformedInput(_))));
            }
        }
    }
}

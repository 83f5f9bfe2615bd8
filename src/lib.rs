//! Conversion between OGC Well-Known Text and a host geometry tree.
//!
//! Parsing goes through a [GeometryProvider], which creates and mutates the host's own
//! geometry values; [MemoryProvider] builds this crate's [geometry::Geometry] tree.
//!
//! ```
//! use geowkt::provider::MemoryProvider;
//!
//! let geometry = geowkt::read_wkt("POINT (30 10)", &MemoryProvider).unwrap().unwrap();
//! assert_eq!(geowkt::write_wkt(&geometry).unwrap(), "POINT (30 10)");
//! ```

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{WktError, WktResult};
pub use io::wkt::{read_wkt, write_wkt, ToWkt};
pub use provider::{GeometryProvider, MemoryProvider};

pub mod algorithm;
pub mod dimension;
pub mod error;
pub mod geometry;
pub mod io;
pub mod provider;
#[cfg(test)]
pub(crate) mod test;

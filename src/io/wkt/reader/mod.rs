mod builder;
mod token;
mod r#type;

pub use builder::{build_geometry, read_wkt};
pub use r#type::WktType;
pub use token::{WktText, WktToken};

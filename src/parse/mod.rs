//! Text codec for points and polygons
//!
//! Formatting lives in the `Display` impls on the domain types; this module
//! handles the reverse direction, plus lossy line splitting for the inputs.

pub mod error;
pub mod lines;
pub mod shapes;

pub use error::{ParseError, ParseResult};
pub use lines::LossyLines;
pub use shapes::{parse_leading_polygon, parse_polygon_line, point_parser, polygon_parser};

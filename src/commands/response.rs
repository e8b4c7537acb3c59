use std::fmt;

use crate::domain::Polygon;

/// Successful command output
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Polygon(Polygon),
    /// Printed fixed-point with one decimal
    Area(f64),
    VertexCount(usize),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Polygon(polygon) => write!(f, "{}", polygon),
            Response::Area(area) => write!(f, "{:.1}", area),
            Response::VertexCount(count) => write!(f, "{}", count),
        }
    }
}

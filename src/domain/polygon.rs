use std::fmt;

use super::Point;
use crate::geometry::shoelace_area;

/// Smallest vertex count a polygon may have
pub const MIN_VERTEX_COUNT: usize = 3;

/// An ordered ring of vertices. Order is significant for both area and equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon, rejecting anything with fewer than [`MIN_VERTEX_COUNT`] points
    pub fn new(points: Vec<Point>) -> Option<Self> {
        if points.len() < MIN_VERTEX_COUNT {
            return None;
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a polygon built through [`Polygon::new`]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unsigned area of the closed vertex loop
    pub fn area(&self) -> f64 {
        shoelace_area(&self.points)
    }

    pub fn is_vertex_count_even(&self) -> bool {
        self.points.len() % 2 == 0
    }
}

/// Canonical text form: vertex count followed by space-separated points
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points.len())?;
        for point in &self.points {
            write!(f, " {}", point)?;
        }
        Ok(())
    }
}

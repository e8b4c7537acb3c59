//! The loaded polygon collection and the statistics queried over it

pub mod error;
pub mod loader;

pub use error::{StoreError, StoreResult};
pub use loader::{LoadReport, SkippedLine};

use crate::domain::Polygon;

/// Which polygons an area sum covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaFilter {
    /// Odd vertex count
    Odd,
    /// Even vertex count
    Even,
    /// Exactly this many vertices. A negative count matches nothing.
    VertexCount(i64),
}

impl AreaFilter {
    pub fn matches(&self, polygon: &Polygon) -> bool {
        match *self {
            AreaFilter::Odd => !polygon.is_vertex_count_even(),
            AreaFilter::Even => polygon.is_vertex_count_even(),
            AreaFilter::VertexCount(n) => usize::try_from(n).is_ok_and(|n| polygon.len() == n),
        }
    }
}

/// Polygons in file order. Filled once at load time, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// Sum of areas of the polygons selected by `filter`; 0 when none match
    pub fn area_sum(&self, filter: AreaFilter) -> f64 {
        self.polygons
            .iter()
            .filter(|p| filter.matches(p))
            .map(Polygon::area)
            .sum()
    }

    pub fn mean_area(&self) -> Option<f64> {
        if self.polygons.is_empty() {
            return None;
        }
        let total: f64 = self.polygons.iter().map(Polygon::area).sum();
        Some(total / self.polygons.len() as f64)
    }

    pub fn max_area(&self) -> Option<f64> {
        self.polygons.iter().map(Polygon::area).reduce(f64::max)
    }

    pub fn min_area(&self) -> Option<f64> {
        self.polygons.iter().map(Polygon::area).reduce(f64::min)
    }

    pub fn max_vertices(&self) -> Option<usize> {
        self.polygons.iter().map(Polygon::len).max()
    }

    pub fn min_vertices(&self) -> Option<usize> {
        self.polygons.iter().map(Polygon::len).min()
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

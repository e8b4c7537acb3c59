use geo::{Area, LineString};

use crate::domain::Point;

/// Unsigned area of the closed ring through `points` (shoelace formula)
///
/// The ring is closed implicitly: the last vertex connects back to the first.
/// Fewer than three points enclose nothing and yield 0.
pub fn shoelace_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let ring: LineString<f64> = points
        .iter()
        .map(|p| geo::coord! { x: f64::from(p.x), y: f64::from(p.y) })
        .collect();

    geo::Polygon::new(ring, vec![]).unsigned_area()
}

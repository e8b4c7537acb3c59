use std::fmt;

/// A vertex with integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Canonical text form: `(x;y)`
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(3, -7).to_string(), "(3;-7)");
    }

    #[test]
    fn test_point_equality_is_structural() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(2, 1));
    }
}

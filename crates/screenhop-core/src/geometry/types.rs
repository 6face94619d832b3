/// A point in global display coordinates (origin top-left of the main display)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in global display coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Finite origin and strictly positive, finite size
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Half-open containment: the right and bottom edges belong to the neighbor.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.max_x() && point.y >= self.y && point.y < self.max_y()
    }

    /// Overlapping region, or `None` when the rectangles only touch or are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if max_x <= x || max_y <= y {
            return None;
        }

        Some(Rect::new(x, y, max_x - x, max_y - y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let rect = Rect::new(1920.0, 0.0, 1080.0, 1920.0);
        assert_eq!(rect.center(), Point::new(2460.0, 960.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(99.9, 99.9)));
        assert!(!rect.contains(Point::new(100.0, 50.0)));
        assert!(!rect.contains(Point::new(50.0, 100.0)));
        assert!(!rect.contains(Point::new(-0.1, 50.0)));
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 25.0, 100.0, 100.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Rect::new(50.0, 25.0, 50.0, 75.0));
        assert_eq!(i.area(), 3750.0);
    }

    #[test]
    fn test_intersection_touching_edges_is_empty() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(500.0, 500.0, 10.0, 10.0);
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_negative_origin_intersection() {
        let display = Rect::new(-1440.0, -900.0, 1440.0, 900.0);
        let window = Rect::new(-800.0, -600.0, 400.0, 300.0);
        assert_eq!(display.intersection(&window), Some(window));
    }

    #[test]
    fn test_is_well_formed() {
        assert!(Rect::new(-10.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 0.0, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 10.0, -1.0).is_well_formed());
        assert!(!Rect::new(f64::NAN, 0.0, 10.0, 10.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f64::INFINITY, 10.0).is_well_formed());
    }
}

use crate::geometry::{Point, Rect};

/// Opaque platform display identifier (a `CGDirectDisplayID` on macOS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayId(pub u32);

impl std::fmt::Display for DisplayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One active display and its bounds in global coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDescriptor {
    id: DisplayId,
    bounds: Rect,
}

impl DisplayDescriptor {
    pub fn new(id: DisplayId, bounds: Rect) -> Self {
        Self { id, bounds }
    }

    pub fn id(&self) -> DisplayId {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn origin_x(&self) -> f64 {
        self.bounds.x
    }

    pub fn origin_y(&self) -> f64 {
        self.bounds.y
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

mod types;

pub use types::{Point, Rect};

pub mod operations;
pub mod ordering;
mod types;

pub use operations::{locate_current, next_index, validate_displays};
pub use ordering::order_displays;
pub use types::{DisplayDescriptor, DisplayId};

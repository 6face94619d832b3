pub mod finder;
mod types;

pub use finder::find_top_window;
pub use types::{StackingOrder, WindowSnapshot, WindowSnapshotEntry};

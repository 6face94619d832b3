//! screenhop-core: move the pointer and focus to the next display
//!
//! All decision logic lives here, independent of any OS. The platform
//! adapters in [`platform`] are the only code that talks to the window
//! server and accessibility APIs.
//!
//! # Main Entry Points
//!
//! - [`switch`] - Run one "next display" switch end to end
//! - [`display`] - Display ordering, current-display lookup, next selection
//! - [`window`] - Pick the window to focus on a display
//! - [`focus`] - Best-effort raise of the owning application
//! - [`platform`] - Collaborator traits and OS adapters

pub mod config;
pub mod display;
pub mod errors;
pub mod events;
pub mod focus;
pub mod geometry;
pub mod logging;
pub mod platform;
pub mod switch;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::SwitchConfig;
pub use display::{DisplayDescriptor, DisplayId};
pub use geometry::{Point, Rect};
pub use platform::{Platform, PlatformError};
pub use switch::{SwitchError, SwitchOutcome};
pub use window::{StackingOrder, WindowSnapshot, WindowSnapshotEntry};

// Re-export handler modules as the primary API
pub use switch::handler as switch_ops;

// Re-export logging initialization
pub use logging::init_logging;

//! Collaborators the switch delegates to.
//!
//! Each trait covers one OS service. Everything returned is a one-shot read:
//! implementations must not hand out handles that outlive the call.

pub mod errors;
#[cfg(target_os = "macos")]
pub mod macos;
pub mod unsupported;

pub use errors::PlatformError;

use crate::display::DisplayDescriptor;
use crate::geometry::Point;
use crate::window::WindowSnapshot;

/// Enumerates active displays.
pub trait DisplayService {
    /// Every active display with its bounds. No upper limit on the count;
    /// callers validate the descriptors.
    fn active_displays(&self) -> Result<Vec<DisplayDescriptor>, PlatformError>;
}

/// Reads the on-screen window list.
pub trait WindowService {
    /// Point-in-time window list without desktop elements.
    ///
    /// Implementations that return entries topmost-first must say so with
    /// [`crate::window::StackingOrder::FrontToBack`]; anything else is
    /// treated as unordered and yields no focus target.
    fn window_snapshot(&self) -> Result<WindowSnapshot, PlatformError>;
}

/// Reads and moves the pointer.
pub trait PointerService {
    fn pointer_location(&self) -> Result<Point, PlatformError>;

    /// Post a synthetic pointer move to `to`.
    fn move_pointer(&self, to: Point) -> Result<(), PlatformError>;
}

/// Accessibility actions on an application, addressed by process id.
pub trait AccessibilityService {
    /// Perform the "raise" action on the application's top-level element.
    fn raise(&self, pid: i32) -> Result<(), PlatformError>;

    /// Set the application's "frontmost" attribute to true.
    fn set_frontmost(&self, pid: i32) -> Result<(), PlatformError>;
}

/// All services needed for one switch.
pub trait Platform: DisplayService + WindowService + PointerService + AccessibilityService {
    /// Short name used in logs (e.g. "macos").
    fn name(&self) -> &'static str;
}

/// Platform adapter for the OS this binary was built for.
#[cfg(target_os = "macos")]
pub fn native() -> Box<dyn Platform> {
    Box::new(macos::MacPlatform::new())
}

/// Platform adapter for the OS this binary was built for.
#[cfg(not(target_os = "macos"))]
pub fn native() -> Box<dyn Platform> {
    Box::new(unsupported::UnsupportedPlatform::new())
}

//! Fallback for operating systems without an adapter.
//!
//! Every query fails with [`PlatformError::Unsupported`], which ends the
//! switch before anything on screen changes.

use super::{
    AccessibilityService, DisplayService, Platform, PlatformError, PointerService, WindowService,
};
use crate::display::DisplayDescriptor;
use crate::geometry::Point;
use crate::window::WindowSnapshot;

#[derive(Debug, Default)]
pub struct UnsupportedPlatform;

impl UnsupportedPlatform {
    pub fn new() -> Self {
        Self
    }

    fn error(&self) -> PlatformError {
        PlatformError::Unsupported {
            os: std::env::consts::OS.to_string(),
        }
    }
}

impl DisplayService for UnsupportedPlatform {
    fn active_displays(&self) -> Result<Vec<DisplayDescriptor>, PlatformError> {
        Err(self.error())
    }
}

impl WindowService for UnsupportedPlatform {
    fn window_snapshot(&self) -> Result<WindowSnapshot, PlatformError> {
        Err(self.error())
    }
}

impl PointerService for UnsupportedPlatform {
    fn pointer_location(&self) -> Result<Point, PlatformError> {
        Err(self.error())
    }

    fn move_pointer(&self, _to: Point) -> Result<(), PlatformError> {
        Err(self.error())
    }
}

impl AccessibilityService for UnsupportedPlatform {
    fn raise(&self, _pid: i32) -> Result<(), PlatformError> {
        Err(self.error())
    }

    fn set_frontmost(&self, _pid: i32) -> Result<(), PlatformError> {
        Err(self.error())
    }
}

impl Platform for UnsupportedPlatform {
    fn name(&self) -> &'static str {
        "unsupported"
    }
}

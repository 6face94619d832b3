//! Default values for [`SwitchConfig`].

use std::time::Duration;

use crate::config::types::SwitchConfig;

/// Vertical distance under which two displays count as the same row.
pub const DEFAULT_ROW_TOLERANCE: f64 = 100.0;

/// Smallest window edge considered user content.
pub const DEFAULT_MIN_WINDOW_SIZE: f64 = 50.0;

/// A window must sit mostly on the target display.
pub const DEFAULT_MIN_OVERLAP_RATIO: f64 = 0.5;

/// Anything above this is an overlay/HUD layer.
pub const DEFAULT_MAX_LAYER: i32 = 100;

pub const DEFAULT_NORMAL_LAYER: i32 = 0;

/// Time for the window server to catch up after the pointer moves.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Shell UI processes (window server, dock, menu bar, control center).
pub const DEFAULT_BLOCKED_OWNERS: [&str; 4] =
    ["Window Server", "Dock", "SystemUIServer", "ControlCenter"];

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            row_tolerance: DEFAULT_ROW_TOLERANCE,
            min_window_size: DEFAULT_MIN_WINDOW_SIZE,
            min_overlap_ratio: DEFAULT_MIN_OVERLAP_RATIO,
            max_layer: DEFAULT_MAX_LAYER,
            normal_layer: DEFAULT_NORMAL_LAYER,
            settle_delay: DEFAULT_SETTLE_DELAY,
            blocked_owners: DEFAULT_BLOCKED_OWNERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

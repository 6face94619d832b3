use crate::display::DisplayId;
use crate::geometry::Point;

/// Where a switch stopped. Every variant is a normal end state.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    /// Fewer than two usable displays; nothing was moved
    NotEnoughDisplays { count: usize },
    /// Pointer moved, but no window on the target display qualified
    NoFocusTarget { display: DisplayId, pointer: Point },
    /// Pointer moved and focus was requested for the owning process.
    /// Whether the OS honored the request is not known.
    FocusRequested {
        display: DisplayId,
        pointer: Point,
        pid: i32,
    },
}

impl SwitchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchOutcome::NotEnoughDisplays { .. } => "not_enough_displays",
            SwitchOutcome::NoFocusTarget { .. } => "no_focus_target",
            SwitchOutcome::FocusRequested { .. } => "focus_requested",
        }
    }

    /// Whether the pointer was moved to another display
    pub fn moved_pointer(&self) -> bool {
        !matches!(self, SwitchOutcome::NotEnoughDisplays { .. })
    }
}

use crate::errors::HopError;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Display switching is not supported on '{os}'")]
    Unsupported { os: String },

    #[error("Failed to enumerate active displays (CGError: {code})")]
    DisplayEnumerationFailed { code: i32 },

    #[error("Window list unavailable")]
    WindowListUnavailable,

    #[error("Pointer location unavailable")]
    PointerLocationUnavailable,

    #[error("Failed to create event source")]
    EventSourceFailed,

    #[error("Failed to create mouse event at ({x}, {y})")]
    MouseEventFailed { x: f64, y: f64 },

    #[error(
        "Accessibility permission required: enable in System Settings > Privacy & Security > Accessibility"
    )]
    AccessibilityPermissionDenied,

    #[error("Failed to create accessibility element for PID {pid}")]
    ElementCreateFailed { pid: i32 },

    #[error("Raise action failed for PID {pid} (AXError: {code})")]
    RaiseFailed { pid: i32, code: i32 },

    #[error("Setting frontmost failed for PID {pid} (AXError: {code})")]
    FrontmostFailed { pid: i32, code: i32 },
}

impl HopError for PlatformError {
    fn error_code(&self) -> &'static str {
        match self {
            PlatformError::Unsupported { .. } => "PLATFORM_UNSUPPORTED",
            PlatformError::DisplayEnumerationFailed { .. } => "PLATFORM_DISPLAY_ENUMERATION_FAILED",
            PlatformError::WindowListUnavailable => "PLATFORM_WINDOW_LIST_UNAVAILABLE",
            PlatformError::PointerLocationUnavailable => "PLATFORM_POINTER_LOCATION_UNAVAILABLE",
            PlatformError::EventSourceFailed => "PLATFORM_EVENT_SOURCE_FAILED",
            PlatformError::MouseEventFailed { .. } => "PLATFORM_MOUSE_EVENT_FAILED",
            PlatformError::AccessibilityPermissionDenied => "PLATFORM_ACCESSIBILITY_DENIED",
            PlatformError::ElementCreateFailed { .. } => "PLATFORM_ELEMENT_CREATE_FAILED",
            PlatformError::RaiseFailed { .. } => "PLATFORM_RAISE_FAILED",
            PlatformError::FrontmostFailed { .. } => "PLATFORM_FRONTMOST_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            PlatformError::Unsupported { .. } | PlatformError::AccessibilityPermissionDenied
        )
    }
}

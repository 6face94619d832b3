//! macOS adapter over Core Graphics and the Accessibility API.
//!
//! `CGWindowListCopyWindowInfo` returns windows front to back, which is the
//! ordering contract the window finder depends on.

use std::ffi::c_void;

use accessibility_sys::{
    AXUIElementCreateApplication, AXUIElementPerformAction, AXUIElementRef,
    AXUIElementSetAttributeValue, AXUIElementSetMessagingTimeout, kAXErrorSuccess,
    kAXFrontmostAttribute, kAXRaiseAction,
};
use core_foundation::base::{CFRelease, CFType, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::number::CFNumber;
use core_foundation::string::{CFString, CFStringRef};
use core_graphics::display::CGDisplay;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::{CGPoint, CGRect};
use core_graphics::window::{
    copy_window_info, kCGNullWindowID, kCGWindowBounds, kCGWindowLayer,
    kCGWindowListExcludeDesktopElements, kCGWindowListOptionOnScreenOnly, kCGWindowOwnerName,
    kCGWindowOwnerPID,
};
use tracing::{debug, info, warn};

use super::{
    AccessibilityService, DisplayService, Platform, PlatformError, PointerService, WindowService,
};
use crate::display::{DisplayDescriptor, DisplayId};
use crate::geometry::{Point, Rect};
use crate::window::{WindowSnapshot, WindowSnapshotEntry};

// SAFETY: FFI declaration for AXIsProcessTrusted from macOS ApplicationServices framework.
// Returns false when the process lacks accessibility permissions (does not crash).
#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    fn AXIsProcessTrusted() -> bool;
}

/// Timeout for AX messaging (seconds)
const AX_MESSAGING_TIMEOUT: f32 = 1.0;

#[derive(Debug, Default)]
pub struct MacPlatform;

impl MacPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for MacPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }
}

impl DisplayService for MacPlatform {
    fn active_displays(&self) -> Result<Vec<DisplayDescriptor>, PlatformError> {
        let ids = CGDisplay::active_displays()
            .map_err(|code| PlatformError::DisplayEnumerationFailed { code })?;

        let displays: Vec<DisplayDescriptor> = ids
            .into_iter()
            .map(|id| DisplayDescriptor::new(DisplayId(id), to_rect(CGDisplay::new(id).bounds())))
            .collect();

        debug!(
            event = "core.platform.displays_enumerated",
            count = displays.len()
        );
        Ok(displays)
    }
}

impl WindowService for MacPlatform {
    fn window_snapshot(&self) -> Result<WindowSnapshot, PlatformError> {
        let list = copy_window_info(
            kCGWindowListOptionOnScreenOnly | kCGWindowListExcludeDesktopElements,
            kCGNullWindowID,
        )
        .ok_or(PlatformError::WindowListUnavailable)?;

        // SAFETY: the kCGWindow* keys are immutable CFString constants owned by
        // Core Graphics; wrapping under the get rule retains them.
        let (owner_key, pid_key, bounds_key, layer_key) = unsafe {
            (
                cf_key(kCGWindowOwnerName),
                cf_key(kCGWindowOwnerPID),
                cf_key(kCGWindowBounds),
                cf_key(kCGWindowLayer),
            )
        };

        let mut entries = Vec::with_capacity(list.len() as usize);
        for raw in list.iter() {
            let raw: *const c_void = *raw;
            if raw.is_null() {
                continue;
            }

            // SAFETY: every element of the window list is a CFDictionary;
            // wrap_under_get_rule retains it for the lifetime of `window`.
            let window: CFDictionary<CFString, CFType> =
                unsafe { CFDictionary::wrap_under_get_rule(raw as CFDictionaryRef) };

            let owner_name = window
                .find(&owner_key)
                .and_then(|v| v.downcast::<CFString>())
                .map(|s| s.to_string());

            let owner_pid = window
                .find(&pid_key)
                .and_then(|v| v.downcast::<CFNumber>())
                .and_then(|n| n.to_i32());

            let bounds = window
                .find(&bounds_key)
                .and_then(|v| v.downcast::<CFDictionary>())
                .and_then(|d| CGRect::from_dict_representation(&d))
                .map(to_rect);

            // The window server omits the layer for ordinary windows.
            let layer = window
                .find(&layer_key)
                .and_then(|v| v.downcast::<CFNumber>())
                .and_then(|n| n.to_i32())
                .unwrap_or(0);

            entries.push(WindowSnapshotEntry::new(owner_name, owner_pid, bounds, layer));
        }

        debug!(
            event = "core.platform.window_snapshot_taken",
            count = entries.len()
        );
        Ok(WindowSnapshot::front_to_back(entries))
    }
}

impl PointerService for MacPlatform {
    fn pointer_location(&self) -> Result<Point, PlatformError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|()| PlatformError::EventSourceFailed)?;
        let event = CGEvent::new(source).map_err(|()| PlatformError::PointerLocationUnavailable)?;
        let location = event.location();
        Ok(Point::new(location.x, location.y))
    }

    fn move_pointer(&self, to: Point) -> Result<(), PlatformError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|()| PlatformError::EventSourceFailed)?;

        let event = CGEvent::new_mouse_event(
            source,
            CGEventType::MouseMoved,
            CGPoint::new(to.x, to.y),
            CGMouseButton::Left,
        )
        .map_err(|()| PlatformError::MouseEventFailed { x: to.x, y: to.y })?;

        event.post(CGEventTapLocation::HID);
        debug!(event = "core.platform.pointer_posted", x = to.x, y = to.y);
        Ok(())
    }
}

impl AccessibilityService for MacPlatform {
    fn raise(&self, pid: i32) -> Result<(), PlatformError> {
        check_accessibility_permission()?;
        let app = AppElement::create(pid)?;

        let action = CFString::new(kAXRaiseAction);
        // SAFETY: app holds a valid AXUIElementRef for the duration of the call.
        let result = unsafe { AXUIElementPerformAction(app.as_raw(), action.as_concrete_TypeRef()) };

        if result != kAXErrorSuccess {
            return Err(PlatformError::RaiseFailed { pid, code: result });
        }
        Ok(())
    }

    fn set_frontmost(&self, pid: i32) -> Result<(), PlatformError> {
        check_accessibility_permission()?;
        let app = AppElement::create(pid)?;

        let attribute = CFString::new(kAXFrontmostAttribute);
        let value = CFBoolean::true_value();
        // SAFETY: app holds a valid AXUIElementRef; attribute and value outlive the call.
        let result = unsafe {
            AXUIElementSetAttributeValue(
                app.as_raw(),
                attribute.as_concrete_TypeRef(),
                value.as_CFTypeRef(),
            )
        };

        if result != kAXErrorSuccess {
            return Err(PlatformError::FrontmostFailed { pid, code: result });
        }
        info!(event = "core.platform.frontmost_set", pid = pid);
        Ok(())
    }
}

/// Owned application accessibility element, released on drop.
struct AppElement(AXUIElementRef);

impl AppElement {
    fn create(pid: i32) -> Result<Self, PlatformError> {
        // SAFETY: AXUIElementCreateApplication creates a +1 retained AXUIElementRef.
        let element = unsafe { AXUIElementCreateApplication(pid) };
        if element.is_null() {
            return Err(PlatformError::ElementCreateFailed { pid });
        }

        // SAFETY: element is a valid AXUIElementRef we just created.
        unsafe {
            AXUIElementSetMessagingTimeout(element, AX_MESSAGING_TIMEOUT);
        }

        Ok(Self(element))
    }

    fn as_raw(&self) -> AXUIElementRef {
        self.0
    }
}

impl Drop for AppElement {
    fn drop(&mut self) {
        // SAFETY: Release the app element (Create Rule: we own it).
        unsafe {
            CFRelease(self.0 as CFTypeRef);
        }
    }
}

/// Check if the current process has accessibility permissions
fn check_accessibility_permission() -> Result<(), PlatformError> {
    // SAFETY: AXIsProcessTrusted takes no arguments and only reads process state.
    let trusted = unsafe { AXIsProcessTrusted() };
    if !trusted {
        warn!(event = "core.platform.accessibility_untrusted");
        return Err(PlatformError::AccessibilityPermissionDenied);
    }
    Ok(())
}

unsafe fn cf_key(key: CFStringRef) -> CFString {
    unsafe { CFString::wrap_under_get_rule(key) }
}

fn to_rect(rect: CGRect) -> Rect {
    Rect::new(
        rect.origin.x,
        rect.origin.y,
        rect.size.width,
        rect.size.height,
    )
}

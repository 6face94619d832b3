//! Bring an application to the foreground.
//!
//! Focus is best-effort and unobservable to the caller: the raise action is
//! tried first, the frontmost attribute second, and neither outcome is
//! returned. Whether focus actually moved is only visible in the logs.

use tracing::{debug, info, warn};

use crate::platform::AccessibilityService;

/// Raise the application owning `pid`, falling back to setting it frontmost.
pub fn focus_application<A>(service: &A, pid: i32)
where
    A: AccessibilityService + ?Sized,
{
    debug!(event = "core.focus.raise_started", pid = pid);

    let raise_error = match service.raise(pid) {
        Ok(()) => {
            info!(event = "core.focus.raise_completed", pid = pid);
            return;
        }
        Err(e) => e,
    };

    debug!(
        event = "core.focus.raise_failed_fallback",
        pid = pid,
        error = %raise_error
    );

    match service.set_frontmost(pid) {
        Ok(()) => {
            info!(event = "core.focus.frontmost_completed", pid = pid);
        }
        Err(e) => {
            warn!(
                event = "core.focus.failed",
                pid = pid,
                raise_error = %raise_error,
                frontmost_error = %e
            );
        }
    }
}

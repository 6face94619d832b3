use std::thread;

use tracing::{debug, info, warn};

use super::errors::SwitchError;
use super::types::SwitchOutcome;
use crate::config::{SwitchConfig, validate_config};
use crate::display::{locate_current, next_index, order_displays, validate_displays};
use crate::focus::focus_application;
use crate::platform::Platform;
use crate::window::find_top_window;

/// Move the pointer to the next display and focus its top window.
///
/// Runs once, synchronously: fetch and order the displays, find the one under
/// the pointer, move the pointer to the center of the next one, wait for the
/// window server to settle, then focus the topmost qualifying window there.
///
/// # Errors
///
/// Returns an error when the config is invalid or the displays, pointer
/// location or pointer move are unavailable. A missing window list or an
/// empty display is not an error; see [`SwitchOutcome`].
pub fn run_switch<P>(platform: &P, config: &SwitchConfig) -> Result<SwitchOutcome, SwitchError>
where
    P: Platform + ?Sized,
{
    info!(event = "core.switch.started", platform = platform.name());

    validate_config(config)?;

    let displays = validate_displays(platform.active_displays()?);
    if displays.len() < 2 {
        info!(
            event = "core.switch.skipped",
            reason = "not_enough_displays",
            count = displays.len()
        );
        return Ok(SwitchOutcome::NotEnoughDisplays {
            count: displays.len(),
        });
    }

    let displays = order_displays(displays, config.row_tolerance);
    debug!(
        event = "core.display.order_completed",
        order = ?displays.iter().map(|d| d.id().0).collect::<Vec<_>>()
    );

    let pointer = platform.pointer_location()?;
    let current = locate_current(&displays, pointer);
    // At least two displays, so there is always a next one.
    let next = next_index(current, displays.len()).unwrap_or(0);
    let target = displays[next];

    info!(
        event = "core.switch.target_selected",
        current_index = current,
        next_index = next,
        display_id = %target.id()
    );

    let center = target.center();
    platform.move_pointer(center)?;
    info!(
        event = "core.switch.pointer_moved",
        x = center.x,
        y = center.y
    );

    if !config.settle_delay.is_zero() {
        thread::sleep(config.settle_delay);
    }

    let candidate = match platform.window_snapshot() {
        Ok(snapshot) => find_top_window(target.bounds(), &snapshot, config),
        Err(e) => {
            warn!(
                event = "core.switch.window_snapshot_failed",
                error = %e
            );
            None
        }
    };

    let Some(pid) = candidate else {
        info!(
            event = "core.switch.completed",
            outcome = "no_focus_target",
            display_id = %target.id()
        );
        return Ok(SwitchOutcome::NoFocusTarget {
            display: target.id(),
            pointer: center,
        });
    };

    focus_application(platform, pid);

    info!(
        event = "core.switch.completed",
        outcome = "focus_requested",
        display_id = %target.id(),
        pid = pid
    );
    Ok(SwitchOutcome::FocusRequested {
        display: target.id(),
        pointer: center,
        pid,
    })
}

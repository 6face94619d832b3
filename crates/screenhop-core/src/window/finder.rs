//! Pick the window that should receive focus on a display.
//!
//! The scan relies on the snapshot being topmost-first: the first entry that
//! survives every filter and sits on the normal application layer wins. A
//! snapshot without that guarantee yields no candidate.

use tracing::{debug, info, warn};

use super::types::{StackingOrder, WindowSnapshot, WindowSnapshotEntry};
use crate::config::SwitchConfig;
use crate::geometry::Rect;

/// Why an entry was passed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    MissingOwner,
    BlockedOwner,
    UnreadableBounds,
    TooSmall,
    OffDisplay,
    MostlyOffDisplay,
    OverlayLayer,
    NotNormalLayer,
    MissingPid,
}

impl Rejection {
    fn as_str(&self) -> &'static str {
        match self {
            Rejection::MissingOwner => "missing_owner",
            Rejection::BlockedOwner => "blocked_owner",
            Rejection::UnreadableBounds => "unreadable_bounds",
            Rejection::TooSmall => "too_small",
            Rejection::OffDisplay => "off_display",
            Rejection::MostlyOffDisplay => "mostly_off_display",
            Rejection::OverlayLayer => "overlay_layer",
            Rejection::NotNormalLayer => "not_normal_layer",
            Rejection::MissingPid => "missing_pid",
        }
    }
}

/// Owner pid of the topmost qualifying window on `display`, if any.
pub fn find_top_window(
    display: Rect,
    snapshot: &WindowSnapshot,
    config: &SwitchConfig,
) -> Option<i32> {
    if snapshot.stacking() != StackingOrder::FrontToBack {
        warn!(
            event = "core.window.find_skipped",
            reason = "unordered_snapshot",
            entry_count = snapshot.len()
        );
        return None;
    }

    for (index, entry) in snapshot.entries().iter().enumerate() {
        match evaluate(entry, display, config) {
            Ok(pid) => {
                info!(
                    event = "core.window.find_completed",
                    pid = pid,
                    owner = entry.owner_name().unwrap_or_default(),
                    index = index
                );
                return Some(pid);
            }
            Err(rejection) => {
                debug!(
                    event = "core.window.entry_rejected",
                    index = index,
                    owner = entry.owner_name().unwrap_or_default(),
                    reason = rejection.as_str()
                );
            }
        }
    }

    info!(
        event = "core.window.find_no_candidate",
        entry_count = snapshot.len()
    );
    None
}

fn evaluate(
    entry: &WindowSnapshotEntry,
    display: Rect,
    config: &SwitchConfig,
) -> Result<i32, Rejection> {
    let owner = entry.owner_name().ok_or(Rejection::MissingOwner)?;
    if config.is_blocked_owner(owner) {
        return Err(Rejection::BlockedOwner);
    }

    let bounds = entry
        .bounds()
        .filter(Rect::is_well_formed)
        .ok_or(Rejection::UnreadableBounds)?;
    if bounds.width < config.min_window_size || bounds.height < config.min_window_size {
        return Err(Rejection::TooSmall);
    }

    let overlap = bounds
        .intersection(&display)
        .ok_or(Rejection::OffDisplay)?;
    if overlap.area() / bounds.area() < config.min_overlap_ratio {
        return Err(Rejection::MostlyOffDisplay);
    }

    if entry.layer() > config.max_layer {
        return Err(Rejection::OverlayLayer);
    }
    if entry.layer() != config.normal_layer {
        return Err(Rejection::NotNormalLayer);
    }

    entry.owner_pid().ok_or(Rejection::MissingPid)
}

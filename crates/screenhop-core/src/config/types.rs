use std::time::Duration;

/// Thresholds and timings used by one switch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchConfig {
    /// Displays whose origin Y differs by less than this share a row
    pub row_tolerance: f64,
    /// Windows narrower or shorter than this are ignored
    pub min_window_size: f64,
    /// Minimum share of a window's area that must lie on the target display
    pub min_overlap_ratio: f64,
    /// Windows above this layer are overlays and never candidates
    pub max_layer: i32,
    /// Layer of ordinary application windows
    pub normal_layer: i32,
    /// Wait between moving the pointer and sampling the window list
    pub settle_delay: Duration,
    /// Owner names of shell processes that never receive focus
    pub blocked_owners: Vec<String>,
}

impl SwitchConfig {
    /// Default thresholds with no settle delay.
    pub fn without_settle_delay() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn is_blocked_owner(&self, owner: &str) -> bool {
        self.blocked_owners.iter().any(|b| b == owner)
    }
}

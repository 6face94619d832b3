use std::collections::HashSet;

use tracing::{debug, warn};

use super::types::DisplayDescriptor;
use crate::geometry::Point;

/// Drop descriptors the rest of the pipeline cannot reason about.
///
/// Removes displays with non-finite or empty bounds and repeated ids (first
/// occurrence wins). There is no cap on the number of displays.
pub fn validate_displays(displays: Vec<DisplayDescriptor>) -> Vec<DisplayDescriptor> {
    let reported = displays.len();
    let mut seen = HashSet::new();

    let valid: Vec<DisplayDescriptor> = displays
        .into_iter()
        .filter(|d| {
            if !d.bounds().is_well_formed() {
                warn!(
                    event = "core.display.descriptor_rejected",
                    display_id = %d.id(),
                    reason = "malformed_bounds",
                    bounds = ?d.bounds()
                );
                return false;
            }
            if !seen.insert(d.id()) {
                warn!(
                    event = "core.display.descriptor_rejected",
                    display_id = %d.id(),
                    reason = "duplicate_id"
                );
                return false;
            }
            true
        })
        .collect();

    debug!(
        event = "core.display.validate_completed",
        reported_count = reported,
        valid_count = valid.len()
    );

    valid
}

/// Index of the display under `pointer`, or 0 when no display contains it.
pub fn locate_current(displays: &[DisplayDescriptor], pointer: Point) -> usize {
    match displays.iter().position(|d| d.contains(pointer)) {
        Some(index) => index,
        None => {
            debug!(
                event = "core.display.pointer_outside_displays",
                x = pointer.x,
                y = pointer.y
            );
            0
        }
    }
}

/// Next index, wrapping around. `None` only when there are no displays.
pub fn next_index(current: usize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some((current + 1) % count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::DisplayId;
    use crate::geometry::Rect;

    fn pair() -> Vec<DisplayDescriptor> {
        vec![
            DisplayDescriptor::new(DisplayId(1), Rect::new(0.0, 0.0, 1920.0, 1080.0)),
            DisplayDescriptor::new(DisplayId(2), Rect::new(1920.0, 0.0, 1080.0, 1920.0)),
        ]
    }

    #[test]
    fn test_locate_current_finds_containing_display() {
        let displays = pair();
        assert_eq!(locate_current(&displays, Point::new(500.0, 500.0)), 0);
        assert_eq!(locate_current(&displays, Point::new(2000.0, 1500.0)), 1);
    }

    #[test]
    fn test_locate_current_shared_edge_belongs_to_right_display() {
        let displays = pair();
        assert_eq!(locate_current(&displays, Point::new(1920.0, 10.0)), 1);
    }

    #[test]
    fn test_locate_current_defaults_to_zero() {
        let displays = pair();
        assert_eq!(locate_current(&displays, Point::new(500.0, 1500.0)), 0);
        assert_eq!(locate_current(&displays, Point::new(-5.0, -5.0)), 0);
        assert_eq!(locate_current(&[], Point::new(0.0, 0.0)), 0);
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(0, 2), Some(1));
        assert_eq!(next_index(1, 2), Some(0));
        assert_eq!(next_index(2, 3), Some(0));
    }

    #[test]
    fn test_next_index_cycles_back_after_n_steps() {
        for count in 1..=6 {
            for start in 0..count {
                let mut index = start;
                for _ in 0..count {
                    index = next_index(index, count).unwrap();
                    assert!(index < count);
                }
                assert_eq!(index, start);
            }
        }
    }

    #[test]
    fn test_next_index_no_displays() {
        assert_eq!(next_index(0, 0), None);
    }

    #[test]
    fn test_validate_drops_malformed_and_duplicates() {
        let displays = vec![
            DisplayDescriptor::new(DisplayId(1), Rect::new(0.0, 0.0, 1920.0, 1080.0)),
            DisplayDescriptor::new(DisplayId(2), Rect::new(1920.0, 0.0, 0.0, 1080.0)),
            DisplayDescriptor::new(DisplayId(3), Rect::new(f64::NAN, 0.0, 800.0, 600.0)),
            DisplayDescriptor::new(DisplayId(1), Rect::new(5000.0, 0.0, 800.0, 600.0)),
            DisplayDescriptor::new(DisplayId(4), Rect::new(-800.0, 0.0, 800.0, 600.0)),
        ];
        let valid = validate_displays(displays);
        let ids: Vec<u32> = valid.iter().map(|d| d.id().0).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(valid[0].origin_x(), 0.0);
    }

    #[test]
    fn test_validate_keeps_more_than_eight_displays() {
        let displays: Vec<DisplayDescriptor> = (0..12)
            .map(|i| {
                DisplayDescriptor::new(
                    DisplayId(i),
                    Rect::new(f64::from(i) * 1920.0, 0.0, 1920.0, 1080.0),
                )
            })
            .collect();
        assert_eq!(validate_displays(displays).len(), 12);
    }
}

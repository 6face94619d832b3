//! Reading-order layout of displays.
//!
//! Displays are grouped into rows by origin Y, rows go top to bottom and
//! displays within a row go left to right. Grouping is single-linkage: a
//! display joins the current row when its Y is within tolerance of the
//! previous display's Y (after sorting by Y), so chains of slightly offset
//! displays end up in one row. The result is a total order that does not
//! depend on the input order.

use std::cmp::Ordering;

use tracing::debug;

use super::types::DisplayDescriptor;

/// Order displays left-to-right, top-to-bottom.
///
/// Always returns a permutation of `displays`.
pub fn order_displays(
    displays: Vec<DisplayDescriptor>,
    row_tolerance: f64,
) -> Vec<DisplayDescriptor> {
    let mut by_y = displays;
    by_y.sort_by(compare_by_y);

    let mut rows: Vec<Vec<DisplayDescriptor>> = Vec::new();
    let mut previous_y: Option<f64> = None;

    for display in by_y {
        let y = display.origin_y();
        let joins_row = previous_y.is_some_and(|prev| y - prev < row_tolerance);

        if joins_row && let Some(row) = rows.last_mut() {
            row.push(display);
        } else {
            rows.push(vec![display]);
        }
        previous_y = Some(y);
    }

    debug!(
        event = "core.display.rows_grouped",
        row_count = rows.len(),
        row_tolerance = row_tolerance
    );

    // Rows were built in ascending Y, so their first member is the minimum Y
    // and the row sequence is already sorted by representative Y.
    rows.into_iter()
        .flat_map(|mut row| {
            row.sort_by(compare_by_x);
            row
        })
        .collect()
}

fn compare_by_y(a: &DisplayDescriptor, b: &DisplayDescriptor) -> Ordering {
    a.origin_y()
        .total_cmp(&b.origin_y())
        .then_with(|| a.origin_x().total_cmp(&b.origin_x()))
        .then_with(|| a.id().cmp(&b.id()))
}

fn compare_by_x(a: &DisplayDescriptor, b: &DisplayDescriptor) -> Ordering {
    a.origin_x()
        .total_cmp(&b.origin_x())
        .then_with(|| a.origin_y().total_cmp(&b.origin_y()))
        .then_with(|| a.id().cmp(&b.id()))
}

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use itertools::Itertools as _;

use crate::math::{GridBox, GridCoordinate};

/// Merges boxes which line up exactly into single boxes, until no more merges are
/// possible.
///
/// Two boxes merge when their bounds agree on every axis but one, and on that axis
/// they overlap or are directly adjacent (no cell lies between them). The covered
/// cells and, for a disjoint input, the total volume are unchanged.
///
/// The result is sorted, so coalescing it again returns it unchanged.
///
/// ```
/// use gridset::math::{GridBox, coalesce};
///
/// let pieces = vec![
///     GridBox::from_extents([(0, 4), (5, 9)]),
///     GridBox::from_extents([(0, 4), (0, 4)]),
///     GridBox::from_extents([(5, 9), (0, 9)]),
/// ];
/// assert_eq!(coalesce(pieces), [GridBox::from_extents([(0, 9), (0, 9)])]);
/// ```
#[must_use]
pub fn coalesce<const N: usize>(mut boxes: Vec<GridBox<N>>) -> Vec<GridBox<N>> {
    loop {
        let count_before = boxes.len();
        for axis in 0..N {
            boxes = merge_along_axis(boxes, axis);
        }
        if boxes.len() == count_before {
            break;
        }
    }
    boxes.sort_unstable();
    boxes
}

/// One merging pass along a single axis.
///
/// Boxes are grouped into rows whose bounds agree on every other axis, and each row's
/// spans along `axis` are merged wherever they touch.
fn merge_along_axis<const N: usize>(boxes: Vec<GridBox<N>>, axis: usize) -> Vec<GridBox<N>> {
    let mut rows: BTreeMap<GridBox<N>, Vec<(GridCoordinate, GridCoordinate)>> = BTreeMap::new();
    for b in boxes {
        let range = b.axis_range(axis);
        rows.entry(b.with_axis_range(axis, 0, 0))
            .or_default()
            .push((*range.start(), *range.end()));
    }

    let mut merged = Vec::new();
    for (row, mut spans) in rows {
        spans.sort_unstable();
        merged.extend(
            spans
                .into_iter()
                .coalesce(|(lo1, hi1), (lo2, hi2)| {
                    if hi1.checked_add(1).is_none_or(|after| lo2 <= after) {
                        Ok((lo1, hi1.max(hi2)))
                    } else {
                        Err(((lo1, hi1), (lo2, hi2)))
                    }
                })
                .map(|(lower, upper)| row.with_axis_range(axis, lower, upper)),
        );
    }
    merged
}

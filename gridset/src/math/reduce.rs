use alloc::vec::Vec;

use crate::math::GridBox;

/// Removes every box which is equal to, or contained in, another box of the list.
///
/// Boxes are considered largest first (by volume, then by the sum of their side
/// lengths), and a box is kept only if no box kept before it contains it. The result
/// is therefore ordered largest first. Partially overlapping boxes are all kept; this
/// only removes redundancy, not overlap.
///
/// ```
/// use gridset::math::{GridBox, reduce};
///
/// let big = GridBox::from_extents([(0, 9)]);
/// let small = GridBox::from_extents([(2, 3)]);
/// let other = GridBox::from_extents([(20, 22)]);
/// assert_eq!(reduce(vec![small, other, big, small]), [big, other]);
/// ```
#[must_use]
pub fn reduce<const N: usize>(mut boxes: Vec<GridBox<N>>) -> Vec<GridBox<N>> {
    // Volumes too large for u128 sort first; nothing they fail to contain could
    // contain them.
    boxes.sort_by_key(|b| {
        core::cmp::Reverse((b.volume().unwrap_or(u128::MAX), b.length_sum()))
    });

    let mut kept: Vec<GridBox<N>> = Vec::with_capacity(boxes.len());
    for candidate in boxes {
        if !kept.iter().any(|k| k.contains_box(candidate)) {
            kept.push(candidate);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty() {
        assert!(reduce::<3>(Vec::new()).is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let b = GridBox::from_extents([(0, 1), (0, 1)]);
        assert_eq!(reduce(vec![b, b, b]), [b]);
    }

    #[test]
    fn overlapping_boxes_are_kept() {
        let a = GridBox::from_extents([(0, 5), (0, 5)]);
        let b = GridBox::from_extents([(3, 9), (3, 9)]);
        assert_eq!(reduce(vec![a, b]), [b, a]);
    }

    #[test]
    fn nested_chain() {
        let boxes = vec![
            GridBox::from_extents([(2, 2), (2, 2), (2, 2)]),
            GridBox::from_extents([(0, 9), (0, 9), (0, 9)]),
            GridBox::from_extents([(1, 3), (1, 3), (1, 3)]),
        ];
        assert_eq!(reduce(boxes), [GridBox::from_extents([(0, 9), (0, 9), (0, 9)])]);
    }

    #[test]
    fn equal_volume_ties_broken_by_shape() {
        // Same volume, but the slab has the larger length sum and sorts first.
        let cube = GridBox::from_extents([(0, 1), (0, 1), (0, 1)]);
        let slab = GridBox::from_extents([(10, 17), (0, 0), (0, 0)]);
        assert_eq!(reduce(vec![cube, slab]), [slab, cube]);
    }

    #[test]
    fn unmeasurable_volume_sorts_first() {
        let everything = GridBox::from_extents([(i32::MIN, i32::MAX); 4]);
        let small = GridBox::from_extents([(0, 0); 4]);
        assert_eq!(everything.volume(), None);
        assert_eq!(reduce(vec![small, everything]), [everything]);
    }
}

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use alloc::vec::Vec;
use arrayvec::ArrayVec;

use crate::math::{GridBox, GridCoordinate};

/// Which face of a box a [`Fence`] was derived from.
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FenceSide {
    /// The face at the lower bound of an axis. The box lies on the positive side of
    /// the fence.
    Lower,
    /// The face just past the upper bound of an axis. The box lies on the negative side
    /// of the fence.
    Upper,
}

/// An axis-perpendicular plane between two adjacent layers of cells, used to slice
/// boxes apart.
///
/// The fence lies between the coordinates `position - 1` and `position` on its axis;
/// [`slice()`] puts cells below `position` in one piece and the rest in the other.
///
/// Fences are compared, ordered, and hashed by axis and position only. Two fences at
/// the same place slice identically, whichever face they came from.
#[derive(Clone, Copy, Debug)]
pub struct Fence {
    axis: usize,
    position: GridCoordinate,
    side: FenceSide,
}

impl Fence {
    /// Constructs a fence between `position - 1` and `position` on the given axis.
    #[inline]
    pub const fn new(axis: usize, position: GridCoordinate, side: FenceSide) -> Self {
        Self {
            axis,
            position,
            side,
        }
    }

    /// The axis this fence is perpendicular to.
    #[inline]
    pub const fn axis(&self) -> usize {
        self.axis
    }

    /// The lowest coordinate on the positive side of the fence.
    #[inline]
    pub const fn position(&self) -> GridCoordinate {
        self.position
    }

    /// Which face of its originating box this fence lies along.
    #[inline]
    pub const fn side(&self) -> FenceSide {
        self.side
    }

    /// Returns whether slicing `bounds` along this fence would split it in two,
    /// i.e. whether the box has cells on both sides of the fence.
    #[inline]
    pub fn splits<const N: usize>(&self, bounds: &GridBox<N>) -> bool {
        self.axis < N && {
            let range = bounds.axis_range(self.axis);
            *range.start() < self.position && self.position <= *range.end()
        }
    }
}

impl PartialEq for Fence {
    fn eq(&self, other: &Self) -> bool {
        self.axis == other.axis && self.position == other.position
    }
}
impl Eq for Fence {}

impl Ord for Fence {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.axis, self.position).cmp(&(other.axis, other.position))
    }
}
impl PartialOrd for Fence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Fence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.axis.hash(state);
        self.position.hash(state);
    }
}

/// Slices `bounds` along `fence`.
///
/// If the fence passes through the box, returns the two pieces on either side of it,
/// lower piece first; they do not overlap and leave no gap. Otherwise, including when
/// the fence lies exactly on a face of the box, returns the box unchanged.
///
/// ```
/// use gridset::math::{Fence, FenceSide, GridBox, slice};
///
/// let b = GridBox::from_extents([(0, 9), (0, 9)]);
/// assert_eq!(
///     slice(b, Fence::new(0, 4, FenceSide::Lower)).as_slice(),
///     [GridBox::from_extents([(0, 3), (0, 9)]), GridBox::from_extents([(4, 9), (0, 9)])],
/// );
/// assert_eq!(slice(b, Fence::new(1, 0, FenceSide::Lower)).as_slice(), [b]);
/// assert_eq!(slice(b, Fence::new(1, 10, FenceSide::Upper)).as_slice(), [b]);
/// ```
pub fn slice<const N: usize>(bounds: GridBox<N>, fence: Fence) -> ArrayVec<GridBox<N>, 2> {
    let mut pieces = ArrayVec::new();
    if fence.splits(&bounds) {
        let range = bounds.axis_range(fence.axis);
        pieces.push(bounds.with_axis_range(fence.axis, *range.start(), fence.position - 1));
        pieces.push(bounds.with_axis_range(fence.axis, fence.position, *range.end()));
    } else {
        pieces.push(bounds);
    }
    pieces
}

/// Slices every box in `boxes` along every fence in `fences`, in order, and returns
/// all resulting pieces.
pub fn slice_all<const N: usize, I>(boxes: Vec<GridBox<N>>, fences: I) -> Vec<GridBox<N>>
where
    I: IntoIterator<Item = Fence>,
{
    fences.into_iter().fold(boxes, |pieces, fence| {
        pieces
            .into_iter()
            .flat_map(|piece| slice(piece, fence))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use pretty_assertions::assert_eq;

    #[test]
    fn equality_ignores_side() {
        let lower = Fence::new(2, 5, FenceSide::Lower);
        let upper = Fence::new(2, 5, FenceSide::Upper);
        assert_eq!(lower, upper);

        let set: BTreeSet<Fence> = [lower, upper, Fence::new(1, 5, FenceSide::Lower)].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn slice_at_upper_bound_keeps_last_layer_separate() {
        let b = GridBox::from_extents([(0, 9)]);
        assert_eq!(
            slice(b, Fence::new(0, 9, FenceSide::Lower)).as_slice(),
            [GridBox::from_extents([(0, 8)]), GridBox::from_extents([(9, 9)])],
        );
    }

    #[test]
    fn slice_on_other_axis_or_outside_is_identity() {
        let b = GridBox::from_extents([(0, 9), (0, 0)]);
        assert_eq!(slice(b, Fence::new(1, 0, FenceSide::Lower)).as_slice(), [b]);
        assert_eq!(slice(b, Fence::new(1, 1, FenceSide::Upper)).as_slice(), [b]);
        assert_eq!(slice(b, Fence::new(0, -5, FenceSide::Lower)).as_slice(), [b]);
        assert_eq!(slice(b, Fence::new(0, 20, FenceSide::Upper)).as_slice(), [b]);
    }

    #[test]
    fn slice_all_along_another_box() {
        let b = GridBox::from_extents([(0, 9), (0, 9)]);
        let hole = GridBox::from_extents([(3, 5), (3, 5)]);
        let pieces = slice_all(vec![b], hole.fences());
        assert_eq!(pieces.len(), 9);
        assert_eq!(
            pieces.iter().map(|p| p.volume().unwrap()).sum::<u128>(),
            b.volume().unwrap()
        );
        assert!(pieces.contains(&hole));
        for (i, p) in pieces.iter().enumerate() {
            for q in &pieces[i + 1..] {
                assert!(!p.intersects(*q), "{p:?} and {q:?} overlap");
            }
        }
    }
}

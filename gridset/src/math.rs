//! Integer boxes and the set operations on them.
//!
//! The building blocks, leaves first:
//!
//! * [`GridBox`]: an axis-aligned box of cells with inclusive bounds.
//! * [`Fence`]: a slicing plane derived from one face of a box.
//! * [`slice()`], [`explode_cuts()`], [`explode_pair()`], [`PendingCuts`]:
//!   decomposition of boxes into disjoint fragments.
//! * [`reduce()`]: removal of duplicated and subsumed boxes.
//! * [`coalesce()`]: merging of boxes which line up, to keep lists short.

mod coalesce;
pub use coalesce::*;
mod decompose;
pub use decompose::*;
mod fence;
pub use fence::*;
mod grid_box;
pub use grid_box::*;
mod reduce;
pub use reduce::*;

/// Coordinates of cells in a [`GridBox`].
///
/// Volumes are computed in [`u128`], so sizes are not limited by this type's range.
pub type GridCoordinate = i32;

/// A cell position: one coordinate per axis.
pub type GridPoint<const N: usize> = [GridCoordinate; N];

/// Sort exactly two items; swap them if `a > b`.
#[inline]
#[doc(hidden)]
pub fn sort_two<T: PartialOrd>(a: &mut T, b: &mut T) {
    if *a > *b {
        core::mem::swap(a, b);
    }
}

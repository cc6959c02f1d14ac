//! Axis-aligned integer-coordinate boxes with inclusive bounds ([`GridBox`]).

use core::fmt;
use core::iter::FusedIterator;
use core::ops::RangeInclusive;

use crate::math::{Fence, FenceSide, GridCoordinate, GridPoint, sort_two};

/// An axis-aligned box of cells in `N`-dimensional integer space.
///
/// Each axis has an inclusive lower and upper bound, and the lower bound is never
/// greater than the upper bound; every box therefore contains at least one cell.
/// Constructors accept the bounds of an axis in either order.
///
/// `GridBox` is a plain value: operations which change a box return a new one.
/// The number of axes is part of the type, so boxes of different dimensionality
/// cannot be mixed.
///
/// The [`Ord`] implementation is lexicographic on the bounds and carries no geometric
/// meaning; it exists so that lists of boxes can be put in a deterministic order.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GridBox<const N: usize> {
    lower: GridPoint<N>,
    /// Constructor checks ensure this is not smaller than `lower` on any axis.
    upper: GridPoint<N>,
}

impl<const N: usize> GridBox<N> {
    /// Constructs a [`GridBox`] from one pair of inclusive bounds per axis.
    ///
    /// The two bounds of an axis may be given in either order.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let b = GridBox::from_extents([(10, 12), (5, -5)]);
    /// assert_eq!(b.lower_bounds(), [10, -5]);
    /// assert_eq!(b.upper_bounds(), [12, 5]);
    /// ```
    #[inline]
    pub fn from_extents(extents: [(GridCoordinate, GridCoordinate); N]) -> Self {
        let mut lower = [0; N];
        let mut upper = [0; N];
        for (axis, (mut a, mut b)) in extents.into_iter().enumerate() {
            sort_two(&mut a, &mut b);
            lower[axis] = a;
            upper[axis] = b;
        }
        Self { lower, upper }
    }

    /// Constructs a [`GridBox`] from inclusive ranges.
    ///
    /// This is identical to [`GridBox::from_extents()`] except for the input type;
    /// reversed ranges are accepted and normalized rather than treated as empty.
    #[inline]
    pub fn from_ranges(ranges: [RangeInclusive<GridCoordinate>; N]) -> Self {
        Self::from_extents(ranges.map(RangeInclusive::into_inner))
    }

    /// Constructs the smallest [`GridBox`] containing both of the given cells.
    #[inline]
    pub fn from_corners(a: GridPoint<N>, b: GridPoint<N>) -> Self {
        Self::from_extents(core::array::from_fn(|axis| (a[axis], b[axis])))
    }

    /// Constructs a [`GridBox`] with a volume of 1, containing the specified cell.
    #[inline]
    pub const fn single_cell(cell: GridPoint<N>) -> Self {
        Self {
            lower: cell,
            upper: cell,
        }
    }

    /// Inclusive lower bounds; the most negative cell of the box.
    #[inline]
    pub const fn lower_bounds(&self) -> GridPoint<N> {
        self.lower
    }

    /// Inclusive upper bounds; the most positive cell of the box.
    #[inline]
    pub const fn upper_bounds(&self) -> GridPoint<N> {
        self.upper
    }

    /// The range of coordinates for cells within the box along the given axis.
    ///
    /// Panics if `axis >= N`.
    #[inline]
    #[track_caller]
    pub fn axis_range(&self, axis: usize) -> RangeInclusive<GridCoordinate> {
        self.lower[axis]..=self.upper[axis]
    }

    /// The number of cells the box spans along the given axis. Always at least 1.
    ///
    /// Panics if `axis >= N`.
    #[inline]
    #[track_caller]
    pub fn axis_length(&self, axis: usize) -> u64 {
        u64::from(self.upper[axis].abs_diff(self.lower[axis])) + 1
    }

    /// Computes the volume of this box in cells, i.e. the product of all axis lengths.
    ///
    /// Returns [`None`] if the volume does not fit in a [`u128`], which requires at least
    /// four axes spanning nearly the entire coordinate range.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let a = GridBox::from_extents([(-10, 89), (3, 202), (7, 306)]);
    /// assert_eq!(a.volume(), Some(6_000_000));
    ///
    /// let huge = GridBox::from_extents([(-1_000_000, 1_000_000); 3]);
    /// assert_eq!(huge.volume(), Some(2_000_001u128.pow(3)));
    /// ```
    #[inline]
    pub fn volume(&self) -> Option<u128> {
        (0..N).try_fold(1u128, |volume, axis| {
            volume.checked_mul(u128::from(self.axis_length(axis)))
        })
    }

    /// Sum of the axis lengths.
    ///
    /// A box which strictly contains another always has a strictly larger sum, even when
    /// [`GridBox::volume()`] overflows, so this is a reliable tiebreaker for sorting
    /// containers before their contents.
    pub(crate) fn length_sum(&self) -> u128 {
        (0..N).map(|axis| u128::from(self.axis_length(axis))).sum()
    }

    /// Returns whether the box includes the given cell.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let b = GridBox::from_extents([(4, 9), (4, 9)]);
    /// assert!(!b.contains_cell([3, 5]));
    /// assert!(b.contains_cell([4, 5]));
    /// assert!(b.contains_cell([9, 9]));
    /// assert!(!b.contains_cell([10, 5]));
    /// ```
    #[inline]
    pub fn contains_cell(&self, cell: GridPoint<N>) -> bool {
        (0..N).all(|axis| self.lower[axis] <= cell[axis] && cell[axis] <= self.upper[axis])
    }

    /// Returns whether this box includes every cell of the other box.
    ///
    /// Every box contains itself.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let b = GridBox::from_extents([(4, 9), (4, 9), (4, 9)]);
    /// assert!(b.contains_box(b));
    /// assert!(b.contains_box(GridBox::from_extents([(5, 9), (4, 4), (6, 7)])));
    /// assert!(!b.contains_box(GridBox::from_extents([(4, 10), (4, 9), (4, 9)])));
    /// ```
    #[inline]
    pub fn contains_box(&self, other: GridBox<N>) -> bool {
        (0..N).all(|axis| {
            self.lower[axis] <= other.lower[axis] && other.upper[axis] <= self.upper[axis]
        })
    }

    /// Returns whether the two boxes share at least one cell.
    ///
    /// An axis overlaps if either bound of one box's range lies within the other box's
    /// range on that axis. Both directions are checked, because a range strictly inside
    /// the other contains neither of the other's endpoints.
    /// This relation is symmetric.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let a = GridBox::from_extents([(0, 4), (0, 4)]);
    /// assert!(a.intersects(GridBox::from_extents([(4, 8), (-3, 0)])));
    /// // Boxes which are merely adjacent have no cells in common.
    /// assert!(!a.intersects(GridBox::from_extents([(5, 8), (0, 4)])));
    /// // A cross shape: neither box has a corner inside the other.
    /// assert!(a.intersects(GridBox::from_extents([(-10, 10), (2, 2)])));
    /// ```
    #[inline]
    pub fn intersects(&self, other: GridBox<N>) -> bool {
        (0..N).all(|axis| {
            let within = |value: GridCoordinate, range: &GridBox<N>| {
                range.lower[axis] <= value && value <= range.upper[axis]
            };
            within(other.lower[axis], self)
                || within(other.upper[axis], self)
                || within(self.lower[axis], &other)
                || within(self.upper[axis], &other)
        })
    }

    /// Returns the box of cells which both `self` and `other` contain,
    /// or [`None`] if there are no such cells.
    #[inline]
    #[must_use]
    pub fn intersection(self, other: GridBox<N>) -> Option<GridBox<N>> {
        let mut lower = [0; N];
        let mut upper = [0; N];
        for axis in 0..N {
            lower[axis] = self.lower[axis].max(other.lower[axis]);
            upper[axis] = self.upper[axis].min(other.upper[axis]);
            if upper[axis] < lower[axis] {
                return None;
            }
        }
        Some(GridBox { lower, upper })
    }

    /// Clips the bounds of `other` to the bounds of `self`.
    ///
    /// On each axis, the lower bound of `other` is raised to that of `self` if `other`
    /// extends below `self` and reaches it, and the upper bound is lowered likewise.
    /// Axes on which the two boxes do not overlap at all are left unchanged, so the
    /// result lies within `self` exactly when the boxes intersect; check that with
    /// [`GridBox::contains_box()`] where it matters.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let window = GridBox::from_extents([(-50, 50), (-50, 50)]);
    /// let clipped = window.limit(GridBox::from_extents([(40, 60), (-70, 0)]));
    /// assert_eq!(clipped, GridBox::from_extents([(40, 50), (-50, 0)]));
    /// assert!(window.contains_box(clipped));
    ///
    /// let outside = window.limit(GridBox::from_extents([(40, 60), (51, 52)]));
    /// assert_eq!(outside, GridBox::from_extents([(40, 50), (51, 52)]));
    /// assert!(!window.contains_box(outside));
    /// ```
    #[inline]
    #[must_use]
    pub fn limit(&self, other: GridBox<N>) -> GridBox<N> {
        GridBox::from_extents(core::array::from_fn(|axis| {
            let (mut lower, mut upper) = (other.lower[axis], other.upper[axis]);
            if other.lower[axis] < self.lower[axis] && other.upper[axis] >= self.lower[axis] {
                lower = self.lower[axis];
            }
            if other.lower[axis] <= self.upper[axis] && other.upper[axis] > self.upper[axis] {
                upper = self.upper[axis];
            }
            (lower, upper)
        }))
    }

    /// Returns a copy of this box with the bounds on one axis replaced.
    ///
    /// Panics if `axis >= N`.
    #[inline]
    #[track_caller]
    #[must_use]
    pub fn with_axis_range(
        mut self,
        axis: usize,
        mut lower: GridCoordinate,
        mut upper: GridCoordinate,
    ) -> Self {
        sort_two(&mut lower, &mut upper);
        self.lower[axis] = lower;
        self.upper[axis] = upper;
        self
    }

    /// The fences lying along the faces of this box: on every axis, one at the lower
    /// face and one just past the upper face.
    ///
    /// Slicing any other box along all of these fences separates the part inside this box
    /// from the parts outside it.
    ///
    /// A face on the very edge of the coordinate range produces no fence, since there is
    /// nothing beyond it to separate.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let b = GridBox::from_extents([(10, 12), (-1, 1)]);
    /// let positions: Vec<(usize, i32)> =
    ///     b.fences().map(|fence| (fence.axis(), fence.position())).collect();
    /// assert_eq!(positions, [(0, 10), (0, 13), (1, -1), (1, 2)]);
    /// ```
    pub fn fences(&self) -> impl Iterator<Item = Fence> + use<N> {
        let this = *self;
        (0..N).flat_map(move |axis| {
            let lower = Fence::new(axis, this.lower[axis], FenceSide::Lower);
            let upper = this.upper[axis]
                .checked_add(1)
                .map(|position| Fence::new(axis, position, FenceSide::Upper));
            core::iter::once(lower).chain(upper)
        })
    }

    /// Iterates over every cell the box contains, varying the last axis fastest.
    ///
    /// This visits [`GridBox::volume()`] cells, so it is only suitable for small boxes.
    ///
    /// ```
    /// use gridset::math::GridBox;
    ///
    /// let b = GridBox::from_extents([(10, 11), (20, 22)]);
    /// assert_eq!(
    ///     b.cells().collect::<Vec<_>>(),
    ///     [[10, 20], [10, 21], [10, 22], [11, 20], [11, 21], [11, 22]],
    /// );
    /// ```
    #[inline]
    pub fn cells(&self) -> Cells<N> {
        Cells {
            bounds: *self,
            next: Some(self.lower),
        }
    }
}

impl<const N: usize> fmt::Debug for GridBox<N> {
    #[mutants::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("GridBox");
        for axis in 0..N {
            tuple.field(&RangeWithLength(self.axis_range(axis)));
        }
        tuple.finish()
    }
}

impl<const N: usize> From<[RangeInclusive<GridCoordinate>; N]> for GridBox<N> {
    #[inline]
    fn from(ranges: [RangeInclusive<GridCoordinate>; N]) -> Self {
        Self::from_ranges(ranges)
    }
}

/// Iterator over the cells of a [`GridBox`], returned by [`GridBox::cells()`].
#[derive(Clone, Debug)]
pub struct Cells<const N: usize> {
    bounds: GridBox<N>,
    next: Option<GridPoint<N>>,
}

impl<const N: usize> Iterator for Cells<N> {
    type Item = GridPoint<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let mut advanced = current;
        // Odometer increment: roll over trailing axes which are at their upper bound.
        self.next = None;
        for axis in (0..N).rev() {
            if advanced[axis] < self.bounds.upper[axis] {
                advanced[axis] += 1;
                self.next = Some(advanced);
                break;
            }
            advanced[axis] = self.bounds.lower[axis];
        }
        Some(current)
    }
}

impl<const N: usize> FusedIterator for Cells<N> {}

/// `Debug`-formatting helper
struct RangeWithLength(RangeInclusive<GridCoordinate>);
impl fmt::Debug for RangeWithLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = &self.0;
        if f.alternate() {
            write!(
                f,
                "{range:?} ({len})",
                len = i64::from(*range.end()) - i64::from(*range.start()) + 1
            )
        } else {
            range.fmt(f)
        }
    }
}

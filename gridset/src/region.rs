use alloc::vec::Vec;
use core::mem;

use itertools::Itertools as _;

#[cfg(feature = "auto-threads")]
use rayon::iter::{IndexedParallelIterator as _, IntoParallelRefIterator as _, ParallelIterator as _};

use crate::math::{CutOutcome, GridBox, PendingCuts, coalesce, explode_pair, reduce};
use crate::op::{Mode, Operation};


/// A set of cells in `N`-dimensional integer space, stored as a list of pairwise
/// disjoint [`GridBox`]es.
///
/// Cells are added with [`RegionSet::fill()`] and removed with
/// [`RegionSet::clear()`], in any sequence; the cost of each operation depends on the
/// number of boxes involved and never on the number of cells.
///
/// The particular boxes used to represent the set are an implementation detail, except
/// that they never overlap and each is nonempty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegionSet<const N: usize> {
    /// Pairwise disjoint.
    boxes: Vec<GridBox<N>>,
}

impl<const N: usize> RegionSet<N> {
    /// Constructs an empty set.
    pub const fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Returns the number of boxes currently used to represent the set.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns whether the set contains no cells.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// The disjoint boxes making up the set.
    pub fn boxes(&self) -> &[GridBox<N>] {
        &self.boxes
    }

    /// Iterates over the disjoint boxes making up the set.
    pub fn iter(&self) -> core::slice::Iter<'_, GridBox<N>> {
        self.boxes.iter()
    }

    /// Adds every cell of `region` to the set.
    ///
    /// Wherever the new box overlaps boxes already present, the overlapping pairs are
    /// sliced apart into disjoint fragments; cells already in the set are not counted
    /// twice.
    pub fn fill(&mut self, region: GridBox<N>) {
        log::trace!("fill {region:?}");

        // Boxes which still need to be added. Invariant: the union of `self.boxes` and
        // `pending` is the union of the original set and `region`. Every explosion
        // strictly reduces the total volume of both lists, so this terminates.
        let mut pending = vec![region];
        while let Some(candidate) = pending.pop() {
            match self.find_intersecting(candidate) {
                None => self.boxes.push(candidate),
                Some(index) => {
                    let existing = self.boxes.swap_remove(index);
                    for fragment in explode_pair(existing, candidate) {
                        // Fragments inside `existing` cannot intersect anything in the
                        // list; everything else must be checked again.
                        if existing.contains_box(fragment) {
                            self.boxes.push(fragment);
                        } else {
                            pending.push(fragment);
                        }
                    }
                }
            }
        }

        self.normalize();
    }

    /// Removes every cell of `region` from the set.
    ///
    /// Boxes lying entirely within `region` are dropped, and those partly within it are
    /// replaced with the fragments lying outside it.
    pub fn clear(&mut self, region: GridBox<N>) {
        log::trace!("clear {region:?}");

        let cut_one = |target: &GridBox<N>| -> Vec<GridBox<N>> {
            let mut cuts = PendingCuts::new(*target);
            match cuts.add_cut(region) {
                CutOutcome::Gone => Vec::new(),
                CutOutcome::Remaining if cuts.is_cut() => cuts.explode(),
                CutOutcome::Remaining => vec![*target],
            }
        };

        #[cfg(feature = "auto-threads")]
        let remaining: Vec<GridBox<N>> = self.boxes.par_iter().flat_map_iter(cut_one).collect();
        #[cfg(not(feature = "auto-threads"))]
        let remaining: Vec<GridBox<N>> = self.boxes.iter().flat_map(cut_one).collect();

        self.boxes = remaining;
        self.normalize();
    }

    /// Performs the given operation.
    ///
    /// ```
    /// use gridset::RegionSet;
    /// use gridset::op::Operation;
    ///
    /// let mut set = RegionSet::<2>::new();
    /// set.apply(&"on x=0..9,y=0..9".parse::<Operation<2>>()?);
    /// set.apply(&"off x=5..14,y=5..14".parse::<Operation<2>>()?);
    /// assert_eq!(set.volume(), Some(75));
    /// # Ok::<(), gridset::op::ParseOperationError>(())
    /// ```
    pub fn apply(&mut self, operation: &Operation<N>) {
        match operation.mode {
            Mode::Fill => self.fill(operation.region),
            Mode::Clear => self.clear(operation.region),
        }
    }

    /// Returns the total number of cells in the set, or [`None`] if it does not fit in a
    /// [`u128`].
    pub fn volume(&self) -> Option<u128> {
        self.boxes
            .iter()
            .try_fold(0u128, |sum, b| sum.checked_add(b.volume()?))
    }

    /// Returns the number of cells in the set which also lie within `clip`, or [`None`]
    /// if it does not fit in a [`u128`].
    ///
    /// ```
    /// use gridset::RegionSet;
    /// use gridset::math::GridBox;
    ///
    /// let mut set = RegionSet::new();
    /// set.fill(GridBox::from_extents([(-100, 100), (0, 0)]));
    /// set.fill(GridBox::from_extents([(0, 0), (60, 70)]));
    /// assert_eq!(
    ///     set.volume_within(GridBox::from_extents([(-50, 50), (-50, 50)])),
    ///     Some(101),
    /// );
    /// ```
    pub fn volume_within(&self, clip: GridBox<N>) -> Option<u128> {
        self.boxes
            .iter()
            .map(|b| clip.limit(*b))
            .filter(|limited| clip.contains_box(*limited))
            .try_fold(0u128, |sum, limited| sum.checked_add(limited.volume()?))
    }

    /// Drops redundant boxes and merges boxes which line up, keeping the list short.
    fn normalize(&mut self) {
        let before = self.boxes.len();
        self.boxes = coalesce(reduce(mem::take(&mut self.boxes)));
        log::debug!(
            "normalized {before} boxes into {after}",
            after = self.boxes.len()
        );
    }

    /// Index of the first box intersecting `candidate`.
    #[cfg(feature = "auto-threads")]
    fn find_intersecting(&self, candidate: GridBox<N>) -> Option<usize> {
        self.boxes
            .par_iter()
            .position_first(|b| b.intersects(candidate))
    }

    /// Index of the first box intersecting `candidate`.
    #[cfg(not(feature = "auto-threads"))]
    fn find_intersecting(&self, candidate: GridBox<N>) -> Option<usize> {
        self.boxes.iter().position(|b| b.intersects(candidate))
    }

    /// Panics if any two boxes in the set intersect.
    ///
    /// This is public for use by integration tests.
    #[doc(hidden)]
    #[track_caller]
    #[mutants::skip]
    pub fn consistency_check(&self) {
        let overlaps: Vec<(GridBox<N>, GridBox<N>)> = self
            .boxes
            .iter()
            .tuple_combinations()
            .filter(|(a, b)| a.intersects(**b))
            .map(|(a, b)| (*a, *b))
            .collect();
        assert!(
            overlaps.is_empty(),
            "RegionSet boxes overlap: {overlaps:#?}"
        );
    }
}

impl<'a, const N: usize> IntoIterator for &'a RegionSet<N> {
    type Item = &'a GridBox<N>;
    type IntoIter = core::slice::Iter<'a, GridBox<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

impl<const N: usize> Extend<Operation<N>> for RegionSet<N> {
    fn extend<I: IntoIterator<Item = Operation<N>>>(&mut self, operations: I) {
        for operation in operations {
            self.apply(&operation);
        }
    }
}

impl<const N: usize> FromIterator<Operation<N>> for RegionSet<N> {
    fn from_iter<I: IntoIterator<Item = Operation<N>>>(operations: I) -> Self {
        let mut set = Self::new();
        set.extend(operations);
        set
    }
}

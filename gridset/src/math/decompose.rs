//! Decomposition of boxes into disjoint fragments ("exploding").

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::math::{Fence, GridBox, coalesce, reduce, slice_all};

/// Result of [`PendingCuts::add_cut()`].
#[expect(clippy::exhaustive_enums)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CutOutcome {
    /// Some of the target box is still uncut.
    Remaining,
    /// The cuts cover the entire target box; exploding it would produce nothing.
    Gone,
}

/// A box together with regions to be removed from it, which have not yet been
/// applied.
///
/// Recording a cut is cheap and never fragments the box; the fragmentation
/// happens all at once in [`PendingCuts::explode()`].
///
/// ```
/// use gridset::math::{CutOutcome, GridBox, PendingCuts};
///
/// let mut cuts = PendingCuts::new(GridBox::from_extents([(0, 9), (0, 9)]));
/// assert_eq!(
///     cuts.add_cut(GridBox::from_extents([(5, 20), (-5, 20)])),
///     CutOutcome::Remaining,
/// );
/// assert_eq!(cuts.explode(), [GridBox::from_extents([(0, 4), (0, 9)])]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingCuts<const N: usize> {
    target: GridBox<N>,
    /// Cuts clipped to `target`. None of them contains another.
    cuts: Vec<GridBox<N>>,
}

impl<const N: usize> PendingCuts<N> {
    /// Starts recording cuts against `target`.
    #[inline]
    pub const fn new(target: GridBox<N>) -> Self {
        Self {
            target,
            cuts: Vec::new(),
        }
    }

    /// The box that cuts are being recorded against.
    #[inline]
    pub fn target(&self) -> GridBox<N> {
        self.target
    }

    /// The cuts recorded so far, each clipped to [`PendingCuts::target()`].
    #[inline]
    pub fn cuts(&self) -> &[GridBox<N>] {
        &self.cuts
    }

    /// Returns whether any cut has been recorded.
    #[inline]
    pub fn is_cut(&self) -> bool {
        !self.cuts.is_empty()
    }

    /// Records that the cells of `cut` are to be removed from the target box.
    ///
    /// Cuts which do not intersect the target are ignored. Others are clipped to the
    /// target first. If the clipped cut is the entire target, the recorded cuts are
    /// replaced by that single cut and [`CutOutcome::Gone`] is returned, as it is for
    /// every later call.
    pub fn add_cut(&mut self, cut: GridBox<N>) -> CutOutcome {
        if self.is_gone() {
            return CutOutcome::Gone;
        }
        if !self.target.intersects(cut) {
            return CutOutcome::Remaining;
        }

        let cut = self.target.limit(cut);
        if cut == self.target {
            self.cuts.clear();
            self.cuts.push(cut);
            return CutOutcome::Gone;
        }

        if self.cuts.iter().any(|existing| existing.contains_box(cut)) {
            return CutOutcome::Remaining;
        }
        self.cuts.retain(|existing| !cut.contains_box(*existing));
        self.cuts.push(cut);
        CutOutcome::Remaining
    }

    fn is_gone(&self) -> bool {
        matches!(self.cuts.as_slice(), [only] if *only == self.target)
    }

    /// Applies the recorded cuts, returning disjoint boxes which together cover exactly
    /// the cells of the target that no cut covers.
    #[must_use]
    pub fn explode(self) -> Vec<GridBox<N>> {
        explode_cuts(self.target, &self.cuts)
    }
}

/// Removes the cells of every box in `cuts` from `target`, returning disjoint boxes
/// which together cover exactly the cells that remain.
///
/// The target is sliced along every face of every cut; each fragment then lies either
/// entirely inside or entirely outside each cut, and those inside one are discarded.
/// The survivors are [`coalesce`]d. With no cuts, the result is `[target]`.
///
/// ```
/// use gridset::math::{GridBox, explode_cuts};
///
/// let target = GridBox::from_extents([(0, 9), (0, 9), (0, 9)]);
/// let fragments = explode_cuts(target, &[GridBox::from_extents([(3, 5), (3, 5), (3, 5)])]);
/// let volume: u128 = fragments.iter().map(|b| b.volume().unwrap()).sum();
/// assert_eq!(volume, 1000 - 27);
///
/// assert_eq!(explode_cuts(target, &[]), [target]);
/// ```
#[must_use]
pub fn explode_cuts<const N: usize>(target: GridBox<N>, cuts: &[GridBox<N>]) -> Vec<GridBox<N>> {
    if cuts.is_empty() {
        return vec![target];
    }

    let fences: BTreeSet<Fence> = cuts.iter().flat_map(GridBox::fences).collect();
    let mut fragments = slice_all(vec![target], fences);
    fragments.retain(|fragment| !cuts.iter().any(|cut| cut.contains_box(*fragment)));
    coalesce(fragments)
}

/// Decomposes two boxes into disjoint fragments which together cover exactly the
/// cells of either box.
///
/// * If the boxes are equal, returns a single copy.
/// * If they do not intersect, returns an empty list, meaning there is nothing to
///   resolve and the caller should keep both originals.
/// * Otherwise both are sliced along the faces of both, and the fragments are
///   [`reduce`]d to drop the duplicates the overlap produces, then [`coalesce`]d.
///
/// ```
/// use gridset::math::{GridBox, explode_pair};
///
/// let a = GridBox::from_extents([(10, 12), (10, 12), (10, 12)]);
/// let b = GridBox::from_extents([(11, 13), (11, 13), (11, 13)]);
/// let fragments = explode_pair(a, b);
/// let volume: u128 = fragments.iter().map(|f| f.volume().unwrap()).sum();
/// assert_eq!(volume, 27 + 27 - 8);
///
/// assert_eq!(explode_pair(a, a), [a]);
/// assert!(explode_pair(a, GridBox::from_extents([(0, 1), (0, 1), (0, 1)])).is_empty());
/// ```
#[must_use]
pub fn explode_pair<const N: usize>(a: GridBox<N>, b: GridBox<N>) -> Vec<GridBox<N>> {
    if a == b {
        return vec![a];
    }
    if !a.intersects(b) {
        return Vec::new();
    }

    let fences: BTreeSet<Fence> = a.fences().chain(b.fences()).collect();
    coalesce(reduce(slice_all(vec![a, b], fences)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn b2(x: (i32, i32), y: (i32, i32)) -> GridBox<2> {
        GridBox::from_extents([x, y])
    }

    fn total(boxes: &[GridBox<2>]) -> u128 {
        boxes.iter().map(|b| b.volume().unwrap()).sum()
    }

    fn assert_disjoint(boxes: &[GridBox<2>]) {
        for (i, a) in boxes.iter().enumerate() {
            for b in &boxes[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} and {b:?} overlap");
            }
        }
    }

    #[test]
    fn cut_covering_target_makes_it_gone() {
        let target = b2((0, 4), (0, 4));
        let mut cuts = PendingCuts::new(target);
        assert_eq!(cuts.add_cut(b2((1, 1), (1, 1))), CutOutcome::Remaining);
        assert_eq!(cuts.add_cut(b2((-10, 10), (-10, 10))), CutOutcome::Gone);
        assert_eq!(cuts.cuts(), [target]);
        assert_eq!(cuts.add_cut(b2((1, 1), (1, 1))), CutOutcome::Gone);
        assert!(cuts.explode().is_empty());
    }

    #[test]
    fn cut_elsewhere_is_ignored() {
        let target = b2((0, 4), (0, 4));
        let mut cuts = PendingCuts::new(target);
        assert_eq!(cuts.add_cut(b2((5, 9), (0, 4))), CutOutcome::Remaining);
        assert!(!cuts.is_cut());
        assert_eq!(cuts.explode(), [target]);
    }

    #[test]
    fn subsumed_cuts_are_not_kept() {
        let mut cuts = PendingCuts::new(b2((0, 9), (0, 9)));
        cuts.add_cut(b2((2, 3), (2, 3)));
        cuts.add_cut(b2((6, 7), (6, 7)));
        cuts.add_cut(b2((2, 2), (3, 3)));
        assert_eq!(cuts.cuts(), [b2((2, 3), (2, 3)), b2((6, 7), (6, 7))]);
        cuts.add_cut(b2((1, 8), (1, 8)));
        assert_eq!(cuts.cuts(), [b2((1, 8), (1, 8))]);
        assert_eq!(total(&cuts.explode()), 100 - 64);
    }

    #[test]
    fn explode_with_overlapping_cuts() {
        let target = b2((0, 9), (0, 9));
        let fragments = explode_cuts(target, &[b2((0, 5), (0, 5)), b2((3, 9), (3, 9))]);
        assert_disjoint(&fragments);
        // 100 - 36 - 49 + 9
        assert_eq!(total(&fragments), 24);
        for fragment in &fragments {
            assert!(target.contains_box(*fragment));
            assert!(!fragment.intersects(b2((0, 5), (0, 5))));
            assert!(!fragment.intersects(b2((3, 9), (3, 9))));
        }
    }

    #[test]
    fn explode_pair_covers_union() {
        let a = b2((0, 5), (0, 5));
        let b = b2((3, 9), (-2, 2));
        let fragments = explode_pair(a, b);
        assert_disjoint(&fragments);
        assert_eq!(total(&fragments), 36 + 35 - 9);
        for x in -3..=10 {
            for y in -3..=10 {
                let expected = a.contains_cell([x, y]) || b.contains_cell([x, y]);
                let count = fragments.iter().filter(|f| f.contains_cell([x, y])).count();
                assert_eq!(count, usize::from(expected), "cell {x}, {y}");
            }
        }
    }

    #[test]
    fn explode_pair_of_nested_boxes_is_the_outer() {
        let outer = b2((0, 9), (0, 9));
        let inner = b2((2, 3), (4, 5));
        assert_eq!(explode_pair(outer, inner), [outer]);
        assert_eq!(explode_pair(inner, outer), [outer]);
    }

    #[test]
    fn explode_pair_of_adjacent_boxes_is_empty() {
        assert!(explode_pair(b2((0, 4), (0, 4)), b2((5, 9), (0, 4))).is_empty());
    }
}

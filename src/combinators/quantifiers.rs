//! Universal quantification and pairing, built on the existential engine

use crate::error::Result;
use crate::search::engine::{settle, Search};
use crate::sequence::{Bit, BitView, StridedView};

/// Invert a predicate's definite results, passing undetermined through
pub fn negate<P>(predicate: P) -> impl Fn(&dyn BitView) -> Option<Bit>
where
    P: Fn(&dyn BitView) -> Option<Bit>,
{
    move |seq: &dyn BitView| predicate(seq).map(|value| !value)
}

/// Turn a predicate on two sequences into one on their interleaving
///
/// Even positions of the combined sequence form the first argument, odd
/// positions the second.
pub fn paired<P>(predicate: P) -> impl Fn(&dyn BitView) -> Option<Bit>
where
    P: Fn(&dyn BitView, &dyn BitView) -> Option<Bit>,
{
    move |product: &dyn BitView| {
        let a = StridedView::new(product, 2, 0);
        let b = StridedView::new(product, 2, 1);
        predicate(&a, &b)
    }
}

impl Search {
    /// Is `predicate` true for every sequence?
    pub fn try_for_all<P>(&mut self, predicate: P) -> Result<Bit>
    where
        P: Fn(&dyn BitView) -> Option<Bit>,
    {
        Ok(!self.try_exists(negate(predicate))?)
    }

    /// Is `predicate` true for every pair of sequences?
    pub fn try_for_all2<P>(&mut self, predicate: P) -> Result<Bit>
    where
        P: Fn(&dyn BitView, &dyn BitView) -> Option<Bit>,
    {
        self.try_for_all(paired(predicate))
    }

    /// Is `predicate` true for some pair of sequences?
    pub fn try_exists2<P>(&mut self, predicate: P) -> Result<Bit>
    where
        P: Fn(&dyn BitView, &dyn BitView) -> Option<Bit>,
    {
        self.try_exists(paired(predicate))
    }
}

/// Returns true iff `predicate` holds for every sequence
pub fn for_all<P>(predicate: P) -> Bit
where
    P: Fn(&dyn BitView) -> Option<Bit>,
{
    settle(Search::default().try_for_all(predicate))
}

/// Returns true iff `predicate` holds for every pair of sequences
pub fn for_all2<P>(predicate: P) -> Bit
where
    P: Fn(&dyn BitView, &dyn BitView) -> Option<Bit>,
{
    settle(Search::default().try_for_all2(predicate))
}

/// Returns true iff `predicate` holds for some pair of sequences
pub fn exists2<P>(predicate: P) -> Bit
where
    P: Fn(&dyn BitView, &dyn BitView) -> Option<Bit>,
{
    settle(Search::default().try_exists2(predicate))
}

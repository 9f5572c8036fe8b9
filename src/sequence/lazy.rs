//! The search engine's view of a partially pinned sequence

use crate::sequence::{Bit, BitView, IndexSet, Natural};
use std::cell::RefCell;

/// A finite assignment over the pinned positions of an infinite sequence
///
/// `values[k]` is the bit at `pinned[k]`. Any other read returns the
/// sentinel and is recorded in the requested set, which the engine takes
/// back with [`LazyView::into_requested`] to grow the present set for the
/// next round.
#[derive(Debug)]
pub struct LazyView<'a> {
    pinned: &'a [Natural],
    values: &'a [Bit],
    requested: RefCell<IndexSet>,
}

impl<'a> LazyView<'a> {
    /// `pinned` must be ascending, with one entry of `values` per position
    pub fn new(pinned: &'a [Natural], values: &'a [Bit]) -> Self {
        debug_assert_eq!(pinned.len(), values.len());
        debug_assert!(pinned.windows(2).all(|w| w[0] < w[1]));
        Self {
            pinned,
            values,
            requested: RefCell::new(IndexSet::new()),
        }
    }

    /// Positions read so far that were not pinned
    pub fn requested(&self) -> IndexSet {
        self.requested.borrow().clone()
    }

    pub fn into_requested(self) -> IndexSet {
        self.requested.into_inner()
    }
}

impl BitView for LazyView<'_> {
    fn get(&self, position: Natural) -> Option<Bit> {
        match self.pinned.binary_search(&position) {
            Ok(slot) => Some(self.values[slot]),
            Err(_) => {
                self.requested.borrow_mut().insert(position);
                None
            }
        }
    }
}

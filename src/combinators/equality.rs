//! Extensional equality of functions on Cantor space

use crate::error::Result;
use crate::search::engine::{settle, Search};
use crate::sequence::{Bit, BitView, Natural};

/// Do `a` and `b` agree on positions `0..n`?
///
/// Undetermined as soon as either view is undetermined at a compared
/// position; stops at the first mismatch.
pub fn prefix_agree(n: Natural, a: &dyn BitView, b: &dyn BitView) -> Option<Bit> {
    for i in 0..n {
        let ai = a.get(i)?;
        let bi = b.get(i)?;
        if ai != bi {
            return Some(false);
        }
    }

    Some(true)
}

impl Search {
    /// Do `f_a` and `f_b` give the same result on every sequence?
    pub fn try_equal<T, FA, FB>(&mut self, f_a: FA, f_b: FB) -> Result<Bit>
    where
        T: PartialEq,
        FA: Fn(&dyn BitView) -> Option<T>,
        FB: Fn(&dyn BitView) -> Option<T>,
    {
        self.try_for_all(|seq: &dyn BitView| {
            let a = f_a(seq)?;
            let b = f_b(seq)?;
            Some(a == b)
        })
    }
}

/// Returns true iff `f_a` and `f_b` agree on every sequence
pub fn equal<T, FA, FB>(f_a: FA, f_b: FB) -> Bit
where
    T: PartialEq,
    FA: Fn(&dyn BitView) -> Option<T>,
    FB: Fn(&dyn BitView) -> Option<T>,
{
    settle(Search::default().try_equal(f_a, f_b))
}

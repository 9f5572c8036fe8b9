//! Modulus of continuity
//!
//! The modulus of a prefix-determined function is the least `n` such that
//! any two sequences agreeing on positions `0..n` get the same result. It is
//! found by testing `n = 0, 1, 2, ...` with a universal search over pairs.

use crate::combinators::equality::prefix_agree;
use crate::combinators::quantifiers::for_all2;
use crate::error::{Result, SearchError};
use crate::search::engine::Search;
use crate::sequence::{Bit, BitView, Natural};
use tracing::{debug, info};

/// Least natural satisfying `predicate`; loops forever if there is none
pub fn least<P>(mut predicate: P) -> Natural
where
    P: FnMut(Natural) -> bool,
{
    let mut n = 0;
    while !predicate(n) {
        n += 1;
    }
    n
}

/// Least natural up to `limit` satisfying a fallible `predicate`
pub fn try_least<P>(limit: Option<Natural>, mut predicate: P) -> Result<Natural>
where
    P: FnMut(Natural) -> Result<bool>,
{
    let mut n = 0;
    loop {
        if predicate(n)? {
            return Ok(n);
        }
        if let Some(limit) = limit {
            if n >= limit {
                return Err(SearchError::ModulusLimit { limit });
            }
        }
        n += 1;
    }
}

/// The pair predicate "agree on `0..n` implies same result"
fn continuity_at<'f, T, F>(
    n: Natural,
    f: &'f F,
) -> impl Fn(&dyn BitView, &dyn BitView) -> Option<Bit> + 'f
where
    T: PartialEq,
    F: Fn(&dyn BitView) -> Option<T>,
{
    move |a: &dyn BitView, b: &dyn BitView| {
        if !prefix_agree(n, a, b)? {
            return Some(true);
        }

        let fa = f(a)?;
        let fb = f(b)?;
        Some(fa == fb)
    }
}

impl Search {
    /// Does agreement on positions `0..n` determine the result of `f`?
    pub fn try_is_modulus<T, F>(&mut self, n: Natural, f: &F) -> Result<Bit>
    where
        T: PartialEq,
        F: Fn(&dyn BitView) -> Option<T>,
    {
        let holds = self.try_for_all2(continuity_at(n, f))?;
        debug!(n, holds, "tested modulus candidate");
        Ok(holds)
    }

    /// Least modulus of continuity of `f`, up to `max_modulus` if configured
    pub fn try_modulus<T, F>(&mut self, f: F) -> Result<Natural>
    where
        T: PartialEq,
        F: Fn(&dyn BitView) -> Option<T>,
    {
        let limit = self.config().max_modulus;
        let modulus = try_least(limit, |n| self.try_is_modulus(n, &f))?;
        info!(modulus, "modulus of continuity found");
        Ok(modulus)
    }
}

/// Does agreement on positions `0..n` determine the result of `f`?
pub fn is_modulus<T, F>(n: Natural, f: &F) -> Bit
where
    T: PartialEq,
    F: Fn(&dyn BitView) -> Option<T>,
{
    for_all2(continuity_at(n, f))
}

/// Least modulus of continuity of `f`
///
/// Does not return if `f` is not prefix-determined.
pub fn modulus<T, F>(f: F) -> Natural
where
    T: PartialEq,
    F: Fn(&dyn BitView) -> Option<T>,
{
    let modulus = least(|n| is_modulus(n, &f));
    info!(modulus, "modulus of continuity found");
    modulus
}

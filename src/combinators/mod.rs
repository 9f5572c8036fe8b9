//! Quantifiers and function comparisons built on the existential engine
//!
//! Nothing here enumerates assignments itself. Each operation wraps the
//! caller's predicate and hands it to [`Search::try_exists`]:
//! - [`for_all`]: `!exists(negate(p))`
//! - [`for_all2`]: `for_all` over the interleaving of two sequences
//! - [`equal`]: `for_all(|s| f(s) == g(s))`
//! - [`modulus`]: least `n` with `for_all2(agree on 0..n => f(a) == f(b))`
//!
//! [`Search::try_exists`]: crate::search::Search::try_exists

pub mod equality;
pub mod modulus;
pub mod quantifiers;

pub use equality::{equal, prefix_agree};
pub use modulus::{is_modulus, least, modulus, try_least};
pub use quantifiers::{exists2, for_all, for_all2, negate, paired};

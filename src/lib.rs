//! Exhaustive search over Cantor space
//!
//! Decides, for a predicate on infinite bit sequences, whether some sequence
//! satisfies it. The predicate only ever sees a [`BitView`]; reads that the
//! engine has not pinned yet return `None`, which the predicate propagates
//! with `?`. The engine pins whatever positions were asked for and tries
//! again, so it discovers the finite set of positions a prefix-determined
//! predicate depends on and enumerates every assignment to it.
//!
//! ```ignore
//! use cantor_search::{equal, exists, modulus, BitView};
//!
//! fn f(seq: &dyn BitView) -> Option<bool> {
//!     let t0 = seq.get(4)?;
//!     let t1 = seq.get(if t0 { 7 } else { 0 })?;
//!     Some(t0 || (t1 && seq.get(7)?))
//! }
//!
//! assert!(exists(f));
//! assert!(equal(f, f));
//! assert_eq!(modulus(f), 8);
//! ```
//!
//! Only one search may be active per thread: starting a search from inside
//! a predicate aborts the process.

pub mod combinators;
pub mod error;
pub mod samples;
pub mod search;
pub mod sequence;
pub mod validation;

pub use combinators::{
    equal, exists2, for_all, for_all2, is_modulus, least, modulus, negate, prefix_agree,
};
pub use error::{Result, SearchError};
pub use search::{exists, find, Search, SearchConfig, SearchOutcome, SearchStatistics};
pub use sequence::{Bit, BitView, IndexSet, LazyView, MaterializedView, Natural, StridedView};

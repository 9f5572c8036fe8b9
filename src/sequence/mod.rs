//! Infinite bit sequences as seen by predicates
//!
//! A predicate never holds an infinite sequence. It holds a [`BitView`] and
//! asks it for individual positions; a view answers with a definite bit or
//! with `None`, the undetermined sentinel. Predicates propagate `None` with
//! the `?` operator, so a single undetermined read makes the whole
//! computation undetermined.
//!
//! The set of views is closed:
//! - [`LazyView`]: the search engine's view over its working buffer
//! - [`StridedView`]: one of several interleaved sub-sequences of another view
//! - [`MaterializedView`]: a finite, fully decided witness

pub mod index_set;
pub mod lazy;
pub mod materialized;
pub mod strided;

pub use index_set::IndexSet;
pub use lazy::LazyView;
pub use materialized::MaterializedView;
pub use strided::StridedView;

/// A single bit of a sequence
pub type Bit = bool;

/// A position in a sequence (and the result type of `modulus`)
pub type Natural = u64;

/// Read access to a conceptually infinite bit sequence
pub trait BitView {
    /// Read the bit at `position`, or `None` if it is not decided yet
    fn get(&self, position: Natural) -> Option<Bit>;
}

impl<V: BitView + ?Sized> BitView for &V {
    fn get(&self, position: Natural) -> Option<Bit> {
        (**self).get(position)
    }
}

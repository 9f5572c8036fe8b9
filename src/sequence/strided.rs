//! Interleaved sub-sequences

use crate::sequence::{Bit, BitView, Natural};

/// Maps position `i` to `i * stride + offset` in the source view
///
/// `stride` views with offsets `0..stride` split one sequence into that many
/// independent sequences.
#[derive(Clone, Copy)]
pub struct StridedView<'a> {
    source: &'a dyn BitView,
    stride: Natural,
    offset: Natural,
}

impl<'a> StridedView<'a> {
    pub fn new(source: &'a dyn BitView, stride: Natural, offset: Natural) -> Self {
        debug_assert!(stride > 0);
        debug_assert!(offset < stride);
        Self {
            source,
            stride,
            offset,
        }
    }

    /// Split `source` into `stride` interleaved views
    pub fn split(source: &'a dyn BitView, stride: Natural) -> Vec<StridedView<'a>> {
        (0..stride)
            .map(|offset| StridedView::new(source, stride, offset))
            .collect()
    }

    pub fn stride(&self) -> Natural {
        self.stride
    }

    pub fn offset(&self) -> Natural {
        self.offset
    }
}

impl BitView for StridedView<'_> {
    /// # Panics
    ///
    /// Panics if `position * stride + offset` does not fit in a [`Natural`].
    /// With stride 2 the largest readable position is `u64::MAX / 2`.
    fn get(&self, position: Natural) -> Option<Bit> {
        let target = position
            .checked_mul(self.stride)
            .and_then(|scaled| scaled.checked_add(self.offset));
        match target {
            Some(target) => self.source.get(target),
            None => panic!(
                "strided position {} out of range (stride {}, offset {})",
                position, self.stride, self.offset
            ),
        }
    }
}

impl std::fmt::Debug for StridedView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedView")
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

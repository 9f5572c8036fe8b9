//! One active search per thread
//!
//! An undetermined result only means "read outside the present set" relative
//! to the innermost search. A predicate that starts its own search could see
//! the sentinel come from the outer search's view and misread it, so nesting
//! is a fatal programming error rather than a recoverable one.

use std::cell::Cell;
use std::marker::PhantomData;
use tracing::error;

thread_local! {
    static SEARCH_ACTIVE: Cell<bool> = const { Cell::new(false) };
}

/// Proof that the current thread owns its only active search
///
/// Released on drop, including while unwinding.
#[derive(Debug)]
pub struct SearchToken {
    // Tied to the thread that set the flag
    _not_send: PhantomData<*const ()>,
}

impl SearchToken {
    /// Acquire the token, aborting the process if a search is already active
    pub fn acquire() -> Self {
        match Self::try_acquire() {
            Some(token) => token,
            None => {
                error!("search started while another search is active on this thread");
                eprintln!("Multiple active searches on the same thread!");
                std::process::abort();
            }
        }
    }

    fn try_acquire() -> Option<Self> {
        if SEARCH_ACTIVE.with(|active| active.replace(true)) {
            return None;
        }
        Some(Self {
            _not_send: PhantomData,
        })
    }

    /// Whether a search is running on the current thread
    pub fn is_held() -> bool {
        SEARCH_ACTIVE.with(|active| active.get())
    }
}

impl Drop for SearchToken {
    fn drop(&mut self) {
        SEARCH_ACTIVE.with(|active| active.set(false));
    }
}

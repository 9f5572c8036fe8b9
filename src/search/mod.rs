//! The existential search engine
//!
//! - `engine`: adaptive enumeration over a growing set of pinned positions
//! - `config`: trial schedule and optional limits
//! - `result`: outcomes and statistics
//! - `guard`: the one-search-per-thread token

pub mod config;
pub mod engine;
pub mod guard;
pub mod result;

pub use config::{SearchConfig, TrialSchedule};
pub use engine::{exists, find, Search};
pub use guard::SearchToken;
pub use result::{SearchOutcome, SearchStatistics};

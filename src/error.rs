use crate::sequence::Natural;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search gave up after {rounds} rounds without settling")]
    RoundLimit { rounds: u64 },
    #[error("no modulus of continuity found up to {limit}")]
    ModulusLimit { limit: Natural },
    #[error(
        "predicate was undetermined in round {round} without reading an unpinned position"
    )]
    Stalled { round: u64 },
    #[error("unknown function: '{0}'")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;

//! Validation utilities for fast falsification

pub mod random;

pub use random::{
    edge_case_sequences, find_continuity_violation, find_disagreement, random_sequence,
    SamplingConfig,
};

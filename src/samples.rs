//! Sample predicates for the command line and tests

use crate::error::{Result, SearchError};
use crate::sequence::{Bit, BitView};

/// A named predicate on one sequence
pub type SampleFn = fn(&dyn BitView) -> Option<Bit>;

/// Names accepted by [`by_name`]
pub const SAMPLE_NAMES: &[&str] = &["f", "g", "true", "false", "first", "majority", "parity"];

/// Reads 4, then 0 or 7 depending on it, then 7
pub fn func_f(seq: &dyn BitView) -> Option<Bit> {
    let t0 = seq.get(4)?;
    let t1 = seq.get(u64::from(t0) * 7)?;
    let t2 = seq.get(7)?;
    Some(u64::from(t0) * 7 + u64::from(t1) * u64::from(t2) != 0)
}

/// Reads 4 and 7, then one of 0, 1, 11 or 12 depending on them
pub fn func_g(seq: &dyn BitView) -> Option<Bit> {
    let t0 = seq.get(4)?;
    let t1 = seq.get(7)?;
    let t2 = seq.get(u64::from(t0) + 11 * u64::from(t1))?;
    Some(t2 && t0)
}

pub fn constant_true(_: &dyn BitView) -> Option<Bit> {
    Some(true)
}

pub fn constant_false(_: &dyn BitView) -> Option<Bit> {
    Some(false)
}

pub fn first_bit(seq: &dyn BitView) -> Option<Bit> {
    seq.get(0)
}

/// Majority of positions 0, 1 and 2
pub fn majority3(seq: &dyn BitView) -> Option<Bit> {
    let ones = (0..3).try_fold(0u8, |acc, i| Some(acc + u8::from(seq.get(i)?)))?;
    Some(ones >= 2)
}

/// Parity of positions 0 through 3
pub fn parity4(seq: &dyn BitView) -> Option<Bit> {
    (0..4).try_fold(false, |acc, i| Some(acc ^ seq.get(i)?))
}

/// Look up a sample predicate by name (case-insensitive)
pub fn by_name(name: &str) -> Result<SampleFn> {
    match name.to_lowercase().as_str() {
        "f" => Ok(func_f),
        "g" => Ok(func_g),
        "true" => Ok(constant_true),
        "false" => Ok(constant_false),
        "first" => Ok(first_bit),
        "majority" => Ok(majority3),
        "parity" => Ok(parity4),
        _ => Err(SearchError::UnknownFunction(name.to_string())),
    }
}

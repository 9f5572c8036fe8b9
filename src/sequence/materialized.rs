//! Fully decided sequences

use crate::sequence::{Bit, BitView, Natural};

/// A finite assignment of bits, `false` at every other position
///
/// Returned as the witness of a successful search, and used by random
/// validation as a concrete input. Positions are stored explicitly, so a
/// witness that pins a far position stays small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MaterializedView {
    // Ascending, one value per position
    positions: Vec<Natural>,
    values: Vec<Bit>,
}

/// Witnesses whose last pinned position is below this print bit by bit
const DENSE_DISPLAY_LIMIT: Natural = 64;

impl MaterializedView {
    /// A prefix starting at position 0
    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self {
            positions: (0..bits.len() as Natural).collect(),
            values: bits,
        }
    }

    /// Pair ascending `positions` with their `values`
    pub fn from_assignment(positions: Vec<Natural>, values: Vec<Bit>) -> Self {
        debug_assert_eq!(positions.len(), values.len());
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self { positions, values }
    }

    /// Parse a string of `0`/`1` characters; whitespace is ignored
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self::from_bits)
    }

    /// Number of explicitly assigned positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Natural] {
        &self.positions
    }

    /// Positions assigned `true`
    pub fn ones(&self) -> impl Iterator<Item = Natural> + '_ {
        self.positions
            .iter()
            .zip(&self.values)
            .filter(|(_, &value)| value)
            .map(|(&position, _)| position)
    }

    /// The first `n` bits, including padding
    pub fn prefix(&self, n: usize) -> Vec<Bit> {
        (0..n as Natural).map(|i| self.bit(i)).collect()
    }

    /// Read a bit; never undetermined
    pub fn bit(&self, position: Natural) -> Bit {
        self.positions
            .binary_search(&position)
            .is_ok_and(|slot| self.values[slot])
    }
}

impl BitView for MaterializedView {
    fn get(&self, position: Natural) -> Option<Bit> {
        Some(self.bit(position))
    }
}

impl std::fmt::Display for MaterializedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.positions.last() {
            Some(&last) if last >= DENSE_DISPLAY_LIMIT => {
                let ones: Vec<String> = self.ones().map(|p| p.to_string()).collect();
                write!(f, "1 at {{{}}}, 0 elsewhere", ones.join(", "))
            }
            last => {
                let end = last.map_or(0, |&last| last + 1);
                for position in 0..end {
                    write!(f, "{}", if self.bit(position) { '1' } else { '0' })?;
                }
                write!(f, "000...")
            }
        }
    }
}

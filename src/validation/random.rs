//! Random sequence generation for fast falsification
//!
//! Sampling can only refute: a disagreement found here is a real
//! counter-example, but finding none proves nothing. The exhaustive search
//! still decides every answer.

use crate::sequence::{BitView, MaterializedView, Natural};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for random sequence sampling
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Number of random sequences (or pairs) to try
    pub samples: usize,
    /// Length of each random prefix; later positions read as false
    pub prefix_len: usize,
    /// Seed for the random number generator (None = random seed)
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            samples: 256,
            prefix_len: 64,
            seed: None,
        }
    }
}

impl SamplingConfig {
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// A random prefix of `len` bits
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> MaterializedView {
    MaterializedView::from_bits((0..len).map(|_| rng.random::<bool>()).collect())
}

/// Fixed sequences worth trying before random ones
pub fn edge_case_sequences(len: usize) -> Vec<MaterializedView> {
    vec![
        MaterializedView::from_bits(vec![false; len]),
        MaterializedView::from_bits(vec![true; len]),
        MaterializedView::from_bits((0..len).map(|i| i % 2 == 0).collect()),
        MaterializedView::from_bits((0..len).map(|i| i % 2 == 1).collect()),
    ]
}

/// Look for a sequence on which `f_a` and `f_b` give different results
pub fn find_disagreement<T, FA, FB>(
    f_a: FA,
    f_b: FB,
    config: &SamplingConfig,
) -> Option<MaterializedView>
where
    T: PartialEq,
    FA: Fn(&dyn BitView) -> Option<T>,
    FB: Fn(&dyn BitView) -> Option<T>,
{
    let mut rng = config.rng();
    let disagree = |seq: &MaterializedView| match (f_a(seq), f_b(seq)) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    };

    if let Some(seq) = edge_case_sequences(config.prefix_len)
        .into_iter()
        .find(|seq| disagree(seq))
    {
        return Some(seq);
    }

    (0..config.samples)
        .map(|_| random_sequence(&mut rng, config.prefix_len))
        .find(|seq| disagree(seq))
}

/// Look for two sequences that agree on `0..n` but not under `f`
///
/// A result shows that `n` is smaller than the modulus of `f`.
pub fn find_continuity_violation<T, F>(
    f: F,
    n: Natural,
    config: &SamplingConfig,
) -> Option<(MaterializedView, MaterializedView)>
where
    T: PartialEq,
    F: Fn(&dyn BitView) -> Option<T>,
{
    let mut rng = config.rng();
    let shared = (n as usize).min(config.prefix_len);

    for _ in 0..config.samples {
        let a = random_sequence(&mut rng, config.prefix_len);
        let mut bits = a.prefix(shared);
        bits.extend((shared..config.prefix_len).map(|_| rng.random::<bool>()));
        let b = MaterializedView::from_bits(bits);

        if let (Some(fa), Some(fb)) = (f(&a), f(&b)) {
            if fa != fb {
                return Some((a, b));
            }
        }
    }

    None
}

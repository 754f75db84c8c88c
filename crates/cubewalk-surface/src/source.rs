//! Injectable uniform draws.

use rand::Rng;

/// A source of uniform draws in `[0, 1)`.
///
/// Every [`rand::Rng`] is a source, so a seeded generator such as
/// `rand_chacha::ChaCha8Rng` gives reproducible walks.
pub trait UniformSource {
    /// Next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len` computed as `floor(u * len)`.
    ///
    /// `len` must be nonzero.
    fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty set");
        let i = (self.next_unit() * len as f64).floor() as usize;
        i.min(len.saturating_sub(1))
    }
}

impl<R: Rng> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of draws, starting over when it runs out.
///
/// Useful for pinning a walk to an exact start point and heading.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Draws outside `[0, 1)` are clamped into it. An empty list always
    /// yields `0.0`.
    pub fn new(draws: Vec<f64>) -> Self {
        let draws = draws
            .into_iter()
            .map(|u| u.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let u = if self.draws.is_empty() {
            0.0
        } else {
            self.draws[self.cursor % self.draws.len()]
        };
        self.cursor += 1;
        u
    }
}

//! Uniform random sources and the Fisher–Yates shuffle.

use rand::{Rng, RngCore};

/// A source of uniform floats in `[0, 1)`.
///
/// Every `rand` generator is a source; tests substitute a [`ScriptedSource`]
/// to make shuffles and orientation draws reproducible.
pub trait RandomSource {
    /// Next uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, upper]`.
    fn index_up_to(&mut self, upper: usize) -> usize {
        let scaled = (self.next_f64() * (upper + 1) as f64).floor() as usize;
        scaled.min(upper)
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.next_f64() < 0.5
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed cycle of values.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source cycling through `values`, each clamped into `[0, 1)`.
    ///
    /// An empty list yields `0.0` forever.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

/// Return a uniformly shuffled copy of `items`.
///
/// Fisher–Yates on a copy: walk from the last index down to 1, swapping each
/// element with a uniformly chosen one at or below it. The input is left
/// untouched.
pub fn shuffle<T: Clone, S: RandomSource + ?Sized>(items: &[T], source: &mut S) -> Vec<T> {
    let mut copy = items.to_vec();
    for i in (1..copy.len()).rev() {
        let j = source.index_up_to(i);
        copy.swap(i, j);
    }
    copy
}

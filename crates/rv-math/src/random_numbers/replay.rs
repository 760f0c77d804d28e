//! Deterministic replay source.

use rv_core::{ensure, Real, Result};

use super::{exponential_by_inversion, UniformRng};

/// Replays a fixed sequence of uniform draws, cycling back to the start when
/// it runs out, and counts how many draws were consumed.
///
/// Useful to reproduce a sampler's behaviour at a chosen edge input. Values
/// 0 and 1 are accepted so that the zero-draw guards can be exercised.
#[derive(Debug, Clone)]
pub struct ReplayUniform {
    draws: Vec<Real>,
    position: usize,
    consumed: u64,
    exponential: Option<Real>,
}

impl ReplayUniform {
    /// Create a replay source. `draws` must be non-empty and lie in `[0, 1]`.
    pub fn new(draws: impl Into<Vec<Real>>) -> Result<Self> {
        let draws = draws.into();
        ensure!(!draws.is_empty(), "replay sequence must not be empty");
        ensure!(
            draws.iter().all(|u| (0.0..=1.0).contains(u)),
            "replay draws must lie in [0, 1], got {draws:?}"
        );
        Ok(Self {
            draws,
            position: 0,
            consumed: 0,
            exponential: None,
        })
    }

    /// Make every `exponential_draw` return `value` without consuming a
    /// uniform.
    pub fn with_exponential(mut self, value: Real) -> Self {
        self.exponential = Some(value);
        self
    }

    /// Number of uniform draws handed out so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

impl UniformRng for ReplayUniform {
    fn next_uniform(&mut self) -> Real {
        let u = self.draws[self.position];
        self.position = (self.position + 1) % self.draws.len();
        self.consumed += 1;
        u
    }

    fn exponential_draw(&mut self) -> Real {
        match self.exponential {
            Some(value) => value,
            None => exponential_by_inversion(self.next_uniform()),
        }
    }
}

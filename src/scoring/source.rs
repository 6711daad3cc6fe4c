//! Random score sampling
//!
//! Scoring components never reach for a global generator. They are handed a
//! `ScoreSource`, which lets tests pin the draws with a seed or a script.

use crate::error::{RecruitAssistError, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed interval `[low, high]` that scores are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    low: f64,
    high: f64,
}

impl ScoreRange {
    /// Default range of the skills match percentage
    pub const MATCH_PERCENT: ScoreRange = ScoreRange { low: 70.0, high: 95.0 };

    /// Default range of every out-of-10 sub-score
    pub const SUB_SCORE: ScoreRange = ScoreRange { low: 7.0, high: 9.5 };

    pub fn new(low: f64, high: f64) -> Result<Self> {
        let range = Self { low, high };
        range.validate()?;
        Ok(range)
    }

    /// Ranges deserialized from config bypass `new`, so they are checked again here.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(RecruitAssistError::Configuration(format!(
                "Score range bounds must be finite, got {}",
                self
            )));
        }
        if self.low > self.high {
            return Err(RecruitAssistError::Configuration(format!(
                "Score range lower bound exceeds upper bound: {}",
                self
            )));
        }
        // Sampling scales by the span, so it must be representable too.
        if !(self.high - self.low).is_finite() {
            return Err(RecruitAssistError::Configuration(format!(
                "Score range is too wide to sample: {}",
                self
            )));
        }
        Ok(())
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Anything that can hand out a number inside a `ScoreRange`
pub trait ScoreSource {
    fn next_in_range(&mut self, range: ScoreRange) -> f64;
}

impl<R: Rng> ScoreSource for R {
    fn next_in_range(&mut self, range: ScoreRange) -> f64 {
        let value = self.random_range(range.low..=range.high);
        debug!("Drew {:.4} from {}", value, range);
        value
    }
}

/// Deterministic generator for reproducible assessments
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed values in order; panics when exhausted
    pub struct ScriptedSource {
        values: VecDeque<f64>,
    }

    impl ScriptedSource {
        pub fn new(values: &[f64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl ScoreSource for ScriptedSource {
        fn next_in_range(&mut self, _range: ScoreRange) -> f64 {
            self.values.pop_front().expect("scripted source exhausted")
        }
    }
}

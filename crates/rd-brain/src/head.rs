//! Mapping raw network outputs to an [`Action`].

use rd_core::Action;
use serde::{Deserialize, Serialize};

use crate::{BrainError, BrainResult};

// ── Thresholds ────────────────────────────────────────────────────────────────

/// Bands for a single scalar output in `[0, 1]`:
/// below `low` → duck, above `high` → jump, otherwise neutral.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Thresholds {
    pub low:  f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 0.48, high: 0.49 }
    }
}

impl Thresholds {
    pub fn new(low: f64, high: f64) -> BrainResult<Self> {
        let t = Self { low, high };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> BrainResult<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(BrainError::Thresholds { low: self.low, high: self.high });
        }
        Ok(())
    }

    #[inline]
    pub fn classify(&self, output: f64) -> Action {
        if output < self.low {
            Action::Duck
        } else if output > self.high {
            Action::Jump
        } else {
            Action::Neutral
        }
    }
}

// ── OutputHead ────────────────────────────────────────────────────────────────

/// How the last layer's activations become an action.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputHead {
    /// One output unit, banded by [`Thresholds`].
    Threshold(Thresholds),
    /// Three output units in [`Action`] class order; softmax, then the
    /// highest-scoring class.  The first maximum wins ties.
    Argmax,
}

impl Default for OutputHead {
    fn default() -> Self {
        OutputHead::Threshold(Thresholds::default())
    }
}

impl OutputHead {
    /// Number of output units this head reads.
    pub fn width(&self) -> usize {
        match self {
            OutputHead::Threshold(_) => 1,
            OutputHead::Argmax => Action::ALL.len(),
        }
    }

    pub fn validate(&self) -> BrainResult<()> {
        match self {
            OutputHead::Threshold(t) => t.validate(),
            OutputHead::Argmax => Ok(()),
        }
    }

    /// Resolve `outputs` (exactly [`width`](Self::width) values).
    pub fn resolve(&self, outputs: &[f64]) -> Action {
        match self {
            OutputHead::Threshold(t) => t.classify(outputs[0]),
            OutputHead::Argmax => {
                let probs = softmax(outputs);
                let mut best = 0;
                for (i, &p) in probs.iter().enumerate().skip(1) {
                    if p > probs[best] {
                        best = i;
                    }
                }
                Action::from_class(best).unwrap_or_default()
            }
        }
    }
}

/// Numerically stable softmax.  Empty input gives empty output.
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

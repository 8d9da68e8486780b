//! `DecisionController` — one agent's handle on its classifier.

use std::fmt;
use std::sync::Arc;

use rd_core::{Action, Obstacle};

use crate::{BrainError, BrainResult, Classifier, Observation};

/// Maps an observation to an action through a shared classifier.
///
/// The controller is memoryless; cloning it shares the classifier.
#[derive(Clone)]
pub struct DecisionController {
    classifier: Arc<dyn Classifier>,
}

impl DecisionController {
    /// Wrap `classifier`, rejecting it if it does not read exactly
    /// [`Observation::LEN`] inputs.
    pub fn new(classifier: Arc<dyn Classifier>) -> BrainResult<Self> {
        let expected = classifier.input_len();
        if expected != Observation::LEN {
            return Err(BrainError::InputArity { expected, got: Observation::LEN });
        }
        Ok(Self { classifier })
    }

    #[inline]
    pub fn decide(&self, observation: &Observation) -> Action {
        self.classifier.infer(observation)
    }

    /// Build the observation from `obstacle`, `agent_y` and `speed`, then
    /// decide.
    pub fn decide_for(&self, obstacle: &Obstacle, agent_y: f64, speed: f64) -> Action {
        self.decide(&Observation::new(obstacle, agent_y, speed))
    }

    /// `true` if both controllers use the very same classifier instance.
    pub fn shares_classifier_with(&self, other: &DecisionController) -> bool {
        Arc::ptr_eq(&self.classifier, &other.classifier)
    }
}

impl fmt::Debug for DecisionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionController")
            .field("input_len", &self.classifier.input_len())
            .finish()
    }
}

//! The `Classifier` trait — the inference extension point.

use rd_core::Action;

use crate::Observation;

/// A fixed inference function from an [`Observation`] to an [`Action`].
///
/// Implementations must be deterministic: the same observation always yields
/// the same action.  The population may call `infer` for many agents in
/// parallel, so implementations must be `Send + Sync` and must not mutate
/// shared state.
pub trait Classifier: Send + Sync {
    /// Number of input values the classifier reads.
    ///
    /// Checked against [`Observation::LEN`] when a controller is built.
    fn input_len(&self) -> usize {
        Observation::LEN
    }

    fn infer(&self, observation: &Observation) -> Action;
}

/// A [`Classifier`] that ignores its input and always answers the same.
///
/// Useful in tests and as a baseline population ("always jump").
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedClassifier(pub Action);

impl Classifier for FixedClassifier {
    fn infer(&self, _observation: &Observation) -> Action {
        self.0
    }
}

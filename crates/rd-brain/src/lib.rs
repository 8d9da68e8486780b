//! `rd-brain` — turning what an agent senses into one of three actions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`observation`] | `Observation` — the fixed-order 6-value input vector         |
//! | [`classifier`]  | `Classifier` trait, `FixedClassifier`                        |
//! | [`head`]        | `OutputHead` (threshold bands or argmax), `Thresholds`        |
//! | [`network`]     | `FeedForward`, `Layer`, `Activation`                         |
//! | [`weights`]     | `NetworkWeights` — JSON (de)serialisation of a network       |
//! | [`controller`]  | `DecisionController` — arity-checked classifier handle       |
//! | [`error`]       | `BrainError`, `BrainResult<T>`                               |
//!
//! # Design notes
//!
//! Classifiers are pure functions of their input: no interior mutability, no
//! randomness at inference time.  They are shared behind `Arc` so a whole
//! population can use one set of weights, or each agent can own its own,
//! without any synchronisation.  Edge detection between consecutive
//! decisions lives in `rd-agent`'s arbiter, not here.

pub mod classifier;
pub mod controller;
pub mod error;
pub mod head;
pub mod network;
pub mod observation;
pub mod weights;

#[cfg(test)]
mod tests;

pub use classifier::{Classifier, FixedClassifier};
pub use controller::DecisionController;
pub use error::{BrainError, BrainResult};
pub use head::{OutputHead, Thresholds, softmax};
pub use network::{Activation, FeedForward, Layer};
pub use observation::Observation;
pub use weights::{LayerWeights, NetworkWeights};

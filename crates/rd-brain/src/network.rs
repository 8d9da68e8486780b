//! A small fully connected feed-forward network.
//!
//! Layers are dense: `out[i] = act(bias[i] + Σ_j weights[i][j] · in[j])`.
//! The first layer's row length is the network's input width; the last
//! layer's row count must match the [`OutputHead`].

use rd_core::{Action, SimRng};
use serde::{Deserialize, Serialize};

use crate::{BrainError, BrainResult, Classifier, Observation, OutputHead};

/// Bias and weight magnitude bound for freshly initialised networks.
const INIT_SPREAD: f64 = 0.1;

// ── Activation ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Logistic,
    Tanh,
    Relu,
    Identity,
}

impl Activation {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Logistic => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
            Activation::Identity => x,
        }
    }
}

// ── Layer ─────────────────────────────────────────────────────────────────────

/// One dense layer.  `weights` has one row per output unit.
#[derive(Clone, PartialEq, Debug)]
pub struct Layer {
    pub(crate) weights:    Vec<Vec<f64>>,
    pub(crate) biases:     Vec<f64>,
    pub(crate) activation: Activation,
}

impl Layer {
    /// Checks that rows are non-empty and equally long, with one bias per row.
    pub fn new(weights: Vec<Vec<f64>>, biases: Vec<f64>, activation: Activation) -> BrainResult<Self> {
        if weights.is_empty() {
            return Err(BrainError::Topology("layer has no units".into()));
        }
        if biases.len() != weights.len() {
            return Err(BrainError::Topology(format!(
                "layer has {} weight rows but {} biases",
                weights.len(),
                biases.len()
            )));
        }
        let width = weights[0].len();
        if width == 0 || weights.iter().any(|row| row.len() != width) {
            return Err(BrainError::Topology("weight rows must be non-empty and of equal length".into()));
        }
        Ok(Self { weights, biases, activation })
    }

    #[inline]
    pub fn input_width(&self) -> usize {
        self.weights[0].len()
    }

    #[inline]
    pub fn output_width(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum();
                self.activation.apply(sum + bias)
            })
            .collect()
    }
}

// ── FeedForward ───────────────────────────────────────────────────────────────

/// Immutable dense network with an [`OutputHead`].
#[derive(Clone, PartialEq, Debug)]
pub struct FeedForward {
    layers: Vec<Layer>,
    head:   OutputHead,
}

impl FeedForward {
    /// Assemble and validate a network.
    ///
    /// Requires at least one hidden layer plus the output layer, matching
    /// widths between consecutive layers, and an output width equal to the
    /// head's.
    pub fn new(layers: Vec<Layer>, head: OutputHead) -> BrainResult<Self> {
        head.validate()?;
        if layers.len() < 2 {
            return Err(BrainError::Topology(format!(
                "need at least one hidden layer and an output layer, got {} layer(s)",
                layers.len()
            )));
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[0].output_width() != pair[1].input_width() {
                return Err(BrainError::Topology(format!(
                    "layer {} outputs {} values but layer {} reads {}",
                    i,
                    pair[0].output_width(),
                    i + 1,
                    pair[1].input_width()
                )));
            }
        }
        let got = layers[layers.len() - 1].output_width();
        if got != head.width() {
            return Err(BrainError::OutputWidth { expected: head.width(), got });
        }
        Ok(Self { layers, head })
    }

    /// A network with uniformly random weights and biases in ±0.1.
    ///
    /// `sizes` lists unit counts from the input to the output layer, e.g.
    /// `[6, 6, 1]`.  Every layer uses `activation`.
    pub fn random(
        sizes:      &[usize],
        activation: Activation,
        head:       OutputHead,
        rng:        &mut SimRng,
    ) -> BrainResult<Self> {
        let mut layers = Vec::with_capacity(sizes.len().saturating_sub(1));
        for pair in sizes.windows(2) {
            let (inputs, outputs) = (pair[0], pair[1]);
            let weights = (0..outputs)
                .map(|_| (0..inputs).map(|_| rng.gen_range(-INIT_SPREAD..INIT_SPREAD)).collect())
                .collect();
            let biases = (0..outputs).map(|_| rng.gen_range(-INIT_SPREAD..INIT_SPREAD)).collect();
            layers.push(Layer::new(weights, biases, activation)?);
        }
        Self::new(layers, head)
    }

    /// The classic 6-6-1 logistic network with default thresholds.
    pub fn random_default(rng: &mut SimRng) -> BrainResult<Self> {
        Self::random(
            &[Observation::LEN, Observation::LEN, 1],
            Activation::Logistic,
            OutputHead::default(),
            rng,
        )
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn head(&self) -> OutputHead {
        self.head
    }

    /// Raw activations of the output layer.
    pub fn forward(&self, input: &[f64]) -> Vec<f64> {
        let mut values = input.to_vec();
        for layer in &self.layers {
            values = layer.forward(&values);
        }
        values
    }
}

impl Classifier for FeedForward {
    fn input_len(&self) -> usize {
        self.layers[0].input_width()
    }

    fn infer(&self, observation: &Observation) -> Action {
        self.head.resolve(&self.forward(observation.as_slice()))
    }
}

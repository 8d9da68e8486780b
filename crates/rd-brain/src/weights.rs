//! JSON weight files.
//!
//! ```json
//! {
//!   "layers": [
//!     { "weights": [[0.1, -0.2, ...], ...], "biases": [0.0, ...], "activation": "logistic" },
//!     { "weights": [[...]], "biases": [0.05] }
//!   ],
//!   "head": { "kind": "threshold", "low": 0.48, "high": 0.49 }
//! }
//! ```
//!
//! `activation` defaults to `logistic`; `head` defaults to the threshold
//! head with `low = 0.48`, `high = 0.49`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Activation, BrainResult, FeedForward, Layer, OutputHead};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LayerWeights {
    pub weights:    Vec<Vec<f64>>,
    pub biases:     Vec<f64>,
    #[serde(default)]
    pub activation: Activation,
}

/// Serialisable form of a [`FeedForward`] network.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NetworkWeights {
    pub layers: Vec<LayerWeights>,
    #[serde(default)]
    pub head:   OutputHead,
}

impl NetworkWeights {
    pub fn from_reader<R: Read>(reader: R) -> BrainResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> BrainResult<Self> {
        let path = path.as_ref();
        let weights = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), layers = weights.layers.len(), "loaded network weights");
        Ok(weights)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> BrainResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> BrainResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Validate and build the network.
    pub fn into_network(self) -> BrainResult<FeedForward> {
        let layers = self
            .layers
            .into_iter()
            .map(|l| Layer::new(l.weights, l.biases, l.activation))
            .collect::<BrainResult<Vec<_>>>()?;
        FeedForward::new(layers, self.head)
    }
}

impl From<&FeedForward> for NetworkWeights {
    fn from(net: &FeedForward) -> Self {
        Self {
            layers: net
                .layers()
                .iter()
                .map(|l| LayerWeights {
                    weights:    l.weights.clone(),
                    biases:     l.biases.clone(),
                    activation: l.activation,
                })
                .collect(),
            head: net.head(),
        }
    }
}

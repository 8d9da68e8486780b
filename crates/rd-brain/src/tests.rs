//! Unit tests for rd-brain.

#[cfg(test)]
mod helpers {
    use crate::{Activation, FeedForward, Layer, OutputHead};

    /// 6 → 1 → `outputs` network whose hidden unit is always 0, so the
    /// output is decided by the output biases alone.
    pub fn bias_only(output_biases: Vec<f64>, activation: Activation, head: OutputHead) -> FeedForward {
        let hidden = Layer::new(vec![vec![0.0; 6]], vec![0.0], Activation::Identity).unwrap();
        let rows = output_biases.iter().map(|_| vec![0.0]).collect();
        let output = Layer::new(rows, output_biases, activation).unwrap();
        FeedForward::new(vec![hidden, output], head).unwrap()
    }
}

#[cfg(test)]
mod thresholds {
    use rd_core::Action;

    use crate::{BrainError, Thresholds};

    #[test]
    fn default_bands() {
        let t = Thresholds::default();
        assert_eq!(t.classify(0.1), Action::Duck);
        assert_eq!(t.classify(0.48), Action::Neutral);
        assert_eq!(t.classify(0.485), Action::Neutral);
        assert_eq!(t.classify(0.49), Action::Neutral);
        assert_eq!(t.classify(0.9), Action::Jump);
    }

    #[test]
    fn inverted_bands_are_rejected() {
        assert!(matches!(Thresholds::new(0.6, 0.4), Err(BrainError::Thresholds { .. })));
        assert!(Thresholds::new(0.5, 0.5).is_ok());
    }
}

#[cfg(test)]
mod head {
    use rd_core::Action;

    use crate::{OutputHead, softmax};

    #[test]
    fn softmax_is_a_distribution() {
        let p = softmax(&[1.0, 2.0, 3.0]);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(p[2] > p[1] && p[1] > p[0]);
    }

    #[test]
    fn softmax_handles_large_values() {
        let p = softmax(&[1000.0, 1000.0]);
        assert!((p[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn argmax_picks_highest_class() {
        assert_eq!(OutputHead::Argmax.resolve(&[0.1, 0.2, 0.7]), Action::Duck);
        assert_eq!(OutputHead::Argmax.resolve(&[0.1, 0.8, 0.1]), Action::Jump);
    }

    #[test]
    fn argmax_ties_go_to_the_first_class() {
        assert_eq!(OutputHead::Argmax.resolve(&[0.0, 0.0, 0.0]), Action::Neutral);
        assert_eq!(OutputHead::Argmax.resolve(&[0.0, 2.0, 2.0]), Action::Jump);
    }

    #[test]
    fn widths() {
        assert_eq!(OutputHead::default().width(), 1);
        assert_eq!(OutputHead::Argmax.width(), 3);
    }
}

#[cfg(test)]
mod network {
    use rd_core::{Action, SimRng};

    use super::helpers::bias_only;
    use crate::{Activation, BrainError, Classifier, FeedForward, Layer, Observation, OutputHead};

    fn obs() -> Observation {
        Observation([200.0, 105.0, 17.0, 35.0, 93.0, 6.0])
    }

    #[test]
    fn threshold_head_bands() {
        let head = OutputHead::default();
        // logistic(0) = 0.5 > 0.49
        assert_eq!(bias_only(vec![0.0], Activation::Logistic, head).infer(&obs()), Action::Jump);
        assert_eq!(bias_only(vec![-10.0], Activation::Logistic, head).infer(&obs()), Action::Duck);
        // logistic(-0.06) ≈ 0.485
        assert_eq!(bias_only(vec![-0.06], Activation::Logistic, head).infer(&obs()), Action::Neutral);
    }

    #[test]
    fn argmax_head() {
        let net = bias_only(vec![0.0, 0.0, 1.0], Activation::Identity, OutputHead::Argmax);
        assert_eq!(net.infer(&obs()), Action::Duck);
    }

    #[test]
    fn forward_uses_inputs() {
        // Hidden unit = relu(100 - obstacle_x); output = identity.
        let mut row = vec![0.0; 6];
        row[0] = -1.0;
        let hidden = Layer::new(vec![row], vec![100.0], Activation::Relu).unwrap();
        let output = Layer::new(vec![vec![1.0]], vec![0.0], Activation::Identity).unwrap();
        let net = FeedForward::new(vec![hidden, output], OutputHead::default()).unwrap();

        assert_eq!(net.forward(obs().as_slice()), vec![0.0]);
        let near = Observation([40.0, 105.0, 17.0, 35.0, 93.0, 6.0]);
        assert_eq!(net.forward(near.as_slice()), vec![60.0]);
        assert_eq!(net.infer(&near), Action::Jump);
    }

    #[test]
    fn inference_is_deterministic() {
        let mut rng = SimRng::new(3);
        let net = FeedForward::random_default(&mut rng).unwrap();
        let first = net.forward(obs().as_slice());
        for _ in 0..10 {
            assert_eq!(net.forward(obs().as_slice()), first);
        }
    }

    #[test]
    fn random_init_is_seeded_and_bounded() {
        let a = FeedForward::random_default(&mut SimRng::new(1)).unwrap();
        let b = FeedForward::random_default(&mut SimRng::new(1)).unwrap();
        let c = FeedForward::random_default(&mut SimRng::new(2)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.input_len(), 6);
        assert_eq!(a.layers().len(), 2);
        for layer in a.layers() {
            assert_eq!(layer.activation(), Activation::Logistic);
        }
        let w = crate::NetworkWeights::from(&a);
        assert!(w.layers.iter().flat_map(|l| l.weights.iter().flatten()).all(|v| v.abs() <= 0.1));
    }

    #[test]
    fn needs_a_hidden_layer() {
        let only = Layer::new(vec![vec![0.0; 6]], vec![0.0], Activation::Logistic).unwrap();
        let err = FeedForward::new(vec![only], OutputHead::default()).unwrap_err();
        assert!(matches!(err, BrainError::Topology(_)));
    }

    #[test]
    fn mismatched_layers_are_rejected() {
        let hidden = Layer::new(vec![vec![0.0; 6]; 4], vec![0.0; 4], Activation::Logistic).unwrap();
        let output = Layer::new(vec![vec![0.0; 3]], vec![0.0], Activation::Logistic).unwrap();
        let err = FeedForward::new(vec![hidden, output], OutputHead::default()).unwrap_err();
        assert!(matches!(err, BrainError::Topology(_)));
    }

    #[test]
    fn output_width_must_match_head() {
        let err = FeedForward::random(&[6, 4, 2], Activation::Tanh, OutputHead::Argmax, &mut SimRng::new(0))
            .unwrap_err();
        assert!(matches!(err, BrainError::OutputWidth { expected: 3, got: 2 }));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Layer::new(vec![vec![0.0; 6], vec![0.0; 5]], vec![0.0, 0.0], Activation::Relu).unwrap_err();
        assert!(matches!(err, BrainError::Topology(_)));
        let err = Layer::new(vec![vec![0.0; 6]], vec![0.0, 0.0], Activation::Relu).unwrap_err();
        assert!(matches!(err, BrainError::Topology(_)));
    }

    #[test]
    fn activations() {
        assert_eq!(Activation::Logistic.apply(0.0), 0.5);
        assert_eq!(Activation::Relu.apply(-3.0), 0.0);
        assert_eq!(Activation::Tanh.apply(0.0), 0.0);
        assert_eq!(Activation::Identity.apply(-3.0), -3.0);
    }
}

#[cfg(test)]
mod weights {
    use rd_core::{Action, SimRng};

    use crate::{Activation, Classifier, FeedForward, NetworkWeights, Observation, OutputHead, Thresholds};

    #[test]
    fn file_round_trip() {
        let net = FeedForward::random_default(&mut SimRng::new(9)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weights.json");

        NetworkWeights::from(&net).to_path(&path).unwrap();
        let loaded = NetworkWeights::from_path(&path).unwrap().into_network().unwrap();
        assert_eq!(loaded, net);
    }

    #[test]
    fn json_keeps_every_weight_bit_exact() {
        for seed in 0..64 {
            let net = FeedForward::random_default(&mut SimRng::new(seed)).unwrap();
            let mut buf = Vec::new();
            NetworkWeights::from(&net).to_writer(&mut buf).unwrap();
            let loaded = NetworkWeights::from_reader(buf.as_slice()).unwrap().into_network().unwrap();
            for (a, b) in loaded.layers().iter().zip(net.layers()) {
                for (ra, rb) in a.weights.iter().zip(&b.weights) {
                    let bits = |row: &[f64]| row.iter().map(|w| w.to_bits()).collect::<Vec<_>>();
                    assert_eq!(bits(ra.as_slice()), bits(rb.as_slice()), "seed {seed}");
                }
            }
            assert_eq!(loaded, net, "seed {seed}");
        }
    }

    #[test]
    fn defaults_when_fields_are_omitted() {
        let json = r#"{
            "layers": [
                { "weights": [[0, 0, 0, 0, 0, 0]], "biases": [0] },
                { "weights": [[0]], "biases": [0] }
            ]
        }"#;
        let w = NetworkWeights::from_reader(json.as_bytes()).unwrap();
        assert_eq!(w.layers[0].activation, Activation::Logistic);
        assert_eq!(w.head, OutputHead::Threshold(Thresholds::default()));
        let net = w.into_network().unwrap();
        assert_eq!(net.infer(&Observation([0.0; 6])), Action::Jump);
    }

    #[test]
    fn argmax_head_in_json() {
        let json = r#"{
            "layers": [
                { "weights": [[0, 0, 0, 0, 0, 0]], "biases": [0], "activation": "identity" },
                { "weights": [[0], [0], [0]], "biases": [0, 0, 5], "activation": "identity" }
            ],
            "head": { "kind": "argmax" }
        }"#;
        let net = NetworkWeights::from_reader(json.as_bytes()).unwrap().into_network().unwrap();
        assert_eq!(net.head(), OutputHead::Argmax);
        assert_eq!(net.infer(&Observation([0.0; 6])), Action::Duck);
    }

    #[test]
    fn custom_thresholds_in_json() {
        let json = r#"{
            "layers": [
                { "weights": [[0, 0, 0, 0, 0, 0]], "biases": [0] },
                { "weights": [[0]], "biases": [0] }
            ],
            "head": { "kind": "threshold", "low": 0.4, "high": 0.6 }
        }"#;
        let net = NetworkWeights::from_reader(json.as_bytes()).unwrap().into_network().unwrap();
        assert_eq!(net.infer(&Observation([0.0; 6])), Action::Neutral);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(NetworkWeights::from_reader("{ not json".as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NetworkWeights::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::BrainError::Io(_)));
    }
}

#[cfg(test)]
mod controller {
    use std::sync::Arc;

    use rd_core::{Action, Obstacle, ObstacleId, ObstacleKind, SimRng};

    use crate::{Activation, BrainError, DecisionController, FeedForward, FixedClassifier, Observation, OutputHead};

    #[test]
    fn builds_observation_from_obstacle() {
        let obstacle = Obstacle::new(ObstacleId(0), &ObstacleKind::small_cactus(), 3, 300.0, 105.0);
        let o = Observation::new(&obstacle, 93.0, 6.5);
        assert_eq!(o.0, [300.0, 105.0, 51.0, 35.0, 93.0, 6.5]);
    }

    #[test]
    fn fixed_classifier_decides() {
        let c = DecisionController::new(Arc::new(FixedClassifier(Action::Duck))).unwrap();
        let obstacle = Obstacle::new(ObstacleId(0), &ObstacleKind::large_cactus(), 1, 300.0, 90.0);
        assert_eq!(c.decide_for(&obstacle, 93.0, 6.0), Action::Duck);
    }

    #[test]
    fn wrong_input_arity_is_rejected() {
        let net = FeedForward::random(&[5, 4, 1], Activation::Logistic, OutputHead::default(), &mut SimRng::new(0))
            .unwrap();
        let err = DecisionController::new(Arc::new(net)).unwrap_err();
        assert!(matches!(err, BrainError::InputArity { expected: 5, got: 6 }));
    }

    #[test]
    fn clones_share_the_classifier() {
        let net = Arc::new(FeedForward::random_default(&mut SimRng::new(0)).unwrap());
        let a = DecisionController::new(net.clone()).unwrap();
        let b = a.clone();
        let c = DecisionController::new(net).unwrap();
        let d = DecisionController::new(Arc::new(FixedClassifier::default())).unwrap();
        assert!(a.shares_classifier_with(&b));
        assert!(a.shares_classifier_with(&c));
        assert!(!a.shares_classifier_with(&d));
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrainError {
    #[error("classifier expects {expected} inputs, observation has {got}")]
    InputArity { expected: usize, got: usize },

    #[error("network topology error: {0}")]
    Topology(String),

    #[error("output head needs {expected} output units, network has {got}")]
    OutputWidth { expected: usize, got: usize },

    #[error("invalid thresholds: low {low} must not exceed high {high}")]
    Thresholds { low: f64, high: f64 },

    #[error("weights JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BrainResult<T> = Result<T, BrainError>;

use rd_brain::BrainError;
use rd_core::RdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("population configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] RdError),

    #[error("classifier rejected: {0}")]
    Brain(#[from] BrainError),
}

pub type SimResult<T> = Result<T, SimError>;

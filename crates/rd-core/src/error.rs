//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RdError` as one variant
//! where they need to surface a core failure.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `rd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RdError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rd-*` crates.
pub type RdResult<T> = Result<T, RdError>;

//! Error types for scenario construction and simulation runs.
//!
//! Both variants are fatal: construction input is rejected eagerly, and a
//! coincident-body singularity is deterministic, so re-running the same
//! inputs reproduces the same failure.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Malformed or out-of-domain construction input
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Two bodies occupy exactly the same position, so the pairwise
    /// acceleration is undefined
    #[error("bodies {body_a} and {body_b} coincide at step {step}")]
    SingularConfiguration {
        step: usize,
        body_a: usize,
        body_b: usize,
    },
}

impl SimError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        SimError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Singularity between bodies `a` and `b` at `step`, with the pair
    /// stored in ascending index order
    pub fn singular(step: usize, a: usize, b: usize) -> Self {
        SimError::SingularConfiguration {
            step,
            body_a: a.min(b),
            body_b: a.max(b),
        }
    }
}

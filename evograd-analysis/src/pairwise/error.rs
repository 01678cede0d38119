use thiserror::Error;

use evograd_core::CompositionError;

/// Errors that can occur when evaluating a pairwise payoff query.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PairwiseError {
    /// More focal-strategy players were requested than fit in the group.
    #[error("k = {k} exceeds the group size {group_size}")]
    CountExceedsGroupSize { k: u64, group_size: u64 },

    /// The composition rejected a strategy index.
    #[error(transparent)]
    Composition(#[from] CompositionError),
}

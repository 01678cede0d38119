use thiserror::Error;

use evograd_core::PopulationStateError;

/// Errors that can occur when classifying candidate equilibria.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ClassifyError {
    /// The gradient must cover at least two grid points.
    #[error("gradient must have at least 2 points, got {len}")]
    GradientTooShort { len: usize },

    /// A candidate index does not address a gradient entry.
    #[error("saddle index {index} is out of bounds for a {nb_points}-point gradient")]
    SaddleIndexOutOfBounds { index: usize, nb_points: usize },

    /// The candidate list must be strictly ascending with no duplicates.
    #[error("saddle indices must be strictly ascending, violated at position {position}")]
    SaddleIndicesNotAscending { position: usize },

    /// An unstable candidate at the first or last list position has no
    /// neighboring candidate for its flow arrow to point at.
    #[error("unstable saddle point at list position {position} has no neighbor to flow toward")]
    MissingNeighbor { position: usize },

    /// The arrow offset must be finite and non-negative.
    #[error("offset must be finite and non-negative, got {offset}")]
    InvalidOffset { offset: f64 },

    /// An arrow target fell outside the normalized population axis, which
    /// happens when the offset exceeds the spacing between neighboring
    /// candidates.
    #[error("flow direction target is outside [0, 1]: {0}")]
    DirectionOutOfRange(#[from] PopulationStateError),
}

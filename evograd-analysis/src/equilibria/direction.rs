use serde::{Deserialize, Serialize};

use evograd_core::PopulationState;

/// Whether a candidate equilibrium attracts or repels nearby states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    /// Flow on both sides points toward the state.
    Stable,
    /// Flow leaves the state toward a neighboring candidate.
    Unstable,
}

impl Stability {
    /// Returns `true` for [`Stability::Stable`].
    #[must_use]
    pub fn is_stable(self) -> bool {
        matches!(self, Self::Stable)
    }
}

/// An outgoing flow arrow for one unstable equilibrium.
///
/// `from` is the grid index of the unstable state; `to` is the normalized
/// coordinate the arrow should point at, pulled back from the neighboring
/// candidate by the caller's offset so markers and arrowheads do not
/// overlap when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowDirection {
    pub from: usize,
    pub to: PopulationState,
}

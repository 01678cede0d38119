//! Stability classification of candidate equilibria on a discretized
//! population axis.
//!
//! The caller supplies the gradient of selection evaluated at every grid
//! point along with the indices where it found sign changes or near-zero
//! values; [`classify`] decides which of those candidates are stable
//! attractors and, for the unstable ones, where the outgoing flow arrow
//! should point.

mod classify;
mod direction;
mod error;

pub use classify::{Classification, DEFAULT_OFFSET, classify, classify_with_default_offset};
pub use direction::{FlowDirection, Stability};
pub use error::ClassifyError;

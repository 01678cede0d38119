//! Shared vocabulary for evolutionary game dynamics analysis.
//!
//! This crate defines the small set of traits and invariant-carrying types
//! that the analysis crates build on: the [`PayoffModel`] oracle capability,
//! the [`GroupComposition`] counts vector describing one sampled interaction
//! group, and the [`PopulationState`] bounded scalar addressing points on a
//! normalized population axis.

mod composition;
mod payoff;
mod state;

pub use composition::{CompositionError, GroupComposition};
pub use payoff::PayoffModel;
pub use state::{PopulationState, PopulationStateError};

//! Analysis utilities for evolutionary game dynamics.
//!
//! This crate provides the pieces an external dynamics or plotting routine
//! needs once it has computed a gradient of selection over a discretized
//! population axis:
//!
//! - [`equilibria`] classifies candidate equilibrium states as stable or
//!   unstable and reports where flow leaves the unstable ones.
//! - [`pairwise`] reduces a multi-strategy payoff oracle to a square matrix
//!   of lazily evaluated two-strategy payoff queries.
//! - [`distributions`] holds the combinatorial distributions that group
//!   sampling analyses rely on.

pub mod distributions;
pub mod equilibria;
pub mod pairwise;

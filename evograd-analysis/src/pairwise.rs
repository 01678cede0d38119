//! Reduction of a multi-strategy payoff oracle to two-strategy queries.
//!
//! Analyses that can assume at most two strategies coexist in a group at
//! any time, such as small-mutation-limit transition matrices, never need
//! the full combinatorial payoff space. [`PairwiseMatrix::build`] curries
//! the oracle into an `nb_strategies x nb_strategies` table of
//! [`PairwisePayoff`] queries, each answering "what does strategy `i` earn
//! in a group of `k` players of `i` and `group_size - k` players of `j`".
//! Construction is free; the oracle is only consulted when a cell is
//! queried.

mod error;
mod matrix;
mod query;

pub use error::PairwiseError;
pub use matrix::PairwiseMatrix;
pub use query::PairwisePayoff;

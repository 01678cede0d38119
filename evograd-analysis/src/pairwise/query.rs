use evograd_core::{GroupComposition, PayoffModel};

use super::PairwiseError;

/// A deferred two-strategy payoff query.
///
/// Each query holds its focal pair `(i, j)`, the total strategy count, and a
/// shared reference to the payoff oracle; nothing is evaluated until
/// [`payoff`](Self::payoff) is called. Queries carry no mutable state, so a
/// single query can be called repeatedly, and from concurrent callers,
/// without interference.
#[derive(Debug)]
pub struct PairwisePayoff<'a, G> {
    strategy_i: usize,
    strategy_j: usize,
    nb_strategies: usize,
    game: &'a G,
}

impl<'a, G: PayoffModel> PairwisePayoff<'a, G> {
    pub(super) fn new(
        strategy_i: usize,
        strategy_j: usize,
        nb_strategies: usize,
        game: &'a G,
    ) -> Self {
        Self {
            strategy_i,
            strategy_j,
            nb_strategies,
            game,
        }
    }

    /// Returns the payoff of strategy `i` in a group with `k` players of
    /// strategy `i` and `group_size - k` players of strategy `j`.
    ///
    /// A fresh composition is allocated per call: `k` is written at `i`,
    /// then `group_size - k` at `j`. On the diagonal (`i == j`) the second
    /// write overwrites the first, so the group holds `group_size - k`
    /// players of the single strategy regardless of `k`.
    ///
    /// # Errors
    ///
    /// Returns [`PairwiseError::CountExceedsGroupSize`] if `k > group_size`.
    pub fn payoff(&self, k: u64, group_size: u64) -> Result<f64, PairwiseError> {
        if k > group_size {
            return Err(PairwiseError::CountExceedsGroupSize { k, group_size });
        }

        let mut composition = GroupComposition::zeros(self.nb_strategies);
        composition.set(self.strategy_i, k)?;
        composition.set(self.strategy_j, group_size - k)?;

        Ok(self.game.payoff(self.strategy_i, &composition))
    }

    /// Returns the focal pair `(i, j)` this query answers for.
    #[must_use]
    pub fn strategies(&self) -> (usize, usize) {
        (self.strategy_i, self.strategy_j)
    }
}

// Manual impls: a derive would demand `G: Clone`/`G: Copy`, but the query
// only holds a shared reference to the oracle.
impl<G> Clone for PairwisePayoff<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for PairwisePayoff<'_, G> {}

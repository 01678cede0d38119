use thiserror::Error;

/// Per-strategy participant counts for one sampled interaction group.
///
/// A composition holds one non-negative count per strategy; the counts sum
/// to the size of the interaction group. Compositions are cheap, transient
/// values: analyses allocate a fresh one per payoff query rather than
/// sharing a buffer, so concurrent queries can never observe each other's
/// in-flight counts.
///
/// # Examples
///
/// ```
/// use evograd_core::GroupComposition;
///
/// let mut group = GroupComposition::zeros(3);
/// group.set(0, 2).unwrap();
/// group.set(2, 4).unwrap();
///
/// assert_eq!(group.counts(), &[2, 0, 4]);
/// assert_eq!(group.group_size(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupComposition(Vec<u64>);

/// Errors that can occur when building or mutating a group composition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CompositionError {
    #[error("strategy index {strategy} is out of bounds for {nb_strategies} strategies")]
    StrategyOutOfBounds {
        strategy: usize,
        nb_strategies: usize,
    },
}

impl GroupComposition {
    /// Creates an all-zero composition over `nb_strategies` strategies.
    #[must_use]
    pub fn zeros(nb_strategies: usize) -> Self {
        Self(vec![0; nb_strategies])
    }

    /// Sets the participant count for one strategy.
    ///
    /// # Errors
    ///
    /// Returns [`CompositionError::StrategyOutOfBounds`] if `strategy` is not
    /// a valid index into this composition.
    pub fn set(&mut self, strategy: usize, count: u64) -> Result<(), CompositionError> {
        let nb_strategies = self.0.len();
        let slot = self
            .0
            .get_mut(strategy)
            .ok_or(CompositionError::StrategyOutOfBounds {
                strategy,
                nb_strategies,
            })?;
        *slot = count;
        Ok(())
    }

    /// Returns the participant count for one strategy, if in bounds.
    #[must_use]
    pub fn count(&self, strategy: usize) -> Option<u64> {
        self.0.get(strategy).copied()
    }

    /// Returns the counts for all strategies in strategy-index order.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    /// Returns the number of strategies this composition covers.
    #[must_use]
    pub fn nb_strategies(&self) -> usize {
        self.0.len()
    }

    /// Returns the total group size, the sum of all counts.
    #[must_use]
    pub fn group_size(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl From<Vec<u64>> for GroupComposition {
    fn from(counts: Vec<u64>) -> Self {
        Self(counts)
    }
}

impl AsRef<[u64]> for GroupComposition {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

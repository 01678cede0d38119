use crate::GroupComposition;

/// A payoff oracle that maps a group composition to a focal strategy's payoff.
///
/// Oracles must be deterministic, always producing the same payoff for a
/// given strategy and composition, which makes them a stable foundation for
/// equilibrium analysis, invasion dynamics, and caching. Implementations are
/// queried through a shared reference and must not mutate on query, so a
/// single oracle can safely back many concurrent callers.
pub trait PayoffModel {
    /// Returns the payoff of `strategy` in a group with the given composition.
    ///
    /// `strategy` indexes into the composition; callers guarantee it is a
    /// valid strategy index for this game.
    fn payoff(&self, strategy: usize, composition: &GroupComposition) -> f64;
}

impl<T: PayoffModel + ?Sized> PayoffModel for &T {
    fn payoff(&self, strategy: usize, composition: &GroupComposition) -> f64 {
        (**self).payoff(strategy, composition)
    }
}

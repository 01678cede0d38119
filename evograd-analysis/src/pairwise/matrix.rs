use std::ops::Index;

use ndarray::Array2;

use evograd_core::PayoffModel;

use super::PairwisePayoff;

/// A square table of deferred two-strategy payoff queries.
///
/// Cell `(i, j)` answers for strategy `i` playing against strategy `j`;
/// the diagonal holds single-strategy groups. Building the matrix performs
/// no oracle evaluation, so the full table is cheap to construct even when
/// only a few cells will ever be queried.
#[derive(Debug)]
pub struct PairwiseMatrix<'a, G> {
    cells: Array2<PairwisePayoff<'a, G>>,
}

// Manual impl for the same reason as `PairwisePayoff`: cloning the table
// duplicates cheap query objects, not the oracle.
impl<G> Clone for PairwiseMatrix<'_, G> {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
        }
    }
}

impl<'a, G: PayoffModel> PairwiseMatrix<'a, G> {
    /// Curries `game` into an `nb_strategies x nb_strategies` query table.
    ///
    /// The oracle is captured by shared reference; it is not consulted here.
    #[must_use]
    pub fn build(nb_strategies: usize, game: &'a G) -> Self {
        let cells = Array2::from_shape_fn((nb_strategies, nb_strategies), |(i, j)| {
            PairwisePayoff::new(i, j, nb_strategies, game)
        });
        Self { cells }
    }

    /// Returns the query for strategy `i` against strategy `j`, if in bounds.
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Option<&PairwisePayoff<'a, G>> {
        self.cells.get((i, j))
    }

    /// Returns the number of strategies the table covers.
    #[must_use]
    pub fn nb_strategies(&self) -> usize {
        self.cells.nrows()
    }

    /// Iterates over all cells in row-major order with their `(i, j)` pair.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &PairwisePayoff<'a, G>)> {
        self.cells.indexed_iter()
    }
}

impl<'a, G: PayoffModel> Index<(usize, usize)> for PairwiseMatrix<'a, G> {
    type Output = PairwisePayoff<'a, G>;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[(i, j)]
    }
}

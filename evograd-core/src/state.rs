use std::{cmp::Ordering, convert::TryFrom};

use thiserror::Error;

/// A point on the normalized population axis, bounded to `[0.0, 1.0]`.
///
/// In a two-strategy (or projected) population, a state of `0.0` means the
/// focal strategy is extinct and `1.0` means it has fixated. Discretized
/// analyses address state `i` of an `nb_points`-point grid as
/// `i / (nb_points - 1)`.
///
/// This type internally wraps an `f64` and guarantees the value is within
/// `[0, 1]`. Because of this invariant, `PopulationState` implements [`Eq`]
/// and [`Ord`] even though raw `f64` does not.
///
/// # Examples
/// ```
/// use evograd_core::PopulationState;
///
/// let x = PopulationState::new(0.25).unwrap();
/// assert_eq!(x.get(), 0.25);
///
/// // State 3 of a 5-point grid sits at 0.75.
/// let y = PopulationState::from_index(3, 5).unwrap();
/// assert_eq!(y.get(), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "f64", into = "f64"))]
pub struct PopulationState(f64);

/// Errors that can occur when constructing a [`PopulationState`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PopulationStateError {
    #[error("population state must be finite, got {0}")]
    NotFinite(f64),

    #[error("population state {0} is outside [0, 1]")]
    OutOfRange(f64),

    #[error("a discretized population axis needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("state index {index} is out of bounds for {nb_points} points")]
    IndexOutOfBounds { index: usize, nb_points: usize },
}

impl PopulationState {
    /// Creates a `PopulationState` if `value` is within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`PopulationStateError::NotFinite`] if `value` is `NaN` or
    /// infinite, or [`PopulationStateError::OutOfRange`] if it lies outside
    /// `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, PopulationStateError> {
        if !value.is_finite() {
            return Err(PopulationStateError::NotFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(PopulationStateError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates the state at `index` of an `nb_points`-point discretized axis.
    ///
    /// # Errors
    ///
    /// Returns [`PopulationStateError::TooFewPoints`] if `nb_points < 2`, or
    /// [`PopulationStateError::IndexOutOfBounds`] if `index >= nb_points`.
    pub fn from_index(index: usize, nb_points: usize) -> Result<Self, PopulationStateError> {
        if nb_points < 2 {
            return Err(PopulationStateError::TooFewPoints(nb_points));
        }
        if index >= nb_points {
            return Err(PopulationStateError::IndexOutOfBounds { index, nb_points });
        }
        Self::new(index as f64 / (nb_points - 1) as f64)
    }

    /// Returns the inner `f64`.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PopulationState {
    type Error = PopulationStateError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PopulationState::new(value)
    }
}

impl From<PopulationState> for f64 {
    fn from(state: PopulationState) -> Self {
        state.0
    }
}

// Safe because `new`/`TryFrom` forbid NaN and infinity.
impl Eq for PopulationState {}

impl Ord for PopulationState {
    /// Compares two `PopulationState`s.
    ///
    /// Uses the underlying `f64`'s `partial_cmp` and unwraps the result.
    /// The unwrap is safe because the constructor guarantees values are
    /// finite and within `[0, 1]`, so `partial_cmp` always returns `Some(_)`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap()
    }
}

impl PartialOrd for PopulationState {
    /// Delegates to [`Ord::cmp`] to ensure a total, consistent ordering.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

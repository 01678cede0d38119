use serde::{Deserialize, Serialize};

use evograd_core::PopulationState;

use super::{ClassifyError, FlowDirection, Stability};

/// Arrow offset used by [`classify_with_default_offset`], in normalized
/// population-axis units.
pub const DEFAULT_OFFSET: f64 = 0.01;

/// The classification of every candidate equilibrium in one gradient pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// One entry per candidate, in input order.
    pub stability: Vec<Stability>,
    /// One entry per unstable candidate; stable candidates emit no arrow.
    pub directions: Vec<FlowDirection>,
}

/// Which neighboring candidate an unstable state's flow arrow points at.
#[derive(Clone, Copy)]
enum Toward {
    Next,
    Previous,
}

/// Classifies candidate equilibria as stable or unstable and computes the
/// outgoing flow arrow for each unstable one.
///
/// `gradient[i]` is the gradient of selection at normalized state
/// `i / (gradient.len() - 1)`; `saddle_points` lists the grid indices the
/// caller flagged as candidates, strictly ascending. `offset` pulls each
/// arrow target back from the neighboring candidate, in normalized units,
/// so drawn markers do not overlap.
///
/// Stability is decided by strict sign tests on the immediately adjacent
/// gradient entries: an interior candidate is unstable if the gradient just
/// above it is positive or the gradient just below it is negative, and
/// stable otherwise. Boundary candidates only test their single interior
/// neighbor. The tests compare against exact zero; gradients carrying
/// floating noise around sign changes should be cleaned up by the caller.
///
/// # Errors
///
/// Returns a [`ClassifyError`] if the gradient has fewer than two points,
/// the candidate list is out of bounds or not strictly ascending, the
/// offset is negative or non-finite, an unstable candidate at the ends of
/// the list has no neighbor to flow toward, or an arrow target falls
/// outside `[0, 1]`.
pub fn classify(
    gradient: &[f64],
    saddle_points: &[usize],
    offset: f64,
) -> Result<Classification, ClassifyError> {
    let nb_points = gradient.len();
    if nb_points < 2 {
        return Err(ClassifyError::GradientTooShort { len: nb_points });
    }
    if !offset.is_finite() || offset < 0.0 {
        return Err(ClassifyError::InvalidOffset { offset });
    }
    validate_saddle_points(saddle_points, nb_points)?;

    let span = (nb_points - 1) as f64;
    let real_offset = offset * span;

    let mut stability = Vec::with_capacity(saddle_points.len());
    let mut directions = Vec::new();

    for (i, &point) in saddle_points.iter().enumerate() {
        let flow = if point == 0 {
            if gradient[point + 1] > 0.0 {
                Some(Toward::Next)
            } else {
                None
            }
        } else if point == nb_points - 1 {
            if gradient[point - 1] < 0.0 {
                Some(Toward::Previous)
            } else {
                None
            }
        } else if gradient[point + 1] > 0.0 {
            Some(Toward::Next)
        } else if gradient[point - 1] < 0.0 {
            Some(Toward::Previous)
        } else {
            None
        };

        match flow {
            None => stability.push(Stability::Stable),
            Some(toward) => {
                let target = arrow_target(saddle_points, i, toward, real_offset)?;
                stability.push(Stability::Unstable);
                directions.push(FlowDirection {
                    from: point,
                    to: PopulationState::new(target / span)?,
                });
            }
        }
    }

    Ok(Classification {
        stability,
        directions,
    })
}

/// Classifies with the conventional arrow offset of [`DEFAULT_OFFSET`].
///
/// # Errors
///
/// Same conditions as [`classify`].
pub fn classify_with_default_offset(
    gradient: &[f64],
    saddle_points: &[usize],
) -> Result<Classification, ClassifyError> {
    classify(gradient, saddle_points, DEFAULT_OFFSET)
}

fn validate_saddle_points(saddle_points: &[usize], nb_points: usize) -> Result<(), ClassifyError> {
    for (position, &index) in saddle_points.iter().enumerate() {
        if index >= nb_points {
            return Err(ClassifyError::SaddleIndexOutOfBounds { index, nb_points });
        }
        if position > 0 && saddle_points[position - 1] >= index {
            return Err(ClassifyError::SaddleIndicesNotAscending { position });
        }
    }
    Ok(())
}

/// Looks up the neighboring candidate in grid units and applies the offset,
/// pulling the target toward the unstable state the arrow leaves.
fn arrow_target(
    saddle_points: &[usize],
    position: usize,
    toward: Toward,
    real_offset: f64,
) -> Result<f64, ClassifyError> {
    let neighbor = match toward {
        Toward::Next => saddle_points.get(position + 1).copied(),
        Toward::Previous => position
            .checked_sub(1)
            .and_then(|previous| saddle_points.get(previous).copied()),
    }
    .ok_or(ClassifyError::MissingNeighbor { position })?;

    Ok(match toward {
        Toward::Next => neighbor as f64 - real_offset,
        Toward::Previous => neighbor as f64 + real_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn classifies_the_reference_gradient() {
        // 5-point axis with a stable state at 1, an unstable state at 2
        // flowing toward 3, and a stable state at 3.
        let gradient = [0.1, -0.2, 0.0, 0.2, -0.1];
        let saddle_points = [1, 2, 3];

        let result = classify(&gradient, &saddle_points, 0.01).unwrap();

        assert_eq!(
            result.stability,
            vec![Stability::Stable, Stability::Unstable, Stability::Stable]
        );
        assert_eq!(result.directions.len(), 1);
        assert_eq!(result.directions[0].from, 2);
        assert_relative_eq!(result.directions[0].to.get(), (3.0 - 0.04) / 4.0);
    }

    #[test]
    fn arrow_targets_round_trip_to_the_neighboring_candidate() {
        let gradient = [0.1, -0.2, 0.0, 0.2, -0.1];
        let saddle_points = [1, 2, 3];
        let offset = 0.01;

        let result = classify(&gradient, &saddle_points, offset).unwrap();

        let nb_points = gradient.len();
        let real_offset = offset * (nb_points - 1) as f64;
        for direction in &result.directions {
            let raw = direction.to.get() * (nb_points - 1) as f64;
            // The single unstable state here flows toward the next candidate.
            assert_relative_eq!(raw + real_offset, 3.0);
        }
    }

    #[test]
    fn left_boundary_tests_only_the_right_neighbor() {
        // Positive gradient above state 0 pushes flow up and out of it.
        let gradient = [0.0, 0.3, 0.3, 0.0];
        let saddle_points = [0, 3];

        let result = classify(&gradient, &saddle_points, 0.01).unwrap();

        assert_eq!(
            result.stability,
            vec![Stability::Unstable, Stability::Stable]
        );
        assert_eq!(result.directions[0].from, 0);
        assert_relative_eq!(result.directions[0].to.get(), (3.0 - 0.03) / 3.0);
    }

    #[test]
    fn right_boundary_tests_only_the_left_neighbor() {
        let gradient = [0.0, 0.3, -0.3, 0.0];
        let saddle_points = [3];

        // gradient[2] < 0, so state 3 is unstable, but it is the only
        // candidate in the list and has no neighbor to flow toward.
        let result = classify(&gradient, &saddle_points, 0.01);

        assert_eq!(result, Err(ClassifyError::MissingNeighbor { position: 0 }));
    }

    #[test]
    fn coexistence_gradient_flows_inward_from_both_ends() {
        // Hawk-dove-like shape: both boundary states repel, the interior
        // candidate attracts.
        let gradient = [0.0, 0.2, 0.1, 0.0, -0.1, -0.2, 0.0];
        let saddle_points = [0, 3, 6];

        let result = classify(&gradient, &saddle_points, 0.01).unwrap();

        assert_eq!(
            result.stability,
            vec![Stability::Unstable, Stability::Stable, Stability::Unstable]
        );
        assert_eq!(result.directions.len(), 2);

        assert_eq!(result.directions[0].from, 0);
        assert_relative_eq!(result.directions[0].to.get(), (3.0 - 0.06) / 6.0);

        assert_eq!(result.directions[1].from, 6);
        assert_relative_eq!(result.directions[1].to.get(), (3.0 + 0.06) / 6.0);
    }

    #[test]
    fn exactly_zero_neighbors_count_as_stable() {
        // Strict sign tests: a zero gradient on both sides is not outflow.
        let gradient = [0.0, 0.0, 0.0];
        let saddle_points = [0, 1, 2];

        let result = classify(&gradient, &saddle_points, 0.01).unwrap();

        assert!(result.stability.iter().all(|s| s.is_stable()));
        assert!(result.directions.is_empty());
    }

    #[test]
    fn rejects_short_gradients() {
        assert_eq!(
            classify(&[0.0], &[0], 0.01),
            Err(ClassifyError::GradientTooShort { len: 1 })
        );
        assert_eq!(
            classify(&[], &[], 0.01),
            Err(ClassifyError::GradientTooShort { len: 0 })
        );
    }

    #[test]
    fn rejects_out_of_bounds_candidates() {
        assert_eq!(
            classify(&[0.0, 1.0, 0.0], &[1, 3], 0.01),
            Err(ClassifyError::SaddleIndexOutOfBounds {
                index: 3,
                nb_points: 3,
            })
        );
    }

    #[test]
    fn rejects_unsorted_and_duplicate_candidates() {
        assert_eq!(
            classify(&[0.0, 1.0, 0.0, 1.0], &[2, 1], 0.01),
            Err(ClassifyError::SaddleIndicesNotAscending { position: 1 })
        );
        assert_eq!(
            classify(&[0.0, 1.0, 0.0, 1.0], &[1, 1], 0.01),
            Err(ClassifyError::SaddleIndicesNotAscending { position: 1 })
        );
    }

    #[test]
    fn rejects_bad_offsets() {
        let gradient = [0.1, -0.2, 0.0, 0.2, -0.1];

        assert_eq!(
            classify(&gradient, &[1], -0.01),
            Err(ClassifyError::InvalidOffset { offset: -0.01 })
        );
        assert!(matches!(
            classify(&gradient, &[1], f64::NAN),
            Err(ClassifyError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn rejects_offsets_that_push_targets_off_the_axis() {
        // real_offset = 0.6 * 6 = 3.6 grid units, more than the spacing
        // between candidates 0 and 3, so the target of the arrow leaving
        // state 0 lands below zero.
        let gradient = [0.0, 0.2, 0.1, 0.0, -0.1, -0.2, 0.0];
        let saddle_points = [0, 3, 6];

        assert!(matches!(
            classify(&gradient, &saddle_points, 0.6),
            Err(ClassifyError::DirectionOutOfRange(_))
        ));
    }

    #[test]
    fn default_offset_matches_explicit_call() {
        let gradient = [0.1, -0.2, 0.0, 0.2, -0.1];
        let saddle_points = [1, 2, 3];

        assert_eq!(
            classify_with_default_offset(&gradient, &saddle_points).unwrap(),
            classify(&gradient, &saddle_points, DEFAULT_OFFSET).unwrap()
        );
    }
}

//! Combinatorial distributions for sampled interaction groups.
//!
//! Group-sampling analyses draw interaction groups either without
//! replacement from a finite population (multivariate hypergeometric) or
//! with replacement from the population's strategy frequencies
//! (multinomial). Both densities reduce to products of binomial
//! coefficients and factorials, computed here in integer arithmetic for as
//! long as possible before the final conversion to `f64`.

use thiserror::Error;

/// Largest `n` whose factorial still fits in an `f64`.
const MAX_FACTORIAL_ARG: u64 = 170;

/// Errors that can occur when evaluating a distribution.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DistributionError {
    /// The per-strategy slices must line up.
    #[error("sample and population counts must have the same length, got {sample} and {population}")]
    LengthMismatch { sample: usize, population: usize },

    /// No group of this size can be drawn from the population.
    #[error("cannot draw a sample of {sample_size} from a population of {population_size}")]
    SampleExceedsPopulation {
        sample_size: u64,
        population_size: u64,
    },

    /// `n!` overflows an `f64` beyond `n = 170`.
    #[error("group size must be at most {MAX_FACTORIAL_ARG} to avoid overflow, got {0}")]
    FactorialOverflow(u64),
}

/// Computes the binomial coefficient `C(n, k)`.
///
/// Returns `0` when `k > n`. Uses the multiplicative form over the smaller
/// of `k` and `n - k`, dividing as it goes so intermediates stay exact.
#[must_use]
pub fn binomial_coefficient(n: u64, k: u64) -> u128 {
    if k > n {
        return 0;
    }

    // C(n, k) = C(n, n - k), so iterate over the shorter product.
    let n_terms = k.min(n - k) as u128;
    let m = u128::from(n) + 1;

    let mut result: u128 = 1;
    for i in 1..=n_terms {
        result *= m - i;
        result /= i;
    }
    result
}

/// Evaluates the multivariate hypergeometric PDF.
///
/// Returns the probability of drawing exactly `sample_counts` when a group
/// of `sum(sample_counts)` members is sampled without replacement from a
/// population holding `population_counts[i]` members of each strategy:
/// the product of the per-strategy binomials over `C(m, n)`, with `m` the
/// population size and `n` the group size.
///
/// # Errors
///
/// Returns [`DistributionError::LengthMismatch`] if the two slices differ
/// in length, or [`DistributionError::SampleExceedsPopulation`] if the
/// group is larger than the population.
pub fn multivariate_hypergeometric_pdf(
    sample_counts: &[u64],
    population_counts: &[u64],
) -> Result<f64, DistributionError> {
    if sample_counts.len() != population_counts.len() {
        return Err(DistributionError::LengthMismatch {
            sample: sample_counts.len(),
            population: population_counts.len(),
        });
    }

    let population_size: u64 = population_counts.iter().sum();
    let sample_size: u64 = sample_counts.iter().sum();

    // The number of unordered groups of this size in the whole population.
    let denominator = binomial_coefficient(population_size, sample_size);
    if denominator == 0 {
        return Err(DistributionError::SampleExceedsPopulation {
            sample_size,
            population_size,
        });
    }

    // The number of unordered groups hitting the requested per-strategy counts.
    let mut numerator: u128 = 1;
    for (&sample, &population) in sample_counts.iter().zip(population_counts) {
        numerator *= binomial_coefficient(population, sample);
    }

    Ok(numerator as f64 / denominator as f64)
}

/// Evaluates the multinomial PMF.
///
/// Returns the probability of assembling exactly `group_configuration` when
/// each of the group's `n = sum(group_configuration)` members independently
/// adopts strategy `i` with probability `p[i]`. The factorial ratio is
/// folded into the probability product one division at a time, which keeps
/// intermediates near `1` instead of multiplying tiny powers by a huge
/// coefficient.
///
/// # Errors
///
/// Returns [`DistributionError::LengthMismatch`] if the slices differ in
/// length, or [`DistributionError::FactorialOverflow`] if the group is
/// larger than 170 members.
pub fn multinomial_pmf(
    group_configuration: &[u64],
    p: &[f64],
) -> Result<f64, DistributionError> {
    if group_configuration.len() != p.len() {
        return Err(DistributionError::LengthMismatch {
            sample: group_configuration.len(),
            population: p.len(),
        });
    }

    let n: u64 = group_configuration.iter().sum();
    if n > MAX_FACTORIAL_ARG {
        return Err(DistributionError::FactorialOverflow(n));
    }

    let mut probability = 1.0;
    for (&count, &p_i) in group_configuration.iter().zip(p) {
        for j in 1..=count {
            probability *= p_i / j as f64;
        }
    }

    Ok(probability * factorial(n))
}

fn factorial(n: u64) -> f64 {
    (1..=n).map(|value| value as f64).product()
}

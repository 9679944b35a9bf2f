use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::number::{decimal_length, pow10};
use crate::core::{Limit, ScaleCandidate};

/// Lower is better: tight fit to the padded base limit, value count close to
/// the requested tick count, and a step with few decimals.
#[must_use]
pub fn candidate_score(candidate: &ScaleCandidate, base_limit: Limit, requested: usize) -> f64 {
    let limit = candidate.scale.limit;
    let fit = (limit.max - base_limit.max).abs() + (base_limit.min - limit.min).abs();
    let count_gap = (requested as f64 - candidate.value_count as f64)
        .abs()
        .max(1.0);
    let decimals = pow10(decimal_length(candidate.scale.step) as i32);
    fit * count_gap * decimals
}

/// Picks the lowest-scoring candidate. `requested[i]` is the tick count that
/// produced `candidates[i]`; ties keep the earliest candidate.
#[must_use]
pub fn select_candidate(
    candidates: &[ScaleCandidate],
    requested: &[usize],
    base_limit: Limit,
) -> Option<ScaleCandidate> {
    candidates
        .iter()
        .zip(requested)
        .map(|(candidate, &requested)| {
            let score = candidate_score(candidate, base_limit, requested);
            trace!(
                requested,
                value_count = candidate.value_count,
                min = candidate.scale.limit.min,
                max = candidate.scale.limit.max,
                step = candidate.scale.step,
                score,
                "scored scale candidate"
            );
            (OrderedFloat(score), *candidate)
        })
        .min_by_key(|(score, _)| *score)
        .map(|(_, candidate)| candidate)
}

use smallvec::SmallVec;

use crate::core::number::{add, sub};
use crate::core::{
    BubbleExtent, CandidateContext, ChartKind, IntegerScaleAdapter, Limit, Scale, ScaleBounds,
    ScaleCandidate, build_candidate, calculate_limit, select_candidate,
};
use crate::error::{ScaleError, ScaleResult};

/// Inputs of one standard (non-fixed) scale search, in data space.
#[derive(Debug, Clone, Copy)]
pub struct ScaleSearch<'a> {
    pub data_limit: Limit,
    pub bounds: ScaleBounds,
    pub chart_kind: ChartKind,
    pub bubbles: &'a [BubbleExtent],
    pub tick_counts: &'a [usize],
}

/// Full candidate search: integer rescale, base limit, one candidate per tick
/// count, selection, rescale back.
pub fn search_scale(search: &ScaleSearch<'_>) -> ScaleResult<Scale> {
    if search.tick_counts.is_empty() {
        return Err(ScaleError::InvalidTickCount { tick_count: 0 });
    }

    let adapter = IntegerScaleAdapter::for_data_limit(search.data_limit);
    let data_limit = adapter.scale_limit(search.data_limit);
    let bounds = ScaleBounds::new(
        search.bounds.min.map(|min| adapter.scale_value(min)),
        search.bounds.max.map(|max| adapter.scale_value(max)),
    );
    let bubbles: Vec<BubbleExtent> = search
        .bubbles
        .iter()
        .map(|bubble| adapter.scale_bubble(*bubble))
        .collect();

    let (base_limit, bounds) =
        bounded_base_limit(calculate_limit(data_limit.min, data_limit.max), bounds);
    let context = CandidateContext::new(bounds, search.chart_kind).with_bubbles(&bubbles);
    let candidates = search
        .tick_counts
        .iter()
        .map(|&tick_count| build_candidate(base_limit, data_limit, tick_count, &context))
        .collect::<ScaleResult<SmallVec<[ScaleCandidate; 8]>>>()?;

    let selected = select_candidate(&candidates, search.tick_counts, base_limit)
        .ok_or(ScaleError::InvalidTickCount { tick_count: 0 })?;
    Ok(adapter.restore(selected.scale))
}

/// Applies explicit bounds to the padded data limit.
///
/// Inverted bound pairs are swapped and an equal pair keeps only `min`. A single
/// bound that leaves no room for the free side keeps its value and the free
/// side is rebuilt from the padded data span.
fn bounded_base_limit(padded: Limit, bounds: ScaleBounds) -> (Limit, ScaleBounds) {
    let bounds = match (bounds.min, bounds.max) {
        (Some(min), Some(max)) if min > max => ScaleBounds::new(Some(max), Some(min)),
        (Some(min), Some(max)) if min == max => ScaleBounds::new(Some(min), None),
        _ => bounds,
    };
    let limit = bounds.apply(padded);
    if limit.min < limit.max {
        return (limit, bounds);
    }

    let span = padded.span();
    let limit = match (bounds.min, bounds.max) {
        (Some(min), None) => {
            let max = add(min, span);
            Limit::new(min, if max > min { max } else { min + min.abs() })
        }
        (None, Some(max)) => {
            let min = sub(max, span);
            Limit::new(if min < max { min } else { max - max.abs() }, max)
        }
        _ => padded,
    };
    (limit, bounds)
}

#[cfg(test)]
mod tests {
    use super::bounded_base_limit;
    use crate::core::{Limit, ScaleBounds};

    #[test]
    fn bound_past_the_data_rebuilds_the_free_side() {
        let padded = Limit::new(8.5, 41.5);

        let (limit, _) = bounded_base_limit(padded, ScaleBounds::new(Some(100.0), None));
        assert_eq!(limit, Limit::new(100.0, 133.0));

        let (limit, _) = bounded_base_limit(padded, ScaleBounds::new(None, Some(5.0)));
        assert_eq!(limit, Limit::new(-28.0, 5.0));
    }

    #[test]
    fn inverted_and_equal_bound_pairs_are_normalized() {
        let padded = Limit::new(0.0, 10.0);

        let (limit, bounds) = bounded_base_limit(padded, ScaleBounds::new(Some(50.0), Some(20.0)));
        assert_eq!(limit, Limit::new(20.0, 50.0));
        assert_eq!(bounds, ScaleBounds::new(Some(20.0), Some(50.0)));

        let (limit, bounds) = bounded_base_limit(padded, ScaleBounds::new(Some(30.0), Some(30.0)));
        assert_eq!(limit, Limit::new(30.0, 40.0));
        assert_eq!(bounds.max, None);
    }

    #[test]
    fn huge_bound_still_gets_a_positive_width() {
        let (limit, _) =
            bounded_base_limit(Limit::new(0.0, 1.05), ScaleBounds::new(Some(1e20), None));
        assert!(limit.min < limit.max);
    }
}

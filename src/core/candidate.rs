//! Builds one complete scale candidate for a hypothesized tick count.
//!
//! The builder works in the integer space produced by
//! [`crate::core::IntegerScaleAdapter`]; every bound it touches (base limit,
//! data limit, explicit bounds, bubbles) must already be rescaled.

use crate::core::number::{add, div, floor_to_multiple, modulo, mul, sub};
use crate::core::step::normalize_step;
use crate::core::{BubbleExtent, ChartKind, Limit, Scale, ScaleCandidate};
use crate::error::{ScaleError, ScaleResult};

/// Explicit axis bounds requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScaleBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ScaleBounds {
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Replaces the padded base limit with any explicit bound.
    #[must_use]
    pub fn apply(self, limit: Limit) -> Limit {
        Limit::new(
            self.min.unwrap_or(limit.min),
            self.max.unwrap_or(limit.max),
        )
    }
}

/// Inputs shared by every candidate of one scale search.
#[derive(Debug, Clone, Copy)]
pub struct CandidateContext<'a> {
    pub bounds: ScaleBounds,
    pub chart_kind: ChartKind,
    pub bubbles: &'a [BubbleExtent],
}

impl<'a> CandidateContext<'a> {
    #[must_use]
    pub fn new(bounds: ScaleBounds, chart_kind: ChartKind) -> Self {
        Self {
            bounds,
            chart_kind,
            bubbles: &[],
        }
    }

    #[must_use]
    pub fn with_bubbles(mut self, bubbles: &'a [BubbleExtent]) -> Self {
        self.bubbles = bubbles;
        self
    }
}

/// Computes `{limit, step, value_count}` for `tick_count` requested ticks.
pub fn build_candidate(
    base_limit: Limit,
    data_limit: Limit,
    tick_count: usize,
    context: &CandidateContext<'_>,
) -> ScaleResult<ScaleCandidate> {
    if tick_count < 2 {
        return Err(ScaleError::InvalidTickCount { tick_count });
    }

    let step = initial_step(base_limit, tick_count);
    let mut limit = align_limit_to_step(base_limit, step);
    limit = add_edge_padding(limit, data_limit, step, context);
    limit = minimize_limit(limit, data_limit, step, tick_count, context.bounds);
    let mut scale = refine_step(Scale::new(limit, step), tick_count);
    if context.chart_kind.is_bubble() {
        scale = expand_for_large_bubbles(scale, context.bubbles);
    }

    Ok(ScaleCandidate::new(scale))
}

fn initial_step(base_limit: Limit, tick_count: usize) -> f64 {
    let intervals = (tick_count - 1) as f64;
    let step = normalize_step(div(base_limit.span(), intervals));
    if step.is_finite() && step > 0.0 {
        return step;
    }
    // Zero-width or inverted bases: size the step from the bound magnitude.
    let magnitude = base_limit.min.abs().max(base_limit.max.abs());
    let step = normalize_step(div(magnitude, intervals));
    if step.is_finite() && step > 0.0 {
        step
    } else {
        1.0
    }
}

fn align_limit_to_step(base_limit: Limit, step: f64) -> Limit {
    let min = floor_to_multiple(base_limit.min, step);
    let steps = div(sub(base_limit.max, min), step).ceil().max(1.0);
    Limit::new(min, add(min, mul(step, steps)))
}

fn add_edge_padding(
    mut limit: Limit,
    data_limit: Limit,
    step: f64,
    context: &CandidateContext<'_>,
) -> Limit {
    let line_type = context.chart_kind.is_line_type();
    if context.bounds.min.is_none()
        && (line_type || data_limit.min < 0.0)
        && limit.min == data_limit.min
    {
        limit.min = sub(limit.min, step);
    }
    if context.bounds.max.is_none()
        && (line_type || data_limit.max > 0.0)
        && limit.max == data_limit.max
    {
        limit.max = add(limit.max, step);
    }
    limit
}

fn minimize_limit(
    limit: Limit,
    data_limit: Limit,
    step: f64,
    tick_count: usize,
    bounds: ScaleBounds,
) -> Limit {
    let min_bound = bounds.min.unwrap_or_else(|| sub(data_limit.min, 1.0));
    let max_bound = bounds.max.unwrap_or_else(|| add(data_limit.max, 1.0));
    let mut minimized = limit;

    for shrink in 1..tick_count {
        let amount = mul(step, shrink as f64);
        let candidate_min = add(limit.min, amount);
        let candidate_max = sub(limit.max, amount);

        if data_limit.min <= candidate_min && data_limit.max >= candidate_max {
            break;
        }
        if candidate_min <= min_bound && candidate_min < minimized.max {
            minimized.min = candidate_min;
        }
        if candidate_max >= max_bound && candidate_max > minimized.min {
            minimized.max = candidate_max;
        }
    }

    minimized
}

/// Halves an even step when the doubled interval count lands at least as close
/// to `tick_count`; counts compared here are intervals, not ticks.
fn refine_step(scale: Scale, tick_count: usize) -> Scale {
    let value_count = scale.value_count();
    let step_is_even = modulo(scale.step, 2.0) == 0.0;
    let requested = tick_count as f64;
    let current_gap = (requested - value_count as f64).abs();
    let halved_gap = (requested - (value_count * 2) as f64).abs();

    if step_is_even && halved_gap <= current_gap {
        Scale::new(scale.limit, div(scale.step, 2.0))
    } else {
        scale
    }
}

fn expand_for_large_bubbles(scale: Scale, bubbles: &[BubbleExtent]) -> Scale {
    let Scale { mut limit, step } = scale;
    let large = || bubbles.iter().filter(|bubble| bubble.is_large());

    if large().any(|bubble| bubble.value == limit.min) {
        limit.min = sub(limit.min, step);
    }
    if large().any(|bubble| bubble.value == limit.max) {
        limit.max = add(limit.max, step);
    }

    Scale::new(limit, step)
}

use crate::core::Limit;
use crate::core::number::{add, div, sub};

/// Upper bound used when every data value is the same non-negative number.
pub const FLAT_DATA_MIN_MAX: f64 = 5.0;

/// Share of the data span added as padding above the data (and below it, when
/// the data sits far from zero).
const PADDING_DIVISOR: f64 = 20.0;

/// The bottom bound anchors at zero unless `max / ZERO_ANCHOR_RATIO <= min`.
const ZERO_ANCHOR_RATIO: f64 = 6.0;

/// Extremes of the finite `values`; empty input collapses to `{0, 0}`.
#[must_use]
pub fn data_limit(values: &[f64]) -> Limit {
    let mut finite = values.iter().copied().filter(|value| value.is_finite());
    let Some(first) = finite.next() else {
        return Limit::new(0.0, 0.0);
    };
    finite.fold(Limit::new(first, first), |limit, value| {
        Limit::new(limit.min.min(value), limit.max.max(value))
    })
}

/// Pads the raw data extremes into a visually sensible base range.
#[must_use]
pub fn calculate_limit(data_min: f64, data_max: f64) -> Limit {
    if !data_min.is_finite() || !data_max.is_finite() {
        return flat_limit(0.0);
    }
    let (min, max) = if data_min <= data_max {
        (data_min, data_max)
    } else {
        (data_max, data_min)
    };
    if min == max {
        return flat_limit(min);
    }

    let (save_min, min, max) = if min < 0.0 {
        (min, 0.0, sub(max, min))
    } else {
        (0.0, min, max)
    };

    let pad = div(sub(max, min), PADDING_DIVISOR);
    let limit_max = add(add(max, pad), save_min);
    let limit_min = if max / ZERO_ANCHOR_RATIO > min {
        save_min
    } else {
        add(sub(min, pad), save_min)
    };

    Limit::new(limit_min, limit_max)
}

fn flat_limit(value: f64) -> Limit {
    if value < 0.0 {
        Limit::new(value, 0.0)
    } else {
        Limit::new(0.0, value.max(FLAT_DATA_MIN_MAX))
    }
}

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ScaleError, ScaleResult};

/// Tick counts tried by one scale search; axes rarely need more than a handful.
pub type TickCountCandidates = SmallVec<[usize; 8]>;

/// Pixel density controls for deriving tick-count hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickDensityTuning {
    /// Densest spacing; bounds the largest tick count.
    pub min_px_per_tick: f64,
    /// Sparsest spacing; bounds the smallest tick count.
    pub max_px_per_tick: f64,
    pub min_tick_count: usize,
    /// Upper bound on any hypothesis, whatever the axis length.
    pub max_tick_count: usize,
}

impl Default for TickDensityTuning {
    fn default() -> Self {
        Self {
            min_px_per_tick: 40.0,
            max_px_per_tick: 60.0,
            min_tick_count: 3,
            max_tick_count: 64,
        }
    }
}

impl TickDensityTuning {
    pub fn validate(self) -> ScaleResult<Self> {
        if !self.min_px_per_tick.is_finite()
            || !self.max_px_per_tick.is_finite()
            || self.min_px_per_tick <= 0.0
            || self.max_px_per_tick < self.min_px_per_tick
        {
            return Err(ScaleError::InvalidConfig(
                "tick spacing must be finite, > 0 and min <= max".to_owned(),
            ));
        }
        if self.min_tick_count < 2 {
            return Err(ScaleError::InvalidConfig(
                "min tick count must be >= 2".to_owned(),
            ));
        }
        if self.max_tick_count < self.min_tick_count {
            return Err(ScaleError::InvalidConfig(
                "max tick count must be >= min tick count".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Tick-count hypotheses for an axis of `axis_size_px` pixels:
/// `[max(min_tick_count, floor(size / max_px)), floor(size / min_px) + 1)`,
/// clamped to `max_tick_count`.
///
/// An empty range collapses to its start so a search always has at least one
/// hypothesis.
#[must_use]
pub fn candidate_tick_counts(axis_size_px: f64, tuning: TickDensityTuning) -> TickCountCandidates {
    let lower_bound = tuning.min_tick_count.max(2);
    let upper_bound = tuning.max_tick_count.max(lower_bound);
    if !axis_size_px.is_finite() || axis_size_px <= 0.0 {
        return SmallVec::from_elem(lower_bound, 1);
    }

    let start = ((axis_size_px / tuning.max_px_per_tick).floor() as usize)
        .clamp(lower_bound, upper_bound);
    let end = ((axis_size_px / tuning.min_px_per_tick).floor() as usize)
        .saturating_add(1)
        .min(upper_bound.saturating_add(1));
    if end <= start {
        return SmallVec::from_elem(start, 1);
    }
    (start..end).collect()
}

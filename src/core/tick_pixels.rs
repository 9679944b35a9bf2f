use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

/// Half-open pixel interval `[start, end)` owned by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRange {
    pub start: f64,
    pub end: f64,
}

impl TickRange {
    #[must_use]
    pub fn contains(self, position: f64) -> bool {
        position >= self.start && position < self.end
    }
}

/// Per-tick ownership intervals used for pointer hit-testing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOwnership {
    ranges: Vec<TickRange>,
}

impl TickOwnership {
    #[must_use]
    pub fn ranges(&self) -> &[TickRange] {
        &self.ranges
    }

    /// Index of the tick owning `position`, if any.
    #[must_use]
    pub fn find_index(&self, position: f64) -> Option<usize> {
        if !position.is_finite() {
            return None;
        }
        self.ranges.iter().position(|range| range.contains(position))
    }
}

fn validate_size(size: f64) -> ScaleResult<()> {
    if !size.is_finite() || size < 1.0 {
        return Err(ScaleError::InvalidAxisSize { size });
    }
    Ok(())
}

/// Pixel offsets of `tick_count` evenly spaced ticks along `size` pixels.
///
/// The first tick sits on `offset` and the last one exactly on
/// `size - 1 + offset`, whatever rounding happened in between.
pub fn make_tick_pixel_positions(size: f64, tick_count: usize, offset: i64) -> ScaleResult<Vec<i64>> {
    validate_size(size)?;
    if tick_count < 2 {
        return Err(ScaleError::InvalidTickCount { tick_count });
    }

    let last_px = size - 1.0;
    let step = last_px / (tick_count - 1) as f64;
    let mut positions: Vec<i64> = (0..tick_count)
        .map(|index| (index as f64 * step).round() as i64 + offset)
        .collect();
    if let Some(last) = positions.last_mut() {
        *last = last_px.round() as i64 + offset;
    }
    Ok(positions)
}

/// Ownership intervals for point-on-tick charts (line, area): each tick owns
/// half an interval on both sides.
pub fn make_line_tick_ownership(size: f64, tick_count: usize) -> ScaleResult<TickOwnership> {
    validate_size(size)?;
    if tick_count < 2 {
        return Err(ScaleError::InvalidTickCount { tick_count });
    }

    let interval = (size + 1.0) / (tick_count - 1) as f64;
    let half = interval / 2.0;
    let mut ranges: Vec<TickRange> = (0..tick_count)
        .map(|index| {
            let center = index as f64 * interval;
            TickRange {
                start: center - half,
                end: center + half,
            }
        })
        .collect();
    if let Some(last) = ranges.last_mut() {
        last.end -= 1.0;
    }
    Ok(TickOwnership { ranges })
}

/// Ownership intervals for band charts (bar, column): each category owns one
/// equal band.
pub fn make_band_tick_ownership(size: f64, band_count: usize) -> ScaleResult<TickOwnership> {
    validate_size(size)?;
    if band_count == 0 {
        return Err(ScaleError::InvalidTickCount {
            tick_count: band_count,
        });
    }

    let band = size / band_count as f64;
    let ranges = (0..band_count)
        .map(|index| TickRange {
            start: index as f64 * band,
            end: (index + 1) as f64 * band,
        })
        .collect();
    Ok(TickOwnership { ranges })
}

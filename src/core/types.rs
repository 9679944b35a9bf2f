use serde::{Deserialize, Serialize};

use crate::core::number;

/// Numeric span displayed by an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub min: f64,
    pub max: f64,
}

impl Limit {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        number::sub(self.max, self.min)
    }

    /// Symmetric limit around zero that still covers `self`.
    #[must_use]
    pub fn mirrored(self) -> Self {
        let extent = self.min.abs().max(self.max.abs());
        Self::new(-extent, extent)
    }
}

/// Finished axis scale: a limit and the distance between adjacent ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub limit: Limit,
    pub step: f64,
}

impl Scale {
    #[must_use]
    pub fn new(limit: Limit, step: f64) -> Self {
        Self { limit, step }
    }

    /// Number of step intervals between `limit.min` and `limit.max`.
    #[must_use]
    pub fn value_count(self) -> usize {
        if self.step <= 0.0 || !self.step.is_finite() {
            return 0;
        }
        let count = (self.limit.span() / self.step).round();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    /// Number of labelled ticks, `value_count + 1`.
    #[must_use]
    pub fn tick_count(self) -> usize {
        self.value_count() + 1
    }

    /// Tick values from `limit.min` to `limit.max`, ascending.
    #[must_use]
    pub fn values(self) -> Vec<f64> {
        (0..self.tick_count())
            .map(|index| number::add(self.limit.min, number::mul(self.step, index as f64)))
            .collect()
    }
}

/// One fully computed scale for a hypothesized tick count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleCandidate {
    pub scale: Scale,
    pub value_count: usize,
}

impl ScaleCandidate {
    #[must_use]
    pub fn new(scale: Scale) -> Self {
        Self {
            value_count: scale.value_count(),
            scale,
        }
    }
}

/// Chart families whose rules change how the value axis is padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartKind {
    Bar,
    #[default]
    Column,
    Line,
    Area,
    Radial,
    Scatter,
    Bubble,
}

impl ChartKind {
    /// Line-like charts always keep a step of breathing room at data extremes.
    #[must_use]
    pub fn is_line_type(self) -> bool {
        matches!(self, Self::Line | Self::Area | Self::Radial)
    }

    #[must_use]
    pub fn is_bar_type(self) -> bool {
        matches!(self, Self::Bar | Self::Column)
    }

    #[must_use]
    pub fn allows_stacking(self) -> bool {
        matches!(self, Self::Bar | Self::Column | Self::Area)
    }

    #[must_use]
    pub fn is_bubble(self) -> bool {
        matches!(self, Self::Bubble)
    }
}

/// Stacking mode of a stack-capable chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackType {
    Normal,
    Percent,
}

/// A bubble value together with its radius relative to the largest bubble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleExtent {
    pub value: f64,
    pub radius_ratio: f64,
}

impl BubbleExtent {
    #[must_use]
    pub fn new(value: f64, radius_ratio: f64) -> Self {
        Self {
            value,
            radius_ratio,
        }
    }

    /// Bubbles drawn larger than half the maximum radius get clipped at the
    /// axis boundary unless the bound is pushed out.
    #[must_use]
    pub fn is_large(self) -> bool {
        self.radius_ratio > 0.5
    }
}

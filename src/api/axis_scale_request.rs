use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, StackType};

use super::{ScaleData, ScaleOptions};

/// Everything one render pass knows about a value axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScaleRequest {
    pub data: ScaleData,
    /// Available axis length in pixels.
    pub axis_size_px: f64,
    #[serde(default)]
    pub chart_kind: ChartKind,
    #[serde(default)]
    pub options: ScaleOptions,
}

impl AxisScaleRequest {
    #[must_use]
    pub fn new(data: ScaleData, axis_size_px: f64, chart_kind: ChartKind) -> Self {
        Self {
            data,
            axis_size_px,
            chart_kind,
            options: ScaleOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ScaleOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn is_diverging(&self) -> bool {
        self.options.diverging && self.chart_kind.is_bar_type()
    }

    #[must_use]
    pub fn is_percent_stacked(&self) -> bool {
        self.chart_kind.allows_stacking() && self.options.stack_type == Some(StackType::Percent)
    }

    #[must_use]
    pub fn is_normal_stacked(&self) -> bool {
        self.chart_kind.allows_stacking() && self.options.stack_type == Some(StackType::Normal)
    }
}

use serde::{Deserialize, Serialize};

use crate::core::{StackType, TickDensityTuning};
use crate::error::{ScaleError, ScaleResult};

/// Caller-facing overrides for one value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScaleOptions {
    /// Literal lower bound; disables bottom padding when set.
    pub min: Option<f64>,
    /// Literal upper bound; disables top padding when set.
    pub max: Option<f64>,
    pub stack_type: Option<StackType>,
    /// Mirrors bar/column charts around a shared zero baseline.
    pub diverging: bool,
}

impl ScaleOptions {
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_stack_type(mut self, stack_type: StackType) -> Self {
        self.stack_type = Some(stack_type);
        self
    }

    #[must_use]
    pub fn with_diverging(mut self, diverging: bool) -> Self {
        self.diverging = diverging;
        self
    }

    /// Explicit bounds that are not finite are treated as absent.
    #[must_use]
    pub(crate) fn finite_min(self) -> Option<f64> {
        self.min.filter(|value| value.is_finite())
    }

    #[must_use]
    pub(crate) fn finite_max(self) -> Option<f64> {
        self.max.filter(|value| value.is_finite())
    }
}

/// Direction the value axis runs on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisOrientation {
    /// Labels are listed top to bottom, i.e. from `max` down to `min`.
    #[default]
    Vertical,
    /// Labels are listed left to right, from `min` up to `max`.
    Horizontal,
}

/// Built-in label text transforms applied before any caller hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScaleLabelConfig {
    /// Groups integer digits by thousands with `,`.
    pub thousands_separator: bool,
    pub suffix: Option<String>,
}

/// Engine bootstrap configuration.
///
/// Serializable so host applications can persist axis setup alongside the rest
/// of their chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisScaleConfig {
    #[serde(default)]
    pub tick_density: TickDensityTuning,
    #[serde(default)]
    pub label: ScaleLabelConfig,
    #[serde(default)]
    pub orientation: AxisOrientation,
}

impl AxisScaleConfig {
    #[must_use]
    pub fn with_tick_density(mut self, tuning: TickDensityTuning) -> Self {
        self.tick_density = tuning;
        self
    }

    #[must_use]
    pub fn with_label_config(mut self, label: ScaleLabelConfig) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: AxisOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn validate(self) -> ScaleResult<Self> {
        self.tick_density.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ScaleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ScaleError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ScaleError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

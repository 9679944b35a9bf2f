use std::fmt;

use tracing::{debug, warn};

use crate::core::{Limit, Scale, candidate_tick_counts, make_tick_pixel_positions};
use crate::error::ScaleResult;

use super::label_format::{format_scale_labels, scale_label_values};
use super::stacked_scale_resolver::{ResolvedScale, ScalePath, resolve_scale};
use super::{
    AxisScaleConfig, AxisScaleRequest, LabelTextFormatterFn, LabelValueFormatterFn, ScaleData,
    ScaleOptions,
};

/// Per-chart scale engine.
///
/// Owns the request of the current render pass plus two memo slots (resolved
/// scale, formatted labels). Both slots are cleared together whenever the
/// request changes, which is how render/rerender/resize invalidate the axis.
pub struct AxisScaleEngine {
    request: AxisScaleRequest,
    config: AxisScaleConfig,
    value_formatter: Option<LabelValueFormatterFn>,
    text_formatters: Vec<LabelTextFormatterFn>,
    resolved: Option<ResolvedScale>,
    labels: Option<Vec<String>>,
}

impl fmt::Debug for AxisScaleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisScaleEngine")
            .field("request", &self.request)
            .field("config", &self.config)
            .field("has_value_formatter", &self.value_formatter.is_some())
            .field("text_formatters", &self.text_formatters.len())
            .field("resolved", &self.resolved)
            .finish_non_exhaustive()
    }
}

impl AxisScaleEngine {
    pub fn new(request: AxisScaleRequest, config: AxisScaleConfig) -> ScaleResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            request,
            config,
            value_formatter: None,
            text_formatters: Vec::new(),
            resolved: None,
            labels: None,
        })
    }

    #[must_use]
    pub fn request(&self) -> &AxisScaleRequest {
        &self.request
    }

    #[must_use]
    pub fn config(&self) -> &AxisScaleConfig {
        &self.config
    }

    /// Drops the memoized scale and labels.
    pub fn invalidate(&mut self) {
        if self.resolved.is_some() || self.labels.is_some() {
            debug!("invalidate axis scale caches");
        }
        self.resolved = None;
        self.labels = None;
    }

    pub fn set_request(&mut self, request: AxisScaleRequest) {
        self.request = request;
        self.invalidate();
    }

    pub fn set_data(&mut self, data: ScaleData) {
        self.request.data = data;
        self.invalidate();
    }

    pub fn set_options(&mut self, options: ScaleOptions) {
        self.request.options = options;
        self.invalidate();
    }

    /// Resize entry point; the tick-count hypotheses depend on the pixel length.
    pub fn set_axis_size(&mut self, axis_size_px: f64) {
        if self.request.axis_size_px != axis_size_px {
            self.request.axis_size_px = axis_size_px;
            self.invalidate();
        }
    }

    pub fn set_config(&mut self, config: AxisScaleConfig) -> ScaleResult<()> {
        self.config = config.validate()?;
        self.invalidate();
        Ok(())
    }

    pub fn set_value_formatter(&mut self, formatter: Option<LabelValueFormatterFn>) {
        self.value_formatter = formatter;
        self.labels = None;
    }

    pub fn push_text_formatter(&mut self, formatter: LabelTextFormatterFn) {
        self.text_formatters.push(formatter);
        self.labels = None;
    }

    pub fn clear_text_formatters(&mut self) {
        self.text_formatters.clear();
        self.labels = None;
    }

    fn resolved(&mut self) -> ScaleResult<ResolvedScale> {
        if let Some(resolved) = self.resolved {
            return Ok(resolved);
        }

        let dropped = self.request.data.non_finite_count();
        if dropped > 0 {
            warn!(dropped, "ignoring non-finite values in axis scale data");
        }

        let tick_counts =
            candidate_tick_counts(self.request.axis_size_px, self.config.tick_density);
        let resolved = resolve_scale(&self.request, &tick_counts)?;
        debug!(
            path = ?resolved.path,
            min = resolved.scale.limit.min,
            max = resolved.scale.limit.max,
            step = resolved.scale.step,
            tick_count = resolved.scale.tick_count(),
            "computed axis scale"
        );
        self.resolved = Some(resolved);
        Ok(resolved)
    }

    pub fn scale(&mut self) -> ScaleResult<Scale> {
        Ok(self.resolved()?.scale)
    }

    pub fn scale_path(&mut self) -> ScaleResult<ScalePath> {
        Ok(self.resolved()?.path)
    }

    pub fn limit(&mut self) -> ScaleResult<Limit> {
        Ok(self.scale()?.limit)
    }

    pub fn step(&mut self) -> ScaleResult<f64> {
        Ok(self.scale()?.step)
    }

    pub fn value_count(&mut self) -> ScaleResult<usize> {
        Ok(self.scale()?.value_count())
    }

    pub fn tick_count(&mut self) -> ScaleResult<usize> {
        Ok(self.scale()?.tick_count())
    }

    /// Labels from `min` to `max` by `step` (reversed on vertical axes), one
    /// per tick.
    pub fn formatted_scale_values(&mut self) -> ScaleResult<&[String]> {
        if self.labels.is_none() {
            let resolved = self.resolved()?;
            let values = scale_label_values(
                resolved.scale,
                self.config.orientation,
                resolved.mirrored_labels,
            );
            let labels = format_scale_labels(
                &values,
                resolved.scale.step,
                &self.config.label,
                self.value_formatter.as_ref(),
                &self.text_formatters,
            );
            self.labels = Some(labels);
        }
        Ok(self.labels.as_deref().unwrap_or_default())
    }

    /// Pixel offsets of the current ticks along the configured axis length.
    pub fn tick_pixel_positions(&mut self, offset: i64) -> ScaleResult<Vec<i64>> {
        let tick_count = self.tick_count()?;
        make_tick_pixel_positions(self.request.axis_size_px, tick_count, offset)
    }
}

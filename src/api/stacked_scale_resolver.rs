//! Chooses between the fixed percent-stacked scales and the candidate search,
//! and prepares the search input for stacked and diverging variants.

use tracing::debug;

use crate::core::{Limit, Scale, ScaleBounds, ScaleSearch, data_limit, search_scale};
use crate::error::ScaleResult;

use super::AxisScaleRequest;

const PERCENT_STEP: f64 = 25.0;

/// Which strategy produced a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePath {
    PercentStacked(PercentStackedScale),
    NormalStacked,
    Diverging,
    Standard,
}

/// Fixed scales used by percent-stacked charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentStackedScale {
    /// `[0, 100]`, every value non-negative.
    Positive,
    /// `[-100, 0]`, every value non-positive.
    Negative,
    /// `[-100, 100]` for diverging charts, labelled `100..0..100`.
    DivergingDual,
    /// `[-100, 100]` with signed labels.
    Dual,
}

impl PercentStackedScale {
    #[must_use]
    pub fn scale(self) -> Scale {
        let limit = match self {
            Self::Positive => Limit::new(0.0, 100.0),
            Self::Negative => Limit::new(-100.0, 0.0),
            Self::DivergingDual | Self::Dual => Limit::new(-100.0, 100.0),
        };
        Scale::new(limit, PERCENT_STEP)
    }

    #[must_use]
    pub fn mirrored_labels(self) -> bool {
        matches!(self, Self::DivergingDual)
    }
}

/// A scale together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedScale {
    pub scale: Scale,
    pub path: ScalePath,
    /// Labels show absolute values (diverging charts).
    pub mirrored_labels: bool,
}

#[must_use]
pub fn percent_stacked_scale(
    values: impl Iterator<Item = f64>,
    diverging: bool,
) -> PercentStackedScale {
    let limit = data_limit(&values.collect::<Vec<_>>());
    if limit.min >= 0.0 {
        PercentStackedScale::Positive
    } else if limit.max <= 0.0 {
        PercentStackedScale::Negative
    } else if diverging {
        PercentStackedScale::DivergingDual
    } else {
        PercentStackedScale::Dual
    }
}

#[must_use]
pub fn resolve_scale_path(request: &AxisScaleRequest) -> ScalePath {
    if request.is_percent_stacked() {
        ScalePath::PercentStacked(percent_stacked_scale(
            request.data.all_values(),
            request.is_diverging(),
        ))
    } else if request.is_normal_stacked() {
        ScalePath::NormalStacked
    } else if request.is_diverging() {
        ScalePath::Diverging
    } else {
        ScalePath::Standard
    }
}

/// Values whose extremes feed the limit calculation.
#[must_use]
pub fn base_values(request: &AxisScaleRequest, path: ScalePath) -> Vec<f64> {
    if path == ScalePath::NormalStacked && !request.data.stack_groups().is_empty() {
        return request.data.stack_sums();
    }
    request.data.all_values().collect()
}

/// Data limit handed to the candidate search.
///
/// Diverging charts mirror it around zero; their explicit bounds only widen
/// the mirrored extent since a symmetric axis cannot honor them literally.
#[must_use]
pub fn search_data_limit(request: &AxisScaleRequest, path: ScalePath) -> Limit {
    let limit = data_limit(&base_values(request, path));
    if !request.is_diverging() {
        return limit;
    }
    [request.options.finite_min(), request.options.finite_max()]
        .into_iter()
        .flatten()
        .fold(limit, |limit, bound| {
            Limit::new(limit.min.min(bound), limit.max.max(bound))
        })
        .mirrored()
}

fn search_bounds(request: &AxisScaleRequest) -> ScaleBounds {
    if request.is_diverging() {
        return ScaleBounds::default();
    }
    ScaleBounds::new(request.options.finite_min(), request.options.finite_max())
}

pub fn resolve_scale(request: &AxisScaleRequest, tick_counts: &[usize]) -> ScaleResult<ResolvedScale> {
    let path = resolve_scale_path(request);
    if let ScalePath::PercentStacked(fixed) = path {
        debug!(?fixed, "using fixed percent-stacked scale");
        return Ok(ResolvedScale {
            scale: fixed.scale(),
            path,
            mirrored_labels: fixed.mirrored_labels(),
        });
    }

    let diverging = request.is_diverging();
    let data_limit = search_data_limit(request, path);
    let bubbles = if request.chart_kind.is_bubble() {
        request.data.bubbles()
    } else {
        &[]
    };
    let bounds = search_bounds(request);

    let mut scale = search_scale(&ScaleSearch {
        data_limit,
        bounds,
        chart_kind: request.chart_kind,
        bubbles,
        tick_counts,
    })?;
    if diverging {
        scale.limit = scale.limit.mirrored();
    }

    Ok(ResolvedScale {
        scale,
        path,
        mirrored_labels: diverging,
    })
}

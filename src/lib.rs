//! axis-scale: value-axis scale engine for charts.
//!
//! Given raw chart data and an axis pixel length, the engine picks a
//! human-friendly range and tick step, compares several tick-count candidates,
//! and maps the result to pixel tick positions. Pure numeric code lives in
//! [`core`]; [`api`] adds the per-chart engine with its memo caches, the
//! stacked/diverging shortcuts and label formatting.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisScaleConfig, AxisScaleEngine, AxisScaleRequest, ScaleData, ScaleOptions};
pub use error::{ScaleError, ScaleResult};

mod axis_scale_request;
mod engine;
mod engine_config;
mod label_format;
mod scale_data;
mod stacked_scale_resolver;

pub use axis_scale_request::AxisScaleRequest;
pub use engine::AxisScaleEngine;
pub use engine_config::{AxisOrientation, AxisScaleConfig, ScaleLabelConfig, ScaleOptions};
pub use label_format::{
    LabelTextFormatterFn, LabelValueFormatterFn, format_scale_value, insert_thousands_separator,
};
pub use scale_data::{ScaleData, StackGroup};
pub use stacked_scale_resolver::{
    PercentStackedScale, ResolvedScale, ScalePath, base_values, percent_stacked_scale,
    resolve_scale, resolve_scale_path, search_data_limit,
};

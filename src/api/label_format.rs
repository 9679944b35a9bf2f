use std::sync::Arc;

use crate::core::Scale;
use crate::core::number::decimal_length;

use super::{AxisOrientation, ScaleLabelConfig};

/// Replaces the built-in fixed-decimal rendering of a tick value.
pub type LabelValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
/// Post-processes label text; hooks run in registration order.
pub type LabelTextFormatterFn = Arc<dyn Fn(String) -> String + Send + Sync + 'static>;

/// Tick values in display order.
pub(super) fn scale_label_values(
    scale: Scale,
    orientation: AxisOrientation,
    mirrored: bool,
) -> Vec<f64> {
    let mut values = scale.values();
    if mirrored {
        values.iter_mut().for_each(|value| *value = value.abs());
    }
    if orientation == AxisOrientation::Vertical {
        values.reverse();
    }
    values
}

/// Renders `value` with exactly `decimals` fraction digits, never `-0`.
#[must_use]
pub fn format_scale_value(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    let is_negative_zero = text.starts_with('-')
        && text
            .chars()
            .skip(1)
            .all(|ch| ch == '0' || ch == '.');
    if is_negative_zero {
        text[1..].to_owned()
    } else {
        text
    }
}

/// Inserts `,` between thousands groups of the integer part of `text`.
#[must_use]
pub fn insert_thousands_separator(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };
    if !integer.chars().all(|ch| ch.is_ascii_digit()) {
        return text.to_owned();
    }

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{fraction}")
}

pub(super) fn format_scale_labels(
    values: &[f64],
    step: f64,
    config: &ScaleLabelConfig,
    value_formatter: Option<&LabelValueFormatterFn>,
    text_formatters: &[LabelTextFormatterFn],
) -> Vec<String> {
    let decimals = decimal_length(step) as usize;
    values
        .iter()
        .map(|&value| {
            let mut text = match value_formatter {
                Some(formatter) => formatter(value),
                None => format_scale_value(value, decimals),
            };
            if config.thousands_separator {
                text = insert_thousands_separator(&text);
            }
            if let Some(suffix) = &config.suffix {
                text.push_str(suffix);
            }
            text_formatters
                .iter()
                .fold(text, |text, formatter| formatter(text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{format_scale_value, insert_thousands_separator};

    #[test]
    fn negative_zero_is_printed_as_zero() {
        assert_eq!(format_scale_value(-0.0, 0), "0");
        assert_eq!(format_scale_value(-0.0001, 2), "0.00");
        assert_eq!(format_scale_value(-25.0, 0), "-25");
    }

    #[test]
    fn thousands_are_grouped_in_the_integer_part() {
        assert_eq!(insert_thousands_separator("1234567.125"), "1,234,567.125");
        assert_eq!(insert_thousands_separator("-1000"), "-1,000");
        assert_eq!(insert_thousands_separator("999"), "999");
        assert_eq!(insert_thousands_separator("n/a"), "n/a");
    }
}

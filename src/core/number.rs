//! Decimal-safe arithmetic helpers.
//!
//! Axis math constantly combines values such as `0.1` and `0.2` whose binary
//! representation drifts (`0.1 + 0.2 != 0.3`). Every operation here goes through
//! `rust_decimal::Decimal`, built from the shortest round-trip string of the
//! `f64`, and only falls back to plain float math when an operand does not fit
//! in a decimal (roughly `|v| > 7.9e28`) or the decimal operation overflows.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Converts a finite `f64` into the decimal matching its shortest literal form.
///
/// Returns `None` when the literal does not survive the conversion exactly
/// (too many fraction digits or out of the decimal range).
#[must_use]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let decimal = Decimal::from_str(&value.to_string()).ok()?;
    (decimal.to_f64() == Some(value)).then_some(decimal)
}

/// Number of digits after the decimal point of `value`'s literal form.
///
/// `decimal_length(0.25) == 2`, `decimal_length(100.0) == 0`. Values that have
/// no decimal representation report 0.
#[must_use]
pub fn decimal_length(value: f64) -> u32 {
    to_decimal(value).map_or(0, |decimal| decimal.normalize().scale())
}

/// `10^n` where `n` is the largest [`decimal_length`] among `values`.
#[must_use]
pub fn multiplier(values: &[f64]) -> f64 {
    let digits = values
        .iter()
        .map(|value| decimal_length(*value))
        .max()
        .unwrap_or(0);
    pow10(digits as i32)
}

#[must_use]
pub fn pow10(exponent: i32) -> f64 {
    10f64.powi(exponent)
}

fn decimal_op(
    lhs: f64,
    rhs: f64,
    op: impl FnOnce(Decimal, Decimal) -> Option<Decimal>,
) -> Option<f64> {
    let lhs = to_decimal(lhs)?;
    let rhs = to_decimal(rhs)?;
    op(lhs, rhs)?.to_f64()
}

#[must_use]
pub fn add(lhs: f64, rhs: f64) -> f64 {
    decimal_op(lhs, rhs, Decimal::checked_add).unwrap_or(lhs + rhs)
}

#[must_use]
pub fn sub(lhs: f64, rhs: f64) -> f64 {
    decimal_op(lhs, rhs, Decimal::checked_sub).unwrap_or(lhs - rhs)
}

#[must_use]
pub fn mul(lhs: f64, rhs: f64) -> f64 {
    decimal_op(lhs, rhs, Decimal::checked_mul).unwrap_or(lhs * rhs)
}

/// Decimal division. Division by zero keeps `f64` semantics (`inf`/`NaN`).
#[must_use]
pub fn div(lhs: f64, rhs: f64) -> f64 {
    decimal_op(lhs, rhs, Decimal::checked_div).unwrap_or(lhs / rhs)
}

/// Truncated remainder (sign follows `value`), decimal-safe.
#[must_use]
pub fn modulo(value: f64, modulus: f64) -> f64 {
    decimal_op(value, modulus, Decimal::checked_rem).unwrap_or(value % modulus)
}

/// Largest multiple of `step` that is `<= value`.
#[must_use]
pub fn floor_to_multiple(value: f64, step: f64) -> f64 {
    if step == 0.0 {
        return value;
    }
    let remainder = modulo(value, step);
    if remainder == 0.0 {
        return value;
    }
    let snapped = sub(value, remainder);
    if value < 0.0 { sub(snapped, step) } else { snapped }
}

/// Whether `span` is an integer multiple of `step` within `tolerance`.
#[must_use]
pub fn is_multiple_of(span: f64, step: f64, tolerance: f64) -> bool {
    if step == 0.0 {
        return false;
    }
    let ratio = span / step;
    (ratio - ratio.round()).abs() <= tolerance
}

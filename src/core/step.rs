use crate::core::number::{div, modulo, mul};

/// Rounding moduli for magnitudes in `[1, 100]`.
const NICE_MODULI: [f64; 7] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

/// Snaps a raw tick step to the closest "nice" number at or above it.
///
/// Results are always `{1, 2, 5} * 10^n` with the sign of `value` preserved,
/// and the function is idempotent. Zero and non-finite input are returned
/// unchanged.
#[must_use]
pub fn normalize_step(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let normalized = normalize_magnitude(value.abs());
    if value < 0.0 { -normalized } else { normalized }
}

fn normalize_magnitude(value: f64) -> f64 {
    if value < 1.0 {
        return div(normalize_magnitude(mul(value, 10.0)), 10.0);
    }
    if value > 100.0 {
        return mul(normalize_magnitude(div(value, 10.0)), 10.0);
    }

    let modulus = NICE_MODULI
        .iter()
        .copied()
        .find(|modulus| *modulus >= value)
        .unwrap_or(100.0);
    // `value <= modulus`, so rounding up to a multiple lands on the modulus.
    if modulo(value, modulus) > 0.0 {
        modulus
    } else {
        value
    }
}

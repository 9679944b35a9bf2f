use approx::assert_relative_eq;
use axis_scale::core::number::{
    add, decimal_length, div, is_multiple_of, modulo, mul, multiplier, sub, to_decimal,
};

#[test]
fn decimal_arithmetic_matches_literal_results() {
    assert_eq!(add(0.1, 0.2), 0.3);
    assert_eq!(add(1.005, 0.001), 1.006);
    assert_eq!(sub(1.0, 0.9), 0.1);
    assert_eq!(mul(0.07, 100.0), 7.0);
    assert_eq!(div(0.6, 3.0), 0.2);
    assert_eq!(modulo(1.1, 0.5), 0.1);
}

#[test]
fn decimal_length_uses_shortest_literal() {
    assert_eq!(decimal_length(0.1), 1);
    assert_eq!(decimal_length(12.5), 1);
    assert_eq!(decimal_length(1_000.0), 0);
    assert_eq!(decimal_length(f64::INFINITY), 0);
}

#[test]
fn multiplier_is_power_of_ten_of_longest_fraction() {
    assert_eq!(multiplier(&[0.1, 0.3]), 10.0);
    assert_eq!(multiplier(&[0.05, 0.3]), 100.0);
    assert_eq!(multiplier(&[-0.125, 0.5]), 1_000.0);
}

#[test]
fn oversized_values_fall_back_to_float_math() {
    assert!(to_decimal(1e40).is_none());
    assert_relative_eq!(add(1e40, 1e40), 2e40);
    assert_relative_eq!(div(1e40, 4.0), 2.5e39);
}

#[test]
fn division_by_zero_keeps_float_semantics() {
    assert!(div(1.0, 0.0).is_infinite());
    assert!(modulo(1.0, 0.0).is_nan());
}

#[test]
fn multiple_check_tolerates_tiny_drift() {
    assert!(is_multiple_of(0.30000000000000004, 0.1, 1e-9));
    assert!(!is_multiple_of(0.35, 0.1, 1e-9));
    assert!(!is_multiple_of(1.0, 0.0, 1e-9));
}

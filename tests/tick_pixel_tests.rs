use approx::assert_relative_eq;
use axis_scale::ScaleError;
use axis_scale::core::{
    make_band_tick_ownership, make_line_tick_ownership, make_tick_pixel_positions,
};

#[test]
fn positions_are_evenly_spaced_from_offset() {
    let positions = make_tick_pixel_positions(301.0, 6, 0).expect("positions");
    assert_eq!(positions, vec![0, 60, 120, 180, 240, 300]);

    let shifted = make_tick_pixel_positions(301.0, 6, 12).expect("positions");
    assert_eq!(shifted, vec![12, 72, 132, 192, 252, 312]);
}

#[test]
fn last_position_is_pinned_to_axis_end() {
    let positions = make_tick_pixel_positions(300.0, 7, 0).expect("positions");
    assert_eq!(positions.len(), 7);
    assert_eq!(positions.first(), Some(&0));
    assert_eq!(positions.last(), Some(&299));
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn two_ticks_sit_on_both_ends() {
    let positions = make_tick_pixel_positions(50.0, 2, -5).expect("positions");
    assert_eq!(positions, vec![-5, 44]);
}

#[test]
fn degenerate_inputs_are_rejected() {
    assert!(matches!(
        make_tick_pixel_positions(300.0, 1, 0),
        Err(ScaleError::InvalidTickCount { tick_count: 1 })
    ));
    assert!(matches!(
        make_tick_pixel_positions(300.0, 0, 0),
        Err(ScaleError::InvalidTickCount { tick_count: 0 })
    ));
    assert!(matches!(
        make_tick_pixel_positions(0.5, 5, 0),
        Err(ScaleError::InvalidAxisSize { .. })
    ));
    assert!(matches!(
        make_tick_pixel_positions(f64::NAN, 5, 0),
        Err(ScaleError::InvalidAxisSize { .. })
    ));
}

#[test]
fn line_ownership_centers_ranges_on_ticks() {
    let ownership = make_line_tick_ownership(300.0, 4).expect("ownership");
    assert_eq!(ownership.ranges().len(), 4);

    let interval = 301.0 / 3.0;
    let second = ownership.ranges()[1];
    assert_relative_eq!(second.start, interval / 2.0, epsilon = 1e-9);
    assert_relative_eq!(second.end, interval * 1.5, epsilon = 1e-9);
    assert_relative_eq!(ownership.ranges()[3].end, interval * 3.5 - 1.0, epsilon = 1e-9);

    assert_eq!(ownership.find_index(0.0), Some(0));
    assert_eq!(ownership.find_index(60.0), Some(1));
    assert_eq!(ownership.find_index(299.0), Some(3));
    assert_eq!(ownership.find_index(-100.0), None);
    assert_eq!(ownership.find_index(f64::NAN), None);
}

#[test]
fn band_ownership_splits_axis_equally() {
    let ownership = make_band_tick_ownership(300.0, 3).expect("ownership");
    let starts: Vec<f64> = ownership.ranges().iter().map(|range| range.start).collect();
    assert_eq!(starts, vec![0.0, 100.0, 200.0]);

    assert_eq!(ownership.find_index(0.0), Some(0));
    assert_eq!(ownership.find_index(99.9), Some(0));
    assert_eq!(ownership.find_index(100.0), Some(1));
    assert_eq!(ownership.find_index(300.0), None);

    assert!(make_band_tick_ownership(300.0, 0).is_err());
}

use axis_scale::api::{AxisOrientation, ScaleLabelConfig};
use axis_scale::core::{ChartKind, TickDensityTuning, candidate_tick_counts};
use axis_scale::{
    AxisScaleConfig, AxisScaleEngine, AxisScaleRequest, ScaleData, ScaleError, ScaleOptions,
};

#[test]
fn config_json_round_trip() {
    let config = AxisScaleConfig::default()
        .with_tick_density(TickDensityTuning {
            min_px_per_tick: 30.0,
            max_px_per_tick: 80.0,
            min_tick_count: 4,
            ..TickDensityTuning::default()
        })
        .with_label_config(ScaleLabelConfig {
            thousands_separator: true,
            suffix: Some("%".to_owned()),
        })
        .with_orientation(AxisOrientation::Horizontal);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = AxisScaleConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn empty_json_object_yields_defaults() {
    let parsed = AxisScaleConfig::from_json_str("{}").expect("parse");
    assert_eq!(parsed, AxisScaleConfig::default());
    assert_eq!(parsed.orientation, AxisOrientation::Vertical);
    assert_eq!(parsed.tick_density.min_tick_count, 3);
}

#[test]
fn invalid_json_config_is_rejected() {
    let inverted = r#"{
        "tick_density": { "min_px_per_tick": 80.0, "max_px_per_tick": 60.0, "min_tick_count": 3 }
    }"#;
    assert!(matches!(
        AxisScaleConfig::from_json_str(inverted),
        Err(ScaleError::InvalidConfig(_))
    ));
    assert!(matches!(
        AxisScaleConfig::from_json_str("not json"),
        Err(ScaleError::InvalidConfig(_))
    ));
}

#[test]
fn tuning_changes_tick_count_hypotheses() {
    let sparse = TickDensityTuning {
        min_px_per_tick: 100.0,
        max_px_per_tick: 150.0,
        min_tick_count: 2,
        ..TickDensityTuning::default()
    };
    assert_eq!(candidate_tick_counts(600.0, sparse).as_slice(), &[4, 5, 6]);
    assert_eq!(
        candidate_tick_counts(f64::NAN, TickDensityTuning::default()).as_slice(),
        &[3]
    );
}

#[test]
fn scale_options_deserialize_partially() {
    let options: ScaleOptions =
        serde_json::from_str(r#"{ "max": 250.0, "diverging": true }"#).expect("parse");
    assert_eq!(options, ScaleOptions::default().with_max(250.0).with_diverging(true));
}

#[test]
fn huge_axes_search_a_bounded_tick_count() {
    let tuning = TickDensityTuning::default();
    assert_eq!(candidate_tick_counts(1e300, tuning).as_slice(), &[64]);

    let request = AxisScaleRequest::new(
        ScaleData::new(vec![10.0, 40.0, 70.0, 100.0]),
        1e9,
        ChartKind::Column,
    );
    let mut engine = AxisScaleEngine::new(request, AxisScaleConfig::default()).expect("engine");
    let scale = engine.scale().expect("scale");
    assert!(scale.value_count() <= 2 * tuning.max_tick_count);
    assert_eq!(
        engine.formatted_scale_values().expect("labels").len(),
        scale.tick_count()
    );
}

#[test]
fn tick_count_cap_is_configurable_and_validated() {
    let parsed = AxisScaleConfig::from_json_str(r#"{ "tick_density": { "max_tick_count": 12 } }"#)
        .expect("parse");
    assert_eq!(parsed.tick_density.max_tick_count, 12);
    assert_eq!(parsed.tick_density.min_px_per_tick, 40.0);
    assert_eq!(candidate_tick_counts(1_000.0, parsed.tick_density).as_slice(), &[12]);

    let inverted = r#"{ "tick_density": { "min_tick_count": 8, "max_tick_count": 4 } }"#;
    assert!(matches!(
        AxisScaleConfig::from_json_str(inverted),
        Err(ScaleError::InvalidConfig(_))
    ));
}

use axis_scale::core::{ChartKind, make_tick_pixel_positions, normalize_step};
use axis_scale::{AxisScaleConfig, AxisScaleEngine, AxisScaleRequest, ScaleData};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_normalize_step(c: &mut Criterion) {
    let raw_steps = [0.000_37, 0.44, 2.2, 17.416, 104.5, 7_000.0, 123_456.0];

    c.bench_function("normalize_step_mixed_magnitudes", |b| {
        b.iter(|| {
            for raw in raw_steps {
                let _ = normalize_step(black_box(raw));
            }
        })
    });
}

fn bench_scale_search_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000)
        .map(|i| {
            let t = i as f64;
            (t * 0.013).sin() * 850.0 + t * 0.02
        })
        .collect();
    let request = AxisScaleRequest::new(ScaleData::new(values), 1_080.0, ChartKind::Line);
    let mut engine =
        AxisScaleEngine::new(request, AxisScaleConfig::default()).expect("engine init");

    c.bench_function("scale_search_10k", |b| {
        b.iter(|| {
            engine.invalidate();
            let _ = engine.scale().expect("scale");
        })
    });
}

fn bench_formatted_labels(c: &mut Criterion) {
    let request = AxisScaleRequest::new(
        ScaleData::new(vec![0.013, 0.27, 0.391]),
        1_080.0,
        ChartKind::Column,
    );
    let mut engine =
        AxisScaleEngine::new(request, AxisScaleConfig::default()).expect("engine init");

    c.bench_function("formatted_scale_values", |b| {
        b.iter(|| {
            engine.invalidate();
            let _ = engine.formatted_scale_values().expect("labels").len();
        })
    });
}

fn bench_tick_pixel_positions(c: &mut Criterion) {
    c.bench_function("tick_pixel_positions_64", |b| {
        b.iter(|| {
            let _ = make_tick_pixel_positions(black_box(1_920.0), black_box(64), black_box(8))
                .expect("positions");
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_step,
    bench_scale_search_10k,
    bench_formatted_labels,
    bench_tick_pixel_positions
);
criterion_main!(benches);

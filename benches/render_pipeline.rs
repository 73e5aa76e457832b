use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_canvas::{CanvasSize, ExplorerConfig, RenderPipeline};

fn bench_render_pipeline(c: &mut Criterion) {
    let config = ExplorerConfig::showcase();
    let pipeline = RenderPipeline::from_config(&config);
    let viewport = match config.initial_viewport() {
        Ok(viewport) => viewport,
        Err(err) => panic!("showcase config is invalid: {err}"),
    };

    let mut group = c.benchmark_group("render_pipeline");

    for (width, height) in [(320, 240), (800, 600)] {
        let size = CanvasSize::new(width, height);
        let label = format!("{width}x{height}");

        group.bench_with_input(BenchmarkId::new("sequential", &label), &size, |b, &size| {
            b.iter(|| pipeline.render(black_box(&viewport), size));
        });

        group.bench_with_input(BenchmarkId::new("rayon", &label), &size, |b, &size| {
            b.iter(|| pipeline.render_rayon(black_box(&viewport), size));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);

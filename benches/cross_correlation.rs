use criterion::*;
use xcorr::cross_correlation;

fn correlate_shifted_sines(c: &mut Criterion) {
    c.bench_function("cross_correlation 5000 lag 50", |b| {
        let series_a = (0..5000).map(|n| (n as f64 * 0.02).sin()).collect::<Vec<_>>();
        let series_b = (0..5000)
            .map(|n| ((n + 25) as f64 * 0.02).sin())
            .collect::<Vec<_>>();
        b.iter(|| cross_correlation(&series_a, &series_b, 50))
    });
}

criterion_group!(benches, correlate_shifted_sines);
criterion_main!(benches);

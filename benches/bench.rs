use criterion::*;
use rcs_interp::utils::{linspace, sample_grid};
use rcs_interp::{RcsEngine, Sample};

/// Table over 8 directions with `nfreq` frequencies and a `ntheta` x `2 * ntheta` angular grid
fn gen_table(nfreq: usize, ntheta: usize) -> Vec<Sample<f64>> {
    let freqs = linspace(1.0, 40.0, nfreq).unwrap();
    let dirs = linspace(1.0, 8.0, 8).unwrap();
    let thetas = linspace(0.0, 180.0, ntheta).unwrap();
    let phis = linspace(0.0, 360.0 * (1.0 - 0.5 / ntheta as f64), 2 * ntheta).unwrap();
    sample_grid(&freqs, &dirs, &thetas, &phis, |f, d, t, p| {
        -20.0 + 5.0 * (f / 10.0).sin() - d + (t.to_radians().cos() * p.to_radians().sin())
    })
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("RCS");

    for &(nfreq, ntheta) in &[(4, 7), (8, 19), (16, 37)] {
        let samples = gen_table(nfreq, ntheta);
        let engine = RcsEngine::new(&samples).unwrap();
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(
            BenchmarkId::new("Discrete direction", samples.len()),
            &samples.len(),
            |b, _| {
                b.iter(|| {
                    black_box(
                        engine
                            .rcs_at_direction(black_box(12.3), black_box(2.5), 47.0, 123.0)
                            .unwrap(),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Spherical incidence", samples.len()),
            &samples.len(),
            |b, _| {
                b.iter(|| {
                    black_box(
                        engine
                            .rcs_at_incidence(black_box(12.3), black_box(60.0), 120.0, 47.0, -90.0)
                            .unwrap(),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);

//! Benchmarking of the model factors & NmF2 evaluation
use npdm::prelude::*;

extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const COEFFICIENTS: [f64; 13] = [
    0.45, 0.2, -0.08, 0.04, 0.02, -0.01, 0.3, 0.15, 0.25, 0.6, 0.4, 0.2, 0.005,
];

fn observations(size: usize) -> Vec<Observation> {
    (0..size)
        .filter_map(|i| {
            let lt = (i % 96) as f64 * 0.25;
            let doy = (i % 366) as u16 + 1;
            let lat = (-80.0 + (i % 160) as f64 + 0.5).to_radians();
            let decl = npdm::solar::solar_declination(doy as f64);
            let mlat = -60.0 + (i % 120) as f64;
            Observation::new(lt, doy, lat, decl, mlat, 70.0 + (i % 180) as f64).ok()
        })
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let coefs = Coefficients::from(COEFFICIENTS);
    let npdm = Npdm::from_coefficients(coefs);
    let pool = observations(1024);

    let mut factors_grp = c.benchmark_group("factors");

    factors_grp.bench_function("F1", |b| {
        b.iter(|| {
            for obs in pool.iter() {
                let _ = evaluate_local_time_factor(
                    black_box(obs.local_time_hours),
                    black_box(obs.latitude_rad),
                    black_box(obs.sun_declination_rad),
                    black_box(obs.day_of_year),
                    &coefs,
                );
            }
        })
    });

    factors_grp.bench_function("F4", |b| {
        b.iter(|| {
            for obs in pool.iter() {
                let _ = evaluate_ionization_crest_factor(
                    black_box(obs.geomagnetic_latitude_ddeg),
                    black_box(obs.local_time_hours),
                    &coefs,
                );
            }
        })
    });

    factors_grp.finish();

    let mut model_grp = c.benchmark_group("model");

    model_grp.bench_function("NmF2", |b| {
        b.iter(|| {
            for obs in pool.iter() {
                let _ = npdm.nmf2(black_box(obs));
            }
        })
    });

    model_grp.bench_function("from_epoch", |b| {
        let t0 = Epoch::from_gregorian_utc_hms(2023, 9, 15, 12, 0, 0);
        b.iter(|| {
            let _ = Observation::from_epoch(
                black_box(t0),
                0.867,
                0.25,
                black_box(12.0),
                black_box(150.0),
            );
        })
    });

    model_grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

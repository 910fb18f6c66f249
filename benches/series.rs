use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use planetfield::series::{Quantity, EARTH, NEPTUNE};
use planetfield::{Ephemeris, GeodeticLocation, Instant, Observer, Planet, RiseSet};

/// Millennia from J2000 spread over 1900 to 2100
fn random_taus(rng: &mut StdRng, samples: usize) -> Vec<f64> {
    (0..samples).map(|_| rng.gen_range(-0.1..0.1)).collect()
}

fn bench_series(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("series/earth_lbr", |b| {
        b.iter_batched(
            || random_taus(&mut rng, 1_000),
            |taus| {
                for tau in taus {
                    black_box(EARTH.lbr(black_box(tau)));
                }
            },
            BatchSize::LargeInput,
        )
    });

    c.bench_function("series/neptune_longitude", |b| {
        b.iter(|| black_box(NEPTUNE.evaluate(Quantity::Longitude, black_box(0.0345))))
    });
}

fn bench_update(c: &mut Criterion) {
    let ephemeris = Ephemeris::new();
    let instant = Instant::from_jd(2452805.143_055_555);
    let mut mars = ephemeris.body(Planet::Mars);

    c.bench_function("body/update_mars", |b| {
        b.iter(|| ephemeris.update(&mut mars, black_box(instant)))
    });
}

fn bench_rise_set(c: &mut Criterion) {
    let ephemeris = Ephemeris::new();
    let sun = ephemeris.body(Planet::Sun);
    let observer = Observer::new(
        Instant::from_jd(2452805.143_055_555),
        GeodeticLocation::new(55.925, -3.1825, 0.0),
    );

    c.bench_function("almanac/sunset_edinburgh", |b| {
        b.iter(|| {
            ephemeris
                .next_rise_set(&sun, black_box(&observer), -0.8333, RiseSet::Set)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_series, bench_update, bench_rise_set);
criterion_main!(benches);

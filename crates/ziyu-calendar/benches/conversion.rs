use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ziyu_calendar::inverse::{to_date, to_date_closed_form};
use ziyu_calendar::{to_day_count, CycleConstants, DayCount};

fn bench_inverse(c: &mut Criterion) {
    let constants = CycleConstants::gonghe();
    let days: Vec<DayCount> = (-5_000_000i64..5_000_000)
        .step_by(9_973)
        .map(DayCount::new)
        .collect();

    c.bench_function("to_date", |b| {
        b.iter(|| {
            for &dc in &days {
                black_box(to_date(&constants, black_box(dc)));
            }
        })
    });

    c.bench_function("to_date_closed_form", |b| {
        b.iter(|| {
            for &dc in &days {
                black_box(to_date_closed_form(&constants, black_box(dc)));
            }
        })
    });
}

fn bench_forward(c: &mut Criterion) {
    let constants = CycleConstants::gonghe();
    c.bench_function("to_day_count", |b| {
        b.iter(|| {
            for year in (-10_000i64..10_000).step_by(37) {
                let _ = black_box(to_day_count(&constants, black_box(year), 7, 15, 0.25));
            }
        })
    });
}

criterion_group!(benches, bench_inverse, bench_forward);
criterion_main!(benches);

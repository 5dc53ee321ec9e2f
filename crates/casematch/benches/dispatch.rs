use casematch::{Matcher, Number};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn value_matcher(cases: u32) -> Matcher<u32> {
    let mut matcher = Matcher::new();
    for key in 0..cases {
        matcher = matcher.when_value(key, |k| *k * 2);
    }
    matcher.otherwise(|_| 0)
}

fn bench_linear_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_dispatch");

    for cases in [1_u32, 8, 64, 512] {
        let matcher = value_matcher(cases);

        group.bench_with_input(BenchmarkId::new("last_value_case", cases), &cases, |b, &cases| {
            b.iter(|| matcher.apply(black_box(&(cases - 1))))
        });

        // Falls through every value guard on a type mismatch.
        group.bench_with_input(BenchmarkId::new("default_case", cases), &cases, |b, _| {
            b.iter(|| matcher.apply(black_box(&"miss")))
        });
    }

    group.finish();
}

fn bench_kind_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("kind_dispatch");

    let matcher = Matcher::new()
        .when_type::<String>(|s| s.len() as f64)
        .when_kind::<Number>(|n| n.to_f64())
        .otherwise(|_| 0.0);

    group.bench_function("exact_type", |b| {
        let input = String::from("exact");
        b.iter(|| matcher.apply(black_box(&input)))
    });
    group.bench_function("number_family", |b| b.iter(|| matcher.apply(black_box(&42_u64))));
    group.bench_function("null", |b| b.iter(|| matcher.apply_null()));

    group.finish();
}

criterion_group!(benches, bench_linear_dispatch, bench_kind_dispatch);
criterion_main!(benches);

//! Benchmark for Predicate combinators.
//!
//! Measures the cost of shared closure predicates composed with `and` /
//! `or`, positional products and the kind-polymorphic tuple derivation,
//! compared with inline boolean expressions.

use criterion::{Criterion, criterion_group, criterion_main};
use fpcore::predicate::{self, Predicate, PredicateTypeLambda};
use fpcore::typeclass::semi_product;
use std::hint::black_box;

fn benchmark_boolean_combinators(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicate_and_or");
    let positive = Predicate::new(|value: &i32| *value > 0);
    let even = Predicate::new(|value: &i32| value % 2 == 0);
    let small = Predicate::new(|value: &i32| *value < 1_000);
    let combined = positive.and(even).or(small);
    let values: Vec<i32> = (-500..500).collect();

    group.bench_function("composed", |bencher| {
        bencher.iter(|| black_box(values.iter().filter(|value| combined.test(value)).count()));
    });

    group.bench_function("inline", |bencher| {
        bencher.iter(|| {
            black_box(
                values
                    .iter()
                    .filter(|value| (**value > 0 && **value % 2 == 0) || **value < 1_000)
                    .count(),
            )
        });
    });

    group.finish();
}

fn benchmark_products(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("predicate_products");
    let columns = predicate::product_all((0..16).map(|bound| Predicate::new(move |value: &i32| *value >= bound)));
    let row: Vec<i32> = (0..16).collect();

    group.bench_function("product_all", |bencher| {
        bencher.iter(|| black_box(columns.test(&row)));
    });

    let triple = semi_product::tuple3::<PredicateTypeLambda, (), (), (), _, _, _>(
        Predicate::new(|x: &i32| *x >= 0),
        Predicate::new(|y: &i32| *y >= 0),
        Predicate::new(|label: &String| !label.is_empty()),
    );
    let direct = predicate::tuple((
        Predicate::new(|x: &i32| *x >= 0),
        Predicate::new(|y: &i32| *y >= 0),
        Predicate::new(|label: &String| !label.is_empty()),
    ));
    let point = (1, 2, "origin".to_string());

    group.bench_function("tuple3_derived", |bencher| {
        bencher.iter(|| black_box(triple.test(&point)));
    });

    group.bench_function("tuple_direct", |bencher| {
        bencher.iter(|| black_box(direct.test(&point)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_boolean_combinators, benchmark_products);
criterion_main!(benches);

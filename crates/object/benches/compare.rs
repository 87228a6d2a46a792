//! Benchmarks for cross-representation comparison and object equality

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nebula_object::prelude::*;
use nebula_object::scalar::number::compare;
use std::hint::black_box;

fn bench_primitive_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_compare");

    group.bench_function("same_type_i64", |b| {
        b.iter(|| compare::less(black_box(-5i64), black_box(7i64)));
    });

    group.bench_function("signed_unsigned", |b| {
        b.iter(|| compare::less(black_box(-1i64), black_box(u64::MAX)));
    });

    group.bench_function("integer_real", |b| {
        b.iter(|| compare::equal(black_box(9_007_199_254_740_993i64), black_box(9.007e15f64)));
    });

    group.finish();
}

fn bench_object_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_equality");

    for size in [10usize, 100, 1000] {
        let lhs: List = (0..size).map(|i| Object::from(i as u64)).collect();
        let rhs: List = (0..size).map(|i| Object::from(i as f64)).collect();
        let (lhs, rhs) = (Object::from(lhs), Object::from(rhs));

        group.bench_with_input(BenchmarkId::new("numeric_list", size), &size, |b, _| {
            b.iter(|| black_box(&lhs) == black_box(&rhs));
        });
    }

    let mut dict: Dict = Dict::new();
    for i in 0..100i32 {
        dict.insert_or_assign(i, format!("value-{i}"));
    }
    let copy = dict.clone();

    group.bench_function("dict_100", |b| {
        b.iter(|| black_box(&dict) == black_box(&copy));
    });

    group.finish();
}

fn bench_dict_lookup(c: &mut Criterion) {
    let mut dict: Dict = Dict::new();
    for i in 0..1000u32 {
        dict.insert_or_assign(i, i);
    }
    let key = HashableObject::from(500.0f64);

    c.bench_function("dict_lookup_real_key", |b| {
        b.iter(|| dict.find_val(black_box(&key)).is_some());
    });
}

criterion_group!(
    benches,
    bench_primitive_compare,
    bench_object_equality,
    bench_dict_lookup
);
criterion_main!(benches);

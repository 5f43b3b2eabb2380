//! Benchmark for the wrap engine: wrapper construction and wrapped calls.
//!
//! Measures the cost of each builder against a direct call, and the effect
//! of layer flattening on deep chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funcwrap::value::{Function, Value};
use funcwrap::wrap::{self, WrapEngine, WrapFlags, WrapRequest};
use funcwrap::{args, slots};
use std::hint::black_box;

fn sum(arity: usize) -> Function {
    Function::new("sum", arity, |_, arguments| {
        Ok(Value::from(arguments.iter().filter_map(Value::as_number).sum::<f64>()))
    })
}

// =============================================================================
// Construction Benchmarks
// =============================================================================

fn benchmark_wrap_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("wrap_construction");
    let engine = WrapEngine::new();
    let target = sum(3);

    for (name, flags) in [
        ("bind", WrapFlags::BIND),
        ("curry", WrapFlags::CURRY),
        ("flip", WrapFlags::FLIP),
    ] {
        group.bench_function(name, |bencher| {
            bencher.iter(|| black_box(engine.wrap(WrapRequest::new(&target, flags)).unwrap()));
        });
    }

    group.bench_function("partial_with_holes", |bencher| {
        bencher.iter(|| {
            let request =
                WrapRequest::new(&target, WrapFlags::PARTIAL).partials(slots![1, __, 3]);
            black_box(engine.wrap(request).unwrap())
        });
    });

    group.finish();
}

// =============================================================================
// Call Benchmarks
// =============================================================================

fn benchmark_wrapped_call(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("wrapped_call");
    let target = sum(3);
    let arguments = args![1, 2, 3];

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(target.invoke(black_box(&arguments)).unwrap()));
    });

    let bound = wrap::bind(&target, Value::Null, Vec::new()).unwrap();
    group.bench_function("bind", |bencher| {
        bencher.iter(|| black_box(bound.invoke(black_box(&arguments)).unwrap()));
    });

    let curried = wrap::curry(&target, None).unwrap();
    group.bench_function("curry_saturated", |bencher| {
        bencher.iter(|| black_box(curried.invoke(black_box(&arguments)).unwrap()));
    });

    group.bench_function("curry_one_at_a_time", |bencher| {
        bencher.iter(|| {
            let mut current = Value::from(&curried);
            for argument in &arguments {
                let function = current.as_function().unwrap().clone();
                current = function.invoke(std::slice::from_ref(argument)).unwrap();
            }
            black_box(current)
        });
    });

    let partial = wrap::partial(&target, slots![1, __]).unwrap();
    group.bench_function("partial_with_holes", |bencher| {
        bencher.iter(|| black_box(partial.invoke(black_box(&args![2, 3])).unwrap()));
    });

    group.finish();
}

// =============================================================================
// Layering Benchmarks
// =============================================================================

fn benchmark_layered_partials(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("layered_partials");

    for depth in [1, 4, 16] {
        let mut wrapper = sum(depth + 1);
        for index in 0..depth {
            wrapper = wrap::partial(&wrapper, slots![index]).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("depth", depth), &wrapper, |bencher, wrapper| {
            bencher.iter(|| black_box(wrapper.invoke(black_box(&args![1])).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_wrap_construction,
    benchmark_wrapped_call,
    benchmark_layered_partials
);

criterion_main!(benches);

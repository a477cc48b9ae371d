// In round-kernels-core/benches/round_bench.rs

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::datatypes::{ArrowNativeType, ArrowPrimitiveType, Int32Type};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use round_kernels::testing::{RandomArrayGenerator, DEFAULT_SEED};
use round_kernels::{
    FunctionName, FunctionOptions, FunctionRegistry, NumericType, RoundBinaryOptions, RoundMode,
    RoundOptions,
};

// --- Benchmark Parameters ---

/// Roughly the size of a per-core L2 cache.
const L2_BYTES: usize = 256 * 1024;

const NULL_PROPORTIONS: [f64; 2] = [0.01, 0.0];

#[cfg(feature = "all-round-benchmarks")]
const MODES: &[RoundMode] = &RoundMode::ALL;

#[cfg(not(feature = "all-round-benchmarks"))]
const MODES: &[RoundMode] = &[
    RoundMode::Down,
    RoundMode::HalfTowardsZero,
    RoundMode::HalfToOdd,
];

// --- Data Generation ---

fn values_array(
    gen: &mut RandomArrayGenerator,
    numeric_type: NumericType,
    len: usize,
    nulls: f64,
) -> ArrayRef {
    round_kernels::with_match_numeric_type!(numeric_type, |T| {
        let min = <<T as ArrowPrimitiveType>::Native as ArrowNativeType>::usize_as(6);
        let max = <<T as ArrowPrimitiveType>::Native as ArrowNativeType>::usize_as(21);
        Arc::new(gen.numeric::<T>(len, min, max, nulls).unwrap()) as ArrayRef
    })
}

// --- Benchmark Suite ---

fn bench_round_kernels(c: &mut Criterion) {
    let registry = FunctionRegistry::default();
    let mut gen = RandomArrayGenerator::new(DEFAULT_SEED);

    for numeric_type in NumericType::ALL {
        let len = L2_BYTES / numeric_type.byte_width();
        let mut group = c.benchmark_group(format!("Round Kernels [{}]", numeric_type));
        group.throughput(Throughput::Elements(len as u64));

        for nulls in NULL_PROPORTIONS {
            let values = values_array(&mut gen, numeric_type, len, nulls);
            let digits: ArrayRef = Arc::new(gen.numeric::<Int32Type>(len, -6, 6, nulls).unwrap());

            for function in FunctionName::ALL {
                let inputs = match function {
                    FunctionName::RoundBinary => vec![values.clone(), digits.clone()],
                    _ => vec![values.clone()],
                };
                let modes: &[RoundMode] = match function {
                    FunctionName::Round | FunctionName::RoundBinary => MODES,
                    // The directional functions do not read the mode.
                    _ => &[RoundMode::HalfToEven],
                };

                for mode in modes {
                    let options = match function {
                        FunctionName::RoundBinary => {
                            FunctionOptions::RoundBinary(RoundBinaryOptions::new(*mode))
                        }
                        _ => FunctionOptions::Round(RoundOptions::new(*mode)),
                    };
                    let id = BenchmarkId::new(
                        function.as_str(),
                        format!("{} nulls={}%", mode, nulls * 100.0),
                    );
                    group.bench_with_input(id, &inputs, |b, inputs| {
                        b.iter(|| {
                            black_box(
                                registry
                                    .invoke(function.as_str(), black_box(inputs), Some(&options))
                                    .unwrap(),
                            )
                        })
                    });
                }
            }
        }

        group.finish();
    }
}

// These two lines generate the main function and register the benchmark group.
criterion_group!(benches, bench_round_kernels);
criterion_main!(benches);

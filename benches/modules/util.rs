use std::env;

use criterion::{black_box, BatchSize, Criterion};

use once_cell::sync::OnceCell;
use regex::Regex;

/// Matches `name` against the `CUSTOM_BENCH_REGEX` env var, everything runs if it is not set.
pub fn should_run_benchmark(name: &str) -> bool {
    static FILTER_REGEX: OnceCell<Option<Regex>> = OnceCell::new();

    let filter_regex = FILTER_REGEX.get_or_init(|| {
        env::var("CUSTOM_BENCH_REGEX").ok().map(|filter_regex| {
            Regex::new(&filter_regex)
                .unwrap_or_else(|err| panic!("invalid CUSTOM_BENCH_REGEX: {err}"))
        })
    });

    filter_regex
        .as_ref()
        .map(|reg| reg.is_match(name))
        .unwrap_or(true)
}

#[inline(never)]
#[allow(clippy::too_many_arguments)]
pub fn bench_fn<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
    bench_name: &str,
    test_fn: impl Fn(&mut [T]),
) {
    let batch_size = if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    let bench_name_hot = format!("{bench_name}-hot-{transform_name}-{pattern_name}-{test_len}");
    if should_run_benchmark(&bench_name_hot) {
        c.bench_function(&bench_name_hot, |b| {
            b.iter_batched_ref(
                || transform(pattern_provider(test_len)),
                |test_data| {
                    test_fn(black_box(test_data.as_mut_slice()));
                    black_box(test_data); // side-effect
                },
                batch_size,
            )
        });
    }
}

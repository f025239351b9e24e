use std::env;

use criterion::{criterion_group, criterion_main, Criterion};

use sort_test_tools::patterns;
use sort_test_tools::types::{OneKiloByte, F128};

mod modules;

fn split_len(len: usize, part_a_percent: f64) -> (usize, usize) {
    let len_a = ((len as f64 / 100.0) * part_a_percent).round() as usize;
    let len_b = len - len_a;

    (len_a, len_b)
}

fn shuffle_vec<T>(mut v: Vec<T>) -> Vec<T> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    v.shuffle(&mut thread_rng());

    v
}

fn bench_patterns<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: fn(Vec<i32>) -> Vec<T>,
) {
    if test_len > 2_048 && transform_name != "i32" {
        // Quadratic amount of moves, only worth it for the base type.
        return;
    }

    let mut pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |len| {
            patterns::random_uniform(len, 0..=(((len as f64).log2().round()) as i32))
        }),
        ("random_binary", |len| patterns::random_uniform(len, 0..=1)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws_long", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
    ];

    // Inputs that stress the pairing and insertion phases.
    let mut extra_pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("zigzag", patterns::zigzag),
        ("pairs_swapped", patterns::pairs_swapped),
        ("pipe_organ", patterns::pipe_organ),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("95p_zero_5p_random", |len| {
            let (len_95p, len_5p) = split_len(len, 95.0);
            let v: Vec<i32> = std::iter::repeat(0)
                .take(len_95p)
                .chain(patterns::random(len_5p))
                .collect();

            shuffle_vec(v)
        }),
    ];

    if env::var("EXTRA_PATTERNS").is_ok() {
        pattern_providers.append(&mut extra_pattern_providers);
    }

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        modules::sort::bench(
            c,
            test_len,
            transform_name,
            &transform,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // With a fixed seed every bench iteration would see the same input.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    // Jacobsthal group boundaries are 2 * J(k) and 2 * J(k) + 1.
    let test_lens = [
        0, 1, 2, 3, 5, 7, 8, 11, 16, 21, 22, 23, 43, 50, 86, 101, 171, 200, 342, 500, 683, 1_000,
        2_048, 10_000,
    ];

    patterns::use_random_seed_each_time();
    ensure_true_random();

    for test_len in test_lens {
        bench_patterns(c, test_len, "i32", |values| values);

        bench_patterns(c, test_len, "u64", |values| {
            values
                .iter()
                .map(|val| -> u64 {
                    // Order preserving spread over the whole u64 range.
                    let x = ((*val as i64) + (i32::MAX as i64) + 1) as u64;
                    x.checked_mul(i32::MAX as u64).unwrap()
                })
                .collect()
        });

        // Heap allocated, compared lexicographically. Zero extended to keep the input order.
        bench_patterns(c, test_len, "string", |values| {
            values
                .iter()
                .map(|val| format!("{:010}", val.saturating_abs()))
                .collect()
        });

        // Moves are expensive, comparisons are not.
        bench_patterns(c, test_len, "1k", |values| {
            values.into_iter().map(OneKiloByte::new).collect()
        });

        // Comparisons are expensive, moves are not.
        bench_patterns(c, test_len, "f128", |values| {
            values.into_iter().map(F128::new).collect()
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

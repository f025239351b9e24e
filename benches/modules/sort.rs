use std::cmp::Ordering;
use std::env;

use criterion::{black_box, Criterion};

use sort_test_tools::Sort;

use crate::modules::util;

macro_rules! std_sort_impl {
    ($mod_name:ident, $name:expr, $sort:ident, $sort_by:ident) => {
        mod $mod_name {
            use super::*;

            pub struct SortImpl;

            impl Sort for SortImpl {
                fn name() -> String {
                    $name.into()
                }

                #[inline]
                fn sort<T>(arr: &mut [T])
                where
                    T: Ord,
                {
                    arr.$sort();
                }

                #[inline]
                fn sort_by<T, F>(arr: &mut [T], compare: F)
                where
                    F: FnMut(&T, &T) -> Ordering,
                {
                    arr.$sort_by(compare);
                }
            }
        }
    };
}

std_sort_impl!(rust_std_stable, "rust_std_stable", sort, sort_by);
std_sort_impl!(
    rust_std_unstable,
    "rust_std_unstable",
    sort_unstable,
    sort_unstable_by
);

fn measure_comp_count<S: Sort, T: Ord + std::fmt::Debug>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    let run_count: usize = if test_len <= 20 {
        10_000
    } else if test_len < 1_000 {
        1_000
    } else {
        20
    };

    let mut comp_count = 0u64;

    // Counted through sort_by, so T keeps its properties, e.g. being Copy.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    let mean = comp_count as f64 / run_count as f64;
    let bound = merge_insertion::max_comparisons(test_len);
    println!("{name}: mean comparisons: {mean:.1} merge-insertion bound: {bound}");
}

pub fn bench_fn<S: Sort, T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!("{bench_name}-comp-{transform_name}-{pattern_name}-{test_len}");

        if util::should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }
    } else {
        util::bench_fn(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl:ty) => {
            bench_fn::<$sort_impl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            )
        };
    }

    bench_inst!(merge_insertion::SortImpl);
    bench_inst!(rust_std_stable::SortImpl);
    bench_inst!(rust_std_unstable::SortImpl);
}

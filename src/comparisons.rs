//! Comparison accounting.

use crate::merge_insertion;
use crate::search::max_probes;

/// Upper bound on the comparisons [`merge_insertion::sort`] performs for `n` elements.
///
/// One comparison per pair, the recursive sort of the main chain, then one lower-bound search per
/// pend element into a result that grows from `n / 2` to `n - 1` elements, and finally the
/// straggler search into `n - 1` elements.
pub fn max_comparisons(n: usize) -> u64 {
    if n < 2 {
        return 0;
    }

    let pair_count = n / 2;

    let pend_searches = (pair_count..2 * pair_count)
        .map(|len| max_probes(len) as u64)
        .sum::<u64>();

    let straggler_search = if n % 2 != 0 {
        max_probes(2 * pair_count) as u64
    } else {
        0
    };

    pair_count as u64 + max_comparisons(pair_count) + pend_searches + straggler_search
}

/// Sorts `v` and returns how many comparisons it took.
pub fn count_comparisons<T: Ord>(v: &mut [T]) -> u64 {
    let mut comp_count = 0u64;

    merge_insertion::sort_by(v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    comp_count
}

//! Ford-Johnson merge-insertion sort.
//!
//! The sort pairs up adjacent elements, recursively sorts the larger element of every pair and then
//! inserts the smaller ones back with binary search, visiting them in an order derived from the
//! Jacobsthal numbers. It aims to minimize the number of comparisons, not the number of moves.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod comparisons;
pub mod error;
pub mod insertion_order;
pub mod jacobsthal;
pub mod merge_insertion;
pub mod observe;
pub mod search;

pub use comparisons::{count_comparisons, max_comparisons};
pub use error::Error;
pub use merge_insertion::{
    sort, sort_by, sort_by_key, sort_observed_by, sorted, sorting_permutation_by,
    try_sort_partial, SortImpl,
};
pub use observe::{Event, NoopObserver, Observer, Recorder, Step};

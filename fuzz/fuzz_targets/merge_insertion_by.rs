#![no_main]

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;

// The first byte drives a comparison function that is not a total order. The sort may produce any
// order, the set of elements must stay the same.
fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };

    let mut v = rest.to_vec();
    let mut expected = v.clone();
    expected.sort_unstable();

    let mut state = seed;
    merge_insertion::sort_by(&mut v, |a, b| {
        state = state.rotate_left(1) ^ a ^ b;
        match state % 3 {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => a.cmp(b).reverse(),
        }
    });

    v.sort_unstable();
    assert_eq!(v, expected);
});

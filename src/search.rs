//! Lower-bound binary search.
//!
//! Returns the first position whose element is not less than the searched value. Inserting there
//! keeps the sequence sorted and places the new element before any equal ones.

/// Direction the search continued in after a probe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The probed element was less than the value.
    Right,
    /// The probed element was greater or equal.
    Left,
}

/// One comparison made by the search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    /// Position in the searched sequence.
    pub mid: usize,
    pub direction: Direction,
}

/// Upper bound on the comparisons needed to search a sequence of length `len`.
#[inline]
pub const fn max_probes(len: usize) -> u32 {
    if len == 0 {
        0
    } else {
        len.ilog2() + 1
    }
}

#[inline]
pub fn lower_bound<T: Ord>(sorted: &[T], value: &T) -> usize {
    lower_bound_by(sorted, value, &mut |a: &T, b: &T| a.lt(b))
}

pub fn lower_bound_by<T, U, F>(sorted: &[T], value: &U, is_less: &mut F) -> usize
where
    F: FnMut(&T, &U) -> bool,
{
    search(sorted, value, is_less, |_| {})
}

/// Same as [`lower_bound_by`], every comparison is appended to `probes`.
pub fn lower_bound_traced_by<T, U, F>(
    sorted: &[T],
    value: &U,
    is_less: &mut F,
    probes: &mut Vec<Probe>,
) -> usize
where
    F: FnMut(&T, &U) -> bool,
{
    search(sorted, value, is_less, |probe| probes.push(probe))
}

#[inline]
fn search<T, U, F, P>(sorted: &[T], value: &U, is_less: &mut F, mut on_probe: P) -> usize
where
    F: FnMut(&T, &U) -> bool,
    P: FnMut(Probe),
{
    // Invariant: the result lies in [left, left + size].
    let mut left = 0;
    let mut size = sorted.len();

    while size > 0 {
        let half = size / 2;
        let mid = left + half;

        if is_less(&sorted[mid], value) {
            on_probe(Probe {
                mid,
                direction: Direction::Right,
            });
            left = mid + 1;
            size -= half + 1;
        } else {
            on_probe(Probe {
                mid,
                direction: Direction::Left,
            });
            size = half;
        }
    }

    left
}

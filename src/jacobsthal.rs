//! Jacobsthal numbers: J(0) = 0, J(1) = 1, J(n) = J(n - 1) + 2 * J(n - 2).
//!
//! 0, 1, 1, 3, 5, 11, 21, 43, 85, 171, ...

use crate::error::Error;

/// Returns the Jacobsthal sequence up to and including the first term `>= bound`.
///
/// The two seed terms are always present, so `generate(0)` and `generate(1)` both yield `[0, 1]`.
///
/// Never panics. For a `bound` above the largest Jacobsthal number representable as `usize` the
/// sequence ends at that largest number, use [`try_generate`] to detect this. Any slice length is
/// covered without hitting that limit.
pub fn generate(bound: usize) -> Vec<usize> {
    let mut seq = vec![0, 1];
    extend(&mut seq, bound);
    seq
}

/// Like [`generate`] but reports an error if the sequence can't reach `bound`.
pub fn try_generate(bound: usize) -> Result<Vec<usize>, Error> {
    let mut seq = vec![0, 1];

    if extend(&mut seq, bound) {
        Ok(seq)
    } else {
        Err(Error::JacobsthalOverflow { bound })
    }
}

/// Returns false if the next term overflowed before reaching `bound`.
fn extend(seq: &mut Vec<usize>, bound: usize) -> bool {
    loop {
        let last = seq[seq.len() - 1];
        if last >= bound {
            return true;
        }

        let second_last = seq[seq.len() - 2];
        match second_last
            .checked_mul(2)
            .and_then(|double| double.checked_add(last))
        {
            Some(next) => seq.push(next),
            None => return false,
        }
    }
}

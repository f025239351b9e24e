//! Order in which the pend chain is inserted into the sorted result.
//!
//! Jacobsthal numbers are visited first, and after each one the indices down to the previous
//! Jacobsthal number are filled in descending order. Index 0 is never part of the order, the first
//! pend element is inserted before the plan is consulted.

use crate::jacobsthal;

/// Which rule put an index into the insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    /// The index is a Jacobsthal number.
    Jacobsthal,
    /// The index lies between two consecutive Jacobsthal numbers.
    GapFill,
    /// Not covered by the Jacobsthal pass, appended in ascending order at the end.
    Remainder,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Planned {
    pub index: usize,
    pub origin: Origin,
}

/// Returns a permutation of `1..size`.
///
/// `jacob_seq` is expected to come from [`jacobsthal::generate`]. Any sequence works in the sense
/// that the result is always a full permutation, the trailing pass picks up whatever the
/// Jacobsthal pass missed.
pub fn plan(jacob_seq: &[usize], size: usize) -> Vec<usize> {
    plan_annotated(jacob_seq, size)
        .into_iter()
        .map(|planned| planned.index)
        .collect()
}

/// Same as [`plan`], each index tagged with the rule that produced it.
pub fn plan_annotated(jacob_seq: &[usize], size: usize) -> Vec<Planned> {
    if size == 0 {
        return Vec::new();
    }

    let mut order = Vec::with_capacity(size - 1);
    let mut used = vec![false; size];
    used[0] = true;

    let push = |order: &mut Vec<Planned>, index: usize, origin: Origin| {
        order.push(Planned { index, origin });
    };

    // The loop stops at the first Jacobsthal number outside the range. Everything past it is
    // picked up by the remainder pass.
    let mut i = 1;
    while i < jacob_seq.len() && jacob_seq[i] < size {
        let idx = jacob_seq[i];
        if !used[idx] {
            push(&mut order, idx, Origin::Jacobsthal);
            used[idx] = true;
        }

        let prev = jacob_seq[i - 1];
        for j in (prev.saturating_add(1)..idx).rev() {
            if j < size && !used[j] {
                push(&mut order, j, Origin::GapFill);
                used[j] = true;
            }
        }

        i += 1;
    }

    for idx in 1..size {
        if !used[idx] {
            push(&mut order, idx, Origin::Remainder);
        }
    }

    order
}

/// Insertion order for a pend chain of `size` elements.
pub fn insertion_order(size: usize) -> Vec<usize> {
    plan(&jacobsthal::generate(size), size)
}

use std::cmp::Ordering;

use log::trace;

use crate::error::Error;
use crate::insertion_order;
use crate::jacobsthal;
use crate::observe::{Event, InsertSource, NoopObserver, Observer, Pair};
use crate::search::{self, Probe};

sort_impl!("rust_merge_insertion_unstable");

/// Sorts `v` with the Ford-Johnson merge-insertion algorithm.
///
/// Equal elements end up in unspecified relative order: every insertion lands in front of the
/// elements already present that compare equal.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_insertion_sort(v, &mut |a: &T, b: &T| a.lt(b), &mut NoopObserver);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_insertion_sort(
        v,
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        &mut NoopObserver,
    );
}

#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    merge_insertion_sort(v, &mut |a: &T, b: &T| f(a).lt(&f(b)), &mut NoopObserver);
}

/// Consumes `v` and returns it sorted.
pub fn sorted<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    sort(&mut v);
    v
}

/// Like [`sort_by`], reporting every phase of the sort to `observer`.
pub fn sort_observed_by<T, F, O>(v: &mut [T], mut compare: F, observer: &mut O)
where
    F: FnMut(&T, &T) -> Ordering,
    O: Observer<T>,
{
    merge_insertion_sort(
        v,
        &mut |a: &T, b: &T| compare(a, b) == Ordering::Less,
        observer,
    );
}

/// Positions of the elements of `v` in sorted order, `v` itself is not touched.
pub fn sorting_permutation_by<T, F>(v: &[T], mut is_less: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut observer = NoopObserver;
    let mut driver = Driver::new(v, &mut is_less, &mut observer);
    driver.merge_insert((0..v.len()).collect(), 0)
}

/// Sorts a slice of partially ordered values, e.g. floats.
///
/// Elements that are not comparable to themselves (NaN) are rejected before any sorting work.
/// Should two distinct elements turn out to be incomparable while sorting, the error names one of
/// them. In both cases `v` is left in its original order.
pub fn try_sort_partial<T>(v: &mut [T]) -> Result<(), Error>
where
    T: PartialOrd,
{
    if let Some(index) = v.iter().position(|x| x.partial_cmp(x).is_none()) {
        return Err(Error::Incomparable { index });
    }

    // Sort the positions themselves, so an incomparable pair can be reported by position.
    let positions = (0..v.len()).collect::<Vec<usize>>();
    let mut incomparable = None;
    let permutation = sorting_permutation_by(&positions, |&a: &usize, &b: &usize| {
        match v[a].partial_cmp(&v[b]) {
            Some(ordering) => ordering == Ordering::Less,
            None => {
                incomparable.get_or_insert(a);
                false
            }
        }
    });

    if let Some(index) = incomparable {
        return Err(Error::Incomparable { index });
    }

    apply_permutation(v, &permutation);
    Ok(())
}

fn merge_insertion_sort<T, F, O>(v: &mut [T], is_less: &mut F, observer: &mut O)
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    if v.len() < 2 {
        observer.observe(v, &Event::BaseCase { level: 0, len: v.len() });
        return;
    }

    let permutation = {
        let mut driver = Driver::new(v, is_less, observer);
        driver.merge_insert((0..v.len()).collect(), 0)
    };

    // Only now that every comparison has succeeded are elements moved. A panicking comparison
    // leaves `v` as it was.
    apply_permutation(v, &permutation);
}

/// Rearranges `v` so that `v[i]` becomes the old `v[order[i]]`, by walking the cycles of the
/// permutation.
fn apply_permutation<T>(v: &mut [T], order: &[usize]) {
    debug_assert_eq!(v.len(), order.len());

    let mut done = vec![false; order.len()];

    for start in 0..order.len() {
        if done[start] {
            continue;
        }

        done[start] = true;
        let mut pos = start;
        loop {
            let src = order[pos];
            if src == start {
                break;
            }

            v.swap(pos, src);
            done[src] = true;
            pos = src;
        }
    }
}

/// Works on positions into `v`, comparing the elements behind them.
struct Driver<'a, T, F, O> {
    v: &'a [T],
    is_less: &'a mut F,
    observer: &'a mut O,
    trace_probes: bool,
    probes: Vec<Probe>,
}

impl<'a, T, F, O> Driver<'a, T, F, O>
where
    F: FnMut(&T, &T) -> bool,
    O: Observer<T>,
{
    fn new(v: &'a [T], is_less: &'a mut F, observer: &'a mut O) -> Self {
        let trace_probes = observer.wants_probes();

        Self {
            v,
            is_less,
            observer,
            trace_probes,
            probes: Vec::new(),
        }
    }

    #[inline]
    fn emit(&mut self, event: Event<'_>) {
        self.observer.observe(self.v, &event);
    }

    fn merge_insert(&mut self, mut positions: Vec<usize>, level: usize) -> Vec<usize> {
        let len = positions.len();

        if len <= 1 {
            self.emit(Event::BaseCase { level, len });
            return positions;
        }

        let straggler = if len % 2 != 0 { positions.pop() } else { None };
        if let Some(element) = straggler {
            self.emit(Event::Straggler { level, element });
        }

        let pairs = self.form_pairs(&positions);
        self.emit(Event::PairsFormed {
            level,
            pairs: &pairs,
        });

        trace!(
            "level {level}: {len} elements, {} pairs, straggler: {}",
            pairs.len(),
            straggler.is_some()
        );

        let main_chain = pairs.iter().map(|pair| pair.larger).collect::<Vec<_>>();
        let pend_chain = pairs.iter().map(|pair| pair.smaller).collect::<Vec<_>>();

        // A single pair needs no recursion, its main chain is trivially sorted.
        let sorted_main_chain = if main_chain.len() > 1 {
            self.merge_insert(main_chain, level + 1)
        } else {
            main_chain
        };
        self.emit(Event::MainChainSorted {
            level,
            main_chain: &sorted_main_chain,
        });

        let mut result = Vec::with_capacity(len);
        result.extend_from_slice(&sorted_main_chain);
        self.emit(Event::ResultSeeded {
            level,
            result: &result,
        });
        self.emit(Event::PendChain {
            level,
            pend_chain: &pend_chain,
        });

        if let Some(&first) = pend_chain.first() {
            self.insert(&mut result, first, level, InsertSource::FirstPend);
        }

        if pend_chain.len() > 1 {
            let jacob_seq = jacobsthal::generate(pend_chain.len());
            self.emit(Event::JacobsthalGenerated {
                level,
                sequence: &jacob_seq,
            });

            let order = insertion_order::plan(&jacob_seq, pend_chain.len());
            self.emit(Event::InsertionOrderPlanned {
                level,
                order: &order,
            });

            trace!("level {level}: insertion order {order:?}");

            for idx in order {
                debug_assert!(idx > 0 && idx < pend_chain.len());
                self.insert(
                    &mut result,
                    pend_chain[idx],
                    level,
                    InsertSource::Pend { index: idx },
                );
            }
        }

        if let Some(element) = straggler {
            self.insert(&mut result, element, level, InsertSource::Straggler);
        }

        self.emit(Event::Finished {
            level,
            result: &result,
        });

        result
    }

    /// Pairs up consecutive positions, larger element first. Equal elements keep their input
    /// order, the first one counts as the larger.
    fn form_pairs(&mut self, positions: &[usize]) -> Vec<Pair> {
        let v = self.v;
        let is_less = &mut *self.is_less;

        positions
            .chunks_exact(2)
            .map(|chunk| {
                let (a, b) = (chunk[0], chunk[1]);
                if is_less(&v[a], &v[b]) {
                    Pair {
                        larger: b,
                        smaller: a,
                    }
                } else {
                    Pair {
                        larger: a,
                        smaller: b,
                    }
                }
            })
            .collect()
    }

    /// Lower-bound insertion of `element` into the sorted `result`.
    fn insert(
        &mut self,
        result: &mut Vec<usize>,
        element: usize,
        level: usize,
        source: InsertSource,
    ) {
        let v = self.v;
        let is_less = &mut *self.is_less;
        let mut is_less_pos = |&a: &usize, &b: &usize| is_less(&v[a], &v[b]);

        self.probes.clear();
        let position = if self.trace_probes {
            search::lower_bound_traced_by(result, &element, &mut is_less_pos, &mut self.probes)
        } else {
            search::lower_bound_by(result, &element, &mut is_less_pos)
        };

        result.insert(position, element);

        self.observer.observe(
            self.v,
            &Event::Inserted {
                level,
                source,
                element,
                position,
                probes: &self.probes,
                result: result.as_slice(),
            },
        );
    }
}

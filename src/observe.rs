//! Instrumentation hook for the sort.
//!
//! An [`Observer`] is told about every phase of every recursion level. All indices in an [`Event`]
//! are positions in the caller's slice, which is not moved until the sort has finished, so they
//! can be resolved against the `elements` passed alongside the event. Observing never changes the
//! outcome of the sort.

use crate::search::Probe;

/// Two adjacent elements after their in-pair comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub larger: usize,
    pub smaller: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertSource {
    /// `pend_chain[0]`, inserted before the insertion order is computed.
    FirstPend,
    /// `pend_chain[index]`, inserted as dictated by the insertion order.
    Pend { index: usize },
    Straggler,
}

/// Phase of the sort at recursion depth `level`, the top-level call being level 0.
#[derive(Copy, Clone, Debug)]
pub enum Event<'a> {
    BaseCase {
        level: usize,
        len: usize,
    },
    Straggler {
        level: usize,
        element: usize,
    },
    PairsFormed {
        level: usize,
        pairs: &'a [Pair],
    },
    MainChainSorted {
        level: usize,
        main_chain: &'a [usize],
    },
    ResultSeeded {
        level: usize,
        result: &'a [usize],
    },
    PendChain {
        level: usize,
        pend_chain: &'a [usize],
    },
    JacobsthalGenerated {
        level: usize,
        sequence: &'a [usize],
    },
    InsertionOrderPlanned {
        level: usize,
        order: &'a [usize],
    },
    Inserted {
        level: usize,
        source: InsertSource,
        element: usize,
        position: usize,
        /// Empty unless the observer asked for probes.
        probes: &'a [Probe],
        /// State after the insertion.
        result: &'a [usize],
    },
    Finished {
        level: usize,
        result: &'a [usize],
    },
}

impl Event<'_> {
    pub fn level(&self) -> usize {
        match *self {
            Event::BaseCase { level, .. }
            | Event::Straggler { level, .. }
            | Event::PairsFormed { level, .. }
            | Event::MainChainSorted { level, .. }
            | Event::ResultSeeded { level, .. }
            | Event::PendChain { level, .. }
            | Event::JacobsthalGenerated { level, .. }
            | Event::InsertionOrderPlanned { level, .. }
            | Event::Inserted { level, .. }
            | Event::Finished { level, .. } => level,
        }
    }
}

pub trait Observer<T> {
    /// Record the binary search probes of every insertion. Costs an extra buffer write per
    /// comparison.
    fn wants_probes(&self) -> bool {
        true
    }

    fn observe(&mut self, elements: &[T], event: &Event<'_>);
}

/// Ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl<T> Observer<T> for NoopObserver {
    #[inline]
    fn wants_probes(&self) -> bool {
        false
    }

    #[inline]
    fn observe(&mut self, _elements: &[T], _event: &Event<'_>) {}
}

impl<T, O: Observer<T> + ?Sized> Observer<T> for &mut O {
    fn wants_probes(&self) -> bool {
        (**self).wants_probes()
    }

    fn observe(&mut self, elements: &[T], event: &Event<'_>) {
        (**self).observe(elements, event)
    }
}

/// Owned snapshot of an [`Event`], with positions resolved to values.
#[derive(Clone, Debug, PartialEq)]
pub enum Step<T> {
    BaseCase {
        level: usize,
        len: usize,
    },
    Straggler {
        level: usize,
        value: T,
    },
    PairsFormed {
        level: usize,
        /// (larger, smaller)
        pairs: Vec<(T, T)>,
    },
    MainChainSorted {
        level: usize,
        main_chain: Vec<T>,
    },
    ResultSeeded {
        level: usize,
        result: Vec<T>,
    },
    PendChain {
        level: usize,
        pend_chain: Vec<T>,
    },
    JacobsthalGenerated {
        level: usize,
        sequence: Vec<usize>,
    },
    InsertionOrderPlanned {
        level: usize,
        order: Vec<usize>,
    },
    Inserted {
        level: usize,
        source: InsertSource,
        value: T,
        position: usize,
        probes: Vec<Probe>,
        result: Vec<T>,
    },
    Finished {
        level: usize,
        result: Vec<T>,
    },
}

impl<T> Step<T> {
    pub fn level(&self) -> usize {
        match *self {
            Step::BaseCase { level, .. }
            | Step::Straggler { level, .. }
            | Step::PairsFormed { level, .. }
            | Step::MainChainSorted { level, .. }
            | Step::ResultSeeded { level, .. }
            | Step::PendChain { level, .. }
            | Step::JacobsthalGenerated { level, .. }
            | Step::InsertionOrderPlanned { level, .. }
            | Step::Inserted { level, .. }
            | Step::Finished { level, .. } => level,
        }
    }
}

/// Collects a [`Step`] for every event.
#[derive(Clone, Debug)]
pub struct Recorder<T> {
    steps: Vec<Step<T>>,
    probes: bool,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            probes: true,
        }
    }

    /// Don't record binary search probes.
    pub fn without_probes() -> Self {
        Self {
            steps: Vec::new(),
            probes: false,
        }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve<T: Clone>(elements: &[T], positions: &[usize]) -> Vec<T> {
    positions.iter().map(|&pos| elements[pos].clone()).collect()
}

impl<T: Clone> Observer<T> for Recorder<T> {
    fn wants_probes(&self) -> bool {
        self.probes
    }

    fn observe(&mut self, elements: &[T], event: &Event<'_>) {
        let step = match *event {
            Event::BaseCase { level, len } => Step::BaseCase { level, len },
            Event::Straggler { level, element } => Step::Straggler {
                level,
                value: elements[element].clone(),
            },
            Event::PairsFormed { level, pairs } => Step::PairsFormed {
                level,
                pairs: pairs
                    .iter()
                    .map(|pair| {
                        (
                            elements[pair.larger].clone(),
                            elements[pair.smaller].clone(),
                        )
                    })
                    .collect(),
            },
            Event::MainChainSorted { level, main_chain } => Step::MainChainSorted {
                level,
                main_chain: resolve(elements, main_chain),
            },
            Event::ResultSeeded { level, result } => Step::ResultSeeded {
                level,
                result: resolve(elements, result),
            },
            Event::PendChain { level, pend_chain } => Step::PendChain {
                level,
                pend_chain: resolve(elements, pend_chain),
            },
            Event::JacobsthalGenerated { level, sequence } => Step::JacobsthalGenerated {
                level,
                sequence: sequence.to_vec(),
            },
            Event::InsertionOrderPlanned { level, order } => Step::InsertionOrderPlanned {
                level,
                order: order.to_vec(),
            },
            Event::Inserted {
                level,
                source,
                element,
                position,
                probes,
                result,
            } => Step::Inserted {
                level,
                source,
                value: elements[element].clone(),
                position,
                probes: probes.to_vec(),
                result: resolve(elements, result),
            },
            Event::Finished { level, result } => Step::Finished {
                level,
                result: resolve(elements, result),
            },
        };

        self.steps.push(step);
    }
}

//! Priority queue of states waiting to be expanded.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use crate::errors::{Result, SearchError};

/// A single frontier entry, a snapshot of a priority at push time.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// lowest priority first. Equal priorities pop in insertion order.
#[derive(Debug)]
struct FrontierEntry<P, S> {
    priority: P,
    sequence: u64,
    item: S,
}

impl<P, S> PartialEq for FrontierEntry<P, S>
where
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P, S> Eq for FrontierEntry<P, S> where P: PartialOrd {}

impl<P, S> Ord for FrontierEntry<P, S>
where
    P: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<P, S> PartialOrd for FrontierEntry<P, S>
where
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An ordered multiset of `(priority, item)` pairs.
///
/// Entries are never merged or deduplicated: pushing the same item twice
/// with different priorities leaves two entries in the frontier.
#[derive(Debug)]
pub struct Frontier<P, S> {
    queue: BinaryHeap<FrontierEntry<P, S>>,
    sequence: u64,
}

impl<P, S> Default for Frontier<P, S>
where
    P: PartialOrd,
{
    fn default() -> Self {
        Frontier {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<P, S> Frontier<P, S>
where
    P: PartialOrd,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Insert an item with the given priority.
    pub fn push(&mut self, priority: P, item: S) {
        self.queue.push(FrontierEntry {
            priority,
            sequence: self.sequence,
            item,
        });
        self.sequence += 1;
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop(&mut self) -> Result<(P, S)> {
        self.queue
            .pop()
            .map(|e| (e.priority, e.item))
            .ok_or(SearchError::EmptyFrontier)
    }

    /// The lowest priority currently waiting, if any.
    pub fn peek_priority(&self) -> Option<&P> {
        self.queue.peek().map(|e| &e.priority)
    }
}

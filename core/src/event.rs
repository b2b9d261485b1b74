//! The event clock — a time-ordered queue of typed events.
//!
//! RULE: events that share a timestamp are processed in the order they
//! were scheduled. The tie-break is explicit — the heap is keyed by
//! `(time, insertion_seq)` — never an accident of heap internals,
//! because whether a same-minute SERVICE_END or ARRIVAL runs first is
//! observable in the waiting-time totals.

use crate::types::Minutes;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Everything that can happen during a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A truck pulls up to the dock.
    Arrival,
    /// The crew finishes unloading the truck in service.
    ServiceEnd,
    /// The crew's break becomes due.
    BreakStart,
    /// The crew returns from its break.
    BreakEnd,
}

/// A scheduled occurrence. Immutable once created; consumed exactly
/// once by the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub time: Minutes,
    pub kind: EventKind,
}

#[derive(Debug, PartialEq, Eq)]
struct ScheduledEvent {
    time: Minutes,
    seq:  u64,
    kind: EventKind,
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.time, self.seq).cmp(&(other.time, other.seq))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending events, FIFO among equal timestamps.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<ScheduledEvent>>,
    seq:  u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, time: Minutes, kind: EventKind) {
        self.heap.push(Reverse(ScheduledEvent {
            time,
            seq: self.seq,
            kind,
        }));
        self.seq += 1;
    }

    /// Pop the next event in (time, schedule-order) order.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(scheduled)| Event {
            time: scheduled.time,
            kind: scheduled.kind,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut queue = EventQueue::new();
        queue.schedule(40, EventKind::ServiceEnd);
        queue.schedule(0, EventKind::Arrival);
        queue.schedule(180, EventKind::BreakStart);
        queue.schedule(35, EventKind::Arrival);

        let times: Vec<Minutes> = std::iter::from_fn(|| queue.pop()).map(|e| e.time).collect();
        assert_eq!(times, vec![0, 35, 40, 180]);
    }

    /// Equal timestamps resolve by scheduling order, not by kind.
    #[test]
    fn equal_timestamps_are_fifo() {
        let mut queue = EventQueue::new();
        queue.schedule(30, EventKind::ServiceEnd);
        queue.schedule(30, EventKind::Arrival);
        queue.schedule(30, EventKind::BreakStart);

        let kinds: Vec<EventKind> = std::iter::from_fn(|| queue.pop()).map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::ServiceEnd, EventKind::Arrival, EventKind::BreakStart]
        );

        // Reversed scheduling order reverses the result.
        let mut queue = EventQueue::new();
        queue.schedule(30, EventKind::Arrival);
        queue.schedule(30, EventKind::ServiceEnd);
        let kinds: Vec<EventKind> = std::iter::from_fn(|| queue.pop()).map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Arrival, EventKind::ServiceEnd]);
    }

    #[test]
    fn drains_to_empty() {
        let mut queue = EventQueue::new();
        assert!(queue.is_empty());
        queue.schedule(10, EventKind::Arrival);
        assert_eq!(queue.len(), 1);
        queue.pop();
        assert!(queue.pop().is_none());
    }
}

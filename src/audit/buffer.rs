//! Bounded request-log ring
//!
//! Pure state machine behind the audit manager: a strict FIFO of at most
//! `capacity` records plus a monotonic trigger counter. `push` reports the
//! batch to archive, if any; it does no I/O itself.

use std::collections::VecDeque;

use super::models::RequestLogRecord;

pub struct BufferState {
    records: VecDeque<RequestLogRecord>,
    capacity: usize,
    threshold: usize,
    observed: usize,
}

impl BufferState {
    pub fn new(capacity: usize, threshold: usize) -> Self {
        BufferState {
            records: VecDeque::with_capacity(capacity + 1),
            capacity,
            threshold,
            observed: 0,
        }
    }

    /// Appends a record, evicting the oldest beyond capacity, and counts it
    /// toward the flush trigger. Returns a snapshot of the ring when the
    /// trigger fires; the ring itself is never cleared. The counter resets
    /// whenever a snapshot is taken, regardless of what the caller does
    /// with it.
    pub fn push(&mut self, record: RequestLogRecord) -> Option<Vec<RequestLogRecord>> {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }

        self.observed += 1;
        if self.observed >= self.threshold {
            self.observed = 0;
            Some(self.records.iter().cloned().collect())
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn observed(&self) -> usize {
        self.observed
    }
}

//! Elastic request queue bridging the legacy request/grant port.
//!
//! A fixed-capacity FIFO ring between the legacy master and the ready/valid
//! consumer side. It provides:
//! 1. **Submit:** Accept a legacy request against the registered grant and
//!    store its translated form.
//! 2. **Pop:** Hand the oldest stored request to a ready consumer, exactly
//!    once per stored request.
//! 3. **Grant registration:** The grant visible to the master reflects
//!    fullness as of the previous step edge; the elastic slack masks that
//!    one-step lag.
//! 4. **Response latch:** Read data returning to the master is registered
//!    for exactly one step.
//!
//! Per step the caller performs at most one `submit`, at most one
//! `try_pop`, and exactly one `step()` (the clock edge).

use tracing::trace;

use crate::bridge::port::{MemRequest, SramRequest};
use crate::error::MemError;
use crate::stats::QueueStats;

/// A single slot of the queue ring.
#[derive(Clone, Copy, Debug, Default)]
struct QueueSlot {
    request: MemRequest,
    /// Whether this slot is occupied.
    valid: bool,
}

/// Elastic request queue with a registered grant.
#[derive(Clone, Debug)]
pub struct ElasticQueue {
    slots: Vec<QueueSlot>,
    /// Index of the oldest entry.
    head: usize,
    /// Index where the next entry will be stored.
    tail: usize,
    /// Number of valid entries.
    count: usize,
    /// Grant as observed by the legacy master this step. Registered from
    /// fullness at the previous step edge; asserted at reset (empty queue).
    grant: bool,
    /// Read data presented to the master this step.
    response: Option<u32>,
    /// Read data captured for presentation after the next step edge.
    response_next: Option<u32>,
    stats: QueueStats,
}

impl ElasticQueue {
    /// Creates a queue with the given ring capacity (at least 1).
    pub fn new(depth: usize) -> Self {
        assert!(depth > 0, "elastic queue depth must be at least 1");
        Self {
            slots: vec![QueueSlot::default(); depth],
            head: 0,
            tail: 0,
            count: 0,
            grant: true,
            response: None,
            response_next: None,
            stats: QueueStats::default(),
        }
    }

    /// Returns the ring capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of stored requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no request is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// The grant wire as the legacy master sees it this step.
    #[inline]
    pub fn grant(&self) -> bool {
        self.grant
    }

    /// Offers a legacy request against the registered grant.
    ///
    /// Returns the grant the master observes: `Ok(true)` means the request
    /// was translated and stored, `Ok(false)` means it was refused and the
    /// master must hold it. The registered grant is one step stale, so the
    /// push is double-checked against live fullness; observing the grant
    /// while the ring is full means the caller submitted more than once
    /// without stepping, and is reported as an error.
    pub fn submit(&mut self, request: &SramRequest) -> Result<bool, MemError> {
        if !self.grant {
            self.stats.refusals += 1;
            trace!(addr = request.addr, "grant deasserted; request refused");
            return Ok(false);
        }
        if self.is_full() {
            return Err(MemError::GrantWhileFull {
                depth: self.slots.len(),
            });
        }

        self.slots[self.tail] = QueueSlot {
            request: MemRequest::from_legacy(request),
            valid: true,
        };
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
        self.stats.grants += 1;
        Ok(true)
    }

    /// Pops the oldest request if the consumer is ready and one exists.
    ///
    /// The ring retains stale slot contents after a pop; validity is gated
    /// by both the occupancy count and the per-slot valid mark, so a queue
    /// popped to empty yields `None` even though the slot bits linger.
    pub fn try_pop(&mut self, consumer_ready: bool) -> Option<MemRequest> {
        if !consumer_ready || self.count == 0 {
            return None;
        }
        if !self.slots[self.head].valid {
            return None;
        }

        let popped = self.slots[self.head].request;
        self.slots[self.head].valid = false;
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        self.stats.pops += 1;
        Some(popped)
    }

    /// The valid-gated output: the oldest stored request, without popping.
    pub fn peek(&self) -> Option<&MemRequest> {
        if self.count == 0 {
            return None;
        }
        let slot = &self.slots[self.head];
        slot.valid.then_some(&slot.request)
    }

    /// Latches read data for presentation to the master next step.
    pub fn push_response(&mut self, word: u32) {
        self.response_next = Some(word);
    }

    /// Read data visible to the master this step, if any.
    #[inline]
    pub fn response(&self) -> Option<u32> {
        self.response
    }

    /// The step edge: registers the next grant and response outputs.
    pub fn step(&mut self) {
        self.grant = !self.is_full();
        self.response = self.response_next.take();
    }

    /// Clears control state: stored requests, grant register, response
    /// latch. Counters persist.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.valid = false;
        }
        self.head = 0;
        self.tail = 0;
        self.count = 0;
        self.grant = true;
        self.response = None;
        self.response_next = None;
    }

    /// Returns this queue's counters.
    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }
}

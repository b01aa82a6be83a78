//! Access statistics collection and reporting.
//!
//! This module tracks counters for the interconnect model. It provides:
//! 1. **Queue counters:** Grants, refusals, and pops at the elastic queue.
//! 2. **Bank counters:** Loads, stores, atomics, DMA beats, conflicts, and
//!    busy refusals per bank.
//! 3. **Attribution:** Accepted accesses split by requester origin
//!    (accelerator core vs. external).

use std::fmt;

/// Counters kept by the elastic request queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Requests granted and stored.
    pub grants: u64,
    /// Requests refused because the grant was deasserted.
    pub refusals: u64,
    /// Requests handed to the consumer side.
    pub pops: u64,
}

impl fmt::Display for QueueStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  grants     : {:>10}", self.grants)?;
        writeln!(f, "  refusals   : {:>10}", self.refusals)?;
        writeln!(f, "  pops       : {:>10}", self.pops)
    }
}

/// Counters kept per bank and summed by the array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BankStats {
    /// Plain loads accepted.
    pub loads: u64,
    /// Plain stores accepted.
    pub stores: u64,
    /// Atomic fetch-and-op accesses accepted.
    pub atomics: u64,
    /// DMA read beats accepted.
    pub dma_reads: u64,
    /// DMA write beats accepted.
    pub dma_writes: u64,
    /// Requests refused while an atomic write-back occupied the port.
    pub busy_refusals: u64,
    /// DMA beats that collided with a pending atomic write-back.
    pub conflicts: u64,
    /// Accepted accesses originating from the accelerator core.
    pub core_requests: u64,
    /// Accepted accesses originating from external requesters.
    pub external_requests: u64,
}

impl BankStats {
    /// Adds another bank's counters into this one.
    pub fn merge(&mut self, other: &Self) {
        self.loads += other.loads;
        self.stores += other.stores;
        self.atomics += other.atomics;
        self.dma_reads += other.dma_reads;
        self.dma_writes += other.dma_writes;
        self.busy_refusals += other.busy_refusals;
        self.conflicts += other.conflicts;
        self.core_requests += other.core_requests;
        self.external_requests += other.external_requests;
    }

    /// Total accepted accesses of any kind.
    pub fn accepted(&self) -> u64 {
        self.loads + self.stores + self.atomics + self.dma_reads + self.dma_writes
    }
}

impl fmt::Display for BankStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  loads      : {:>10}", self.loads)?;
        writeln!(f, "  stores     : {:>10}", self.stores)?;
        writeln!(f, "  atomics    : {:>10}", self.atomics)?;
        writeln!(f, "  dma reads  : {:>10}", self.dma_reads)?;
        writeln!(f, "  dma writes : {:>10}", self.dma_writes)?;
        writeln!(f, "  busy       : {:>10}", self.busy_refusals)?;
        writeln!(f, "  conflicts  : {:>10}", self.conflicts)?;
        writeln!(
            f,
            "  origin     : {:>10} core / {} external",
            self.core_requests, self.external_requests
        )
    }
}

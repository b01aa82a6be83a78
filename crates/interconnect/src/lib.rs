//! Accelerator local-memory interconnect model.
//!
//! This crate implements a step-accurate model of the path between an
//! accelerator core and its banked local memory:
//! 1. **Bridge:** Elastic request queue adapting the legacy request/grant
//!    port (active-low write enable, narrow byte-enable) to ready/valid.
//! 2. **Banks:** Independent scratchpad storage arrays behind per-bank
//!    atomic shims and fixed-latency read pipelines.
//! 3. **Atomics:** Fetch-and-op read-modify-write returning the pre-update
//!    word, with stall-and-report conflict detection against DMA beats.
//! 4. **Configuration:** Geometry and initial-content modes with serde
//!    defaults.
//! 5. **Statistics:** Queue and per-bank access counters.
//!
//! Everything advances in lockstep through explicit per-step methods; there
//! are no threads, no events, and no hidden global state. The external
//! address decoder and DMA sequencer are out of scope and meet this crate
//! at the `MemRequest` and `BankRequest` boundaries.

/// Bridge from the legacy request/grant port to ready/valid.
pub mod bridge;
/// Model configuration (defaults, geometry, bank init modes).
pub mod config;
/// Error taxonomy (protocol violations, initialization failures).
pub mod error;
/// Banked scratchpad storage with per-bank atomic shims.
pub mod spad;
/// Access statistics collection and reporting.
pub mod stats;

/// Elastic FIFO bridging the legacy port; construct with `ElasticQueue::new`.
pub use crate::bridge::{ElasticQueue, MemRequest, SramRequest};
/// Root configuration type; use `MemConfig::default()` or deserialize from JSON.
pub use crate::config::{BankInit, MemConfig};
/// Failure types raised by ports and constructors.
pub use crate::error::{InitError, MemError};
/// Bank-side surface: the arena, one bank's port types, and the atomic kinds.
pub use crate::spad::{
    AtomicConflict, AtomicOp, Bank, BankArray, BankRequest, BankResponse, BankStep,
};
/// Access counters kept by the queue and the banks.
pub use crate::stats::{BankStats, QueueStats};

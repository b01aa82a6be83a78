//! Bridge from the legacy request/grant port to ready/valid.
//!
//! The accelerator's execution units speak an SRAM-style handshake with a
//! registered grant and an active-low write enable. The bridge translates
//! each granted request once, stores it in an elastic FIFO, and presents
//! the head entry to the ready/valid consumer side.

/// Signal bundles at the two faces of the bridge.
pub mod port;
/// Elastic request queue with a registered grant.
pub mod queue;

pub use port::{MemRequest, SramRequest};
pub use queue::ElasticQueue;

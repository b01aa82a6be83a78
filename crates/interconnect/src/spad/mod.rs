//! Banked scratchpad storage with per-bank atomic shims.
//!
//! One bank is the triple (atomic shim, storage array, read pipeline); the
//! array owns N of them behind indexed ports. Addressing across banks and
//! DMA sequencing belong to the external decoder, which this module meets
//! only at the `BankRequest`/`BankResponse` boundary.

/// Bank multiplexer (indexed arena, DMA fan-out, stats aggregation).
pub mod array;
/// Atomic read-modify-write arithmetic.
pub mod atomic;
/// One bank: shim + storage + read pipeline behind a single step method.
pub mod bank;
/// Fixed-latency read output pipeline.
pub mod pipeline;
/// Per-bank atomic memory shim.
pub mod shim;
/// Signal bundles at the bank ports.
pub mod signals;
/// Single-port bank storage array.
pub mod sram;

pub use array::BankArray;
pub use atomic::atomic_alu;
pub use bank::{Bank, BankStep};
pub use pipeline::ReadPipeline;
pub use shim::{AtomicConflict, AtomicShim, ShimEffect};
pub use signals::{AtomicOp, BankRequest, BankResponse};
pub use sram::{BankSram, parse_image};

//! Error taxonomy for the interconnect model.
//!
//! Two families of failure exist:
//! 1. **Protocol violations** (`MemError`): breaches of the port contracts at
//!    run time. These are reported, never silently tolerated.
//! 2. **Initialization failures** (`InitError`): bad geometry or an unusable
//!    bank image, raised from constructors only.
//!
//! Recoverable flow control is not an error. A deasserted grant or a
//! not-ready bank is expressed through return values (`Ok(false)`, `None`),
//! and an atomic/DMA collision is a signal on the step output, not an abort.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::spad::signals::AtomicOp;

/// A breach of a port contract observed while stepping the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemError {
    /// The registered grant was observed asserted while the ring is full.
    ///
    /// The grant lags fullness by one step, so this can only happen when the
    /// caller submits more than once without stepping the queue in between.
    #[error("grant observed while the request queue is full (depth {depth})")]
    GrantWhileFull {
        /// Capacity of the queue ring.
        depth: usize,
    },

    /// A bank index outside the configured array was addressed.
    #[error("bank index {index} outside the {banks}-bank array")]
    BankOutOfRange {
        /// Offending bank index.
        index: usize,
        /// Number of configured banks.
        banks: usize,
    },

    /// A word index outside the bank's storage array was addressed.
    #[error("bank {bank}: word index {addr:#x} outside the {words}-word array")]
    AddressOutOfRange {
        /// Bank that received the request.
        bank: usize,
        /// Offending word index.
        addr: u32,
        /// Number of words in the bank.
        words: usize,
    },

    /// A request carried both bulk-DMA and atomic semantics.
    ///
    /// Exactly one of atomic, DMA, or plain load/store applies per request.
    #[error("bank {bank}: DMA beat also carries atomic {op:?}")]
    DmaWithAtomicOp {
        /// Bank that received the request.
        bank: usize,
        /// The atomic kind the beat illegally carried.
        op: AtomicOp,
    },
}

/// A failure while constructing the model or loading a bank image.
#[derive(Debug, Error)]
pub enum InitError {
    /// The bank image file could not be read.
    #[error("bank image {path:?}: {source}")]
    Io {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A line of the bank image did not parse as a 32-bit hex word.
    #[error("bank image {path:?}, line {line}: invalid word {text:?}")]
    Parse {
        /// Path of the image file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The bank image holds more words than the array can store.
    #[error("bank image holds {words} words but the array holds {capacity}")]
    ImageTooLarge {
        /// Words parsed from the image.
        words: usize,
        /// Total word capacity across all banks.
        capacity: usize,
    },

    /// A geometry field that must be non-zero was zero.
    #[error("{field} must be non-zero")]
    ZeroGeometry {
        /// Name of the offending configuration field.
        field: &'static str,
    },
}

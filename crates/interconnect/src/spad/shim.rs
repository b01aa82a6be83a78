//! Per-bank atomic memory shim.
//!
//! Sits between the bank port and the storage array and owns the array
//! exclusively. It provides:
//! 1. **Classification:** Each request is exactly one of atomic, DMA beat,
//!    or plain load/store.
//! 2. **Atomics:** Fetch-and-op over two steps; the requester receives the
//!    pre-update word, the combined word is written back the next step
//!    while the port reports not-ready.
//! 3. **DMA bypass:** Bulk beats skip atomic arbitration and execute
//!    immediately.
//! 4. **Conflict detection:** A DMA beat aimed at the word of a pending
//!    write-back is stalled and reported, never silently reordered.

use tracing::warn;

use crate::error::MemError;
use crate::spad::atomic::atomic_alu;
use crate::spad::signals::{AtomicOp, BankRequest};
use crate::spad::sram::BankSram;
use crate::stats::BankStats;

/// Byte enable selecting every lane of a word.
const FULL_MASK: u8 = 0b1111;

/// An atomic write-back latched for the next step.
#[derive(Clone, Copy, Debug)]
struct Writeback {
    addr: u32,
    word: u32,
}

/// Report raised when a DMA beat collides with a pending atomic write-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtomicConflict {
    /// Bank where the collision occurred.
    pub bank: usize,
    /// Word index both accesses targeted.
    pub addr: u32,
}

/// What one shim step did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShimEffect {
    /// Word read this step and headed into the output pipeline.
    pub read: Option<u32>,
    /// True when the offered request was consumed this step.
    pub accepted: bool,
    /// True when a request can be accepted next step.
    pub ready: bool,
    /// Collision report for a stalled DMA beat, if any.
    pub conflict: Option<AtomicConflict>,
}

/// Atomic access shim guarding one bank's storage array.
#[derive(Clone, Debug)]
pub struct AtomicShim {
    /// Index of the guarded bank, carried into reports.
    bank: usize,
    mem: BankSram,
    /// Write-back occupying the port next step, if an atomic was accepted.
    pending: Option<Writeback>,
}

impl AtomicShim {
    /// Creates a shim for bank `bank`, taking ownership of its array.
    pub fn new(bank: usize, mem: BankSram) -> Self {
        Self {
            bank,
            mem,
            pending: None,
        }
    }

    /// Returns true when a request offered next step will be considered.
    #[inline]
    pub fn ready(&self) -> bool {
        self.pending.is_none()
    }

    /// Returns the number of words in the guarded array.
    #[inline]
    pub fn words(&self) -> usize {
        self.mem.len()
    }

    /// Executes one step of the shim.
    ///
    /// At most one storage operation happens per step: a pending atomic
    /// write-back drains first and refuses any request offered in the same
    /// step; otherwise the offered request executes according to its class.
    /// The returned effect carries the read word (for the output pipeline),
    /// acceptance, next-step readiness, and any conflict report.
    pub fn execute(
        &mut self,
        request: Option<&BankRequest>,
        dma_enable: bool,
        stats: &mut BankStats,
    ) -> Result<ShimEffect, MemError> {
        if let Some(wb) = self.pending.take() {
            self.mem.write(wb.addr, wb.word, FULL_MASK);
            let mut effect = ShimEffect {
                ready: true,
                ..ShimEffect::default()
            };
            if let Some(req) = request {
                stats.busy_refusals += 1;
                if Self::is_dma(req, dma_enable) && req.addr == wb.addr {
                    stats.conflicts += 1;
                    warn!(
                        bank = self.bank,
                        addr = req.addr,
                        "DMA beat collides with a pending atomic write-back; beat stalled"
                    );
                    effect.conflict = Some(AtomicConflict {
                        bank: self.bank,
                        addr: req.addr,
                    });
                }
            }
            return Ok(effect);
        }

        let Some(req) = request else {
            return Ok(ShimEffect {
                ready: true,
                ..ShimEffect::default()
            });
        };
        self.check_range(req.addr)?;

        if Self::is_dma(req, dma_enable) {
            if req.op != AtomicOp::None {
                return Err(MemError::DmaWithAtomicOp {
                    bank: self.bank,
                    op: req.op,
                });
            }
            let read = if req.write {
                self.mem.write(req.addr, req.wdata, req.byte_en);
                stats.dma_writes += 1;
                None
            } else {
                stats.dma_reads += 1;
                Some(self.mem.read(req.addr))
            };
            return Ok(ShimEffect {
                read,
                accepted: true,
                ready: true,
                conflict: None,
            });
        }

        if req.op == AtomicOp::None {
            let read = if req.write {
                self.mem.write(req.addr, req.wdata, req.byte_en);
                stats.stores += 1;
                None
            } else {
                stats.loads += 1;
                Some(self.mem.read(req.addr))
            };
            return Ok(ShimEffect {
                read,
                accepted: true,
                ready: true,
                conflict: None,
            });
        }

        // Fetch-and-op: read and combine now, latch the write-back for the
        // next step. The port is busy for exactly that step, so nothing can
        // observe or overwrite the word in between.
        let current = self.mem.read(req.addr);
        self.pending = Some(Writeback {
            addr: req.addr,
            word: atomic_alu(req.op, current, req.wdata),
        });
        stats.atomics += 1;
        Ok(ShimEffect {
            read: Some(current),
            accepted: true,
            ready: false,
            conflict: None,
        })
    }

    /// Drops any pending write-back. Storage contents are untouched.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Loads one word during construction, bypassing the port.
    pub(crate) fn load_word(&mut self, index: usize, word: u32) {
        self.mem.load_word(index, word);
    }

    /// Checks a word index against the array bounds.
    fn check_range(&self, addr: u32) -> Result<(), MemError> {
        if (addr as usize) < self.mem.len() {
            Ok(())
        } else {
            Err(MemError::AddressOutOfRange {
                bank: self.bank,
                addr,
                words: self.mem.len(),
            })
        }
    }

    /// A request is a bulk beat when it is marked itself or the global DMA
    /// window is asserted this step.
    fn is_dma(req: &BankRequest, dma_enable: bool) -> bool {
        req.dma || dma_enable
    }
}

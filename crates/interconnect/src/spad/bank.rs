//! One scratchpad bank: shim, storage, and read pipeline.
//!
//! Composes the per-bank triple behind a single step method. The shim owns
//! the storage array and resolves the access class; the read pipeline
//! aligns every read response to the configured fixed delay.

use crate::config::{BankInit, MemConfig};
use crate::error::MemError;
use crate::spad::pipeline::ReadPipeline;
use crate::spad::shim::{AtomicConflict, AtomicShim};
use crate::spad::signals::{BankRequest, BankResponse};
use crate::spad::sram::BankSram;
use crate::stats::BankStats;

/// Per-step output bundle of one bank port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BankStep {
    /// Response wires: delayed read data, validity, next-step readiness.
    pub response: BankResponse,
    /// True when the offered request was consumed this step.
    pub accepted: bool,
    /// Collision report for a stalled DMA beat, if any.
    pub conflict: Option<AtomicConflict>,
}

/// One independent bank of the scratchpad array.
#[derive(Clone, Debug)]
pub struct Bank {
    shim: AtomicShim,
    pipeline: ReadPipeline,
    stats: BankStats,
}

impl Bank {
    /// Builds bank `index` from the configured geometry and init mode.
    pub(crate) fn new(index: usize, config: &MemConfig) -> Self {
        let pattern = match config.init {
            BankInit::Pattern(word) => word,
            BankInit::Zero | BankInit::File(_) => 0,
        };
        Self {
            shim: AtomicShim::new(index, BankSram::new(config.words_per_bank, pattern)),
            pipeline: ReadPipeline::new(config.pipeline_depth),
            stats: BankStats::default(),
        }
    }

    /// Advances the bank by one step.
    ///
    /// Executes the shim (at most one storage operation) and then the read
    /// pipeline, so read data appears on the response exactly
    /// `pipeline_depth` steps after its request was accepted.
    pub fn step(
        &mut self,
        request: Option<&BankRequest>,
        dma_enable: bool,
    ) -> Result<BankStep, MemError> {
        let effect = self.shim.execute(request, dma_enable, &mut self.stats)?;
        if effect.accepted
            && let Some(req) = request
        {
            if req.is_core {
                self.stats.core_requests += 1;
            } else {
                self.stats.external_requests += 1;
            }
        }
        let read = self.pipeline.advance(effect.read);
        Ok(BankStep {
            response: BankResponse {
                read_data: read.unwrap_or(0),
                valid: read.is_some(),
                ready: effect.ready,
            },
            accepted: effect.accepted,
            conflict: effect.conflict,
        })
    }

    /// True when a request offered next step will be considered.
    #[inline]
    pub fn ready(&self) -> bool {
        self.shim.ready()
    }

    /// Returns this bank's counters.
    pub fn stats(&self) -> &BankStats {
        &self.stats
    }

    /// Clears control state: pending write-back and in-flight read data.
    /// Storage contents persist.
    pub fn reset(&mut self) {
        self.shim.reset();
        self.pipeline.flush();
    }

    /// Loads one word during construction, bypassing the port.
    pub(crate) fn load_word(&mut self, index: usize, word: u32) {
        self.shim.load_word(index, word);
    }
}

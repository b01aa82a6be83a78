//! Bank multiplexer: the indexed arena of scratchpad banks.
//!
//! Owns N independent banks and exposes one array-indexed port per bank.
//! The external address decoder routes each wide access here and drives the
//! DMA window flag uniformly across all banks during a bulk transfer; the
//! array performs no cross-bank coordination beyond that fan-out.

use tracing::debug;

use crate::config::{BankInit, MemConfig};
use crate::error::{InitError, MemError};
use crate::spad::bank::{Bank, BankStep};
use crate::spad::signals::BankRequest;
use crate::spad::sram::parse_image;
use crate::stats::BankStats;

/// The scratchpad bank array.
#[derive(Clone, Debug)]
pub struct BankArray {
    banks: Vec<Bank>,
}

impl BankArray {
    /// Builds the array from the configured geometry and init mode.
    ///
    /// An image file is parsed once and striped across banks in word order
    /// (word i lands in bank i mod N at word index i / N), matching the
    /// wide-row decomposition the external decoder applies to accesses.
    pub fn new(config: &MemConfig) -> Result<Self, InitError> {
        config.validate()?;
        let mut banks: Vec<Bank> = (0..config.banks)
            .map(|index| Bank::new(index, config))
            .collect();

        if let BankInit::File(path) = &config.init {
            let image = parse_image(path)?;
            let capacity = config.banks * config.words_per_bank;
            if image.len() > capacity {
                return Err(InitError::ImageTooLarge {
                    words: image.len(),
                    capacity,
                });
            }
            for (i, word) in image.iter().enumerate() {
                banks[i % config.banks].load_word(i / config.banks, *word);
            }
            debug!(
                path = %path.display(),
                words = image.len(),
                banks = config.banks,
                "bank image striped across the array"
            );
        }

        Ok(Self { banks })
    }

    /// Returns the number of banks.
    #[inline]
    pub fn bank_count(&self) -> usize {
        self.banks.len()
    }

    /// Borrows one bank, for inspection of per-bank state and counters.
    pub fn bank(&self, index: usize) -> Option<&Bank> {
        self.banks.get(index)
    }

    /// Advances one bank by one step.
    ///
    /// `dma_enable` is the global DMA window flag for this step; the caller
    /// threads it into every bank call of the step so a bulk transfer is
    /// seen uniformly across the array.
    pub fn step_bank(
        &mut self,
        index: usize,
        request: Option<&BankRequest>,
        dma_enable: bool,
    ) -> Result<BankStep, MemError> {
        let banks = self.banks.len();
        let Some(bank) = self.banks.get_mut(index) else {
            return Err(MemError::BankOutOfRange { index, banks });
        };
        bank.step(request, dma_enable)
    }

    /// Clears control state in every bank. Storage contents persist.
    pub fn reset(&mut self) {
        for bank in &mut self.banks {
            bank.reset();
        }
    }

    /// Sums the per-bank counters.
    pub fn stats(&self) -> BankStats {
        let mut total = BankStats::default();
        for bank in &self.banks {
            total.merge(bank.stats());
        }
        total
    }
}

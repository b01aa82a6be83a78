//! Configuration for the interconnect model.
//!
//! This module defines the structures that parameterize the model. It provides:
//! 1. **Defaults:** Baseline geometry constants (banks, words, depths).
//! 2. **Structures:** The root `MemConfig` with serde field defaults.
//! 3. **Enums:** The bank initial-content mode (`BankInit`).
//!
//! Configuration is supplied as JSON by the embedding shell, or use
//! `MemConfig::default()` directly.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::InitError;

/// Default configuration constants for the interconnect model.
///
/// These values define the baseline geometry when not explicitly overridden
/// by the embedding shell.
mod defaults {
    /// Number of independent scratchpad banks.
    ///
    /// Four 32-bit banks back one 128-bit accelerator row; the external
    /// decoder decomposes each wide access into per-bank requests.
    pub const NUM_BANKS: usize = 4;

    /// Words per bank (32-bit words).
    pub const WORDS_PER_BANK: usize = 1024;

    /// Capacity of the elastic request queue.
    ///
    /// Eight slots absorb the legacy port's grant registration latency plus
    /// a short consumer stall without deasserting the grant.
    pub const QUEUE_DEPTH: usize = 8;

    /// Depth of the per-bank read output pipeline.
    ///
    /// A read accepted at step T presents its data at step T + depth.
    pub const PIPELINE_DEPTH: usize = 1;
}

/// Initial contents of the bank storage arrays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BankInit {
    /// Every word starts at zero.
    #[default]
    Zero,
    /// Every word starts at the given 32-bit pattern.
    Pattern(u32),
    /// Words are loaded from a text image file and striped across banks in
    /// word order (word i lands in bank i mod N).
    ///
    /// Image format: one 32-bit hex word per line, with an optional `0x`
    /// prefix; blank lines and `//` or `#` comments are ignored.
    File(PathBuf),
}

/// Root configuration for the interconnect model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemConfig {
    /// Number of independent banks in the array.
    #[serde(default = "MemConfig::default_banks")]
    pub banks: usize,

    /// Words (32-bit) per bank.
    #[serde(default = "MemConfig::default_words_per_bank")]
    pub words_per_bank: usize,

    /// Capacity of the elastic request queue.
    #[serde(default = "MemConfig::default_queue_depth")]
    pub queue_depth: usize,

    /// Depth of each bank's read output pipeline (at least 1).
    #[serde(default = "MemConfig::default_pipeline_depth")]
    pub pipeline_depth: usize,

    /// Initial contents of the bank storage arrays.
    #[serde(default)]
    pub init: BankInit,
}

impl MemConfig {
    /// Returns the default bank count.
    fn default_banks() -> usize {
        defaults::NUM_BANKS
    }

    /// Returns the default words-per-bank count.
    fn default_words_per_bank() -> usize {
        defaults::WORDS_PER_BANK
    }

    /// Returns the default elastic queue capacity.
    fn default_queue_depth() -> usize {
        defaults::QUEUE_DEPTH
    }

    /// Returns the default read pipeline depth.
    fn default_pipeline_depth() -> usize {
        defaults::PIPELINE_DEPTH
    }

    /// Checks the geometry for zero-sized structures.
    ///
    /// Every field must be non-zero; in particular a zero-depth read
    /// pipeline would mean combinational read data, which the bank port
    /// does not model.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.banks == 0 {
            return Err(InitError::ZeroGeometry { field: "banks" });
        }
        if self.words_per_bank == 0 {
            return Err(InitError::ZeroGeometry {
                field: "words_per_bank",
            });
        }
        if self.queue_depth == 0 {
            return Err(InitError::ZeroGeometry {
                field: "queue_depth",
            });
        }
        if self.pipeline_depth == 0 {
            return Err(InitError::ZeroGeometry {
                field: "pipeline_depth",
            });
        }
        Ok(())
    }
}

impl Default for MemConfig {
    fn default() -> Self {
        Self {
            banks: defaults::NUM_BANKS,
            words_per_bank: defaults::WORDS_PER_BANK,
            queue_depth: defaults::QUEUE_DEPTH,
            pipeline_depth: defaults::PIPELINE_DEPTH,
            init: BankInit::default(),
        }
    }
}

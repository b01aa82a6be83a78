//! Single-port bank storage array.
//!
//! Models one synchronous SRAM macro: NumWords x 32 bits, one operation per
//! step, byte-lane write masking. The array adds no latency of its own; the
//! read pipeline in front of the bank port provides the visible delay.
//!
//! The array is owned exclusively by the bank's atomic shim, which enforces
//! the one-operation-per-step port discipline and bounds-checks addresses
//! before they reach here. Accesses out of range are contract breaches and
//! assert.

use std::fs;
use std::path::Path;

use crate::error::InitError;

/// Builds the 32-bit write mask selected by a 4-bit byte enable.
fn lane_mask(byte_en: u8) -> u32 {
    let mut mask = 0u32;
    for lane in 0..4 {
        if byte_en & (1 << lane) != 0 {
            mask |= 0xFF << (lane * 8);
        }
    }
    mask
}

/// One bank's storage array.
#[derive(Clone, Debug)]
pub struct BankSram {
    words: Vec<u32>,
}

impl BankSram {
    /// Creates the array with every word initialized to `pattern`.
    pub fn new(words: usize, pattern: u32) -> Self {
        Self {
            words: vec![pattern; words],
        }
    }

    /// Returns the number of words in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the array holds no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at `addr`.
    pub fn read(&self, addr: u32) -> u32 {
        assert!(
            (addr as usize) < self.words.len(),
            "bank read out of bounds: word {addr:#x}"
        );
        self.words[addr as usize]
    }

    /// Writes the byte lanes of `addr` selected by `byte_en`.
    ///
    /// Unselected lanes keep their previous contents bit for bit.
    pub fn write(&mut self, addr: u32, data: u32, byte_en: u8) {
        assert!(
            (addr as usize) < self.words.len(),
            "bank write out of bounds: word {addr:#x}"
        );
        let mask = lane_mask(byte_en);
        let old = self.words[addr as usize];
        self.words[addr as usize] = (old & !mask) | (data & mask);
    }

    /// Loads one word during array construction, bypassing the port.
    pub(crate) fn load_word(&mut self, index: usize, word: u32) {
        self.words[index] = word;
    }
}

/// Parses a bank image file into its word list.
///
/// Format: one 32-bit hex word per line, with an optional `0x` prefix.
/// Blank lines and `//` or `#` comments are ignored.
pub fn parse_image(path: &Path) -> Result<Vec<u32>, InitError> {
    let text = fs::read_to_string(path).map_err(|source| InitError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = match raw.find("//") {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let digits = line.strip_prefix("0x").unwrap_or(line);
        let word =
            u32::from_str_radix(digits, 16).map_err(|_| InitError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                text: raw.trim().to_string(),
            })?;
        words.push(word);
    }
    Ok(words)
}

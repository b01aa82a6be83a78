//! Fixed-latency read output pipeline.
//!
//! A shift register of configurable depth D placed between a bank's storage
//! array and its response port. A word pushed at step T emerges at exactly
//! step T + D; bubbles travel through as invalid slots. The register
//! advances once per step, unconditionally, so the delay is exact and no
//! value is reordered or dropped.

/// One slot of the delay line.
#[derive(Clone, Copy, Debug, Default)]
struct PipeSlot {
    word: u32,
    /// Whether this slot carries a word.
    valid: bool,
}

/// Read-data delay line of fixed depth.
#[derive(Clone, Debug)]
pub struct ReadPipeline {
    slots: Vec<PipeSlot>,
    /// Slot that expires (and is refilled) at the next advance.
    cursor: usize,
}

impl ReadPipeline {
    /// Creates a delay line of the given depth (at least 1).
    pub fn new(depth: usize) -> Self {
        assert!(depth > 0, "read pipeline depth must be at least 1");
        Self {
            slots: vec![PipeSlot::default(); depth],
            cursor: 0,
        }
    }

    /// Returns the configured depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.slots.len()
    }

    /// Advances the delay line by one step.
    ///
    /// `input` is the word entering this step (the bank read issued now);
    /// the return value is the word that entered exactly `depth` steps ago,
    /// or `None` if that step carried a bubble.
    pub fn advance(&mut self, input: Option<u32>) -> Option<u32> {
        let expiring = self.slots[self.cursor];
        self.slots[self.cursor] = match input {
            Some(word) => PipeSlot { word, valid: true },
            None => PipeSlot::default(),
        };
        self.cursor = (self.cursor + 1) % self.slots.len();
        expiring.valid.then_some(expiring.word)
    }

    /// Invalidates all in-flight words. Depth is unchanged.
    pub fn flush(&mut self) {
        for slot in &mut self.slots {
            slot.valid = false;
        }
        self.cursor = 0;
    }
}

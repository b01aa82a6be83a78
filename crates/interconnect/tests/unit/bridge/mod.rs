//! Unit tests for the legacy-port bridge.

/// Polarity, strobe widening, and tie-off checks on translation.
pub mod translation;

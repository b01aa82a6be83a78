//! # Unit Components
//!
//! Central hub for the interconnect unit tests, organized by subsystem.

/// Unit tests for the legacy-port bridge (grant timing, translation).
pub mod bridge;

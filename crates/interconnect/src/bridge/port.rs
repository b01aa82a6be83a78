//! Signal bundles at the two faces of the bridge.
//!
//! The legacy side speaks the accelerator's SRAM-style handshake: a request
//! line answered by a registered grant, an active-low write enable, and a
//! narrow byte-enable. The target side is a generic ready/valid memory
//! request. Translation between the two happens at push time and is pure.

use crate::spad::signals::AtomicOp;

/// Legacy-side request, sampled while the request line is asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SramRequest {
    /// Address as driven by the legacy master.
    pub addr: u32,
    /// Active-low write enable: false selects a write, true a read.
    pub write_n: bool,
    /// Narrow byte-enable mask (4 lanes, bit 0 = lowest byte).
    pub byte_en: u8,
    /// Write data.
    pub wdata: u32,
}

/// Translated request as stored in the queue and handed to the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemRequest {
    /// Target-side address, zero-extended from the legacy width.
    pub addr: u64,
    /// Active-high write flag (polarity corrected).
    pub write: bool,
    /// Full-width byte strobe. Bit 0 of the legacy mask is replicated
    /// across all eight lanes; legacy bits 1..3 are not consulted.
    pub strobe: u8,
    /// Write data, zero-extended.
    pub data: u64,
    /// Atomic operation tag. The legacy port never issues atomics, so the
    /// bridge ties this to `None`.
    pub op: AtomicOp,
    /// User/routing metadata, tied off to zero.
    pub user: u32,
}

impl MemRequest {
    /// Translates a legacy request into its target-side form.
    pub fn from_legacy(req: &SramRequest) -> Self {
        Self {
            addr: u64::from(req.addr),
            write: !req.write_n,
            strobe: if req.byte_en & 1 == 0 { 0x00 } else { 0xFF },
            data: u64::from(req.wdata),
            op: AtomicOp::None,
            user: 0,
        }
    }
}

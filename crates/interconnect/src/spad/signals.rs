//! Signal bundles exchanged at the bank ports.
//!
//! These structs model the wires between the external address decoder and
//! the per-bank shim/pipeline pair. They carry no behavior; the shim and
//! bank implement the per-step semantics.

/// Atomic fetch-and-op kinds executed by the bank shim.
///
/// Encodings are not modeled; the enum is the operation tag itself. Every
/// kind returns the pre-update memory word and writes back the combined
/// value one step later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AtomicOp {
    /// Not an atomic access.
    #[default]
    None,
    /// Write the operand, return the old word.
    Swap,
    /// Wrapping two's-complement add.
    Add,
    /// Bitwise exclusive or.
    Xor,
    /// Bitwise and.
    And,
    /// Bitwise or.
    Or,
    /// Signed minimum.
    Min,
    /// Signed maximum.
    Max,
    /// Unsigned minimum.
    Minu,
    /// Unsigned maximum.
    Maxu,
}

/// A single-bank access presented to the atomic shim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BankRequest {
    /// Word index into the bank's storage array.
    pub addr: u32,
    /// Write (true) or read (false).
    pub write: bool,
    /// Write data; the fetch-and-op operand for atomic accesses.
    pub wdata: u32,
    /// Byte-enable mask for writes, one bit per lane, bit 0 = lowest byte.
    /// Only the low four bits are honoured.
    pub byte_en: u8,
    /// Atomic kind; `None` for plain and DMA accesses.
    pub op: AtomicOp,
    /// Requester identity, carried through for accounting.
    pub requester: u8,
    /// True when the access originates from the accelerator core.
    pub is_core: bool,
    /// Marks the access as a beat of a bulk DMA transfer.
    pub dma: bool,
}

/// Per-step response presented at a bank port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BankResponse {
    /// Read data emerging from the output pipeline this step.
    pub read_data: u32,
    /// True when `read_data` carries a word this step.
    pub valid: bool,
    /// True when the shim can accept a request next step.
    pub ready: bool,
}

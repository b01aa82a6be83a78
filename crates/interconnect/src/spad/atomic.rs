//! Atomic read-modify-write arithmetic.
//!
//! Implements the combinational half of a fetch-and-op: given the current
//! memory word and the request operand, computes the word written back.
//! The returned-to-requester value is always the unmodified memory word;
//! the shim handles that separately.
//!
//! Signed kinds operate on the bank word as a 32-bit two's-complement value.

use crate::spad::signals::AtomicOp;

/// Computes the write-back value of an atomic fetch-and-op.
///
/// # Arguments
///
/// * `op`      - The atomic operation kind
/// * `mem_val` - The current word read from the bank
/// * `operand` - The operand carried by the request
///
/// # Returns
///
/// The combined word to be written back. `AtomicOp::None` leaves the memory
/// word unchanged.
pub fn atomic_alu(op: AtomicOp, mem_val: u32, operand: u32) -> u32 {
    let a = mem_val as i32;
    let b = operand as i32;
    let res = match op {
        AtomicOp::None => a,
        AtomicOp::Swap => b,
        AtomicOp::Add => a.wrapping_add(b),
        AtomicOp::Xor => a ^ b,
        AtomicOp::And => a & b,
        AtomicOp::Or => a | b,
        AtomicOp::Min => a.min(b),
        AtomicOp::Max => a.max(b),
        AtomicOp::Minu => mem_val.min(operand) as i32,
        AtomicOp::Maxu => mem_val.max(operand) as i32,
    };
    res as u32
}

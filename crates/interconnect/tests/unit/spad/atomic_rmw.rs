//! Fetch-and-op semantics at the bank port.
//!
//! An atomic access returns the pre-update word and holds the port for one
//! write-back step; no interleaved access can observe the window between
//! the read and the write-back.

use spadsim_core::spad::signals::AtomicOp;
use spadsim_core::{BankArray, MemConfig};

use crate::common::requests::{fetch_op, load, store};

fn one_bank() -> BankArray {
    let config = MemConfig {
        banks: 1,
        words_per_bank: 16,
        ..MemConfig::default()
    };
    BankArray::new(&config).unwrap()
}

#[test]
fn fetch_add_returns_old_word_then_load_sees_sum() {
    let mut array = one_bank();

    // Word 4 holds 0x5.
    let seeded = array.step_bank(0, Some(&store(4, 0x5)), false).unwrap();
    assert!(seeded.accepted);

    // Fetch-and-add with operand 0x3: accepted, port busy next step.
    let amo = array
        .step_bank(0, Some(&fetch_op(4, AtomicOp::Add, 0x3)), false)
        .unwrap();
    assert!(amo.accepted);
    assert!(!amo.response.ready);

    // Write-back step. The read pipeline now presents the pre-update word.
    let wb = array.step_bank(0, None, false).unwrap();
    assert!(wb.response.valid);
    assert_eq!(wb.response.read_data, 0x5);
    assert!(wb.response.ready);

    // A later plain load observes the combined value.
    let rd = array.step_bank(0, Some(&load(4)), false).unwrap();
    let out = array.step_bank(0, None, false).unwrap();
    assert!(!rd.response.valid);
    assert!(out.response.valid);
    assert_eq!(out.response.read_data, 0x8);
}

#[test]
fn no_access_lands_between_read_and_writeback() {
    let mut array = one_bank();
    let _ = array.step_bank(0, Some(&store(2, 10)), false).unwrap();
    let _ = array
        .step_bank(0, Some(&fetch_op(2, AtomicOp::Add, 1)), false)
        .unwrap();

    // A store offered during the write-back step is refused outright.
    let refused = array.step_bank(0, Some(&store(2, 99)), false).unwrap();
    assert!(!refused.accepted);

    // The word holds the atomic result, not 99 and not an intermediate.
    let _ = array.step_bank(0, Some(&load(2)), false).unwrap();
    let out = array.step_bank(0, None, false).unwrap();
    assert_eq!(out.response.read_data, 11);
    assert_eq!(array.stats().busy_refusals, 1);
}

#[test]
fn ready_deasserts_for_exactly_one_step() {
    let mut array = one_bank();
    let accept = array
        .step_bank(0, Some(&fetch_op(0, AtomicOp::Swap, 1)), false)
        .unwrap();
    assert!(!accept.response.ready);
    let writeback = array.step_bank(0, None, false).unwrap();
    assert!(writeback.response.ready);
    let idle = array.step_bank(0, None, false).unwrap();
    assert!(idle.response.ready);
}

#[test]
fn swap_and_unsigned_max_combine_correctly() {
    let mut array = one_bank();
    let _ = array.step_bank(0, Some(&store(7, 3)), false).unwrap();

    let _ = array
        .step_bank(0, Some(&fetch_op(7, AtomicOp::Maxu, 0xFFFF_FFFF)), false)
        .unwrap();
    let old = array.step_bank(0, None, false).unwrap();
    assert_eq!(old.response.read_data, 3);

    let _ = array
        .step_bank(0, Some(&fetch_op(7, AtomicOp::Swap, 0x111)), false)
        .unwrap();
    let prev = array.step_bank(0, None, false).unwrap();
    assert_eq!(prev.response.read_data, 0xFFFF_FFFF);

    let _ = array.step_bank(0, Some(&load(7)), false).unwrap();
    let out = array.step_bank(0, None, false).unwrap();
    assert_eq!(out.response.read_data, 0x111);
}

#[test]
fn atomics_are_counted() {
    let mut array = one_bank();
    let _ = array
        .step_bank(0, Some(&fetch_op(1, AtomicOp::Or, 0b1010)), false)
        .unwrap();
    let _ = array.step_bank(0, None, false).unwrap();
    let stats = array.stats();
    assert_eq!(stats.atomics, 1);
    assert_eq!(stats.core_requests, 1);
}

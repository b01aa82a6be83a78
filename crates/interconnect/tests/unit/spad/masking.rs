//! Byte-enable masking at the storage array.
//!
//! For every 4-bit enable mask, a write must replace exactly the selected
//! byte lanes and leave the others bit-identical.

use proptest::prelude::*;
use spadsim_core::{BankArray, MemConfig};

use crate::common::requests::{load, store, store_masked};

fn one_bank() -> BankArray {
    let config = MemConfig {
        banks: 1,
        words_per_bank: 4,
        ..MemConfig::default()
    };
    BankArray::new(&config).unwrap()
}

/// The word expected after a masked write over `old`.
fn merge(old: u32, data: u32, byte_en: u8) -> u32 {
    let mut out = old;
    for lane in 0..4 {
        if byte_en & (1 << lane) != 0 {
            let mask = 0xFFu32 << (lane * 8);
            out = (out & !mask) | (data & mask);
        }
    }
    out
}

/// Writes `old` then a masked `data` over it and reads the word back.
fn write_then_read(old: u32, data: u32, byte_en: u8) -> u32 {
    let mut array = one_bank();
    let _ = array.step_bank(0, Some(&store(0, old)), false).unwrap();
    let _ = array
        .step_bank(0, Some(&store_masked(0, data, byte_en)), false)
        .unwrap();
    let _ = array.step_bank(0, Some(&load(0)), false).unwrap();
    let out = array.step_bank(0, None, false).unwrap();
    assert!(out.response.valid);
    out.response.read_data
}

#[test]
fn every_mask_touches_only_its_lanes() {
    let old = 0x8899_AABB;
    let data = 0x0011_2233;
    for byte_en in 0..16u8 {
        assert_eq!(
            write_then_read(old, data, byte_en),
            merge(old, data, byte_en),
            "mask {byte_en:#06b}"
        );
    }
}

#[test]
fn single_lane_writes_land_in_place() {
    assert_eq!(write_then_read(0x0000_0000, 0xFFFF_FFFF, 0b0001), 0x0000_00FF);
    assert_eq!(write_then_read(0x0000_0000, 0xFFFF_FFFF, 0b0010), 0x0000_FF00);
    assert_eq!(write_then_read(0x0000_0000, 0xFFFF_FFFF, 0b0100), 0x00FF_0000);
    assert_eq!(write_then_read(0x0000_0000, 0xFFFF_FFFF, 0b1000), 0xFF00_0000);
}

proptest! {
    /// Unselected lanes survive any write, for arbitrary contents.
    #[test]
    fn unselected_lanes_are_preserved(
        old in any::<u32>(),
        data in any::<u32>(),
        byte_en in 0u8..16,
    ) {
        prop_assert_eq!(write_then_read(old, data, byte_en), merge(old, data, byte_en));
    }
}

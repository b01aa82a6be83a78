//! Translation at the bridge: polarity, strobe widening, tie-offs.

use pretty_assertions::assert_eq;
use spadsim_core::spad::signals::AtomicOp;
use spadsim_core::{ElasticQueue, MemRequest, SramRequest};

use crate::common::requests::{sram_write, translated_write};

#[test]
fn write_enable_polarity_is_inverted() {
    // Legacy write enable is active low: driving it to 0 selects a write.
    let write = MemRequest::from_legacy(&SramRequest {
        addr: 0x40,
        write_n: false,
        byte_en: 0b1111,
        wdata: 0x1234_5678,
    });
    assert!(write.write);

    let read = MemRequest::from_legacy(&SramRequest {
        addr: 0x40,
        write_n: true,
        byte_en: 0b1111,
        wdata: 0,
    });
    assert!(!read.write);
}

#[test]
fn strobe_replicates_legacy_bit_zero_only() {
    let full = MemRequest::from_legacy(&SramRequest {
        addr: 0,
        write_n: false,
        byte_en: 0b0001,
        wdata: 0,
    });
    assert_eq!(full.strobe, 0xFF);

    // Bits 1..3 of the narrow mask are not consulted: a mask with bit 0
    // clear produces an all-zero strobe even if other bits are set.
    let none = MemRequest::from_legacy(&SramRequest {
        addr: 0,
        write_n: false,
        byte_en: 0b1110,
        wdata: 0,
    });
    assert_eq!(none.strobe, 0x00);
}

#[test]
fn narrow_fields_zero_extend_and_tie_offs_are_zero() {
    let translated = MemRequest::from_legacy(&SramRequest {
        addr: 0xFFFF_FFFF,
        write_n: false,
        byte_en: 0b0001,
        wdata: 0xDEAD_BEEF,
    });
    assert_eq!(translated.addr, 0x0000_0000_FFFF_FFFF);
    assert_eq!(translated.data, 0x0000_0000_DEAD_BEEF);
    assert_eq!(translated.op, AtomicOp::None);
    assert_eq!(translated.user, 0);
}

#[test]
fn whole_translated_request_matches_expectation() {
    assert_eq!(
        MemRequest::from_legacy(&sram_write(0x80, 0xCAFE_F00D)),
        translated_write(0x80, 0xCAFE_F00D)
    );
}

#[test]
fn stored_requests_are_immutable_while_resident() {
    // The queue stores the translated form at push time; later changes to
    // the master's wires cannot retroactively alter a stored request.
    let mut q = ElasticQueue::new(2);
    let mut wires = sram_write(0x10, 0xAAAA_AAAA);
    assert!(q.submit(&wires).unwrap());
    wires.wdata = 0x5555_5555;
    wires.write_n = true;
    q.step();

    let popped = q.try_pop(true).unwrap();
    assert_eq!(popped, translated_write(0x10, 0xAAAA_AAAA));
}

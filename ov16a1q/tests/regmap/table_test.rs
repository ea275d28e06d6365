#[path = "../common/mod.rs"]
mod common;

use ov16a1q::modes::tables;
use ov16a1q::regmap::RegisterMap;
use ov16a1q::transport::MockBus;
use ov16a1q::{Error, RegisterEntry};

#[test]
fn table_playback_is_ordered_and_single_byte() {
    let bus = MockBus::new();
    let mut map = RegisterMap::new(Box::new(bus.clone()));

    map.play(tables::COMMON_REGS).unwrap();

    let writes = bus.writes();
    assert_eq!(writes.len(), tables::COMMON_REGS.len());
    for (frame, entry) in writes.iter().zip(tables::COMMON_REGS) {
        assert_eq!(frame, &common::fixtures::frame(entry.address, &[entry.value as u8]));
    }
}

#[test]
fn table_playback_survives_failures_and_reports_last() {
    let table = [
        RegisterEntry::new(0x0103, 0x01),
        RegisterEntry::new(0x0102, 0x00),
        RegisterEntry::new(0x0301, 0x48),
        RegisterEntry::new(0x0302, 0x31),
    ];

    let bus = MockBus::new();
    // First three writes fail; only the last succeeds.
    bus.fail_next_writes(3);
    let mut map = RegisterMap::new(Box::new(bus.clone()));

    let err = map.play(&table).unwrap_err();
    assert_eq!(bus.write_count(), table.len());
    assert!(matches!(err, Error::Io { address: 0x0301 }));
}

use ov16a1q::regmap::RegisterMap;
use ov16a1q::test_support::SimBus;
use ov16a1q::transport::MockBus;
use ov16a1q::Error;

#[test]
fn roundtrip_all_valid_widths() {
    let sim = SimBus::new();
    let mut map = RegisterMap::new(Box::new(sim.clone()));

    let value = 0xdead_beef_u32;
    for len in 1u16..=4 {
        map.write(0x4000, len, value).unwrap();
        let got = map.read(0x4000, len).unwrap();
        let mask = if len == 4 {
            u32::MAX
        } else {
            (1u32 << (8 * len)) - 1
        };
        assert_eq!(got, value & mask, "width {len}");
    }
}

#[test]
fn invalid_widths_issue_no_bus_transactions() {
    let bus = MockBus::new();
    let mut map = RegisterMap::new(Box::new(bus.clone()));

    assert!(matches!(
        map.write(0x4000, 0, 1),
        Err(Error::InvalidAccessWidth { actual: 0 })
    ));
    assert!(matches!(
        map.write(0x4000, 5, 1),
        Err(Error::InvalidAccessWidth { actual: 5 })
    ));
    assert!(matches!(
        map.read(0x4000, 0),
        Err(Error::InvalidAccessWidth { actual: 0 })
    ));
    assert!(matches!(
        map.read(0x4000, 5),
        Err(Error::InvalidAccessWidth { actual: 5 })
    ));
    assert_eq!(bus.write_count(), 0);
}

#[test]
fn narrow_read_returns_leading_bytes() {
    let sim = SimBus::new();
    let mut map = RegisterMap::new(Box::new(sim.clone()));

    map.write(0x5000, 4, 0xffff_ffff).unwrap();
    // A narrower read of the same registers only sees `len` bytes.
    assert_eq!(map.read(0x5000, 2).unwrap(), 0xffff);
}

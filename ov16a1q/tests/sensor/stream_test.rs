#[path = "../common/mod.rs"]
mod common;

use ov16a1q::modes::{tables, MODES};
use ov16a1q::power::PowerState;
use ov16a1q::test_support::bound_sensor;
use ov16a1q::{Error, StreamState};

#[test]
fn stream_start_plays_tables_controls_then_enable() {
    let (rig, sensor) = bound_sensor();
    rig.bus.clear_writes();

    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.stream_state(), StreamState::Streaming);

    let mode = &MODES[0];
    let mut expected = Vec::new();
    for entry in tables::COMMON_REGS.iter().chain(mode.regs) {
        expected.push(common::fixtures::frame(entry.address, &[entry.value as u8]));
    }
    // Control refresh in creation order: vertical blank (as frame
    // total), exposure, analog gain.
    expected.push(common::fixtures::frame(0x380e, &[0x0f, 0x50])); // 1728 + 2192
    expected.push(common::fixtures::frame(0x3500, &[0x00, 0x0f, 0x4c])); // 3920 - 4
    expected.push(common::fixtures::frame(0x3508, &[0x00, 0x80]));
    expected.push(common::fixtures::stream_on_frame());

    assert_eq!(rig.bus.writes(), expected);
}

#[test]
fn redundant_start_and_stop_are_no_ops() {
    let (rig, sensor) = bound_sensor();
    rig.bus.clear_writes();

    // Stop while already stopped: no bus traffic, no error.
    sensor.set_stream(false).unwrap();
    assert_eq!(rig.bus.write_count(), 0);

    sensor.set_stream(true).unwrap();
    let after_start = rig.bus.write_count();

    // Start while already streaming: no further traffic.
    sensor.set_stream(true).unwrap();
    assert_eq!(rig.bus.write_count(), after_start);
}

#[test]
fn stream_stop_writes_disable_and_defers_power_down() {
    let (rig, sensor) = bound_sensor();
    sensor.set_stream(true).unwrap();
    rig.bus.clear_writes();

    sensor.set_stream(false).unwrap();
    assert_eq!(sensor.stream_state(), StreamState::Stopped);
    assert_eq!(rig.bus.writes(), vec![common::fixtures::stream_off_frame()]);

    // Power-down waits for the autosuspend delay.
    assert_eq!(sensor.power_state(), PowerState::Active);
    assert!(!sensor.maybe_autosuspend());
    assert_eq!(rig.clock.disable_calls(), 0);
}

#[test]
fn failed_start_releases_power_and_stays_stopped() {
    let (rig, sensor) = bound_sensor();
    rig.bus.clear_writes();
    rig.bus.fail_next_writes(usize::MAX);

    let err = sensor.set_stream(true).unwrap_err();
    // The table player runs to the end and reports the last failure.
    let last = tables::COMMON_REGS.last().unwrap();
    assert!(matches!(err, Error::Io { address } if address == last.address));

    assert_eq!(sensor.stream_state(), StreamState::Stopped);
    assert_eq!(sensor.power_state(), PowerState::Suspended);
    assert_eq!(rig.clock.enable_calls(), rig.clock.disable_calls());
}

use ov16a1q::power::PowerState;
use ov16a1q::test_support::{bound_sensor, MockRig};
use ov16a1q::Error;

#[test]
fn probe_rejects_wrong_chip_id_and_powers_down() {
    let rig = MockRig::new();
    rig.bus.push_read(vec![0x12, 0x34]);

    let err = rig.builder().probe().unwrap_err();
    assert!(matches!(
        err,
        Error::ChipIdMismatch {
            expected: 0x1641,
            actual: 0x1234,
        }
    ));

    // Everything acquired on the failed probe is released exactly once.
    assert_eq!(rig.clock.enable_calls(), 1);
    assert_eq!(rig.clock.disable_calls(), 1);
    assert_eq!(rig.supplies.enable_calls(), 1);
    assert_eq!(rig.supplies.disable_calls(), 1);
}

#[test]
fn probe_surfaces_bus_errors_from_identification() {
    let rig = MockRig::new();
    rig.bus.fail_next_reads(1);

    let err = rig.builder().probe().unwrap_err();
    assert!(matches!(err, Error::Io { address: 0x300b }));
    assert_eq!(rig.clock.enable_calls(), rig.clock.disable_calls());
}

#[test]
fn bound_sensor_idles_under_autosuspend() {
    let (rig, sensor) = bound_sensor();

    // Bind leaves the device powered; the autosuspend delay has not
    // elapsed yet, so an immediate tick does nothing.
    assert_eq!(sensor.power_state(), PowerState::Active);
    assert!(!sensor.maybe_autosuspend());
    assert_eq!(rig.clock.disable_calls(), 0);
}

#[test]
fn shutdown_powers_off_unconditionally() {
    let (rig, sensor) = bound_sensor();

    sensor.shutdown();
    assert_eq!(sensor.power_state(), PowerState::Suspended);
    assert_eq!(rig.clock.enable_calls(), rig.clock.disable_calls());
    assert_eq!(rig.supplies.enable_calls(), rig.supplies.disable_calls());

    // A second shutdown is harmless.
    sensor.shutdown();
    assert_eq!(rig.clock.disable_calls(), 1);
}

#[path = "../common/mod.rs"]
mod common;

use ov16a1q::test_support::bound_sensor;
use ov16a1q::{ControlId, Error};

#[test]
fn vblank_drives_the_exposure_ceiling() {
    let (_rig, sensor) = bound_sensor();

    for vblank in [2192_i64, 3000, 10_000, 0xffff - 1728] {
        sensor.set_ctrl(ControlId::VBlank, vblank).unwrap();
        let ceiling = 1728 + vblank - 2;
        assert_eq!(sensor.ctrl_range(ControlId::Exposure).unwrap().1, ceiling);
        // The exposure value itself follows the new ceiling.
        assert_eq!(sensor.ctrl(ControlId::Exposure).unwrap(), ceiling);
    }
}

#[test]
fn vblank_below_minimum_clamps_before_propagating() {
    let (_rig, sensor) = bound_sensor();

    sensor.set_ctrl(ControlId::VBlank, 0).unwrap();
    assert_eq!(sensor.ctrl(ControlId::VBlank).unwrap(), 2192);
    assert_eq!(
        sensor.ctrl(ControlId::Exposure).unwrap(),
        1728 + 2192 - 2
    );
}

#[test]
fn read_only_controls_reject_writes() {
    let (_rig, sensor) = bound_sensor();

    for id in [ControlId::LinkFreq, ControlId::PixelRate, ControlId::HBlank] {
        let err = sensor.set_ctrl(id, 1).unwrap_err();
        assert!(matches!(err, Error::ReadOnlyControl(rejected) if rejected == id));
    }
}

#[test]
fn analog_gain_clamps_into_range() {
    let (_rig, sensor) = bound_sensor();

    sensor.set_ctrl(ControlId::AnalogGain, 1_000_000).unwrap();
    assert_eq!(sensor.ctrl(ControlId::AnalogGain).unwrap(), 1984);

    sensor.set_ctrl(ControlId::AnalogGain, 0).unwrap();
    assert_eq!(sensor.ctrl(ControlId::AnalogGain).unwrap(), 128);
}

#[test]
fn control_writes_skip_hardware_while_idle() {
    let (rig, sensor) = bound_sensor();
    rig.bus.clear_writes();

    sensor.set_ctrl(ControlId::AnalogGain, 256).unwrap();
    assert_eq!(rig.bus.write_count(), 0);
    // The value is still accepted and visible.
    assert_eq!(sensor.ctrl(ControlId::AnalogGain).unwrap(), 256);
}

#[test]
fn control_writes_reach_hardware_while_streaming() {
    let (rig, sensor) = bound_sensor();
    sensor.set_stream(true).unwrap();
    rig.bus.clear_writes();

    sensor.set_ctrl(ControlId::AnalogGain, 256).unwrap();
    assert_eq!(rig.bus.writes(), vec![common::fixtures::frame(0x3508, &[0x01, 0x00])]);

    rig.bus.clear_writes();
    sensor.set_ctrl(ControlId::Exposure, 100).unwrap();
    assert_eq!(
        rig.bus.writes(),
        vec![common::fixtures::frame(0x3500, &[0x00, 0x00, 0x64])]
    );
}

#[test]
fn vblank_write_updates_the_frame_total() {
    let (rig, sensor) = bound_sensor();
    sensor.set_stream(true).unwrap();
    rig.bus.clear_writes();

    sensor.set_ctrl(ControlId::VBlank, 2500).unwrap();
    // 1728 + 2500 = 4228 = 0x1084 written to the frame-total register.
    assert_eq!(rig.bus.writes()[0], common::fixtures::frame(0x380e, &[0x10, 0x84]));
}

use ov16a1q::test_support::bound_sensor;
use ov16a1q::{
    Error, Field, FormatWhich, FrameFormat, MbusCode, Rect, SelectionTarget,
};

fn request(width: u32, height: u32) -> FrameFormat {
    FrameFormat {
        width,
        height,
        code: MbusCode::Sbggr10,
        field: Field::None,
    }
}

#[test]
fn any_requested_size_negotiates_to_the_catalog() {
    let (_rig, sensor) = bound_sensor();

    for (w, h) in [(1, 1), (640, 480), (2304, 1728), (8000, 6000)] {
        let fmt = sensor.set_format(request(w, h), FormatWhich::Try).unwrap();
        assert_eq!((fmt.width, fmt.height), (2304, 1728));
        assert_eq!(fmt.code, MbusCode::Sbggr10);
        assert_eq!(fmt.field, Field::None);
    }
}

#[test]
fn active_format_issues_no_bus_traffic_while_idle() {
    let (rig, sensor) = bound_sensor();
    rig.bus.clear_writes();

    let fmt = sensor
        .set_format(request(1920, 1080), FormatWhich::Active)
        .unwrap();
    assert_eq!(sensor.format(), fmt);
    assert_eq!(rig.bus.write_count(), 0);
}

#[test]
fn mbus_code_enumeration_is_single_entry() {
    let (_rig, sensor) = bound_sensor();

    assert_eq!(sensor.enum_mbus_code(0).unwrap(), MbusCode::Sbggr10);
    assert!(matches!(
        sensor.enum_mbus_code(1),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn frame_size_enumeration_is_discrete() {
    let (_rig, sensor) = bound_sensor();

    let range = sensor.enum_frame_sizes(0, MbusCode::Sbggr10).unwrap();
    assert_eq!(range.min_width, range.max_width);
    assert_eq!(range.min_height, range.max_height);
    assert_eq!((range.min_width, range.min_height), (2304, 1728));

    assert!(matches!(
        sensor.enum_frame_sizes(1, MbusCode::Sbggr10),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn selection_targets_report_the_active_array() {
    let (_rig, sensor) = bound_sensor();

    let full = Rect {
        left: 0,
        top: 0,
        width: 2304,
        height: 1728,
    };
    assert_eq!(sensor.selection(SelectionTarget::Crop), full);
    assert_eq!(sensor.selection(SelectionTarget::CropDefault), full);
    assert_eq!(sensor.selection(SelectionTarget::CropBounds), full);
    assert_eq!(sensor.selection(SelectionTarget::NativeSize), full);
}

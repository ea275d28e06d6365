use std::time::Duration;

use ov16a1q::power::mock::{MockClock, MockDelay, MockRegulators, MockResetLine};
use ov16a1q::power::{PowerSequencer, PowerState, RuntimePm};

struct Rig {
    clock: MockClock,
    supplies: MockRegulators,
    pm: RuntimePm,
}

fn rig() -> Rig {
    let clock = MockClock::new();
    let supplies = MockRegulators::new();
    let seq = PowerSequencer::new(
        Box::new(clock.clone()),
        Box::new(MockResetLine::new()),
        Box::new(supplies.clone()),
        Box::new(MockDelay::new()),
    );
    Rig {
        clock,
        supplies,
        pm: RuntimePm::new(seq),
    }
}

#[test]
fn nested_references_power_on_exactly_once() {
    let mut rig = rig();
    rig.pm.enable();

    rig.pm.resume_and_get().unwrap();
    rig.pm.resume_and_get().unwrap();
    rig.pm.resume_and_get().unwrap();
    assert_eq!(rig.pm.usage(), 3);
    assert_eq!(rig.clock.enable_calls(), 1);
    assert_eq!(rig.supplies.enable_calls(), 1);

    rig.pm.put();
    rig.pm.put();
    rig.pm.put();
    assert_eq!(rig.pm.usage(), 0);
    // The device stays powered until the autosuspend policy fires.
    assert_eq!(rig.pm.state(), PowerState::Active);
    assert_eq!(rig.clock.disable_calls(), 0);
}

#[test]
fn autosuspend_fires_only_after_the_delay() {
    let mut rig = rig();
    rig.pm.enable();
    rig.pm.set_autosuspend_delay(Duration::from_secs(3600));
    rig.pm.resume_and_get().unwrap();
    rig.pm.put_autosuspend();

    assert!(!rig.pm.maybe_autosuspend());
    assert_eq!(rig.pm.state(), PowerState::Active);

    rig.pm.set_autosuspend_delay(Duration::ZERO);
    assert!(rig.pm.maybe_autosuspend());
    assert_eq!(rig.pm.state(), PowerState::Suspended);
    assert_eq!(rig.clock.enable_calls(), rig.clock.disable_calls());
    assert_eq!(rig.supplies.enable_calls(), rig.supplies.disable_calls());
}

#[test]
fn autosuspend_is_held_off_while_references_exist() {
    let mut rig = rig();
    rig.pm.enable();
    rig.pm.set_autosuspend_delay(Duration::ZERO);

    rig.pm.resume_and_get().unwrap();
    assert!(!rig.pm.maybe_autosuspend());

    rig.pm.put_autosuspend();
    assert!(rig.pm.maybe_autosuspend());
}

#[test]
fn suspend_resume_cycles_are_symmetric() {
    let mut rig = rig();
    rig.pm.enable();
    rig.pm.set_autosuspend_delay(Duration::ZERO);

    for _ in 0..3 {
        rig.pm.resume_and_get().unwrap();
        rig.pm.put_autosuspend();
        assert!(rig.pm.maybe_autosuspend());
    }

    assert_eq!(rig.clock.enable_calls(), 3);
    assert_eq!(rig.clock.disable_calls(), 3);
    assert_eq!(rig.supplies.enable_calls(), 3);
    assert_eq!(rig.supplies.disable_calls(), 3);
}

use ov16a1q::power::mock::{MockClock, MockDelay, MockRegulators, MockResetLine};
use ov16a1q::power::PowerSequencer;
use ov16a1q::Error;

fn sequencer(
    clock: &MockClock,
    reset: &MockResetLine,
    supplies: &MockRegulators,
    delay: &MockDelay,
) -> PowerSequencer {
    PowerSequencer::new(
        Box::new(clock.clone()),
        Box::new(reset.clone()),
        Box::new(supplies.clone()),
        Box::new(delay.clone()),
    )
}

#[test]
fn full_power_cycle_is_balanced() {
    let (clock, reset) = (MockClock::new(), MockResetLine::new());
    let (supplies, delay) = (MockRegulators::new(), MockDelay::new());
    let mut seq = sequencer(&clock, &reset, &supplies, &delay);

    seq.power_on().unwrap();
    seq.power_off();

    assert_eq!(clock.enable_calls(), clock.disable_calls());
    assert_eq!(supplies.enable_calls(), supplies.disable_calls());
    // The sensor ends up held in reset.
    assert_eq!(reset.level(), Some(false));
}

#[test]
fn regulator_failure_never_leaks_the_clock() {
    let (clock, reset) = (MockClock::new(), MockResetLine::new());
    let (supplies, delay) = (MockRegulators::new(), MockDelay::new());
    let mut seq = sequencer(&clock, &reset, &supplies, &delay);

    supplies.fail_enable();
    let err = seq.power_on().unwrap_err();

    assert!(matches!(err, Error::Regulator(_)));
    assert_eq!(clock.enable_calls(), 1);
    assert_eq!(clock.disable_calls(), 1);
    // Reset stays asserted across the failed bring-up.
    assert_eq!(reset.level(), Some(false));
}

#[test]
fn settle_windows_are_honored_in_order() {
    let (clock, reset) = (MockClock::new(), MockResetLine::new());
    let (supplies, delay) = (MockRegulators::new(), MockDelay::new());
    let mut seq = sequencer(&clock, &reset, &supplies, &delay);

    seq.power_on().unwrap();
    seq.power_off();

    let slept = delay.slept();
    // Two settles on the way up, two on the way down.
    assert_eq!(slept.len(), 4);
    for (min, max) in slept {
        assert!(min <= max);
        assert!(!min.is_zero());
    }
}

/*!
 * Poller Tests
 * Drive the poll loop with a deterministic clock
 */

use crate::common::ManualClock;
use pretty_assertions::assert_eq;
use probe_sync::{equal_to, sampled, Description, PollTimeout, Poller, Probe, SelfDescribing, Timeout};
use proptest::prelude::*;
use std::cell::Cell;
use std::time::Duration;

/// Never satisfied; counts how often it is checked and sampled
#[derive(Default)]
struct NeverProbe {
    checks: Cell<u64>,
    samples: u64,
}

impl SelfDescribing for NeverProbe {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("never");
    }
}

impl Probe for NeverProbe {
    fn is_satisfied(&self) -> bool {
        self.checks.set(self.checks.get() + 1);
        false
    }

    fn sample(&mut self) {
        self.samples += 1;
    }

    fn describe_mismatch(&self, description: &mut Description) {
        description.append_text("still never");
    }
}

fn ceil_div(a: u64, b: u64) -> u64 {
    (a + b - 1) / b
}

#[test]
fn test_zero_duration_checks_once_without_sleeping() {
    let clock = ManualClock::new();
    let poller = Poller::new(Timeout::with_clock(Duration::ZERO, Duration::from_millis(10), &clock));
    let mut probe = NeverProbe::default();

    assert_eq!(poller.check(&mut probe), Err(PollTimeout));
    assert_eq!(probe.checks.get(), 1);
    assert_eq!(probe.samples, 0);
    assert_eq!(clock.sleeps(), 0);
}

#[test]
fn test_exact_multiple_checks_floor_plus_one() {
    let clock = ManualClock::new();
    let poller = Poller::new(Timeout::with_clock(
        Duration::from_millis(100),
        Duration::from_millis(10),
        &clock,
    ));
    let mut probe = NeverProbe::default();

    assert_eq!(poller.check(&mut probe), Err(PollTimeout));
    assert_eq!(probe.checks.get(), 11);
    assert_eq!(clock.sleeps(), 10);
}

#[test]
fn test_probe_satisfied_exactly_at_deadline_passes() {
    let clock = ManualClock::new();
    let poller = Poller::new(Timeout::with_clock(
        Duration::from_millis(30),
        Duration::from_millis(10),
        &clock,
    ));

    // Construction sample yields 0; the sample after the third sleep, taken
    // when the clock sits exactly on the deadline, yields 3.
    let mut next = 0u32;
    let mut probe = sampled(
        move || {
            let value = next;
            next += 1;
            value
        },
        equal_to(3),
    );

    assert_eq!(poller.check(&mut probe), Ok(()));
    assert_eq!(clock.sleeps(), 3);
}

#[test]
fn test_poller_can_be_reused_for_another_probe() {
    let clock = ManualClock::new();
    let poller = Poller::new(Timeout::with_clock(Duration::from_millis(20), Duration::from_millis(10), &clock));

    assert!(poller.check(&mut NeverProbe::default()).is_err());
    // Deadline has passed; an already-satisfied probe still succeeds
    assert!(poller.check(&mut sampled(|| 1, equal_to(1))).is_ok());
}

proptest! {
    #[test]
    fn prop_never_satisfied_probe_checked_after_every_sleep(
        duration_ms in 0u64..500,
        interval_ms in 1u64..50,
    ) {
        let clock = ManualClock::new();
        let poller = Poller::new(Timeout::with_clock(
            Duration::from_millis(duration_ms),
            Duration::from_millis(interval_ms),
            &clock,
        ));
        let mut probe = NeverProbe::default();

        prop_assert_eq!(poller.check(&mut probe), Err(PollTimeout));

        let sleeps = ceil_div(duration_ms, interval_ms);
        prop_assert_eq!(u64::from(clock.sleeps()), sleeps);
        prop_assert_eq!(probe.samples, sleeps);
        // One check up front plus one after every sleep
        prop_assert_eq!(probe.checks.get(), sleeps + 1);
    }
}

/*!
 * Timeout Management for Polling
 *
 * - Timeout: deadline computed once at construction, plus a fixed poll interval
 * - Clock: time source seam (system clock in production)
 * - Config: duration/interval presets and environment overrides
 *
 * The deadline is inclusive: once `now >= deadline` the timeout has expired,
 * so a zero duration is expired on its very first check.
 */

mod clock;
mod config;

pub use clock::{Clock, SystemClock};
pub use config::{
    PollConfig, DEFAULT_DURATION, DEFAULT_POLL_INTERVAL, ENV_DURATION_SECS,
    ENV_POLL_INTERVAL_SECS,
};

#[cfg(test)]
pub(crate) use clock::MockClock;

use crate::errors::{ProbeError, ProbeResult};
use std::time::{Duration, Instant};

/// Deadline the poller checks between samples
///
/// Implemented by [`Timeout`]; kept as a trait so the poll loop can be driven
/// by a scripted deadline in tests.
pub trait Deadline {
    /// True once the deadline has been reached (inclusive)
    fn timed_out(&self) -> bool;

    /// Block for one poll interval
    fn sleep_for_interval(&self);
}

impl<D: Deadline + ?Sized> Deadline for &D {
    fn timed_out(&self) -> bool {
        (**self).timed_out()
    }

    fn sleep_for_interval(&self) {
        (**self).sleep_for_interval()
    }
}

/// Deadline plus fixed inter-poll delay
///
/// Created once per poll operation and discarded after it.
#[derive(Debug, Clone)]
pub struct Timeout<C: Clock = SystemClock> {
    /// `None` when `now + duration` is not representable; never expires
    deadline: Option<Instant>,
    poll_interval: Duration,
    clock: C,
}

impl Timeout {
    /// Create a timeout on the system clock
    pub fn new(duration: Duration, poll_interval: Duration) -> Self {
        Self::with_clock(duration, poll_interval, SystemClock)
    }

    /// Create a timeout from fractional seconds
    ///
    /// Negative, NaN, or infinite values are contract violations.
    pub fn from_secs_f64(duration: f64, poll_interval: f64) -> ProbeResult<Self> {
        Ok(Self::new(
            secs_to_duration("duration", duration)?,
            secs_to_duration("poll interval", poll_interval)?,
        ))
    }
}

impl<C: Clock> Timeout<C> {
    /// Create a timeout on a custom clock
    pub fn with_clock(duration: Duration, poll_interval: Duration, clock: C) -> Self {
        let deadline = clock.now().checked_add(duration);
        Self {
            deadline,
            poll_interval,
            clock,
        }
    }

    /// Check whether the deadline has been reached
    #[inline]
    pub fn timed_out(&self) -> bool {
        match self.deadline {
            Some(deadline) => self.clock.now() >= deadline,
            None => false,
        }
    }

    /// Block the calling thread for the poll interval
    #[inline]
    pub fn sleep_for_interval(&self) {
        self.clock.sleep(self.poll_interval);
    }

    /// Time left before the deadline (`None` if it never expires)
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl<C: Clock> Deadline for Timeout<C> {
    #[inline]
    fn timed_out(&self) -> bool {
        Timeout::timed_out(self)
    }

    #[inline]
    fn sleep_for_interval(&self) {
        Timeout::sleep_for_interval(self)
    }
}

/// Convert user-supplied seconds, rejecting values no duration can hold
pub(crate) fn secs_to_duration(what: &str, secs: f64) -> ProbeResult<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|_| {
        ProbeError::contract_violation(format!(
            "{what} must be a finite, non-negative number of seconds (got {secs})"
        ))
    })
}

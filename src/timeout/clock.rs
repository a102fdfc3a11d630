/*!
 * Clock Abstraction
 *
 * Source of "now" and of blocking sleeps for [`Timeout`](super::Timeout).
 * Production code uses [`SystemClock`]; tests substitute a deterministic
 * clock so deadline arithmetic can be checked without real waiting.
 */

use std::thread;
use std::time::{Duration, Instant};

/// Time source used by timeouts
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current monotonic time
    fn now(&self) -> Instant;

    /// Block the calling thread for `duration`
    fn sleep(&self, duration: Duration);
}

/// Monotonic system clock backed by `Instant::now` and `thread::sleep`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

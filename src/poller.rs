/*!
 * Poller
 *
 * Bounded retry-until-true loop over a [`Probe`].
 *
 * ## State Machine
 *
 * ```text
 * POLLING --satisfied--> SATISFIED
 * POLLING --deadline---> TIMED_OUT
 * ```
 *
 * Every iteration checks satisfaction *before* the deadline, so a probe that
 * becomes satisfied by the sample taken after the final sleep still passes.
 */

use crate::errors::PollTimeout;
use crate::probe::Probe;
use crate::timeout::{Deadline, Timeout};
use std::time::Instant;
use tracing::{debug, trace};

/// Drives a probe against a deadline
///
/// Holds the deadline only; the probe is borrowed for the duration of one
/// [`check`](Poller::check) call.
#[derive(Debug, Clone)]
pub struct Poller<D: Deadline = Timeout> {
    deadline: D,
}

impl<D: Deadline> Poller<D> {
    pub fn new(deadline: D) -> Self {
        Self { deadline }
    }

    /// Poll `probe` until it is satisfied or the deadline passes
    ///
    /// # Returns
    ///
    /// - `Ok(())` once `probe.is_satisfied()` is true
    /// - `Err(PollTimeout)` if the deadline passed first; no further sampling
    ///   happens after that
    pub fn check<P: Probe + ?Sized>(&self, probe: &mut P) -> Result<(), PollTimeout> {
        let start = Instant::now();
        let mut samples = 0u64;

        loop {
            if probe.is_satisfied() {
                debug!(
                    samples,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "Probe satisfied"
                );
                return Ok(());
            }

            if self.deadline.timed_out() {
                return Err(Self::timed_out(start, samples));
            }

            self.deadline.sleep_for_interval();
            probe.sample();
            samples = samples.saturating_add(1);
            trace!(samples, "Probe resampled");
        }
    }

    #[cold]
    #[inline(never)]
    fn timed_out(start: Instant, samples: u64) -> PollTimeout {
        debug!(
            samples,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Poller timed out before probe was satisfied"
        );
        PollTimeout
    }
}

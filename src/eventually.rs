/*!
 * Polling Entry Points
 *
 * Compose Timeout + Poller + Probe and translate a poll timeout into a
 * descriptive failure:
 *
 * ```text
 * <reason>
 * Expected: <probe self-description>
 *      but: <probe mismatch description>
 * ```
 *
 * - `assert_eventually`: panics with the message, like `assert!`
 * - `try_assert_eventually`: returns `ProbeError::AssertionFailed`
 * - `wait_until`: returns `ProbeError::SynchronizationTimeout`
 */

use crate::description::Description;
use crate::errors::{ProbeError, ProbeResult};
use crate::poller::Poller;
use crate::probe::{IntoProbe, Probe};
use crate::timeout::Timeout;
use std::time::Duration;
use tracing::debug;

/// Which public failure a poll timeout turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    Assertion,
    Synchronization,
}

impl FailureKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Assertion => "assert_eventually",
            Self::Synchronization => "wait_until",
        }
    }

    fn into_error(self, message: String) -> ProbeError {
        match self {
            Self::Assertion => ProbeError::AssertionFailed(message),
            Self::Synchronization => ProbeError::SynchronizationTimeout(message),
        }
    }
}

/// Poll until `probe` is satisfied, panicking with a descriptive message on timeout
///
/// Accepts any [`Probe`] or a `FnMut() -> bool`. Intended for tests: the
/// panic is reported by the test harness as an ordinary assertion failure.
///
/// # Example
///
/// ```no_run
/// use probe_sync::assert_eventually;
/// use std::time::Duration;
///
/// fn led_is_on() -> bool {
///     true
/// }
///
/// assert_eventually(led_is_on, Duration::from_secs(1), Duration::from_millis(10), "LED");
/// ```
#[track_caller]
pub fn assert_eventually<M>(
    probe: impl IntoProbe<M>,
    duration: Duration,
    poll_interval: Duration,
    reason: &str,
) {
    if let Err(err) = try_assert_eventually(probe, duration, poll_interval, reason) {
        panic!("{}", err);
    }
}

/// Like [`assert_eventually`], but returns the failure instead of panicking
pub fn try_assert_eventually<M>(
    probe: impl IntoProbe<M>,
    duration: Duration,
    poll_interval: Duration,
    reason: &str,
) -> ProbeResult<()> {
    poll(probe, duration, poll_interval, reason, FailureKind::Assertion)
}

/// Poll until `probe` is satisfied, returning a synchronization timeout otherwise
///
/// For callers that need to tell "timed out waiting" apart from "assertion
/// logically false", e.g. harness setup outside a test body.
pub fn wait_until<M>(
    probe: impl IntoProbe<M>,
    duration: Duration,
    poll_interval: Duration,
    reason: &str,
) -> ProbeResult<()> {
    poll(probe, duration, poll_interval, reason, FailureKind::Synchronization)
}

fn poll<M>(
    probe: impl IntoProbe<M>,
    duration: Duration,
    poll_interval: Duration,
    reason: &str,
    kind: FailureKind,
) -> ProbeResult<()> {
    let span = tracing::debug_span!(
        "poll",
        kind = kind.as_str(),
        duration_ms = duration.as_millis() as u64,
        poll_interval_ms = poll_interval.as_millis() as u64,
    );
    let _enter = span.enter();

    let poller = Poller::new(Timeout::new(duration, poll_interval));
    let mut probe = probe.into_probe();

    match poller.check(&mut probe) {
        Ok(()) => Ok(()),
        Err(_) => {
            let message = describe_failure(&probe, reason);
            debug!(%message, "Probe failed");
            Err(kind.into_error(message))
        }
    }
}

/// Compose the failure message from the reason and the probe's last sample
pub(crate) fn describe_failure<P: Probe>(probe: &P, reason: &str) -> String {
    let mut description = Description::new();
    description
        .append_text(reason)
        .append_text("\nExpected: ")
        .append_description_of(probe)
        .append_text("\n     but: ");
    probe.describe_mismatch(&mut description);
    description.into_string()
}

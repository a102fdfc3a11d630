/*!
 * Sampled Probe
 * Snapshots a value through a sampler closure and checks it with a matcher
 */

use super::traits::Probe;
use crate::description::{Description, SelfDescribing};
use crate::matcher::Matcher;
use std::fmt::{self, Debug};

/// Probe that keeps the last sampled value for mismatch reporting
///
/// # Example
///
/// ```no_run
/// use probe_sync::{greater_than, sampled, wait_until};
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use std::time::Duration;
///
/// let counter = AtomicU64::new(501);
/// let probe = sampled(|| counter.load(Ordering::SeqCst), greater_than(500));
/// wait_until(probe, Duration::from_secs(5), Duration::from_millis(10), "")?;
/// # Ok::<(), probe_sync::ProbeError>(())
/// ```
pub struct SampledProbe<S, M, T> {
    sampler: S,
    matcher: M,
    last: T,
}

impl<S, M, T> SampledProbe<S, M, T>
where
    S: FnMut() -> T,
    M: Matcher<T>,
    T: Debug,
{
    /// Build the probe and take the first sample
    pub fn new(mut sampler: S, matcher: M) -> Self {
        let last = sampler();
        Self {
            sampler,
            matcher,
            last,
        }
    }

    /// Value captured by the most recent sample
    pub fn last_sample(&self) -> &T {
        &self.last
    }
}

/// Shorthand for [`SampledProbe::new`]
pub fn sampled<S, M, T>(sampler: S, matcher: M) -> SampledProbe<S, M, T>
where
    S: FnMut() -> T,
    M: Matcher<T>,
    T: Debug,
{
    SampledProbe::new(sampler, matcher)
}

impl<S, M, T> SelfDescribing for SampledProbe<S, M, T>
where
    S: FnMut() -> T,
    M: Matcher<T>,
    T: Debug,
{
    fn describe_to(&self, description: &mut Description) {
        description.append_description_of(&self.matcher);
    }
}

impl<S, M, T> Probe for SampledProbe<S, M, T>
where
    S: FnMut() -> T,
    M: Matcher<T>,
    T: Debug,
{
    fn is_satisfied(&self) -> bool {
        self.matcher.matches(&self.last)
    }

    fn sample(&mut self) {
        self.last = (self.sampler)();
    }

    fn describe_mismatch(&self, description: &mut Description) {
        self.matcher.describe_mismatch(&self.last, description);
    }
}

impl<S, M, T: Debug> fmt::Debug for SampledProbe<S, M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampledProbe").field("last", &self.last).finish()
    }
}

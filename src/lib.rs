/*!
 * probe-sync
 *
 * Polling-based synchronization for tests: repeatedly sample some external
 * state until a condition holds or a deadline expires, then report success
 * or a descriptive failure.
 *
 * - Timeout: deadline plus fixed poll interval
 * - Probe: pollable condition, split into sample and check
 * - Poller: the bounded retry-until-true loop
 * - assert_eventually / wait_until: entry points with failure reporting
 *
 * Polling is single-threaded and blocking; the calling thread sleeps between
 * samples and nothing is cancelled except by the deadline.
 */

pub mod description;
pub mod errors;
pub mod eventually;
pub mod matcher;
pub mod poller;
pub mod probe;
pub mod timeout;
pub mod tracer;

// Re-exports
pub use description::{Description, SelfDescribing};
pub use errors::{PollTimeout, ProbeError, ProbeResult};
pub use eventually::{assert_eventually, try_assert_eventually, wait_until};
pub use matcher::{equal_to, greater_than, less_than, Matcher};
pub use poller::Poller;
pub use probe::{sampled, CallableProbe, IntoProbe, Probe, SampledProbe};
pub use timeout::{Clock, Deadline, PollConfig, SystemClock, Timeout};
pub use tracer::init_tracing;

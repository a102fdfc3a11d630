/*!
 * Probes
 *
 * A probe is a pollable condition over external state, split into a sampling
 * step and a satisfaction check so one snapshot can be both evaluated and,
 * on failure, described.
 *
 * - `Probe`: the capability the poller drives
 * - `CallableProbe`: adapts a `FnMut() -> bool`
 * - `SampledProbe`: samples a value and checks it with a matcher
 */

mod callable;
mod sampled;
mod traits;

pub use callable::{CallableProbe, PLACEHOLDER_NAME};
pub use sampled::{sampled, SampledProbe};
pub use traits::{marker, IntoProbe, Probe};

/*!
 * Probe Traits
 *
 * Core abstraction the poller drives, plus the conversion used by the entry
 * points to accept either a ready-made probe or a bare boolean function.
 */

use super::callable::CallableProbe;
use crate::description::{Description, SelfDescribing};

/// Pollable condition over some subject-under-test
///
/// `is_satisfied` must only look at data captured by the most recent
/// [`sample`](Probe::sample), so that a failed check and the mismatch
/// description that follows it see the same snapshot.
pub trait Probe: SelfDescribing {
    /// Check the last sample
    fn is_satisfied(&self) -> bool;

    /// Take a fresh snapshot of the subject
    fn sample(&mut self);

    /// Append what was actually observed in the last sample
    fn describe_mismatch(&self, description: &mut Description);
}

impl<P: Probe + ?Sized> SelfDescribing for &mut P {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }
}

impl<P: Probe + ?Sized> Probe for &mut P {
    fn is_satisfied(&self) -> bool {
        (**self).is_satisfied()
    }

    fn sample(&mut self) {
        (**self).sample()
    }

    fn describe_mismatch(&self, description: &mut Description) {
        (**self).describe_mismatch(description)
    }
}

impl<P: Probe + ?Sized> SelfDescribing for Box<P> {
    fn describe_to(&self, description: &mut Description) {
        (**self).describe_to(description)
    }
}

impl<P: Probe + ?Sized> Probe for Box<P> {
    fn is_satisfied(&self) -> bool {
        (**self).is_satisfied()
    }

    fn sample(&mut self) {
        (**self).sample()
    }

    fn describe_mismatch(&self, description: &mut Description) {
        (**self).describe_mismatch(description)
    }
}

/// Marker types selecting how a value becomes a probe
pub mod marker {
    /// The value already implements [`Probe`](super::Probe)
    pub enum Native {}

    /// The value is a `FnMut() -> bool`, adapted through
    /// [`CallableProbe`](super::CallableProbe)
    pub enum Function {}
}

/// Conversion into a [`Probe`]
///
/// The marker parameter keeps the two blanket implementations apart; callers
/// never name it, the compiler infers it from the argument.
pub trait IntoProbe<Marker> {
    type Probe: Probe;

    fn into_probe(self) -> Self::Probe;
}

impl<P: Probe> IntoProbe<marker::Native> for P {
    type Probe = P;

    fn into_probe(self) -> P {
        self
    }
}

impl<F: FnMut() -> bool> IntoProbe<marker::Function> for F {
    type Probe = CallableProbe<F>;

    fn into_probe(self) -> CallableProbe<F> {
        CallableProbe::new(self)
    }
}

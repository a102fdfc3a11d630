/*!
 * Value Matchers
 *
 * Minimal matcher set used by [`SampledProbe`](crate::SampledProbe):
 * - `greater_than` / `less_than`: ordering comparisons
 * - `equal_to`: equality
 *
 * Descriptions follow the familiar "a value less than <0>" / "was <501>" form.
 */

use crate::description::{Description, SelfDescribing};
use std::fmt::Debug;

/// Predicate over a sampled value that can explain itself
pub trait Matcher<T: ?Sized>: SelfDescribing {
    /// Check whether `item` satisfies the matcher
    fn matches(&self, item: &T) -> bool;

    /// Describe why `item` did not match
    fn describe_mismatch(&self, item: &T, description: &mut Description)
    where
        T: Debug,
    {
        description.append_text("was ").append_value(&item);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ordering {
    Greater,
    Less,
}

/// Ordering comparison against a fixed bound
#[derive(Debug, Clone)]
pub struct OrderingMatcher<T> {
    bound: T,
    ordering: Ordering,
}

impl<T: PartialOrd + Debug> Matcher<T> for OrderingMatcher<T> {
    fn matches(&self, item: &T) -> bool {
        match self.ordering {
            Ordering::Greater => *item > self.bound,
            Ordering::Less => *item < self.bound,
        }
    }
}

impl<T: Debug> SelfDescribing for OrderingMatcher<T> {
    fn describe_to(&self, description: &mut Description) {
        let relation = match self.ordering {
            Ordering::Greater => "a value greater than ",
            Ordering::Less => "a value less than ",
        };
        description.append_text(relation).append_value(&self.bound);
    }
}

/// Equality against a fixed value
#[derive(Debug, Clone)]
pub struct EqualTo<T> {
    expected: T,
}

impl<T: PartialEq + Debug> Matcher<T> for EqualTo<T> {
    fn matches(&self, item: &T) -> bool {
        *item == self.expected
    }
}

impl<T: Debug> SelfDescribing for EqualTo<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }
}

pub fn greater_than<T: PartialOrd + Debug>(bound: T) -> OrderingMatcher<T> {
    OrderingMatcher {
        bound,
        ordering: Ordering::Greater,
    }
}

pub fn less_than<T: PartialOrd + Debug>(bound: T) -> OrderingMatcher<T> {
    OrderingMatcher {
        bound,
        ordering: Ordering::Less,
    }
}

pub fn equal_to<T: PartialEq + Debug>(expected: T) -> EqualTo<T> {
    EqualTo { expected }
}

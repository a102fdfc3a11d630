/*!
 * Callable Probe
 *
 * Adapts a zero-argument boolean function into a [`Probe`]. The function is
 * invoked once on construction so an already-true condition passes without
 * waiting a poll interval.
 *
 * ## Naming
 *
 * The display name is inferred from the function's type:
 * - named functions use their declared name (`led_is_on`)
 * - closures render as `<closure>`
 * - anything else falls back to [`PLACEHOLDER_NAME`]
 *
 * Inference relies on `std::any::type_name`, which is best-effort and may
 * change between compiler releases. Use [`CallableProbe::named`] when the
 * exact wording matters.
 */

use super::traits::Probe;
use crate::description::{Description, SelfDescribing};
use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// Used when no name can be derived from the function type
pub const PLACEHOLDER_NAME: &str = "condition";

const CLOSURE_NAME: &str = "<closure>";

/// Probe over a `FnMut() -> bool`
pub struct CallableProbe<F> {
    name: Cow<'static, str>,
    condition: F,
    satisfied: bool,
}

impl<F: FnMut() -> bool> CallableProbe<F> {
    /// Wrap `condition`, deriving its display name from its type
    pub fn new(condition: F) -> Self {
        Self::named(callable_name::<F>(), condition)
    }

    /// Wrap `condition` under an explicit display name
    pub fn named(name: impl Into<Cow<'static, str>>, condition: F) -> Self {
        let mut probe = Self {
            name: name.into(),
            condition,
            satisfied: false,
        };
        probe.sample();
        probe
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<F: FnMut() -> bool> SelfDescribing for CallableProbe<F> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(&format!("{} to be satisfied", self.name));
    }
}

impl<F: FnMut() -> bool> Probe for CallableProbe<F> {
    fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    fn sample(&mut self) {
        self.satisfied = (self.condition)();
    }

    fn describe_mismatch(&self, description: &mut Description) {
        description.append_text(&format!("{} was not satisfied", self.name));
    }
}

impl<F> fmt::Debug for CallableProbe<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableProbe")
            .field("name", &self.name)
            .field("satisfied", &self.satisfied)
            .finish()
    }
}

/// Derive a display name from a callable's type path
fn callable_name<F>() -> Cow<'static, str> {
    name_from_type_path(type_name::<F>())
}

fn name_from_type_path(path: &'static str) -> Cow<'static, str> {
    let path = path.trim_start_matches('&').trim_start_matches("mut ");

    if path.ends_with("{{closure}}") {
        return Cow::Borrowed(CLOSURE_NAME);
    }

    let segment = last_segment(path);
    // Generic arguments on the final segment itself, e.g. `poll<u32>`
    let last = segment.split('<').next().unwrap_or(segment);

    if is_identifier(last) {
        Cow::Borrowed(last)
    } else {
        Cow::Borrowed(PLACEHOLDER_NAME)
    }
}

/// Text after the last `::` outside any `<...>` or `(...)` group
///
/// `a::Svc<u32>::ready` and `<a::Plain as a::Ready>::ready` both end in
/// `ready`; separators inside generic arguments or qualified-self brackets
/// are skipped.
fn last_segment(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            // `->` in fn pointer types closes nothing
            b'>' if depth > 0 => depth -= 1,
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    &path[start..]
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

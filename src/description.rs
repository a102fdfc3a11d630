/*!
 * Description Sink
 *
 * Accumulates human-readable text for failure reports. Probes and matchers
 * append to it; the entry points turn the result into the failure message.
 */

use std::fmt;

/// Something that can describe itself into a [`Description`]
pub trait SelfDescribing {
    /// Append a description of what is expected
    fn describe_to(&self, description: &mut Description);
}

/// String-backed description sink
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append the self-description of `value`
    pub fn append_description_of(&mut self, value: &dyn SelfDescribing) -> &mut Self {
        value.describe_to(self);
        self
    }

    /// Append a value rendered as `<value>`
    pub fn append_value(&mut self, value: &dyn fmt::Debug) -> &mut Self {
        self.text.push_str(&format!("<{:?}>", value));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.text
    }
}

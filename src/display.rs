//! Response rendering for the display buffer.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// Pretty-print a JSON value with 4-space indentation.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Single response viewer: overwritten wholesale after every action,
/// no history kept.
#[derive(Debug, Default)]
pub struct DisplayBuffer {
    contents: String,
}

impl DisplayBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer contents with the rendered value.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails; the previous contents are
    /// kept in that case.
    pub fn show(&mut self, value: &Value) -> Result<(), serde_json::Error> {
        self.contents = render_json(value)?;
        Ok(())
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;

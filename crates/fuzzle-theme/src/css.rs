//! CSS custom properties for theme slots.
//!
//! `bg_color` is written as `--tg-theme-bg-color` through a [`StyleSink`]. A
//! sink that cannot be written skips the property; it never aborts the run.

use std::collections::BTreeMap;

use crate::color::CanonicalColor;
use crate::error::StyleError;

/// Something that holds CSS custom properties, usually the document root.
pub trait StyleSink {
    /// Set property `name` (including the leading `--`) to `value`.
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), StyleError>;
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        (**self).set_property(name, value)
    }
}

/// CSS variable for a theme slot: `--{namespace}-{slot with '_' → '-'}`.
#[must_use]
pub fn css_variable_name(namespace: &str, slot: &str) -> String {
    format!("--{namespace}-{}", slot.replace('_', "-"))
}

/// Write one slot's color. Returns whether the property was written.
///
/// An unavailable or rejecting sink is skipped without error.
pub fn apply_color<S: StyleSink + ?Sized>(
    sink: &mut S,
    namespace: &str,
    slot: &str,
    color: CanonicalColor,
) -> bool {
    let name = css_variable_name(namespace, slot);
    match sink.set_property(&name, &color.to_hex()) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(message = "theme.css.skipped", property = %name, error = %err);
            false
        }
    }
}

/// In-memory style sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStyle {
    properties: BTreeMap<String, String>,
    writes: usize,
    unavailable: bool,
}

impl MemoryStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that behaves like a context without a root style.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Successful `set_property` calls, including repeated ones.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleSink for MemoryStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        if self.unavailable {
            return Err(StyleError::Unavailable);
        }
        self.properties.insert(name.to_owned(), value.to_owned());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variable_name_replaces_every_underscore() {
        assert_eq!(css_variable_name("tg-theme", "bg_color"), "--tg-theme-bg-color");
        assert_eq!(
            css_variable_name("tg-theme", "section_header_text_color"),
            "--tg-theme-section-header-text-color"
        );
        assert_eq!(css_variable_name("tg-theme", "accent"), "--tg-theme-accent");
    }

    #[test]
    fn apply_writes_canonical_hex() {
        let mut style = MemoryStyle::new();
        let white = CanonicalColor::new(255, 255, 255);
        assert!(apply_color(&mut style, "tg-theme", "bg_color", white));
        assert_eq!(style.get("--tg-theme-bg-color"), Some("#ffffff"));
    }

    #[test]
    fn apply_is_idempotent() {
        let color = CanonicalColor::new(0x10, 0x20, 0x30);
        let mut once = MemoryStyle::new();
        apply_color(&mut once, "tg-theme", "link_color", color);

        let mut twice = MemoryStyle::new();
        apply_color(&mut twice, "tg-theme", "link_color", color);
        apply_color(&mut twice, "tg-theme", "link_color", color);

        assert_eq!(once.properties(), twice.properties());
    }

    #[test]
    fn unavailable_sink_is_skipped() {
        let mut style = MemoryStyle::unavailable();
        assert!(!apply_color(&mut style, "tg-theme", "bg_color", CanonicalColor::new(0, 0, 0)));
        assert!(style.properties().is_empty());
        assert_eq!(style.writes(), 0);
    }
}

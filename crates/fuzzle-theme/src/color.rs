//! Color normalization to canonical `#rrggbb`.
//!
//! Accepted forms, tried in order:
//!
//! 1. `#rrggbb` (any case)
//! 2. `#rgb` shorthand (any case), each digit doubled
//! 3. `rgb(r, g, b)` / `rgba(r, g, b, a)` with decimal integer channels; alpha
//!    is validated syntactically and dropped
//!
//! Leading and trailing whitespace is ignored for every form, using the
//! JavaScript definition of whitespace.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ECMAScript `\s`: WhiteSpace plus LineTerminator. Wider than ASCII (NBSP,
/// BOM, U+2028) but without U+0085, which JS does not treat as whitespace.
const JS_WHITESPACE: &str = "[\t\n\u{b}\u{c}\r \u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}]";

/// Compile `pattern` with every `\s` widened to [`JS_WHITESPACE`].
fn js_regex(pattern: &str) -> Regex {
    Regex::new(&pattern.replace(r"\s", JS_WHITESPACE)).expect("color regex")
}

static HEX6: LazyLock<Regex> = LazyLock::new(|| js_regex(r"(?i)^\s*#([0-9a-f]{6})\s*$"));

static HEX3: LazyLock<Regex> =
    LazyLock::new(|| js_regex(r"(?i)^\s*#([0-9a-f])([0-9a-f])([0-9a-f])\s*$"));

static RGB_FN: LazyLock<Regex> = LazyLock::new(|| {
    js_regex(r"^\s*rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*(\d+\.?\d*)\s*)?\)\s*$")
});

/// Handling of functional-notation channels outside `0..=255`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// The value is not a recognized color.
    #[default]
    Reject,
    /// The channel saturates at 255.
    Clamp,
}

impl ChannelPolicy {
    fn resolve(self, channel: u32) -> Option<u8> {
        match (u8::try_from(channel), self) {
            (Ok(c), _) => Some(c),
            (Err(_), Self::Reject) => None,
            (Err(_), Self::Clamp) => Some(u8::MAX),
        }
    }
}

/// Opaque 8-bit RGB color. Displays as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CanonicalColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a CSS-like color into its canonical form.
///
/// Returns `None` for anything that is not one of the accepted forms.
#[must_use]
pub fn parse_color_to_hex(input: &str, policy: ChannelPolicy) -> Option<CanonicalColor> {
    if let Some(caps) = HEX6.captures(input) {
        let digits = caps.get(1)?.as_str();
        return Some(CanonicalColor::new(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        ));
    }

    if let Some(caps) = HEX3.captures(input) {
        let nibble = |idx: usize| -> Option<u8> {
            let digit = u8::from_str_radix(caps.get(idx)?.as_str(), 16).ok()?;
            Some(digit * 17)
        };
        return Some(CanonicalColor::new(nibble(1)?, nibble(2)?, nibble(3)?));
    }

    if let Some(caps) = RGB_FN.captures(input) {
        let channel = |idx: usize| -> Option<u8> {
            let digits = caps.get(idx)?.as_str();
            // Only overflow can fail here: the pattern admits ASCII digits only.
            let value = digits.parse::<u32>().unwrap_or(u32::MAX);
            policy.resolve(value)
        };
        let color = CanonicalColor::new(channel(1)?, channel(2)?, channel(3)?);
        return Some(color);
    }

    None
}

/// Coerce a JSON theme value to text and parse it.
///
/// Strings are parsed verbatim; any other JSON value is parsed from its JSON
/// text, which never matches a color form.
#[must_use]
pub fn normalize_value(value: &Value, policy: ChannelPolicy) -> Option<CanonicalColor> {
    match value {
        Value::String(text) => parse_color_to_hex(text, policy),
        other => parse_color_to_hex(&other.to_string(), policy),
    }
}

fn hex_byte(pair: &str) -> Option<u8> {
    u8::from_str_radix(pair, 16).ok()
}

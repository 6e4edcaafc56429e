//! Decoded Mini App launch parameters and the embedded theme map.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Field holding the JSON-encoded theme palette.
pub const THEME_PARAMS_FIELD: &str = "tgWebAppThemeParams";
const VERSION_FIELD: &str = "tgWebAppVersion";
const PLATFORM_FIELD: &str = "tgWebAppPlatform";

/// Launch parameters left in storage by the Mini App bootstrap.
///
/// Only [`THEME_PARAMS_FIELD`] is interpreted; other fields are kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InitParams {
    fields: Map<String, Value>,
}

impl InitParams {
    /// Accept a decoded payload. Only JSON objects are launch parameters.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Telegram client API version, e.g. `"7.10"`.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get(VERSION_FIELD).and_then(Value::as_str)
    }

    /// Telegram client platform, e.g. `"android"`, `"tdesktop"`.
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.get(PLATFORM_FIELD).and_then(Value::as_str)
    }

    /// The raw theme JSON, if present as a non-empty string.
    #[must_use]
    pub fn theme_params_raw(&self) -> Option<&str> {
        self.get(THEME_PARAMS_FIELD)
            .and_then(Value::as_str)
            .filter(|raw| !raw.is_empty())
    }

    /// Decode the embedded theme map. Malformed JSON reads as "no theme".
    #[must_use]
    pub fn theme_map(&self) -> Option<ThemeMap> {
        let raw = self.theme_params_raw()?;
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => ThemeMap::from_value(value),
            Err(err) => {
                tracing::debug!(message = "theme.params.malformed", error = %err);
                None
            }
        }
    }
}

/// Theme slot name → color value, iterated in slot order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeMap {
    entries: BTreeMap<String, Value>,
}

impl ThemeMap {
    /// Accept a decoded theme. Only JSON objects are theme maps.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                entries: map.into_iter().collect(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, slot: &str) -> Option<&Value> {
        self.entries.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(slot, value)| (slot.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ThemeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(slot, value)| (slot.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn params(value: Value) -> InitParams {
        InitParams::from_value(value).expect("object payload")
    }

    #[test]
    fn non_object_payloads_are_not_params() {
        assert!(InitParams::from_value(Value::Null).is_none());
        assert!(InitParams::from_value(json!("initParams")).is_none());
        assert!(InitParams::from_value(json!([1, 2, 3])).is_none());
    }

    #[test]
    fn theme_field_must_be_non_empty_string() {
        assert!(params(json!({})).theme_params_raw().is_none());
        assert!(params(json!({"tgWebAppThemeParams": ""})).theme_params_raw().is_none());
        assert!(params(json!({"tgWebAppThemeParams": null})).theme_params_raw().is_none());
        assert!(params(json!({"tgWebAppThemeParams": 42})).theme_params_raw().is_none());
        assert_eq!(
            params(json!({"tgWebAppThemeParams": "{}"})).theme_params_raw(),
            Some("{}")
        );
    }

    #[test]
    fn theme_map_decodes_nested_json() {
        let p = params(json!({
            "tgWebAppThemeParams": r##"{"bg_color":"#ffffff","text_color":"#000000"}"##,
            "tgWebAppVersion": "7.10",
            "tgWebAppPlatform": "android",
        }));
        assert_eq!(p.version(), Some("7.10"));
        assert_eq!(p.platform(), Some("android"));

        let theme = p.theme_map().expect("theme decodes");
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.get("bg_color"), Some(&json!("#ffffff")));
        let slots: Vec<&str> = theme.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec!["bg_color", "text_color"]);
    }

    #[test]
    fn malformed_theme_json_reads_as_no_theme() {
        let p = params(json!({"tgWebAppThemeParams": "{\"bg_color\":"}));
        assert!(p.theme_map().is_none());
    }

    #[test]
    fn non_object_theme_json_reads_as_no_theme() {
        assert!(params(json!({"tgWebAppThemeParams": "null"})).theme_map().is_none());
        assert!(params(json!({"tgWebAppThemeParams": "[\"#fff\"]"})).theme_map().is_none());
    }

    #[test]
    fn theme_map_collects_from_pairs() {
        let theme: ThemeMap = [("b", "#222"), ("a", "#111")].into_iter().collect();
        assert!(!theme.is_empty());
        let first = theme.iter().next().map(|(slot, _)| slot);
        assert_eq!(first, Some("a"));
    }
}

//! Theme initialization: storage → launch parameters → theme map → CSS.
//!
//! [`ThemeInitializer::apply`] runs the whole sequence once. Every failure
//! along the way (missing or malformed storage entry, missing theme field,
//! unrecognized color, unavailable style) degrades to writing fewer
//! variables; the run itself cannot fail. The returned [`ApplyReport`]
//! describes what happened.

use crate::color::normalize_value;
use crate::config::ThemeConfig;
use crate::css::{StyleSink, apply_color, css_variable_name};
use crate::params::{InitParams, ThemeMap};
use crate::storage::{KeyValueStore, TieredStore};

/// How far a run got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// No launch parameters could be read.
    NoParams,
    /// Launch parameters carry no usable theme.
    NoTheme,
    /// A theme map was decoded and its entries processed.
    Applied,
}

/// Summary of one initializer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub outcome: ApplyOutcome,
    /// `(css variable, #rrggbb)` pairs written, in slot order.
    pub applied: Vec<(String, String)>,
    /// Slots whose value was not a recognized color or could not be written.
    pub skipped: Vec<String>,
}

impl ApplyReport {
    fn empty(outcome: ApplyOutcome) -> Self {
        Self {
            outcome,
            applied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }
}

/// Applies the host theme found in storage to a style sink.
#[derive(Debug, Clone, Default)]
pub struct ThemeInitializer {
    config: ThemeConfig,
}

impl ThemeInitializer {
    #[must_use]
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Compose a primary and a secondary store under the configured namespace.
    #[must_use]
    pub fn tiered<P: KeyValueStore, S: KeyValueStore>(
        &self,
        primary: P,
        secondary: S,
    ) -> TieredStore<P, S> {
        TieredStore::with_namespace(primary, secondary, self.config.storage_namespace.clone())
    }

    /// Read launch parameters from `store` and apply their theme to `sink`.
    pub fn apply<P, S, W>(&self, store: &TieredStore<P, S>, sink: &mut W) -> ApplyReport
    where
        P: KeyValueStore,
        S: KeyValueStore,
        W: StyleSink + ?Sized,
    {
        let params = store
            .read_json(&self.config.params_key)
            .and_then(InitParams::from_value);
        self.apply_params(params.as_ref(), sink)
    }

    /// Apply the theme carried by already decoded launch parameters.
    pub fn apply_params<W: StyleSink + ?Sized>(
        &self,
        params: Option<&InitParams>,
        sink: &mut W,
    ) -> ApplyReport {
        let Some(params) = params else {
            return ApplyReport::empty(ApplyOutcome::NoParams);
        };
        let Some(theme) = params.theme_map() else {
            tracing::debug!(
                message = "theme.apply.no_theme",
                version = params.version(),
                platform = params.platform(),
            );
            return ApplyReport::empty(ApplyOutcome::NoTheme);
        };
        self.apply_theme(&theme, sink)
    }

    /// Normalize and write every entry of `theme`. Bad entries are skipped one by one.
    pub fn apply_theme<W: StyleSink + ?Sized>(
        &self,
        theme: &ThemeMap,
        sink: &mut W,
    ) -> ApplyReport {
        let mut report = ApplyReport::empty(ApplyOutcome::Applied);
        let namespace = self.config.css_namespace.as_str();

        for (slot, value) in theme.iter() {
            let Some(color) = normalize_value(value, self.config.channel_policy) else {
                tracing::trace!(message = "theme.apply.unrecognized", slot, value = %value);
                report.skipped.push(slot.to_owned());
                continue;
            };
            if apply_color(sink, namespace, slot, color) {
                report
                    .applied
                    .push((css_variable_name(namespace, slot), color.to_hex()));
            } else {
                report.skipped.push(slot.to_owned());
            }
        }

        tracing::debug!(
            message = "theme.apply",
            applied = report.applied.len(),
            skipped = report.skipped.len(),
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::MemoryStyle;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tracing_test::traced_test;

    fn session_with(payload: &serde_json::Value) -> MemoryStore {
        MemoryStore::new().with_item("__uwu__initParams", payload.to_string())
    }

    #[test]
    fn applies_good_entries_and_skips_bad_ones() {
        let init = ThemeInitializer::default();
        let store = init.tiered(
            session_with(&json!({
                "tgWebAppThemeParams": r##"{"bg_color":"#ffffff","bad":"xyz"}"##
            })),
            MemoryStore::new(),
        );
        let mut style = MemoryStyle::new();

        let report = init.apply(&store, &mut style);

        assert_eq!(report.outcome, ApplyOutcome::Applied);
        assert_eq!(style.get("--tg-theme-bg-color"), Some("#ffffff"));
        assert_eq!(style.properties().len(), 1);
        assert_eq!(report.skipped, vec!["bad".to_owned()]);
        assert_eq!(
            report.applied,
            vec![("--tg-theme-bg-color".to_owned(), "#ffffff".to_owned())]
        );
    }

    #[test]
    fn no_params_means_no_writes() {
        let init = ThemeInitializer::default();
        let store = init.tiered(MemoryStore::new(), MemoryStore::new());
        let mut style = MemoryStyle::new();
        let report = init.apply(&store, &mut style);
        assert_eq!(report.outcome, ApplyOutcome::NoParams);
        assert_eq!(style.writes(), 0);
    }

    #[test]
    fn null_payload_reads_as_no_params() {
        let init = ThemeInitializer::default();
        let store = init.tiered(session_with(&json!(null)), MemoryStore::new());
        let mut style = MemoryStyle::new();
        assert_eq!(init.apply(&store, &mut style).outcome, ApplyOutcome::NoParams);
    }

    #[test]
    fn missing_theme_field_means_no_theme() {
        let init = ThemeInitializer::default();
        let store = init.tiered(
            session_with(&json!({"tgWebAppVersion": "7.0"})),
            MemoryStore::new(),
        );
        let mut style = MemoryStyle::new();
        let report = init.apply(&store, &mut style);
        assert_eq!(report.outcome, ApplyOutcome::NoTheme);
        assert_eq!(style.writes(), 0);
    }

    #[test]
    fn custom_namespaces_flow_through() {
        let init = ThemeInitializer::new(
            ThemeConfig::default()
                .with_storage_namespace("fz_")
                .with_params_key("launch")
                .with_css_namespace("fz"),
        );
        let store = init.tiered(
            MemoryStore::new(),
            MemoryStore::new().with_item(
                "fz_launch",
                json!({"tgWebAppThemeParams": r#"{"button_text_color":"rgb(1,2,3)"}"#}).to_string(),
            ),
        );
        let mut style = MemoryStyle::new();
        init.apply(&store, &mut style);
        assert_eq!(style.get("--fz-button-text-color"), Some("#010203"));
    }

    #[test]
    fn unavailable_style_skips_every_entry() {
        let init = ThemeInitializer::default();
        let theme: ThemeMap = [("bg_color", "#fff"), ("text_color", "#000")]
            .into_iter()
            .collect();
        let mut style = MemoryStyle::unavailable();
        let report = init.apply_theme(&theme, &mut style);
        assert_eq!(report.applied_count(), 0);
        assert_eq!(report.skipped.len(), 2);
    }

    #[test]
    #[traced_test]
    fn run_summary_is_logged() {
        let init = ThemeInitializer::default();
        let theme: ThemeMap = [("bg_color", "#fff")].into_iter().collect();
        let mut style = MemoryStyle::new();
        init.apply_theme(&theme, &mut style);
        assert!(logs_contain("theme.apply"));
        assert!(logs_contain("applied=1"));
    }
}

use serde::{Deserialize, Serialize};

use crate::color::ChannelPolicy;

/// Storage namespace shared by every Fuzzle page script.
pub const DEFAULT_STORAGE_NAMESPACE: &str = "__uwu__";
/// Key the Mini App bootstrap stores the launch parameters under.
pub const DEFAULT_PARAMS_KEY: &str = "initParams";
/// Prefix of the generated CSS variables (matches Telegram's `--tg-theme-*`).
pub const DEFAULT_CSS_NAMESPACE: &str = "tg-theme";

/// Initializer configuration.
///
/// Every field has a default, so a partial JSON object (or `{}`) deserializes
/// into a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Prepended to every storage key before lookup.
    pub storage_namespace: String,
    /// Logical key holding the JSON-encoded launch parameters.
    pub params_key: String,
    /// CSS variable prefix, without the leading `--`.
    pub css_namespace: String,
    /// Handling of `rgb()` channels above 255.
    pub channel_policy: ChannelPolicy,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_owned(),
            params_key: DEFAULT_PARAMS_KEY.to_owned(),
            css_namespace: DEFAULT_CSS_NAMESPACE.to_owned(),
            channel_policy: ChannelPolicy::default(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub fn with_storage_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_params_key(mut self, key: impl Into<String>) -> Self {
        self.params_key = key.into();
        self
    }

    #[must_use]
    pub fn with_css_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.css_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }
}

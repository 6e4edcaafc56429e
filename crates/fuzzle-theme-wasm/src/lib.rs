#![forbid(unsafe_code)]

//! Browser entry point for the Fuzzle Mini App theme.
//!
//! On `wasm32` this crate exports `initTheme()` and `parseColorToHex()` to
//! JavaScript and runs `initTheme()` once when the module is instantiated.
//! Storage comes from `window.sessionStorage` with `window.localStorage` as
//! fallback; variables are written to `document.documentElement.style`.
//!
//! [`run`] is the target-independent part and is what native tests drive.

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{init_theme, parse_color_to_hex};

use fuzzle_theme::{ApplyReport, KeyValueStore, StyleSink, ThemeConfig, ThemeInitializer};

/// Apply the theme with the default configuration.
pub fn run<P, S, W>(session: P, local: S, root: &mut W) -> ApplyReport
where
    P: KeyValueStore,
    S: KeyValueStore,
    W: StyleSink + ?Sized,
{
    let init = ThemeInitializer::new(ThemeConfig::default());
    let store = init.tiered(session, local);
    let report = init.apply(&store, root);
    tracing::info!(
        message = "theme.init",
        outcome = ?report.outcome,
        applied = report.applied_count(),
    );
    report
}

/// Console line for a panic inside the theme module.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn panic_report(location: Option<(&str, u32)>, detail: Option<&str>) -> String {
    let detail = detail.unwrap_or("non-string panic payload");
    match location {
        Some((file, line)) => format!("fuzzle-theme panicked at {file}:{line}: {detail}"),
        None => format!("fuzzle-theme panicked: {detail}"),
    }
}

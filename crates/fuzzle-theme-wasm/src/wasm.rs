#![forbid(unsafe_code)]

//! `wasm-bindgen` exports. Only compiled on `wasm32` targets.

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use fuzzle_theme::ChannelPolicy;

use crate::browser::{BrowserStorage, RootStyle};

fn console_error(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(error) = Reflect::get(&console, &"error".into()) else {
        return;
    };
    let Ok(error_fn) = error.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = error_fn.call1(&console, &JsValue::from_str(msg));
}

fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let location = info.location().map(|loc| (loc.file(), loc.line()));
            console_error(&crate::panic_report(location, info.payload_as_str()));
        }));
    });
}

#[wasm_bindgen(start)]
fn start() {
    install_panic_hook();
    init_theme();
}

/// Apply the Telegram theme found in browser storage to the document root.
///
/// Returns the number of CSS variables written. Safe to call repeatedly.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme() -> u32 {
    let mut root = RootStyle::from_document();
    let report = crate::run(BrowserStorage::session(), BrowserStorage::local(), &mut root);
    u32::try_from(report.applied_count()).unwrap_or(u32::MAX)
}

/// Normalize a CSS color to `#rrggbb`, or `undefined` if it is not recognized.
#[wasm_bindgen(js_name = parseColorToHex)]
pub fn parse_color_to_hex(value: &str) -> Option<String> {
    fuzzle_theme::parse_color_to_hex(value, ChannelPolicy::default()).map(|color| color.to_hex())
}

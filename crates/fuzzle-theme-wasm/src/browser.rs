//! `web-sys` implementations of the storage and style capabilities.

use fuzzle_theme::error::StoreResult;
use fuzzle_theme::{KeyValueStore, StoreError, StyleError, StyleSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, HtmlElement, Storage};

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StorageKind {
    Session,
    Local,
}

/// `window.sessionStorage` or `window.localStorage`, resolved on every read.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrowserStorage {
    kind: StorageKind,
}

impl BrowserStorage {
    pub(crate) const fn session() -> Self {
        Self {
            kind: StorageKind::Session,
        }
    }

    pub(crate) const fn local() -> Self {
        Self {
            kind: StorageKind::Local,
        }
    }

    fn storage(&self) -> StoreResult<Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::unavailable("no window"))?;
        // Accessing storage throws in sandboxed frames and some private modes.
        let storage = match self.kind {
            StorageKind::Session => window.session_storage(),
            StorageKind::Local => window.local_storage(),
        };
        match storage {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::unavailable(format!("{:?} storage missing", self.kind))),
            Err(err) => Err(StoreError::unavailable(js_error_text(&err))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_owned(),
            reason: js_error_text(&err),
        })
    }
}

/// Inline style of `document.documentElement`, if there is one.
pub(crate) struct RootStyle {
    style: Option<CssStyleDeclaration>,
}

impl RootStyle {
    pub(crate) fn from_document() -> Self {
        let style = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
            .map(|root| root.style());
        Self { style }
    }
}

impl StyleSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), StyleError> {
        let Some(style) = &self.style else {
            return Err(StyleError::Unavailable);
        };
        style
            .set_property(name, value)
            .map_err(|err| StyleError::Rejected {
                name: name.to_owned(),
                reason: js_error_text(&err),
            })
    }
}

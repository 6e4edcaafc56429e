#![forbid(unsafe_code)]

//! Telegram Mini App theme decoding for the Fuzzle web pages.
//!
//! # Role in Fuzzle
//! When a page is opened inside Telegram, the host leaves its launch
//! parameters in browser storage. `fuzzle-theme` turns the palette embedded in
//! those parameters into CSS custom properties so the page matches the
//! client's colors.
//!
//! # This crate provides
//! - [`KeyValueStore`] and [`TieredStore`] for the session → local storage lookup.
//! - [`InitParams`] and [`ThemeMap`] for the two JSON decoding layers.
//! - [`parse_color_to_hex`] and [`CanonicalColor`] for color normalization.
//! - [`StyleSink`] and [`apply_color`] for writing CSS variables.
//! - [`ThemeInitializer`] tying it all together.
//!
//! # How it fits in the system
//! The crate has no browser dependency. `fuzzle-theme-wasm` implements the
//! storage and style capabilities on top of `web-sys`; tests use
//! [`MemoryStore`] and [`MemoryStyle`].

/// Color parsing and canonical hex formatting.
pub mod color;
/// Initializer configuration.
pub mod config;
/// CSS custom property naming and the style sink capability.
pub mod css;
/// Capability error types.
pub mod error;
/// Orchestration of lookup, decoding and application.
pub mod init;
/// Decoded Mini App launch parameters.
pub mod params;
/// Key/value storage capability and tiered lookup.
pub mod storage;

pub use color::{CanonicalColor, ChannelPolicy, normalize_value, parse_color_to_hex};
pub use config::ThemeConfig;
pub use css::{MemoryStyle, StyleSink, apply_color, css_variable_name};
pub use error::{StoreError, StyleError};
pub use init::{ApplyOutcome, ApplyReport, ThemeInitializer};
pub use params::{InitParams, ThemeMap};
pub use storage::{KeyValueStore, Lookup, MemoryStore, TieredStore};

//! # Sonant Plugin SDK
//!
//! Everything a plugin needs to be loaded by a Sonant host: the
//! [`SonantPlugin`] capability trait, the [`export_plugin!`] macro that
//! produces the registration entry point, and safe shims over the host's
//! import table ([`logger`], [`registry`]).
//!
//! A complete plugin is a `cdylib` crate containing one trait impl and one
//! macro invocation:
//!
//! ```ignore
//! use sonant_sdk::SonantPlugin;
//!
//! #[derive(Default)]
//! struct MyPlugin;
//!
//! impl SonantPlugin for MyPlugin {
//!     fn name(&self) -> &'static str { "my-plugin" }
//!     fn version(&self) -> &str { "0.1.0" }
//!     fn enable(&self) -> i32 { 0 }
//!     fn disable(&self) -> i32 { 0 }
//!     fn process_signal(&self, _handle: u64) {}
//! }
//!
//! sonant_sdk::export_plugin!(MyPlugin);
//! ```
//!
//! The host side of the boundary (library loading, signal dispatch,
//! lifecycle) lives in the host application and is out of scope here.

pub mod host;
pub mod plugin_api;

// Re-export the surface plugins actually import, so a plugin crate can write
// `use sonant_sdk::{logger, registry, SonantPlugin};`
pub use host::{logger, registry, HostVTable};
pub use plugin_api::export::PluginVTable;
pub use plugin_api::traits::{SonantPlugin, SDK_API_VERSION};
pub use plugin_api::version::{ApiVersion, VersionRange};

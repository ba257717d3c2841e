//! # Sonant Plugin Capability API
//!
//! Defines the contract a plugin satisfies so a Sonant host can drive it.
//!
//! ## Key Submodules and Responsibilities:
//!
//! - **[`traits`]**: The [`SonantPlugin`](traits::SonantPlugin) capability
//!   trait every plugin implements, plus the SDK API version plugins are
//!   compiled against.
//! - **[`version`]**: Parsing and matching of API version constraints
//!   ([`ApiVersion`](version::ApiVersion), [`VersionRange`](version::VersionRange)).
//! - **[`export`]**: The FFI surface handed to the host at registration
//!   time — [`PluginVTable`](export::PluginVTable), the slice/string
//!   marshalling types, and the [`export_plugin!`](crate::export_plugin)
//!   entry-point macro.
//!
//! The host resolves a single `_plugin_init` symbol after loading a plugin
//! library; everything else flows through the vtable that call returns.

pub mod export;
pub mod traits;
pub mod version;

pub use export::PluginVTable;
pub use traits::SonantPlugin;
pub use version::{ApiVersion, VersionRange};

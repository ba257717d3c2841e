//! # Host Import Interface
//!
//! The host passes a [`HostVTable`] into `_plugin_init` when it registers a
//! plugin. The table is attached process-wide, once, and the [`logger`] and
//! [`registry`] shims route plugin calls through it.
//!
//! Plugins built as `rlib` for unit tests run without a host; every shim
//! has a documented fallback for that case so test behavior matches load
//! behavior.

pub mod error;
pub mod logger;
pub mod registry;

pub use error::HostInterfaceError;

use std::os::raw::c_char;
use std::sync::OnceLock;

/// Function table the host exposes to plugins.
///
/// All pointers are required; the host guarantees they stay valid for the
/// life of the process.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct HostVTable {
    /// Sink for plugin log lines (NUL-terminated UTF-8).
    pub log: extern "C" fn(*const c_char),
    /// Read a signal slot.
    pub get_signal: extern "C" fn(u64) -> f64,
    /// Write a signal slot, returning the value it held before the write.
    pub set_signal: extern "C" fn(u64, f64) -> f64,
}

static HOST: OnceLock<HostVTable> = OnceLock::new();

/// Attaches the host's import table for the rest of the process lifetime.
///
/// Called from the registration entry point. The first table wins; a
/// second attach returns [`HostInterfaceError::AlreadyAttached`].
pub fn attach(table: &HostVTable) -> Result<(), HostInterfaceError> {
    HOST.set(*table)
        .map_err(|_| HostInterfaceError::AlreadyAttached)
}

/// Whether a host import table has been attached.
pub fn is_attached() -> bool {
    HOST.get().is_some()
}

pub(crate) fn table() -> Option<&'static HostVTable> {
    HOST.get()
}

// Test module declaration
#[cfg(test)]
mod tests;

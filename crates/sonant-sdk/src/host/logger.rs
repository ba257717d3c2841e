//! Logging through the host.
//!
//! Lines handed to [`log`] end up in the host's own log output, attributed
//! to the plugin. Without an attached host the line goes to the `log` crate
//! facade instead, so plugin code logs identically under unit tests.

use std::ffi::CString;

use super::table;

/// Sends one line to the host's logger.
///
/// Interior NUL bytes cannot cross the C boundary and are stripped.
pub fn log(text: &str) {
    match table() {
        Some(host) => {
            let bytes: Vec<u8> = text.bytes().filter(|&b| b != 0).collect();
            if let Ok(line) = CString::new(bytes) {
                (host.log)(line.as_ptr());
            }
        }
        None => log::info!(target: "sonant_plugin", "{text}"),
    }
}

//! Access to the host's signal registry.
//!
//! The registry is a host-owned table of signal slots addressed by index.
//! Slot bounds and the meaning of each slot belong to the host; an
//! out-of-range index is answered by the host, not by this shim.

use super::table;

/// Reads the current value of a signal slot.
///
/// Returns 0.0 when no host is attached.
pub fn get_signal(idx: u64) -> f64 {
    match table() {
        Some(host) => (host.get_signal)(idx),
        None => 0.0,
    }
}

/// Writes a signal slot and returns the value it held before the write.
///
/// Without an attached host the write is discarded and 0.0 returned.
pub fn set_signal(idx: u64, val: f64) -> f64 {
    match table() {
        Some(host) => (host.set_signal)(idx, val),
        None => 0.0,
    }
}

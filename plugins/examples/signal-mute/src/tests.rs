use super::*; // Import items from the parent module (plugin.rs)
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use std::sync::Mutex;

use sonant_sdk::{host, HostVTable};

// Mock host for this binary: one signal slot and a captured log.

static SLOT: Mutex<f64> = Mutex::new(8.25);
static LOG_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

extern "C" fn mock_log(line: *const c_char) {
    let text = unsafe { CStr::from_ptr(line) }.to_string_lossy().into_owned();
    LOG_LINES.lock().unwrap().push(text);
}

extern "C" fn mock_get_signal(idx: u64) -> f64 {
    if idx == 0 {
        *SLOT.lock().unwrap()
    } else {
        0.0
    }
}

extern "C" fn mock_set_signal(idx: u64, val: f64) -> f64 {
    if idx == 0 {
        let mut slot = SLOT.lock().unwrap();
        let previous = *slot;
        *slot = val;
        previous
    } else {
        0.0
    }
}

fn attach_mock_host() {
    let table = HostVTable {
        log: mock_log,
        get_signal: mock_get_signal,
        set_signal: mock_set_signal,
    };
    // First caller wins; later tests reuse the attached table.
    let _ = host::attach(&table);
}

#[test]
fn status_codes_match_declared_values() {
    let plugin = SignalMutePlugin;
    assert_eq!(plugin.enable(), 9999);
    assert_eq!(plugin.disable(), 999);
}

#[test]
fn process_signal_zeroes_slot_and_reports_displaced_value() {
    attach_mock_host();
    let plugin = SignalMutePlugin;

    plugin.process_signal(0x7);
    assert_eq!(*SLOT.lock().unwrap(), 0.0);
    assert!(LOG_LINES
        .lock()
        .unwrap()
        .iter()
        .any(|l| l.contains("muted slot 0 at 0x7")));

    // Extremes of the handle range are just as harmless.
    plugin.process_signal(0);
    plugin.process_signal(u64::MAX);
    assert_eq!(*SLOT.lock().unwrap(), 0.0);
}

#[test]
fn registration_exposes_the_plugin() {
    attach_mock_host();

    let raw = _plugin_init(ptr::null());
    assert!(!raw.is_null());

    let vtable = unsafe { Box::from_raw(raw) };
    assert_eq!((vtable.enable)(vtable.instance), 9999);
    assert_eq!((vtable.disable)(vtable.instance), 999);
    (vtable.destroy)(vtable.instance);
}

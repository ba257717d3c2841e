use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::Mutex;

use crate::host::{attach, is_attached, logger, registry, HostInterfaceError, HostVTable};

// One mock host table shared by every test in this binary. The import table
// attaches once per process, so each test routes through the same mock and
// asserts additively (and writes only to its own slot).

static LOG_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
static SLOTS: Mutex<[f64; 3]> = Mutex::new([32.0, 24.0, 16.0]);

extern "C" fn mock_log(line: *const c_char) {
    let text = unsafe { CStr::from_ptr(line) }.to_string_lossy().into_owned();
    LOG_LINES.lock().unwrap().push(text);
}

extern "C" fn mock_get_signal(idx: u64) -> f64 {
    SLOTS
        .lock()
        .unwrap()
        .get(idx as usize)
        .copied()
        .unwrap_or(0.0)
}

extern "C" fn mock_set_signal(idx: u64, val: f64) -> f64 {
    let mut slots = SLOTS.lock().unwrap();
    match slots.get_mut(idx as usize) {
        Some(slot) => {
            let previous = *slot;
            *slot = val;
            previous
        }
        None => 0.0,
    }
}

fn mock_table() -> HostVTable {
    HostVTable {
        log: mock_log,
        get_signal: mock_get_signal,
        set_signal: mock_set_signal,
    }
}

fn attach_mock_host() {
    // First caller wins; every later test reuses the already-attached table.
    let _ = attach(&mock_table());
}

#[test]
fn attach_installs_the_table_once() {
    attach_mock_host();
    assert!(is_attached());

    assert!(matches!(
        attach(&mock_table()),
        Err(HostInterfaceError::AlreadyAttached)
    ));
}

#[test]
fn logger_routes_lines_to_the_host() {
    attach_mock_host();
    logger::log("hello from the plugin side");

    let lines = LOG_LINES.lock().unwrap();
    assert!(lines.iter().any(|l| l == "hello from the plugin side"));
}

#[test]
fn logger_strips_interior_nul_bytes() {
    attach_mock_host();
    logger::log("pre\0post");

    let lines = LOG_LINES.lock().unwrap();
    assert!(lines.iter().any(|l| l == "prepost"));
}

#[test]
fn registry_reads_host_slots() {
    attach_mock_host();
    assert_eq!(registry::get_signal(0), 32.0);
}

#[test]
fn registry_write_returns_displaced_value() {
    attach_mock_host();

    // Slot 1 is reserved for this test.
    assert_eq!(registry::set_signal(1, 7.5), 24.0);
    assert_eq!(registry::get_signal(1), 7.5);
}

#[test]
fn out_of_range_slots_answer_zero() {
    attach_mock_host();
    assert_eq!(registry::get_signal(99), 0.0);
    assert_eq!(registry::set_signal(99, 1.0), 0.0);
}

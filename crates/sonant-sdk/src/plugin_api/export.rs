//! FFI surface handed to the host at registration time.
//!
//! A plugin library exposes exactly one symbol, `_plugin_init`, generated by
//! [`export_plugin!`](crate::export_plugin). The host calls it once during
//! module initialization, passing its import table, and receives a
//! [`PluginVTable`] that routes every capability call back into the plugin's
//! [`SonantPlugin`] impl. The vtable functions here are generic shims
//! monomorphized per plugin type, so plugin crates never write `unsafe`.
//!
//! Ownership across the boundary: every accessor that allocates (name,
//! version, API versions, icon) has a paired `free_*` function, and the host
//! must return each value to its pair. `destroy` releases the instance
//! itself and must be the last call.

use std::ffi::CString;
use std::os::raw::{c_char, c_void};
use std::panic;
use std::ptr;

use crate::host::{self, HostVTable};
use crate::plugin_api::traits::SonantPlugin;

/// A borrowed-into-owned slice crossing the FFI boundary.
///
/// Produced by a vtable accessor; ownership transfers to the host until the
/// slice is passed back to the matching `free_*` function. A null `ptr`
/// means "empty" and needs no free call.
#[repr(C)]
pub struct FfiSlice<T> {
    pub ptr: *const T,
    pub len: usize,
}

/// One API version constraint as a C string.
#[repr(C)]
pub struct FfiVersionRange {
    pub constraint: *const c_char,
}

/// Capability table the host drives a plugin through.
#[repr(C)]
pub struct PluginVTable {
    /// Opaque plugin instance; valid for every call until `destroy`.
    pub instance: *mut c_void,
    pub destroy: extern "C" fn(*mut c_void),

    pub name: extern "C" fn(*const c_void) -> *const c_char,
    pub free_name: extern "C" fn(*mut c_char),
    pub version: extern "C" fn(*const c_void) -> *const c_char,
    pub free_version: extern "C" fn(*mut c_char),

    pub compatible_api_versions: extern "C" fn(*const c_void) -> FfiSlice<FfiVersionRange>,
    pub free_compatible_api_versions: extern "C" fn(FfiSlice<FfiVersionRange>),
    pub icon: extern "C" fn(*const c_void) -> FfiSlice<u8>,
    pub free_icon: extern "C" fn(FfiSlice<u8>),

    pub enable: extern "C" fn(*mut c_void) -> i32,
    pub disable: extern "C" fn(*mut c_void) -> i32,
    pub process_signal: extern "C" fn(*mut c_void, u64),
}

fn slice_into_raw<T>(values: Vec<T>) -> FfiSlice<T> {
    let boxed = values.into_boxed_slice();
    let len = boxed.len();
    FfiSlice {
        ptr: Box::into_raw(boxed) as *const T,
        len,
    }
}

unsafe fn slice_from_raw<T>(slice: &FfiSlice<T>) -> Box<[T]> {
    Box::from_raw(ptr::slice_from_raw_parts_mut(slice.ptr as *mut T, slice.len))
}

// --- Vtable shims ---
//
// Each shim reconstructs the concrete plugin type from the instance pointer.
// The signatures must stay in sync with the `PluginVTable` fields above.

extern "C" fn vt_destroy<P: SonantPlugin>(instance: *mut c_void) {
    if !instance.is_null() {
        drop(unsafe { Box::from_raw(instance as *mut P) });
    }
}

// Allocates a C string the host must return to `free_name`/`free_version`.
// Null on interior NUL rather than a silently truncated string.
extern "C" fn vt_name<P: SonantPlugin>(instance: *const c_void) -> *const c_char {
    let plugin = unsafe { &*(instance as *const P) };
    match CString::new(plugin.name()) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null(),
    }
}

extern "C" fn vt_version<P: SonantPlugin>(instance: *const c_void) -> *const c_char {
    let plugin = unsafe { &*(instance as *const P) };
    match CString::new(plugin.version()) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null(),
    }
}

extern "C" fn vt_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

extern "C" fn vt_compatible_api_versions<P: SonantPlugin>(
    instance: *const c_void,
) -> FfiSlice<FfiVersionRange> {
    let plugin = unsafe { &*(instance as *const P) };
    let mut ranges = Vec::new();
    for range in plugin.compatible_api_versions() {
        match CString::new(range.constraint_string()) {
            Ok(c) => ranges.push(FfiVersionRange {
                constraint: c.into_raw(),
            }),
            Err(_) => {
                log::error!("version constraint contained a NUL byte, skipping");
            }
        }
    }
    slice_into_raw(ranges)
}

extern "C" fn vt_free_compatible_api_versions(slice: FfiSlice<FfiVersionRange>) {
    if slice.ptr.is_null() {
        return;
    }
    let ranges = unsafe { slice_from_raw(&slice) };
    for range in ranges.iter() {
        if !range.constraint.is_null() {
            drop(unsafe { CString::from_raw(range.constraint as *mut c_char) });
        }
    }
}

extern "C" fn vt_icon<P: SonantPlugin>(instance: *const c_void) -> FfiSlice<u8> {
    let plugin = unsafe { &*(instance as *const P) };
    let bytes = plugin.icon();
    if bytes.is_empty() {
        return FfiSlice {
            ptr: ptr::null(),
            len: 0,
        };
    }
    slice_into_raw(bytes)
}

extern "C" fn vt_free_icon(slice: FfiSlice<u8>) {
    if !slice.ptr.is_null() {
        drop(unsafe { slice_from_raw(&slice) });
    }
}

extern "C" fn vt_enable<P: SonantPlugin>(instance: *mut c_void) -> i32 {
    let plugin = unsafe { &*(instance as *const P) };
    plugin.enable()
}

extern "C" fn vt_disable<P: SonantPlugin>(instance: *mut c_void) -> i32 {
    let plugin = unsafe { &*(instance as *const P) };
    plugin.disable()
}

extern "C" fn vt_process_signal<P: SonantPlugin>(instance: *mut c_void, handle: u64) {
    let plugin = unsafe { &*(instance as *const P) };
    plugin.process_signal(handle);
}

/// Builds the capability table for `plugin`, moving it behind the
/// `instance` pointer. The table's `destroy` releases it again.
pub fn build_vtable<P: SonantPlugin + 'static>(plugin: P) -> PluginVTable {
    PluginVTable {
        instance: Box::into_raw(Box::new(plugin)) as *mut c_void,
        destroy: vt_destroy::<P>,
        name: vt_name::<P>,
        free_name: vt_free_string,
        version: vt_version::<P>,
        free_version: vt_free_string,
        compatible_api_versions: vt_compatible_api_versions::<P>,
        free_compatible_api_versions: vt_free_compatible_api_versions,
        icon: vt_icon::<P>,
        free_icon: vt_free_icon,
        enable: vt_enable::<P>,
        disable: vt_disable::<P>,
        process_signal: vt_process_signal::<P>,
    }
}

/// Target of the generated `_plugin_init` symbol.
///
/// Attaches the host's import table (a null `host` is tolerated; imports
/// then fall back as documented in [`crate::host`]), constructs the plugin,
/// and hands its vtable to the host. Panics must not cross the FFI
/// boundary, so the whole sequence runs under `catch_unwind` and reports
/// failure as a null vtable.
pub fn entry<P>(host: *const HostVTable) -> *mut PluginVTable
where
    P: SonantPlugin + Default + 'static,
{
    let result = panic::catch_unwind(|| {
        if let Some(table) = unsafe { host.as_ref() } {
            if host::attach(table).is_err() {
                // A second registration in the same address space keeps the
                // first table.
                log::debug!("host interface already attached, keeping the existing table");
            }
        }
        Box::into_raw(Box::new(build_vtable(P::default())))
    });

    match result {
        Ok(vtable) => vtable,
        Err(_) => {
            log::error!("plugin panicked during registration");
            ptr::null_mut()
        }
    }
}

/// Generates the registration entry point for a plugin type.
///
/// The type must implement [`SonantPlugin`] and `Default`. Invoke exactly
/// once per plugin library.
#[macro_export]
macro_rules! export_plugin {
    ($plugin:ty) => {
        /// Entry point resolved by the host after loading this library.
        #[no_mangle]
        pub extern "C" fn _plugin_init(
            host: *const $crate::host::HostVTable,
        ) -> *mut $crate::plugin_api::export::PluginVTable {
            $crate::plugin_api::export::entry::<$plugin>(host)
        }
    };
}

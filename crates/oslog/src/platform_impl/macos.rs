// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Backend, CreationError, Error, Handle, NativeHandle, Result, Severity};
use std::{
    ffi::{CStr, c_char, c_void},
    mem::size_of,
    ptr::addr_of,
};

#[repr(C)]
struct OsLogObject {
    _private: [u8; 0],
}

type OsLog = *mut OsLogObject;

#[link(name = "System", kind = "dylib")]
unsafe extern "C" {
    static _os_log_default: OsLogObject;
    static __dso_handle: OsLogObject;

    fn os_log_create(subsystem: *const c_char, category: *const c_char) -> OsLog;
    fn os_log_type_enabled(oslog: OsLog, log_type: u8) -> bool;
    fn _os_log_impl(
        dso: *const c_void,
        oslog: OsLog,
        log_type: u8,
        format: *const c_char,
        buf: *const u8,
        size: u32,
    );
}

// The log tools decode format strings from this section of the calling image.  Messages are
// always marked public, otherwise the store redacts them as `<private>`.
#[used]
#[unsafe(link_section = "__TEXT,__oslogstring,cstring_literals")]
static MESSAGE_FORMAT: [u8; 11] = *b"%{public}s\0";

// Argument buffer layout for a single string argument, as `os_log_with_type` encodes it.
const SUMMARY_HAS_NON_SCALAR: u8 = 0x02;
const DESCRIPTOR_PUBLIC_STRING: u8 = 0x22;
const BUFFER_LEN: usize = 4 + size_of::<usize>();

/// The unified logging system, via `os_log_create`, `os_log_type_enabled` and `_os_log_impl`.
#[derive(Debug)]
pub struct NativeBackend {
    _private: (),
}

impl NativeBackend {
    /// Fails with [`Error::UnsupportedPlatform`] if this macOS release predates unified logging.
    pub fn new() -> Result<Self> {
        if !capability::is_supported() {
            return Err(Error::UnsupportedPlatform);
        }
        Ok(Self { _private: () })
    }

    fn resolve(handle: Handle) -> Option<OsLog> {
        match handle {
            // SAFETY: only the address of the extern static is taken.
            Handle::Default => Some(unsafe { addr_of!(_os_log_default) }.cast_mut()),
            Handle::Disabled => None,
            Handle::Native(handle) => Some(handle.as_ptr().cast()),
        }
    }
}

impl Backend for NativeBackend {
    fn create_channel(&self, subsystem: &CStr, category: &CStr) -> Result<NativeHandle> {
        // SAFETY: both strings are NUL-terminated and outlive the call.  The returned object is
        // retained for the life of the process.
        let oslog = unsafe { os_log_create(subsystem.as_ptr(), category.as_ptr()) };
        // SAFETY: a non-null result of os_log_create is a valid channel of this backend.
        unsafe { NativeHandle::from_raw(oslog.cast()) }.ok_or(CreationError::Refused.into())
    }

    fn severity_enabled(&self, handle: Handle, severity: Severity) -> bool {
        match Self::resolve(handle) {
            // SAFETY: resolved handles are the default channel or objects from os_log_create.
            Some(oslog) => unsafe { os_log_type_enabled(oslog, severity.code()) },
            None => false,
        }
    }

    fn write(&self, handle: Handle, severity: Severity, message: &CStr) -> Result<()> {
        let Some(oslog) = Self::resolve(handle) else {
            return Ok(());
        };
        let mut buf = [0u8; BUFFER_LEN];
        buf[0] = SUMMARY_HAS_NON_SCALAR;
        buf[1] = 1;
        buf[2] = DESCRIPTOR_PUBLIC_STRING;
        buf[3] = size_of::<usize>() as u8;
        buf[4..].copy_from_slice(&(message.as_ptr() as usize).to_ne_bytes());
        // SAFETY: only the address of the linker-provided image header is taken.
        let dso = unsafe { addr_of!(__dso_handle) };
        // SAFETY: the buffer describes one public string argument pointing at `message`, which
        // is NUL-terminated and outlives the call; the format lives in this image's oslog
        // string section.
        unsafe {
            _os_log_impl(
                dso.cast(),
                oslog,
                severity.code(),
                MESSAGE_FORMAT.as_ptr().cast(),
                buf.as_ptr(),
                BUFFER_LEN as u32,
            );
        }
        Ok(())
    }
}

// End of File

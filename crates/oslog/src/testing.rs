// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! An in-memory [`Backend`] that records every call, for tests on any platform.

use crate::{Backend, CreationError, Error, Handle, NativeHandle, Result, Severity};
use parking_lot::Mutex;
use std::{
    collections::HashSet,
    ffi::{CStr, c_void},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// A backend call, in the order it was received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateChannel {
        subsystem: String,
        category: String,
        handle: NativeHandle,
    },
    SeverityEnabled {
        handle: Handle,
        severity: Severity,
    },
    Write(Written),
}

/// A message the backend accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub handle: Handle,
    pub severity: Severity,
    pub message: String,
}

/// Records calls instead of logging.  Handles it allocates are fake addresses that are unique per
/// backend instance and must never be passed to a real backend.
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
    next_handle: AtomicUsize,
    refuse_creation: AtomicBool,
    write_failure: Mutex<Option<String>>,
    disabled: Mutex<HashSet<Severity>>,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    /// A backend with every severity enabled, that accepts every channel and every write.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_handle: AtomicUsize::new(0x1000),
            refuse_creation: AtomicBool::new(false),
            write_failure: Mutex::new(None),
            disabled: Mutex::new(HashSet::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn writes(&self) -> Vec<Written> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::Write(written) => Some(written.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_write(&self) -> Option<Written> {
        self.writes().pop()
    }

    /// Number of [`Backend::severity_enabled`] queries received.
    pub fn enabled_queries(&self) -> usize {
        self.count(|call| matches!(call, Call::SeverityEnabled { .. }))
    }

    /// Number of channels successfully allocated.
    pub fn created_channels(&self) -> usize {
        self.count(|call| matches!(call, Call::CreateChannel { .. }))
    }

    /// Makes subsequent channel allocations fail with [`CreationError::Refused`].
    pub fn refuse_creation(&self, refuse: bool) {
        self.refuse_creation.store(refuse, Ordering::SeqCst);
    }

    /// Makes subsequent writes fail with [`Error::Backend`], or succeed again with `None`.
    pub fn fail_writes(&self, reason: Option<&str>) {
        *self.write_failure.lock() = reason.map(str::to_owned);
    }

    /// Reports `severity` as disabled for every channel.
    pub fn disable_severity(&self, severity: Severity) {
        self.disabled.lock().insert(severity);
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }
}

impl Backend for RecordingBackend {
    fn create_channel(&self, subsystem: &CStr, category: &CStr) -> Result<NativeHandle> {
        if self.refuse_creation.load(Ordering::SeqCst) {
            return Err(CreationError::Refused.into());
        }
        let address = self.next_handle.fetch_add(0x10, Ordering::SeqCst);
        // SAFETY: recording handles are never dereferenced, and never leave this backend.
        let handle = unsafe { NativeHandle::from_raw(address as *mut c_void) }
            .ok_or(CreationError::Refused)?;
        self.calls.lock().push(Call::CreateChannel {
            subsystem: subsystem.to_string_lossy().into_owned(),
            category: category.to_string_lossy().into_owned(),
            handle,
        });
        Ok(handle)
    }

    fn severity_enabled(&self, handle: Handle, severity: Severity) -> bool {
        self.calls
            .lock()
            .push(Call::SeverityEnabled { handle, severity });
        handle != Handle::Disabled && !self.disabled.lock().contains(&severity)
    }

    fn write(&self, handle: Handle, severity: Severity, message: &CStr) -> Result<()> {
        if let Some(reason) = self.write_failure.lock().clone() {
            return Err(Error::Backend(reason));
        }
        if handle == Handle::Disabled {
            return Ok(());
        }
        self.calls.lock().push(Call::Write(Written {
            handle,
            severity,
            message: message.to_string_lossy().into_owned(),
        }));
        Ok(())
    }
}

// End of File

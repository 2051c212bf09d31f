// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Result, Severity};
use std::{
    ffi::{CStr, c_void},
    ptr::NonNull,
};

/// An opaque channel object allocated by a [`Backend`].  Never dereferenced on the Rust side; it
/// is only handed back to the backend that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NativeHandle(NonNull<c_void>);

// SAFETY: the handle is an opaque token.  Native channel objects are immutable once created and
// the backend accepts them from any thread.
unsafe impl Send for NativeHandle {}
unsafe impl Sync for NativeHandle {}

impl NativeHandle {
    /// Wraps a raw channel pointer, returning `None` for null.
    ///
    /// # Safety
    ///
    /// `ptr` must be a channel object of the backend this handle will be passed to, valid for the
    /// remainder of the process.
    pub unsafe fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

/// Which channel a target writes to.  The default and disabled channels are ambient constants of
/// the backend, so they are named here rather than carried as pointers, and each [`Backend`]
/// resolves them to its own representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The backend's implicit default channel (`OS_LOG_DEFAULT`).
    Default,
    /// The absent handle (`OS_LOG_DISABLED`).  Nothing written here is ever stored.
    Disabled,
    /// A channel allocated by [`Backend::create_channel`].
    Native(NativeHandle),
}

/// The primitive operations of a native logging store.
///
/// [`Dispatcher`](crate::Dispatcher) never sends [`Handle::Disabled`] to a backend, but
/// implementations should still treat it as "drop silently".
pub trait Backend: Send + Sync {
    /// Allocates a new channel for `(subsystem, category)`.  Called once per successful target
    /// creation; the backend is not expected to deduplicate.
    fn create_channel(&self, subsystem: &CStr, category: &CStr) -> Result<NativeHandle>;

    /// Whether messages of `severity` sent to `handle` would currently be stored.
    fn severity_enabled(&self, handle: Handle, severity: Severity) -> bool;

    /// Appends `message` to the channel at `severity`.
    fn write(&self, handle: Handle, severity: Severity, message: &CStr) -> Result<()>;
}

// End of File

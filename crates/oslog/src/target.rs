// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{CreationError, Handle, NativeHandle};
use lazy_static::lazy_static;
use std::{ffi::CString, fmt, sync::Arc};

/// Longest subsystem name, in bytes, the backend accepts.
pub const MAX_SUBSYSTEM_LEN: usize = 249;

/// Longest category name, in bytes, the backend accepts.
pub const MAX_CATEGORY_LEN: usize = 254;

lazy_static! {
    static ref DEFAULT_CHANNEL: Arc<TargetIdentity> =
        Arc::new(TargetIdentity::singleton(Handle::Default, "OS_LOG_DEFAULT"));
    static ref DISABLED: Arc<TargetIdentity> =
        Arc::new(TargetIdentity::singleton(Handle::Disabled, "OS_LOG_DISABLED"));
}

/// A logging channel: the native handle plus the `(subsystem, category)` it was created under.
///
/// Three forms exist.  The process-wide [`default_channel`](Self::default_channel) and
/// [`disabled`](Self::disabled) singletons, and custom targets obtained from
/// [`Dispatcher::create_target`](crate::Dispatcher::create_target) (or `TargetIdentity::create`
/// on macOS).  Every form is immutable after construction, so targets are shared across threads
/// without locking.
#[derive(Debug)]
pub struct TargetIdentity {
    handle: Handle,
    subsystem: Option<String>,
    category: Option<String>,
    label: String,
}

impl TargetIdentity {
    fn singleton(handle: Handle, name: &str) -> Self {
        Self {
            handle,
            subsystem: None,
            category: None,
            label: format!("<TargetIdentity ({name})>"),
        }
    }

    pub(crate) fn custom(handle: NativeHandle, subsystem: String, category: String) -> Self {
        let label = format!("<TargetIdentity ({subsystem}:{category})>");
        Self {
            handle: Handle::Native(handle),
            subsystem: Some(subsystem),
            category: Some(category),
            label,
        }
    }

    /// The backend's default channel.  Every call returns the same shared instance.
    pub fn default_channel() -> Arc<Self> {
        DEFAULT_CHANNEL.clone()
    }

    /// The disabled sink.  Every call returns the same shared instance, which has no native
    /// handle; anything written to it is discarded before reaching the backend.
    pub fn disabled() -> Arc<Self> {
        DISABLED.clone()
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn is_disabled(&self) -> bool {
        self.handle == Handle::Disabled
    }

    pub fn subsystem(&self) -> Option<&str> {
        self.subsystem.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Diagnostic label, e.g. `<TargetIdentity (com.example.app:network)>`.  Never sent to the
    /// backend.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Two targets are equal when they wrap the same handle under the same label.  Custom targets
/// created twice from identical names hold distinct handles, and so compare unequal.
impl PartialEq for TargetIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.label == other.label
    }
}

impl Eq for TargetIdentity {}

impl fmt::Display for TargetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Checks a `(subsystem, category)` pair against the backend's limits and converts it for the C
/// boundary.  Oversized names are rejected, never truncated.
pub(crate) fn validate(
    subsystem: &str,
    category: &str,
) -> Result<(CString, CString), CreationError> {
    if subsystem.is_empty() {
        return Err(CreationError::EmptySubsystem);
    }
    if category.is_empty() {
        return Err(CreationError::EmptyCategory);
    }
    if subsystem.len() > MAX_SUBSYSTEM_LEN {
        return Err(CreationError::SubsystemTooLong {
            len: subsystem.len(),
        });
    }
    if category.len() > MAX_CATEGORY_LEN {
        return Err(CreationError::CategoryTooLong {
            len: category.len(),
        });
    }
    let subsystem = CString::new(subsystem).map_err(|_| CreationError::InteriorNul)?;
    let category = CString::new(category).map_err(|_| CreationError::InteriorNul)?;
    Ok((subsystem, category))
}


// End of File

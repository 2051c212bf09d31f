// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # unilog's Unified Logging Core
//!
//! Sends messages to the macOS unified logging system (`os_log`).  The crate is built from three
//! pieces:
//!
//! - [`Severity`], the five native log types with their wire codes and an explicit importance
//!   order.
//! - [`TargetIdentity`], a logging channel: the shared default channel, the shared disabled sink,
//!   or a custom `(subsystem, category)` channel.
//! - [`Dispatcher`], which composes a message from `Display` arguments (see [`args!`]) and hands
//!   it to a [`Backend`].
//!
//! The backend-independent pieces compile everywhere, so they can be exercised against the
//! recording backend in the `testing` module (feature `testing`).  The native backend and the
//! process-wide free functions (`write`, `info`, `log`, ...) exist only on macOS, and fail
//! with [`Error::UnsupportedPlatform`] on releases older than macOS 10.12.
//!
//! ```ignore
//! use unilog_oslog::{TargetIdentity, args};
//!
//! let target = TargetIdentity::create("com.example.app", "network")?;
//! unilog_oslog::error(&target, &args!["connection lost after", 3, "retries"])?;
//! ```

mod backend;
pub use backend::{Backend, Handle, NativeHandle};

mod dispatch;
pub use dispatch::Dispatcher;

mod error;
pub use error::{CreationError, Error, Result};

mod message;
pub use message::{DebugArg, compose};

mod severity;
pub use severity::Severity;

mod target;
pub use target::{MAX_CATEGORY_LEN, MAX_SUBSYSTEM_LEN, TargetIdentity};

#[cfg(target_os = "macos")]
mod platform_impl;
#[cfg(target_os = "macos")]
pub use platform_impl::NativeBackend;

#[cfg(target_os = "macos")]
mod native;
#[cfg(target_os = "macos")]
pub use native::*;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Most commonly used types, suitable for glob import.
pub mod prelude {
    pub use crate::{Dispatcher, Error, Severity, TargetIdentity, args};
}

// End of File

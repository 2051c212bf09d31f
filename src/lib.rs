// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # unilog
//!
//! Routes log records to the macOS unified logging system (`os_log`).  This crate gathers the
//! workspace's public API in one place:
//!
//! - The capability gate ([`is_supported`], [`is_fully_supported`], [`os_version`]).
//! - Direct logging through [`TargetIdentity`] and the [`Severity`] levels, either via a
//!   [`Dispatcher`] or, on macOS, via the process-wide free functions (`write`, `info`, `log`,
//!   ...).
//! - The bridge from leveled logging frameworks ([`LevelAdapter`]), with a ready-made integration
//!   for the `log` crate ([`OsLogger`], [`init`]).
//!
//! Most applications only need [`init`]:
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     unilog::init(&unilog::LoggerConfig::from_env()?)?;
//!     log::warn!("low disk space");
//!     Ok(())
//! }
//! ```

pub use capability::{
    FULL_SUPPORT_VERSION, MINIMUM_VERSION, OsVersion, is_fully_supported, is_supported,
    os_version,
};

pub use oslog::{
    Backend, CreationError, Dispatcher, Error, Handle, Result, Severity, TargetIdentity, args,
    compose,
};

#[cfg(target_os = "macos")]
pub use oslog::{
    NativeBackend, debug, debug_enabled, dispatcher, error, fault, info, info_enabled, log,
    severity_enabled, write, write_default, write_message, write_raw,
};

pub use logging::{
    DEFAULT_CATEGORY, LevelAdapter, LoggerConfig, OsLogger, Threshold, ThresholdTable, host_level,
    init,
};

/// A module which is typically glob imported.
pub mod prelude {
    pub use oslog::prelude::*;
    pub use logging::prelude::*;
}

// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # unilog's Logging Framework Bridge
//!
//! Connects a leveled logging framework to the unified logging system.  Frameworks in this style
//! grade records on an open integer scale (`10` debug through `50` critical); a
//! [`LevelAdapter`] maps those levels onto [`Severity`](oslog::Severity) through a
//! [`ThresholdTable`] and writes already formatted records to its current target.
//!
//! The [`log`] crate is the framework this workspace ships an integration for: [`OsLogger`]
//! implements [`log::Log`] on top of a [`LevelAdapter`], and [`init`] installs one configured
//! from a [`LoggerConfig`].  By default the facade lets through [`Info`](log::Level::Info) in
//! debug builds and [`Warn`](log::Level::Warn) in release builds.  This can be overridden from
//! the environment, like so:
//!
//! ```sh
//! $> UNILOG_SUBSYSTEM=com.example.app UNILOG_LEVEL=debug cargo run
//! ```

mod adapter;
pub use adapter::{DEFAULT_CATEGORY, LevelAdapter};

mod config;
pub use config::{CATEGORY_VARIABLE, LEVEL_VARIABLE, LoggerConfig, SUBSYSTEM_VARIABLE};

mod logger;
pub use logger::OsLogger;

mod platform;
mod platform_impl;
pub use platform::init;

mod threshold;
pub use threshold::{
    CRITICAL, DEBUG, ERROR, INFO, NOTSET, Threshold, ThresholdError, ThresholdTable, WARNING,
    host_level,
};

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::{LevelAdapter, LoggerConfig, OsLogger, ThresholdTable, init};
}

// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # unilog's Capability Gate
//!
//! Decides, once per process, whether the macOS unified logging system can be used.  The backend
//! first shipped with macOS 10.12, but not every query it offers is dependable until macOS 12, so
//! two thresholds are exposed:
//!
//! - [`is_supported`]: the backend exists ([`MINIMUM_VERSION`] or later).
//! - [`is_fully_supported`]: every backend operation behaves reliably ([`FULL_SUPPORT_VERSION`]
//!   or later).
//!
//! Both are `false` on every platform other than macOS.  The rest of the workspace compiles its
//! native entry points only for macOS, and refuses to construct the native backend when
//! [`is_supported`] is `false`.
//!
//! Building documentation on an unsupported machine sometimes requires pretending otherwise.  With
//! the `override-is-supported` feature enabled, setting `UNILOG_OVERRIDE_IS_SUPPORTED` to any
//! non-empty value forces [`is_supported`] open and logs a warning.  Without the feature, that
//! code path is not compiled at all.

use lazy_static::lazy_static;

mod platform_impl;

mod version;
pub use version::{OsVersion, ParseVersionError};

/// The first OS release that ships the unified logging system.
pub const MINIMUM_VERSION: OsVersion = OsVersion::new(10, 12, 0);

/// The first OS release on which every backend query operation is reliable.
pub const FULL_SUPPORT_VERSION: OsVersion = OsVersion::new(12, 0, 0);

/// Environment variable consulted by the documentation-only override.
#[cfg(feature = "override-is-supported")]
pub const OVERRIDE_VARIABLE: &str = "UNILOG_OVERRIDE_IS_SUPPORTED";

lazy_static! {
    static ref OS_VERSION: Option<OsVersion> = platform_impl::os_version();
    static ref SUPPORTED: bool = meets(*OS_VERSION, MINIMUM_VERSION) || overridden();
}

/// The version of the running operating system, or `None` if this is not a platform with a
/// unified logging system.
pub fn os_version() -> Option<OsVersion> {
    *OS_VERSION
}

/// Whether the unified logging backend is usable by this process.  Computed on first call and
/// cached for the lifetime of the process.
pub fn is_supported() -> bool {
    *SUPPORTED
}

/// Whether the running OS provides every backend operation reliably.  Never affected by the
/// documentation override.
pub fn is_fully_supported() -> bool {
    meets(os_version(), FULL_SUPPORT_VERSION)
}

/// Pure form of the gate: a known version at or above `minimum`.
pub fn meets(version: Option<OsVersion>, minimum: OsVersion) -> bool {
    version.is_some_and(|version| version.at_least(minimum))
}

#[cfg(feature = "override-is-supported")]
fn overridden() -> bool {
    override_requested(|name| std::env::var_os(name), &mut std::io::stderr())
}

/// Checks `lookup` for a non-empty [`OVERRIDE_VARIABLE`] and, if present, writes a warning to
/// `warnings`.  The gate is usually evaluated before any logger is installed, so the warning does
/// not go through [`log`] alone.
#[cfg(feature = "override-is-supported")]
fn override_requested(
    lookup: impl Fn(&str) -> Option<std::ffi::OsString>,
    warnings: &mut impl std::io::Write,
) -> bool {
    use std::io::Write;

    let requested = lookup(OVERRIDE_VARIABLE).is_some_and(|value| !value.is_empty());
    if requested {
        let message = format!(
            "overriding is_supported() on an unsupported platform via {OVERRIDE_VARIABLE} \
             (use to build documentation only)"
        );
        let _ = writeln!(warnings, "unilog: warning: {message}");
        log::warn!("{message}");
    }
    requested
}

#[cfg(not(feature = "override-is-supported"))]
fn overridden() -> bool {
    false
}


// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Process-wide entry points over the native backend.  Each is a thin call into the shared
//! [`Dispatcher`]; see the identically named [`Dispatcher`] methods for semantics.

use crate::{Dispatcher, NativeBackend, Result, Severity, TargetIdentity};
use lazy_static::lazy_static;
use std::{fmt, sync::Arc};

lazy_static! {
    static ref NATIVE: Result<Arc<Dispatcher>> =
        NativeBackend::new().map(|backend| Arc::new(Dispatcher::new(Arc::new(backend))));
}

/// The dispatcher over the native backend, created on first use.  Fails with
/// [`UnsupportedPlatform`](crate::Error::UnsupportedPlatform) on macOS releases without unified
/// logging, every time it is called.
pub fn dispatcher() -> Result<Arc<Dispatcher>> {
    NATIVE.clone()
}

impl TargetIdentity {
    /// Creates a custom target on the native backend.
    pub fn create(subsystem: &str, category: &str) -> Result<TargetIdentity> {
        dispatcher()?.create_target(subsystem, category)
    }
}

pub fn severity_enabled(target: &TargetIdentity, severity: Severity) -> Result<bool> {
    Ok(dispatcher()?.severity_enabled(target, severity))
}

pub fn info_enabled(target: &TargetIdentity) -> Result<bool> {
    Ok(dispatcher()?.info_enabled(target))
}

pub fn debug_enabled(target: &TargetIdentity) -> Result<bool> {
    Ok(dispatcher()?.debug_enabled(target))
}

pub fn write(
    target: &TargetIdentity,
    severity: Severity,
    args: &[&dyn fmt::Display],
) -> Result<()> {
    dispatcher()?.write(target, severity, args)
}

pub fn write_message(target: &TargetIdentity, severity: Severity, message: &str) -> Result<()> {
    dispatcher()?.write_message(target, severity, message)
}

pub fn write_raw(target: &TargetIdentity, code: i64, args: &[&dyn fmt::Display]) -> Result<()> {
    dispatcher()?.write_raw(target, code, args)
}

pub fn write_default(args: &[&dyn fmt::Display]) -> Result<()> {
    dispatcher()?.write_default(args)
}

pub fn info(target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
    dispatcher()?.info(target, args)
}

pub fn debug(target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
    dispatcher()?.debug(target, args)
}

pub fn error(target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
    dispatcher()?.error(target, args)
}

pub fn fault(target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
    dispatcher()?.fault(target, args)
}

pub fn log(
    args: &[&dyn fmt::Display],
    target: Option<&TargetIdentity>,
    severity: Option<Severity>,
) -> Result<()> {
    dispatcher()?.log(args, target, severity)
}

// End of File

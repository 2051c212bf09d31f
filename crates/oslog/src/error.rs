// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::target::{MAX_CATEGORY_LEN, MAX_SUBSYSTEM_LEN};
use thiserror::Error;

/// Errors surfaced by target creation and dispatch.
///
/// Every error is returned synchronously to the caller.  Nothing is retried, and nothing is
/// downgraded to a silent drop: whether a lost diagnostic matters is the caller's decision.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The unified logging system is not available on this platform or OS release.
    ///
    /// Only produced when constructing the native backend on a macOS release that predates the
    /// backend.  On other platforms the native entry points do not exist at all.
    #[error("the unified logging system is not supported on this platform")]
    UnsupportedPlatform,

    /// A custom target could not be created.
    #[error("unable to create log target: {0}")]
    Creation(#[from] CreationError),

    /// A value that cannot be represented at the backend boundary, such as a severity code outside
    /// the enumeration or a message containing a NUL byte.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Opaque failure reported by the native layer.
    #[error("logging backend error: {0}")]
    Backend(String),
}

/// Reasons a `(subsystem, category)` pair is rejected.  Validation happens before the backend is
/// asked for a channel, so an invalid name never allocates anything.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CreationError {
    #[error("subsystem must not be empty")]
    EmptySubsystem,

    #[error("category must not be empty")]
    EmptyCategory,

    #[error("subsystem is {len} bytes, over the {max} byte limit", max = MAX_SUBSYSTEM_LEN)]
    SubsystemTooLong { len: usize },

    #[error("category is {len} bytes, over the {max} byte limit", max = MAX_CATEGORY_LEN)]
    CategoryTooLong { len: usize },

    #[error("subsystem and category must not contain NUL bytes")]
    InteriorNul,

    #[error("the backend refused to allocate a channel")]
    Refused,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// End of File

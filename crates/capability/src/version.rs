// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// An operating system version triple, as reported by the host.  Ordering is lexicographic over
/// `(major, minor, patch)`, which is how release numbers of the supported platform compare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this version is the same as, or later than, `minimum`.
    pub fn at_least(&self, minimum: OsVersion) -> bool {
        *self >= minimum
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Failure to parse an [`OsVersion`] from a dotted version string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("version string is empty")]
    Empty,
    #[error("invalid version component {0:?}")]
    InvalidComponent(String),
    #[error("too many version components in {0:?}")]
    TooManyComponents(String),
}

/// Parses `"major[.minor[.patch]]"`.  Missing components are zero, so `"12"` is `12.0.0`.
impl FromStr for OsVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseVersionError::Empty);
        }
        let mut components = [0u32; 3];
        for (index, part) in s.split('.').enumerate() {
            if index >= components.len() {
                return Err(ParseVersionError::TooManyComponents(s.to_owned()));
            }
            components[index] = part
                .parse()
                .map_err(|_| ParseVersionError::InvalidComponent(part.to_owned()))?;
        }
        Ok(Self::new(components[0], components[1], components[2]))
    }
}


// End of File

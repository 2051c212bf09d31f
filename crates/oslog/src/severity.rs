// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

/// The closed set of severities understood by the unified logging system, carrying the numeric
/// codes the backend expects (`OS_LOG_TYPE_*`).
///
/// The wire codes do not follow importance: [`Default`](Severity::Default) is `0x00`, yet it ranks
/// above [`Debug`](Severity::Debug) and [`Info`](Severity::Info) (the log tools call it *notice*).
/// Comparisons therefore go through [`Severity::importance`], never through the code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    #[default]
    Default = 0x00,
    Info = 0x01,
    Debug = 0x02,
    Error = 0x10,
    Fault = 0x11,
}

impl Severity {
    /// Every severity, least important first.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Default,
        Severity::Error,
        Severity::Fault,
    ];

    /// The native `os_log_type_t` value.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Rank in operational importance, `0` for [`Debug`](Severity::Debug) up to `4` for
    /// [`Fault`](Severity::Fault).
    pub const fn importance(self) -> u8 {
        match self {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Default => 2,
            Severity::Error => 3,
            Severity::Fault => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Error => "error",
            Severity::Fault => "fault",
        }
    }

    /// Looks up the severity for a raw numeric code.  Anything other than the five native codes
    /// is rejected rather than mapped to a nearby severity.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0x00 => Ok(Severity::Default),
            0x01 => Ok(Severity::Info),
            0x02 => Ok(Severity::Debug),
            0x10 => Ok(Severity::Error),
            0x11 => Ok(Severity::Fault),
            _ => Err(Error::InvalidArgument(format!(
                "{code} is not a valid severity code"
            ))),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Severity::from_code(i64::from(code))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.code()
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.importance().cmp(&other.importance())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown severity {s:?}")))
    }
}


// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use oslog::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host level of a record whose level was never configured.
pub const NOTSET: i32 = 0;
pub const DEBUG: i32 = 10;
pub const INFO: i32 = 20;
pub const WARNING: i32 = 30;
pub const ERROR: i32 = 40;
pub const CRITICAL: i32 = 50;

/// Places a [`log::Level`] on the conventional `0..=50` host scale.  `Trace` has no slot of its
/// own there and shares `Debug`'s.
pub fn host_level(level: log::Level) -> i32 {
    match level {
        log::Level::Error => ERROR,
        log::Level::Warn => WARNING,
        log::Level::Info => INFO,
        log::Level::Debug | log::Level::Trace => DEBUG,
    }
}

/// Host levels at or above `level` map to `severity`, unless a higher threshold also matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    pub level: i32,
    pub severity: Severity,
}

impl Threshold {
    pub const fn new(level: i32, severity: Severity) -> Self {
        Self { level, severity }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("a threshold table needs at least one threshold")]
    Empty,
    #[error("more than one threshold starts at host level {0}")]
    Duplicate(i32),
}

/// Maps host levels onto [`Severity`].  Thresholds are checked from the highest minimum down and
/// the first one the host level meets wins.  Levels below every threshold, including the unset
/// level `0`, map to [`Severity::Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThresholdTable {
    // Sorted by descending level.
    thresholds: Vec<Threshold>,
}

impl ThresholdTable {
    /// `{50→Fault, 40→Error, 30→Default, 20→Info, 10→Debug}`.
    pub fn standard() -> Self {
        Self {
            thresholds: vec![
                Threshold::new(CRITICAL, Severity::Fault),
                Threshold::new(ERROR, Severity::Error),
                Threshold::new(WARNING, Severity::Default),
                Threshold::new(INFO, Severity::Info),
                Threshold::new(DEBUG, Severity::Debug),
            ],
        }
    }

    /// Builds a table from thresholds in any order.
    pub fn from_thresholds(
        thresholds: impl IntoIterator<Item = Threshold>,
    ) -> Result<Self, ThresholdError> {
        let mut thresholds: Vec<_> = thresholds.into_iter().collect();
        if thresholds.is_empty() {
            return Err(ThresholdError::Empty);
        }
        thresholds.sort_by(|a, b| b.level.cmp(&a.level));
        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0].level == pair[1].level) {
            return Err(ThresholdError::Duplicate(pair[0].level));
        }
        Ok(Self { thresholds })
    }

    pub fn level_for(&self, host_level: i32) -> Severity {
        self.thresholds
            .iter()
            .find(|threshold| host_level >= threshold.level)
            .map_or(Severity::Default, |threshold| threshold.severity)
    }

    /// The thresholds, highest minimum first.
    pub fn thresholds(&self) -> &[Threshold] {
        &self.thresholds
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}


// End of File

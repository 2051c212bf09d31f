// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{LevelAdapter, NOTSET, Threshold, ThresholdError, ThresholdTable};
use anyhow::{Context, Result, bail};
use log::LevelFilter;
use oslog::Dispatcher;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const SUBSYSTEM_VARIABLE: &str = "UNILOG_SUBSYSTEM";
pub const CATEGORY_VARIABLE: &str = "UNILOG_CATEGORY";
pub const LEVEL_VARIABLE: &str = "UNILOG_LEVEL";

/// Settings for [`init`](crate::init).  Every field is optional when deserializing; missing
/// fields take their [`Default`] values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records go to the default channel unless a subsystem is set.
    pub subsystem: Option<String>,
    /// Ignored without a subsystem.  Defaults to [`DEFAULT_CATEGORY`](crate::DEFAULT_CATEGORY).
    pub category: Option<String>,
    /// Maximum level let through by the [`log`] facade.  [`Info`](LevelFilter::Info) in debug
    /// builds and [`Warn`](LevelFilter::Warn) in release builds.
    pub level: LevelFilter,
    /// Passed to [`LevelAdapter::set_min_level`].
    pub min_host_level: i32,
    /// Replaces [`ThresholdTable::standard`] when set.
    pub thresholds: Option<Vec<Threshold>>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            subsystem: None,
            category: None,
            level: if cfg!(debug_assertions) {
                LevelFilter::Info
            } else {
                LevelFilter::Warn
            },
            min_host_level: NOTSET,
            thresholds: None,
        }
    }
}

impl LoggerConfig {
    /// The default configuration with the `UNILOG_*` environment variables applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env()
    }

    /// Overrides fields from `UNILOG_SUBSYSTEM`, `UNILOG_CATEGORY` and `UNILOG_LEVEL`.  Empty
    /// variables are treated as unset.
    ///
    /// ```sh
    /// $> UNILOG_SUBSYSTEM=com.example.app UNILOG_LEVEL=debug cargo run
    /// ```
    pub fn with_env(self) -> Result<Self> {
        self.apply_env(|name| std::env::var(name).ok())
    }

    fn apply_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        if let Some(subsystem) = var(SUBSYSTEM_VARIABLE) {
            self.subsystem = Some(subsystem);
        }
        if let Some(category) = var(CATEGORY_VARIABLE) {
            self.category = Some(category);
        }
        if let Some(level) = var(LEVEL_VARIABLE) {
            self.level = level
                .parse()
                .with_context(|| format!("{LEVEL_VARIABLE}={level:?} is not a log level"))?;
        }
        Ok(self)
    }

    pub fn threshold_table(&self) -> Result<ThresholdTable, ThresholdError> {
        match &self.thresholds {
            Some(thresholds) => ThresholdTable::from_thresholds(thresholds.iter().copied()),
            None => Ok(ThresholdTable::standard()),
        }
    }

    /// Builds an adapter over `dispatcher` with this configuration's route, thresholds and
    /// minimum host level.
    pub fn build(&self, dispatcher: Arc<Dispatcher>) -> Result<LevelAdapter> {
        let thresholds = self.threshold_table()?;
        let adapter = LevelAdapter::new(dispatcher);
        match (&self.subsystem, &self.category) {
            (Some(subsystem), category) => adapter
                .set_target(subsystem, category.as_deref())
                .with_context(|| format!("cannot log to subsystem {subsystem:?}"))?,
            (None, Some(category)) => {
                bail!("log category {category:?} was configured without a subsystem")
            }
            (None, None) => {}
        }
        adapter.set_thresholds(thresholds);
        adapter.set_min_level(self.min_host_level);
        Ok(adapter)
    }
}


// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{LevelAdapter, host_level};
use anyhow::Result;
use log::{LevelFilter, Log, Metadata, Record};
use std::{
    io::{self, Write},
    sync::Arc,
};

// Crates whose records would loop back into the bridge itself.
const OWN_TARGETS: [&str; 3] = ["unilog_capability", "unilog_oslog", "unilog_logging"];

fn is_own_target(target: &str) -> bool {
    OWN_TARGETS.iter().any(|own| {
        target
            .strip_prefix(own)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    })
}

/// A [`log`] backend that hands every accepted record to a [`LevelAdapter`].
pub struct OsLogger {
    adapter: Arc<LevelAdapter>,
}

impl OsLogger {
    pub fn new(adapter: Arc<LevelAdapter>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &Arc<LevelAdapter> {
        &self.adapter
    }

    /// Installs this logger as the process-wide [`log`] backend.  Fails if a logger is already
    /// installed.
    pub fn install(self, max_level: LevelFilter) -> Result<()> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for OsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        !is_own_target(metadata.target()) && self.adapter.accepts(host_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        if let Err(err) = self.adapter.emit(host_level(record.level()), &message) {
            // The log facade gives no way to return the error, and logging it would recurse.
            let _ = writeln!(io::stderr(), "unilog: failed to emit log record: {err}");
        }
    }

    fn flush(&self) {}
}


// End of File

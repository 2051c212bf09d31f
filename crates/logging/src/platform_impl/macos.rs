// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{LevelAdapter, LoggerConfig, OsLogger};
use anyhow::Result;
use std::sync::Arc;

pub(crate) fn init_with_config(config: &LoggerConfig) -> Result<Arc<LevelAdapter>> {
    let adapter = Arc::new(config.build(oslog::dispatcher()?)?);
    OsLogger::new(adapter.clone()).install(config.level)?;
    Ok(adapter)
}

// End of File

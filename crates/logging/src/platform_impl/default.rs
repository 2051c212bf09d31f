// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{LevelAdapter, LoggerConfig};
use anyhow::Result;
use std::sync::Arc;

pub(crate) fn init_with_config(_config: &LoggerConfig) -> Result<Arc<LevelAdapter>> {
    Err(oslog::Error::UnsupportedPlatform.into())
}


// End of File

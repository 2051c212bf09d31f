// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{LevelAdapter, LoggerConfig};
use anyhow::Result;
use std::sync::Arc;

/// Installs an [`OsLogger`](crate::OsLogger) built from `config` as the process-wide [`log`]
/// backend, with the facade's maximum level set to `config.level`.  Returns the adapter so the
/// route can be changed later.
///
/// Fails if the unified logging system is unavailable, if `config` names an invalid target or
/// threshold table, or if another logger has already been installed.  Only the first successful
/// call has any effect.
pub fn init(config: &LoggerConfig) -> Result<Arc<LevelAdapter>> {
    crate::platform_impl::init_with_config(config)
}

// End of File

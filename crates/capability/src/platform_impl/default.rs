// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Present merely so the gate compiles on platforms without a unified logging system.

use crate::OsVersion;

pub(crate) fn os_version() -> Option<OsVersion> {
    None
}

// End of File

// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::OsVersion;
use objc2_foundation::NSProcessInfo;

/// Queries the running OS release through `NSProcessInfo`, which (unlike the Darwin kernel
/// release) reports the marketing version the logging system was introduced under.
pub(crate) fn os_version() -> Option<OsVersion> {
    let process_info = NSProcessInfo::processInfo();
    let version = process_info.operatingSystemVersion();
    Some(OsVersion::new(
        u32::try_from(version.majorVersion).ok()?,
        u32::try_from(version.minorVersion).ok()?,
        u32::try_from(version.patchVersion).ok()?,
    ))
}

// End of File

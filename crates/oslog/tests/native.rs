// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Exercises the real unified logging system.  Delivery itself cannot be asserted from here (the
//! store is only queryable through the log tools), so these tests check that every entry point
//! accepts or rejects its input as documented.  View the output with, e.g.:
//!
//! ```sh
//! $> log stream --predicate 'subsystem == "ac.robinson.unilog"' --style compact --level debug
//! ```
#![cfg(target_os = "macos")]

use unilog_oslog::{CreationError, Error, Severity, TargetIdentity, args};

const LOG_SUBSYSTEM: &str = "ac.robinson.unilog";
const LOG_CATEGORY: &str = "category";

fn supported() -> bool {
    unilog_oslog::dispatcher().is_ok()
}

#[test]
fn test_create() {
    if !supported() {
        return;
    }
    let target = TargetIdentity::create(LOG_SUBSYSTEM, LOG_CATEGORY).unwrap();
    assert_eq!(
        target.to_string(),
        format!("<TargetIdentity ({LOG_SUBSYSTEM}:{LOG_CATEGORY})>")
    );

    assert_eq!(
        TargetIdentity::create("", LOG_CATEGORY),
        Err(Error::Creation(CreationError::EmptySubsystem))
    );
    assert_eq!(
        TargetIdentity::create(LOG_SUBSYSTEM, ""),
        Err(Error::Creation(CreationError::EmptyCategory))
    );
    assert!(TargetIdentity::create(&"p".repeat(250), LOG_CATEGORY).is_err());
    assert!(TargetIdentity::create(LOG_SUBSYSTEM, &"p".repeat(255)).is_err());
}

#[test]
fn test_write_every_severity() {
    if !supported() {
        return;
    }
    let custom = TargetIdentity::create(LOG_SUBSYSTEM, LOG_CATEGORY).unwrap();
    let targets = [
        TargetIdentity::default_channel(),
        TargetIdentity::disabled(),
        custom.into(),
    ];
    for target in &targets {
        for severity in Severity::ALL {
            unilog_oslog::write(
                target,
                severity,
                &args![target, "with type", format!("{:#x}", severity.code())],
            )
            .unwrap();
        }
    }
}

#[test]
fn test_disabled_is_never_enabled() {
    if !supported() {
        return;
    }
    for severity in Severity::ALL {
        assert!(!unilog_oslog::severity_enabled(&TargetIdentity::disabled(), severity).unwrap());
    }
}

#[test]
fn test_convenience_functions() {
    if !supported() {
        return;
    }
    let target = TargetIdentity::create(LOG_SUBSYSTEM, LOG_CATEGORY).unwrap();
    unilog_oslog::info(&target, &args!["info"]).unwrap();
    unilog_oslog::debug(&target, &args!["debug"]).unwrap();
    unilog_oslog::error(&target, &args!["error"]).unwrap();
    unilog_oslog::fault(&target, &args!["fault"]).unwrap();
    unilog_oslog::write_default(&args!["default with no type specified"]).unwrap();
    unilog_oslog::log(
        &args!["Shortcut log message", "combining types", -1.0, false, ?(0, 1, 2), "%{public}s"],
        None,
        None,
    )
    .unwrap();
    assert!(matches!(
        unilog_oslog::write_raw(&target, 0x12, &args!["invalid"]),
        Err(Error::InvalidArgument(_))
    ));
}

// End of File

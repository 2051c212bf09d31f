// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Drives the whole pipeline, from host level to backend write, against the recording backend.

use oslog::testing::{Call, RecordingBackend, Written};
use std::sync::Arc;
use unilog::{
    CreationError, Dispatcher, Error, Handle, LevelAdapter, LoggerConfig, OsLogger, Severity,
    TargetIdentity, args,
};

fn pipeline() -> (Arc<RecordingBackend>, Arc<Dispatcher>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let backend = Arc::new(RecordingBackend::new());
    let dispatcher = Arc::new(Dispatcher::new(backend.clone()));
    (backend, dispatcher)
}

#[test]
fn test_adapter_routes_host_records() {
    let (backend, dispatcher) = pipeline();
    let adapter = LevelAdapter::new(dispatcher);
    adapter
        .set_target("ac.robinson.pyoslog", Some("category"))
        .unwrap();
    adapter.emit(40, "boom").unwrap();

    let handle = adapter.target().handle();
    assert!(matches!(handle, Handle::Native(_)));
    assert_eq!(
        backend.last_write(),
        Some(Written {
            handle,
            severity: Severity::Error,
            message: "boom".into(),
        })
    );
}

#[test]
fn test_shared_targets() {
    assert!(Arc::ptr_eq(
        &TargetIdentity::default_channel(),
        &TargetIdentity::default_channel()
    ));
    assert!(Arc::ptr_eq(
        &TargetIdentity::disabled(),
        &TargetIdentity::disabled()
    ));
    assert_eq!(
        TargetIdentity::default_channel().to_string(),
        "<TargetIdentity (OS_LOG_DEFAULT)>"
    );
    assert_eq!(
        TargetIdentity::disabled().to_string(),
        "<TargetIdentity (OS_LOG_DISABLED)>"
    );
}

#[test]
fn test_create_validation() {
    let (backend, dispatcher) = pipeline();
    assert_eq!(
        dispatcher.create_target("", "cat"),
        Err(Error::Creation(CreationError::EmptySubsystem))
    );
    assert_eq!(
        dispatcher.create_target("a.b.c", ""),
        Err(Error::Creation(CreationError::EmptyCategory))
    );
    assert!(matches!(
        dispatcher.create_target(&"p".repeat(250), "cat"),
        Err(Error::Creation(CreationError::SubsystemTooLong { .. }))
    ));
    assert_eq!(backend.created_channels(), 0);

    let target = dispatcher.create_target("a.b.c", "cat").unwrap();
    assert_eq!(target.to_string(), "<TargetIdentity (a.b.c:cat)>");
    assert_eq!(backend.created_channels(), 1);
}

#[test]
fn test_disabled_target_is_silent() {
    let (backend, dispatcher) = pipeline();
    let disabled = TargetIdentity::disabled();
    for severity in Severity::ALL {
        assert!(!dispatcher.severity_enabled(&disabled, severity));
        dispatcher.write(&disabled, severity, &args!["gone"]).unwrap();
    }
    assert_eq!(backend.enabled_queries(), 0);
    assert!(backend.calls().is_empty());
}

#[test]
fn test_composed_message() {
    let (backend, dispatcher) = pipeline();
    let map = std::collections::BTreeMap::from([("k", "v")]);
    dispatcher
        .write_default(&args!["a", 1, true, ?vec![1, 2], ?map])
        .unwrap();
    assert_eq!(
        backend.last_write().unwrap().message,
        r#"a 1 true [1, 2] {"k": "v"}"#
    );
}

#[test]
fn test_configured_logger() {
    let (backend, dispatcher) = pipeline();
    let config: LoggerConfig = serde_json::from_str(
        r#"{"subsystem": "ac.robinson.unilog", "category": "network", "min_host_level": 30}"#,
    )
    .unwrap();
    let adapter = Arc::new(config.build(dispatcher).unwrap());
    let logger = OsLogger::new(adapter.clone());

    use log::Log;
    for (level, message) in [
        (log::Level::Info, "handshake"),
        (log::Level::Warn, "retrying"),
        (log::Level::Error, "gave up"),
    ] {
        logger.log(
            &log::Record::builder()
                .level(level)
                .target("my_app::network")
                .args(format_args!("{message}"))
                .build(),
        );
    }

    let writes = backend.writes();
    assert_eq!(writes.len(), 2);
    assert!(writes.iter().all(|w| w.handle == adapter.target().handle()));
    assert_eq!(
        writes
            .iter()
            .map(|w| (w.severity, w.message.as_str()))
            .collect::<Vec<_>>(),
        vec![(Severity::Default, "retrying"), (Severity::Error, "gave up")]
    );
    assert!(matches!(
        backend.calls().first(),
        Some(Call::CreateChannel { subsystem, category, .. })
            if subsystem == "ac.robinson.unilog" && category == "network"
    ));
}

// End of File

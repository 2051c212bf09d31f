// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{Backend, Error, Result, Severity, TargetIdentity, compose, target};
use std::{ffi::CString, fmt, sync::Arc};

/// Composes messages and routes them to a [`Backend`].
///
/// A dispatcher owns nothing across calls besides its backend: each call borrows a target and a
/// severity, so a single dispatcher can be shared by any number of threads.  On macOS the
/// process-wide dispatcher over the native backend is reachable through
/// [`dispatcher()`](crate::dispatcher) and the free functions of this crate.
pub struct Dispatcher {
    backend: Arc<dyn Backend>,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Creates a custom target, allocating exactly one new channel from the backend.  Names are
    /// validated before the backend is called.
    pub fn create_target(&self, subsystem: &str, category: &str) -> Result<TargetIdentity> {
        let (c_subsystem, c_category) = target::validate(subsystem, category)?;
        let handle = self.backend.create_channel(&c_subsystem, &c_category)?;
        log::debug!("created log target {subsystem}:{category}");
        Ok(TargetIdentity::custom(
            handle,
            subsystem.to_owned(),
            category.to_owned(),
        ))
    }

    /// Asks the backend whether `severity` is currently stored for `target`.  The disabled target
    /// answers `false` without a backend round trip.
    pub fn severity_enabled(&self, target: &TargetIdentity, severity: Severity) -> bool {
        if target.is_disabled() {
            return false;
        }
        self.backend.severity_enabled(target.handle(), severity)
    }

    pub fn info_enabled(&self, target: &TargetIdentity) -> bool {
        self.severity_enabled(target, Severity::Info)
    }

    pub fn debug_enabled(&self, target: &TargetIdentity) -> bool {
        self.severity_enabled(target, Severity::Debug)
    }

    /// Composes `args` (see [`compose`]) and writes the result to `target` at `severity`.
    pub fn write(
        &self,
        target: &TargetIdentity,
        severity: Severity,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        self.write_message(target, severity, &compose(args))
    }

    /// Writes an already composed message.  Writes to the disabled target, or at a severity the
    /// backend reports disabled, return `Ok(())` without reaching the backend's write.
    pub fn write_message(
        &self,
        target: &TargetIdentity,
        severity: Severity,
        message: &str,
    ) -> Result<()> {
        if target.is_disabled() {
            return Ok(());
        }
        let message = CString::new(message).map_err(|err| {
            Error::InvalidArgument(format!(
                "message contains a NUL byte at offset {}",
                err.nul_position()
            ))
        })?;
        if !self.backend.severity_enabled(target.handle(), severity) {
            return Ok(());
        }
        self.backend.write(target.handle(), severity, &message)
    }

    /// Writes with a raw numeric severity code.  Codes outside [`Severity`] are rejected.
    pub fn write_raw(
        &self,
        target: &TargetIdentity,
        code: i64,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        self.write(target, Severity::from_code(code)?, args)
    }

    /// Writes to the default channel at [`Severity::Default`].
    pub fn write_default(&self, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(&TargetIdentity::default_channel(), Severity::Default, args)
    }

    pub fn info(&self, target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(target, Severity::Info, args)
    }

    pub fn debug(&self, target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(target, Severity::Debug, args)
    }

    pub fn error(&self, target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(target, Severity::Error, args)
    }

    pub fn fault(&self, target: &TargetIdentity, args: &[&dyn fmt::Display]) -> Result<()> {
        self.write(target, Severity::Fault, args)
    }

    /// Convenience form of [`write`](Self::write): an omitted `target` means the default channel
    /// and an omitted `severity` means [`Severity::Default`].
    pub fn log(
        &self,
        args: &[&dyn fmt::Display],
        target: Option<&TargetIdentity>,
        severity: Option<Severity>,
    ) -> Result<()> {
        let severity = severity.unwrap_or_default();
        match target {
            Some(target) => self.write(target, severity, args),
            None => self.write(&TargetIdentity::default_channel(), severity, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CreationError, Handle, args,
        testing::{Call, RecordingBackend, Written},
    };

    fn dispatcher() -> (Arc<RecordingBackend>, Dispatcher) {
        let _ = env_logger::builder().is_test(true).try_init();
        let backend = Arc::new(RecordingBackend::new());
        let dispatcher = Dispatcher::new(backend.clone());
        (backend, dispatcher)
    }

    #[test]
    fn test_create_target() {
        let (backend, dispatcher) = dispatcher();
        let target = dispatcher.create_target("a.b.c", "cat").unwrap();
        assert_eq!(target.to_string(), "<TargetIdentity (a.b.c:cat)>");
        assert_eq!(target.subsystem(), Some("a.b.c"));
        assert_eq!(target.category(), Some("cat"));
        assert!(matches!(target.handle(), Handle::Native(_)));
        assert_eq!(backend.created_channels(), 1);
    }

    #[test]
    fn test_create_target_never_reuses_handles() {
        let (backend, dispatcher) = dispatcher();
        let first = dispatcher.create_target("a.b.c", "cat").unwrap();
        let second = dispatcher.create_target("a.b.c", "cat").unwrap();
        assert_eq!(first.label(), second.label());
        assert_ne!(first.handle(), second.handle());
        assert_ne!(first, second);
        assert_eq!(backend.created_channels(), 2);
    }

    #[test]
    fn test_create_target_rejects_invalid_names_without_allocating() {
        let (backend, dispatcher) = dispatcher();
        for (subsystem, category) in [
            ("", "cat"),
            ("a.b.c", ""),
            ("", ""),
            (&*"p".repeat(250), "cat"),
            ("a.b.c", &*"p".repeat(255)),
        ] {
            assert!(
                matches!(
                    dispatcher.create_target(subsystem, category),
                    Err(Error::Creation(_))
                ),
                "({subsystem:?}, {category:?}) should be rejected"
            );
        }
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_create_target_surfaces_backend_refusal() {
        let (backend, dispatcher) = dispatcher();
        backend.refuse_creation(true);
        assert_eq!(
            dispatcher.create_target("a.b.c", "cat"),
            Err(Error::Creation(CreationError::Refused))
        );
    }

    #[test]
    fn test_disabled_target_never_queries_backend() {
        let (backend, dispatcher) = dispatcher();
        let disabled = TargetIdentity::disabled();
        for severity in Severity::ALL {
            assert!(!dispatcher.severity_enabled(&disabled, severity));
        }
        assert!(!dispatcher.info_enabled(&disabled));
        assert!(!dispatcher.debug_enabled(&disabled));
        assert_eq!(backend.enabled_queries(), 0);
    }

    #[test]
    fn test_severity_enabled_delegates() {
        let (backend, dispatcher) = dispatcher();
        let default_channel = TargetIdentity::default_channel();
        backend.disable_severity(Severity::Debug);
        assert!(dispatcher.info_enabled(&default_channel));
        assert!(!dispatcher.debug_enabled(&default_channel));
        assert_eq!(
            backend.calls(),
            vec![
                Call::SeverityEnabled {
                    handle: Handle::Default,
                    severity: Severity::Info
                },
                Call::SeverityEnabled {
                    handle: Handle::Default,
                    severity: Severity::Debug
                },
            ]
        );
    }

    #[test]
    fn test_write_composes_message() {
        let (backend, dispatcher) = dispatcher();
        let target = dispatcher.create_target("a.b.c", "cat").unwrap();
        let map = std::collections::BTreeMap::from([("k", "v")]);
        dispatcher
            .write(&target, Severity::Error, &args!["a", 1, true, ?[1, 2], ?map])
            .unwrap();
        assert_eq!(
            backend.last_write(),
            Some(Written {
                handle: target.handle(),
                severity: Severity::Error,
                message: r#"a 1 true [1, 2] {"k": "v"}"#.into(),
            })
        );
    }

    #[test]
    fn test_write_to_disabled_target_is_dropped() {
        let (backend, dispatcher) = dispatcher();
        let disabled = TargetIdentity::disabled();
        for severity in Severity::ALL {
            dispatcher
                .write(&disabled, severity, &args!["never stored"])
                .unwrap();
        }
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_write_skips_disabled_severity() {
        let (backend, dispatcher) = dispatcher();
        backend.disable_severity(Severity::Debug);
        dispatcher
            .debug(&TargetIdentity::default_channel(), &args!["quiet"])
            .unwrap();
        assert!(backend.writes().is_empty());
        assert_eq!(backend.enabled_queries(), 1);
    }

    #[test]
    fn test_write_rejects_interior_nul() {
        let (backend, dispatcher) = dispatcher();
        let result = dispatcher.write_default(&args!["bad\0message"]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_write_surfaces_backend_errors() {
        let (backend, dispatcher) = dispatcher();
        backend.fail_writes(Some("store unavailable"));
        assert_eq!(
            dispatcher.write_default(&args!["lost"]),
            Err(Error::Backend("store unavailable".into()))
        );
        backend.fail_writes(None);
        assert_eq!(dispatcher.write_default(&args!["kept"]), Ok(()));
    }

    #[test]
    fn test_write_raw() {
        let (backend, dispatcher) = dispatcher();
        let default_channel = TargetIdentity::default_channel();
        dispatcher
            .write_raw(&default_channel, 0x11, &args!["raw"])
            .unwrap();
        assert_eq!(backend.last_write().unwrap().severity, Severity::Fault);

        for code in [-1, 0x12] {
            assert!(matches!(
                dispatcher.write_raw(&default_channel, code, &args!["raw"]),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(backend.writes().len(), 1);
    }

    #[test]
    fn test_convenience_severities() {
        let (backend, dispatcher) = dispatcher();
        let target = dispatcher.create_target("a.b.c", "cat").unwrap();
        dispatcher.info(&target, &args!["i"]).unwrap();
        dispatcher.debug(&target, &args!["d"]).unwrap();
        dispatcher.error(&target, &args!["e"]).unwrap();
        dispatcher.fault(&target, &args!["f"]).unwrap();
        let severities: Vec<_> = backend.writes().iter().map(|w| w.severity).collect();
        assert_eq!(
            severities,
            vec![
                Severity::Info,
                Severity::Debug,
                Severity::Error,
                Severity::Fault
            ]
        );
    }

    #[test]
    fn test_write_default() {
        let (backend, dispatcher) = dispatcher();
        dispatcher.write_default(&args!["hello", "world"]).unwrap();
        assert_eq!(
            backend.last_write(),
            Some(Written {
                handle: Handle::Default,
                severity: Severity::Default,
                message: "hello world".into(),
            })
        );
    }

    #[test]
    fn test_log_defaults() {
        let (backend, dispatcher) = dispatcher();
        let target = dispatcher.create_target("a.b.c", "cat").unwrap();

        dispatcher.log(&args!["plain"], None, None).unwrap();
        let written = backend.last_write().unwrap();
        assert_eq!(
            (written.handle, written.severity),
            (Handle::Default, Severity::Default)
        );

        dispatcher
            .log(&args!["targeted"], Some(&target), None)
            .unwrap();
        let written = backend.last_write().unwrap();
        assert_eq!(
            (written.handle, written.severity),
            (target.handle(), Severity::Default)
        );

        dispatcher
            .log(&args!["severe"], None, Some(Severity::Fault))
            .unwrap();
        let written = backend.last_write().unwrap();
        assert_eq!(
            (written.handle, written.severity),
            (Handle::Default, Severity::Fault)
        );
    }

    #[test]
    fn test_concurrent_writes_share_one_target() {
        let (backend, dispatcher) = dispatcher();
        let dispatcher = Arc::new(dispatcher);
        let target = Arc::new(dispatcher.create_target("a.b.c", "cat").unwrap());
        let threads: Vec<_> = (0..8)
            .map(|index| {
                let dispatcher = dispatcher.clone();
                let target = target.clone();
                std::thread::spawn(move || {
                    for count in 0..25 {
                        dispatcher
                            .info(&target, &args!["thread", index, "message", count])
                            .unwrap();
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }
        let writes = backend.writes();
        assert_eq!(writes.len(), 200);
        assert!(writes.iter().all(|w| w.handle == target.handle()));
    }
}

// End of File

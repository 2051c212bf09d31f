// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::ThresholdTable;
use oslog::{Dispatcher, Severity, TargetIdentity};
use parking_lot::RwLock;
use std::sync::{
    Arc,
    atomic::{AtomicI32, Ordering},
};

/// Category used by [`LevelAdapter::set_target`] when none is given.
pub const DEFAULT_CATEGORY: &str = "default";

/// Where records currently go.  Both halves are replaced as whole `Arc`s, so a clone taken under
/// the read lock is always fully formed.
#[derive(Clone)]
struct Route {
    target: Arc<TargetIdentity>,
    thresholds: Arc<ThresholdTable>,
}

/// Adapts a host framework's integer levels to [`Severity`] and forwards already formatted
/// records to a [`Dispatcher`].
///
/// All setters take `&self`: the adapter is shared between the framework's logger and whoever
/// configures it, and `emit` may run concurrently with reconfiguration (last write wins).
pub struct LevelAdapter {
    dispatcher: Arc<Dispatcher>,
    route: RwLock<Route>,
    min_level: AtomicI32,
}

impl LevelAdapter {
    /// Starts out on the default channel with [`ThresholdTable::standard`], accepting every level
    /// from [`NOTSET`](crate::NOTSET) up.
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            dispatcher,
            route: RwLock::new(Route {
                target: TargetIdentity::default_channel(),
                thresholds: Arc::new(ThresholdTable::standard()),
            }),
            min_level: AtomicI32::new(crate::NOTSET),
        }
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    pub fn target(&self) -> Arc<TargetIdentity> {
        self.route.read().target.clone()
    }

    pub fn thresholds(&self) -> Arc<ThresholdTable> {
        self.route.read().thresholds.clone()
    }

    /// Routes subsequent records to a new `(subsystem, category)` channel; `category` defaults to
    /// [`DEFAULT_CATEGORY`].  On failure the current target stays in place and the error is
    /// returned.
    pub fn set_target(&self, subsystem: &str, category: Option<&str>) -> oslog::Result<()> {
        let target = self
            .dispatcher
            .create_target(subsystem, category.unwrap_or(DEFAULT_CATEGORY))?;
        self.set_target_identity(Arc::new(target));
        Ok(())
    }

    pub fn set_target_identity(&self, target: Arc<TargetIdentity>) {
        self.route.write().target = target;
    }

    pub fn set_thresholds(&self, thresholds: ThresholdTable) {
        self.route.write().thresholds = Arc::new(thresholds);
    }

    /// Lowest host level the framework should hand to [`emit`](Self::emit).
    pub fn min_level(&self) -> i32 {
        self.min_level.load(Ordering::Relaxed)
    }

    pub fn set_min_level(&self, level: i32) {
        self.min_level.store(level, Ordering::Relaxed);
    }

    pub fn accepts(&self, host_level: i32) -> bool {
        host_level >= self.min_level()
    }

    /// The severity a record at `host_level` would be written with.  No side effects.
    pub fn level_for(&self, host_level: i32) -> Severity {
        self.route.read().thresholds.level_for(host_level)
    }

    /// Writes `message`, exactly as given, to the current target at the severity for
    /// `host_level`.
    pub fn emit(&self, host_level: i32, message: &str) -> oslog::Result<()> {
        let route = self.route.read().clone();
        let severity = route.thresholds.level_for(host_level);
        self.dispatcher
            .write_message(&route.target, severity, message)
    }
}


// End of File

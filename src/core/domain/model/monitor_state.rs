//! Mutable bookkeeping for the status monitor's cache.

use crate::core::domain::error::MonitorError;
use crate::core::domain::model::device_status::DeviceStatus;
use tokio::time::Instant;

/// Process-wide cache state, one instance per monitor.
///
/// Invariants:
/// - `last_good` is only replaced on a successful parse; a failed fetch
///   leaves it untouched.
/// - `have_good_status` latches true after the first successful fetch and
///   never reverts.
/// - `last_fetch_time` advances on every attempt, success or not; it alone
///   gates refetching.
#[derive(Debug, Clone, Default)]
pub struct MonitorState {
    /// The most recent successfully parsed status, if any.
    pub last_good: Option<DeviceStatus>,
    /// Whether any fetch has ever succeeded.
    pub have_good_status: bool,
    /// When the last successful fetch completed.
    pub last_good_fetch_time: Option<Instant>,
    /// When the last fetch attempt started, successful or not.
    pub last_fetch_time: Option<Instant>,
    /// The error from the last attempt, `None` if it succeeded.
    pub last_error: Option<MonitorError>,
}

impl MonitorState {
    /// Records a successful fetch, replacing the cached status.
    pub(crate) fn record_success(&mut self, status: DeviceStatus) {
        self.last_good = Some(status);
        self.have_good_status = true;
        self.last_good_fetch_time = Some(Instant::now());
        self.last_error = None;
    }

    /// Records a failed fetch, preserving the cached status.
    pub(crate) fn record_failure(&mut self, error: MonitorError) {
        self.last_error = Some(error);
    }
}

//! The status monitor: cached appliance status plus refresh timing.

use crate::core::domain::error::MonitorResult;
use crate::core::domain::model::device_status::DeviceStatus;
use crate::core::domain::model::monitor_state::MonitorState;
use crate::core::infrastructure::status_source::StatusSource;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Tuning knobs for the monitor and its TCP fetch.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Minimum interval between actual network fetches. Calls inside the
    /// window are served from cache.
    pub refresh_window: Duration,
    /// Upper bound on the TCP dial.
    pub dial_timeout: Duration,
    /// Read deadline after connect; its expiry is the protocol's
    /// end-of-message signal.
    pub read_timeout: Duration,
    /// Upper bound on accumulated payload bytes.
    pub max_payload: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            refresh_window: Duration::from_secs(10),
            dial_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(2),
            max_payload: 1024 * 1024,
        }
    }
}

/// Owns the cached appliance status and decides when to refetch.
///
/// The whole refresh-or-serve operation runs under one async mutex, so at
/// most one fetch is in flight per elapsed window regardless of caller
/// concurrency, and no caller can observe a half-written status.
pub struct StatusMonitor {
    source: Box<dyn StatusSource>,
    refresh_window: Duration,
    state: Mutex<MonitorState>,
}

impl StatusMonitor {
    pub fn new(source: Box<dyn StatusSource>, config: &MonitorConfig) -> Self {
        Self {
            source,
            refresh_window: config.refresh_window,
            state: Mutex::new(MonitorState::default()),
        }
    }

    /// Refresh-or-serve: returns the current appliance status.
    ///
    /// Inside the refresh window this repeats the previous attempt's
    /// outcome without any network I/O: the recorded error if it failed,
    /// the cached status if it succeeded. Outside the window it performs
    /// one fetch; a failed fetch is recorded and returned but never
    /// disturbs the cached status.
    pub async fn current(&self) -> MonitorResult<DeviceStatus> {
        let mut state = self.state.lock().await;

        if let Some(attempted) = state.last_fetch_time {
            if attempted.elapsed() < self.refresh_window {
                match (&state.last_error, &state.last_good) {
                    (Some(err), _) => return Err(err.clone()),
                    (None, Some(good)) => return Ok(good.clone()),
                    (None, None) => {}
                }
            }
        }

        state.last_fetch_time = Some(Instant::now());

        match self.source.fetch().await {
            Ok(status) => {
                debug!(serial = %status.serial, code = status.status, "appliance status refreshed");
                state.record_success(status.clone());
                Ok(status)
            }
            Err(err) => {
                warn!(error = %err, "appliance status fetch failed");
                state.record_failure(err.clone());
                Err(err)
            }
        }
    }

    /// Returns a copy of the monitor bookkeeping.
    pub async fn snapshot(&self) -> MonitorState {
        self.state.lock().await.clone()
    }
}

mod core;
mod serve;
#[cfg(test)]
mod tests;

pub use crate::core::domain::error::{MonitorError, MonitorResult, ValidationError};
pub use crate::core::domain::model::device_status::{DeviceStatus, SlotStatus};
pub use crate::core::domain::model::health::HealthVerdict;
pub use crate::core::domain::model::monitor_state::MonitorState;
pub use crate::core::domain::value_object::DEFAULT_STATUS_PORT;
pub use crate::core::infrastructure::monitor::{MonitorConfig, StatusMonitor};
pub use crate::serve::router;

use crate::core::domain::model::appliance_endpoint::ApplianceEndpoint;
use crate::core::domain::value_object::{ApplianceHost, AppliancePort};
use crate::core::infrastructure::status_source::TcpStatusSource;
use std::time::Duration;

/// Builder for a [`StatusMonitor`] watching one appliance.
///
/// # Examples
///
/// ```no_run
/// use nasmon::{MonitorResult, StatusMonitor};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> MonitorResult<()> {
///     let monitor = StatusMonitor::builder()
///         .host("nas.example.com")
///         .build()?;
///
///     let app = nasmon::router(Arc::new(monitor));
///     # drop(app);
///     Ok(())
/// }
/// ```
#[derive(Debug, Default)]
pub struct MonitorBuilder {
    host: Option<String>,
    port: Option<u16>,
    config: MonitorConfig,
}

impl MonitorBuilder {
    /// Sets the appliance hostname or address. Required.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the appliance status port. Defaults to 5000.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the minimum interval between network fetches.
    pub fn refresh_window(mut self, window: Duration) -> Self {
        self.config.refresh_window = window;
        self
    }

    /// Sets the TCP dial timeout.
    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.config.dial_timeout = timeout;
        self
    }

    /// Sets the read deadline used to detect end-of-message.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.config.read_timeout = timeout;
        self
    }

    /// Validates the configuration and builds the monitor.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::Validation` if the host is missing or
    /// malformed, or the port is invalid.
    pub fn build(self) -> MonitorResult<StatusMonitor> {
        let host = ApplianceHost::new(self.host.ok_or_else(|| ValidationError::Field {
            field: "host".to_string(),
            message: "Host is required".to_string(),
        })?)?;

        let port = match self.port {
            Some(port) => AppliancePort::new(port)?,
            None => AppliancePort::default(),
        };

        let endpoint = ApplianceEndpoint::new(host, port);
        let source = TcpStatusSource::new(endpoint, &self.config);
        Ok(StatusMonitor::new(Box::new(source), &self.config))
    }
}

impl StatusMonitor {
    /// Creates a new builder for monitor configuration.
    pub fn builder() -> MonitorBuilder {
        MonitorBuilder::default()
    }
}

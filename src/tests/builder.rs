use crate::{MonitorError, StatusMonitor};

#[tokio::test]
async fn test_builder_with_host_only_uses_defaults() {
    let monitor = StatusMonitor::builder().host("nas.lan").build();
    assert!(monitor.is_ok());
}

#[tokio::test]
async fn test_builder_requires_host() {
    let result = StatusMonitor::builder().build();
    assert!(matches!(result, Err(MonitorError::Validation { .. })));
}

#[tokio::test]
async fn test_builder_rejects_malformed_host() {
    let result = StatusMonitor::builder().host("nas..lan").build();
    assert!(matches!(result, Err(MonitorError::Validation { .. })));
}

#[tokio::test]
async fn test_builder_rejects_zero_port() {
    let result = StatusMonitor::builder().host("nas.lan").port(0).build();
    assert!(matches!(result, Err(MonitorError::Validation { .. })));
}

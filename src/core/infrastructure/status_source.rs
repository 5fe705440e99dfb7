//! Raw TCP access to the appliance status port.
//!
//! The appliance speaks an unsolicited plaintext protocol: on connect it
//! streams some non-XML framing bytes followed by one XML status document,
//! then goes silent without closing the connection. End-of-message is
//! therefore detected by read deadline, not by stream closure.

use crate::core::domain::error::{MonitorError, MonitorResult};
use crate::core::domain::model::appliance_endpoint::ApplianceEndpoint;
use crate::core::domain::model::device_status::DeviceStatus;
use crate::core::infrastructure::monitor::MonitorConfig;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout, timeout_at};
use tracing::debug;

const XML_MARKER: &[u8] = b"<?xml";
const INITIAL_CAPACITY: usize = 16 * 1024;

/// A source of appliance status snapshots, one fetch per call.
///
/// The monitor depends on this seam rather than on the TCP client directly,
/// so its refresh logic can be exercised against scripted sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Performs one complete fetch: dial, read, locate the XML payload,
    /// parse. Never retries.
    async fn fetch(&self) -> MonitorResult<DeviceStatus>;
}

/// Fetches status documents over the appliance's plaintext TCP port.
#[derive(Debug)]
pub struct TcpStatusSource {
    endpoint: ApplianceEndpoint,
    dial_timeout: Duration,
    read_timeout: Duration,
    max_payload: usize,
}

impl TcpStatusSource {
    pub fn new(endpoint: ApplianceEndpoint, config: &MonitorConfig) -> Self {
        Self {
            endpoint,
            dial_timeout: config.dial_timeout,
            read_timeout: config.read_timeout,
            max_payload: config.max_payload,
        }
    }

    /// Reads the status stream until the deadline elapses, EOF, or the
    /// payload cap is hit.
    ///
    /// A deadline expiry is the protocol's normal end-of-message signal and
    /// returns whatever bytes were accumulated.
    async fn read_payload(&self, stream: &mut TcpStream) -> MonitorResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(INITIAL_CAPACITY);
        let deadline = Instant::now() + self.read_timeout;

        loop {
            match timeout_at(deadline, stream.read_buf(&mut buf)).await {
                Err(_) => break,
                Ok(Ok(0)) => break,
                Ok(Ok(_)) => {
                    if buf.len() > self.max_payload {
                        return Err(MonitorError::Protocol(format!(
                            "status payload exceeds {} bytes",
                            self.max_payload
                        )));
                    }
                }
                Ok(Err(e)) => return Err(MonitorError::Read(e.to_string())),
            }
        }

        Ok(buf)
    }
}

#[async_trait]
impl StatusSource for TcpStatusSource {
    async fn fetch(&self) -> MonitorResult<DeviceStatus> {
        let authority = self.endpoint.authority();
        debug!(appliance = %authority, "fetching appliance status");

        let mut stream = timeout(self.dial_timeout, TcpStream::connect(&authority))
            .await
            .map_err(|_| MonitorError::Connection(format!("dial to {} timed out", authority)))?
            .map_err(|e| MonitorError::Connection(e.to_string()))?;

        let payload = self.read_payload(&mut stream).await?;
        parse_status_payload(&payload)
    }
}

/// Locates the XML document inside the raw stream bytes and parses it.
///
/// The appliance prefixes the document with framing bytes that must be
/// skipped; a streaming parser cannot be pointed at the raw stream directly.
pub(crate) fn parse_status_payload(payload: &[u8]) -> MonitorResult<DeviceStatus> {
    let offset = payload
        .windows(XML_MARKER.len())
        .position(|window| window == XML_MARKER)
        .ok_or_else(|| {
            MonitorError::Protocol("no XML payload found in status stream".to_string())
        })?;

    quick_xml::de::from_reader(&payload[offset..]).map_err(|e| MonitorError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::value_object::{ApplianceHost, AppliancePort};
    use crate::tests::fixtures::{FRAMING_GARBAGE, SAMPLE_DOCUMENT};
    use std::net::SocketAddr;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    fn source_for(addr: SocketAddr, read_timeout: Duration) -> TcpStatusSource {
        let endpoint = ApplianceEndpoint::new(
            ApplianceHost::new_unchecked("127.0.0.1".to_string()),
            AppliancePort::new(addr.port()).unwrap(),
        );
        let config = MonitorConfig {
            dial_timeout: Duration::from_secs(1),
            read_timeout,
            ..Default::default()
        };
        TcpStatusSource::new(endpoint, &config)
    }

    #[test]
    fn test_payload_with_framing_garbage_parses_identically() {
        let clean = parse_status_payload(SAMPLE_DOCUMENT.as_bytes()).unwrap();

        let mut framed = FRAMING_GARBAGE.to_vec();
        framed.extend_from_slice(SAMPLE_DOCUMENT.as_bytes());
        let skipped = parse_status_payload(&framed).unwrap();

        assert_eq!(clean, skipped);
    }

    #[test]
    fn test_payload_without_marker_is_protocol_error() {
        let result = parse_status_payload(b"ESATMUpdate framing only, no document");
        assert!(matches!(result, Err(MonitorError::Protocol(_))));
    }

    #[test]
    fn test_payload_with_broken_document_is_parse_error() {
        let result = parse_status_payload(b"junk<?xml version=\"1.0\"?><ESATMUpdate><mSerial>");
        assert!(matches!(result, Err(MonitorError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_from_closing_appliance() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            stream.write_all(FRAMING_GARBAGE).await.unwrap();
            stream.write_all(SAMPLE_DOCUMENT.as_bytes()).await.unwrap();
        });

        let source = source_for(addr, Duration::from_secs(1));
        let status = source.fetch().await.unwrap();
        assert_eq!(status.status, 32768);
        assert_eq!(status.slots.len(), 2);
    }

    #[tokio::test]
    async fn test_read_deadline_is_end_of_message_not_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Appliance behavior: send the document, then stay silent with the
        // connection open.
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            stream.write_all(SAMPLE_DOCUMENT.as_bytes()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(stream);
        });

        let source = source_for(addr, Duration::from_millis(250));
        let status = source.fetch().await.unwrap();
        assert_eq!(status.serial, "DRA153900300");
    }

    #[tokio::test]
    async fn test_unreachable_appliance_is_connection_error() {
        // Bind then drop to obtain a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = source_for(addr, Duration::from_millis(250));
        let result = source.fetch().await;
        assert!(matches!(result, Err(MonitorError::Connection(_))));
    }

    #[tokio::test]
    async fn test_oversized_payload_is_protocol_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            stream.write_all(&vec![b'x'; 4096]).await.unwrap();
        });

        let endpoint = ApplianceEndpoint::new(
            ApplianceHost::new_unchecked("127.0.0.1".to_string()),
            AppliancePort::new(addr.port()).unwrap(),
        );
        let config = MonitorConfig {
            read_timeout: Duration::from_millis(250),
            max_payload: 1024,
            ..Default::default()
        };
        let source = TcpStatusSource::new(endpoint, &config);

        let result = source.fetch().await;
        assert!(matches!(result, Err(MonitorError::Protocol(_))));
    }
}

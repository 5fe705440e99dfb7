use crate::core::domain::value_object::{ApplianceHost, AppliancePort};

/// The network location of the appliance's status port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceEndpoint {
    host: ApplianceHost,
    port: AppliancePort,
}

impl ApplianceEndpoint {
    pub fn new(host: ApplianceHost, port: AppliancePort) -> Self {
        Self { host, port }
    }

    pub fn host(&self) -> &ApplianceHost {
        &self.host
    }

    pub fn port(&self) -> AppliancePort {
        self.port
    }

    /// Renders the `host:port` authority string used to dial the appliance.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host.as_str(), self.port.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_joins_host_and_port() {
        let endpoint = ApplianceEndpoint::new(
            ApplianceHost::new_unchecked("nas.lan".to_string()),
            AppliancePort::default(),
        );
        assert_eq!(endpoint.authority(), "nas.lan:5000");
    }
}

mod appliance_host;
mod appliance_port;

pub use appliance_host::ApplianceHost;
pub use appliance_port::{AppliancePort, DEFAULT_STATUS_PORT};

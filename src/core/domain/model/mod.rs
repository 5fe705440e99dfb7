pub mod appliance_endpoint;
pub mod device_status;
pub mod health;
pub mod monitor_state;

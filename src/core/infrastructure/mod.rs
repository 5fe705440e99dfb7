pub mod monitor;
pub mod status_source;

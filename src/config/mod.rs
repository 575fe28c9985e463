pub mod aircraft;
pub mod config_errors;

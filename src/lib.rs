pub mod config;
pub mod constants;
pub mod mission;
pub mod models;
pub mod physics;
pub mod powertrain;
pub mod sizing;

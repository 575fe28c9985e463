pub mod atmosphere;
pub mod constraints;

pub mod aero;
pub mod dep;
pub mod profile;
pub mod requirements;
pub mod result;
pub mod segment;

/// Top-level mission and field-performance requirements. Fixed for the
/// whole sizing run; every iteration reads the same values.
#[derive(Debug, Clone)]
pub struct AircraftRequirements {
    pub payload_weight_lb: f64,
    pub design_range_nm: f64,
    pub cruise_speed_kts: f64,
    pub cruise_altitude_ft: f64,
    pub service_ceiling_ft: f64,
    pub stall_speed_kts: f64,
    pub balanced_field_length_ft: f64,
    pub landing_field_length_ft: f64,
    pub rate_of_climb_sea_level_fpm: f64,
    pub rate_of_climb_ceiling_fpm: f64,
}

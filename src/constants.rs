pub const G_0: f64 = 9.80665; // Standard gravity (m/s²)
pub const R_AIR: f64 = 287.05; // Specific gas constant of air (J/kg/K)
pub const T_SL: f64 = 288.15; // ISA sea-level temperature (K)
pub const P_SL: f64 = 101325.0; // ISA sea-level pressure (Pa)
pub const RHO_SL_SLUG: f64 = 0.002377; // Sea-level density (slug/ft³)

// Unit conversions
pub const KTS_TO_FPS: f64 = 1.688; // knots → ft/s
pub const FT_TO_M: f64 = 0.3048; // feet → meters
pub const NM_TO_FT: f64 = 6076.12; // nautical miles → feet
pub const NM_TO_M: f64 = 1852.0; // nautical miles → meters
pub const KG_TO_LB: f64 = 2.20462; // kilograms → pounds
pub const LB_TO_KG: f64 = 0.453592; // pounds → kilograms
pub const LBF_TO_N: f64 = 4.44822; // pound-force → newtons
pub const HP_TO_KW: f64 = 0.7457; // horsepower → kilowatts
pub const FPS_PER_HP: f64 = 550.0; // ft·lbf/s per horsepower
pub const KG_M3_TO_SLUG_FT3: f64 = 1.0 / 515.379; // kg/m³ → slug/ft³

// Fuel
pub const FUEL_LHV_J_KG: f64 = 43.0e6; // Jet fuel lower heating value (J/kg)
pub const FUEL_RESERVE_FACTOR: f64 = 1.06; // 6% reserve on mission fuel

// Sizing loop
pub const INITIAL_TOGW_GUESS_LB: f64 = 15000.0; // Seed for weight iteration (lb)

// Math
pub const PI: f64 = std::f64::consts::PI;

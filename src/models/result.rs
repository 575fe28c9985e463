use std::fmt;

use crate::models::segment::{MissionSegment, SegmentKind};
use crate::physics::constraints::PowerConstraint;

/// Which sizing rule set the battery mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BatteryConstraint {
    Energy,
    Power,
    None,
}

impl fmt::Display for BatteryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatteryConstraint::Energy => write!(f, "energy"),
            BatteryConstraint::Power => write!(f, "power"),
            BatteryConstraint::None => write!(f, "none"),
        }
    }
}

/// Battery sizing outcome with the C-rate diagnostics.
#[derive(Debug, Clone)]
pub struct BatterySolution {
    pub mass_lb: f64,
    pub capacity_kwh: f64,
    pub peak_power_kw: f64,
    pub peak_segment: Option<SegmentKind>,
    pub c_rate_per_hr: f64,
    pub c_rate_max_per_hr: f64,
    pub constraint: BatteryConstraint,
}

impl BatterySolution {
    /// The no-battery outcome: every figure zero, no governing rule.
    pub fn empty() -> Self {
        BatterySolution {
            mass_lb: 0.0,
            capacity_kwh: 0.0,
            peak_power_kw: 0.0,
            peak_segment: None,
            c_rate_per_hr: 0.0,
            c_rate_max_per_hr: 0.0,
            constraint: BatteryConstraint::None,
        }
    }
}

/// Operating-empty-weight buildup, lb.
#[derive(Debug, Clone)]
pub struct WeightBreakdown {
    pub wing_lb: f64,
    pub fuselage_lb: f64,
    pub empennage_lb: f64,
    pub landing_gear_lb: f64,
    pub propulsion_lb: f64,
    pub systems_lb: f64,
}

impl WeightBreakdown {
    pub fn total_lb(&self) -> f64 {
        self.wing_lb
            + self.fuselage_lb
            + self.empennage_lb
            + self.landing_gear_lb
            + self.propulsion_lb
            + self.systems_lb
    }
}

/// Converged (or last-iterate) sizing solution for one architecture.
#[derive(Debug, Clone)]
pub struct SizingResult {
    pub togw_lb: f64,
    pub oew_lb: f64,
    pub weights: WeightBreakdown,
    pub fuel_weight_lb: f64,
    pub battery_weight_lb: f64,
    pub payload_weight_lb: f64,
    pub fuel_fraction: f64,
    pub battery_fraction: f64,
    pub payload_fraction: f64,
    pub wing_area_ft2: f64,
    pub wing_loading_psf: f64,
    pub required_power_kw: f64,
    pub governing_power_constraint: PowerConstraint,
    pub battery: BatterySolution,
    pub pree: f64,
    pub mission_time_min: f64,
    /// Segments from the final mission pass, with their simulated
    /// time, fuel, and battery draw filled in.
    pub segments: Vec<MissionSegment>,
    pub iterations: usize,
    pub converged: bool,
}

use crate::constants::KG_TO_LB;
use crate::models::result::{BatteryConstraint, BatterySolution};
use crate::models::segment::MissionSegment;
use crate::powertrain::TechnologySpec;

/// Size the battery for the simulated mission: energy-limited mass from
/// the total draw grossed up by depth of discharge, power-limited mass
/// from the peak segment-average draw, and the larger one wins. An
/// aircraft with no battery technology gets the empty solution.
pub fn size_battery(
    mission: &[MissionSegment],
    total_battery_wh: f64,
    tech: &TechnologySpec,
) -> BatterySolution {
    if tech.battery_specific_energy_wh_kg <= 0.0 || tech.battery_dod <= 0.0 {
        return BatterySolution::empty();
    }

    let capacity_wh = total_battery_wh / tech.battery_dod;
    let capacity_kwh = capacity_wh / 1000.0;
    let mass_energy_kg = capacity_kwh / (tech.battery_specific_energy_wh_kg / 1000.0);

    // Peak segment-average draw sets the power requirement
    let mut peak_power_w = 0.0;
    let mut peak_segment = None;
    for segment in mission {
        if segment.duration_s > 0.0 {
            let segment_power_w = segment.battery_energy_wh / (segment.duration_s / 3600.0);
            if segment_power_w > peak_power_w {
                peak_power_w = segment_power_w;
                peak_segment = Some(segment.kind);
            }
        }
    }
    let peak_power_kw = peak_power_w / 1000.0;

    let mass_power_kg = if tech.battery_specific_power_kw_kg > 0.0 {
        peak_power_kw / tech.battery_specific_power_kw_kg
    } else {
        0.0
    };

    let mass_kg = mass_energy_kg.max(mass_power_kg);

    let c_rate_per_hr = if capacity_kwh > 0.0 {
        peak_power_kw / capacity_kwh
    } else {
        0.0
    };
    let c_rate_max_per_hr =
        tech.battery_specific_power_kw_kg / (tech.battery_specific_energy_wh_kg / 1000.0);

    let constraint = if mass_power_kg > mass_energy_kg {
        BatteryConstraint::Power
    } else {
        BatteryConstraint::Energy
    };

    BatterySolution {
        mass_lb: mass_kg * KG_TO_LB,
        capacity_kwh,
        peak_power_kw,
        peak_segment,
        c_rate_per_hr,
        c_rate_max_per_hr,
        constraint,
    }
}

mod segments;

use crate::models::aero::AerodynamicSpec;
use crate::models::dep::DepSystem;
use crate::models::profile::HybridizationProfile;
use crate::models::requirements::AircraftRequirements;
use crate::models::segment::{MissionSegment, SegmentKind};
use crate::powertrain::{Powertrain, TechnologySpec};

/// Borrowed view of everything the segment simulators need. Built once
/// per mission pass; the simulators never mutate the design.
pub struct SegmentContext<'a> {
    pub requirements: &'a AircraftRequirements,
    pub aero: &'a AerodynamicSpec,
    pub dep: &'a DepSystem,
    pub tech: &'a TechnologySpec,
    pub powertrain: &'a Powertrain,
}

/// Accumulated mission totals.
#[derive(Debug, Clone)]
pub struct MissionTotals {
    pub total_time_s: f64,
    pub total_fuel_lb: f64,
    pub total_battery_wh: f64,
}

/// Build the six-leg design mission. Takeoff clears the 35 ft obstacle,
/// descent and loiter run at the 450 ft pattern altitude.
pub fn build_mission(
    cruise_altitude_ft: f64,
    profile: &HybridizationProfile,
) -> Vec<MissionSegment> {
    SegmentKind::ORDER
        .iter()
        .map(|&kind| {
            let (start_ft, end_ft) = match kind {
                SegmentKind::Takeoff => (0.0, 35.0),
                SegmentKind::Climb => (35.0, cruise_altitude_ft),
                SegmentKind::Cruise => (cruise_altitude_ft, cruise_altitude_ft),
                SegmentKind::Descent => (cruise_altitude_ft, 450.0),
                SegmentKind::Loiter => (450.0, 450.0),
                SegmentKind::Landing => (450.0, 0.0),
            };
            MissionSegment::new(
                kind,
                start_ft,
                end_ft,
                profile.hybridization_for(kind),
                profile.blown_lift_for(kind),
            )
        })
        .collect()
}

/// Walk the mission once, writing simulated time, fuel, and battery
/// draw back into each segment. Weight carried into a leg reflects the
/// fuel burned by the legs before it.
pub fn simulate_mission(
    mission: &mut [MissionSegment],
    togw_lb: f64,
    s_wing_ft2: f64,
    ctx: &SegmentContext,
) -> MissionTotals {
    let mut w_current_lb = togw_lb;
    let mut totals = MissionTotals {
        total_time_s: 0.0,
        total_fuel_lb: 0.0,
        total_battery_wh: 0.0,
    };

    for segment in mission.iter_mut() {
        let perf = match segment.kind {
            SegmentKind::Takeoff => segments::takeoff(segment, w_current_lb, s_wing_ft2, ctx),
            SegmentKind::Climb => segments::climb(segment, w_current_lb, s_wing_ft2, ctx),
            SegmentKind::Cruise => segments::cruise(segment, w_current_lb, s_wing_ft2, ctx),
            SegmentKind::Descent => segments::descent(segment, w_current_lb, s_wing_ft2, ctx),
            SegmentKind::Loiter => segments::loiter(segment, w_current_lb, s_wing_ft2, ctx),
            SegmentKind::Landing => segments::landing(segment, w_current_lb, s_wing_ft2, ctx),
        };

        w_current_lb -= perf.fuel_lb;

        segment.duration_s = perf.time_s;
        segment.fuel_burned_lb = perf.fuel_lb;
        segment.battery_energy_wh = perf.battery_wh;
        segment.distance_nm = perf.distance_nm;

        totals.total_time_s += perf.time_s;
        totals.total_fuel_lb += perf.fuel_lb;
        totals.total_battery_wh += perf.battery_wh;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::segment::SegmentKind;
    use crate::powertrain::{Conventional, FullyElectric, Powertrain};
    use approx::assert_relative_eq;

    fn tech() -> TechnologySpec {
        TechnologySpec {
            gt_specific_power_kw_kg: 3.0,
            gt_efficiency: 0.30,
            gt_bsfc_kg_kwh: 0.30,
            em_specific_power_kw_kg: 5.0,
            em_efficiency: 0.95,
            gen_specific_power_kw_kg: 4.0,
            gen_efficiency: 0.93,
            battery_specific_energy_wh_kg: 300.0,
            battery_specific_power_kw_kg: 1.5,
            battery_soc_margin: 0.2,
            battery_dod: 0.8,
            prop_efficiency: 0.85,
        }
    }

    fn requirements() -> AircraftRequirements {
        AircraftRequirements {
            payload_weight_lb: 1200.0,
            design_range_nm: 200.0,
            cruise_speed_kts: 150.0,
            cruise_altitude_ft: 8000.0,
            service_ceiling_ft: 12000.0,
            stall_speed_kts: 70.0,
            balanced_field_length_ft: 1500.0,
            landing_field_length_ft: 2000.0,
            rate_of_climb_sea_level_fpm: 1200.0,
            rate_of_climb_ceiling_fpm: 100.0,
        }
    }

    #[test]
    fn mission_legs_chain_by_altitude() {
        let profile = HybridizationProfile::default_for(0.3);
        let mission = build_mission(8000.0, &profile);

        assert_eq!(mission.len(), SegmentKind::COUNT);
        for pair in mission.windows(2) {
            assert_eq!(pair[0].end_altitude_ft, pair[1].start_altitude_ft);
        }
        assert_eq!(mission[0].start_altitude_ft, 0.0);
        assert_eq!(mission[5].end_altitude_ft, 0.0);
    }

    #[test]
    fn profile_lands_on_the_right_legs() {
        let profile = HybridizationProfile::default_for(0.4);
        let mission = build_mission(8000.0, &profile);

        for segment in &mission {
            let (expect_hp, expect_blown) = match segment.kind {
                SegmentKind::Takeoff | SegmentKind::Climb | SegmentKind::Landing => (0.4, true),
                _ => (0.0, false),
            };
            assert_eq!(segment.hybridization, expect_hp);
            assert_eq!(segment.blown_lift_active, expect_blown);
        }
    }

    #[test]
    fn totals_match_segment_sums() {
        let requirements = requirements();
        let aero = AerodynamicSpec::new(10.0, 0.8, 0.025, 1.8, 2.1, 2.2);
        let dep = DepSystem::disabled();
        let tech = tech();
        let mut powertrain = Powertrain::Conventional(Conventional::new(tech.clone()));
        powertrain.size_components(500.0, 0.0);

        let ctx = SegmentContext {
            requirements: &requirements,
            aero: &aero,
            dep: &dep,
            tech: &tech,
            powertrain: &powertrain,
        };

        let mut mission = build_mission(8000.0, &HybridizationProfile::new());
        let totals = simulate_mission(&mut mission, 6000.0, 200.0, &ctx);

        let time_sum: f64 = mission.iter().map(|s| s.duration_s).sum();
        let fuel_sum: f64 = mission.iter().map(|s| s.fuel_burned_lb).sum();
        assert_relative_eq!(totals.total_time_s, time_sum, epsilon = 1e-9);
        assert_relative_eq!(totals.total_fuel_lb, fuel_sum, epsilon = 1e-9);

        assert!(mission.iter().all(|s| s.duration_s > 0.0));
        assert!(totals.total_fuel_lb > 0.0);
        assert_eq!(totals.total_battery_wh, 0.0);
        assert_eq!(mission[SegmentKind::Cruise.index()].distance_nm, 200.0);
    }

    #[test]
    fn electric_mission_burns_no_fuel() {
        let requirements = requirements();
        let aero = AerodynamicSpec::new(10.0, 0.8, 0.025, 1.8, 2.1, 2.2);
        let dep = DepSystem::disabled();
        let tech = tech();
        let mut powertrain = Powertrain::FullyElectric(FullyElectric::new(tech.clone()));
        powertrain.size_components(500.0, 0.0);

        let ctx = SegmentContext {
            requirements: &requirements,
            aero: &aero,
            dep: &dep,
            tech: &tech,
            powertrain: &powertrain,
        };

        let mut mission = build_mission(8000.0, &HybridizationProfile::new());
        let totals = simulate_mission(&mut mission, 6000.0, 200.0, &ctx);

        assert_eq!(totals.total_fuel_lb, 0.0);
        assert!(totals.total_battery_wh > 0.0);
        // No fuel burn: every leg sees the same weight
        assert!(mission.iter().all(|s| s.fuel_burned_lb == 0.0));
    }
}

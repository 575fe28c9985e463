use approx::assert_relative_eq;

use hesize::config::aircraft::AircraftConfig;
use hesize::models::result::{BatteryConstraint, SizingResult};
use hesize::models::segment::SegmentKind;
use hesize::physics::constraints::PowerConstraint;
use hesize::sizing::sizing_errors::SizingErrors;
use hesize::sizing::HybridAircraft;

fn reference_config() -> AircraftConfig {
    let path = format!("{}/config.json", env!("CARGO_MANIFEST_DIR"));
    AircraftConfig::from_file(&path).unwrap()
}

fn sized(config: &AircraftConfig, architecture: &str, hp_design: f64) -> SizingResult {
    let mut aircraft = HybridAircraft::new("eSTOL-19", config);
    aircraft.set_powertrain(architecture, hp_design, None).unwrap();
    aircraft
        .size_aircraft(
            config.weight_iteration.max_iterations,
            config.weight_iteration.tolerance,
            None,
        )
        .unwrap()
}

#[test]
fn conventional_design_closes_on_the_reference_mission() {
    let config = reference_config();
    let result = sized(&config, "conventional", 0.0);

    assert!(result.converged);
    assert_eq!(result.iterations, 6);
    assert_relative_eq!(result.togw_lb, 15496.9, epsilon = 1.0);
    assert_relative_eq!(result.oew_lb, 9308.7, epsilon = 1.0);
    assert_relative_eq!(result.fuel_weight_lb, 912.7, epsilon = 0.5);
    assert_relative_eq!(result.battery_weight_lb, 475.6, epsilon = 0.5);
    assert_relative_eq!(result.wing_area_ft2, 518.8, epsilon = 0.5);
    assert_relative_eq!(result.required_power_kw, 945.0, epsilon = 0.5);
    assert_relative_eq!(result.pree, 1973.4, epsilon = 0.5);
    assert_relative_eq!(result.mission_time_min, 150.6, epsilon = 0.1);

    // Weight closure: TOGW is exactly the sum of its parts
    let total = result.oew_lb
        + result.payload_weight_lb
        + result.fuel_weight_lb
        + result.battery_weight_lb;
    assert_relative_eq!(result.togw_lb, total, epsilon = 1e-9);

    assert_relative_eq!(result.payload_fraction, 0.3097, epsilon = 1e-3);
    assert_relative_eq!(
        result.payload_fraction,
        result.payload_weight_lb / result.togw_lb,
        epsilon = 1e-12
    );

    assert_eq!(result.segments.len(), SegmentKind::COUNT);
    let cruise = &result.segments[SegmentKind::Cruise.index()];
    assert_eq!(cruise.distance_nm, config.mission_requirements.design_range_nm);
}

#[test]
fn blown_wing_sets_the_stall_limited_wing_loading() {
    let config = reference_config();
    let mut aircraft = HybridAircraft::new("eSTOL-19", &config);
    aircraft.set_powertrain("conventional", 0.0, None).unwrap();

    let constraint = aircraft.constraint_analysis(15000.0);
    // Augmentation 1 + (1.8 - 1) * 0.65 = 1.52 on every CLmax
    assert_relative_eq!(constraint.ws_stall_psf, 29.60, epsilon = 0.01);
    assert!(constraint.ws_stall_psf < constraint.ws_landing_psf);
    assert_eq!(constraint.ws_design_psf, constraint.ws_stall_psf);
    assert_eq!(constraint.governing, PowerConstraint::Cruise);
}

#[test]
fn conventional_without_dep_carries_no_battery() {
    let mut config = reference_config();
    config.mission_requirements.payload_weight_lb = 1200.0;
    config.mission_requirements.design_range_nm = 200.0;
    config.mission_requirements.cruise_speed_kts = 150.0;
    config.mission_requirements.cruise_altitude_ft = 8000.0;
    config.mission_requirements.service_ceiling_ft = 12000.0;
    config.performance_requirements.stall_speed_requirement_kts = 70.0;
    config.performance_requirements.landing_field_length_ft = 2000.0;
    config.performance_requirements.rate_of_climb_sea_level_fpm = 1200.0;
    config.aerodynamics.zero_lift_drag_coefficient = 0.025;
    config.aerodynamics.cl_max_clean = 1.8;
    config.aerodynamics.cl_max_takeoff = 2.1;
    config.aerodynamics.cl_max_landing = 2.2;
    config.dep_system = None;

    let result = sized(&config, "conventional", 0.0);

    assert!(result.converged);
    assert_relative_eq!(result.togw_lb, 6054.5, epsilon = 1.0);
    // No blowers, no boost: the battery never appears
    assert_eq!(result.battery_weight_lb, 0.0);
    assert_eq!(result.battery_fraction, 0.0);
    assert_eq!(result.battery.capacity_kwh, 0.0);
    assert!(result.battery.peak_segment.is_none());
    // Without blown lift the field requirement takes over from cruise
    assert_eq!(result.governing_power_constraint, PowerConstraint::Takeoff);
}

#[test]
fn electric_variant_burns_no_fuel_on_a_short_mission() {
    let mut config = reference_config();
    // 250 nm does not close on 300 Wh/kg cells; a short hop does
    config.mission_requirements.design_range_nm = 60.0;
    config.mission_requirements.payload_weight_lb = 1500.0;

    let result = sized(&config, "electric", 0.0);

    assert!(result.converged);
    assert_relative_eq!(result.togw_lb, 20520.0, epsilon = 2.0);
    assert_eq!(result.fuel_weight_lb, 0.0);
    assert_eq!(result.fuel_fraction, 0.0);
    assert!(result.battery_weight_lb > 0.0);
    assert_eq!(result.battery.constraint, BatteryConstraint::Energy);
    assert_relative_eq!(result.pree, 706.5, epsilon = 0.5);
    assert!(result.segments.iter().all(|s| s.fuel_burned_lb == 0.0));
}

#[test]
fn electric_variant_fails_softly_on_the_design_range() {
    let config = reference_config();
    let result = sized(&config, "electric", 0.0);

    // The loop runs out of iterations instead of erroring
    assert!(!result.converged);
    assert_eq!(result.iterations, config.weight_iteration.max_iterations);
    assert_eq!(result.fuel_weight_lb, 0.0);
    assert!(result.togw_lb > 100_000.0);
}

#[test]
fn battery_grows_with_design_hybridization() {
    let config = reference_config();
    let base = sized(&config, "parallel", 0.0);
    let mid = sized(&config, "parallel", 0.3);
    let high = sized(&config, "parallel", 0.6);

    assert!(base.battery_weight_lb < mid.battery_weight_lb);
    assert!(mid.battery_weight_lb < high.battery_weight_lb);
    assert!(base.togw_lb < mid.togw_lb);
    assert!(mid.togw_lb < high.togw_lb);

    assert_relative_eq!(mid.togw_lb, 16074.4, epsilon = 1.0);
    assert_relative_eq!(mid.battery_weight_lb, 857.7, epsilon = 0.5);
    assert_relative_eq!(high.battery_weight_lb, 1270.0, epsilon = 1.0);
}

#[test]
fn serial_hybrid_battery_is_power_limited() {
    let config = reference_config();
    let result = sized(&config, "serial", 0.2);

    assert!(result.converged);
    assert_relative_eq!(result.togw_lb, 26248.8, epsilon = 2.0);
    assert_eq!(result.battery.constraint, BatteryConstraint::Power);
    assert_eq!(result.battery.peak_segment, Some(SegmentKind::Takeoff));
    // The takeoff burst runs well past the cell's continuous C-rate
    assert!(result.battery.c_rate_per_hr > result.battery.c_rate_max_per_hr);
}

#[test]
fn multi_engine_totals_match_the_parallel_split() {
    let config = reference_config();
    let parallel = sized(&config, "parallel", 0.3);
    let multi = sized(&config, "multi_engine", 0.3);

    assert_relative_eq!(multi.togw_lb, parallel.togw_lb, epsilon = 1e-6);
    assert_relative_eq!(multi.fuel_weight_lb, parallel.fuel_weight_lb, epsilon = 1e-6);
    assert_relative_eq!(multi.battery_weight_lb, parallel.battery_weight_lb, epsilon = 1e-6);
    assert_eq!(multi.iterations, parallel.iterations);
}

#[test]
fn highlift_draw_is_counted_exactly_once() {
    let config = reference_config();
    let result = sized(&config, "dual_motor_dep", 0.3);

    assert!(result.converged);
    assert_relative_eq!(result.togw_lb, 17562.9, epsilon = 2.0);

    // Legs with no boost and folded blowers draw nothing
    for kind in [SegmentKind::Cruise, SegmentKind::Descent, SegmentKind::Loiter] {
        assert_eq!(result.segments[kind.index()].battery_energy_wh, 0.0);
    }

    // Takeoff draw is the cruise-motor boost plus one 126 kW blower
    // bank; double counting would add another 126 kW here
    let takeoff = &result.segments[SegmentKind::Takeoff.index()];
    let takeoff_kw = takeoff.battery_energy_wh / (takeoff.duration_s / 3600.0) / 1000.0;
    let expected_kw = 0.3 * result.required_power_kw / 0.95 + 126.0;
    assert_relative_eq!(takeoff_kw, expected_kw, epsilon = 0.5);
    assert_relative_eq!(result.battery.peak_power_kw, expected_kw, epsilon = 0.5);
}

#[test]
fn sizing_is_deterministic() {
    let config = reference_config();
    let first = sized(&config, "dual_motor_dep", 0.3);
    let second = sized(&config, "dual_motor_dep", 0.3);

    assert_eq!(first.togw_lb, second.togw_lb);
    assert_eq!(first.fuel_weight_lb, second.fuel_weight_lb);
    assert_eq!(first.battery_weight_lb, second.battery_weight_lb);
    assert_eq!(first.iterations, second.iterations);
}

#[test]
fn stored_profile_rejects_out_of_range_values() {
    let mut config = reference_config();
    config
        .hybridization_profile
        .as_mut()
        .unwrap()
        .insert("cruise".to_string(), serde_json::json!(1.5));

    let profile = config.segment_profile().unwrap().unwrap();
    let mut aircraft = HybridAircraft::new("eSTOL-19", &config);
    aircraft.set_powertrain("parallel", 0.0, Some(profile)).unwrap();

    let err = aircraft.size_aircraft(100, 0.01, None).unwrap_err();
    assert!(matches!(
        err,
        SizingErrors::InvalidHybridization {
            segment: SegmentKind::Cruise,
            value,
        } if value == 1.5
    ));
}

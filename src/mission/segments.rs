use crate::constants::*;
use crate::models::segment::MissionSegment;
use crate::physics::atmosphere::density_slug_ft3;

use super::SegmentContext;

/// Simulated outputs of a single mission leg.
pub(crate) struct SegmentPerformance {
    pub time_s: f64,
    pub fuel_lb: f64,
    pub battery_wh: f64,
    pub distance_nm: f64,
}

fn shaft_power_kw(thrust_lb: f64, v_fps: f64, ctx: &SegmentContext) -> f64 {
    thrust_lb * v_fps / (FPS_PER_HP * ctx.tech.prop_efficiency) * HP_TO_KW
}

/// Fuel and battery drawn over one leg: architecture split plus the
/// high-lift motor draw, which always comes from the battery.
fn consumption(
    p_shaft_kw: f64,
    segment: &MissionSegment,
    time_s: f64,
    ctx: &SegmentContext,
) -> (f64, f64) {
    let split = ctx.powertrain.power_split(p_shaft_kw, segment.hybridization);
    let highlift_w = ctx.dep.highlift_power_kw(segment.blown_lift_active) * 1000.0;
    let fuel_lb = split.fuel_rate_kg_s * time_s * KG_TO_LB;
    let battery_wh = (split.battery_w + highlift_w) * time_s / 3600.0;
    (fuel_lb, battery_wh)
}

/// Ground roll plus climb to 35 ft at full commanded power.
pub(crate) fn takeoff(
    segment: &MissionSegment,
    w_lb: f64,
    s_ft2: f64,
    ctx: &SegmentContext,
) -> SegmentPerformance {
    let aug = ctx.dep.lift_augmentation_factor(segment.blown_lift_active);
    let cl_max_to_eff = ctx.aero.cl_max_takeoff * aug;

    let v_stall_to_fps = (2.0 * w_lb / (RHO_SL_SLUG * s_ft2 * cl_max_to_eff)).sqrt();
    let v_climb_fps = 1.3 * v_stall_to_fps;

    let t_ground_s = 30.0;
    let climb_gradient = 0.08;
    let roc_fps = v_climb_fps * climb_gradient;
    let t_climb_s = if roc_fps > 0.0 { 35.0 / roc_fps } else { 20.0 };
    let time_s = t_ground_s + t_climb_s;

    // Turbine-only aircraft hold ~95% rated; hybrids add the motor.
    let turbine_kw = ctx.powertrain.turbine_rating_kw();
    let motor_kw = ctx.powertrain.motor_rating_kw();
    let p_shaft_kw = if motor_kw > 0.0 {
        turbine_kw + motor_kw
    } else {
        turbine_kw * 0.95
    };

    let (fuel_lb, battery_wh) = consumption(p_shaft_kw, segment, time_s, ctx);
    SegmentPerformance {
        time_s,
        fuel_lb,
        battery_wh,
        distance_nm: 0.0,
    }
}

/// Constant-gradient climb at 1.3 Vstall.
pub(crate) fn climb(
    segment: &MissionSegment,
    w_lb: f64,
    s_ft2: f64,
    ctx: &SegmentContext,
) -> SegmentPerformance {
    // Average weight over the climb
    let w_avg = w_lb * 0.99;

    let aug = ctx.dep.lift_augmentation_factor(segment.blown_lift_active);
    let cl_max_clean_eff = ctx.aero.cl_max_clean * aug;

    let v_stall_fps = (2.0 * w_avg / (RHO_SL_SLUG * s_ft2 * cl_max_clean_eff)).sqrt();
    let v_climb_fps = 1.3 * v_stall_fps;
    let gamma = 0.05;
    let roc_fps = v_climb_fps * gamma;

    let cl_base = w_avg / (0.5 * RHO_SL_SLUG * v_climb_fps.powi(2) * s_ft2);
    let cl = cl_base * aug;
    // Induced drag follows the unblown circulation
    let cd = ctx.aero.drag_coefficient(cl_base);

    let thrust_lb = w_avg * (cd / cl + gamma);
    let p_shaft_kw = shaft_power_kw(thrust_lb, v_climb_fps, ctx);

    let alt_change_ft = segment.end_altitude_ft - segment.start_altitude_ft;
    let time_s = if roc_fps > 0.0 {
        alt_change_ft / roc_fps
    } else {
        600.0
    };

    let (fuel_lb, battery_wh) = consumption(p_shaft_kw, segment, time_s, ctx);
    SegmentPerformance {
        time_s,
        fuel_lb,
        battery_wh,
        distance_nm: 0.0,
    }
}

/// Level cruise over the full design range.
pub(crate) fn cruise(
    segment: &MissionSegment,
    w_lb: f64,
    s_ft2: f64,
    ctx: &SegmentContext,
) -> SegmentPerformance {
    let rho = density_slug_ft3(segment.start_altitude_ft);
    let v_fps = ctx.requirements.cruise_speed_kts * KTS_TO_FPS;

    let q_s = 0.5 * rho * v_fps.powi(2) * s_ft2;
    let cl_base = w_lb / q_s;
    // Induced drag follows the unblown circulation
    let cd = ctx.aero.drag_coefficient(cl_base);
    let drag_lb = q_s * cd;

    let p_shaft_kw = shaft_power_kw(drag_lb, v_fps, ctx);

    let distance_nm = ctx.requirements.design_range_nm;
    let time_s = distance_nm * NM_TO_FT / v_fps;

    let (fuel_lb, battery_wh) = consumption(p_shaft_kw, segment, time_s, ctx);
    SegmentPerformance {
        time_s,
        fuel_lb,
        battery_wh,
        distance_nm,
    }
}

/// Powered descent at 600 fpm, floored at flight idle.
pub(crate) fn descent(
    segment: &MissionSegment,
    w_lb: f64,
    s_ft2: f64,
    ctx: &SegmentContext,
) -> SegmentPerformance {
    let h_avg_ft = 0.5 * (segment.start_altitude_ft + segment.end_altitude_ft);
    let rho = density_slug_ft3(h_avg_ft);

    // Slightly below cruise speed
    let v_fps = 0.9 * ctx.requirements.cruise_speed_kts * KTS_TO_FPS;
    let descent_rate_fps = 600.0 / 60.0;
    let gamma = (descent_rate_fps / v_fps).atan();

    let q_s = 0.5 * rho * v_fps.powi(2) * s_ft2;
    let cl_base = w_lb * gamma.cos() / q_s;
    let cd = ctx.aero.drag_coefficient(cl_base);
    let drag_lb = q_s * cd;

    // Gravity assists; never demand less than flight idle
    let thrust_lb = drag_lb - w_lb * gamma.sin();
    let idle_kw = 0.07 * ctx.powertrain.turbine_rating_kw();
    let p_shaft_kw = if thrust_lb < 0.0 {
        idle_kw
    } else {
        shaft_power_kw(thrust_lb, v_fps, ctx).max(idle_kw)
    };

    let time_s = (segment.start_altitude_ft - segment.end_altitude_ft) / descent_rate_fps;

    let (fuel_lb, battery_wh) = consumption(p_shaft_kw, segment, time_s, ctx);
    SegmentPerformance {
        time_s,
        fuel_lb,
        battery_wh,
        distance_nm: 0.0,
    }
}

/// 30-minute reserve loiter at pattern altitude, 1.3 Vstall.
pub(crate) fn loiter(
    segment: &MissionSegment,
    w_lb: f64,
    s_ft2: f64,
    ctx: &SegmentContext,
) -> SegmentPerformance {
    let rho = density_slug_ft3(segment.start_altitude_ft);

    let aug = ctx.dep.lift_augmentation_factor(segment.blown_lift_active);
    let cl_max_clean_eff = ctx.aero.cl_max_clean * aug;

    let v_stall_fps = (2.0 * w_lb / (rho * s_ft2 * cl_max_clean_eff)).sqrt();
    let v_loiter_fps = 1.3 * v_stall_fps;

    let q_s = 0.5 * rho * v_loiter_fps.powi(2) * s_ft2;
    let cl_base = w_lb / q_s;
    let cd = ctx.aero.drag_coefficient(cl_base);
    let drag_lb = q_s * cd;

    let p_shaft_kw = shaft_power_kw(drag_lb, v_loiter_fps, ctx);
    let time_s = 30.0 * 60.0;

    let (fuel_lb, battery_wh) = consumption(p_shaft_kw, segment, time_s, ctx);
    SegmentPerformance {
        time_s,
        fuel_lb,
        battery_wh,
        distance_nm: 0.0,
    }
}

/// Three-degree approach from pattern altitude plus flare and rollout.
pub(crate) fn landing(
    segment: &MissionSegment,
    w_lb: f64,
    s_ft2: f64,
    ctx: &SegmentContext,
) -> SegmentPerformance {
    let rho = density_slug_ft3(segment.start_altitude_ft);

    let aug = ctx.dep.lift_augmentation_factor(segment.blown_lift_active);
    let cl_max_land_eff = ctx.aero.cl_max_landing * aug;

    let v_stall_land_fps = (2.0 * w_lb / (rho * s_ft2 * cl_max_land_eff)).sqrt();
    let v_approach_fps = 1.3 * v_stall_land_fps;

    let gamma = 3.0_f64.to_radians();
    let descent_distance_ft = segment.start_altitude_ft / gamma.tan();
    let t_approach_s = descent_distance_ft / v_approach_fps;

    let q_s = 0.5 * rho * v_approach_fps.powi(2) * s_ft2;
    let cl_base = w_lb / q_s;
    // Gear and flap increment
    let cd = ctx.aero.drag_coefficient(cl_base) + 0.02;
    let drag_lb = q_s * cd;
    let thrust_lb = drag_lb - w_lb * gamma.sin();

    let p_shaft_kw = shaft_power_kw(thrust_lb, v_approach_fps, ctx).max(0.0);

    let t_flare_rollout_s = 30.0;
    let time_s = t_approach_s + t_flare_rollout_s;

    let (fuel_lb, battery_wh) = consumption(p_shaft_kw, segment, time_s, ctx);
    SegmentPerformance {
        time_s,
        fuel_lb,
        battery_wh,
        distance_nm: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::aircraft::{
        CruiseMotorsConfig, DepSystemConfig, FoldingConfig, HighliftMotorsConfig,
        PowerArchitectureConfig, WiringConfig,
    };
    use crate::models::aero::AerodynamicSpec;
    use crate::models::dep::DepSystem;
    use crate::models::requirements::AircraftRequirements;
    use crate::models::segment::{MissionSegment, SegmentKind};
    use crate::powertrain::{
        Conventional, DualMotorDep, ParallelHybrid, Powertrain, TechnologySpec,
    };
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

    fn aero() -> AerodynamicSpec {
        AerodynamicSpec::new(10.0, 0.8, 0.025, 1.8, 2.1, 2.2)
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

    fn dep_on() -> DepSystem {
        DepSystem {
            enabled: true,
            lift_augmentation_factor_max: 1.8,
            blown_span_fraction: 0.65,
            number_of_highlift_motors: 12,
            motor_power_kw: 10.5,
            use_for_wing_sizing: true,
        }
    }

    fn conventional_500kw() -> Powertrain {
        let mut pt = Powertrain::Conventional(Conventional::new(tech()));
        pt.size_components(500.0, 0.0);
        pt
    }

    fn segment(kind: SegmentKind, start_ft: f64, end_ft: f64, hp: f64) -> MissionSegment {
        MissionSegment::new(kind, start_ft, end_ft, hp, false)
    }

    struct Fixture {
        requirements: AircraftRequirements,
        aero: AerodynamicSpec,
        dep: DepSystem,
        tech: TechnologySpec,
        powertrain: Powertrain,
    }

    impl Fixture {
        fn conventional() -> Self {
            Fixture {
                requirements: requirements(),
                aero: aero(),
                dep: DepSystem::disabled(),
                tech: tech(),
                powertrain: conventional_500kw(),
            }
        }

        fn ctx(&self) -> SegmentContext {
            SegmentContext {
                requirements: &self.requirements,
                aero: &self.aero,
                dep: &self.dep,
                tech: &self.tech,
                powertrain: &self.powertrain,
            }
        }
    }

    #[test]
    fn cruise_covers_design_range() {
        let fix = Fixture::conventional();
        let seg = segment(SegmentKind::Cruise, 8000.0, 8000.0, 0.0);
        let perf = cruise(&seg, 6000.0, 200.0, &fix.ctx());

        assert_relative_eq!(perf.time_s, 4799.5, epsilon = 0.5);
        assert_relative_eq!(perf.fuel_lb, 149.22, epsilon = 0.3);
        assert_eq!(perf.battery_wh, 0.0);
        assert_eq!(perf.distance_nm, 200.0);
    }

    #[test]
    fn climb_time_from_gradient() {
        let fix = Fixture::conventional();
        let seg = segment(SegmentKind::Climb, 35.0, 8000.0, 0.0);
        let perf = climb(&seg, 6000.0, 200.0, &fix.ctx());

        assert_relative_eq!(perf.time_s, 1040.0, epsilon = 0.5);
        assert_relative_eq!(perf.fuel_lb, 32.12, epsilon = 0.05);
    }

    #[test]
    fn takeoff_holds_95_percent_rated_without_motor() {
        let fix = Fixture::conventional();
        let seg = segment(SegmentKind::Takeoff, 0.0, 35.0, 0.0);
        let perf = takeoff(&seg, 6000.0, 200.0, &fix.ctx());

        assert_relative_eq!(perf.time_s, 33.07, epsilon = 0.01);
        // 475 kW at 0.30 kg/kWh over the takeoff
        assert_relative_eq!(perf.fuel_lb, 2.886, epsilon = 0.005);
        assert_eq!(perf.battery_wh, 0.0);
    }

    #[test]
    fn takeoff_hybrid_uses_combined_rating() {
        let mut fix = Fixture::conventional();
        let mut pt = Powertrain::ParallelHybrid(ParallelHybrid::new(tech()));
        pt.size_components(500.0, 0.3);
        fix.powertrain = pt;

        let seg = segment(SegmentKind::Takeoff, 0.0, 35.0, 0.3);
        let perf = takeoff(&seg, 6000.0, 200.0, &fix.ctx());

        // 350 + 150 = 500 kW, split 70/30 at this leg's ratio
        assert_relative_eq!(perf.fuel_lb, 2.126, epsilon = 0.005);
        assert_relative_eq!(perf.battery_wh, 1450.4, epsilon = 1.0);
    }

    #[test]
    fn descent_meets_thrust_requirement() {
        let fix = Fixture::conventional();
        let seg = segment(SegmentKind::Descent, 8000.0, 450.0, 0.0);
        let perf = descent(&seg, 6000.0, 200.0, &fix.ctx());

        assert_relative_eq!(perf.time_s, 755.0, epsilon = 0.01);
        assert_relative_eq!(perf.fuel_lb, 7.08, epsilon = 0.05);
    }

    #[test]
    fn descent_floors_at_flight_idle() {
        let mut fix = Fixture::conventional();
        let mut pt = Powertrain::Conventional(Conventional::new(tech()));
        pt.size_components(2000.0, 0.0);
        fix.powertrain = pt;

        let seg = segment(SegmentKind::Descent, 8000.0, 450.0, 0.0);
        let perf = descent(&seg, 6000.0, 200.0, &fix.ctx());

        // Requirement is ~51 kW; idle floor is 0.07 * 2000 = 140 kW
        assert_relative_eq!(perf.fuel_lb, 19.42, epsilon = 0.05);
    }

    #[test]
    fn loiter_is_thirty_minutes() {
        let fix = Fixture::conventional();
        let seg = segment(SegmentKind::Loiter, 450.0, 450.0, 0.0);
        let perf = loiter(&seg, 6000.0, 200.0, &fix.ctx());

        assert_eq!(perf.time_s, 1800.0);
        assert_relative_eq!(perf.fuel_lb, 32.30, epsilon = 0.05);
    }

    #[test]
    fn landing_approach_plus_rollout() {
        let fix = Fixture::conventional();
        let seg = segment(SegmentKind::Landing, 450.0, 0.0, 0.0);
        let perf = landing(&seg, 6000.0, 200.0, &fix.ctx());

        assert_relative_eq!(perf.time_s, 91.26, epsilon = 0.1);
        assert_relative_eq!(perf.fuel_lb, 0.765, epsilon = 0.01);
    }

    #[test]
    fn highlift_draw_adds_to_battery_only() {
        let mut fix = Fixture::conventional();
        fix.dep = dep_on();

        let quiet = segment(SegmentKind::Cruise, 8000.0, 8000.0, 0.0);
        let baseline = cruise(&quiet, 6000.0, 200.0, &fix.ctx());

        let mut blown = quiet.clone();
        blown.blown_lift_active = true;
        let with_dep = cruise(&blown, 6000.0, 200.0, &fix.ctx());

        // 126 kW of high-lift motors over the cruise
        assert_relative_eq!(
            with_dep.battery_wh - baseline.battery_wh,
            167_981.0,
            epsilon = 20.0
        );
        // Fuel path is untouched: drag uses the unblown polar
        assert_relative_eq!(with_dep.fuel_lb, baseline.fuel_lb, epsilon = 1e-9);
    }

    #[test]
    fn dep_takeoff_draws_split_and_highlift_once() {
        let dep_config = DepSystemConfig {
            enabled: true,
            lift_augmentation_factor_max: 1.8,
            blown_span_fraction: 0.65,
            number_of_highlift_motors: 12,
            motor_power_kw: 10.5,
            use_for_wing_sizing: true,
            highlift_motors: Some(HighliftMotorsConfig {
                number_of_motors: 12,
                power_per_motor_kw: 10.5,
                weight_per_motor_lb: 15.0,
                efficiency: 0.93,
                active_phases: vec![
                    "takeoff".to_string(),
                    "climb".to_string(),
                    "landing".to_string(),
                ],
                folding: FoldingConfig {
                    can_fold: true,
                    folded_drag_coefficient_increment: 0.001,
                },
            }),
            cruise_motors: Some(CruiseMotorsConfig {
                number_of_motors: 2,
                architecture: Some("pure_electric".to_string()),
                specific_power_kw_kg: 5.0,
                efficiency: 0.95,
            }),
            power_architecture: Some(PowerArchitectureConfig {
                kind: "battery_only".to_string(),
            }),
            wiring_and_controls: Some(WiringConfig {
                wiring_weight_factor: 0.15,
                controller_weight_per_kw: 0.25,
            }),
        };

        let mut fix = Fixture::conventional();
        fix.dep = dep_on();
        let mut pt =
            Powertrain::DualMotorDep(DualMotorDep::new(tech(), &dep_config).unwrap());
        pt.size_components(400.0, 0.0);
        fix.powertrain = pt;

        let mut seg = segment(SegmentKind::Takeoff, 0.0, 35.0, 0.0);
        seg.blown_lift_active = true;
        let perf = takeoff(&seg, 6000.0, 200.0, &fix.ctx());

        // Cruise motors 400/0.95 kW plus 126 kW high-lift, counted once
        assert_relative_eq!(perf.time_s, 33.78, epsilon = 0.05);
        assert_relative_eq!(perf.battery_wh, 5133.9, epsilon = 5.0);
        assert_eq!(perf.fuel_lb, 0.0);
    }
}

use std::fmt;

use crate::constants::*;
use crate::models::aero::AerodynamicSpec;
use crate::models::requirements::AircraftRequirements;
use crate::physics::atmosphere::density_slug_ft3;

/// Which requirement sets the installed shaft power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PowerConstraint {
    Takeoff,
    ClimbOei,
    ClimbAeo,
    ServiceCeiling,
    Cruise,
}

impl fmt::Display for PowerConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PowerConstraint::Takeoff => write!(f, "Takeoff"),
            PowerConstraint::ClimbOei => write!(f, "OEI Climb"),
            PowerConstraint::ClimbAeo => write!(f, "AEO Climb"),
            PowerConstraint::ServiceCeiling => write!(f, "Service Ceiling"),
            PowerConstraint::Cruise => write!(f, "Cruise"),
        }
    }
}

/// Everything the constraint analysis needs, passed explicitly.
pub struct ConstraintInputs<'a> {
    pub togw_lb: f64,
    pub requirements: &'a AircraftRequirements,
    pub aero: &'a AerodynamicSpec,
    pub prop_efficiency: f64,
    pub n_engines: usize,
    /// CLmax multiplier from blown lift; applied only when
    /// `use_blown_lift_sizing` is set.
    pub blown_lift_augmentation: f64,
    pub use_blown_lift_sizing: bool,
}

/// Wing-loading limits, thrust-to-weight requirements, and the shaft
/// power they imply.
#[derive(Debug, Clone)]
pub struct ConstraintSolution {
    pub ws_design_psf: f64,
    pub ws_stall_psf: f64,
    pub ws_landing_psf: f64,
    pub tw_takeoff: f64,
    pub tw_climb_oei: f64,
    pub tw_climb_aeo: f64,
    pub tw_ceiling: f64,
    pub tw_cruise: f64,
    pub tw_required: f64,
    pub l_d_cruise: f64,
    pub p_takeoff_kw: f64,
    pub p_climb_oei_kw: f64,
    pub p_climb_aeo_kw: f64,
    pub p_ceiling_kw: f64,
    pub p_cruise_kw: f64,
    pub p_shaft_kw: f64,
    pub governing: PowerConstraint,
}

/// Classical constraint analysis: stall and landing bound the wing
/// loading, then takeoff, climb gradients, service ceiling, and cruise
/// each demand a thrust-to-weight that converts to shaft power at its
/// own characteristic speed. Pure function of its inputs.
pub fn perform_constraint_analysis(inputs: &ConstraintInputs) -> ConstraintSolution {
    let req = inputs.requirements;
    let aero = inputs.aero;

    let aug = if inputs.use_blown_lift_sizing {
        inputs.blown_lift_augmentation
    } else {
        1.0
    };
    let cl_max_clean_eff = aero.cl_max_clean * aug;
    let cl_max_to_eff = aero.cl_max_takeoff * aug;
    let cl_max_land_eff = aero.cl_max_landing * aug;

    let v_stall_fps = req.stall_speed_kts * KTS_TO_FPS;

    // 1. Stall speed limit on wing loading
    let ws_stall_psf = 0.5 * RHO_SL_SLUG * v_stall_fps.powi(2) * cl_max_clean_eff;

    // 2. Landing field length, referred back to takeoff weight
    let w_land_ratio = 0.95;
    let sigma_sl = 1.0;
    let ws_landing_psf = (req.landing_field_length_ft - 600.0) * sigma_sl * cl_max_land_eff / 80.0
        / w_land_ratio;

    let ws_design_psf = ws_stall_psf.min(ws_landing_psf);

    // 3. Takeoff parameter from balanced field length
    let top = req.balanced_field_length_ft / 37.5;
    let tw_takeoff = ws_design_psf / (sigma_sl * cl_max_to_eff * top);

    // 4. Climb gradients at ks·V_stall
    let ks_climb: f64 = 1.2;
    let cl_climb = cl_max_clean_eff / ks_climb.powi(2);
    let cd_climb = aero.cd0 + aero.k1 * cl_climb.powi(2);
    let tw_climb_base = (ks_climb.powi(2) / cl_max_clean_eff) * cd_climb;

    let oei_factor = if inputs.n_engines > 1 {
        inputs.n_engines as f64 / (inputs.n_engines as f64 - 1.0)
    } else {
        1.0
    };
    let tw_climb_oei = oei_factor * (tw_climb_base + 0.024);
    let tw_climb_aeo = tw_climb_base + 0.05;

    // 5. Service ceiling residual climb
    let roc_ceiling_fps = req.rate_of_climb_ceiling_fpm / 60.0;
    let rho_ceiling = density_slug_ft3(req.service_ceiling_ft);
    let alpha_ceiling = 0.50;
    // 60 psf assumed wing loading at the ceiling
    let v_climb_ceiling_fps = (2.0 * 60.0 / (rho_ceiling * cl_max_clean_eff)).sqrt();
    let tw_ceiling = (1.0 / alpha_ceiling)
        * (roc_ceiling_fps / v_climb_ceiling_fps + 2.0 * (aero.cd0 * aero.k1).sqrt());

    // 6. Cruise at the design wing loading
    let rho_cruise = density_slug_ft3(req.cruise_altitude_ft);
    let v_cruise_fps = req.cruise_speed_kts * KTS_TO_FPS;
    let alpha_cruise = 0.75;
    let beta_cruise = 1.0;
    let q_cruise = 0.5 * rho_cruise * v_cruise_fps.powi(2);
    let cl_cruise = ws_design_psf / q_cruise;
    let cd_cruise = aero.drag_coefficient(cl_cruise);
    let l_d_cruise = cl_cruise / cd_cruise;
    let tw_cruise = (beta_cruise / alpha_cruise) / l_d_cruise;

    let tw_required = tw_takeoff
        .max(tw_climb_oei)
        .max(tw_climb_aeo)
        .max(tw_ceiling)
        .max(tw_cruise);

    // T/W to shaft power, each at its characteristic speed
    let v_climb_fps = ks_climb * v_stall_fps;
    let denom = FPS_PER_HP * inputs.prop_efficiency;
    let w = inputs.togw_lb;

    let p_takeoff_kw = (tw_takeoff * w) * 1.15 * v_stall_fps / denom * HP_TO_KW;
    let p_climb_oei_kw = (tw_climb_oei * w) * v_climb_fps / denom * HP_TO_KW;
    let p_climb_aeo_kw = (tw_climb_aeo * w) * v_climb_fps / denom * HP_TO_KW;
    let p_ceiling_kw = (tw_ceiling * w) * v_climb_ceiling_fps / denom * HP_TO_KW;
    let p_cruise_kw = (tw_cruise * w) * v_cruise_fps / denom * HP_TO_KW;

    let candidates = [
        (PowerConstraint::Takeoff, p_takeoff_kw),
        (PowerConstraint::ClimbOei, p_climb_oei_kw),
        (PowerConstraint::ClimbAeo, p_climb_aeo_kw),
        (PowerConstraint::ServiceCeiling, p_ceiling_kw),
        (PowerConstraint::Cruise, p_cruise_kw),
    ];
    let (mut governing, mut p_shaft_kw) = candidates[0];
    for &(constraint, power) in &candidates[1..] {
        if power > p_shaft_kw {
            governing = constraint;
            p_shaft_kw = power;
        }
    }

    ConstraintSolution {
        ws_design_psf,
        ws_stall_psf,
        ws_landing_psf,
        tw_takeoff,
        tw_climb_oei,
        tw_climb_aeo,
        tw_ceiling,
        tw_cruise,
        tw_required,
        l_d_cruise,
        p_takeoff_kw,
        p_climb_oei_kw,
        p_climb_aeo_kw,
        p_ceiling_kw,
        p_cruise_kw,
        p_shaft_kw,
        governing,
    }
}

pub mod battery;
pub mod sizing_errors;
pub mod weights;

use crate::config::aircraft::AircraftConfig;
use crate::constants::{
    FUEL_LHV_J_KG, FUEL_RESERVE_FACTOR, INITIAL_TOGW_GUESS_LB, LBF_TO_N, LB_TO_KG, NM_TO_M,
};
use crate::mission::{build_mission, simulate_mission, SegmentContext};
use crate::models::aero::AerodynamicSpec;
use crate::models::dep::DepSystem;
use crate::models::profile::HybridizationProfile;
use crate::models::requirements::AircraftRequirements;
use crate::models::result::SizingResult;
use crate::models::segment::SegmentKind;
use crate::physics::constraints::{
    perform_constraint_analysis, ConstraintInputs, ConstraintSolution,
};
use crate::powertrain::{Powertrain, TechnologySpec};

use battery::size_battery;
use sizing_errors::SizingErrors;
use weights::empty_weight_buildup;

/// A conceptual design under sizing: the requirements and technology
/// assumptions from the configuration, plus the selected powertrain.
/// `set_powertrain` picks the architecture, `size_aircraft` closes the
/// weight loop.
pub struct HybridAircraft {
    pub name: String,
    requirements: AircraftRequirements,
    aero: AerodynamicSpec,
    dep: DepSystem,
    tech: TechnologySpec,
    config: AircraftConfig,
    powertrain: Option<Powertrain>,
    hp_design: f64,
    profile: Option<HybridizationProfile>,
}

impl HybridAircraft {
    pub fn new(name: &str, config: &AircraftConfig) -> Self {
        HybridAircraft {
            name: name.to_string(),
            requirements: config.requirements(),
            aero: config.aero(),
            dep: config.dep(),
            tech: TechnologySpec::from_config(config),
            config: config.clone(),
            powertrain: None,
            hp_design: 0.0,
            profile: None,
        }
    }

    /// Select the powertrain architecture. With a profile the design
    /// hybridization is its mission maximum (the motor must cover the
    /// most electric segment); otherwise `hp_design` is used directly.
    pub fn set_powertrain(
        &mut self,
        architecture: &str,
        hp_design: f64,
        profile: Option<HybridizationProfile>,
    ) -> Result<(), SizingErrors> {
        self.config.validate_for_architecture(architecture)?;
        let powertrain = Powertrain::from_architecture(architecture, &self.tech, &self.config)?;

        match profile {
            Some(p) => {
                self.hp_design = p.max_hybridization();
                self.profile = Some(p);
            }
            None => {
                self.hp_design = hp_design;
                self.profile = None;
            }
        }
        self.powertrain = Some(powertrain);
        Ok(())
    }

    pub fn powertrain(&self) -> Option<&Powertrain> {
        self.powertrain.as_ref()
    }

    pub fn requirements(&self) -> &AircraftRequirements {
        &self.requirements
    }

    /// Constraint analysis at a given gross weight. Blown-lift CLmax
    /// augmentation enters only when the system is enabled and flagged
    /// for wing sizing.
    pub fn constraint_analysis(&self, togw_lb: f64) -> ConstraintSolution {
        let use_blown = self.dep.enabled && self.dep.use_for_wing_sizing;
        let augmentation = if use_blown {
            self.dep.lift_augmentation_factor(true)
        } else {
            1.0
        };

        perform_constraint_analysis(&ConstraintInputs {
            togw_lb,
            requirements: &self.requirements,
            aero: &self.aero,
            prop_efficiency: self.tech.prop_efficiency,
            n_engines: self.config.propulsion.number_of_engines,
            blown_lift_augmentation: augmentation,
            use_blown_lift_sizing: use_blown,
        })
    }

    /// Fixed-point gross-weight iteration. Each pass runs the constraint
    /// analysis, sizes the powertrain and airframe, flies the design
    /// mission, and sizes fuel and battery; the guess is then relaxed
    /// 70/30 toward the result. Non-convergence is not an error: the
    /// last iterate is returned with `converged` cleared.
    ///
    /// The profile argument overrides the one given to `set_powertrain`;
    /// with neither, the design hybridization is applied to takeoff,
    /// climb, and landing.
    pub fn size_aircraft(
        &mut self,
        max_iterations: usize,
        tolerance: f64,
        profile: Option<&HybridizationProfile>,
    ) -> Result<SizingResult, SizingErrors> {
        let profile = match profile {
            Some(p) => p.clone(),
            None => match &self.profile {
                Some(p) => p.clone(),
                None => HybridizationProfile::default_for(self.hp_design),
            },
        };

        for kind in SegmentKind::ORDER {
            let hp = profile.hybridization_for(kind);
            if !(0.0..=1.0).contains(&hp) {
                return Err(SizingErrors::InvalidHybridization {
                    segment: kind,
                    value: hp,
                });
            }
        }

        let mut powertrain = match self.powertrain.take() {
            Some(p) => p,
            None => return Err(SizingErrors::PowertrainNotSet),
        };

        let mut togw_guess_lb = INITIAL_TOGW_GUESS_LB;
        let mut iteration = 0;

        let result = loop {
            iteration += 1;

            let constraint = self.constraint_analysis(togw_guess_lb);
            let s_wing_ft2 = togw_guess_lb / constraint.ws_design_psf;

            powertrain.size_components(constraint.p_shaft_kw, self.hp_design);

            let weights = empty_weight_buildup(
                togw_guess_lb,
                s_wing_ft2,
                self.aero.aspect_ratio,
                powertrain.total_propulsion_weight_lb(),
            );
            let oew_lb = weights.total_lb();

            let mut mission = build_mission(self.requirements.cruise_altitude_ft, &profile);
            let ctx = SegmentContext {
                requirements: &self.requirements,
                aero: &self.aero,
                dep: &self.dep,
                tech: &self.tech,
                powertrain: &powertrain,
            };
            let totals = simulate_mission(&mut mission, togw_guess_lb, s_wing_ft2, &ctx);

            let fuel_weight_lb = totals.total_fuel_lb * FUEL_RESERVE_FACTOR;
            let battery = size_battery(&mission, totals.total_battery_wh, &self.tech);

            let togw_new_lb = oew_lb
                + self.requirements.payload_weight_lb
                + fuel_weight_lb
                + battery.mass_lb;
            let error = (togw_new_lb - togw_guess_lb).abs() / togw_guess_lb;
            let converged = error < tolerance;

            if converged || iteration >= max_iterations {
                let fuel_energy_wh = fuel_weight_lb * LB_TO_KG * FUEL_LHV_J_KG / 3600.0;
                let battery_energy_wh = battery.capacity_kwh * 1000.0;
                let total_energy_wh = fuel_energy_wh + battery_energy_wh;
                let pree = if total_energy_wh > 0.0 {
                    (self.requirements.payload_weight_lb * LBF_TO_N)
                        * (self.requirements.design_range_nm * NM_TO_M)
                        / total_energy_wh
                } else {
                    0.0
                };

                break SizingResult {
                    togw_lb: togw_new_lb,
                    oew_lb,
                    fuel_weight_lb,
                    battery_weight_lb: battery.mass_lb,
                    payload_weight_lb: self.requirements.payload_weight_lb,
                    fuel_fraction: fuel_weight_lb / togw_new_lb,
                    battery_fraction: battery.mass_lb / togw_new_lb,
                    payload_fraction: self.requirements.payload_weight_lb / togw_new_lb,
                    wing_area_ft2: s_wing_ft2,
                    wing_loading_psf: togw_new_lb / s_wing_ft2,
                    required_power_kw: constraint.p_shaft_kw,
                    governing_power_constraint: constraint.governing,
                    battery,
                    pree,
                    mission_time_min: totals.total_time_s / 60.0,
                    weights,
                    segments: mission,
                    iterations: iteration,
                    converged,
                };
            }

            togw_guess_lb = 0.7 * togw_guess_lb + 0.3 * togw_new_lb;
        };

        self.powertrain = Some(powertrain);
        Ok(result)
    }
}

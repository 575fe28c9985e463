use crate::config::aircraft::DepSystemConfig;
use crate::config::config_errors::ConfigErrors;
use crate::models::segment::SegmentKind;
use crate::powertrain::architectures::component_mass_lb;
use crate::powertrain::{PowerSplit, TechnologySpec};

/// Flight phases a motor set runs in.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivePhases {
    All,
    Only(Vec<SegmentKind>),
}

impl ActivePhases {
    /// Parse a config phase list; "all" anywhere in the list means every
    /// phase, any other entry must be a canonical segment name.
    pub fn parse(names: &[String]) -> Result<ActivePhases, ConfigErrors> {
        if names.iter().any(|n| n.eq_ignore_ascii_case("all")) {
            return Ok(ActivePhases::All);
        }
        let mut phases = Vec::with_capacity(names.len());
        for name in names {
            let kind = SegmentKind::from_name(name)
                .ok_or_else(|| ConfigErrors::UnknownSegment(name.clone()))?;
            phases.push(kind);
        }
        Ok(ActivePhases::Only(phases))
    }
}

/// A bank of identical motors.
#[derive(Debug, Clone)]
pub struct MotorSet {
    pub name: String,
    pub num_motors: usize,
    pub power_per_motor_kw: f64,
    pub weight_per_motor_lb: f64,
    pub efficiency: f64,
    pub active_phases: ActivePhases,
    pub can_fold: bool,
    pub folded_drag_cd: f64,
}

impl MotorSet {
    pub fn total_power_kw(&self) -> f64 {
        self.num_motors as f64 * self.power_per_motor_kw
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.num_motors as f64 * self.weight_per_motor_lb
    }

    pub fn is_active(&self, phase: SegmentKind) -> bool {
        match &self.active_phases {
            ActivePhases::All => true,
            ActivePhases::Only(phases) => phases.contains(&phase),
        }
    }
}

/// How the cruise motors are fed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CruiseArchitecture {
    PureElectric,
    ParallelHybrid,
}

impl CruiseArchitecture {
    pub fn parse(name: &str) -> Result<CruiseArchitecture, ConfigErrors> {
        match name {
            "pure_electric" => Ok(CruiseArchitecture::PureElectric),
            "parallel_hybrid" => Ok(CruiseArchitecture::ParallelHybrid),
            other => Err(ConfigErrors::InvalidValue(
                "dep_system.cruise_motors.architecture".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// X-57 style distributed propulsion: a fixed bank of folding high-lift
/// motors for blown lift plus cruise motors sized to the shaft-power
/// requirement. The split below covers the cruise motors only; the
/// mission simulator adds the high-lift battery draw per segment, so it
/// is counted exactly once.
#[derive(Debug, Clone)]
pub struct DualMotorDep {
    tech: TechnologySpec,
    pub highlift_motors: MotorSet,
    pub cruise_motors: Option<MotorSet>,
    pub cruise_architecture: CruiseArchitecture,
    num_cruise_motors: usize,
    cruise_specific_power_kw_kg: f64,
    cruise_efficiency: f64,
    pub power_architecture: String,
    wiring_weight_factor: f64,
    controller_weight_per_kw: f64,

    pub turbine_rating_kw: f64,
    pub motor_rating_kw: f64,
    pub turbine_mass_lb: f64,
    pub motor_mass_lb: f64,
    pub cruise_motor_mass_lb: f64,
    pub wiring_mass_lb: f64,
    pub controller_mass_lb: f64,
}

impl DualMotorDep {
    /// Build from the dep_system config section. The high-lift bank is
    /// fixed by the config; cruise motors are sized later.
    pub fn new(tech: TechnologySpec, dep: &DepSystemConfig) -> Result<Self, ConfigErrors> {
        let missing = |block: &str| ConfigErrors::MissingSection(format!("dep_system.{}", block));

        let hl = dep.highlift_motors.as_ref().ok_or_else(|| missing("highlift_motors"))?;
        let cruise = dep.cruise_motors.as_ref().ok_or_else(|| missing("cruise_motors"))?;
        let power_arch = dep
            .power_architecture
            .as_ref()
            .ok_or_else(|| missing("power_architecture"))?;
        let wiring = dep
            .wiring_and_controls
            .as_ref()
            .ok_or_else(|| missing("wiring_and_controls"))?;

        let highlift_motors = MotorSet {
            name: "High-Lift Motors".to_string(),
            num_motors: hl.number_of_motors,
            power_per_motor_kw: hl.power_per_motor_kw,
            weight_per_motor_lb: hl.weight_per_motor_lb,
            efficiency: hl.efficiency,
            active_phases: ActivePhases::parse(&hl.active_phases)?,
            can_fold: hl.folding.can_fold,
            folded_drag_cd: hl.folding.folded_drag_coefficient_increment,
        };

        let cruise_architecture = CruiseArchitecture::parse(
            cruise.architecture.as_deref().unwrap_or("pure_electric"),
        )?;

        Ok(DualMotorDep {
            tech,
            highlift_motors,
            cruise_motors: None,
            cruise_architecture,
            num_cruise_motors: cruise.number_of_motors,
            cruise_specific_power_kw_kg: cruise.specific_power_kw_kg,
            cruise_efficiency: cruise.efficiency,
            power_architecture: power_arch.kind.clone(),
            wiring_weight_factor: wiring.wiring_weight_factor,
            controller_weight_per_kw: wiring.controller_weight_per_kw,
            turbine_rating_kw: 0.0,
            motor_rating_kw: 0.0,
            turbine_mass_lb: 0.0,
            motor_mass_lb: 0.0,
            cruise_motor_mass_lb: 0.0,
            wiring_mass_lb: 0.0,
            controller_mass_lb: 0.0,
        })
    }

    pub fn size_components(&mut self, p_shaft_kw: f64, hp: f64) {
        let num = self.num_cruise_motors as f64;
        let power_per_motor_kw = p_shaft_kw / num;

        match self.cruise_architecture {
            CruiseArchitecture::ParallelHybrid => {
                // Each cruise pod carries a turbine plus a boost motor.
                let motor_per_kw = power_per_motor_kw * hp;
                let turbine_per_kw = power_per_motor_kw * (1.0 - hp);
                let motor_mass_per_lb =
                    component_mass_lb(motor_per_kw, self.cruise_specific_power_kw_kg);
                let turbine_mass_per_lb =
                    component_mass_lb(turbine_per_kw, self.tech.gt_specific_power_kw_kg);

                self.cruise_motors = Some(MotorSet {
                    name: "Cruise Motors (Parallel Hybrid)".to_string(),
                    num_motors: self.num_cruise_motors,
                    power_per_motor_kw,
                    weight_per_motor_lb: turbine_mass_per_lb + motor_mass_per_lb,
                    efficiency: self.cruise_efficiency,
                    active_phases: ActivePhases::All,
                    can_fold: false,
                    folded_drag_cd: 0.001,
                });

                self.turbine_rating_kw = turbine_per_kw * num;
                self.motor_rating_kw = motor_per_kw * num;
                self.turbine_mass_lb = turbine_mass_per_lb * num;
                self.motor_mass_lb = motor_mass_per_lb * num;
            }
            CruiseArchitecture::PureElectric => {
                let weight_per_motor_lb =
                    component_mass_lb(power_per_motor_kw, self.cruise_specific_power_kw_kg);

                self.cruise_motors = Some(MotorSet {
                    name: "Cruise Motors (Pure Electric)".to_string(),
                    num_motors: self.num_cruise_motors,
                    power_per_motor_kw,
                    weight_per_motor_lb,
                    efficiency: self.cruise_efficiency,
                    active_phases: ActivePhases::All,
                    can_fold: false,
                    folded_drag_cd: 0.001,
                });

                self.turbine_rating_kw = 0.0;
                self.motor_rating_kw = p_shaft_kw;
                self.turbine_mass_lb = 0.0;
                self.motor_mass_lb = weight_per_motor_lb * num;
            }
        }

        let set_mass = self
            .cruise_motors
            .as_ref()
            .map(MotorSet::total_weight_lb)
            .unwrap_or(0.0);
        self.cruise_motor_mass_lb = set_mass;

        // Distribution harness scales with everything it feeds.
        let total_power_kw = p_shaft_kw + self.highlift_motors.total_power_kw();
        self.wiring_mass_lb = total_power_kw * self.wiring_weight_factor;
        self.controller_mass_lb = total_power_kw * self.controller_weight_per_kw;
    }

    /// Cruise-motor power split. High-lift draw is deliberately absent
    /// here; the mission simulator adds it from the segment flags.
    pub fn power_split(&self, p_required_kw: f64, hp: f64) -> PowerSplit {
        let cruise = match &self.cruise_motors {
            Some(set) => set,
            None => return PowerSplit::zero(),
        };

        match self.cruise_architecture {
            CruiseArchitecture::ParallelHybrid => {
                let motor_kw = p_required_kw * hp;
                let turbine_kw = p_required_kw * (1.0 - hp);
                let electric_kw = motor_kw / cruise.efficiency;
                PowerSplit {
                    turbine_kw,
                    motor_kw,
                    fuel_rate_kg_s: turbine_kw * self.tech.gt_bsfc_kg_kwh / 3600.0,
                    battery_w: electric_kw * 1000.0,
                }
            }
            CruiseArchitecture::PureElectric => {
                let electric_kw = p_required_kw / cruise.efficiency;
                PowerSplit {
                    turbine_kw: 0.0,
                    motor_kw: p_required_kw,
                    fuel_rate_kg_s: 0.0,
                    battery_w: electric_kw * 1000.0,
                }
            }
        }
    }

    /// Dry propulsion weight: both motor banks plus distribution.
    pub fn total_weight_lb(&self) -> f64 {
        self.highlift_motors.total_weight_lb()
            + self.cruise_motor_mass_lb
            + self.wiring_mass_lb
            + self.controller_mass_lb
    }

    /// Parasite drag from folded high-lift nacelles, lb per unit dynamic
    /// pressure times wing area (flat-plate style increment).
    pub fn drag_increment(&self, phase: SegmentKind, s_wing_ft2: f64) -> f64 {
        if !self.highlift_motors.is_active(phase) && self.highlift_motors.can_fold {
            self.highlift_motors.folded_drag_cd * s_wing_ft2
        } else {
            0.0
        }
    }
}

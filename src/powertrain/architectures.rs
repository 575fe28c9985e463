use crate::constants::KG_TO_LB;
use crate::powertrain::{PowerSplit, TechnologySpec};

/// Component mass from rated power and specific power, lb.
/// Guarded so a zero specific power (component absent from the config)
/// never produces inf or NaN.
pub(crate) fn component_mass_lb(power_kw: f64, specific_power_kw_kg: f64) -> f64 {
    if specific_power_kw_kg > 0.0 {
        power_kw / specific_power_kw_kg * KG_TO_LB
    } else {
        0.0
    }
}

/// Fuel-only baseline: one gas turbine on the propeller shaft.
#[derive(Debug, Clone)]
pub struct Conventional {
    tech: TechnologySpec,
    pub turbine_rating_kw: f64,
    pub turbine_mass_lb: f64,
}

impl Conventional {
    pub fn new(tech: TechnologySpec) -> Self {
        Conventional {
            tech,
            turbine_rating_kw: 0.0,
            turbine_mass_lb: 0.0,
        }
    }

    pub fn size_components(&mut self, p_shaft_kw: f64) {
        self.turbine_rating_kw = p_shaft_kw;
        self.turbine_mass_lb = component_mass_lb(p_shaft_kw, self.tech.gt_specific_power_kw_kg);
    }

    pub fn power_split(&self, p_required_kw: f64) -> PowerSplit {
        PowerSplit {
            turbine_kw: p_required_kw,
            motor_kw: 0.0,
            fuel_rate_kg_s: p_required_kw * self.tech.gt_bsfc_kg_kwh / 3600.0,
            battery_w: 0.0,
        }
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.turbine_mass_lb
    }
}

/// Gas turbine and electric motor on a shared shaft. Hp is the electric
/// fraction of shaft power: P_EM = Hp·P, P_GT = (1-Hp)·P.
#[derive(Debug, Clone)]
pub struct ParallelHybrid {
    tech: TechnologySpec,
    pub turbine_rating_kw: f64,
    pub motor_rating_kw: f64,
    pub turbine_mass_lb: f64,
    pub motor_mass_lb: f64,
}

impl ParallelHybrid {
    pub fn new(tech: TechnologySpec) -> Self {
        ParallelHybrid {
            tech,
            turbine_rating_kw: 0.0,
            motor_rating_kw: 0.0,
            turbine_mass_lb: 0.0,
            motor_mass_lb: 0.0,
        }
    }

    pub fn size_components(&mut self, p_shaft_kw: f64, hp: f64) {
        self.motor_rating_kw = p_shaft_kw * hp;
        self.turbine_rating_kw = p_shaft_kw * (1.0 - hp);
        self.motor_mass_lb =
            component_mass_lb(self.motor_rating_kw, self.tech.em_specific_power_kw_kg);
        self.turbine_mass_lb =
            component_mass_lb(self.turbine_rating_kw, self.tech.gt_specific_power_kw_kg);
    }

    pub fn power_split(&self, p_required_kw: f64, hp: f64) -> PowerSplit {
        let turbine_kw = p_required_kw * (1.0 - hp);
        let motor_kw = p_required_kw * hp;
        PowerSplit {
            turbine_kw,
            motor_kw,
            fuel_rate_kg_s: turbine_kw * self.tech.gt_bsfc_kg_kwh / 3600.0,
            battery_w: motor_kw * 1000.0 / self.tech.em_efficiency,
        }
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.turbine_mass_lb + self.motor_mass_lb
    }
}

/// Turbine drives a generator, the motor drives the propeller. The
/// generator is rated for the full continuous (cruise) electrical load;
/// Hp only oversizes the motor for battery-boosted peaks. In flight the
/// battery covers whatever demand exceeds the generator rating, so the
/// split is capacity-limited rather than Hp-driven.
#[derive(Debug, Clone)]
pub struct SerialHybrid {
    tech: TechnologySpec,
    pub turbine_rating_kw: f64,
    pub motor_rating_kw: f64,
    pub generator_rating_kw: f64,
    pub turbine_mass_lb: f64,
    pub motor_mass_lb: f64,
    pub generator_mass_lb: f64,
}

impl SerialHybrid {
    pub fn new(tech: TechnologySpec) -> Self {
        SerialHybrid {
            tech,
            turbine_rating_kw: 0.0,
            motor_rating_kw: 0.0,
            generator_rating_kw: 0.0,
            turbine_mass_lb: 0.0,
            motor_mass_lb: 0.0,
            generator_mass_lb: 0.0,
        }
    }

    pub fn size_components(&mut self, p_shaft_kw: f64, hp: f64) {
        self.motor_rating_kw = p_shaft_kw * (1.0 + hp);
        self.generator_rating_kw = p_shaft_kw / self.tech.em_efficiency;
        self.turbine_rating_kw = self.generator_rating_kw / self.tech.gen_efficiency;

        self.motor_mass_lb =
            component_mass_lb(self.motor_rating_kw, self.tech.em_specific_power_kw_kg);
        self.generator_mass_lb =
            component_mass_lb(self.generator_rating_kw, self.tech.gen_specific_power_kw_kg);
        self.turbine_mass_lb =
            component_mass_lb(self.turbine_rating_kw, self.tech.gt_specific_power_kw_kg);
    }

    pub fn power_split(&self, p_required_kw: f64, _hp: f64) -> PowerSplit {
        let electric_demand_kw = p_required_kw / self.tech.em_efficiency;
        let generator_kw = electric_demand_kw.min(self.generator_rating_kw);
        let battery_kw = (electric_demand_kw - generator_kw).max(0.0);
        let turbine_kw = generator_kw / self.tech.gen_efficiency;
        PowerSplit {
            turbine_kw,
            motor_kw: p_required_kw,
            fuel_rate_kg_s: turbine_kw * self.tech.gt_bsfc_kg_kwh / 3600.0,
            battery_w: battery_kw * 1000.0,
        }
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.turbine_mass_lb + self.motor_mass_lb + self.generator_mass_lb
    }
}

/// Battery and motor only.
#[derive(Debug, Clone)]
pub struct FullyElectric {
    tech: TechnologySpec,
    pub motor_rating_kw: f64,
    pub motor_mass_lb: f64,
}

impl FullyElectric {
    pub fn new(tech: TechnologySpec) -> Self {
        FullyElectric {
            tech,
            motor_rating_kw: 0.0,
            motor_mass_lb: 0.0,
        }
    }

    pub fn size_components(&mut self, p_shaft_kw: f64) {
        self.motor_rating_kw = p_shaft_kw;
        self.motor_mass_lb = component_mass_lb(p_shaft_kw, self.tech.em_specific_power_kw_kg);
    }

    pub fn power_split(&self, p_required_kw: f64) -> PowerSplit {
        PowerSplit {
            turbine_kw: 0.0,
            motor_kw: p_required_kw,
            fuel_rate_kg_s: 0.0,
            battery_w: p_required_kw * 1000.0 / self.tech.em_efficiency,
        }
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.motor_mass_lb
    }
}

/// Per-engine shaft loading for a multi-engine split.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineLoading {
    pub engines_operating: usize,
    pub shaft_power_per_engine_kw: f64,
    pub turbine_per_engine_kw: f64,
    pub motor_per_engine_kw: f64,
}

/// N identical engines, each a parallel hybrid (GT + EM on one shaft),
/// with symmetric power distribution and a one-engine-inoperative mode
/// where the remaining engine absorbs the full demand.
#[derive(Debug, Clone)]
pub struct MultiEngine {
    tech: TechnologySpec,
    pub num_engines: usize,
    pub turbine_rating_per_engine_kw: f64,
    pub motor_rating_per_engine_kw: f64,
    pub turbine_rating_kw: f64,
    pub motor_rating_kw: f64,
    pub turbine_mass_per_engine_lb: f64,
    pub motor_mass_per_engine_lb: f64,
    pub turbine_mass_lb: f64,
    pub motor_mass_lb: f64,
}

impl MultiEngine {
    pub fn new(tech: TechnologySpec, num_engines: usize) -> Self {
        MultiEngine {
            tech,
            num_engines,
            turbine_rating_per_engine_kw: 0.0,
            motor_rating_per_engine_kw: 0.0,
            turbine_rating_kw: 0.0,
            motor_rating_kw: 0.0,
            turbine_mass_per_engine_lb: 0.0,
            motor_mass_per_engine_lb: 0.0,
            turbine_mass_lb: 0.0,
            motor_mass_lb: 0.0,
        }
    }

    pub fn size_components(&mut self, p_shaft_kw: f64, hp: f64) {
        let engines = self.num_engines as f64;
        let p_per_engine_kw = p_shaft_kw / engines;

        self.turbine_rating_per_engine_kw = p_per_engine_kw * (1.0 - hp);
        self.motor_rating_per_engine_kw = p_per_engine_kw * hp;
        self.turbine_rating_kw = self.turbine_rating_per_engine_kw * engines;
        self.motor_rating_kw = self.motor_rating_per_engine_kw * engines;

        self.turbine_mass_per_engine_lb = component_mass_lb(
            self.turbine_rating_per_engine_kw,
            self.tech.gt_specific_power_kw_kg,
        );
        self.motor_mass_per_engine_lb = component_mass_lb(
            self.motor_rating_per_engine_kw,
            self.tech.em_specific_power_kw_kg,
        );
        self.turbine_mass_lb = self.turbine_mass_per_engine_lb * engines;
        self.motor_mass_lb = self.motor_mass_per_engine_lb * engines;
    }

    fn split_with(&self, p_required_kw: f64, hp: f64, engines_operating: usize) -> PowerSplit {
        let loading = self.loading_with(p_required_kw, hp, engines_operating);
        let operating = engines_operating as f64;
        let turbine_kw = loading.turbine_per_engine_kw * operating;
        let motor_kw = loading.motor_per_engine_kw * operating;
        PowerSplit {
            turbine_kw,
            motor_kw,
            fuel_rate_kg_s: turbine_kw * self.tech.gt_bsfc_kg_kwh / 3600.0,
            battery_w: motor_kw * 1000.0 / self.tech.em_efficiency,
        }
    }

    fn loading_with(&self, p_required_kw: f64, hp: f64, engines_operating: usize) -> EngineLoading {
        let p_per_engine_kw = if engines_operating == self.num_engines {
            p_required_kw / self.num_engines as f64
        } else {
            // Engine-out: the remaining engine(s) carry the full demand.
            p_required_kw
        };
        EngineLoading {
            engines_operating,
            shaft_power_per_engine_kw: p_per_engine_kw,
            turbine_per_engine_kw: p_per_engine_kw * (1.0 - hp),
            motor_per_engine_kw: p_per_engine_kw * hp,
        }
    }

    pub fn power_split(&self, p_required_kw: f64, hp: f64) -> PowerSplit {
        self.split_with(p_required_kw, hp, self.num_engines)
    }

    /// One engine inoperative: the single remaining engine provides the
    /// full shaft power, with battery boost through its motor.
    pub fn power_split_oei(&self, p_required_kw: f64, hp: f64) -> PowerSplit {
        self.split_with(p_required_kw, hp, 1)
    }

    /// Per-engine loading diagnostics for either operating mode.
    pub fn engine_loading(&self, p_required_kw: f64, hp: f64, oei: bool) -> EngineLoading {
        let operating = if oei { 1 } else { self.num_engines };
        self.loading_with(p_required_kw, hp, operating)
    }

    pub fn total_weight_lb(&self) -> f64 {
        self.turbine_mass_lb + self.motor_mass_lb
    }
}

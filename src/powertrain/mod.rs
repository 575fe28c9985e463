pub mod architectures;
pub mod dual_motor;

use std::fmt;

use crate::config::aircraft::AircraftConfig;
use crate::config::config_errors::ConfigErrors;
use crate::sizing::sizing_errors::SizingErrors;

pub use architectures::{
    Conventional, EngineLoading, FullyElectric, MultiEngine, ParallelHybrid, SerialHybrid,
};
pub use dual_motor::{CruiseArchitecture, DualMotorDep, MotorSet};

/// Component technology assumptions shared by every architecture.
/// Percent fields from the config file are stored as fractions here.
#[derive(Debug, Clone)]
pub struct TechnologySpec {
    pub gt_specific_power_kw_kg: f64,
    pub gt_efficiency: f64,
    pub gt_bsfc_kg_kwh: f64,
    pub em_specific_power_kw_kg: f64,
    pub em_efficiency: f64,
    pub gen_specific_power_kw_kg: f64,
    pub gen_efficiency: f64,
    pub battery_specific_energy_wh_kg: f64,
    pub battery_specific_power_kw_kg: f64,
    pub battery_soc_margin: f64,
    pub battery_dod: f64,
    pub prop_efficiency: f64,
}

impl TechnologySpec {
    pub fn from_config(config: &AircraftConfig) -> Self {
        let hybrid = &config.hybrid_system;
        TechnologySpec {
            gt_specific_power_kw_kg: hybrid.gas_turbine.specific_power_kw_kg,
            gt_efficiency: hybrid.gas_turbine.efficiency,
            gt_bsfc_kg_kwh: hybrid.gas_turbine.bsfc_kg_kwh,
            em_specific_power_kw_kg: hybrid.electric_motor.specific_power_kw_kg,
            em_efficiency: hybrid.electric_motor.efficiency,
            gen_specific_power_kw_kg: hybrid.generator.specific_power_kw_kg,
            gen_efficiency: hybrid.generator.efficiency,
            battery_specific_energy_wh_kg: hybrid.battery.specific_energy_wh_kg,
            battery_specific_power_kw_kg: hybrid.battery.specific_power_kw_kg,
            battery_soc_margin: hybrid.battery.soc_margin_percent / 100.0,
            battery_dod: hybrid.battery.depth_of_discharge_percent / 100.0,
            prop_efficiency: config.propulsion.propeller_efficiency,
        }
    }
}

/// Instantaneous power distribution for one mission condition.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSplit {
    pub turbine_kw: f64,
    pub motor_kw: f64,
    pub fuel_rate_kg_s: f64,
    pub battery_w: f64,
}

impl PowerSplit {
    pub fn zero() -> Self {
        PowerSplit {
            turbine_kw: 0.0,
            motor_kw: 0.0,
            fuel_rate_kg_s: 0.0,
            battery_w: 0.0,
        }
    }
}

/// The closed set of powertrain architectures. Variants are constructed
/// through `from_architecture` at configuration time; the sizing loop
/// only sees this surface.
#[derive(Debug, Clone)]
pub enum Powertrain {
    Conventional(Conventional),
    ParallelHybrid(ParallelHybrid),
    SerialHybrid(SerialHybrid),
    FullyElectric(FullyElectric),
    MultiEngine(MultiEngine),
    DualMotorDep(DualMotorDep),
}

impl Powertrain {
    /// Map a configuration architecture name to a variant.
    /// `dual_motor_dep` and `multi_engine` read their extra parameters
    /// from the config; an unrecognized name is rejected immediately.
    pub fn from_architecture(
        name: &str,
        tech: &TechnologySpec,
        config: &AircraftConfig,
    ) -> Result<Powertrain, SizingErrors> {
        match name.to_ascii_lowercase().as_str() {
            "conventional" => Ok(Powertrain::Conventional(Conventional::new(tech.clone()))),
            "parallel" => Ok(Powertrain::ParallelHybrid(ParallelHybrid::new(tech.clone()))),
            "serial" => Ok(Powertrain::SerialHybrid(SerialHybrid::new(tech.clone()))),
            "electric" => Ok(Powertrain::FullyElectric(FullyElectric::new(tech.clone()))),
            "multi_engine" => Ok(Powertrain::MultiEngine(MultiEngine::new(
                tech.clone(),
                config.propulsion.number_of_engines,
            ))),
            "dual_motor_dep" => {
                let dep = config.dep_system.as_ref().ok_or_else(|| {
                    SizingErrors::Config(ConfigErrors::MissingSection("dep_system".to_string()))
                })?;
                let powertrain =
                    DualMotorDep::new(tech.clone(), dep).map_err(SizingErrors::Config)?;
                Ok(Powertrain::DualMotorDep(powertrain))
            }
            _ => Err(SizingErrors::UnknownArchitecture(name.to_string())),
        }
    }

    /// Size component ratings and masses for the worst-case shaft power
    /// and the design (maximum mission) hybridization.
    pub fn size_components(&mut self, p_shaft_kw: f64, hp: f64) {
        match self {
            Powertrain::Conventional(p) => p.size_components(p_shaft_kw),
            Powertrain::ParallelHybrid(p) => p.size_components(p_shaft_kw, hp),
            Powertrain::SerialHybrid(p) => p.size_components(p_shaft_kw, hp),
            Powertrain::FullyElectric(p) => p.size_components(p_shaft_kw),
            Powertrain::MultiEngine(p) => p.size_components(p_shaft_kw, hp),
            Powertrain::DualMotorDep(p) => p.size_components(p_shaft_kw, hp),
        }
    }

    /// Distribute a required shaft power for one mission condition.
    pub fn power_split(&self, p_required_kw: f64, hp: f64) -> PowerSplit {
        match self {
            Powertrain::Conventional(p) => p.power_split(p_required_kw),
            Powertrain::ParallelHybrid(p) => p.power_split(p_required_kw, hp),
            Powertrain::SerialHybrid(p) => p.power_split(p_required_kw, hp),
            Powertrain::FullyElectric(p) => p.power_split(p_required_kw),
            Powertrain::MultiEngine(p) => p.power_split(p_required_kw, hp),
            Powertrain::DualMotorDep(p) => p.power_split(p_required_kw, hp),
        }
    }

    /// Dry propulsion-system weight, lb. Fuel and battery are sized by
    /// the weight loop, not here.
    pub fn total_propulsion_weight_lb(&self) -> f64 {
        match self {
            Powertrain::Conventional(p) => p.total_weight_lb(),
            Powertrain::ParallelHybrid(p) => p.total_weight_lb(),
            Powertrain::SerialHybrid(p) => p.total_weight_lb(),
            Powertrain::FullyElectric(p) => p.total_weight_lb(),
            Powertrain::MultiEngine(p) => p.total_weight_lb(),
            Powertrain::DualMotorDep(p) => p.total_weight_lb(),
        }
    }

    /// Sized gas-turbine rating, kW (zero for all-electric variants).
    pub fn turbine_rating_kw(&self) -> f64 {
        match self {
            Powertrain::Conventional(p) => p.turbine_rating_kw,
            Powertrain::ParallelHybrid(p) => p.turbine_rating_kw,
            Powertrain::SerialHybrid(p) => p.turbine_rating_kw,
            Powertrain::FullyElectric(_) => 0.0,
            Powertrain::MultiEngine(p) => p.turbine_rating_kw,
            Powertrain::DualMotorDep(p) => p.turbine_rating_kw,
        }
    }

    /// Sized electric-motor rating, kW.
    pub fn motor_rating_kw(&self) -> f64 {
        match self {
            Powertrain::Conventional(_) => 0.0,
            Powertrain::ParallelHybrid(p) => p.motor_rating_kw,
            Powertrain::SerialHybrid(p) => p.motor_rating_kw,
            Powertrain::FullyElectric(p) => p.motor_rating_kw,
            Powertrain::MultiEngine(p) => p.motor_rating_kw,
            Powertrain::DualMotorDep(p) => p.motor_rating_kw,
        }
    }

    /// Sized generator rating, kW (serial hybrid only).
    pub fn generator_rating_kw(&self) -> f64 {
        match self {
            Powertrain::SerialHybrid(p) => p.generator_rating_kw,
            _ => 0.0,
        }
    }

    pub fn turbine_mass_lb(&self) -> f64 {
        match self {
            Powertrain::Conventional(p) => p.turbine_mass_lb,
            Powertrain::ParallelHybrid(p) => p.turbine_mass_lb,
            Powertrain::SerialHybrid(p) => p.turbine_mass_lb,
            Powertrain::FullyElectric(_) => 0.0,
            Powertrain::MultiEngine(p) => p.turbine_mass_lb,
            Powertrain::DualMotorDep(p) => p.turbine_mass_lb,
        }
    }

    pub fn motor_mass_lb(&self) -> f64 {
        match self {
            Powertrain::Conventional(_) => 0.0,
            Powertrain::ParallelHybrid(p) => p.motor_mass_lb,
            Powertrain::SerialHybrid(p) => p.motor_mass_lb,
            Powertrain::FullyElectric(p) => p.motor_mass_lb,
            Powertrain::MultiEngine(p) => p.motor_mass_lb,
            Powertrain::DualMotorDep(p) => p.motor_mass_lb,
        }
    }

    pub fn generator_mass_lb(&self) -> f64 {
        match self {
            Powertrain::SerialHybrid(p) => p.generator_mass_lb,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Powertrain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Powertrain::Conventional(_) => write!(f, "Conventional"),
            Powertrain::ParallelHybrid(_) => write!(f, "Parallel Hybrid"),
            Powertrain::SerialHybrid(_) => write!(f, "Serial Hybrid"),
            Powertrain::FullyElectric(_) => write!(f, "Fully Electric"),
            Powertrain::MultiEngine(p) => write!(f, "Multi-Engine ({} engines)", p.num_engines),
            Powertrain::DualMotorDep(p) => match p.cruise_architecture {
                CruiseArchitecture::ParallelHybrid => write!(f, "Dual Motor DEP (Parallel Hybrid)"),
                CruiseArchitecture::PureElectric => write!(f, "Dual Motor DEP (Pure Electric)"),
            },
        }
    }
}

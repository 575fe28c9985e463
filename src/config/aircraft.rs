use std::collections::BTreeMap;
use std::fs;

use serde::Deserialize;

use crate::config::config_errors::ConfigErrors;
use crate::models::aero::AerodynamicSpec;
use crate::models::dep::DepSystem;
use crate::models::profile::HybridizationProfile;
use crate::models::requirements::AircraftRequirements;
use crate::models::segment::SegmentKind;

/// Top-level view of `config.json`. Field names mirror the file; keys
/// that are not snake_case in the file are renamed here.
#[derive(Debug, Clone, Deserialize)]
pub struct AircraftConfig {
    pub mission_requirements: MissionRequirements,
    pub performance_requirements: PerformanceRequirements,
    pub aerodynamics: Aerodynamics,
    pub propulsion: Propulsion,
    pub hybrid_system: HybridSystem,
    pub weight_iteration: WeightIteration,
    #[serde(default)]
    pub dep_system: Option<DepSystemConfig>,
    #[serde(default)]
    pub hybridization_profile: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissionRequirements {
    pub payload_weight_lb: f64,
    pub design_range_nm: f64,
    pub cruise_speed_kts: f64,
    pub cruise_altitude_ft: f64,
    pub service_ceiling_ft: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceRequirements {
    pub stall_speed_requirement_kts: f64,
    pub balanced_field_length_ft: f64,
    pub landing_field_length_ft: f64,
    pub rate_of_climb_sea_level_fpm: f64,
    pub rate_of_climb_ceiling_fpm: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Aerodynamics {
    pub aspect_ratio: f64,
    pub oswald_efficiency: f64,
    pub zero_lift_drag_coefficient: f64,
    #[serde(rename = "CLmax_clean")]
    pub cl_max_clean: f64,
    #[serde(rename = "CLmax_takeoff")]
    pub cl_max_takeoff: f64,
    #[serde(rename = "CLmax_landing")]
    pub cl_max_landing: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Propulsion {
    pub number_of_engines: usize,
    pub propeller_efficiency: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HybridSystem {
    pub gas_turbine: GasTurbineConfig,
    pub electric_motor: MachineConfig,
    pub generator: MachineConfig,
    pub battery: BatteryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GasTurbineConfig {
    #[serde(rename = "specific_power_kW_kg")]
    pub specific_power_kw_kg: f64,
    pub efficiency: f64,
    #[serde(rename = "BSFC_kg_kWh")]
    pub bsfc_kg_kwh: f64,
}

/// Shared shape for the electric motor and generator blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    #[serde(rename = "specific_power_kW_kg")]
    pub specific_power_kw_kg: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatteryConfig {
    #[serde(rename = "specific_energy_Wh_kg")]
    pub specific_energy_wh_kg: f64,
    #[serde(rename = "specific_power_kW_kg")]
    pub specific_power_kw_kg: f64,
    #[serde(rename = "SOC_margin_percent")]
    pub soc_margin_percent: f64,
    pub depth_of_discharge_percent: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightIteration {
    #[serde(rename = "initial_TOGW_guess_lb")]
    pub initial_togw_guess_lb: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DepSystemConfig {
    pub enabled: bool,
    pub lift_augmentation_factor_max: f64,
    pub blown_span_fraction: f64,
    pub number_of_highlift_motors: usize,
    #[serde(rename = "motor_power_kW")]
    pub motor_power_kw: f64,
    pub use_for_wing_sizing: bool,
    #[serde(default)]
    pub highlift_motors: Option<HighliftMotorsConfig>,
    #[serde(default)]
    pub cruise_motors: Option<CruiseMotorsConfig>,
    #[serde(default)]
    pub power_architecture: Option<PowerArchitectureConfig>,
    #[serde(default)]
    pub wiring_and_controls: Option<WiringConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HighliftMotorsConfig {
    pub number_of_motors: usize,
    #[serde(rename = "power_per_motor_kW")]
    pub power_per_motor_kw: f64,
    pub weight_per_motor_lb: f64,
    pub efficiency: f64,
    pub active_phases: Vec<String>,
    pub folding: FoldingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoldingConfig {
    pub can_fold: bool,
    pub folded_drag_coefficient_increment: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CruiseMotorsConfig {
    pub number_of_motors: usize,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(rename = "specific_power_kW_kg")]
    pub specific_power_kw_kg: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerArchitectureConfig {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WiringConfig {
    pub wiring_weight_factor: f64,
    #[serde(rename = "controller_weight_per_kW")]
    pub controller_weight_per_kw: f64,
}

impl AircraftConfig {
    pub fn from_file(path: &str) -> Result<AircraftConfig, ConfigErrors> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Mission and field-performance requirements in one place.
    pub fn requirements(&self) -> AircraftRequirements {
        AircraftRequirements {
            payload_weight_lb: self.mission_requirements.payload_weight_lb,
            design_range_nm: self.mission_requirements.design_range_nm,
            cruise_speed_kts: self.mission_requirements.cruise_speed_kts,
            cruise_altitude_ft: self.mission_requirements.cruise_altitude_ft,
            service_ceiling_ft: self.mission_requirements.service_ceiling_ft,
            stall_speed_kts: self.performance_requirements.stall_speed_requirement_kts,
            balanced_field_length_ft: self.performance_requirements.balanced_field_length_ft,
            landing_field_length_ft: self.performance_requirements.landing_field_length_ft,
            rate_of_climb_sea_level_fpm: self
                .performance_requirements
                .rate_of_climb_sea_level_fpm,
            rate_of_climb_ceiling_fpm: self.performance_requirements.rate_of_climb_ceiling_fpm,
        }
    }

    pub fn aero(&self) -> AerodynamicSpec {
        AerodynamicSpec::new(
            self.aerodynamics.aspect_ratio,
            self.aerodynamics.oswald_efficiency,
            self.aerodynamics.zero_lift_drag_coefficient,
            self.aerodynamics.cl_max_clean,
            self.aerodynamics.cl_max_takeoff,
            self.aerodynamics.cl_max_landing,
        )
    }

    /// Blown-lift parameters for the mission model; absent section means
    /// the system is off.
    pub fn dep(&self) -> DepSystem {
        match &self.dep_system {
            Some(dep) => DepSystem {
                enabled: dep.enabled,
                lift_augmentation_factor_max: dep.lift_augmentation_factor_max,
                blown_span_fraction: dep.blown_span_fraction,
                number_of_highlift_motors: dep.number_of_highlift_motors,
                motor_power_kw: dep.motor_power_kw,
                use_for_wing_sizing: dep.use_for_wing_sizing,
            },
            None => DepSystem::disabled(),
        }
    }

    /// Per-segment hybridization from the optional profile section.
    /// The section's free-text `description` key is skipped; any other
    /// key must name a mission segment and carry a number.
    pub fn segment_profile(&self) -> Result<Option<HybridizationProfile>, ConfigErrors> {
        let section = match &self.hybridization_profile {
            Some(map) => map,
            None => return Ok(None),
        };

        let mut profile = HybridizationProfile::new();
        for (name, value) in section {
            if name == "description" {
                continue;
            }
            let kind = SegmentKind::from_name(name)
                .ok_or_else(|| ConfigErrors::UnknownSegment(name.clone()))?;
            let hp = value.as_f64().ok_or_else(|| {
                ConfigErrors::InvalidValue(
                    format!("hybridization_profile.{}", name),
                    value.to_string(),
                )
            })?;
            profile.set_hybridization(kind, hp);
        }
        Ok(Some(profile))
    }

    /// Architecture-specific presence checks, run before a powertrain is
    /// constructed so a bad file fails with the section name.
    pub fn validate_for_architecture(&self, architecture: &str) -> Result<(), ConfigErrors> {
        match architecture.to_ascii_lowercase().as_str() {
            "dual_motor_dep" => {
                let dep = self
                    .dep_system
                    .as_ref()
                    .ok_or_else(|| ConfigErrors::MissingSection("dep_system".to_string()))?;
                let blocks = [
                    ("highlift_motors", dep.highlift_motors.is_some()),
                    ("cruise_motors", dep.cruise_motors.is_some()),
                    ("power_architecture", dep.power_architecture.is_some()),
                    ("wiring_and_controls", dep.wiring_and_controls.is_some()),
                ];
                for (block, present) in blocks {
                    if !present {
                        return Err(ConfigErrors::MissingSection(format!("dep_system.{}", block)));
                    }
                }
                Ok(())
            }
            "multi_engine" => {
                if self.propulsion.number_of_engines < 2 {
                    return Err(ConfigErrors::InvalidValue(
                        "propulsion.number_of_engines".to_string(),
                        self.propulsion.number_of_engines.to_string(),
                    ));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

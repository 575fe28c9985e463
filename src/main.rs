use csv::Writer;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

use hesize::config::aircraft::AircraftConfig;
use hesize::models::result::SizingResult;
use hesize::sizing::HybridAircraft;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AircraftConfig::from_file("config.json")?;
    let max_iterations = config.weight_iteration.max_iterations;
    let tolerance = config.weight_iteration.tolerance;

    // (label, architecture, design hybridization, use the config profile)
    let cases: [(&str, &str, f64, bool); 7] = [
        ("Conventional", "conventional", 0.0, false),
        ("Parallel Hybrid", "parallel", 0.3, false),
        ("Parallel Hybrid (mission profile)", "parallel", 0.0, true),
        ("Serial Hybrid", "serial", 0.2, false),
        ("Fully Electric", "electric", 0.0, false),
        ("Multi-Engine Hybrid", "multi_engine", 0.3, false),
        ("Dual-Motor DEP", "dual_motor_dep", 0.3, false),
    ];

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("sizing_results.csv"))?;
    let mut writer = Writer::from_writer(file);
    writer.write_record([
        "Case",
        "Architecture",
        "Converged",
        "Iterations",
        "TOGW (lb)",
        "OEW (lb)",
        "Fuel (lb)",
        "Battery (lb)",
        "Wing Area (ft2)",
        "Wing Loading (psf)",
        "Shaft Power (kW)",
        "Governing Constraint",
        "Battery Capacity (kWh)",
        "Battery Peak (kW)",
        "C-Rate (1/hr)",
        "Battery Limit",
        "PREE (J/Wh)",
        "Mission Time (min)",
    ])?;

    for (label, architecture, hp_design, use_profile) in cases {
        let mut aircraft = HybridAircraft::new("eSTOL-19", &config);
        let profile = if use_profile {
            config.segment_profile()?
        } else {
            None
        };
        aircraft.set_powertrain(architecture, hp_design, profile)?;

        let result = aircraft.size_aircraft(max_iterations, tolerance, None)?;
        print_summary(label, &aircraft, &result);

        let architecture_name = match aircraft.powertrain() {
            Some(powertrain) => powertrain.to_string(),
            None => architecture.to_string(),
        };
        writer.write_record([
            label.to_string(),
            architecture_name,
            result.converged.to_string(),
            result.iterations.to_string(),
            format!("{:.1}", result.togw_lb),
            format!("{:.1}", result.oew_lb),
            format!("{:.1}", result.fuel_weight_lb),
            format!("{:.1}", result.battery_weight_lb),
            format!("{:.1}", result.wing_area_ft2),
            format!("{:.2}", result.wing_loading_psf),
            format!("{:.1}", result.required_power_kw),
            result.governing_power_constraint.to_string(),
            format!("{:.1}", result.battery.capacity_kwh),
            format!("{:.1}", result.battery.peak_power_kw),
            format!("{:.2}", result.battery.c_rate_per_hr),
            result.battery.constraint.to_string(),
            format!("{:.1}", result.pree),
            format!("{:.1}", result.mission_time_min),
        ])?;
    }

    writer.flush()?;
    println!("Sizing results have been written to output/sizing_results.csv");

    Ok(())
}

fn print_summary(label: &str, aircraft: &HybridAircraft, result: &SizingResult) {
    println!();
    println!("{:=<66}", "");
    println!("{}  ({})", label, aircraft.name);
    println!("{:=<66}", "");

    if let Some(powertrain) = aircraft.powertrain() {
        println!("Powertrain: {}", powertrain);
        println!(
            "  Turbine {:.0} kW / Motor {:.0} kW / Generator {:.0} kW",
            powertrain.turbine_rating_kw(),
            powertrain.motor_rating_kw(),
            powertrain.generator_rating_kw()
        );
    }

    if !result.converged {
        println!(
            "WARNING: weight loop did not converge in {} iterations; last iterate follows",
            result.iterations
        );
    } else {
        println!("Converged in {} iterations", result.iterations);
    }

    let constraint = aircraft.constraint_analysis(result.togw_lb);
    println!();
    println!("Constraint analysis at {:.0} lb:", result.togw_lb);
    println!(
        "  W/S design {:.2} psf (stall {:.2}, landing {:.2})",
        constraint.ws_design_psf, constraint.ws_stall_psf, constraint.ws_landing_psf
    );
    println!(
        "  Shaft power: takeoff {:.0}, OEI climb {:.0}, AEO climb {:.0}, ceiling {:.0}, cruise {:.0} kW",
        constraint.p_takeoff_kw,
        constraint.p_climb_oei_kw,
        constraint.p_climb_aeo_kw,
        constraint.p_ceiling_kw,
        constraint.p_cruise_kw
    );
    println!(
        "  Governing: {} at {:.0} kW (cruise L/D {:.1})",
        result.governing_power_constraint, result.required_power_kw, constraint.l_d_cruise
    );

    println!();
    println!("Weights:");
    println!("  Wing        {:>8.1} lb", result.weights.wing_lb);
    println!("  Fuselage    {:>8.1} lb", result.weights.fuselage_lb);
    println!("  Empennage   {:>8.1} lb", result.weights.empennage_lb);
    println!("  Gear        {:>8.1} lb", result.weights.landing_gear_lb);
    println!("  Propulsion  {:>8.1} lb", result.weights.propulsion_lb);
    println!("  Systems     {:>8.1} lb", result.weights.systems_lb);
    println!("  OEW         {:>8.1} lb", result.oew_lb);
    println!(
        "  Payload     {:>8.1} lb  ({:.1}% of TOGW)",
        result.payload_weight_lb,
        result.payload_fraction * 100.0
    );
    println!(
        "  Fuel        {:>8.1} lb  ({:.1}% of TOGW)",
        result.fuel_weight_lb,
        result.fuel_fraction * 100.0
    );
    println!(
        "  Battery     {:>8.1} lb  ({:.1}% of TOGW)",
        result.battery_weight_lb,
        result.battery_fraction * 100.0
    );
    println!(
        "  TOGW        {:>8.1} lb   (wing {:.1} ft2 at {:.2} psf)",
        result.togw_lb, result.wing_area_ft2, result.wing_loading_psf
    );

    if result.battery_weight_lb > 0.0 {
        println!();
        println!(
            "Battery: {:.1} kWh, peak {:.1} kW, C-rate {:.2}/hr (limit {:.2}/hr), {}-limited",
            result.battery.capacity_kwh,
            result.battery.peak_power_kw,
            result.battery.c_rate_per_hr,
            result.battery.c_rate_max_per_hr,
            result.battery.constraint
        );
        if let Some(kind) = result.battery.peak_segment {
            println!("  Peak draw during {}", kind);
        }
    }

    println!();
    println!("Mission ({:.1} min, PREE {:.1} J/Wh):", result.mission_time_min, result.pree);
    println!(
        "  {:<10} {:>9} {:>10} {:>13}",
        "segment", "time min", "fuel lb", "battery kWh"
    );
    for segment in &result.segments {
        println!(
            "  {:<10} {:>9.1} {:>10.1} {:>13.1}",
            segment.kind.to_string(),
            segment.duration_s / 60.0,
            segment.fuel_burned_lb,
            segment.battery_energy_wh / 1000.0
        );
    }
}

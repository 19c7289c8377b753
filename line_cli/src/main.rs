//! # Pylon CLI Application
//!
//! Interactive terminal front end for overhead line parameter calculation.
//! Walks through tower, conductor, bundle, and geometry selection, then
//! prints the calculated parameters as a formatted block and as JSON.

use std::io::{self, BufRead, Write};

use line_core::calculations::line::{calculate, LineInput};
use line_core::catalog::{
    CircuitCapacity, ConductorType, TowerType, CONDUCTOR_CATALOG, TOWER_CATALOG,
};
use line_core::geometry::{CircuitLayout, Phase, Point};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_u8(prompt: &str, default: u8) -> u8 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn select_tower() -> TowerType {
    println!("Available towers:");
    for (index, profile) in TOWER_CATALOG.iter().enumerate() {
        println!(
            "  {}) {:<32} {:>5.0} kV, up to {} per bundle",
            index + 1,
            profile.tower.display_name(),
            profile.voltage_kv,
            profile.max_conductors_per_bundle
        );
    }
    loop {
        match TowerType::from_str_flexible(&prompt_line("Select tower [1-3]: ")) {
            Ok(tower) => return tower,
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn select_conductor() -> ConductorType {
    println!("Available conductors:");
    for spec in CONDUCTOR_CATALOG.iter() {
        println!(
            "  {:<10} {:>7.3} mm  {:>6.3} Ω/km  {:>5.0} A",
            spec.conductor.display_name(),
            spec.diameter_mm,
            spec.resistance_ohm_per_km,
            spec.ampacity_a
        );
    }
    loop {
        match ConductorType::from_str_flexible(&prompt_line("Select conductor: ")) {
            Ok(conductor) => return conductor,
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn read_circuit(circuit_no: u8) -> CircuitLayout {
    println!();
    println!("Circuit {} phase coordinates (m):", circuit_no);
    let mut points = [Point::new(0.0, 0.0); 3];
    for (slot, phase) in Phase::ALL.iter().enumerate() {
        let x = prompt_f64(&format!("  Phase {} horizontal offset [0.0]: ", phase), 0.0);
        let y = prompt_f64(&format!("  Phase {} height [0.0]: ", phase), 0.0);
        points[slot] = Point::new(x, y);
    }
    CircuitLayout::new(points[0], points[1], points[2])
}

fn main() {
    println!("Pylon CLI - Overhead Line Parameter Calculator");
    println!("==============================================");
    println!();

    let label = {
        let entered = prompt_line("Line label [Line-1]: ");
        if entered.is_empty() {
            "Line-1".to_string()
        } else {
            entered
        }
    };
    println!();

    let tower = select_tower();
    let profile = tower.profile();
    println!();

    let conductor = select_conductor();
    println!();

    let conductors_per_bundle = prompt_u8("Conductors per bundle [1]: ", 1);
    let bundle_spacing_m = if conductors_per_bundle >= 2 {
        prompt_f64("Bundle spacing (cm) [45.0]: ", 45.0) / 100.0
    } else {
        0.0
    };

    let length_km = prompt_f64("Line length (km) [100.0]: ", 100.0);

    let circuit_count = match profile.circuits {
        CircuitCapacity::Single => 1,
        CircuitCapacity::SingleOrDouble => loop {
            let count = prompt_u8("Number of circuits (1-2) [1]: ", 1);
            if profile.circuits.permits(count as usize) {
                break count;
            }
            eprintln!("{} carries 1 or 2 circuits", tower.display_name());
        },
    };

    let circuits = (1..=circuit_count).map(read_circuit).collect();

    let input = LineInput {
        label,
        tower,
        conductor,
        conductors_per_bundle,
        bundle_spacing_m,
        length_km,
        circuits,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  LINE PARAMETER RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input: {}", input.label);
            println!("  Tower:     {} ({:.0} kV)", tower.display_name(), result.voltage_kv);
            println!("  Conductor: {} ({:.0} A)", conductor.display_name(), result.ampacity_a);
            if conductors_per_bundle >= 2 {
                println!(
                    "  Bundle:    {} conductors, {:.2} m spacing",
                    conductors_per_bundle, bundle_spacing_m
                );
            } else {
                println!("  Bundle:    single conductor");
            }
            println!("  Length:    {:.1} km", length_km);
            println!("  Circuits:  {}", result.circuit_count);
            println!();
            println!("{}", result);
            println!();
            println!("Geometry:");
            println!("  GMD = {:.5} m", result.gmd_m);
            println!("  GMR = {:.5} m", result.gmr_m);
            println!("  Req = {:.5} m", result.equivalent_radius_m);
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

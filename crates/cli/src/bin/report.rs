use std::path::PathBuf;

use clap::Parser;
use habitat_designer::calc::{compute_habitat_totals, compute_module_stats};
use habitat_designer::config::load_design;
use habitat_designer::model::Module;

/// Print per-module physical stats and habitat totals for a design file.
#[derive(Parser, Debug)]
#[command(author, version, about = "Habitat stats report")]
struct Cli {
    /// Design file (YAML/TOML/JSON) or directory of TOML module files
    #[arg(long)]
    design: PathBuf,

    /// Restrict the report to a single module id
    #[arg(long)]
    module: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let habitat = load_design(&cli.design)?;

    let modules: Vec<&Module> = match &cli.module {
        Some(id) => {
            let module = habitat
                .module(id)
                .ok_or_else(|| anyhow::anyhow!("module '{}' not found in design", id))?;
            vec![module]
        }
        None => habitat.modules.iter().collect(),
    };

    println!("=== Habitat Report ===");
    println!("Design  : {}", habitat.name);
    println!("Modules : {}", habitat.modules.len());

    for module in &modules {
        let calc = compute_module_stats(module);
        println!();
        println!("[{}] {}", module.id, module.name);
        println!(
            "  Shape    : {} ({})",
            module.shape_kind.name(),
            describe_dimensions(module)
        );
        println!("  Material : {}", module.material.name());
        println!(
            "  Volume   : {:.2} m³, surface {:.2} m²",
            calc.volume_m3, calc.surface_area_m2
        );
        println!(
            "  Mass     : {:.2} kg, power {:.2} kW, crew {}",
            calc.mass_kg, calc.power_requirement_kw, calc.crew_capacity
        );
        let safety = &module.safety_system;
        if safety.fire_suppression_active
            || safety.emergency_oxygen_units > 0
            || safety.emergency_exits > 0
            || safety.medical_bays > 0
            || safety.airlocks > 0
        {
            println!(
                "  Safety   : fire suppression {}, O₂ units {}, exits {}, med bays {}, airlocks {}",
                if safety.fire_suppression_active {
                    "active"
                } else {
                    "inactive"
                },
                safety.emergency_oxygen_units,
                safety.emergency_exits,
                safety.medical_bays,
                safety.airlocks
            );
        }
    }

    if cli.module.is_none() {
        let totals = compute_habitat_totals(&habitat.modules);
        println!();
        println!("=== Habitat Totals ===");
        println!("Volume  : {:.2} m³", totals.volume_m3);
        println!("Surface : {:.2} m²", totals.surface_area_m2);
        println!("Mass    : {:.2} kg", totals.mass_kg);
        println!("Power   : {:.2} kW", totals.power_requirement_kw);
        println!("Crew    : {}", totals.crew_capacity);
    }

    Ok(())
}

fn describe_dimensions(module: &Module) -> String {
    let dims = &module.dimensions;
    let mut parts = Vec::new();
    if let Some(r) = dims.radius {
        parts.push(format!("r={r} m"));
    }
    if let Some(h) = dims.height {
        parts.push(format!("h={h} m"));
    }
    if let Some(w) = dims.width {
        parts.push(format!("w={w} m"));
    }
    if let Some(l) = dims.length {
        parts.push(format!("l={l} m"));
    }
    if let Some(d) = dims.depth {
        parts.push(format!("d={d} m"));
    }
    if parts.is_empty() {
        "catalog defaults".to_string()
    } else {
        parts.join(", ")
    }
}

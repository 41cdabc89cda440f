//! Closed-form shape geometry and the derived-quantity heuristics.
//!
//! Everything here is a pure function of the module value: no I/O, no hidden
//! state, bounded O(1) work per module. Callers may invoke these on every
//! read; results for an unchanged module are bit-identical across calls.

use std::f64::consts::PI;

use habitat_core::constants::{POWER_KW_PER_M3, VOLUME_PER_CREW_M3, defaults};
use habitat_core::units::round2;
use habitat_model::{Module, ShapeKind};

/// Derived physical quantities for one module or a whole habitat.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModuleCalculations {
    pub volume_m3: f64,
    pub surface_area_m2: f64,
    /// Shell mass: surface area × wall thickness × density, not solid volume.
    pub mass_kg: f64,
    /// Whole persons; negative when negative dimensions propagate through.
    pub crew_capacity: i64,
    pub power_requirement_kw: f64,
}

/// Compute derived stats from a module's shape, dimensions, and material.
///
/// Absent dimension fields fall back to per-shape defaults field by field.
/// An unrecognized shape yields zero geometry rather than an error, and
/// dimension values are not validated: negative inputs propagate into
/// negative volumes and masses.
pub fn compute_module_stats(module: &Module) -> ModuleCalculations {
    let (volume, surface_area) = shape_geometry(module);
    let props = module.material.properties();

    let mass = surface_area * props.wall_thickness_m * props.density_kg_m3;
    // Crew and power heuristics consume the unrounded volume.
    let crew_capacity = (volume / VOLUME_PER_CREW_M3).floor() as i64;
    let power_requirement = volume * POWER_KW_PER_M3;

    ModuleCalculations {
        volume_m3: round2(volume),
        surface_area_m2: round2(surface_area),
        mass_kg: round2(mass),
        crew_capacity,
        power_requirement_kw: round2(power_requirement),
    }
}

/// Sum per-module stats across a habitat. Order-insensitive; an empty slice
/// yields all zeroes.
///
/// Crew capacity adds the already-floored per-module integers, never
/// floor-of-summed-volume; the two disagree whenever per-module volumes are
/// not multiples of ten. Component values were rounded per module and the
/// sums are not re-rounded.
pub fn compute_habitat_totals(modules: &[Module]) -> ModuleCalculations {
    modules
        .iter()
        .fold(ModuleCalculations::default(), |total, module| {
            let calc = compute_module_stats(module);
            ModuleCalculations {
                volume_m3: total.volume_m3 + calc.volume_m3,
                surface_area_m2: total.surface_area_m2 + calc.surface_area_m2,
                mass_kg: total.mass_kg + calc.mass_kg,
                crew_capacity: total.crew_capacity + calc.crew_capacity,
                power_requirement_kw: total.power_requirement_kw + calc.power_requirement_kw,
            }
        })
}

fn shape_geometry(module: &Module) -> (f64, f64) {
    let dims = &module.dimensions;
    match module.shape_kind {
        ShapeKind::Cylinder => {
            let r = dims.radius.unwrap_or(defaults::CYLINDER_RADIUS_M);
            let h = dims.height.unwrap_or(defaults::CYLINDER_HEIGHT_M);
            closed_cylinder(r, h)
        }
        // Connectors keep the closed-cylinder area, both end caps included,
        // even though a passageway is nominally open-ended.
        ShapeKind::Connector => {
            let r = dims.radius.unwrap_or(defaults::CONNECTOR_RADIUS_M);
            let h = dims.height.unwrap_or(defaults::CONNECTOR_HEIGHT_M);
            closed_cylinder(r, h)
        }
        // Hemisphere: curved surface only, no base disk.
        ShapeKind::Dome => {
            let r = dims.radius.unwrap_or(defaults::DOME_RADIUS_M);
            ((2.0 / 3.0) * PI * r * r * r, 2.0 * PI * r * r)
        }
        ShapeKind::Cube => {
            let w = dims.width.unwrap_or(defaults::CUBE_EDGE_M);
            let l = dims.length.unwrap_or(defaults::CUBE_EDGE_M);
            let d = dims.depth.unwrap_or(defaults::CUBE_EDGE_M);
            (w * l * d, 2.0 * (w * l + l * d + w * d))
        }
        ShapeKind::Unrecognized => (0.0, 0.0),
    }
}

/// Right circular cylinder: volume and lateral-plus-caps surface area.
fn closed_cylinder(r: f64, h: f64) -> (f64, f64) {
    (PI * r * r * h, 2.0 * PI * r * h + 2.0 * PI * r * r)
}

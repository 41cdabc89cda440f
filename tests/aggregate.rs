use habitat_designer::calc::{ModuleCalculations, compute_habitat_totals, compute_module_stats};
use habitat_designer::core::vector::Vec3;
use habitat_designer::materials::Material;
use habitat_designer::model::{
    Dimensions, Module, SafetySystem, ShapeKind, TemperatureRange,
};

fn cube(id: &str, width: f64, length: f64, depth: f64) -> Module {
    Module {
        id: id.to_string(),
        name: format!("Cube {id}"),
        shape_kind: ShapeKind::Cube,
        dimensions: Dimensions {
            width: Some(width),
            length: Some(length),
            depth: Some(depth),
            ..Dimensions::default()
        },
        material: Material::Aluminum,
        position: Vec3::ZERO,
        rotation: 0.0,
        temperature_range: TemperatureRange::default(),
        interior_elements: Vec::new(),
        safety_system: SafetySystem::default(),
    }
}

#[test]
fn empty_habitat_totals_are_all_zero() {
    let totals = compute_habitat_totals(&[]);
    assert_eq!(totals, ModuleCalculations::default());
}

#[test]
fn crew_capacity_sums_per_module_floors() {
    // 49 m³ floors to 4 crew and 51 m³ floors to 5; summing the floors gives
    // 9 where flooring the combined 100 m³ would give 10.
    let a = cube("a", 7.0, 7.0, 1.0);
    let b = cube("b", 51.0, 1.0, 1.0);
    assert_eq!(compute_module_stats(&a).crew_capacity, 4);
    assert_eq!(compute_module_stats(&b).crew_capacity, 5);

    let totals = compute_habitat_totals(&[a, b]);
    assert_eq!(totals.crew_capacity, 9);
    assert_eq!(totals.volume_m3, 100.0);
}

#[test]
fn totals_are_field_wise_sums_and_order_insensitive() {
    let a = cube("a", 2.0, 3.0, 4.0);
    let b = cube("b", 1.5, 1.5, 5.0);

    let calc_a = compute_module_stats(&a);
    let calc_b = compute_module_stats(&b);
    let forward = compute_habitat_totals(&[a.clone(), b.clone()]);
    let reverse = compute_habitat_totals(&[b, a]);

    assert_eq!(forward.volume_m3, calc_a.volume_m3 + calc_b.volume_m3);
    assert_eq!(
        forward.surface_area_m2,
        calc_a.surface_area_m2 + calc_b.surface_area_m2
    );
    assert_eq!(forward.mass_kg, calc_a.mass_kg + calc_b.mass_kg);
    assert_eq!(
        forward.power_requirement_kw,
        calc_a.power_requirement_kw + calc_b.power_requirement_kw
    );
    assert_eq!(forward, reverse);
}

#[test]
fn single_module_totals_match_the_module() {
    let a = cube("solo", 3.0, 3.0, 3.0);
    let calc = compute_module_stats(&a);
    let totals = compute_habitat_totals(std::slice::from_ref(&a));
    assert_eq!(totals, calc);
}

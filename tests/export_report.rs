use habitat_designer::calc::{compute_habitat_totals, compute_module_stats};
use habitat_designer::core::vector::Vec3;
use habitat_designer::export::report;
use habitat_designer::materials::Material;
use habitat_designer::model::{
    Dimensions, Module, SafetySystem, ShapeKind, TemperatureRange,
};

fn named_cube(id: &str, name: &str) -> Module {
    Module {
        id: id.to_string(),
        name: name.to_string(),
        shape_kind: ShapeKind::Cube,
        dimensions: Dimensions {
            width: Some(3.0),
            length: Some(3.0),
            depth: Some(3.0),
            ..Dimensions::default()
        },
        material: Material::Composite,
        position: Vec3::ZERO,
        rotation: 0.0,
        temperature_range: TemperatureRange::default(),
        interior_elements: Vec::new(),
        safety_system: SafetySystem::default(),
    }
}

fn render_csv(modules: &[Module]) -> String {
    let mut buffer: Vec<u8> = Vec::new();
    report::write_header(&mut buffer).expect("header");
    for module in modules {
        let calc = compute_module_stats(module);
        report::write_row(&mut buffer, module, &calc).expect("row");
    }
    let totals = compute_habitat_totals(modules);
    report::write_totals(&mut buffer, &totals).expect("totals");
    String::from_utf8(buffer).expect("utf-8 csv")
}

#[test]
fn rows_follow_the_standard_header_ordering() {
    let csv = render_csv(&[named_cube("lab-1", "Laboratory")]);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "module_id,name,shape,material,volume_m3,surface_area_m2,mass_kg,crew_capacity,power_kw"
        )
    );
    assert_eq!(
        lines.next(),
        Some("lab-1,Laboratory,cube,composite,27.00,54.00,345.60,2,13.50")
    );
    assert_eq!(lines.next(), Some("TOTAL,,,,27.00,54.00,345.60,2,13.50"));
}

#[test]
fn names_with_commas_are_quoted_to_keep_the_column_layout() {
    let csv = render_csv(&[named_cube("lab-2", "Laboratory, West Wing")]);
    let row = csv.lines().nth(1).expect("module row");
    assert!(row.starts_with("lab-2,\"Laboratory, West Wing\",cube,"));
    // Column count is unchanged once the quoted field is accounted for.
    assert_eq!(row.matches(',').count(), 9);
}

#[test]
fn embedded_quotes_are_doubled() {
    let csv = render_csv(&[named_cube("lab-3", "The \"Annex\"")]);
    let row = csv.lines().nth(1).expect("module row");
    assert!(row.starts_with("lab-3,\"The \"\"Annex\"\"\","));
}

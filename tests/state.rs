use habitat_designer::core::vector::Vec3;
use habitat_designer::materials::Material;
use habitat_designer::model::{InteriorElement, InteriorElementType, ShapeKind};
use habitat_designer::state::{
    AppState, DimensionField, ViewMode, apply_interior_element, module_id_for_millis, new_module,
    parse_dimension, set_dimension,
};

fn element(id: &str, kind: InteriorElementType) -> InteriorElement {
    InteriorElement {
        id: id.to_string(),
        kind,
        position: Vec3::ZERO,
        rotation: 0.0,
        scale: None,
    }
}

#[test]
fn new_modules_carry_shape_defaults() {
    let cylinder = new_module(ShapeKind::Cylinder, "m1");
    assert_eq!(cylinder.name, "Cylinder Module");
    assert_eq!(cylinder.dimensions.radius, Some(2.0));
    assert_eq!(cylinder.dimensions.height, Some(4.0));
    assert_eq!(cylinder.material, Material::Aluminum);
    assert_eq!(cylinder.temperature_range.min, 18.0);
    assert_eq!(cylinder.temperature_range.max, 24.0);
    assert!(cylinder.interior_elements.is_empty());

    let dome = new_module(ShapeKind::Dome, "m2");
    assert_eq!(dome.dimensions.radius, Some(3.0));
    assert_eq!(dome.dimensions.height, None);

    let connector = new_module(ShapeKind::Connector, "m3");
    assert_eq!(connector.dimensions.radius, Some(1.0));
    assert_eq!(connector.dimensions.height, Some(2.0));
}

#[test]
fn add_module_appends_and_selects() {
    let state = AppState::new().add_module(ShapeKind::Cube, "cube-1");
    assert_eq!(state.habitat.modules.len(), 1);
    assert_eq!(state.selected_module_id.as_deref(), Some("cube-1"));
    assert_eq!(state.selected_module().unwrap().name, "Cube Module");

    let state = state.add_module(ShapeKind::Dome, "dome-1");
    assert_eq!(state.habitat.modules.len(), 2);
    assert_eq!(state.selected_module_id.as_deref(), Some("dome-1"));
    // Display order is insertion order.
    assert_eq!(state.habitat.modules[0].id, "cube-1");
}

#[test]
fn replace_module_swaps_whole_record_by_id() {
    let state = AppState::new().add_module(ShapeKind::Cylinder, "c1");
    let edited = set_dimension(&state.habitat.modules[0], DimensionField::Radius, 5.0);
    let state = state.replace_module(edited);
    assert_eq!(state.habitat.modules[0].dimensions.radius, Some(5.0));

    // Unknown id leaves the state unchanged.
    let stray = new_module(ShapeKind::Dome, "missing");
    let unchanged = state.replace_module(stray);
    assert_eq!(unchanged, state);
}

#[test]
fn clear_habitat_resets_modules_and_selection() {
    let state = AppState::new()
        .add_module(ShapeKind::Cylinder, "c1")
        .set_view_mode(ViewMode::Navigation)
        .clear_habitat();
    assert!(state.habitat.modules.is_empty());
    assert_eq!(state.selected_module_id, None);
    // The view surface survives a reset.
    assert_eq!(state.view_mode, ViewMode::Navigation);
}

#[test]
fn stale_selection_resolves_to_none() {
    let state = AppState::new()
        .add_module(ShapeKind::Cube, "c1")
        .select_module(Some("gone".to_string()));
    assert!(state.selected_module().is_none());
}

#[test]
fn fixture_reducer_updates_safety_counters() {
    let module = new_module(ShapeKind::Cylinder, "c1");

    let module = apply_interior_element(&module, element("e1", InteriorElementType::OxygenTank));
    let module = apply_interior_element(&module, element("e2", InteriorElementType::OxygenTank));
    let module = apply_interior_element(
        &module,
        element("e3", InteriorElementType::FireExtinguisher),
    );
    let module = apply_interior_element(&module, element("e4", InteriorElementType::EmergencyExit));
    let module = apply_interior_element(&module, element("e5", InteriorElementType::MedicalBay));
    let module = apply_interior_element(&module, element("e6", InteriorElementType::Airlock));
    // Furniture never touches the counters.
    let module = apply_interior_element(&module, element("e7", InteriorElementType::SleepingPod));

    assert_eq!(module.interior_elements.len(), 7);
    let safety = module.safety_system;
    assert!(safety.fire_suppression_active);
    assert_eq!(safety.emergency_oxygen_units, 2);
    assert_eq!(safety.emergency_exits, 1);
    assert_eq!(safety.medical_bays, 1);
    assert_eq!(safety.airlocks, 1);
}

#[test]
fn dimension_edits_parse_to_zero_on_bad_input() {
    assert_eq!(parse_dimension("2.5"), 2.5);
    assert_eq!(parse_dimension("  7 "), 7.0);
    assert_eq!(parse_dimension("abc"), 0.0);
    assert_eq!(parse_dimension(""), 0.0);

    let module = new_module(ShapeKind::Cube, "c1");
    let module = set_dimension(&module, DimensionField::Width, parse_dimension("oops"));
    assert_eq!(module.dimensions.width, Some(0.0));
}

#[test]
fn module_ids_embed_the_creation_timestamp() {
    assert_eq!(module_id_for_millis(1700000000000), "module-1700000000000");
}

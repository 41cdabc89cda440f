//! Editor application state modeled as an explicit, immutably-replaced value.
//!
//! Every transition returns a new `AppState` (or `Module`) rather than
//! mutating in place, so front-ends can diff, cache, or test state changes
//! without a rendering surface in the loop. The fixture reducer that keeps
//! safety counters in step with placed equipment lives here too, instead of
//! being scattered across view callbacks.

use habitat_core::vector::Vec3;
use habitat_materials::Material;
use habitat_model::{
    Dimensions, Habitat, InteriorElement, InteriorElementType, Module, SafetySystem, ShapeKind,
    TemperatureRange,
};

/// Editor view surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Top,
    Front,
    TwoD,
    ThreeD,
    Interior,
    Navigation,
}

/// The authoritative editor state: module list, selection, and view mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub habitat: Habitat,
    pub selected_module_id: Option<String>,
    pub view_mode: ViewMode,
}

impl AppState {
    /// Empty habitat, no selection, top-down view.
    pub fn new() -> Self {
        AppState::default()
    }

    /// Append a freshly created module of the given shape and select it.
    pub fn add_module(&self, shape_kind: ShapeKind, id: impl Into<String>) -> AppState {
        let module = new_module(shape_kind, id);
        let mut modules = self.habitat.modules.clone();
        let selected = Some(module.id.clone());
        modules.push(module);
        AppState {
            habitat: Habitat {
                name: self.habitat.name.clone(),
                modules,
            },
            selected_module_id: selected,
            view_mode: self.view_mode,
        }
    }

    /// Whole-record replacement of the module with a matching id. An unknown
    /// id leaves the state unchanged.
    pub fn replace_module(&self, updated: Module) -> AppState {
        let modules = self
            .habitat
            .modules
            .iter()
            .map(|m| {
                if m.id == updated.id {
                    updated.clone()
                } else {
                    m.clone()
                }
            })
            .collect();
        AppState {
            habitat: Habitat {
                name: self.habitat.name.clone(),
                modules,
            },
            selected_module_id: self.selected_module_id.clone(),
            view_mode: self.view_mode,
        }
    }

    /// "New habitat" reset: empties the module list and the selection.
    pub fn clear_habitat(&self) -> AppState {
        AppState {
            habitat: Habitat::default(),
            selected_module_id: None,
            view_mode: self.view_mode,
        }
    }

    /// Change the selection; `None` deselects.
    pub fn select_module(&self, id: Option<String>) -> AppState {
        AppState {
            habitat: self.habitat.clone(),
            selected_module_id: id,
            view_mode: self.view_mode,
        }
    }

    /// Switch the active view surface.
    pub fn set_view_mode(&self, view_mode: ViewMode) -> AppState {
        AppState {
            habitat: self.habitat.clone(),
            selected_module_id: self.selected_module_id.clone(),
            view_mode,
        }
    }

    /// The currently selected module, if the selection still resolves.
    pub fn selected_module(&self) -> Option<&Module> {
        self.selected_module_id
            .as_deref()
            .and_then(|id| self.habitat.module(id))
    }
}

/// Create a module with its shape's catalog dimensions, aluminum hull, and a
/// shirt-sleeve temperature band, placed at the frame origin.
pub fn new_module(shape_kind: ShapeKind, id: impl Into<String>) -> Module {
    Module {
        id: id.into(),
        name: format!("{} Module", shape_kind.label()),
        shape_kind,
        dimensions: default_dimensions(shape_kind),
        material: Material::Aluminum,
        position: Vec3::ZERO,
        rotation: 0.0,
        temperature_range: TemperatureRange::default(),
        interior_elements: Vec::new(),
        safety_system: SafetySystem::default(),
    }
}

/// Module id derived from a creation timestamp, matching exported designs.
pub fn module_id_for_millis(timestamp_millis: i64) -> String {
    format!("module-{timestamp_millis}")
}

fn default_dimensions(shape_kind: ShapeKind) -> Dimensions {
    use habitat_core::constants::defaults;

    match shape_kind {
        ShapeKind::Cylinder => Dimensions {
            radius: Some(defaults::CYLINDER_RADIUS_M),
            height: Some(defaults::CYLINDER_HEIGHT_M),
            ..Dimensions::default()
        },
        ShapeKind::Dome => Dimensions {
            radius: Some(defaults::DOME_RADIUS_M),
            ..Dimensions::default()
        },
        ShapeKind::Cube => Dimensions {
            width: Some(defaults::CUBE_EDGE_M),
            length: Some(defaults::CUBE_EDGE_M),
            depth: Some(defaults::CUBE_EDGE_M),
            ..Dimensions::default()
        },
        ShapeKind::Connector | ShapeKind::Unrecognized => Dimensions {
            radius: Some(defaults::CONNECTOR_RADIUS_M),
            height: Some(defaults::CONNECTOR_HEIGHT_M),
            ..Dimensions::default()
        },
    }
}

/// Append a fixture to a module and update its safety counters in one step.
///
/// Safety bookkeeping: a fire extinguisher arms fire suppression; oxygen
/// tanks, emergency exits, medical bays, and airlocks each bump their
/// counter. Other fixture types leave the counters untouched.
pub fn apply_interior_element(module: &Module, element: InteriorElement) -> Module {
    let mut safety = module.safety_system;
    match element.kind {
        InteriorElementType::FireExtinguisher => safety.fire_suppression_active = true,
        InteriorElementType::OxygenTank => safety.emergency_oxygen_units += 1,
        InteriorElementType::EmergencyExit => safety.emergency_exits += 1,
        InteriorElementType::MedicalBay => safety.medical_bays += 1,
        InteriorElementType::Airlock => safety.airlocks += 1,
        _ => {}
    }

    let mut interior_elements = module.interior_elements.clone();
    interior_elements.push(element);

    Module {
        interior_elements,
        safety_system: safety,
        ..module.clone()
    }
}

/// Dimension fields editable from a properties form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Radius,
    Height,
    Width,
    Length,
    Depth,
}

/// Parse a user-entered dimension, degrading to zero on malformed input
/// rather than rejecting the edit.
pub fn parse_dimension(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Replace one dimension field, returning the updated module record.
pub fn set_dimension(module: &Module, field: DimensionField, value: f64) -> Module {
    let mut dimensions = module.dimensions;
    match field {
        DimensionField::Radius => dimensions.radius = Some(value),
        DimensionField::Height => dimensions.height = Some(value),
        DimensionField::Width => dimensions.width = Some(value),
        DimensionField::Length => dimensions.length = Some(value),
        DimensionField::Depth => dimensions.depth = Some(value),
    }
    Module {
        dimensions,
        ..module.clone()
    }
}

//! Data model for habitat designs.
//!
//! Wire names follow the established interchange format: modules serialize with
//! `shapeKind`, `temperatureRange`, `interiorElements`, and `safetySystem`
//! keys so exported designs stay readable by existing tooling.

use habitat_core::vector::Vec3;
use habitat_materials::Material;
use serde::{Deserialize, Serialize};

/// Parametric shape of a habitat module. Fixed at creation; decides which
/// dimension fields are meaningful and which geometry formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    Cylinder,
    Dome,
    Cube,
    Connector,
    /// Shape strings outside the catalog. Deserialization never fails on
    /// these; the calculator treats them as zero geometry.
    #[serde(other)]
    Unrecognized,
}

impl ShapeKind {
    /// Wire/display name, matching the serialized kebab-case form.
    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Dome => "dome",
            ShapeKind::Cube => "cube",
            ShapeKind::Connector => "connector",
            ShapeKind::Unrecognized => "unrecognized",
        }
    }

    /// Capitalized label used for default module names.
    pub const fn label(self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Dome => "Dome",
            ShapeKind::Cube => "Cube",
            ShapeKind::Connector => "Connector",
            ShapeKind::Unrecognized => "Unknown",
        }
    }
}

/// Sparse dimension fields (m). Which subset is populated depends on the
/// shape; absent fields fall back to per-shape defaults at calculation time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

/// Target interior temperature band (°C). Descriptive metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl Default for TemperatureRange {
    /// Shirt-sleeve band applied to newly created modules.
    fn default() -> Self {
        TemperatureRange {
            min: 18.0,
            max: 24.0,
        }
    }
}

/// Fixture types placeable inside a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteriorElementType {
    SleepingPod,
    Galley,
    Workstation,
    Airlock,
    MedicalBay,
    Storage,
    Handrail,
    FireExtinguisher,
    EmergencyExit,
    OxygenTank,
}

/// One placed interior fixture, positioned in module-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteriorElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteriorElementType,
    pub position: Vec3,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Per-module tally of emergency equipment. Maintained by the state layer's
/// fixture reducer, never derived by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafetySystem {
    pub fire_suppression_active: bool,
    pub emergency_oxygen_units: u32,
    pub emergency_exits: u32,
    pub medical_bays: u32,
    pub airlocks: u32,
}

/// One habitat building block. Edits replace the whole record; nothing
/// mutates a stored module in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub name: String,
    pub shape_kind: ShapeKind,
    #[serde(default)]
    pub dimensions: Dimensions,
    pub material: Material,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub temperature_range: TemperatureRange,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interior_elements: Vec<InteriorElement>,
    #[serde(default)]
    pub safety_system: SafetySystem,
}

/// An ordered collection of modules making up one design. Order is display
/// and navigation order; adjacency in the list implies the connecting
/// pathways shown by the navigation view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Habitat {
    pub name: String,
    pub modules: Vec<Module>,
}

impl Habitat {
    /// Look up a module by id.
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }
}

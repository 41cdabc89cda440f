//! Hull material catalog and per-material physical properties.

use serde::{Deserialize, Serialize};

/// Hull materials available to habitat modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    Aluminum,
    Titanium,
    Composite,
    CarbonFiber,
}

/// Immutable physical properties of one hull material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperties {
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Pressure-shell wall thickness (m).
    pub wall_thickness_m: f64,
    /// Thermal conductivity (W/m·K). Descriptive only; no formula consumes it.
    pub thermal_conductivity_w_mk: f64,
}

impl Material {
    /// Every catalog entry, in display order.
    pub const ALL: [Material; 4] = [
        Material::Aluminum,
        Material::Titanium,
        Material::Composite,
        Material::CarbonFiber,
    ];

    /// Property-table lookup. Total: every material has an entry, no error path.
    pub const fn properties(self) -> MaterialProperties {
        match self {
            Material::Aluminum => MaterialProperties {
                density_kg_m3: 2700.0,
                wall_thickness_m: 0.005,
                thermal_conductivity_w_mk: 237.0,
            },
            Material::Titanium => MaterialProperties {
                density_kg_m3: 4500.0,
                wall_thickness_m: 0.003,
                thermal_conductivity_w_mk: 21.9,
            },
            Material::Composite => MaterialProperties {
                density_kg_m3: 1600.0,
                wall_thickness_m: 0.004,
                thermal_conductivity_w_mk: 0.5,
            },
            Material::CarbonFiber => MaterialProperties {
                density_kg_m3: 1800.0,
                wall_thickness_m: 0.002,
                thermal_conductivity_w_mk: 70.0,
            },
        }
    }

    /// Wire/display name, matching the serialized kebab-case form.
    pub const fn name(self) -> &'static str {
        match self {
            Material::Aluminum => "aluminum",
            Material::Titanium => "titanium",
            Material::Composite => "composite",
            Material::CarbonFiber => "carbon-fiber",
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::Aluminum
    }
}

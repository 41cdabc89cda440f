//! Core constants, rounding helpers, and placement primitives shared across
//! the habitat designer workspace.

/// Sizing heuristics and per-shape fallback dimensions (SI units).
pub mod constants {
    /// Pressurized volume allotted per crew member (m³).
    pub const VOLUME_PER_CREW_M3: f64 = 10.0;
    /// Power draw per pressurized cubic metre (kW/m³).
    pub const POWER_KW_PER_M3: f64 = 0.5;

    /// Fallback dimensions applied field by field when a module leaves one unset (m).
    pub mod defaults {
        pub const CYLINDER_RADIUS_M: f64 = 2.0;
        pub const CYLINDER_HEIGHT_M: f64 = 4.0;
        pub const DOME_RADIUS_M: f64 = 3.0;
        pub const CUBE_EDGE_M: f64 = 3.0;
        pub const CONNECTOR_RADIUS_M: f64 = 1.0;
        pub const CONNECTOR_HEIGHT_M: f64 = 2.0;
    }
}

/// Rounding helpers for reported quantities.
pub mod units {
    /// Round to two decimal places on the scaled integer, half away from zero.
    #[inline]
    pub fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }
}

/// Minimal placement primitives to avoid ad-hoc coordinate tuples everywhere.
pub mod vector {
    use serde::{Deserialize, Serialize};

    /// Position or local offset in the habitat coordinate frame (m).
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Vec3 {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    impl Vec3 {
        /// Origin of the habitat frame.
        pub const ZERO: Vec3 = Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };

        #[inline]
        pub fn new(x: f64, y: f64, z: f64) -> Self {
            Vec3 { x, y, z }
        }
    }
}

//! Habitat designer calculation library.
//!
//! The pure calculation engine, data model, and state layer live in member
//! crates; keeping them behind one facade library lets multiple front-ends
//! (CLI, GUI, web) share the same logic.

pub use habitat_calc as calc;
pub use habitat_config as config;
pub use habitat_core as core;
pub use habitat_export as export;
pub use habitat_materials as materials;
pub use habitat_model as model;
pub use habitat_state as state;

/// Version of the facade library, for smoke tests and diagnostics.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

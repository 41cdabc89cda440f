//! Pure calculation engine mapping module geometry and material into derived
//! physical quantities, plus the habitat-wide aggregator.

pub mod stats;

pub use stats::{ModuleCalculations, compute_habitat_totals, compute_module_stats};

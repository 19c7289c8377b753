//! # Equipment Catalog
//!
//! Conductor and tower definitions with property lookups for overhead line
//! calculation. Conductor entries carry manufacturer data sheet values; tower
//! profiles carry the admissible phase placement ranges enforced during
//! validation.
//!
//! ## Example
//!
//! ```rust
//! use line_core::catalog::{ConductorType, TowerType};
//!
//! let drake = ConductorType::Drake.spec();
//! assert_eq!(drake.gmr_mm, 11.369);
//!
//! let tower = TowerType::SingleCircuitDelta.profile();
//! assert_eq!(tower.voltage_kv, 400.0);
//! ```

pub mod conductors;
pub mod towers;

// Re-export conductor types
pub use conductors::{ConductorSpec, ConductorType, CONDUCTOR_CATALOG};

// Re-export tower types
pub use towers::{
    CircuitCapacity, OffsetLimits, OffsetWindow, TowerProfile, TowerType, TOWER_CATALOG,
};

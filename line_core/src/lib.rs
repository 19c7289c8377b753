//! # line_core - Overhead Line Parameter Calculation Engine
//!
//! `line_core` is the computational heart of Pylon, turning a transmission
//! line's tower geometry, conductor choice, and route length into its series
//! resistance, series inductance, shunt capacitance, and MVA capacity. All
//! inputs and outputs are JSON-serializable, so the engine drops into any
//! host that can shuttle JSON.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Validated Up Front**: Geometry is checked against the tower profile
//!   before any formula runs
//!
//! ## Quick Start
//!
//! ```rust
//! use line_core::calculations::line::{calculate, LineInput};
//! use line_core::catalog::{ConductorType, TowerType};
//! use line_core::geometry::{CircuitLayout, Point};
//!
//! let input = LineInput {
//!     label: "Feeder North".to_string(),
//!     tower: TowerType::SingleCircuitDelta,
//!     conductor: ConductorType::Drake,
//!     conductors_per_bundle: 2,
//!     bundle_spacing_m: 0.45,
//!     length_km: 120.0,
//!     circuits: vec![CircuitLayout::new(
//!         Point::new(-10.0, 40.0),
//!         Point::new(0.0, 41.0),
//!         Point::new(10.0, 40.0),
//!     )],
//! };
//!
//! let result = calculate(&input).unwrap();
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bundle, spacing, and line parameter stages
//! - [`catalog`] - Conductor data sheets and tower placement profiles
//! - [`constraints`] - Tower constraint and uniqueness validation
//! - [`geometry`] - Cross-section points, phases, and geometric means
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod constraints;
pub mod errors;
pub mod geometry;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, LineInput, LineParameters};
pub use catalog::{ConductorType, TowerType};
pub use errors::{LineError, LineResult};
pub use geometry::{CircuitLayout, Phase, Point};

//! # Line Parameter Calculations
//!
//! Calculation stages for a three-phase overhead line, composed bottom-up:
//!
//! - [`bundle`] - Reduce a 1-4 sub-conductor bundle to one equivalent
//!   geometric value
//! - [`spacing`] - Transposition-averaged phase spacing (GMD) and combined
//!   double-circuit equivalents
//! - [`line`] - The full request: validation, then resistance, inductance,
//!   capacitance, and MVA capacity
//!
//! The top-level stage follows the pattern used throughout the crate:
//!
//! - `LineInput` - Input parameters (JSON-serializable)
//! - `LineParameters` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<LineParameters, LineError>` - Pure function

pub mod bundle;
pub mod line;
pub mod spacing;

// Re-export commonly used types
pub use bundle::bundle_equivalent;
pub use line::{calculate, LineInput, LineParameters};
pub use spacing::{double_circuit_equivalent, double_circuit_gmd, single_circuit_gmd};

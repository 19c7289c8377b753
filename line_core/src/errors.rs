//! # Error Types
//!
//! Structured error types for line_core. Every failure is a pure function of
//! the request: validation errors are recoverable by correcting the input,
//! while domain errors (mathematically undefined operations) indicate the
//! caller bypassed validation and are fatal for that request.
//!
//! ## Example
//!
//! ```rust
//! use line_core::errors::{LineError, LineResult};
//!
//! fn validate_length(length_km: f64) -> LineResult<()> {
//!     if length_km <= 0.0 {
//!         return Err(LineError::invalid_input(
//!             "length_km",
//!             length_km.to_string(),
//!             "Line length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Phase;

/// Result type alias for line_core operations
pub type LineResult<T> = Result<T, LineError>;

/// Structured error type for geometry validation and parameter calculation.
///
/// Each variant carries enough context to report the failure without
/// re-deriving it from the request.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LineError {
    /// An input value is invalid (wrong sign, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Conductor not found in the catalog
    #[error("Conductor not found: {name}")]
    ConductorNotFound { name: String },

    /// Tower profile not found in the catalog
    #[error("Tower type not found: {name}")]
    TowerNotFound { name: String },

    /// Two phases in the same request share coordinates
    #[error("Circuit {first_circuit} phase {first_phase} and circuit {second_circuit} phase {second_phase} have the same coordinates")]
    DuplicateCoordinates {
        first_circuit: usize,
        first_phase: Phase,
        second_circuit: usize,
        second_phase: Phase,
    },

    /// Bundle holds more sub-conductors than the tower permits
    #[error("Bundle of {count} conductors exceeds the maximum of {max} allowed for {tower}")]
    BundleExceedsTower { count: u8, max: u8, tower: String },

    /// Bundle must hold at least one sub-conductor
    #[error("Number of conductors in the bundle cannot be less than 1")]
    EmptyBundle,

    /// Circuit count is not permitted for the selected tower
    #[error("{count} circuit(s) are not supported by {tower}")]
    CircuitCountNotSupported { count: usize, tower: String },

    /// A phase coordinate falls outside the tower's admissible ranges
    #[error("Coordinates for circuit {circuit} phase {phase} are out of the allowed range for {tower}")]
    CoordinateOutOfRange {
        circuit: usize,
        phase: Phase,
        tower: String,
    },

    /// Bundle size with no equivalent-spacing formula (only 1-4 supported)
    #[error("No equivalent-spacing formula for a bundle of {count} conductors")]
    UnsupportedBundleSize { count: u8 },

    /// GMD does not exceed the combined GMR or equivalent radius, leaving
    /// the logarithm in the inductance/capacitance formula undefined
    #[error("GMD {gmd_m:.6} m must exceed the combined {radius_kind} {radius_m:.6} m; inductance/capacitance are undefined")]
    GmdNotAboveRadius {
        gmd_m: f64,
        radius_m: f64,
        radius_kind: String,
    },
}

impl LineError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        LineError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConductorNotFound error
    pub fn conductor_not_found(name: impl Into<String>) -> Self {
        LineError::ConductorNotFound { name: name.into() }
    }

    /// Create a TowerNotFound error
    pub fn tower_not_found(name: impl Into<String>) -> Self {
        LineError::TowerNotFound { name: name.into() }
    }

    /// Create a CoordinateOutOfRange error
    pub fn coordinate_out_of_range(
        circuit: usize,
        phase: Phase,
        tower: impl Into<String>,
    ) -> Self {
        LineError::CoordinateOutOfRange {
            circuit,
            phase,
            tower: tower.into(),
        }
    }

    /// Check whether correcting the request can clear this error.
    ///
    /// Validation errors are recoverable: the caller fixes the geometry or
    /// counts and resubmits. Domain errors are not - validated input never
    /// produces them, so they signal a validator gap or caller misuse.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            LineError::UnsupportedBundleSize { .. } | LineError::GmdNotAboveRadius { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LineError::InvalidInput { .. } => "INVALID_INPUT",
            LineError::ConductorNotFound { .. } => "CONDUCTOR_NOT_FOUND",
            LineError::TowerNotFound { .. } => "TOWER_NOT_FOUND",
            LineError::DuplicateCoordinates { .. } => "DUPLICATE_COORDINATES",
            LineError::BundleExceedsTower { .. } => "BUNDLE_EXCEEDS_TOWER",
            LineError::EmptyBundle => "EMPTY_BUNDLE",
            LineError::CircuitCountNotSupported { .. } => "CIRCUIT_COUNT_NOT_SUPPORTED",
            LineError::CoordinateOutOfRange { .. } => "COORDINATE_OUT_OF_RANGE",
            LineError::UnsupportedBundleSize { .. } => "UNSUPPORTED_BUNDLE_SIZE",
            LineError::GmdNotAboveRadius { .. } => "GMD_NOT_ABOVE_RADIUS",
        }
    }
}

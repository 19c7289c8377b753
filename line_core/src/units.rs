//! # Unit Types
//!
//! Type-safe wrappers for electrical and geometric units. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Overhead line calculation uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! Pylon uses SI units internally, at the scales transmission practice
//! actually quotes them:
//! - Conductor dimensions: millimeters (mm), as printed on data sheets
//! - Tower geometry: meters (m)
//! - Route length: kilometers (km)
//! - Resistance: ohms (Ω), rated as ohms per kilometer (Ω/km)
//! - Inductance: millihenries (mH); capacitance: microfarads (µF)
//! - Rating: kilovolts (kV), amperes (A), megavolt-amperes (MVA)
//!
//! ## Example
//!
//! ```rust
//! use line_core::units::{Meters, Millimeters};
//!
//! let gmr = Millimeters(11.369);
//! let gmr_m: Meters = gmr.into();
//! assert_eq!(gmr_m.0, 0.011369);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Kilometers> for Meters {
    fn from(km: Kilometers) -> Self {
        Meters(km.0 * 1000.0)
    }
}

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Self {
        Kilometers(m.0 / 1000.0)
    }
}

// ============================================================================
// Resistance Units
// ============================================================================

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

/// Resistance per unit length in ohms per kilometer
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OhmsPerKilometer(pub f64);

impl Mul<Kilometers> for OhmsPerKilometer {
    type Output = Ohms;
    fn mul(self, length: Kilometers) -> Ohms {
        Ohms(self.0 * length.0)
    }
}

// ============================================================================
// Voltage and Current Units
// ============================================================================

/// Voltage in kilovolts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilovolts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

// ============================================================================
// Line Parameter Units
// ============================================================================

/// Inductance in millihenries
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millihenries(pub f64);

/// Capacitance in microfarads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Microfarads(pub f64);

// ============================================================================
// Power Units
// ============================================================================

/// Apparent power in megavolt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegavoltAmperes(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Kilometers);
impl_arithmetic!(Ohms);
impl_arithmetic!(OhmsPerKilometer);
impl_arithmetic!(Kilovolts);
impl_arithmetic!(Amperes);
impl_arithmetic!(Millihenries);
impl_arithmetic!(Microfarads);
impl_arithmetic!(MegavoltAmperes);

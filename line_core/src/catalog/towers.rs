//! Tower Profile Catalog
//!
//! Admissible phase placement envelopes for the supported tower families.
//! Each profile records the operating voltage, the height band conductors may
//! occupy, the horizontal offset windows either side of the tower axis, and
//! the bundle/circuit capacity.
//!
//! Offset windows are symmetric about the axis: a window of 2.2 m to 4.0 m
//! admits x = -3.0 m as well as x = 3.0 m. The band between the windows is
//! the keep-out zone occupied by the tower body.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{LineError, LineResult};
use crate::geometry::Phase;
use crate::units::Kilovolts;

/// Supported tower families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerType {
    /// Narrow base suspension tower for 66 kV subtransmission
    NarrowBase,
    /// Delta arrangement tower for 400 kV transmission, center phase between
    /// two elevated outer phases
    SingleCircuitDelta,
    /// Vertical arrangement tower for 154 kV, one circuit per side
    DoubleCircuitVertical,
}

impl TowerType {
    /// All tower variants for UI selection
    pub const ALL: [TowerType; 3] = [
        TowerType::NarrowBase,
        TowerType::SingleCircuitDelta,
        TowerType::DoubleCircuitVertical,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> LineResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_'], "-").as_str() {
            "1" | "TYPE-1" | "T1" | "NARROW-BASE" | "NARROW-BASE-TOWER" => Ok(TowerType::NarrowBase),
            "2" | "TYPE-2" | "T2" | "SINGLE-CIRCUIT-DELTA" | "DELTA" => {
                Ok(TowerType::SingleCircuitDelta)
            }
            "3" | "TYPE-3" | "T3" | "DOUBLE-CIRCUIT-VERTICAL" | "VERTICAL" => {
                Ok(TowerType::DoubleCircuitVertical)
            }
            _ => Err(LineError::tower_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TowerType::NarrowBase => "Narrow Base Tower",
            TowerType::SingleCircuitDelta => "Single Circuit Delta Tower",
            TowerType::DoubleCircuitVertical => "Double Circuit Vertical Tower",
        }
    }

    /// Look up the placement profile for this tower
    pub fn profile(&self) -> TowerProfile {
        match self {
            TowerType::NarrowBase => TowerProfile {
                tower: TowerType::NarrowBase,
                voltage_kv: 66.0,
                min_height_m: 23.0,
                max_height_m: 39.0,
                offsets: OffsetLimits::Uniform(OffsetWindow {
                    min_abs_m: 2.2,
                    max_abs_m: 4.0,
                }),
                max_conductors_per_bundle: 3,
                circuits: CircuitCapacity::Single,
            },
            TowerType::SingleCircuitDelta => TowerProfile {
                tower: TowerType::SingleCircuitDelta,
                voltage_kv: 400.0,
                min_height_m: 38.25,
                max_height_m: 43.0,
                offsets: OffsetLimits::CenterPhaseDistinct {
                    outer: OffsetWindow {
                        min_abs_m: 9.4,
                        max_abs_m: 11.5,
                    },
                    center: OffsetWindow {
                        min_abs_m: 0.0,
                        max_abs_m: 8.9,
                    },
                },
                max_conductors_per_bundle: 4,
                circuits: CircuitCapacity::Single,
            },
            TowerType::DoubleCircuitVertical => TowerProfile {
                tower: TowerType::DoubleCircuitVertical,
                voltage_kv: 154.0,
                min_height_m: 36.0,
                max_height_m: 48.8,
                offsets: OffsetLimits::Uniform(OffsetWindow {
                    min_abs_m: 1.8,
                    max_abs_m: 5.35,
                }),
                max_conductors_per_bundle: 3,
                circuits: CircuitCapacity::SingleOrDouble,
            },
        }
    }
}

impl std::fmt::Display for TowerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Admissible band of horizontal distances from the tower axis, closed at
/// both ends and mirrored to the negative side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetWindow {
    /// Minimum |x| (m); the keep-out half-width
    pub min_abs_m: f64,
    /// Maximum |x| (m); the crossarm reach
    pub max_abs_m: f64,
}

impl OffsetWindow {
    /// Check whether the horizontal coordinate falls inside the window
    pub fn contains(&self, x_m: f64) -> bool {
        let a = x_m.abs();
        a >= self.min_abs_m && a <= self.max_abs_m
    }
}

/// Horizontal offset limits for a tower, per phase
///
/// Most towers constrain all three phases identically. The delta arrangement
/// hangs the center phase (B) inside the window the outer phases must clear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OffsetLimits {
    /// One window applies to every phase
    Uniform(OffsetWindow),
    /// Outer phases (A, C) and the center phase (B) have separate windows
    CenterPhaseDistinct {
        outer: OffsetWindow,
        center: OffsetWindow,
    },
}

impl OffsetLimits {
    /// Get the window that constrains the given phase
    pub fn window_for(&self, phase: Phase) -> OffsetWindow {
        match self {
            OffsetLimits::Uniform(window) => *window,
            OffsetLimits::CenterPhaseDistinct { outer, center } => match phase {
                Phase::A | Phase::C => *outer,
                Phase::B => *center,
            },
        }
    }
}

/// Number of three-phase circuits a tower can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitCapacity {
    /// Exactly one circuit
    Single,
    /// One circuit, or two in parallel
    SingleOrDouble,
}

impl CircuitCapacity {
    /// Check whether the given circuit count is permitted
    pub fn permits(&self, count: usize) -> bool {
        match self {
            CircuitCapacity::Single => count == 1,
            CircuitCapacity::SingleOrDouble => count == 1 || count == 2,
        }
    }
}

/// Placement and rating profile for a tower family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerProfile {
    /// Tower type
    pub tower: TowerType,
    /// Nominal line-to-line operating voltage (kV)
    pub voltage_kv: f64,
    /// Lowest admissible conductor height (m)
    pub min_height_m: f64,
    /// Highest admissible conductor height (m)
    pub max_height_m: f64,
    /// Horizontal offset windows
    pub offsets: OffsetLimits,
    /// Maximum sub-conductors per phase bundle
    pub max_conductors_per_bundle: u8,
    /// Circuit capacity
    pub circuits: CircuitCapacity,
}

impl TowerProfile {
    /// Operating voltage as a typed unit
    pub fn voltage(&self) -> Kilovolts {
        Kilovolts(self.voltage_kv)
    }

    /// Check whether a conductor height is inside the admissible band
    pub fn allows_height(&self, y_m: f64) -> bool {
        y_m >= self.min_height_m && y_m <= self.max_height_m
    }

    /// Check whether a horizontal coordinate is admissible for the phase
    pub fn allows_offset(&self, phase: Phase, x_m: f64) -> bool {
        self.offsets.window_for(phase).contains(x_m)
    }
}

/// Full tower catalog, assembled once for menu listings
pub static TOWER_CATALOG: Lazy<Vec<TowerProfile>> =
    Lazy::new(|| TowerType::ALL.iter().map(|t| t.profile()).collect());

//! ACSR Conductor Catalog
//!
//! Data sheet values for the supported ACSR (aluminum conductor, steel
//! reinforced) types. Dimensions are quoted in millimeters as printed by
//! manufacturers; accessor methods convert to meters for geometry work.
//!
//! | Conductor | Diameter (mm) | GMR (mm) | AC resistance (Ω/km) | Ampacity (A) |
//! |-----------|---------------|----------|----------------------|--------------|
//! | Hawk      | 21.793        | 8.809    | 0.132                | 659          |
//! | Drake     | 28.143        | 11.369   | 0.080                | 907          |
//! | Cardinal  | 30.378        | 12.253   | 0.067                | 996          |
//! | Rail      | 29.591        | 11.765   | 0.068                | 993          |
//! | Pheasant  | 35.103        | 14.204   | 0.051                | 1187         |

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{LineError, LineResult};
use crate::units::{Amperes, Meters, Millimeters, OhmsPerKilometer};

/// Supported ACSR conductor types, named per the bird-code convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductorType {
    /// Hawk 477 kcmil 26/7
    Hawk,
    /// Drake 795 kcmil 26/7
    Drake,
    /// Cardinal 954 kcmil 54/7
    Cardinal,
    /// Rail 954 kcmil 45/7
    Rail,
    /// Pheasant 1272 kcmil 54/19
    Pheasant,
}

impl ConductorType {
    /// All conductor variants for UI selection
    pub const ALL: [ConductorType; 5] = [
        ConductorType::Hawk,
        ConductorType::Drake,
        ConductorType::Cardinal,
        ConductorType::Rail,
        ConductorType::Pheasant,
    ];

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> LineResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "HAWK" => Ok(ConductorType::Hawk),
            "DRAKE" => Ok(ConductorType::Drake),
            "CARDINAL" => Ok(ConductorType::Cardinal),
            "RAIL" => Ok(ConductorType::Rail),
            "PHEASANT" => Ok(ConductorType::Pheasant),
            _ => Err(LineError::conductor_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConductorType::Hawk => "Hawk",
            ConductorType::Drake => "Drake",
            ConductorType::Cardinal => "Cardinal",
            ConductorType::Rail => "Rail",
            ConductorType::Pheasant => "Pheasant",
        }
    }

    /// Look up the data sheet values for this conductor
    pub fn spec(&self) -> ConductorSpec {
        match self {
            ConductorType::Hawk => ConductorSpec {
                conductor: ConductorType::Hawk,
                diameter_mm: 21.793,
                gmr_mm: 8.809,
                resistance_ohm_per_km: 0.132,
                ampacity_a: 659.0,
            },
            ConductorType::Drake => ConductorSpec {
                conductor: ConductorType::Drake,
                diameter_mm: 28.143,
                gmr_mm: 11.369,
                resistance_ohm_per_km: 0.080,
                ampacity_a: 907.0,
            },
            ConductorType::Cardinal => ConductorSpec {
                conductor: ConductorType::Cardinal,
                diameter_mm: 30.378,
                gmr_mm: 12.253,
                resistance_ohm_per_km: 0.067,
                ampacity_a: 996.0,
            },
            ConductorType::Rail => ConductorSpec {
                conductor: ConductorType::Rail,
                diameter_mm: 29.591,
                gmr_mm: 11.765,
                resistance_ohm_per_km: 0.068,
                ampacity_a: 993.0,
            },
            ConductorType::Pheasant => ConductorSpec {
                conductor: ConductorType::Pheasant,
                diameter_mm: 35.103,
                gmr_mm: 14.204,
                resistance_ohm_per_km: 0.051,
                ampacity_a: 1187.0,
            },
        }
    }
}

impl std::fmt::Display for ConductorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Data sheet values for a single conductor type
///
/// Raw fields keep the units the data sheet quotes them in. Calculation code
/// should go through the typed accessors, which convert to SI base units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorSpec {
    /// Conductor type
    pub conductor: ConductorType,
    /// Outside diameter (mm)
    pub diameter_mm: f64,
    /// Geometric mean radius (mm)
    pub gmr_mm: f64,
    /// AC resistance at 50 Hz, 75C (Ω/km)
    pub resistance_ohm_per_km: f64,
    /// Current carrying capacity (A)
    pub ampacity_a: f64,
}

impl ConductorSpec {
    /// Data sheet diameter as a typed unit
    pub fn diameter(&self) -> Millimeters {
        Millimeters(self.diameter_mm)
    }

    /// Physical radius in meters (half the data sheet diameter)
    pub fn radius(&self) -> Meters {
        Meters(self.diameter_mm / 2000.0)
    }

    /// Geometric mean radius in meters
    pub fn gmr(&self) -> Meters {
        Meters(self.gmr_mm / 1000.0)
    }

    /// AC resistance rate as a typed unit
    pub fn resistance_rate(&self) -> OhmsPerKilometer {
        OhmsPerKilometer(self.resistance_ohm_per_km)
    }

    /// Ampacity as a typed unit
    pub fn ampacity(&self) -> Amperes {
        Amperes(self.ampacity_a)
    }
}

/// Full conductor catalog, assembled once for menu listings
pub static CONDUCTOR_CATALOG: Lazy<Vec<ConductorSpec>> =
    Lazy::new(|| ConductorType::ALL.iter().map(|c| c.spec()).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lookup() {
        let hawk = ConductorType::Hawk.spec();
        assert_eq!(hawk.diameter_mm, 21.793);
        assert_eq!(hawk.gmr_mm, 8.809);
        assert_eq!(hawk.resistance_ohm_per_km, 0.132);
        assert_eq!(hawk.ampacity_a, 659.0);
    }

    #[test]
    fn test_unit_accessors() {
        let drake = ConductorType::Drake.spec();
        assert_eq!(drake.diameter().0, 28.143);
        assert!((drake.radius().0 - 0.0140715).abs() < 1e-12);
        assert!((drake.gmr().0 - 0.011369).abs() < 1e-12);
        assert_eq!(drake.resistance_rate().0, 0.080);
        assert_eq!(drake.ampacity().0, 907.0);
    }

    #[test]
    fn test_parsing() {
        assert_eq!(
            ConductorType::from_str_flexible("pheasant").unwrap(),
            ConductorType::Pheasant
        );
        assert_eq!(
            ConductorType::from_str_flexible("  Rail ").unwrap(),
            ConductorType::Rail
        );
        assert!(matches!(
            ConductorType::from_str_flexible("Eagle"),
            Err(LineError::ConductorNotFound { .. })
        ));
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(CONDUCTOR_CATALOG.len(), 5);
        assert_eq!(CONDUCTOR_CATALOG[0].conductor, ConductorType::Hawk);
        assert_eq!(CONDUCTOR_CATALOG[4].conductor, ConductorType::Pheasant);
    }

    #[test]
    fn test_serialization() {
        let spec = ConductorType::Cardinal.spec();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"conductor\":\"Cardinal\""));
        let roundtrip: ConductorSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }
}

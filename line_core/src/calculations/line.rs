//! # Line Parameter Calculation
//!
//! Computes the electrical parameters of a three-phase overhead transmission
//! line from its tower geometry, conductor choice, and route length.
//!
//! ## Assumptions
//!
//! - Balanced three-phase operation, fully transposed line
//! - AC resistance taken from the conductor data sheet rate
//! - Air dielectric for capacitance (relative permittivity 1)
//! - Double-circuit operation runs both circuits in parallel, doubling the
//!   thermal MVA capacity
//!
//! ## Example
//!
//! ```rust
//! use line_core::calculations::line::{calculate, LineInput};
//! use line_core::catalog::{ConductorType, TowerType};
//! use line_core::geometry::{CircuitLayout, Point};
//!
//! let input = LineInput {
//!     label: "Delta 400".to_string(),
//!     tower: TowerType::SingleCircuitDelta,
//!     conductor: ConductorType::Hawk,
//!     conductors_per_bundle: 1,
//!     bundle_spacing_m: 0.0,
//!     length_km: 100.0,
//!     circuits: vec![CircuitLayout::new(
//!         Point::new(-10.0, 40.0),
//!         Point::new(0.0, 41.0),
//!         Point::new(10.0, 40.0),
//!     )],
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! assert!((result.resistance_ohms - 13.2).abs() < 1e-9);
//! println!("{}", result);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::bundle::bundle_equivalent;
use crate::calculations::spacing::{
    double_circuit_equivalent, double_circuit_gmd, single_circuit_gmd,
};
use crate::catalog::{ConductorType, TowerType};
use crate::constraints::{check_constraints, check_distinct_coordinates};
use crate::errors::{LineError, LineResult};
use crate::geometry::CircuitLayout;
use crate::units::{Kilometers, MegavoltAmperes, Microfarads, Millihenries, Ohms};

/// Vacuum permittivity (F/m)
const VACUUM_PERMITTIVITY_F_PER_M: f64 = 8.854e-12;

/// Relative permittivity of the air dielectric
const AIR_RELATIVE_PERMITTIVITY: f64 = 1.0;

/// Per-meter inductance coefficient (H/m) multiplying ln(GMD/GMR)
const INDUCTANCE_COEFFICIENT_H_PER_M: f64 = 2.0e-7;

/// Input parameters for a transmission line calculation.
///
/// Geometry is given per circuit in the cross-section plane; see
/// [`crate::geometry`] for the coordinate convention. One bundle spacing
/// applies to every phase of every circuit.
///
/// ## JSON Example (Single Circuit)
///
/// ```json
/// {
///   "label": "Delta 400",
///   "tower": "SingleCircuitDelta",
///   "conductor": "Hawk",
///   "conductors_per_bundle": 1,
///   "bundle_spacing_m": 0.0,
///   "length_km": 100.0,
///   "circuits": [
///     {
///       "a": { "x_m": -10.0, "y_m": 40.0 },
///       "b": { "x_m": 0.0, "y_m": 41.0 },
///       "c": { "x_m": 10.0, "y_m": 40.0 }
///     }
///   ]
/// }
/// ```
///
/// ## JSON Example (Double Circuit, Twin Bundle)
///
/// ```json
/// {
///   "label": "Vertical 154 double",
///   "tower": "DoubleCircuitVertical",
///   "conductor": "Drake",
///   "conductors_per_bundle": 2,
///   "bundle_spacing_m": 0.45,
///   "length_km": 80.0,
///   "circuits": [
///     {
///       "a": { "x_m": -2.0, "y_m": 47.0 },
///       "b": { "x_m": -2.5, "y_m": 42.0 },
///       "c": { "x_m": -2.0, "y_m": 37.0 }
///     },
///     {
///       "a": { "x_m": 2.0, "y_m": 37.0 },
///       "b": { "x_m": 2.5, "y_m": 42.0 },
///       "c": { "x_m": 2.0, "y_m": 47.0 }
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineInput {
    /// User label for this line (e.g., "Feeder North", "154-2")
    pub label: String,

    /// Tower family the line is strung on
    pub tower: TowerType,

    /// ACSR conductor type used by every phase
    pub conductor: ConductorType,

    /// Sub-conductors per phase bundle (1 through 4, subject to the tower
    /// maximum)
    pub conductors_per_bundle: u8,

    /// Spacing between adjacent sub-conductors in a bundle (m)
    ///
    /// Ignored for a single-conductor bundle; must be positive otherwise.
    pub bundle_spacing_m: f64,

    /// Route length (km)
    pub length_km: f64,

    /// Phase layouts, one entry per circuit (one, or two for
    /// double-circuit-capable towers)
    pub circuits: Vec<CircuitLayout>,
}

impl LineInput {
    /// Validate input parameters.
    ///
    /// Field checks run first, then coordinate uniqueness, then the tower
    /// constraint chain. The first failure is returned.
    pub fn validate(&self) -> LineResult<()> {
        if self.length_km <= 0.0 {
            return Err(LineError::invalid_input(
                "length_km",
                self.length_km.to_string(),
                "Line length must be positive",
            ));
        }
        if self.conductors_per_bundle >= 2 && self.bundle_spacing_m <= 0.0 {
            return Err(LineError::invalid_input(
                "bundle_spacing_m",
                self.bundle_spacing_m.to_string(),
                "Bundle spacing must be positive for bundles of 2 or more",
            ));
        }
        check_distinct_coordinates(&self.circuits)?;
        check_constraints(
            &self.tower.profile(),
            self.conductors_per_bundle,
            &self.circuits,
        )
    }
}

/// Results of a transmission line calculation.
///
/// The four electrical parameters, plus the intermediate geometry and rating
/// inputs they were derived from.
///
/// ## JSON Example
///
/// ```json
/// {
///   "resistance_ohms": 13.2,
///   "inductance_mh": 145.37865,
///   "capacitance_uf": 0.7884,
///   "capacity_mva": 456.56859,
///   "gmd_m": 12.64107,
///   "gmr_m": 0.008809,
///   "equivalent_radius_m": 0.0108965,
///   "circuit_count": 1,
///   "voltage_kv": 400.0,
///   "ampacity_a": 659.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineParameters {
    /// Series resistance over the full route (Ω)
    pub resistance_ohms: f64,

    /// Series inductance over the full route (mH)
    pub inductance_mh: f64,

    /// Shunt capacitance over the full route (µF)
    pub capacitance_uf: f64,

    /// Thermal capacity at nominal voltage (MVA); doubled for two circuits
    pub capacity_mva: f64,

    // === Geometry (for reference) ===
    /// Geometric mean distance between phases (m)
    pub gmd_m: f64,

    /// Combined geometric mean radius fed into the inductance formula (m)
    pub gmr_m: f64,

    /// Combined equivalent radius fed into the capacitance formula (m)
    pub equivalent_radius_m: f64,

    // === Rating Inputs (for reference) ===
    /// Number of circuits in the request
    pub circuit_count: usize,

    /// Tower operating voltage (kV)
    pub voltage_kv: f64,

    /// Conductor ampacity (A)
    pub ampacity_a: f64,
}

impl LineParameters {
    /// Series resistance as a typed unit
    pub fn resistance(&self) -> Ohms {
        Ohms(self.resistance_ohms)
    }

    /// Series inductance as a typed unit
    pub fn inductance(&self) -> Millihenries {
        Millihenries(self.inductance_mh)
    }

    /// Shunt capacitance as a typed unit
    pub fn capacitance(&self) -> Microfarads {
        Microfarads(self.capacitance_uf)
    }

    /// Thermal capacity as a typed unit
    pub fn capacity(&self) -> MegavoltAmperes {
        MegavoltAmperes(self.capacity_mva)
    }
}

impl std::fmt::Display for LineParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Line Resistance: {:.5} Ω", self.resistance_ohms)?;
        writeln!(f, "Line Inductance: {:.5} mH", self.inductance_mh)?;
        writeln!(f, "Line Capacitance: {:.5} µF", self.capacitance_uf)?;
        write!(f, "Line Capacity: {:.5} MVA", self.capacity_mva)
    }
}

/// Calculate the electrical parameters of an overhead line.
///
/// This is a pure function: the result depends only on the input, and every
/// failure is reported as a structured [`LineError`].
///
/// # Arguments
///
/// * `input` - Line parameters (tower, conductor, bundle, geometry, length)
///
/// # Returns
///
/// * `Ok(LineParameters)` - The four electrical parameters plus derived
///   geometry
/// * `Err(LineError)` - Validation failure, or a domain error if the
///   geometry leaves a logarithm undefined
///
/// # Example
///
/// ```rust
/// use line_core::calculations::line::{calculate, LineInput};
/// use line_core::catalog::{ConductorType, TowerType};
/// use line_core::geometry::{CircuitLayout, Point};
///
/// let input = LineInput {
///     label: "Test Line".to_string(),
///     tower: TowerType::NarrowBase,
///     conductor: ConductorType::Hawk,
///     conductors_per_bundle: 1,
///     bundle_spacing_m: 0.0,
///     length_km: 40.0,
///     circuits: vec![CircuitLayout::new(
///         Point::new(-3.0, 30.0),
///         Point::new(3.0, 35.0),
///         Point::new(3.0, 30.0),
///     )],
/// };
///
/// let result = calculate(&input).expect("valid narrow base layout");
/// assert!(result.inductance_mh > 0.0);
/// assert!(result.capacitance_uf > 0.0);
/// ```
pub fn calculate(input: &LineInput) -> LineResult<LineParameters> {
    input.validate()?;

    let spec = input.conductor.spec();
    let profile = input.tower.profile();

    // Bundle-equivalent base values, shared by both circuit paths
    let bundled_gmr = bundle_equivalent(
        spec.gmr().0,
        input.conductors_per_bundle,
        input.bundle_spacing_m,
    )?;
    let bundled_radius = bundle_equivalent(
        spec.radius().0,
        input.conductors_per_bundle,
        input.bundle_spacing_m,
    )?;

    let (gmd_m, gmr_m, equivalent_radius_m, circuit_factor) = match input.circuits.as_slice() {
        [single] => (
            single_circuit_gmd(single),
            bundled_gmr,
            bundled_radius,
            1.0,
        ),
        [circuit1, circuit2] => (
            double_circuit_gmd(circuit1, circuit2),
            double_circuit_equivalent(circuit1, circuit2, bundled_gmr),
            double_circuit_equivalent(circuit1, circuit2, bundled_radius),
            // Two circuits in parallel double the thermal capacity
            2.0,
        ),
        _ => unreachable!("circuit count was validated to 1 or 2"),
    };

    // Both logarithms need a strictly positive argument above 1
    if gmd_m <= gmr_m {
        return Err(LineError::GmdNotAboveRadius {
            gmd_m,
            radius_m: gmr_m,
            radius_kind: "GMR".to_string(),
        });
    }
    if gmd_m <= equivalent_radius_m {
        return Err(LineError::GmdNotAboveRadius {
            gmd_m,
            radius_m: equivalent_radius_m,
            radius_kind: "equivalent radius".to_string(),
        });
    }

    let resistance = spec.resistance_rate() * Kilometers(input.length_km);

    // 2e-7 ln(GMD/GMR) H/m, scaled to mH over length_km
    let inductance_mh =
        INDUCTANCE_COEFFICIENT_H_PER_M * (gmd_m / gmr_m).ln() * input.length_km * 1.0e6;

    // 2πε0εr / ln(GMD/Req) F/m, scaled to µF over length_km
    let capacitance_uf = 2.0 * PI * VACUUM_PERMITTIVITY_F_PER_M * AIR_RELATIVE_PERMITTIVITY
        / (gmd_m / equivalent_radius_m).ln()
        * input.length_km
        * 1.0e9;

    let capacity_mva =
        circuit_factor * profile.voltage_kv * spec.ampacity_a * 3.0_f64.sqrt() * 1.0e-3;

    Ok(LineParameters {
        resistance_ohms: resistance.0,
        inductance_mh,
        capacitance_uf,
        capacity_mva,
        gmd_m,
        gmr_m,
        equivalent_radius_m,
        circuit_count: input.circuits.len(),
        voltage_kv: profile.voltage_kv,
        ampacity_a: spec.ampacity_a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Phase, Point};

    /// Single-circuit delta at 400 kV, bare Hawk conductor, 100 km route
    fn delta_hawk() -> LineInput {
        LineInput {
            label: "Delta 400".to_string(),
            tower: TowerType::SingleCircuitDelta,
            conductor: ConductorType::Hawk,
            conductors_per_bundle: 1,
            bundle_spacing_m: 0.0,
            length_km: 100.0,
            circuits: vec![CircuitLayout::new(
                Point::new(-10.0, 40.0),
                Point::new(0.0, 41.0),
                Point::new(10.0, 40.0),
            )],
        }
    }

    /// Double-circuit vertical at 154 kV, twin Drake bundles, 80 km route
    fn vertical_drake_double() -> LineInput {
        LineInput {
            label: "Vertical 154 double".to_string(),
            tower: TowerType::DoubleCircuitVertical,
            conductor: ConductorType::Drake,
            conductors_per_bundle: 2,
            bundle_spacing_m: 0.45,
            length_km: 80.0,
            circuits: vec![
                CircuitLayout::new(
                    Point::new(-2.0, 47.0),
                    Point::new(-2.5, 42.0),
                    Point::new(-2.0, 37.0),
                ),
                CircuitLayout::new(
                    Point::new(2.0, 37.0),
                    Point::new(2.5, 42.0),
                    Point::new(2.0, 47.0),
                ),
            ],
        }
    }

    #[test]
    fn test_resistance_is_rate_times_length() {
        let result = calculate(&delta_hawk()).unwrap();
        // 0.132 Ω/km over 100 km
        assert!((result.resistance_ohms - 13.2).abs() < 1e-9);
    }

    #[test]
    fn test_delta_hawk_parameters() {
        let result = calculate(&delta_hawk()).unwrap();

        // GMD = (sqrt(101) * 20 * sqrt(101))^(1/3) = 2020^(1/3)
        assert!((result.gmd_m - 12.641068648632704).abs() < 1e-12);
        assert!((result.gmr_m - 0.008809).abs() < 1e-15);

        assert!((result.inductance_mh - 145.37864565972455).abs() < 1e-9);
        assert!((result.capacitance_uf - 0.788396213595498).abs() < 1e-9);
        // 400 kV * 659 A * sqrt(3) * 1e-3, one circuit
        assert!((result.capacity_mva - 456.568592875156).abs() < 1e-9);
    }

    #[test]
    fn test_unit_accessors() {
        let result = calculate(&delta_hawk()).unwrap();
        assert!((result.resistance().0 - 13.2).abs() < 1e-9);
        assert!((result.inductance().0 - 145.37864565972455).abs() < 1e-9);
        assert!((result.capacitance().0 - 0.788396213595498).abs() < 1e-9);
        assert!((result.capacity().0 - 456.568592875156).abs() < 1e-9);
    }

    #[test]
    fn test_double_circuit_parameters() {
        let result = calculate(&vertical_drake_double()).unwrap();

        assert!((result.resistance_ohms - 6.4).abs() < 1e-12);
        assert!((result.gmd_m - 5.979386954057648).abs() < 1e-12);
        // Combined values start from the twin-bundle equivalents
        assert!((result.gmr_m - 0.7723337748208541).abs() < 1e-12);
        assert!((result.equivalent_radius_m - 0.8146284240927784).abs() < 1e-12);

        assert!((result.inductance_mh - 32.74650429205382).abs() < 1e-9);
        assert!((result.capacitance_uf - 2.232686372282194).abs() < 1e-9);
        // 2 * 154 kV * 907 A * sqrt(3) * 1e-3
        assert!((result.capacity_mva - 483.8587853992113).abs() < 1e-9);
    }

    #[test]
    fn test_double_circuit_doubles_capacity() {
        let double = vertical_drake_double();
        let mut single = double.clone();
        single.circuits.truncate(1);

        let result_double = calculate(&double).unwrap();
        let result_single = calculate(&single).unwrap();
        assert!((result_double.capacity_mva - 2.0 * result_single.capacity_mva).abs() < 1e-9);
        assert_eq!(result_double.circuit_count, 2);
        assert_eq!(result_single.circuit_count, 1);
    }

    #[test]
    fn test_nonpositive_length_rejected() {
        let mut input = delta_hawk();
        input.length_km = 0.0;
        let result = calculate(&input);
        assert!(matches!(result, Err(LineError::InvalidInput { .. })));
    }

    #[test]
    fn test_missing_bundle_spacing_rejected() {
        let mut input = delta_hawk();
        input.conductors_per_bundle = 2;
        input.bundle_spacing_m = 0.0;
        let result = calculate(&input);
        assert!(matches!(result, Err(LineError::InvalidInput { .. })));
    }

    #[test]
    fn test_keep_out_violation_rejected() {
        // Narrow base keep-out: phase B on the centerline fails validation
        let input = LineInput {
            label: "Bad layout".to_string(),
            tower: TowerType::NarrowBase,
            conductor: ConductorType::Hawk,
            conductors_per_bundle: 1,
            bundle_spacing_m: 0.0,
            length_km: 40.0,
            circuits: vec![CircuitLayout::new(
                Point::new(-3.0, 30.0),
                Point::new(0.0, 35.0),
                Point::new(3.0, 30.0),
            )],
        };
        let result = calculate(&input);
        assert_eq!(
            result.unwrap_err(),
            LineError::coordinate_out_of_range(1, Phase::B, "Narrow Base Tower")
        );
    }

    #[test]
    fn test_duplicates_rejected_before_constraints() {
        // Phase B duplicates phase A and also sits outside its offset
        // window; the duplicate must win
        let mut input = delta_hawk();
        input.circuits = vec![CircuitLayout::new(
            Point::new(-10.0, 40.0),
            Point::new(-10.0, 40.0),
            Point::new(10.0, 40.0),
        )];
        let result = calculate(&input);
        assert_eq!(
            result.unwrap_err(),
            LineError::DuplicateCoordinates {
                first_circuit: 1,
                first_phase: Phase::A,
                second_circuit: 1,
                second_phase: Phase::B,
            }
        );
    }

    #[test]
    fn test_oversize_bundle_rejected_by_tower_limit() {
        // 5 per bundle is over the delta tower's limit of 4, so the
        // constraint chain fires before any bundle formula runs
        let mut input = delta_hawk();
        input.conductors_per_bundle = 5;
        input.bundle_spacing_m = 0.45;
        let result = calculate(&input);
        assert!(matches!(
            result,
            Err(LineError::BundleExceedsTower { count: 5, max: 4, .. })
        ));
    }

    #[test]
    fn test_empty_circuits_rejected() {
        let mut input = delta_hawk();
        input.circuits.clear();
        let result = calculate(&input);
        assert!(matches!(
            result,
            Err(LineError::CircuitCountNotSupported { count: 0, .. })
        ));
    }

    #[test]
    fn test_domain_guard_on_absurd_spacing() {
        // A 150 m "bundle spacing" passes validation (it is positive) but
        // drives the combined GMR past the GMD, leaving ln undefined
        let mut input = delta_hawk();
        input.conductors_per_bundle = 4;
        input.bundle_spacing_m = 150.0;
        let error = calculate(&input).unwrap_err();
        assert!(matches!(
            error,
            LineError::GmdNotAboveRadius { ref radius_kind, .. } if radius_kind == "GMR"
        ));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = vertical_drake_double();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: LineInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.tower, roundtrip.tower);
        assert_eq!(input.conductor, roundtrip.conductor);
        assert_eq!(input.circuits.len(), roundtrip.circuits.len());
        assert_eq!(input.circuits[1].b, roundtrip.circuits[1].b);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&delta_hawk()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("resistance_ohms"));
        assert!(json.contains("capacity_mva"));
        assert!(json.contains("gmd_m"));

        let roundtrip: LineParameters = serde_json::from_str(&json).unwrap();
        assert!((result.inductance_mh - roundtrip.inductance_mh).abs() < 1e-9);
    }

    #[test]
    fn test_display_format() {
        let result = calculate(&delta_hawk()).unwrap();
        let rendered = result.to_string();
        assert_eq!(
            rendered,
            "Line Resistance: 13.20000 Ω\n\
             Line Inductance: 145.37865 mH\n\
             Line Capacitance: 0.78840 µF\n\
             Line Capacity: 456.56859 MVA"
        );
    }
}

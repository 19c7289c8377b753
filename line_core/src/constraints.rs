//! # Placement Constraint Validation
//!
//! Checks a requested phase layout against the selected tower profile before
//! any electrical calculation runs. Checks run in a fixed order and
//! short-circuit at the first failure:
//!
//! 1. Bundle size does not exceed the tower maximum
//! 2. Bundle holds at least one sub-conductor
//! 3. Circuit count is permitted by the tower
//! 4. Every phase coordinate sits inside the tower's height band and offset
//!    window (offset windows exclude the central keep-out zone)
//!
//! Coordinate uniqueness is a separate check that callers run before the
//! constraint chain, so duplicate phases are reported regardless of tower
//! type.

use crate::catalog::TowerProfile;
use crate::errors::{LineError, LineResult};
use crate::geometry::{CircuitLayout, Phase, Point};

/// Reject requests where two phases (in any circuit) share exact coordinates.
///
/// Comparison is exact: two phases would have to be entered with identical
/// values to collide, which always indicates a data entry mistake rather than
/// a tight layout. Circuits are scanned in order, phases A, B, C within each,
/// and the first colliding pair is reported with 1-based circuit numbers.
pub fn check_distinct_coordinates(circuits: &[CircuitLayout]) -> LineResult<()> {
    let mut seen: Vec<(usize, Phase, Point)> = Vec::with_capacity(circuits.len() * 3);
    for (index, circuit) in circuits.iter().enumerate() {
        let circuit_no = index + 1;
        for (phase, point) in circuit.points() {
            for (first_circuit, first_phase, first_point) in &seen {
                if *first_point == point {
                    return Err(LineError::DuplicateCoordinates {
                        first_circuit: *first_circuit,
                        first_phase: *first_phase,
                        second_circuit: circuit_no,
                        second_phase: phase,
                    });
                }
            }
            seen.push((circuit_no, phase, point));
        }
    }
    Ok(())
}

/// Validate bundle size, circuit count, and phase placement against a tower
/// profile.
pub fn check_constraints(
    profile: &TowerProfile,
    conductors_per_bundle: u8,
    circuits: &[CircuitLayout],
) -> LineResult<()> {
    if conductors_per_bundle > profile.max_conductors_per_bundle {
        return Err(LineError::BundleExceedsTower {
            count: conductors_per_bundle,
            max: profile.max_conductors_per_bundle,
            tower: profile.tower.display_name().to_string(),
        });
    }

    if conductors_per_bundle < 1 {
        return Err(LineError::EmptyBundle);
    }

    if !profile.circuits.permits(circuits.len()) {
        return Err(LineError::CircuitCountNotSupported {
            count: circuits.len(),
            tower: profile.tower.display_name().to_string(),
        });
    }

    for (index, circuit) in circuits.iter().enumerate() {
        let circuit_no = index + 1;
        for (phase, point) in circuit.points() {
            if !profile.allows_offset(phase, point.x_m) || !profile.allows_height(point.y_m) {
                return Err(LineError::coordinate_out_of_range(
                    circuit_no,
                    phase,
                    profile.tower.display_name(),
                ));
            }
        }
    }

    Ok(())
}

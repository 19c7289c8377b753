//! # Phase Spacing Aggregation
//!
//! Transposition-averaged mutual geometry for three-phase circuits. A single
//! circuit reduces to the geometric mean of its three pairwise phase
//! distances (its GMD). Two parallel circuits, modeled as fully transposed,
//! reduce to combined GMR/radius/GMD terms where each phase couples on
//! average to both its own and the cross instances on the other circuit.
//!
//! All three aggregations share the pairwise/triple geometric-mean helpers in
//! [`crate::geometry`], so the single- and double-circuit paths cannot drift
//! apart formula-wise.

use crate::geometry::{geometric_mean, CircuitLayout, Phase};

/// GMD of one circuit: geometric mean of the three pairwise phase distances.
///
/// Exact for an equilateral arrangement, the accepted approximation
/// otherwise. Depends only on the three distances, so relabeling phases
/// leaves the result unchanged.
pub fn single_circuit_gmd(circuit: &CircuitLayout) -> f64 {
    let d_ab = circuit.a.distance_to(circuit.b);
    let d_ac = circuit.a.distance_to(circuit.c);
    let d_bc = circuit.b.distance_to(circuit.c);
    geometric_mean(&[d_ab, d_ac, d_bc])
}

/// Combined per-phase equivalent (GMR or radius) for two parallel circuits.
///
/// For each phase, the geometric mean of the separation between that phase's
/// two circuit instances and the supplied base value; then the geometric mean
/// over the three phases. The base is the bundle-equivalent GMR for the
/// inductance path or the bundle-equivalent radius for the capacitance path.
pub fn double_circuit_equivalent(
    circuit1: &CircuitLayout,
    circuit2: &CircuitLayout,
    base_m: f64,
) -> f64 {
    let per_phase: Vec<f64> = Phase::ALL
        .iter()
        .map(|&phase| {
            let separation = circuit1.phase(phase).distance_to(circuit2.phase(phase));
            geometric_mean(&[separation, base_m])
        })
        .collect();
    geometric_mean(&per_phase)
}

/// Combined GMD for two parallel circuits.
///
/// For each unordered phase pair, the geometric mean of the four distances
/// between the pair's instances across both circuits; then the geometric
/// mean over the three pairs.
pub fn double_circuit_gmd(circuit1: &CircuitLayout, circuit2: &CircuitLayout) -> f64 {
    let pairs = [
        (Phase::A, Phase::B),
        (Phase::A, Phase::C),
        (Phase::B, Phase::C),
    ];
    let per_pair: Vec<f64> = pairs
        .iter()
        .map(|&(x, y)| {
            let distances = [
                circuit1.phase(x).distance_to(circuit1.phase(y)),
                circuit1.phase(x).distance_to(circuit2.phase(y)),
                circuit2.phase(x).distance_to(circuit1.phase(y)),
                circuit2.phase(x).distance_to(circuit2.phase(y)),
            ];
            geometric_mean(&distances)
        })
        .collect();
    geometric_mean(&per_pair)
}

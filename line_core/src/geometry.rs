//! # Line Geometry
//!
//! Coordinate types for tower cross-sections and the two geometric
//! primitives every aggregation formula is built from: Euclidean distance
//! and the geometric mean.
//!
//! Coordinates live in the 2D cross-section plane of the line: `x` is the
//! horizontal offset from the tower centerline, `y` is the height above
//! ground, both in meters.
//!
//! ## Example
//!
//! ```rust
//! use line_core::geometry::{Point, Phase, CircuitLayout};
//!
//! let layout = CircuitLayout::new(
//!     Point::new(-10.0, 40.0),
//!     Point::new(0.0, 41.0),
//!     Point::new(10.0, 40.0),
//! );
//!
//! let a_to_c = layout.phase(Phase::A).distance_to(layout.phase(Phase::C));
//! assert_eq!(a_to_c, 20.0);
//! ```

use serde::{Deserialize, Serialize};

/// A point in the line cross-section plane (meters).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the tower centerline (m); negative is left
    pub x_m: f64,
    /// Height above ground (m)
    pub y_m: f64,
}

impl Point {
    pub fn new(x_m: f64, y_m: f64) -> Self {
        Self { x_m, y_m }
    }

    /// Euclidean distance to another point (m).
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x_m - other.x_m).powi(2) + (self.y_m - other.y_m).powi(2)).sqrt()
    }
}

/// Phase labels of a three-phase circuit
///
/// # Example
/// ```
/// use line_core::geometry::Phase;
///
/// assert_eq!(Phase::B.code(), "B");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Phase A
    A,
    /// Phase B (the center position on delta-arrangement towers)
    B,
    /// Phase C
    C,
}

impl Phase {
    /// All phases in conventional order
    pub const ALL: [Phase; 3] = [Phase::A, Phase::B, Phase::C];

    /// Standard phase letter
    pub fn code(&self) -> &'static str {
        match self {
            Phase::A => "A",
            Phase::B => "B",
            Phase::C => "C",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The three phase positions of one circuit.
///
/// ## JSON Example
///
/// ```json
/// {
///   "a": { "x_m": -10.0, "y_m": 40.0 },
///   "b": { "x_m": 0.0, "y_m": 41.0 },
///   "c": { "x_m": 10.0, "y_m": 40.0 }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitLayout {
    /// Position of phase A
    pub a: Point,
    /// Position of phase B
    pub b: Point,
    /// Position of phase C
    pub c: Point,
}

impl CircuitLayout {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Position of the given phase.
    pub fn phase(&self, phase: Phase) -> Point {
        match phase {
            Phase::A => self.a,
            Phase::B => self.b,
            Phase::C => self.c,
        }
    }

    /// All phase positions in A, B, C order.
    pub fn points(&self) -> [(Phase, Point); 3] {
        [(Phase::A, self.a), (Phase::B, self.b), (Phase::C, self.c)]
    }
}

/// Geometric mean of a non-empty set of positive values.
///
/// This is the n-th root of the product, the aggregation step behind every
/// GMD/GMR formula: pairwise means for bundle spacing, triple means for
/// phase spacing, quadruple means for cross-circuit spacing.
///
/// # Example
/// ```
/// use line_core::geometry::geometric_mean;
///
/// assert_eq!(geometric_mean(&[2.0, 8.0]), 4.0);
/// ```
pub fn geometric_mean(values: &[f64]) -> f64 {
    let product: f64 = values.iter().product();
    product.powf(1.0 / values.len() as f64)
}

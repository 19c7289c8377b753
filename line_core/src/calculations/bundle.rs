//! # Bundle Equivalent Geometry
//!
//! Reduces a bundle of 1-4 parallel sub-conductors to a single equivalent
//! geometric value. The same formula shape serves both the inductance path
//! (base value = conductor GMR) and the capacitance path (base value =
//! physical radius); only the supplied base differs.
//!
//! Arrangements are the standard symmetric ones: a pair, an equilateral
//! triangle, and a square whose diagonal spacing is d·√2.

use std::f64::consts::SQRT_2;

use crate::errors::{LineError, LineResult};

/// Equivalent GMR or radius of a symmetric bundle.
///
/// * `base_m` - GMR or physical radius of one sub-conductor (m)
/// * `count` - sub-conductors per bundle, 1 through 4
/// * `spacing_m` - distance between adjacent sub-conductors (m), ignored for
///   a single conductor
///
/// Counts outside 1-4 have no defined arrangement and return
/// [`LineError::UnsupportedBundleSize`]; callers are expected to have
/// validated the count against the tower limit already.
///
/// # Example
///
/// ```rust
/// use line_core::calculations::bundle::bundle_equivalent;
///
/// // A twin bundle lands at the geometric mean of base and spacing
/// let eq = bundle_equivalent(0.009, 2, 0.4).unwrap();
/// assert!((eq - (0.009_f64 * 0.4).sqrt()).abs() < 1e-15);
/// ```
pub fn bundle_equivalent(base_m: f64, count: u8, spacing_m: f64) -> LineResult<f64> {
    match count {
        1 => Ok(base_m),
        2 => Ok((base_m * spacing_m).sqrt()),
        3 => Ok((base_m * spacing_m.powi(2)).powf(1.0 / 3.0)),
        4 => Ok((base_m * spacing_m.powi(2) * spacing_m * SQRT_2).powf(1.0 / 4.0)),
        _ => Err(LineError::UnsupportedBundleSize { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_conductor_is_identity() {
        // n=1 must return the base bit-for-bit, spacing ignored
        assert_eq!(bundle_equivalent(0.008809, 1, 0.45).unwrap(), 0.008809);
        assert_eq!(bundle_equivalent(0.0140715, 1, 0.0).unwrap(), 0.0140715);
        assert_eq!(bundle_equivalent(3.7, 1, 99.0).unwrap(), 3.7);
    }

    #[test]
    fn test_twin_bundle() {
        // (0.008809 * 0.45)^(1/2)
        let eq = bundle_equivalent(0.008809, 2, 0.45).unwrap();
        assert!((eq - 0.06296070202912289).abs() < 1e-12);
    }

    #[test]
    fn test_triple_bundle() {
        // (0.008809 * 0.45^2)^(1/3)
        let eq = bundle_equivalent(0.008809, 3, 0.45).unwrap();
        assert!((eq - 0.12127851740044605).abs() < 1e-12);
    }

    #[test]
    fn test_quad_bundle() {
        // (0.008809 * 0.45^2 * 0.45*sqrt(2))^(1/4)
        let eq = bundle_equivalent(0.008809, 4, 0.45).unwrap();
        assert!((eq - 0.18355650810682156).abs() < 1e-12);
    }

    #[test]
    fn test_unsupported_counts() {
        assert!(matches!(
            bundle_equivalent(0.008809, 5, 0.45),
            Err(LineError::UnsupportedBundleSize { count: 5 })
        ));
        assert!(matches!(
            bundle_equivalent(0.008809, 0, 0.45),
            Err(LineError::UnsupportedBundleSize { count: 0 })
        ));
    }

    #[test]
    fn test_equivalent_bounded_by_inputs() {
        // Geometric-mean monotonicity over conductor-scale bases and
        // decimeter spacings. The quad bundle picks up the d*sqrt(2)
        // diagonal, so its bound needs spacing to dominate the base value,
        // which physical inputs always satisfy.
        let bases: [f64; 3] = [0.005, 0.008809, 0.0152];
        let spacings: [f64; 3] = [0.2, 0.45, 0.6];
        for &base in &bases {
            for &spacing in &spacings {
                let lo = base.min(spacing);
                let hi = base.max(spacing);
                for count in 1..=4u8 {
                    let eq = bundle_equivalent(base, count, spacing).unwrap();
                    assert!(
                        eq >= lo && eq <= hi,
                        "bundle of {} with base {} spacing {} gave {}",
                        count,
                        base,
                        spacing,
                        eq
                    );
                }
            }
        }

        // Reversed ordering, base above spacing
        for count in 1..=3u8 {
            let eq = bundle_equivalent(5.0, count, 0.1).unwrap();
            assert!(
                eq >= 0.1 && eq <= 5.0,
                "bundle of {} with base 5.0 spacing 0.1 gave {}",
                count,
                eq
            );
        }
    }
}

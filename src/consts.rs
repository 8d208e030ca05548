//! This file provides the constants used for matrix multiplication and color space conversion: the
//! sRGB primaries expressed in CIE XYZ, the D65 reference white, and the thresholds of the
//! piecewise transfer functions used by sRGB companding and CIELAB. Keeping them in one place makes
//! it easy to check that each forward constant agrees with its inverse.

use rulinalg::matrix::Matrix;

/// The D65 reference white, scaled so that Y is 100. Also the upper bounds of the XYZ brands.
pub(crate) const D65_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// Below this (normalized, gamma-encoded) sRGB value the companding curve is linear.
pub(crate) const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
/// Below this linear-light value the inverse companding curve is linear.
pub(crate) const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;
pub(crate) const SRGB_LINEAR_SLOPE: f64 = 12.92;
pub(crate) const SRGB_GAMMA: f64 = 2.4;

/// CIE epsilon: the cutoff between the cube-root and linear parts of the LAB transfer function.
pub(crate) const LAB_EPSILON: f64 = 0.008856;
/// Slope of the linear part of the LAB transfer function.
pub(crate) const LAB_KAPPA_SLOPE: f64 = 7.787;
pub(crate) const LAB_OFFSET: f64 = 16.0 / 116.0;

lazy_static! {
    /// Linear sRGB (0-1) to CIE XYZ (0-1, D65). Multiply the result by 100 to get the branded scale.
    pub(crate) static ref SRGB_TO_XYZ: Matrix<f64> = matrix![
        0.4124564, 0.3575761, 0.1804375;
        0.2126729, 0.7151522, 0.0721750;
        0.0193339, 0.1191920, 0.9503041
    ];

    /// The inverse of `SRGB_TO_XYZ`, written out rather than computed so initialization can't fail.
    pub(crate) static ref XYZ_TO_SRGB: Matrix<f64> = matrix![
        3.2404542, -1.5371385, -0.4985314;
        -0.9692660, 1.8760108, 0.0415560;
        0.0556434, -0.2040259, 1.0572252
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_are_inverses() {
        let product = &*SRGB_TO_XYZ * &*XYZ_TO_SRGB;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((product[[i, j]] - expected).abs() <= 1e-5);
            }
        }
    }

    #[test]
    fn test_white_maps_to_d65() {
        let white = &*SRGB_TO_XYZ * vector![1.0, 1.0, 1.0];
        for i in 0..3 {
            assert!((white[i] * 100.0 - D65_WHITE[i]).abs() <= 1e-3);
        }
    }
}

//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). CIELAB has an L value for
//! lightness and two opponent color axes for chromaticity: `a` runs from green to magenta and `b`
//! from blue to yellow. Here it is always relative to the D65 white point, and its only direct
//! neighbor is XYZ: every other format reaches LAB through XYZ and RGB.

use std::fmt;

use crate::bound::{AlphaRange, LabA, LabB, LabL, NumericBrand};
use crate::colors::XYZColor;
use crate::consts::{D65_WHITE, LAB_EPSILON, LAB_KAPPA_SLOPE, LAB_OFFSET};
use crate::convert::guarded;
use crate::raw::{RawLAB, RawXYZ};
use crate::sanitize;

/// A color in CIELAB (D65).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LABColor {
    /// Lightness: 0 is black and 100 is diffuse white.
    pub l: LabL,
    pub a: LabA,
    pub b: LabB,
    pub alpha: AlphaRange,
}

impl Default for LABColor {
    fn default() -> LABColor {
        LABColor {
            l: LabL::zero(),
            a: LabA::zero(),
            b: LabB::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<LABColor> for RawLAB {
    fn from(color: LABColor) -> RawLAB {
        RawLAB {
            l: color.l.value(),
            a: color.a.value(),
            b: color.b.value(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a LABColor> for RawLAB {
    fn from(color: &'a LABColor) -> RawLAB {
        (*color).into()
    }
}

impl fmt::Display for LABColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "lab({}, {}, {}, {})", self.l, self.a, self.b, self.alpha)
    }
}

/// The LAB transfer function applied to a coordinate already divided by its reference white: a
/// cube root, with a linear segment near black.
fn transfer(ratio: f64) -> f64 {
    if ratio > LAB_EPSILON {
        ratio.cbrt()
    } else {
        LAB_KAPPA_SLOPE * ratio + LAB_OFFSET
    }
}

/// The inverse of `transfer`, giving the ratio to the reference white.
fn transfer_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > LAB_EPSILON {
        cube
    } else {
        (f - LAB_OFFSET) / LAB_KAPPA_SLOPE
    }
}

/// Converts XYZ to LAB.
pub fn xyz_to_lab<C: Into<RawXYZ>>(color: C) -> LABColor {
    guarded(color.into(), "xyz_to_lab", |xyz: &RawXYZ| {
        let fx = transfer(xyz.x / D65_WHITE[0]);
        let fy = transfer(xyz.y / D65_WHITE[1]);
        let fz = transfer(xyz.z / D65_WHITE[2]);
        LABColor {
            l: sanitize::lab_l(116.0 * fy - 16.0),
            a: sanitize::lab_a(500.0 * (fx - fy)),
            b: sanitize::lab_b(200.0 * (fy - fz)),
            alpha: sanitize::alpha(xyz.alpha),
        }
    })
}

/// Converts LAB to XYZ. LAB values far outside the visible range land outside the XYZ bounds and
/// are clamped back into them.
pub fn lab_to_xyz<C: Into<RawLAB>>(color: C) -> XYZColor {
    guarded(color.into(), "lab_to_xyz", |lab: &RawLAB| {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;
        XYZColor {
            x: sanitize::xyz_x(transfer_inv(fx) * D65_WHITE[0]),
            y: sanitize::xyz_y(transfer_inv(fy) * D65_WHITE[1]),
            z: sanitize::xyz_z(transfer_inv(fz) * D65_WHITE[2]),
            alpha: sanitize::alpha(lab.alpha),
        }
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::defaults::Registered;
    use float_cmp::approx_eq;

    fn xyz(x: f64, y: f64, z: f64) -> RawXYZ {
        RawXYZ { x, y, z, alpha: 1. }
    }

    #[test]
    fn test_white_and_black() {
        let white = xyz_to_lab(xyz(95.047, 100., 108.883));
        assert_eq!(white.l.value(), 100.);
        assert_eq!(white.a.value(), 0.);
        assert_eq!(white.b.value(), 0.);
        let black = xyz_to_lab(xyz(0., 0., 0.));
        assert_eq!(black.l.value(), 0.);
        assert_eq!(black.a.value(), 0.);
    }

    #[test]
    fn test_srgb_red_reference() {
        let red = xyz_to_lab(xyz(41.25, 21.27, 1.93));
        assert!(approx_eq!(f64, red.l.value(), 53.24, epsilon = 0.1));
        assert!(approx_eq!(f64, red.a.value(), 80.09, epsilon = 0.2));
        assert!(approx_eq!(f64, red.b.value(), 67.20, epsilon = 0.2));
    }

    #[test]
    fn test_lab_xyz_round_trip() {
        let lab = RawLAB {
            l: 50.,
            a: 20.,
            b: -30.,
            alpha: 0.8,
        };
        let back = xyz_to_lab(lab_to_xyz(lab));
        assert!(approx_eq!(f64, back.l.value(), 50., epsilon = 0.05));
        assert!(approx_eq!(f64, back.a.value(), 20., epsilon = 0.1));
        assert!(approx_eq!(f64, back.b.value(), -30., epsilon = 0.1));
        assert_eq!(back.alpha.value(), 0.8);
    }

    #[test]
    fn test_dark_values_use_linear_segment() {
        // L = 5 is below the cube-root cutoff (L = 8)
        let dark = lab_to_xyz(RawLAB {
            l: 5.,
            a: 0.,
            b: 0.,
            alpha: 1.,
        });
        assert!(approx_eq!(f64, dark.y.value(), 0.55, epsilon = 0.01));
    }

    #[test]
    fn test_extreme_lab_is_clamped_into_xyz_bounds() {
        let extreme = lab_to_xyz(RawLAB {
            l: 100.,
            a: 125.,
            b: -125.,
            alpha: 1.,
        });
        assert_eq!(extreme.x.value(), 95.047);
        assert_eq!(extreme.z.value(), 108.883);
    }

    #[test]
    fn test_invalid_input_gives_default() {
        let bad = RawLAB {
            l: 50.,
            a: 130.,
            b: 0.,
            alpha: 1.,
        };
        assert_eq!(lab_to_xyz(bad), XYZColor::registered());
        assert_eq!(xyz_to_lab(xyz(0., 101., 0.)), LABColor::registered());
    }
}

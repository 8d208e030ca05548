//! The CIE 1931 XYZ record, scaled so the D65 white point has Y = 100, and the conversions between
//! it and sRGB. Going to XYZ undoes the sRGB transfer curve and applies the primaries matrix;
//! coming back applies the inverse matrix and re-encodes, then clamps into the RGB cube, because
//! plenty of valid XYZ values have no sRGB equivalent.

use std::fmt;

use crate::bound::{AlphaRange, XyzX, XyzY, XyzZ};
use crate::colors::RGBColor;
use crate::consts::{
    SRGB_DECODE_THRESHOLD, SRGB_ENCODE_THRESHOLD, SRGB_GAMMA, SRGB_LINEAR_SLOPE, SRGB_TO_XYZ,
    XYZ_TO_SRGB,
};
use crate::convert::guarded;
use crate::raw::{RawRGB, RawXYZ};
use crate::sanitize;

/// A point in CIE XYZ (D65).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    pub x: XyzX,
    pub y: XyzY,
    pub z: XyzZ,
    pub alpha: AlphaRange,
}

impl Default for XYZColor {
    fn default() -> XYZColor {
        XYZColor {
            x: sanitize::xyz_x(0.0),
            y: sanitize::xyz_y(0.0),
            z: sanitize::xyz_z(0.0),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<XYZColor> for RawXYZ {
    fn from(color: XYZColor) -> RawXYZ {
        RawXYZ {
            x: color.x.value(),
            y: color.y.value(),
            z: color.z.value(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a XYZColor> for RawXYZ {
    fn from(color: &'a XYZColor) -> RawXYZ {
        (*color).into()
    }
}

impl fmt::Display for XYZColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "xyz({}, {}, {}, {})", self.x, self.y, self.z, self.alpha)
    }
}

/// sRGB companding: gamma-encoded channel (0-1) to linear light.
fn decode(channel: f64) -> f64 {
    if channel > SRGB_DECODE_THRESHOLD {
        ((channel + 0.055) / 1.055).powf(SRGB_GAMMA)
    } else {
        channel / SRGB_LINEAR_SLOPE
    }
}

/// Inverse companding: linear light to gamma-encoded.
fn encode(linear: f64) -> f64 {
    if linear > SRGB_ENCODE_THRESHOLD {
        1.055 * linear.powf(1.0 / SRGB_GAMMA) - 0.055
    } else {
        SRGB_LINEAR_SLOPE * linear
    }
}

/// Converts RGB to XYZ.
pub fn rgb_to_xyz<C: Into<RawRGB>>(color: C) -> XYZColor {
    guarded(color.into(), "rgb_to_xyz", |rgb: &RawRGB| {
        let [r, g, b] = rgb.normalized();
        let xyz = &*SRGB_TO_XYZ * vector![decode(r), decode(g), decode(b)];
        XYZColor {
            x: sanitize::xyz_x(xyz[0] * 100.0),
            y: sanitize::xyz_y(xyz[1] * 100.0),
            z: sanitize::xyz_z(xyz[2] * 100.0),
            alpha: sanitize::alpha(rgb.alpha),
        }
    })
}

/// Converts XYZ to RGB, mapping colors outside the sRGB gamut to the nearest channel values.
pub fn xyz_to_rgb<C: Into<RawXYZ>>(color: C) -> RGBColor {
    guarded(color.into(), "xyz_to_rgb", |xyz: &RawXYZ| {
        let linear = &*XYZ_TO_SRGB * vector![xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0];
        sanitize::clamp_rgb(
            encode(linear[0]) * 255.0,
            encode(linear[1]) * 255.0,
            encode(linear[2]) * 255.0,
            xyz.alpha,
        )
    })
}

//! The full set of per-pair converters. The direct edges live next to their records in
//! [`colors`](../colors/index.html) and are re-exported here; every other pair is composed out of
//! them by routing through RGB (and through XYZ for CIELAB). A composed converter validates its own
//! input first, so a bad value gives the default of the *requested* format rather than whatever the
//! pivot's default would turn into.
//!
//! Every converter takes anything that turns into the right raw record: a raw record, its branded
//! counterpart, or a reference to either. Hex converters also take `&str`.
//!
//! Round trips through RGB come back within rounding distance. Through XYZ that is one step per
//! channel. HSL only holds whole degrees and percents, so `hsl_to_rgb(rgb_to_hsl(rgb))` can move a
//! channel by up to 5 steps (2 for colors that started on the HSL grid).

use std::fmt;

use crate::defaults::Registered;
use crate::report;
use crate::validate::Validate;

pub use crate::colors::cmykcolor::{cmyk_to_rgb, rgb_to_cmyk};
pub use crate::colors::hexcolor::{hex_to_rgb, rgb_to_hex};
pub use crate::colors::hslcolor::{hsl_to_rgb, rgb_to_hsl};
pub use crate::colors::hsvcolor::{hsv_to_rgb, rgb_to_hsv};
pub use crate::colors::labcolor::{lab_to_xyz, xyz_to_lab};
pub use crate::colors::partial::{hsl_to_sl, hsv_to_sv};
pub use crate::colors::xyzcolor::{rgb_to_xyz, xyz_to_rgb};

use crate::colors::{
    CMYKColor, HSLColor, HSVColor, HexColor, LABColor, RGBColor, SVColor, XYZColor,
};
use crate::raw::{RawCMYK, RawHSL, RawHSV, RawHex, RawLAB, RawRGB, RawXYZ};

/// Runs `convert` on `raw` if it passes validation. Otherwise logs the rejected value and returns
/// the registered default of the output format.
pub(crate) fn guarded<R, T, F>(raw: R, function: &'static str, convert: F) -> T
where
    R: Validate + fmt::Debug,
    T: Registered,
    F: FnOnce(&R) -> T,
{
    if raw.is_valid() {
        convert(&raw)
    } else {
        report::warn(
            &format!("Invalid {} value {:?}", R::FORMAT, raw),
            "convert",
            function,
        );
        report::info(
            &format!("Returning the registered {} default", T::FORMAT),
            "convert",
            function,
        );
        T::registered()
    }
}

macro_rules! chain {
    ($value:expr, $hop:path) => {
        $hop($value)
    };
    ($value:expr, $hop:path, $($rest:path),+) => {
        chain!($hop($value), $($rest),+)
    };
}

// A derived converter: validate against the source format, then apply each hop in turn.
macro_rules! derived {
    ($($(#[$meta:meta])* $name:ident: $raw:ty => $out:ty = $($hop:path),+;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<C: Into<$raw>>(color: C) -> $out {
                guarded(color.into(), stringify!($name), |raw: &$raw| {
                    chain!(raw.clone(), $($hop),+)
                })
            }
        )*
    };
}

derived! {
    /// Converts RGB to CIELAB, through XYZ.
    rgb_to_lab: RawRGB => LABColor = rgb_to_xyz, xyz_to_lab;
    /// Converts CIELAB to RGB, through XYZ. Colors outside the sRGB gamut are clamped.
    lab_to_rgb: RawLAB => RGBColor = lab_to_xyz, xyz_to_rgb;

    /// Converts CMYK to hex.
    cmyk_to_hex: RawCMYK => HexColor = cmyk_to_rgb, rgb_to_hex;
    /// Converts CMYK to HSL.
    cmyk_to_hsl: RawCMYK => HSLColor = cmyk_to_rgb, rgb_to_hsl;
    /// Converts CMYK to HSV.
    cmyk_to_hsv: RawCMYK => HSVColor = cmyk_to_rgb, rgb_to_hsv;
    /// Converts CMYK to CIELAB.
    cmyk_to_lab: RawCMYK => LABColor = cmyk_to_rgb, rgb_to_xyz, xyz_to_lab;
    /// Converts CMYK to XYZ.
    cmyk_to_xyz: RawCMYK => XYZColor = cmyk_to_rgb, rgb_to_xyz;

    /// Converts hex to CMYK.
    hex_to_cmyk: RawHex => CMYKColor = hex_to_rgb, rgb_to_cmyk;
    /// Converts hex to HSL.
    hex_to_hsl: RawHex => HSLColor = hex_to_rgb, rgb_to_hsl;
    /// Converts hex to HSV.
    hex_to_hsv: RawHex => HSVColor = hex_to_rgb, rgb_to_hsv;
    /// Converts hex to CIELAB.
    hex_to_lab: RawHex => LABColor = hex_to_rgb, rgb_to_xyz, xyz_to_lab;
    /// Converts hex to XYZ.
    hex_to_xyz: RawHex => XYZColor = hex_to_rgb, rgb_to_xyz;

    /// Converts HSL to CMYK.
    hsl_to_cmyk: RawHSL => CMYKColor = hsl_to_rgb, rgb_to_cmyk;
    /// Converts HSL to hex.
    hsl_to_hex: RawHSL => HexColor = hsl_to_rgb, rgb_to_hex;
    /// Converts HSL to HSV.
    hsl_to_hsv: RawHSL => HSVColor = hsl_to_rgb, rgb_to_hsv;
    /// Converts HSL to CIELAB.
    hsl_to_lab: RawHSL => LABColor = hsl_to_rgb, rgb_to_xyz, xyz_to_lab;
    /// Converts HSL to XYZ.
    hsl_to_xyz: RawHSL => XYZColor = hsl_to_rgb, rgb_to_xyz;
    /// Projects HSL onto saturation and value, through HSV.
    hsl_to_sv: RawHSL => SVColor = hsl_to_rgb, rgb_to_hsv, hsv_to_sv;

    /// Converts HSV to CMYK.
    hsv_to_cmyk: RawHSV => CMYKColor = hsv_to_rgb, rgb_to_cmyk;
    /// Converts HSV to hex.
    hsv_to_hex: RawHSV => HexColor = hsv_to_rgb, rgb_to_hex;
    /// Converts HSV to HSL.
    hsv_to_hsl: RawHSV => HSLColor = hsv_to_rgb, rgb_to_hsl;
    /// Converts HSV to CIELAB.
    hsv_to_lab: RawHSV => LABColor = hsv_to_rgb, rgb_to_xyz, xyz_to_lab;
    /// Converts HSV to XYZ.
    hsv_to_xyz: RawHSV => XYZColor = hsv_to_rgb, rgb_to_xyz;

    /// Converts CIELAB to CMYK.
    lab_to_cmyk: RawLAB => CMYKColor = lab_to_xyz, xyz_to_rgb, rgb_to_cmyk;
    /// Converts CIELAB to hex.
    lab_to_hex: RawLAB => HexColor = lab_to_xyz, xyz_to_rgb, rgb_to_hex;
    /// Converts CIELAB to HSL.
    lab_to_hsl: RawLAB => HSLColor = lab_to_xyz, xyz_to_rgb, rgb_to_hsl;
    /// Converts CIELAB to HSV.
    lab_to_hsv: RawLAB => HSVColor = lab_to_xyz, xyz_to_rgb, rgb_to_hsv;

    /// Converts XYZ to CMYK.
    xyz_to_cmyk: RawXYZ => CMYKColor = xyz_to_rgb, rgb_to_cmyk;
    /// Converts XYZ to hex.
    xyz_to_hex: RawXYZ => HexColor = xyz_to_rgb, rgb_to_hex;
    /// Converts XYZ to HSL.
    xyz_to_hsl: RawXYZ => HSLColor = xyz_to_rgb, rgb_to_hsl;
    /// Converts XYZ to HSV.
    xyz_to_hsv: RawXYZ => HSVColor = xyz_to_rgb, rgb_to_hsv;
}

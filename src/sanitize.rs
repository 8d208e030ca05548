//! The sanitizer: the forgiving way to brand a number. Where [`as_byte_range`] and friends fail on
//! bad input, everything here rounds half away from zero to the precision of the target brand and
//! then clamps into its bounds, so the result is always valid. Converters run every number they
//! produce through this module, which is what keeps floating-point overshoot (an HSL round trip
//! landing on 255.4, say) from leaking out as an invalid value.
//!
//! [`as_byte_range`]: ../bound/fn.as_byte_range.html

use crate::bound::{
    as_alpha_range, AlphaRange, ByteRange, HexComponent, HexSet, LabA, LabB, LabL, NumericBrand,
    Percentile, Radial, XyzX, XyzY, XyzZ,
};
use crate::colors::{
    CMYKColor, HSLColor, HSVColor, HexColor, LABColor, RGBColor, SLColor, SVColor, XYZColor,
};
use crate::raw::{RawCMYK, RawHSL, RawHSV, RawLAB, RawRGB, RawSL, RawSV, RawXYZ};

/// Rounds half away from zero to `decimals` places.
pub fn round_to(raw: f64, decimals: i32) -> f64 {
    if decimals == 0 {
        raw.round()
    } else {
        let scale = 10f64.powi(decimals);
        (raw * scale).round() / scale
    }
}

/// Rounds and clamps `raw` into the brand `B`. NaN becomes the brand's zero.
pub fn sanitize<B: NumericBrand>(raw: f64) -> B {
    if raw.is_nan() {
        return B::zero();
    }
    let (min, max) = B::KIND.bounds();
    let rounded = match B::KIND.decimals() {
        Some(decimals) => round_to(raw, decimals),
        None => raw,
    };
    // clamp after rounding: the XYZ bounds are not whole numbers
    B::brand(num::clamp(rounded, min, max)).unwrap_or_else(|_| B::zero())
}

/// Sanitizes an RGB channel.
pub fn byte_range(raw: f64) -> ByteRange {
    sanitize(raw)
}

/// Sanitizes a percentage channel.
pub fn percentile(raw: f64) -> Percentile {
    sanitize(raw)
}

/// Sanitizes a hue. Out-of-range hues are clamped, not wrapped: use [`normalize_hue`] first if the
/// angle should wrap.
pub fn radial(raw: f64) -> Radial {
    sanitize(raw)
}

/// Sanitizes an opacity.
pub fn alpha(raw: f64) -> AlphaRange {
    sanitize(raw)
}

/// Wraps an angle into [0, 360). Non-finite input gives 0.
pub fn normalize_hue(hue: f64) -> f64 {
    if hue.is_finite() {
        ((hue % 360.0) + 360.0) % 360.0
    } else {
        0.0
    }
}

/// Selects one of the three CIELAB channels, which all have different bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LabAxis {
    L,
    A,
    B,
}

/// Clamps and rounds a CIELAB channel for the given axis, returning the bare number. Use the typed
/// [`lab_l`], [`lab_a`] and [`lab_b`] helpers to get a brand back.
pub fn lab(raw: f64, axis: LabAxis) -> f64 {
    match axis {
        LabAxis::L => lab_l(raw).value(),
        LabAxis::A => lab_a(raw).value(),
        LabAxis::B => lab_b(raw).value(),
    }
}

pub fn lab_l(raw: f64) -> LabL {
    sanitize(raw)
}

pub fn lab_a(raw: f64) -> LabA {
    sanitize(raw)
}

pub fn lab_b(raw: f64) -> LabB {
    sanitize(raw)
}

pub fn xyz_x(raw: f64) -> XyzX {
    sanitize(raw)
}

pub fn xyz_y(raw: f64) -> XyzY {
    sanitize(raw)
}

pub fn xyz_z(raw: f64) -> XyzZ {
    sanitize(raw)
}

/// Maps an arbitrary RGB triple to the nearest representable RGB color: each channel is rounded and
/// clipped to [0, 255]. This is the gamut clamp applied after conversions that can leave the sRGB
/// cube, such as XYZ to RGB.
pub fn clamp_rgb(red: f64, green: f64, blue: f64, alpha_raw: f64) -> RGBColor {
    RGBColor {
        red: byte_range(red),
        green: byte_range(green),
        blue: byte_range(blue),
        alpha: alpha(alpha_raw),
    }
}

// Whole-record sanitizers, for callers that build colors out of raw numbers (a palette generator
// picking hues, for example) and need them branded before handing them to the converters.

/// Brands a raw RGB record, clamping each channel.
pub fn rgb(raw: &RawRGB) -> RGBColor {
    clamp_rgb(raw.red, raw.green, raw.blue, raw.alpha)
}

/// Brands a raw HSL record. The hue is wrapped into [0, 360) before rounding.
pub fn hsl(raw: &RawHSL) -> HSLColor {
    HSLColor {
        hue: radial(normalize_hue(raw.hue)),
        saturation: percentile(raw.saturation),
        lightness: percentile(raw.lightness),
        alpha: alpha(raw.alpha),
    }
}

/// Brands a raw HSV record. The hue is wrapped into [0, 360) before rounding.
pub fn hsv(raw: &RawHSV) -> HSVColor {
    HSVColor {
        hue: radial(normalize_hue(raw.hue)),
        saturation: percentile(raw.saturation),
        value: percentile(raw.value),
        alpha: alpha(raw.alpha),
    }
}

pub fn cmyk(raw: &RawCMYK) -> CMYKColor {
    CMYKColor {
        cyan: percentile(raw.cyan),
        magenta: percentile(raw.magenta),
        yellow: percentile(raw.yellow),
        key: percentile(raw.key),
        alpha: alpha(raw.alpha),
    }
}

pub fn lab_color(raw: &RawLAB) -> LABColor {
    LABColor {
        l: lab_l(raw.l),
        a: lab_a(raw.a),
        b: lab_b(raw.b),
        alpha: alpha(raw.alpha),
    }
}

pub fn xyz(raw: &RawXYZ) -> XYZColor {
    XYZColor {
        x: xyz_x(raw.x),
        y: xyz_y(raw.y),
        z: xyz_z(raw.z),
        alpha: alpha(raw.alpha),
    }
}

pub fn sl(raw: &RawSL) -> SLColor {
    SLColor {
        saturation: percentile(raw.saturation),
        lightness: percentile(raw.lightness),
        alpha: alpha(raw.alpha),
    }
}

pub fn sv(raw: &RawSV) -> SVColor {
    SVColor {
        saturation: percentile(raw.saturation),
        value: percentile(raw.value),
        alpha: alpha(raw.alpha),
    }
}

/// Brands a hex string, falling back to opaque black when the digits are malformed. A string of
/// the form `#RRGGBBAA` carries its own alpha; otherwise `FF` is used.
pub fn hex(raw: &str) -> HexColor {
    let (set, component) = if raw.len() == 9 {
        (raw.get(..7).unwrap_or(raw), raw.get(7..).unwrap_or("FF"))
    } else {
        (raw, "FF")
    };
    match (
        crate::bound::as_hex_set(set),
        crate::bound::as_hex_component(component),
    ) {
        (Ok(set), Ok(component)) => HexColor::with_component(set, component),
        _ => HexColor::new(HexSet::black(), AlphaRange::opaque()),
    }
}

/// Turns an opacity into a hex component by `alpha * 255` scaling.
pub fn alpha_to_component(alpha: AlphaRange) -> HexComponent {
    HexComponent::from_byte(num::clamp(round_to(alpha.value() * 255.0, 0), 0.0, 255.0) as u8)
}

/// Turns a hex component into an opacity by `byte / 255` scaling.
pub fn component_to_alpha(component: &HexComponent) -> AlphaRange {
    as_alpha_range(f64::from(component.byte()) / 255.0).unwrap_or_else(|_| AlphaRange::opaque())
}

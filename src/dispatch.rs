//! The dispatcher: HSL as the interchange format. [`to_hsl`] normalizes a color of any format to
//! HSL, and [`hsl_to`] expands an HSL color to any format. This is the surface the palette layer
//! works through, since it can treat every color the same way once it is in HSL.
//!
//! Invalid values never escape as errors: they come back as the registered default of the output
//! format, as with every converter. The only hard failure is a format tag that isn't one of the
//! nine known ones, which [`hsl_to_tag`] reports as a [`FormatError`].

use crate::color::{Color, ColorFormat, FormatError};
use crate::colors::HSLColor;
use crate::convert::{self, guarded};
use crate::defaults::Registered;
use crate::raw::{RawColor, RawHSL};
use crate::report;
use crate::sanitize;

// Brands a valid HSL record as is: unlike `sanitize::hsl`, a hue of 360 is kept, not wrapped.
fn hsl_identity(hsl: &RawHSL) -> HSLColor {
    HSLColor {
        hue: sanitize::radial(hsl.hue),
        saturation: sanitize::percentile(hsl.saturation),
        lightness: sanitize::percentile(hsl.lightness),
        alpha: sanitize::alpha(hsl.alpha),
    }
}

/// Converts a color of any format to HSL. HSL input is returned unchanged.
///
/// SL and SV have no hue to recover, so they give the HSL default with a warning.
pub fn to_hsl<C: Into<RawColor>>(color: C) -> HSLColor {
    match color.into() {
        RawColor::Cmyk(c) => convert::cmyk_to_hsl(c),
        RawColor::Hex(c) => convert::hex_to_hsl(c),
        RawColor::Hsl(c) => guarded(c, "to_hsl", hsl_identity),
        RawColor::Hsv(c) => convert::hsv_to_hsl(c),
        RawColor::Lab(c) => convert::lab_to_hsl(c),
        RawColor::Rgb(c) => convert::rgb_to_hsl(c),
        RawColor::Xyz(c) => convert::xyz_to_hsl(c),
        partial @ RawColor::Sl(_) | partial @ RawColor::Sv(_) => {
            report::warn(
                &format!("Cannot recover a full color from {}", partial.format()),
                "dispatch",
                "to_hsl",
            );
            HSLColor::registered()
        }
    }
}

/// Converts an HSL color to the `target` format.
pub fn hsl_to<C: Into<RawHSL>>(color: C, target: ColorFormat) -> Color {
    let hsl = color.into();
    match target {
        ColorFormat::Cmyk => convert::hsl_to_cmyk(hsl).into(),
        ColorFormat::Hex => convert::hsl_to_hex(hsl).into(),
        ColorFormat::Hsl => guarded(hsl, "hsl_to", hsl_identity).into(),
        ColorFormat::Hsv => convert::hsl_to_hsv(hsl).into(),
        ColorFormat::Lab => convert::hsl_to_lab(hsl).into(),
        ColorFormat::Rgb => convert::hsl_to_rgb(hsl).into(),
        ColorFormat::Sl => convert::hsl_to_sl(hsl).into(),
        ColorFormat::Sv => convert::hsl_to_sv(hsl).into(),
        ColorFormat::Xyz => convert::hsl_to_xyz(hsl).into(),
    }
}

/// Like [`hsl_to`], but with the target given as a tag such as `"rgb"`. Fails only if the tag is
/// unknown.
pub fn hsl_to_tag<C: Into<RawHSL>>(color: C, tag: &str) -> Result<Color, FormatError> {
    match tag.parse::<ColorFormat>() {
        Ok(target) => Ok(hsl_to(color, target)),
        Err(err) => {
            report::error(&err.to_string(), "dispatch", "hsl_to_tag");
            Err(err)
        }
    }
}

//! This file implements HSL, a cylindrical transformation of sRGB. Hue is the angle around the
//! hexagonal projection of the RGB cube, lightness is the average of the largest and smallest
//! channels, and saturation is chroma relative to the largest chroma available at that lightness.
//! HSL is the engine's interchange format: the dispatcher normalizes everything to it.
//!
//! Converting gray into HSL gives a hue of 0, although any hue would do.

use std::fmt;

use crate::bound::{AlphaRange, NumericBrand, Percentile, Radial};
use crate::colors::rgbcolor::{hexagon, hexagon_to_rgb};
use crate::colors::RGBColor;
use crate::convert::guarded;
use crate::raw::{RawHSL, RawRGB};
use crate::sanitize;

/// A color in HSL. Saturation and lightness are percentages.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    pub hue: Radial,
    pub saturation: Percentile,
    pub lightness: Percentile,
    pub alpha: AlphaRange,
}

impl Default for HSLColor {
    fn default() -> HSLColor {
        HSLColor {
            hue: Radial::zero(),
            saturation: Percentile::zero(),
            lightness: Percentile::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<HSLColor> for RawHSL {
    fn from(color: HSLColor) -> RawHSL {
        RawHSL {
            hue: color.hue.to_f64(),
            saturation: color.saturation.to_f64(),
            lightness: color.lightness.to_f64(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a HSLColor> for RawHSL {
    fn from(color: &'a HSLColor) -> RawHSL {
        (*color).into()
    }
}

impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Converts RGB to HSL.
pub fn rgb_to_hsl<C: Into<RawRGB>>(color: C) -> HSLColor {
    guarded(color.into(), "rgb_to_hsl", |rgb: &RawRGB| {
        let hex = hexagon(rgb.normalized());
        let lightness = (hex.max + hex.min) / 2.0;
        let saturation = if hex.delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            hex.delta / (2.0 - hex.max - hex.min)
        } else {
            hex.delta / (hex.max + hex.min)
        };
        HSLColor {
            hue: sanitize::radial(hex.hue),
            saturation: sanitize::percentile(saturation * 100.0),
            lightness: sanitize::percentile(lightness * 100.0),
            alpha: sanitize::alpha(rgb.alpha),
        }
    })
}

/// Converts HSL to RGB.
pub fn hsl_to_rgb<C: Into<RawHSL>>(color: C) -> RGBColor {
    guarded(color.into(), "hsl_to_rgb", |hsl: &RawHSL| {
        let s = hsl.saturation / 100.0;
        let l = hsl.lightness / 100.0;
        // chroma is largest at half lightness and vanishes at black and white
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let (r1, g1, b1) = hexagon_to_rgb(hsl.hue, chroma);
        // lift the point so its lightness matches
        let offset = l - chroma / 2.0;
        sanitize::clamp_rgb(
            (r1 + offset) * 255.0,
            (g1 + offset) * 255.0,
            (b1 + offset) * 255.0,
            hsl.alpha,
        )
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::defaults::Registered;

    fn rgb(red: f64, green: f64, blue: f64) -> RawRGB {
        RawRGB {
            red,
            green,
            blue,
            alpha: 1.,
        }
    }

    fn hsl(hue: f64, saturation: f64, lightness: f64) -> RawHSL {
        RawHSL {
            hue,
            saturation,
            lightness,
            alpha: 1.,
        }
    }

    #[test]
    fn test_rgb_hsl_conversion() {
        let red = rgb_to_hsl(rgb(255., 0., 0.));
        assert_eq!(red.hue.value(), 0);
        assert_eq!(red.saturation.value(), 100);
        assert_eq!(red.lightness.value(), 50);
        let lavender = hsl_to_rgb(hsl(245., 50., 60.));
        // red lands on exactly 110.5 before rounding
        assert!(lavender.red.value() == 110 || lavender.red.value() == 111);
        assert_eq!((lavender.green.value(), lavender.blue.value()), (102, 204));
    }

    #[test]
    fn test_pure_red_from_hsl() {
        let red = hsl_to_rgb(hsl(0., 100., 50.));
        assert_eq!(
            (red.red.value(), red.green.value(), red.blue.value()),
            (255, 0, 0)
        );
        assert_eq!(red.alpha.value(), 1.);
    }

    #[test]
    fn test_light_colors_use_other_saturation_branch() {
        // #FFCCCC: lightness above one half
        let pink = rgb_to_hsl(rgb(255., 204., 204.));
        assert_eq!(pink.hue.value(), 0);
        assert_eq!(pink.saturation.value(), 100);
        assert_eq!(pink.lightness.value(), 90);
    }

    #[test]
    fn test_negative_sector_is_wrapped() {
        // red channel largest, blue above green
        let rose = rgb_to_hsl(rgb(255., 0., 128.));
        assert_eq!(rose.hue.value(), 330);
    }

    #[test]
    fn test_gray_and_black() {
        let gray = rgb_to_hsl(rgb(128., 128., 128.));
        assert_eq!(gray.hue.value(), 0);
        assert_eq!(gray.saturation.value(), 0);
        assert_eq!(gray.lightness.value(), 50);
        let black = rgb_to_hsl(rgb(0., 0., 0.));
        assert_eq!(black, HSLColor::default());
    }

    #[test]
    fn test_alpha_passes_through() {
        let color = hsl_to_rgb(RawHSL {
            alpha: 0.25,
            ..hsl(120., 100., 25.)
        });
        assert_eq!(color.alpha.value(), 0.25);
        assert_eq!(
            (color.red.value(), color.green.value(), color.blue.value()),
            (0, 128, 0)
        );
    }

    #[test]
    fn test_invalid_input_gives_default() {
        assert_eq!(rgb_to_hsl(rgb(300., 0., 0.)), HSLColor::registered());
        assert_eq!(rgb_to_hsl(rgb(std::f64::NAN, 0., 0.)), HSLColor::registered());
        assert_eq!(hsl_to_rgb(hsl(400., 50., 50.)), RGBColor::registered());
    }
}

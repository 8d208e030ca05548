//! This module implements the HSV color space, a cousin of HSL. The definition of value differs from
//! lightness: it goes from black to full saturation instead of black to white. This makes value an
//! extraordinarily poor analog of luminance (dark purple is the same value as white), but does make
//! hue and saturation a bit more meaningful than in HSL.

use std::fmt;

use crate::bound::{AlphaRange, NumericBrand, Percentile, Radial};
use crate::colors::rgbcolor::{hexagon, hexagon_to_rgb};
use crate::colors::RGBColor;
use crate::convert::guarded;
use crate::raw::{RawHSV, RawRGB};
use crate::sanitize;

/// An HSV color. Saturation and value are percentages.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    pub hue: Radial,
    pub saturation: Percentile,
    /// The largest RGB channel, as a percentage of 255.
    pub value: Percentile,
    pub alpha: AlphaRange,
}

impl Default for HSVColor {
    fn default() -> HSVColor {
        HSVColor {
            hue: Radial::zero(),
            saturation: Percentile::zero(),
            value: Percentile::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<HSVColor> for RawHSV {
    fn from(color: HSVColor) -> RawHSV {
        RawHSV {
            hue: color.hue.to_f64(),
            saturation: color.saturation.to_f64(),
            value: color.value.to_f64(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a HSVColor> for RawHSV {
    fn from(color: &'a HSVColor) -> RawHSV {
        (*color).into()
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hsva({}, {}%, {}%, {})",
            self.hue, self.saturation, self.value, self.alpha
        )
    }
}

/// Converts RGB to HSV.
pub fn rgb_to_hsv<C: Into<RawRGB>>(color: C) -> HSVColor {
    guarded(color.into(), "rgb_to_hsv", |rgb: &RawRGB| {
        let hex = hexagon(rgb.normalized());
        let value = hex.max;
        let saturation = if value == 0.0 { 0.0 } else { hex.delta / value };
        HSVColor {
            hue: sanitize::radial(hex.hue),
            saturation: sanitize::percentile(saturation * 100.0),
            value: sanitize::percentile(value * 100.0),
            alpha: sanitize::alpha(rgb.alpha),
        }
    })
}

/// Converts HSV to RGB.
pub fn hsv_to_rgb<C: Into<RawHSV>>(color: C) -> RGBColor {
    guarded(color.into(), "hsv_to_rgb", |hsv: &RawHSV| {
        let value = hsv.value / 100.0;
        let chroma = hsv.saturation / 100.0 * value;
        let (r1, g1, b1) = hexagon_to_rgb(hsv.hue, chroma);
        let offset = value - chroma;
        sanitize::clamp_rgb(
            (r1 + offset) * 255.0,
            (g1 + offset) * 255.0,
            (b1 + offset) * 255.0,
            hsv.alpha,
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

    #[test]
    fn test_rgb_hsv_conversion() {
        let red = rgb_to_hsv(rgb(255., 0., 0.));
        assert_eq!(red.hue.value(), 0);
        assert_eq!(red.saturation.value(), 100);
        assert_eq!(red.value.value(), 100);
        // #CC6666
        let dusty = rgb_to_hsv(rgb(204., 102., 102.));
        assert_eq!(dusty.hue.value(), 0);
        assert_eq!(dusty.saturation.value(), 50);
        assert_eq!(dusty.value.value(), 80);
    }

    #[test]
    fn test_hsv_rgb_conversion() {
        let yellowish = hsv_to_rgb(RawHSV {
            hue: 50.,
            saturation: 50.,
            value: 80.,
            alpha: 1.,
        });
        // #CCBB66
        assert_eq!(
            (yellowish.red.value(), yellowish.green.value(), yellowish.blue.value()),
            (204, 187, 102)
        );
    }

    #[test]
    fn test_black_has_no_saturation() {
        let black = rgb_to_hsv(rgb(0., 0., 0.));
        assert_eq!(black, HSVColor::default());
    }

    #[test]
    fn test_invalid_input_gives_default() {
        assert_eq!(rgb_to_hsv(rgb(0., 0., 256.)), HSVColor::registered());
        let bad = RawHSV {
            hue: 10.,
            saturation: 10.,
            value: -10.,
            alpha: 1.,
        };
        assert_eq!(hsv_to_rgb(bad), RGBColor::registered());
    }
}

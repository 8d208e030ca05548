//! CMYK, the subtractive model used in print. This is the naive device-independent version: key is
//! whatever black is needed to reach the brightest channel, and cyan, magenta and yellow make up the
//! rest. No ink limits or profiles are involved.

use std::fmt;

use crate::bound::{AlphaRange, NumericBrand, Percentile};
use crate::colors::RGBColor;
use crate::convert::guarded;
use crate::raw::{RawCMYK, RawRGB};
use crate::sanitize;

/// A CMYK color. Every channel is a percentage.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CMYKColor {
    pub cyan: Percentile,
    pub magenta: Percentile,
    pub yellow: Percentile,
    pub key: Percentile,
    pub alpha: AlphaRange,
}

impl Default for CMYKColor {
    fn default() -> CMYKColor {
        CMYKColor {
            cyan: Percentile::zero(),
            magenta: Percentile::zero(),
            yellow: Percentile::zero(),
            key: Percentile::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<CMYKColor> for RawCMYK {
    fn from(color: CMYKColor) -> RawCMYK {
        RawCMYK {
            cyan: color.cyan.to_f64(),
            magenta: color.magenta.to_f64(),
            yellow: color.yellow.to_f64(),
            key: color.key.to_f64(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a CMYKColor> for RawCMYK {
    fn from(color: &'a CMYKColor) -> RawCMYK {
        (*color).into()
    }
}

impl fmt::Display for CMYKColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%, {})",
            self.cyan, self.magenta, self.yellow, self.key, self.alpha
        )
    }
}

/// Converts RGB to CMYK.
pub fn rgb_to_cmyk<C: Into<RawRGB>>(color: C) -> CMYKColor {
    guarded(color.into(), "rgb_to_cmyk", |rgb: &RawRGB| {
        let [r, g, b] = rgb.normalized();
        let key = 1.0 - r.max(g).max(b);
        let divisor = 1.0 - key;
        // pure black leaves nothing to divide: the other inks are 0
        let ink = |channel: f64| {
            if divisor == 0.0 {
                0.0
            } else {
                (1.0 - channel - key) / divisor
            }
        };
        CMYKColor {
            cyan: sanitize::percentile(ink(r) * 100.0),
            magenta: sanitize::percentile(ink(g) * 100.0),
            yellow: sanitize::percentile(ink(b) * 100.0),
            key: sanitize::percentile(key * 100.0),
            alpha: sanitize::alpha(rgb.alpha),
        }
    })
}

/// Converts CMYK to RGB.
pub fn cmyk_to_rgb<C: Into<RawCMYK>>(color: C) -> RGBColor {
    guarded(color.into(), "cmyk_to_rgb", |cmyk: &RawCMYK| {
        let key = cmyk.key / 100.0;
        let channel = |ink: f64| 255.0 * (1.0 - ink / 100.0) * (1.0 - key);
        sanitize::clamp_rgb(
            channel(cmyk.cyan),
            channel(cmyk.magenta),
            channel(cmyk.yellow),
            cmyk.alpha,
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

    fn channels(color: CMYKColor) -> (u8, u8, u8, u8) {
        (
            color.cyan.value(),
            color.magenta.value(),
            color.yellow.value(),
            color.key.value(),
        )
    }

    #[test]
    fn test_black_is_all_key() {
        let black = rgb_to_cmyk(rgb(0., 0., 0.));
        assert_eq!(channels(black), (0, 0, 0, 100));
        assert_eq!(black.alpha.value(), 1.);
    }

    #[test]
    fn test_rgb_cmyk_conversion() {
        assert_eq!(channels(rgb_to_cmyk(rgb(255., 0., 0.))), (0, 100, 100, 0));
        assert_eq!(channels(rgb_to_cmyk(rgb(255., 255., 255.))), (0, 0, 0, 0));
        // #336699
        assert_eq!(channels(rgb_to_cmyk(rgb(51., 102., 153.))), (67, 33, 0, 40));
    }

    #[test]
    fn test_cmyk_rgb_conversion() {
        let color = cmyk_to_rgb(RawCMYK {
            cyan: 0.,
            magenta: 100.,
            yellow: 100.,
            key: 0.,
            alpha: 0.5,
        });
        assert_eq!(
            (color.red.value(), color.green.value(), color.blue.value()),
            (255, 0, 0)
        );
        assert_eq!(color.alpha.value(), 0.5);
        let black = cmyk_to_rgb(RawCMYK {
            cyan: 20.,
            magenta: 20.,
            yellow: 20.,
            key: 100.,
            alpha: 1.,
        });
        assert_eq!(black, RGBColor::default());
    }

    #[test]
    fn test_out_of_range_red_gives_default() {
        let result = rgb_to_cmyk(RawRGB {
            red: 300.,
            green: 0.,
            blue: 0.,
            alpha: 1.,
        });
        assert_eq!(result, CMYKColor::registered());
        // and not the computed value for a clamped red
        assert_ne!(channels(result), (0, 100, 100, 0));
    }
}

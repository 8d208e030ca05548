//! The partial formats: SL and SV are HSL and HSV with the hue dropped. They are handy for display
//! (a saturation/lightness picker, say) but lose information, so there is no way back from them to
//! a full color.

use std::fmt;

use crate::bound::{AlphaRange, NumericBrand, Percentile};
use crate::convert::guarded;
use crate::raw::{RawHSL, RawHSV, RawSL, RawSV};
use crate::sanitize;

/// Saturation and lightness, as in HSL.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SLColor {
    pub saturation: Percentile,
    pub lightness: Percentile,
    pub alpha: AlphaRange,
}

/// Saturation and value, as in HSV.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SVColor {
    pub saturation: Percentile,
    pub value: Percentile,
    pub alpha: AlphaRange,
}

impl Default for SLColor {
    fn default() -> SLColor {
        SLColor {
            saturation: Percentile::zero(),
            lightness: Percentile::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl Default for SVColor {
    fn default() -> SVColor {
        SVColor {
            saturation: Percentile::zero(),
            value: Percentile::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<SLColor> for RawSL {
    fn from(color: SLColor) -> RawSL {
        RawSL {
            saturation: color.saturation.to_f64(),
            lightness: color.lightness.to_f64(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a SLColor> for RawSL {
    fn from(color: &'a SLColor) -> RawSL {
        (*color).into()
    }
}

impl From<SVColor> for RawSV {
    fn from(color: SVColor) -> RawSV {
        RawSV {
            saturation: color.saturation.to_f64(),
            value: color.value.to_f64(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a SVColor> for RawSV {
    fn from(color: &'a SVColor) -> RawSV {
        (*color).into()
    }
}

impl fmt::Display for SLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sl({}%, {}%, {})", self.saturation, self.lightness, self.alpha)
    }
}

impl fmt::Display for SVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sv({}%, {}%, {})", self.saturation, self.value, self.alpha)
    }
}

/// Drops the hue of an HSL color.
pub fn hsl_to_sl<C: Into<RawHSL>>(color: C) -> SLColor {
    guarded(color.into(), "hsl_to_sl", |hsl: &RawHSL| SLColor {
        saturation: sanitize::percentile(hsl.saturation),
        lightness: sanitize::percentile(hsl.lightness),
        alpha: sanitize::alpha(hsl.alpha),
    })
}

/// Drops the hue of an HSV color.
pub fn hsv_to_sv<C: Into<RawHSV>>(color: C) -> SVColor {
    guarded(color.into(), "hsv_to_sv", |hsv: &RawHSV| SVColor {
        saturation: sanitize::percentile(hsv.saturation),
        value: sanitize::percentile(hsv.value),
        alpha: sanitize::alpha(hsv.alpha),
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::defaults::Registered;

    #[test]
    fn test_projections_keep_everything_but_hue() {
        let sl = hsl_to_sl(RawHSL {
            hue: 200.,
            saturation: 40.,
            lightness: 70.,
            alpha: 0.3,
        });
        assert_eq!(sl.saturation.value(), 40);
        assert_eq!(sl.lightness.value(), 70);
        assert_eq!(sl.alpha.value(), 0.3);
        let sv = hsv_to_sv(RawHSV {
            hue: 10.,
            saturation: 12.4,
            value: 99.5,
            alpha: 1.,
        });
        assert_eq!((sv.saturation.value(), sv.value.value()), (12, 100));
    }

    #[test]
    fn test_display() {
        assert_eq!(SLColor::default().to_string(), "sl(0%, 0%, 1)");
        assert_eq!(SVColor::default().to_string(), "sv(0%, 0%, 1)");
    }

    #[test]
    fn test_invalid_input_gives_default() {
        let bad = RawHSL {
            hue: 500.,
            saturation: 40.,
            lightness: 70.,
            alpha: 1.,
        };
        assert_eq!(hsl_to_sl(bad), SLColor::registered());
        let bad = RawHSV {
            hue: 0.,
            saturation: 40.,
            value: 170.,
            alpha: 1.,
        };
        assert_eq!(hsv_to_sv(bad), SVColor::registered());
    }
}

//! The sRGB record, hub of the conversion graph. Every format except CIELAB converts to every other
//! by going through RGB, so this file also holds the hexagonal hue math shared by HSL and HSV: the
//! RGB cube tilted onto its black-white diagonal projects to a hexagon, and hue is the position
//! around that hexagon, scaled to degrees.

use std::fmt;

use crate::bound::{AlphaRange, ByteRange, NumericBrand};
use crate::raw::RawRGB;
use crate::sanitize;

/// A color in the sRGB space, with 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    pub red: ByteRange,
    pub green: ByteRange,
    pub blue: ByteRange,
    pub alpha: AlphaRange,
}

impl RGBColor {
    /// Builds a color from three bytes and an opacity, which is clamped into 0-1.
    pub fn from_bytes(red: u8, green: u8, blue: u8, alpha: f64) -> RGBColor {
        sanitize::clamp_rgb(f64::from(red), f64::from(green), f64::from(blue), alpha)
    }
}

impl Default for RGBColor {
    /// Opaque black.
    fn default() -> RGBColor {
        RGBColor {
            red: ByteRange::zero(),
            green: ByteRange::zero(),
            blue: ByteRange::zero(),
            alpha: AlphaRange::opaque(),
        }
    }
}

impl From<RGBColor> for RawRGB {
    fn from(color: RGBColor) -> RawRGB {
        RawRGB {
            red: color.red.to_f64(),
            green: color.green.to_f64(),
            blue: color.blue.to_f64(),
            alpha: color.alpha.value(),
        }
    }
}

impl<'a> From<&'a RGBColor> for RawRGB {
    fn from(color: &'a RGBColor) -> RawRGB {
        (*color).into()
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl RawRGB {
    /// The three channels scaled to 0-1.
    pub(crate) fn normalized(&self) -> [f64; 3] {
        [self.red / 255.0, self.green / 255.0, self.blue / 255.0]
    }
}

/// The pieces of the hexagonal projection that HSL and HSV share.
pub(crate) struct Hexagon {
    /// Largest normalized channel.
    pub max: f64,
    /// Smallest normalized channel.
    pub min: f64,
    /// `max - min`: the radius of the point on the hexagon, a very rough chroma.
    pub delta: f64,
    /// Hue in degrees, wrapped into [0, 360).
    pub hue: f64,
}

/// Projects normalized RGB onto the hue hexagon.
pub(crate) fn hexagon(rgb: [f64; 3]) -> Hexagon {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // gray has no hue: 0 by convention
    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        // can go negative when blue beats green; wrapped below
        (g - b) / delta
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hexagon {
        max,
        min,
        delta,
        hue: sanitize::normalize_hue(sector * 60.0),
    }
}

/// The inverse of the hexagonal projection for a point with zero minimum: given a hue in degrees and
/// a chroma, returns the normalized (r, g, b) before the lightness offset is added.
pub(crate) fn hexagon_to_rgb(hue: f64, chroma: f64) -> (f64, f64, f64) {
    // the second-largest component, since the smallest is 0
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    // which side of the hexagon we're on decides which two components are largest
    if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

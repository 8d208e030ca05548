//! Unbranded color records: what callers hand to the engine before anything has been checked. Each
//! record mirrors a branded record in [`colors`](../colors/index.html) field for field, but holds
//! plain `f64`s (or plain strings for hex), so it can hold NaN, 300, or "#nope". The structural
//! validator decides whether a raw record may enter a converter.
//!
//! Every branded record converts into its raw counterpart losslessly, which is how converters can
//! be chained: the output of one is always valid input to the next.

use std::fmt;

use crate::color::ColorFormat;

fn opaque() -> f64 {
    1.0
}

fn opaque_component() -> String {
    "FF".to_string()
}

/// An RGB color with channels meant to be in 0-255 and alpha in 0-1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRGB {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

/// A hex color: `#RRGGBB` plus a separate two-digit alpha component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawHex {
    pub hex: String,
    #[serde(default = "opaque_component")]
    pub alpha: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHSL {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHSV {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCMYK {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLAB {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawXYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSL {
    pub saturation: f64,
    pub lightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSV {
    pub saturation: f64,
    pub value: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

impl RawHex {
    /// Builds a raw hex record from `#RRGGBB` or `#RRGGBBAA`. Nothing is checked here: a string of
    /// any other length is kept whole as the `hex` field with an `FF` alpha, and will fail
    /// validation later.
    pub fn from_hex_code(code: &str) -> RawHex {
        match (code.len(), code.get(..7), code.get(7..)) {
            (9, Some(hex), Some(alpha)) => RawHex {
                hex: hex.to_string(),
                alpha: alpha.to_string(),
            },
            _ => RawHex {
                hex: code.to_string(),
                alpha: opaque_component(),
            },
        }
    }
}

impl<'a> From<&'a str> for RawHex {
    fn from(code: &'a str) -> RawHex {
        RawHex::from_hex_code(code)
    }
}

impl fmt::Display for RawHex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.hex, self.alpha)
    }
}

/// An unchecked color value in any of the nine supported formats, tagged by `"format"` when
/// serialized: `{"format": "rgb", "red": 255, "green": 0, "blue": 0, "alpha": 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum RawColor {
    Cmyk(RawCMYK),
    Hex(RawHex),
    Hsl(RawHSL),
    Hsv(RawHSV),
    Lab(RawLAB),
    Rgb(RawRGB),
    Sl(RawSL),
    Sv(RawSV),
    Xyz(RawXYZ),
}

impl RawColor {
    /// The format tag of this value.
    pub fn format(&self) -> ColorFormat {
        match self {
            RawColor::Cmyk(_) => ColorFormat::Cmyk,
            RawColor::Hex(_) => ColorFormat::Hex,
            RawColor::Hsl(_) => ColorFormat::Hsl,
            RawColor::Hsv(_) => ColorFormat::Hsv,
            RawColor::Lab(_) => ColorFormat::Lab,
            RawColor::Rgb(_) => ColorFormat::Rgb,
            RawColor::Sl(_) => ColorFormat::Sl,
            RawColor::Sv(_) => ColorFormat::Sv,
            RawColor::Xyz(_) => ColorFormat::Xyz,
        }
    }
}

macro_rules! raw_color_from {
    ($($variant:ident($raw:ty)),*) => {
        $(
            impl From<$raw> for RawColor {
                fn from(raw: $raw) -> RawColor {
                    RawColor::$variant(raw)
                }
            }
        )*
    };
}

raw_color_from!(
    Cmyk(RawCMYK),
    Hex(RawHex),
    Hsl(RawHSL),
    Hsv(RawHSV),
    Lab(RawLAB),
    Rgb(RawRGB),
    Sl(RawSL),
    Sv(RawSV),
    Xyz(RawXYZ)
);

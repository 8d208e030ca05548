//! This file defines the closed set of color formats the engine understands and the branded
//! [`Color`] sum type. A `Color` pairs each format tag with the one record shape that belongs to
//! it, so a tag/record mismatch is a type error rather than something to check at runtime.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::colors::{
    CMYKColor, HSLColor, HSVColor, HexColor, LABColor, RGBColor, SLColor, SVColor, XYZColor,
};
use crate::raw::RawColor;

/// The tag of every supported color representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Cmyk,
    Hex,
    Hsl,
    Hsv,
    Lab,
    Rgb,
    /// Saturation and lightness only: a display summary of HSL with no inverse.
    Sl,
    /// Saturation and value only: a display summary of HSV with no inverse.
    Sv,
    Xyz,
}

/// Every format, in alphabetical order.
pub static FORMATS: [ColorFormat; 9] = [
    ColorFormat::Cmyk,
    ColorFormat::Hex,
    ColorFormat::Hsl,
    ColorFormat::Hsv,
    ColorFormat::Lab,
    ColorFormat::Rgb,
    ColorFormat::Sl,
    ColorFormat::Sv,
    ColorFormat::Xyz,
];

lazy_static! {
    static ref FORMAT_TAGS: HashMap<&'static str, ColorFormat> = hashmap! {
        "cmyk" => ColorFormat::Cmyk,
        "hex" => ColorFormat::Hex,
        "hsl" => ColorFormat::Hsl,
        "hsv" => ColorFormat::Hsv,
        "lab" => ColorFormat::Lab,
        "rgb" => ColorFormat::Rgb,
        "sl" => ColorFormat::Sl,
        "sv" => ColorFormat::Sv,
        "xyz" => ColorFormat::Xyz,
    };
}

impl ColorFormat {
    /// The lowercase tag, as used in serialized colors.
    pub fn tag(self) -> &'static str {
        match self {
            ColorFormat::Cmyk => "cmyk",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsv => "hsv",
            ColorFormat::Lab => "lab",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Sl => "sl",
            ColorFormat::Sv => "sv",
            ColorFormat::Xyz => "xyz",
        }
    }

    /// Whether this format is one of the display-only projections.
    pub fn is_partial(self) -> bool {
        self == ColorFormat::Sl || self == ColorFormat::Sv
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A format tag outside the nine known values. Unlike an out-of-range value, which the engine
/// quietly replaces with a default, this is a programming error and is always reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    UnknownFormat(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(tag) => write!(f, "Invalid color format: {:?}", tag),
        }
    }
}

impl Error for FormatError {}

impl FromStr for ColorFormat {
    type Err = FormatError;

    /// Parses a tag, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<ColorFormat, FormatError> {
        FORMAT_TAGS
            .get(s.trim().to_lowercase().as_str())
            .cloned()
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// A branded color in any supported format. Every field of every variant satisfies its range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum Color {
    Cmyk(CMYKColor),
    Hex(HexColor),
    Hsl(HSLColor),
    Hsv(HSVColor),
    Lab(LABColor),
    Rgb(RGBColor),
    Sl(SLColor),
    Sv(SVColor),
    Xyz(XYZColor),
}

impl Color {
    /// The format tag of this color.
    pub fn format(&self) -> ColorFormat {
        match self {
            Color::Cmyk(_) => ColorFormat::Cmyk,
            Color::Hex(_) => ColorFormat::Hex,
            Color::Hsl(_) => ColorFormat::Hsl,
            Color::Hsv(_) => ColorFormat::Hsv,
            Color::Lab(_) => ColorFormat::Lab,
            Color::Rgb(_) => ColorFormat::Rgb,
            Color::Sl(_) => ColorFormat::Sl,
            Color::Sv(_) => ColorFormat::Sv,
            Color::Xyz(_) => ColorFormat::Xyz,
        }
    }
}

impl From<Color> for RawColor {
    fn from(color: Color) -> RawColor {
        match color {
            Color::Cmyk(c) => RawColor::Cmyk(c.into()),
            Color::Hex(c) => RawColor::Hex(c.into()),
            Color::Hsl(c) => RawColor::Hsl(c.into()),
            Color::Hsv(c) => RawColor::Hsv(c.into()),
            Color::Lab(c) => RawColor::Lab(c.into()),
            Color::Rgb(c) => RawColor::Rgb(c.into()),
            Color::Sl(c) => RawColor::Sl(c.into()),
            Color::Sv(c) => RawColor::Sv(c.into()),
            Color::Xyz(c) => RawColor::Xyz(c.into()),
        }
    }
}

impl<'a> From<&'a Color> for RawColor {
    fn from(color: &'a Color) -> RawColor {
        color.clone().into()
    }
}

macro_rules! color_from {
    ($($variant:ident($branded:ty)),*) => {
        $(
            impl From<$branded> for Color {
                fn from(color: $branded) -> Color {
                    Color::$variant(color)
                }
            }
        )*
    };
}

color_from!(
    Cmyk(CMYKColor),
    Hex(HexColor),
    Hsl(HSLColor),
    Hsv(HSVColor),
    Lab(LABColor),
    Rgb(RGBColor),
    Sl(SLColor),
    Sv(SVColor),
    Xyz(XYZColor)
);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Cmyk(c) => write!(f, "{}", c),
            Color::Hex(c) => write!(f, "{}", c),
            Color::Hsl(c) => write!(f, "{}", c),
            Color::Hsv(c) => write!(f, "{}", c),
            Color::Lab(c) => write!(f, "{}", c),
            Color::Rgb(c) => write!(f, "{}", c),
            Color::Sl(c) => write!(f, "{}", c),
            Color::Sv(c) => write!(f, "{}", c),
            Color::Xyz(c) => write!(f, "{}", c),
        }
    }
}

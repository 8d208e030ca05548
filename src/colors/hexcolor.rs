//! Hex colors, the `#RRGGBB` strings of CSS and most design tools, with a separate two-digit alpha.
//! A `HexColor` keeps its opacity twice, once as the hex component and once as a number, and the
//! constructors are the only way to build one, so the two can never disagree.

use std::convert::TryFrom;
use std::fmt;

use crate::bound::{as_hex_component, as_hex_set, AlphaRange, HexComponent, HexSet, RangeError};
use crate::colors::RGBColor;
use crate::convert::guarded;
use crate::raw::{RawHex, RawRGB};
use crate::sanitize;

/// A hex color. Serializes as `{"hex": "#RRGGBB", "alpha": "AA"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHex", into = "RawHex")]
pub struct HexColor {
    hex: HexSet,
    alpha: HexComponent,
    num_alpha: AlphaRange,
}

impl HexColor {
    /// Builds a hex color from its digits and a numeric opacity.
    pub fn new(hex: HexSet, alpha: AlphaRange) -> HexColor {
        HexColor {
            hex,
            alpha: sanitize::alpha_to_component(alpha),
            num_alpha: alpha,
        }
    }

    /// Builds a hex color from its digits and a hex alpha component.
    pub fn with_component(hex: HexSet, alpha: HexComponent) -> HexColor {
        let num_alpha = sanitize::component_to_alpha(&alpha);
        HexColor {
            hex,
            alpha,
            num_alpha,
        }
    }

    /// The `#RRGGBB` digits.
    pub fn hex(&self) -> &HexSet {
        &self.hex
    }

    /// The alpha as two hex digits.
    pub fn alpha(&self) -> &HexComponent {
        &self.alpha
    }

    /// The alpha as a number from 0 to 1.
    pub fn num_alpha(&self) -> AlphaRange {
        self.num_alpha
    }
}

impl Default for HexColor {
    /// Opaque black, `#000000FF`.
    fn default() -> HexColor {
        HexColor::with_component(HexSet::black(), HexComponent::opaque())
    }
}

impl TryFrom<RawHex> for HexColor {
    type Error = RangeError;

    fn try_from(raw: RawHex) -> Result<HexColor, RangeError> {
        Ok(HexColor::with_component(
            as_hex_set(&raw.hex)?,
            as_hex_component(&raw.alpha)?,
        ))
    }
}

impl From<HexColor> for RawHex {
    fn from(color: HexColor) -> RawHex {
        RawHex {
            hex: color.hex.into(),
            alpha: color.alpha.into(),
        }
    }
}

impl<'a> From<&'a HexColor> for RawHex {
    fn from(color: &'a HexColor) -> RawHex {
        color.clone().into()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.hex, self.alpha)
    }
}

/// Converts RGB to hex. Fractional channels are rounded to the nearest byte.
pub fn rgb_to_hex<C: Into<RawRGB>>(color: C) -> HexColor {
    guarded(color.into(), "rgb_to_hex", |rgb: &RawRGB| {
        let rgb = sanitize::rgb(rgb);
        HexColor::new(
            HexSet::from_channels(rgb.red.value(), rgb.green.value(), rgb.blue.value()),
            rgb.alpha,
        )
    })
}

/// Converts hex to RGB. Takes either a [`RawHex`] or a `#RRGGBB[AA]` string.
pub fn hex_to_rgb<C: Into<RawHex>>(color: C) -> RGBColor {
    guarded(color.into(), "hex_to_rgb", |raw: &RawHex| {
        let color = sanitize::hex(&raw.to_string());
        let [red, green, blue] = color.hex().channels();
        RGBColor::from_bytes(red, green, blue, color.num_alpha().value())
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::defaults::Registered;

    fn rgb(red: f64, green: f64, blue: f64, alpha: f64) -> RawRGB {
        RawRGB {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[test]
    fn test_rgb_to_hex() {
        let red = rgb_to_hex(rgb(255., 0., 0., 1.));
        assert_eq!(red.hex().as_str(), "#FF0000");
        assert_eq!(red.alpha().as_str(), "FF");
        assert_eq!(red.num_alpha().value(), 1.);
        let teal = rgb_to_hex(rgb(0., 128., 127.6, 0.5));
        assert_eq!(teal.to_string(), "#00808080");
    }

    #[test]
    fn test_hex_to_rgb() {
        let color = hex_to_rgb("#336699");
        assert_eq!(
            (color.red.value(), color.green.value(), color.blue.value()),
            (51, 102, 153)
        );
        assert_eq!(color.alpha.value(), 1.);
        let translucent = hex_to_rgb("#ff000033");
        assert_eq!(translucent.red.value(), 255);
        assert_eq!(translucent.alpha.value(), 0.2);
    }

    #[test]
    fn test_alpha_stays_consistent() {
        let color = HexColor::new(HexSet::from_channels(1, 2, 3), sanitize::alpha(0.5));
        assert_eq!(color.alpha().as_str(), "80");
        let color = HexColor::with_component(HexSet::black(), HexComponent::from_byte(0));
        assert_eq!(color.num_alpha().value(), 0.);
    }

    #[test]
    fn test_alpha_survives_rgb_round_trip() {
        for byte in 0..=255u8 {
            let code = format!("#FF0000{:02X}", byte);
            let back = rgb_to_hex(hex_to_rgb(code.as_str()));
            assert_eq!(back.to_string(), code);
            assert_eq!(back.num_alpha().value(), f64::from(byte) / 255.);
        }
    }

    #[test]
    fn test_serialization() {
        let color = hex_to_rgb("#ABCDEF");
        let hex = rgb_to_hex(color);
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, r##"{"hex":"#ABCDEF","alpha":"FF"}"##);
        let back: HexColor = serde_json::from_str(r##"{"hex":"#abcdef","alpha":"ff"}"##).unwrap();
        assert_eq!(back, hex);
        assert!(serde_json::from_str::<HexColor>(r##"{"hex":"abcdef","alpha":"FF"}"##).is_err());
    }

    #[test]
    fn test_invalid_input_gives_default() {
        assert_eq!(rgb_to_hex(rgb(256., 0., 0., 1.)), HexColor::registered());
        assert_eq!(rgb_to_hex(rgb(0., 0., 0., -0.1)).to_string(), "#000000FF");
        assert_eq!(hex_to_rgb("#12345"), RGBColor::registered());
        assert_eq!(hex_to_rgb("red"), RGBColor::registered());
    }
}

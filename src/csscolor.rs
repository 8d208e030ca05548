//! This file uses the CSS numeric parsing in `cssnumeric.rs` to parse colors written in CSS-like
//! functional notation, such as "rgb(255, 0, 0)" or "cmyk(0%, 100%, 100%, 0%, 0.5)", as well as hex
//! codes like "#FF0000" and "#FF000080". The result is a [`RawColor`]: parsing only reads numbers
//! and never checks or clamps them, so "rgb(300, 0, 0)" parses fine and is rejected later by the
//! validator.
//!
//! Every function takes an optional trailing alpha component. The `rgba`, `hsla` and `hsva` names
//! are accepted as aliases. Percentages are accepted for RGB channels (as a share of 255), for alpha
//! (as a share of 1), and for every percentile field (42% is just 42). Hues, LAB and XYZ components
//! must be plain numbers.
//!
//! [`RawColor`]: ../raw/enum.RawColor.html

use std::str::FromStr;

use crate::color::ColorFormat;
use crate::cssnumeric::{parse_css_number, CSSNumeric};
pub use crate::cssnumeric::ParseError;
use crate::raw::{
    RawCMYK, RawColor, RawHSL, RawHSV, RawHex, RawLAB, RawRGB, RawSL, RawSV, RawXYZ,
};

/// How a component may be written.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Field {
    /// An RGB channel: a number, or a percentage of 255.
    Channel,
    /// A percentile field: a number, or the same number with a '%'.
    Percent,
    /// A hue or a CIE coordinate: numbers only.
    Plain,
}

/// Parses one component according to its field kind.
fn parse_field(token: &str, field: Field) -> Result<f64, ParseError> {
    let num = parse_css_number(token)?;
    match (field, num) {
        (Field::Channel, CSSNumeric::Percentage(val)) => Ok(val * 255. / 100.),
        (Field::Plain, CSSNumeric::Percentage(_)) => Err(ParseError::InvalidColorSyntax),
        _ => Ok(num.value()),
    }
}

/// Parses the alpha component: a number, or a percentage of 1.
fn parse_alpha(token: &str) -> Result<f64, ParseError> {
    match parse_css_number(token)? {
        CSSNumeric::Percentage(val) => Ok(val / 100.),
        num => Ok(num.value()),
    }
}

/// The component layout of each functional notation, without alpha.
fn fields(format: ColorFormat) -> &'static [Field] {
    match format {
        ColorFormat::Rgb => &[Field::Channel, Field::Channel, Field::Channel],
        ColorFormat::Hsl | ColorFormat::Hsv => &[Field::Plain, Field::Percent, Field::Percent],
        ColorFormat::Cmyk => &[Field::Percent, Field::Percent, Field::Percent, Field::Percent],
        ColorFormat::Lab | ColorFormat::Xyz => &[Field::Plain, Field::Plain, Field::Plain],
        ColorFormat::Sl | ColorFormat::Sv => &[Field::Percent, Field::Percent],
        // hex has no functional notation
        ColorFormat::Hex => &[],
    }
}

/// Parses a hex code, `#RRGGBB` or `#RRGGBBAA`, in either case.
pub(crate) fn parse_hex_str(code: &str) -> Result<RawHex, ParseError> {
    let digits = code
        .strip_prefix('#')
        .ok_or(ParseError::InvalidColorSyntax)?;
    if (digits.len() != 6 && digits.len() != 8) || !digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(ParseError::InvalidColorSyntax);
    }
    Ok(RawHex::from_hex_code(code))
}

/// Splits a string of the form "name(a, b, c)" into the format and its numeric components, the
/// last of which is alpha if there is one more than the format needs. Gives a ParseError on
/// invalid input.
pub(crate) fn parse_functional_str(color: &str) -> Result<(ColorFormat, Vec<f64>), ParseError> {
    let open = color.find('(').ok_or(ParseError::InvalidColorSyntax)?;
    let body = color[open + 1..]
        .strip_suffix(')')
        .ok_or(ParseError::InvalidColorSyntax)?;
    let name = color[..open].trim().to_lowercase();
    let name = match name.as_str() {
        "rgba" | "hsla" | "hsva" => &name[..3],
        other => other,
    };
    let format: ColorFormat = name.parse()?;
    let layout = fields(format);
    if layout.is_empty() {
        return Err(ParseError::InvalidColorSyntax);
    }
    let tokens: Vec<&str> = body.split(',').map(str::trim).collect();
    if tokens.len() != layout.len() && tokens.len() != layout.len() + 1 {
        return Err(ParseError::InvalidColorSyntax);
    }
    let mut nums = Vec::with_capacity(layout.len() + 1);
    for (token, field) in tokens.iter().zip(layout.iter()) {
        nums.push(parse_field(token, *field)?);
    }
    nums.push(match tokens.get(layout.len()) {
        Some(token) => parse_alpha(token)?,
        None => 1.,
    });
    Ok((format, nums))
}

impl FromStr for RawColor {
    type Err = ParseError;

    /// Parses a hex code or a color in functional notation, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<RawColor, ParseError> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex_str(s).map(RawColor::Hex);
        }
        let (format, n) = parse_functional_str(s)?;
        Ok(match format {
            ColorFormat::Rgb => RawColor::Rgb(RawRGB {
                red: n[0],
                green: n[1],
                blue: n[2],
                alpha: n[3],
            }),
            ColorFormat::Hsl => RawColor::Hsl(RawHSL {
                hue: n[0],
                saturation: n[1],
                lightness: n[2],
                alpha: n[3],
            }),
            ColorFormat::Hsv => RawColor::Hsv(RawHSV {
                hue: n[0],
                saturation: n[1],
                value: n[2],
                alpha: n[3],
            }),
            ColorFormat::Cmyk => RawColor::Cmyk(RawCMYK {
                cyan: n[0],
                magenta: n[1],
                yellow: n[2],
                key: n[3],
                alpha: n[4],
            }),
            ColorFormat::Lab => RawColor::Lab(RawLAB {
                l: n[0],
                a: n[1],
                b: n[2],
                alpha: n[3],
            }),
            ColorFormat::Xyz => RawColor::Xyz(RawXYZ {
                x: n[0],
                y: n[1],
                z: n[2],
                alpha: n[3],
            }),
            ColorFormat::Sl => RawColor::Sl(RawSL {
                saturation: n[0],
                lightness: n[1],
                alpha: n[2],
            }),
            ColorFormat::Sv => RawColor::Sv(RawSV {
                saturation: n[0],
                value: n[1],
                alpha: n[2],
            }),
            ColorFormat::Hex => return Err(ParseError::InvalidColorSyntax),
        })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_parsing() {
        // test integers, percents and floats all at once
        let color: RawColor = "rgb(125, 20%, 0.5)".parse().unwrap();
        assert_eq!(
            color,
            RawColor::Rgb(RawRGB {
                red: 125.,
                green: 51.,
                blue: 0.5,
                alpha: 1.,
            })
        );
        let color: RawColor = "rgba(1, 2, 3, 50%)".parse().unwrap();
        match color {
            RawColor::Rgb(rgb) => assert_eq!(rgb.alpha, 0.5),
            other => panic!("expected rgb, got {:?}", other),
        }
    }

    #[test]
    fn test_no_clamping() {
        let color: RawColor = "rgb(-125, 300, 10.5)".parse().unwrap();
        assert_eq!(
            color,
            RawColor::Rgb(RawRGB {
                red: -125.,
                green: 300.,
                blue: 10.5,
                alpha: 1.,
            })
        );
    }

    #[test]
    fn test_percent_fields() {
        let with: RawColor = "hsl(120, 50%, 40%)".parse().unwrap();
        let without: RawColor = "HSL(120, 50, 40)".parse().unwrap();
        assert_eq!(with, without);
        let cmyk: RawColor = "cmyk(0%, 100%, 100%, 0%, 0.5)".parse().unwrap();
        assert_eq!(
            cmyk,
            RawColor::Cmyk(RawCMYK {
                cyan: 0.,
                magenta: 100.,
                yellow: 100.,
                key: 0.,
                alpha: 0.5,
            })
        );
        // hues aren't percentages
        assert_eq!(
            "hsl(50%, 50%, 40%)".parse::<RawColor>(),
            Err(ParseError::InvalidColorSyntax)
        );
    }

    #[test]
    fn test_other_formats() {
        let lab: RawColor = "lab(53.24, 80.09, 67.2)".parse().unwrap();
        assert_eq!(lab.format(), ColorFormat::Lab);
        let sv: RawColor = " sv(10, 20%) ".parse().unwrap();
        assert_eq!(
            sv,
            RawColor::Sv(RawSV {
                saturation: 10.,
                value: 20.,
                alpha: 1.,
            })
        );
        let hsv: RawColor = "hsva(0, 0, 0, .25)".parse().unwrap();
        assert_eq!(hsv.format(), ColorFormat::Hsv);
    }

    #[test]
    fn test_hex_parsing() {
        let color: RawColor = "#11457c".parse().unwrap();
        assert_eq!(color, RawColor::Hex(RawHex::from("#11457c")));
        let color: RawColor = "#11457C80".parse().unwrap();
        assert_eq!(
            color,
            RawColor::Hex(RawHex {
                hex: "#11457C".to_string(),
                alpha: "80".to_string(),
            })
        );
        assert_eq!(
            "#11457".parse::<RawColor>(),
            Err(ParseError::InvalidColorSyntax)
        );
        assert_eq!(
            "#gg457c".parse::<RawColor>(),
            Err(ParseError::InvalidColorSyntax)
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            "hwb(120, 50%, 40%)".parse::<RawColor>(),
            Err(ParseError::UnknownFormat("hwb".to_string()))
        );
        assert_eq!(
            "rgb(123, 123, 41, 22, 1)".parse::<RawColor>(),
            Err(ParseError::InvalidColorSyntax)
        );
        assert_eq!(
            "rgb(123, 123".parse::<RawColor>(),
            Err(ParseError::InvalidColorSyntax)
        );
        assert_eq!(
            "rgb(1, two, 3)".parse::<RawColor>(),
            Err(ParseError::InvalidNumericCharacters)
        );
        assert_eq!(
            "hex(1, 2, 3)".parse::<RawColor>(),
            Err(ParseError::InvalidColorSyntax)
        );
        assert_eq!("red".parse::<RawColor>(), Err(ParseError::InvalidColorSyntax));
    }
}

//! The structural validator. Given a raw, tagged color, decides whether every field is a finite
//! number inside the bounds of the brand it will become. It never fails and never panics: anything
//! wrong, including NaN and malformed hex strings, simply makes it return `false`.
//!
//! The validator is purely numeric. Percent strings like `"42%"` are turned into numbers when they
//! are parsed (see [`csscolor`](../csscolor/index.html)), before a record ever gets here.

use crate::bound::{is_hex_component, is_hex_set, is_in_range, BrandKind};
use crate::color::ColorFormat;
use crate::raw::{
    RawCMYK, RawColor, RawHSL, RawHSV, RawHex, RawLAB, RawRGB, RawSL, RawSV, RawXYZ,
};

/// Implemented by every raw record: knows its own format and whether its fields are in range.
pub trait Validate {
    /// The format this record belongs to.
    const FORMAT: ColorFormat;
    /// Returns `true` if every field satisfies the invariant of its brand.
    fn is_valid(&self) -> bool;
}

// checks a list of (value, kind) pairs
fn all_in_range(fields: &[(f64, BrandKind)]) -> bool {
    fields.iter().all(|&(value, kind)| is_in_range(value, kind))
}

impl Validate for RawRGB {
    const FORMAT: ColorFormat = ColorFormat::Rgb;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.red, BrandKind::ByteRange),
            (self.green, BrandKind::ByteRange),
            (self.blue, BrandKind::ByteRange),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawHex {
    const FORMAT: ColorFormat = ColorFormat::Hex;
    fn is_valid(&self) -> bool {
        is_hex_set(&self.hex) && is_hex_component(&self.alpha)
    }
}

impl Validate for RawHSL {
    const FORMAT: ColorFormat = ColorFormat::Hsl;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.hue, BrandKind::Radial),
            (self.saturation, BrandKind::Percentile),
            (self.lightness, BrandKind::Percentile),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawHSV {
    const FORMAT: ColorFormat = ColorFormat::Hsv;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.hue, BrandKind::Radial),
            (self.saturation, BrandKind::Percentile),
            (self.value, BrandKind::Percentile),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawCMYK {
    const FORMAT: ColorFormat = ColorFormat::Cmyk;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.cyan, BrandKind::Percentile),
            (self.magenta, BrandKind::Percentile),
            (self.yellow, BrandKind::Percentile),
            (self.key, BrandKind::Percentile),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawLAB {
    const FORMAT: ColorFormat = ColorFormat::Lab;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.l, BrandKind::LabL),
            (self.a, BrandKind::LabA),
            (self.b, BrandKind::LabB),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawXYZ {
    const FORMAT: ColorFormat = ColorFormat::Xyz;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.x, BrandKind::XyzX),
            (self.y, BrandKind::XyzY),
            (self.z, BrandKind::XyzZ),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawSL {
    const FORMAT: ColorFormat = ColorFormat::Sl;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.saturation, BrandKind::Percentile),
            (self.lightness, BrandKind::Percentile),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

impl Validate for RawSV {
    const FORMAT: ColorFormat = ColorFormat::Sv;
    fn is_valid(&self) -> bool {
        all_in_range(&[
            (self.saturation, BrandKind::Percentile),
            (self.value, BrandKind::Percentile),
            (self.alpha, BrandKind::AlphaRange),
        ])
    }
}

/// Returns `true` if every field of `color` is in range for its declared format.
pub fn color_values_valid(color: &RawColor) -> bool {
    match color {
        RawColor::Cmyk(c) => c.is_valid(),
        RawColor::Hex(c) => c.is_valid(),
        RawColor::Hsl(c) => c.is_valid(),
        RawColor::Hsv(c) => c.is_valid(),
        RawColor::Lab(c) => c.is_valid(),
        RawColor::Rgb(c) => c.is_valid(),
        RawColor::Sl(c) => c.is_valid(),
        RawColor::Sv(c) => c.is_valid(),
        RawColor::Xyz(c) => c.is_valid(),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use std::f64::NAN;

    fn rgb(red: f64, green: f64, blue: f64, alpha: f64) -> RawColor {
        RawColor::Rgb(RawRGB {
            red,
            green,
            blue,
            alpha,
        })
    }

    #[test]
    fn test_rgb_validation() {
        assert!(color_values_valid(&rgb(255., 0., 12.5, 1.)));
        assert!(!color_values_valid(&rgb(300., 0., 0., 1.)));
        assert!(!color_values_valid(&rgb(NAN, 0., 0., 1.)));
        assert!(!color_values_valid(&rgb(0., 0., 0., 1.5)));
        assert!(!color_values_valid(&rgb(0., -1., 0., 1.)));
    }

    #[test]
    fn test_hex_validation() {
        assert!(color_values_valid(&RawColor::Hex(RawHex::from("#a1B2c3"))));
        assert!(color_values_valid(&RawColor::Hex(RawHex::from("#a1B2c380"))));
        assert!(!color_values_valid(&RawColor::Hex(RawHex::from("a1B2c3"))));
        assert!(!color_values_valid(&RawColor::Hex(RawHex {
            hex: "#a1B2c3".to_string(),
            alpha: "1".to_string(),
        })));
    }

    #[test]
    fn test_cylindrical_validation() {
        let hsl = RawHSL {
            hue: 360.,
            saturation: 100.,
            lightness: 0.,
            alpha: 0.,
        };
        assert!(hsl.is_valid());
        let hsv = RawHSV {
            hue: 361.,
            saturation: 50.,
            value: 50.,
            alpha: 1.,
        };
        assert!(!hsv.is_valid());
        let sv = RawSV {
            saturation: 50.,
            value: NAN,
            alpha: 1.,
        };
        assert!(!color_values_valid(&RawColor::Sv(sv)));
    }

    #[test]
    fn test_lab_and_xyz_validation() {
        let lab = RawLAB {
            l: 50.,
            a: -125.,
            b: 125.,
            alpha: 1.,
        };
        assert!(color_values_valid(&RawColor::Lab(lab)));
        let lab = RawLAB { a: -126., ..lab };
        assert!(!lab.is_valid());
        let xyz = RawXYZ {
            x: 95.047,
            y: 100.,
            z: 108.883,
            alpha: 1.,
        };
        assert!(xyz.is_valid());
        assert!(!RawXYZ { z: 109., ..xyz }.is_valid());
    }

    #[test]
    fn test_cmyk_validation() {
        let cmyk = RawCMYK {
            cyan: 0.,
            magenta: 100.,
            yellow: 50.,
            key: 10.,
            alpha: 1.,
        };
        assert!(cmyk.is_valid());
        assert!(!RawCMYK { key: 101., ..cmyk }.is_valid());
    }
}

//! The default registry: one zero-valued, opaque branded color per format, handed out whenever a
//! conversion receives something it can't use. The table is built the first time it's touched and
//! is read-only from then on, so any number of threads can share it.

use crate::color::{Color, ColorFormat};
use crate::colors::{
    CMYKColor, HSLColor, HSVColor, HexColor, LABColor, RGBColor, SLColor, SVColor, XYZColor,
};

/// The registered default of every format.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultRegistry {
    pub cmyk: CMYKColor,
    pub hex: HexColor,
    pub hsl: HSLColor,
    pub hsv: HSVColor,
    pub lab: LABColor,
    pub rgb: RGBColor,
    pub sl: SLColor,
    pub sv: SVColor,
    pub xyz: XYZColor,
}

impl DefaultRegistry {
    fn build() -> DefaultRegistry {
        DefaultRegistry {
            cmyk: CMYKColor::default(),
            hex: HexColor::default(),
            hsl: HSLColor::default(),
            hsv: HSVColor::default(),
            lab: LABColor::default(),
            rgb: RGBColor::default(),
            sl: SLColor::default(),
            sv: SVColor::default(),
            xyz: XYZColor::default(),
        }
    }

    /// The default for `format`, as a tagged color.
    pub fn get(&self, format: ColorFormat) -> Color {
        match format {
            ColorFormat::Cmyk => Color::Cmyk(self.cmyk),
            ColorFormat::Hex => Color::Hex(self.hex.clone()),
            ColorFormat::Hsl => Color::Hsl(self.hsl),
            ColorFormat::Hsv => Color::Hsv(self.hsv),
            ColorFormat::Lab => Color::Lab(self.lab),
            ColorFormat::Rgb => Color::Rgb(self.rgb),
            ColorFormat::Sl => Color::Sl(self.sl),
            ColorFormat::Sv => Color::Sv(self.sv),
            ColorFormat::Xyz => Color::Xyz(self.xyz),
        }
    }
}

lazy_static! {
    static ref REGISTRY: DefaultRegistry = DefaultRegistry::build();
}

/// The process-wide registry.
pub fn registry() -> &'static DefaultRegistry {
    &REGISTRY
}

/// The registered default for `format`.
pub fn default_color(format: ColorFormat) -> Color {
    REGISTRY.get(format)
}

/// A branded record with an entry in the registry.
pub trait Registered: Sized {
    /// The format this record belongs to.
    const FORMAT: ColorFormat;
    /// A copy of the registered default.
    fn registered() -> Self;
}

macro_rules! registered {
    ($($branded:ty => $format:ident, $field:ident);*) => {
        $(
            impl Registered for $branded {
                const FORMAT: ColorFormat = ColorFormat::$format;
                fn registered() -> $branded {
                    REGISTRY.$field.clone()
                }
            }
        )*
    };
}

registered!(
    CMYKColor => Cmyk, cmyk;
    HexColor => Hex, hex;
    HSLColor => Hsl, hsl;
    HSVColor => Hsv, hsv;
    LABColor => Lab, lab;
    RGBColor => Rgb, rgb;
    SLColor => Sl, sl;
    SVColor => Sv, sv;
    XYZColor => Xyz, xyz
);

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::FORMATS;

    #[test]
    fn test_registry_matches_tags() {
        for format in FORMATS.iter() {
            assert_eq!(default_color(*format).format(), *format);
        }
    }

    #[test]
    fn test_defaults_are_opaque_zero() {
        assert_eq!(HexColor::registered().to_string(), "#000000FF");
        let rgb = RGBColor::registered();
        assert_eq!(
            (rgb.red.value(), rgb.green.value(), rgb.blue.value()),
            (0, 0, 0)
        );
        assert_eq!(rgb.alpha.value(), 1.);
        let cmyk = CMYKColor::registered();
        assert_eq!(cmyk.key.value(), 0);
        assert_eq!(cmyk.alpha.value(), 1.);
        assert_eq!(SLColor::registered().alpha.value(), 1.);
    }

    #[test]
    fn test_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
    }
}

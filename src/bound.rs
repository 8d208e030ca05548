//! This module describes the branded scalars that every color record is built from. A branded
//! scalar is a primitive paired with a range (or, for hex strings, a pattern) that must hold when
//! the value is constructed: there is no way to get a `ByteRange` of 300 or a `HexSet` of "blue",
//! so any record made out of brands is valid by construction.
//!
//! Two families of constructors exist. The `as_*` functions in this module are strict: they return a
//! [`RangeError`] for anything out of bounds. The functions in [`sanitize`](../sanitize/index.html)
//! never fail: they round and clamp first. [`is_in_range`] is the non-failing predicate that the
//! structural validator is built on.

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;

use regex::Regex;

use crate::consts::D65_WHITE;

/// The numeric invariants a branded scalar can carry. Bounds are inclusive on both ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrandKind {
    /// An RGB channel, an integer from 0 to 255.
    ByteRange,
    /// Saturation, lightness, value and the CMYK channels: an integer from 0 to 100.
    Percentile,
    /// A hue angle: an integer from 0 to 360. Values are not wrapped on construction.
    Radial,
    /// Opacity, from 0 to 1. Shared by every format.
    AlphaRange,
    /// CIELAB lightness, 0 to 100.
    LabL,
    /// CIELAB green-red opponent axis, -125 to 125.
    LabA,
    /// CIELAB blue-yellow opponent axis, -125 to 125.
    LabB,
    /// CIE X, 0 to the D65 white point.
    XyzX,
    /// CIE Y, 0 to 100.
    XyzY,
    /// CIE Z, 0 to the D65 white point.
    XyzZ,
}

impl BrandKind {
    /// Returns the inclusive `(min, max)` bounds of this kind.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            BrandKind::ByteRange => (0., 255.),
            BrandKind::Percentile => (0., 100.),
            BrandKind::Radial => (0., 360.),
            BrandKind::AlphaRange => (0., 1.),
            BrandKind::LabL => (0., 100.),
            BrandKind::LabA | BrandKind::LabB => (-125., 125.),
            BrandKind::XyzX => (0., D65_WHITE[0]),
            BrandKind::XyzY => (0., D65_WHITE[1]),
            BrandKind::XyzZ => (0., D65_WHITE[2]),
        }
    }

    /// Whether values of this kind are whole numbers.
    pub fn is_integral(self) -> bool {
        match self {
            BrandKind::ByteRange | BrandKind::Percentile | BrandKind::Radial => true,
            _ => false,
        }
    }

    /// The number of decimal places the sanitizer rounds this kind to. Alpha is only clamped: it
    /// has to hit every `byte / 255` step of a hex component exactly.
    pub fn decimals(self) -> Option<i32> {
        match self {
            BrandKind::AlphaRange => None,
            kind if kind.is_integral() => Some(0),
            _ => Some(2),
        }
    }

    /// The name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            BrandKind::ByteRange => "ByteRange",
            BrandKind::Percentile => "Percentile",
            BrandKind::Radial => "Radial",
            BrandKind::AlphaRange => "AlphaRange",
            BrandKind::LabL => "LAB_L",
            BrandKind::LabA => "LAB_A",
            BrandKind::LabB => "LAB_B",
            BrandKind::XyzX => "XYZ_X",
            BrandKind::XyzY => "XYZ_Y",
            BrandKind::XyzZ => "XYZ_Z",
        }
    }
}

impl fmt::Display for BrandKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error in branding a raw value: the value broke the invariant of the type it was meant for.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// The value lies outside the inclusive bounds of its kind.
    OutOfRange { kind: BrandKind, value: f64 },
    /// The value is NaN or infinite.
    NotFinite { kind: BrandKind },
    /// The kind only holds whole numbers and the value has a fractional part.
    NotIntegral { kind: BrandKind, value: f64 },
    /// A string brand (`HexSet` or `HexComponent`) didn't match its pattern.
    Pattern { brand: &'static str, value: String },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeError::OutOfRange { kind, value } => {
                let (min, max) = kind.bounds();
                write!(f, "{} is outside the {} range [{}, {}]", value, kind, min, max)
            }
            RangeError::NotFinite { kind } => write!(f, "{} must be a finite number", kind),
            RangeError::NotIntegral { kind, value } => {
                write!(f, "{} must be a whole number, got {}", kind, value)
            }
            RangeError::Pattern { brand, value } => {
                write!(f, "{:?} does not match the {} pattern", value, brand)
            }
        }
    }
}

impl Error for RangeError {}

/// Returns `true` if `raw` is a finite number within the bounds of `kind`. This is the non-failing
/// counterpart of the `as_*` constructors: it does not check integrality, because the validator
/// accepts any in-range number and leaves rounding to the sanitizer.
pub fn is_in_range(raw: f64, kind: BrandKind) -> bool {
    let (min, max) = kind.bounds();
    raw.is_finite() && raw >= min && raw <= max
}

// Checks every invariant of a numeric kind, returning the value unchanged on success.
fn check(raw: f64, kind: BrandKind) -> Result<f64, RangeError> {
    if !raw.is_finite() {
        Err(RangeError::NotFinite { kind })
    } else if !is_in_range(raw, kind) {
        Err(RangeError::OutOfRange { kind, value: raw })
    } else if kind.is_integral() && raw.fract() != 0.0 {
        Err(RangeError::NotIntegral { kind, value: raw })
    } else {
        Ok(raw)
    }
}

/// A branded number. Implemented by every numeric brand so the sanitizer can be written once.
pub trait NumericBrand: Copy + PartialEq + fmt::Debug {
    /// The invariant this brand carries.
    const KIND: BrandKind;
    /// Brands `raw`, failing if it breaks the invariant.
    fn brand(raw: f64) -> Result<Self, RangeError>;
    /// The zero value, which lies inside every numeric range.
    fn zero() -> Self;
    /// The underlying number as a float.
    fn to_f64(self) -> f64;
}

macro_rules! numeric_brand {
    ($(#[$meta:meta])* $name:ident($repr:ty, $repr_name:tt), $kind:expr, $ctor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
        #[serde(try_from = "f64", into = $repr_name)]
        pub struct $name($repr);

        impl $name {
            /// Returns the underlying value.
            pub fn value(self) -> $repr {
                self.0
            }
        }

        impl NumericBrand for $name {
            const KIND: BrandKind = $kind;
            fn brand(raw: f64) -> Result<$name, RangeError> {
                check(raw, $kind).map(|v| $name(v as $repr))
            }
            fn zero() -> $name {
                $name(0 as $repr)
            }
            fn to_f64(self) -> f64 {
                self.0 as f64
            }
        }

        impl TryFrom<f64> for $name {
            type Error = RangeError;
            fn try_from(raw: f64) -> Result<$name, RangeError> {
                $name::brand(raw)
            }
        }

        impl From<$name> for $repr {
            fn from(val: $name) -> $repr {
                val.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        /// Brands a raw number, failing with a `RangeError` if it is out of bounds.
        pub fn $ctor(raw: f64) -> Result<$name, RangeError> {
            $name::brand(raw)
        }
    };
}

numeric_brand!(
    /// An RGB channel.
    ByteRange(u8, "u8"), BrandKind::ByteRange, as_byte_range
);
numeric_brand!(
    /// A percentage channel: saturation, lightness, value, cyan, magenta, yellow or key.
    Percentile(u8, "u8"), BrandKind::Percentile, as_percentile
);
numeric_brand!(
    /// A hue in degrees.
    Radial(u16, "u16"), BrandKind::Radial, as_radial
);
numeric_brand!(
    /// Opacity, where 0 is fully transparent and 1 fully opaque.
    AlphaRange(f64, "f64"), BrandKind::AlphaRange, as_alpha_range
);
numeric_brand!(
    /// CIELAB L*.
    LabL(f64, "f64"), BrandKind::LabL, as_lab_l
);
numeric_brand!(
    /// CIELAB a*.
    LabA(f64, "f64"), BrandKind::LabA, as_lab_a
);
numeric_brand!(
    /// CIELAB b*.
    LabB(f64, "f64"), BrandKind::LabB, as_lab_b
);
numeric_brand!(
    /// CIE X, scaled so the D65 white point has Y = 100.
    XyzX(f64, "f64"), BrandKind::XyzX, as_xyz_x
);
numeric_brand!(
    /// CIE Y (luminance).
    XyzY(f64, "f64"), BrandKind::XyzY, as_xyz_y
);
numeric_brand!(
    /// CIE Z.
    XyzZ(f64, "f64"), BrandKind::XyzZ, as_xyz_z
);

impl AlphaRange {
    /// Fully opaque.
    pub fn opaque() -> AlphaRange {
        AlphaRange(1.0)
    }
}

lazy_static! {
    static ref HEX_SET_RE: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex");
    static ref HEX_COMPONENT_RE: Regex = Regex::new(r"^[0-9A-Fa-f]{2}$").expect("valid regex");
}

/// Returns `true` if `raw` has the form `#RRGGBB`, in either case.
pub fn is_hex_set(raw: &str) -> bool {
    HEX_SET_RE.is_match(raw)
}

/// Returns `true` if `raw` is exactly two hex digits, in either case.
pub fn is_hex_component(raw: &str) -> bool {
    HEX_COMPONENT_RE.is_match(raw)
}

/// An RGB color as a `#RRGGBB` string. Digits are stored in uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexSet(String);

impl HexSet {
    /// The string, including the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The red, green and blue bytes this string encodes.
    pub fn channels(&self) -> [u8; 3] {
        let mut out = [0u8; 3];
        for (i, byte) in out.iter_mut().enumerate() {
            // the pattern guarantees six hex digits after the '#'
            *byte = u8::from_str_radix(&self.0[1 + 2 * i..3 + 2 * i], 16).unwrap_or(0);
        }
        out
    }

    /// Renders three bytes as a `HexSet`. Can't fail: every byte triple is a valid color.
    pub fn from_channels(r: u8, g: u8, b: u8) -> HexSet {
        HexSet(format!("#{:02X}{:02X}{:02X}", r, g, b))
    }

    /// Opaque black, `#000000`.
    pub fn black() -> HexSet {
        HexSet::from_channels(0, 0, 0)
    }
}

/// Brands a `#RRGGBB` string.
pub fn as_hex_set(raw: &str) -> Result<HexSet, RangeError> {
    if is_hex_set(raw) {
        Ok(HexSet(raw.to_uppercase()))
    } else {
        Err(RangeError::Pattern {
            brand: "HexSet",
            value: raw.to_string(),
        })
    }
}

impl TryFrom<String> for HexSet {
    type Error = RangeError;
    fn try_from(raw: String) -> Result<HexSet, RangeError> {
        as_hex_set(&raw)
    }
}

impl From<HexSet> for String {
    fn from(val: HexSet) -> String {
        val.0
    }
}

impl fmt::Display for HexSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single byte written as two hex digits, used for the alpha channel of a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexComponent(String);

impl HexComponent {
    /// The two digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The byte the digits encode.
    pub fn byte(&self) -> u8 {
        u8::from_str_radix(&self.0, 16).unwrap_or(0)
    }

    /// Renders a byte as a component.
    pub fn from_byte(byte: u8) -> HexComponent {
        HexComponent(format!("{:02X}", byte))
    }

    /// The fully opaque component, `FF`.
    pub fn opaque() -> HexComponent {
        HexComponent::from_byte(255)
    }
}

/// Brands a two-digit hex string.
pub fn as_hex_component(raw: &str) -> Result<HexComponent, RangeError> {
    if is_hex_component(raw) {
        Ok(HexComponent(raw.to_uppercase()))
    } else {
        Err(RangeError::Pattern {
            brand: "HexComponent",
            value: raw.to_string(),
        })
    }
}

impl TryFrom<String> for HexComponent {
    type Error = RangeError;
    fn try_from(raw: String) -> Result<HexComponent, RangeError> {
        as_hex_component(&raw)
    }
}

impl From<HexComponent> for String {
    fn from(val: HexComponent) -> String {
        val.0
    }
}

impl fmt::Display for HexComponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

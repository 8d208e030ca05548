//! This module simply brings the most common Tincture functionality under a single namespace, to
//! prevent excessive imports: the tagged [`Color`] and [`RawColor`] unions with every record they
//! carry, the two dispatcher entry points, the traits, the error types and the configuration. The
//! per-pair converters are reached through the re-exported [`convert`] module, so a caller writes
//! `convert::rgb_to_hex(...)` and the names don't crowd the namespace.

pub use crate::bound::{AlphaRange, NumericBrand, RangeError};
pub use crate::color::{Color, ColorFormat, FormatError};
pub use crate::colors::{
    CMYKColor, HSLColor, HSVColor, HexColor, LABColor, RGBColor, SLColor, SVColor, XYZColor,
};
pub use crate::config::Config;
pub use crate::convert;
pub use crate::cssnumeric::ParseError;
pub use crate::defaults::Registered;
pub use crate::dispatch::{hsl_to, hsl_to_tag, to_hsl};
pub use crate::raw::{
    RawCMYK, RawColor, RawHSL, RawHSV, RawHex, RawLAB, RawRGB, RawSL, RawSV, RawXYZ,
};
pub use crate::report::LogMode;
pub use crate::validate::{color_values_valid, Validate};

//! Tincture is the color engine behind a palette generator: a small set of color formats (RGB, hex,
//! HSL, HSV, CMYK, CIELAB and CIE XYZ, plus the display-only SL and SV projections), values that
//! can't be out of range, and conversions between every pair of them that never fail.
//!
//! Every number in a color is a *branded* scalar from [`bound`]: a `ByteRange` is always 0-255, a
//! `Radial` always 0-360, and so on. Callers hand the engine unbranded records from [`raw`], which
//! may hold anything at all. Each converter checks its input with [`validate`] first; if something is
//! out of range it logs through the [`log`] facade and returns a neutral default for the requested
//! format from [`defaults`] instead of an error. Only asking for a format that doesn't exist is an
//! error.
//!
//! ```
//! use tincture::prelude::*;
//!
//! let red = RawRGB { red: 255., green: 0., blue: 0., alpha: 1. };
//! let hex = convert::rgb_to_hex(red);
//! assert_eq!(hex.to_string(), "#FF0000FF");
//!
//! let hsl = to_hsl(RawHex::from("#FF0000"));
//! assert_eq!(hsl.hue.value(), 0);
//!
//! // out of range: you get the default, not a panic
//! let bogus = RawRGB { red: 300., ..red };
//! assert_eq!(convert::rgb_to_cmyk(bogus), CMYKColor::default());
//! ```

// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate rulinalg;
extern crate log;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod bound;
pub mod color;
pub mod colors;
pub mod config;
mod consts;
pub mod convert;
pub mod csscolor;
pub mod cssnumeric;
pub mod defaults;
pub mod dispatch;
pub mod prelude;
pub mod raw;
pub mod report;
pub mod sanitize;
pub mod validate;

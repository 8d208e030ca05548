//! This module contains one file per color representation. Each file defines the branded record
//! for its format and the *direct* conversions between that format and its pivot: RGB for
//! everything except CIELAB, which pivots through XYZ. For convenience, each record type is
//! imported into this module's namespace directly.
pub mod cmykcolor;
pub mod hexcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod labcolor;
pub mod partial;
pub mod rgbcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color records
pub use self::cmykcolor::CMYKColor;
pub use self::hexcolor::HexColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::labcolor::LABColor;
pub use self::partial::{SLColor, SVColor};
pub use self::rgbcolor::RGBColor;
pub use self::xyzcolor::XYZColor;

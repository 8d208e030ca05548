//! This file separates out the more difficult aspects of string parsing, in this case dealing with
//! CSS numeric notation and all of its warts. The color parser in `csscolor.rs` is built on top of
//! it. (Source for CSS syntax: [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)
//!
//! Numbers are only read here, never clamped: deciding whether 300 is an acceptable channel is the
//! validator's job.

use std::error::Error;
use std::fmt;

use crate::color::FormatError;

/// A CSS numeric value. Either an integer, like 255, a float, like 0.8, or a percentage, like
/// 104% or 12.5%.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum CSSNumeric {
    /// A string of digits, such as "124", with an optional leading '+' or '-'.
    Integer(isize),
    /// Two runs of digits separated by a '.', either of which may be empty but not both.
    Float(f64),
    /// An integer or float followed by '%'. Holds the number before the '%'.
    Percentage(f64),
}

impl CSSNumeric {
    /// The number as written, ignoring any '%'.
    pub fn value(self) -> f64 {
        match self {
            CSSNumeric::Integer(val) => val as f64,
            CSSNumeric::Float(val) | CSSNumeric::Percentage(val) => val,
        }
    }

    /// Whether the number was written as a percentage.
    pub fn is_percentage(self) -> bool {
        match self {
            CSSNumeric::Percentage(_) => true,
            _ => false,
        }
    }
}

/// An error in parsing a color string. Covers many different kinds of errors.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum ParseError {
    /// Non-numeric characters were used in a string on which a parse into a number was attempted.
    InvalidNumericCharacters,
    /// Invalid numeric syntax was used, such as multiple periods or plus or minus in invalid
    /// places.
    InvalidNumericSyntax,
    /// A general color syntax error occurred, such as mismatching parentheses, the wrong number of
    /// components, or uninterpretable tokens.
    InvalidColorSyntax,
    /// The function name isn't one of the known color formats.
    UnknownFormat(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::InvalidNumericCharacters => write!(f, "Unexpected non-numeric characters"),
            ParseError::InvalidNumericSyntax => write!(f, "Invalid numeric syntax"),
            ParseError::InvalidColorSyntax => write!(f, "Invalid color syntax"),
            ParseError::UnknownFormat(tag) => write!(f, "Invalid color format: {:?}", tag),
        }
    }
}

impl Error for ParseError {}

impl From<FormatError> for ParseError {
    fn from(err: FormatError) -> ParseError {
        match err {
            FormatError::UnknownFormat(tag) => ParseError::UnknownFormat(tag),
        }
    }
}

/// Parses a prechecked run of digits with at most one '.', such as "023", "142" or ".5".
fn parse_unsigned(num: &str) -> Result<f64, ParseError> {
    if num.is_empty() || num == "." {
        return Err(ParseError::InvalidNumericSyntax);
    }
    num.parse().map_err(|_| ParseError::InvalidNumericSyntax)
}

/// Parses a given CSS float (two integers separated by '.'), CSS integer (a string of characters
/// '0'-'9') or a CSS percentage (either of those followed by '%'). Returns a struct that represents
/// these various possibilities.
pub fn parse_css_number(num: &str) -> Result<CSSNumeric, ParseError> {
    // if invalid characters, return appropriate error
    if !num.chars().all(|c| "0123456789-+.%".contains(c)) {
        return Err(ParseError::InvalidNumericCharacters);
    }
    // strip the sign, if any
    let (is_positive, rest) = if let Some(rest) = num.strip_prefix('-') {
        (false, rest)
    } else {
        (true, num.strip_prefix('+').unwrap_or(num))
    };
    // any other pluses or minuses are out of place
    if rest.contains(|c: char| c == '-' || c == '+') {
        return Err(ParseError::InvalidNumericSyntax);
    }
    let sign = if is_positive { 1.0 } else { -1.0 };
    // a '%' is only allowed once, at the very end
    let (body, is_percentage) = match rest.strip_suffix('%') {
        Some(body) => (body, true),
        None => (rest, false),
    };
    if body.contains('%') || body.matches('.').count() > 1 {
        return Err(ParseError::InvalidNumericSyntax);
    }
    let magnitude = parse_unsigned(body)?;
    if is_percentage {
        Ok(CSSNumeric::Percentage(sign * magnitude))
    } else if body.contains('.') {
        Ok(CSSNumeric::Float(sign * magnitude))
    } else {
        Ok(CSSNumeric::Integer((sign * magnitude) as isize))
    }
}

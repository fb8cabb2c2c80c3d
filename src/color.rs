//! This file defines the [`Color`] trait, the interface every supported notation implements, along
//! with [`RGBColor`], the canonical color that every other notation converts through, and
//! [`ColorModel`], the closed list of notations themselves.
//!
//! Every transform in this crate goes through RGB: converting HSL to CMYK, for example, is just
//! converting HSL to RGB and then RGB to CMYK. That means RGB is the only place where values get
//! rounded to integers on the way *in*, so that's where all of the clamping and rounding lives.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use crate::error::{ColorParseError, Result};
use crate::grammar::{self, INT};

/// One of the supported color notations. The declaration order is the registry order: it's the
/// order notations are tried in during detection and the order results are listed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum ColorModel {
    /// `rgb(255, 0, 0)`
    RGB,
    /// `rgba(255, 0, 0, 1)`
    RGBA,
    /// `#FF0000`
    HEX,
    /// `hsl(0, 100%, 50%)`
    HSL,
    /// `hsv(0, 100%, 100%)`
    HSV,
    /// `cmyk(0%, 100%, 100%, 0%)`
    CMYK,
    /// `lab(53.23, 80.11, 67.22)`
    LAB,
    /// `xyz(41.2400, 21.2600, 1.9300)`
    XYZ,
    /// `yuv(0.299000, -0.147130, 0.615000)`
    YUV,
    /// `ycbcr(0.299000, 0.331264, 1.000000)`
    YCbCr,
    /// `AdobeRGB(215, 0, 0)`
    AdobeRGB,
}

impl ColorModel {
    /// Every model, in registry order.
    pub const ALL: [ColorModel; 11] = [
        ColorModel::RGB,
        ColorModel::RGBA,
        ColorModel::HEX,
        ColorModel::HSL,
        ColorModel::HSV,
        ColorModel::CMYK,
        ColorModel::LAB,
        ColorModel::XYZ,
        ColorModel::YUV,
        ColorModel::YCbCr,
        ColorModel::AdobeRGB,
    ];

    /// The canonical name of the model, used as its key in conversion results.
    pub fn name(self) -> &'static str {
        match self {
            ColorModel::RGB => "RGB",
            ColorModel::RGBA => "RGBA",
            ColorModel::HEX => "HEX",
            ColorModel::HSL => "HSL",
            ColorModel::HSV => "HSV",
            ColorModel::CMYK => "CMYK",
            ColorModel::LAB => "LAB",
            ColorModel::XYZ => "XYZ",
            ColorModel::YUV => "YUV",
            ColorModel::YCbCr => "YCbCr",
            ColorModel::AdobeRGB => "AdobeRGB",
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error for a model name that doesn't exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color model {0:?}")]
pub struct UnknownModelError(pub String);

impl FromStr for ColorModel {
    type Err = UnknownModelError;
    /// Looks up a model by name, ignoring case: `"ycbcr"` and `"YCbCr"` are the same.
    fn from_str(s: &str) -> std::result::Result<ColorModel, UnknownModelError> {
        ColorModel::ALL
            .iter()
            .cloned()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownModelError(s.to_string()))
    }
}

/// A color notation that can be converted to and from RGB, and read from and written to text. The
/// text a color writes (its [`Display`](fmt::Display) output, or *code*) is always accepted by its
/// own grammar, and is always regenerated from the color's fields.
pub trait Color: Sized + fmt::Display {
    /// Which notation this is.
    const MODEL: ColorModel;

    /// The compiled recognition grammar for this notation.
    fn grammar() -> &'static Regex;

    /// Builds the color from a successful match of [`grammar`](Color::grammar) against `text`.
    /// # Errors
    /// Gives an `InvalidField` error if a field inside the match can't be read.
    fn from_captures(caps: &regex::Captures, text: &str) -> Result<Self>;

    /// Converts an RGB color to this notation.
    fn from_rgb(rgb: RGBColor) -> Self;

    /// Converts this color back to RGB, rounding and clamping into range.
    fn to_rgb(&self) -> RGBColor;

    /// Returns `true` if, and only if, `text` is written in this notation.
    fn recognize(text: &str) -> bool {
        Self::grammar().is_match(text)
    }

    /// Parses text written in this notation.
    /// # Errors
    /// Gives a `FormatMismatch` error if the text isn't in this notation at all, and an
    /// `InvalidField` error if one of its fields is malformed.
    fn parse(text: &str) -> Result<Self> {
        let caps = grammar::captures(Self::grammar(), Self::MODEL, text)?;
        Self::from_captures(&caps, text)
    }

    /// Parses text written in this notation straight to RGB.
    /// # Errors
    /// Same as [`parse`](Color::parse).
    fn parse_to_rgb(text: &str) -> Result<RGBColor> {
        Self::parse(text).map(|color| color.to_rgb())
    }

    /// The canonical text form of this color.
    fn code(&self) -> String {
        self.to_string()
    }

    /// Converts this color to any other notation, going through RGB.
    fn convert<T: Color>(&self) -> T {
        T::from_rgb(self.to_rgb())
    }
}

/// A color in the sRGB space, with 8-bit integer channels. This is the canonical representation
/// that every other notation converts through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Builds a color from channels that may be out of range, such as the ones written in `rgb(300,
    /// 0, 0)`, clamping to 255.
    pub fn from_channels(r: u16, g: u16, b: u16) -> RGBColor {
        let clamp = |c: u16| if c > 255 { 255 } else { c as u8 };
        RGBColor {
            r: clamp(r),
            g: clamp(g),
            b: clamp(b),
        }
    }

    /// Builds a color from channels on a 0-1 scale. This is the one place floating-point values
    /// become RGB channels: each is scaled to 0-255, rounded half away from zero, and clamped.
    pub fn from_unit(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor {
            r: unit_to_channel(r),
            g: unit_to_channel(g),
            b: unit_to_channel(b),
        }
    }

    /// The channels on a 0-1 scale.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// The channels with the sRGB gamma removed, on a 0-1 scale.
    pub fn to_linear(self) -> [f64; 3] {
        let [r, g, b] = self.to_unit();
        [linearize(r), linearize(g), linearize(b)]
    }

    /// Reapplies the sRGB gamma to linear channels, clamping any that fall outside the gamut.
    pub fn from_linear(r: f64, g: f64, b: f64) -> RGBColor {
        RGBColor::from_unit(delinearize(r), delinearize(g), delinearize(b))
    }
}

/// Removes the sRGB gamma from a 0-1 channel.
pub(crate) fn linearize(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies the sRGB gamma to a linear 0-1 value.
pub(crate) fn delinearize(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn unit_to_channel(c: f64) -> u8 {
    // NaN can't come out of any of the transforms on finite input, but would otherwise become 0
    num::clamp((c * 255.0).round(), 0.0, 255.0) as u8
}

/// Rounds a 0-1 value to an integer percentage.
pub(crate) fn to_percent(x: f64) -> u8 {
    num::clamp((x * 100.0).round(), 0.0, 100.0) as u8
}

/// Rounds an angle to whole degrees in [0, 360): 359.6 rounds to 0, not 360.
pub(crate) fn to_degrees(h: f64) -> u16 {
    ((h.round() as i64).rem_euclid(360)) as u16
}

lazy_static! {
    static ref RGB_GRAMMAR: Regex = grammar::functional("rgb", false, &[INT, INT, INT]);
}

impl Color for RGBColor {
    const MODEL: ColorModel = ColorModel::RGB;

    fn grammar() -> &'static Regex {
        &RGB_GRAMMAR
    }

    fn from_captures(caps: &regex::Captures, text: &str) -> Result<RGBColor> {
        let r = grammar::field(caps, 1, "red", Self::MODEL, text)?;
        let g = grammar::field(caps, 2, "green", Self::MODEL, text)?;
        let b = grammar::field(caps, 3, "blue", Self::MODEL, text)?;
        Ok(RGBColor::from_channels(r, g, b))
    }

    fn from_rgb(rgb: RGBColor) -> RGBColor {
        rgb
    }

    fn to_rgb(&self) -> RGBColor {
        *self
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<RGBColor> {
        RGBColor::parse(s)
    }
}

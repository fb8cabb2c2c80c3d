//! RGB with an alpha channel, as in CSS's `rgba()`. Alpha has no meaning without something to
//! composite onto, so it's carried along on parsed values and dropped when converting to RGB. Going
//! the other way, an RGB color is always taken as fully opaque.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::{Color, ColorModel, RGBColor};
use crate::error::Result;
use crate::grammar::{self, ALPHA, INT};

/// An RGB color with opacity.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RGBAColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
    /// The opacity, between 0 (transparent) and 1 (opaque).
    pub a: f64,
}

lazy_static! {
    static ref RGBA_GRAMMAR: Regex = grammar::functional("rgba", false, &[INT, INT, INT, ALPHA]);
}

impl Color for RGBAColor {
    const MODEL: ColorModel = ColorModel::RGBA;

    fn grammar() -> &'static Regex {
        &RGBA_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<RGBAColor> {
        let rgb = RGBColor::from_channels(
            grammar::field(caps, 1, "red", Self::MODEL, text)?,
            grammar::field(caps, 2, "green", Self::MODEL, text)?,
            grammar::field(caps, 3, "blue", Self::MODEL, text)?,
        );
        let a = grammar::finite_field(caps, 4, "alpha", Self::MODEL, text)?;
        Ok(RGBAColor {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a,
        })
    }

    /// Always opaque.
    fn from_rgb(rgb: RGBColor) -> RGBAColor {
        RGBAColor {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: 1.0,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        RGBColor {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for RGBAColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `{}` on a float gives the shortest exact form: 1, 0.5, 0.25
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

//! YCbCr, the digital relative of YUV used by JPEG and most video codecs, with the full-range BT.601
//! coefficients. The chroma components are offset by 0.5 so that every component of an in-gamut
//! color lies between 0 and 1.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::{Color, ColorModel, RGBColor};
use crate::error::Result;
use crate::grammar::{self, fixed, SIGNED_FLOAT};

/// A YCbCr color, with every component on a 0-1 scale.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YCbCrColor {
    /// Luma.
    #[serde(rename = "Y")]
    pub y: f64,
    /// Blue-difference chroma, 0.5 for gray.
    #[serde(rename = "Cb")]
    pub cb: f64,
    /// Red-difference chroma, 0.5 for gray.
    #[serde(rename = "Cr")]
    pub cr: f64,
}

lazy_static! {
    static ref YCBCR_GRAMMAR: Regex =
        grammar::functional("ycbcr", false, &[SIGNED_FLOAT, SIGNED_FLOAT, SIGNED_FLOAT]);
}

impl Color for YCbCrColor {
    const MODEL: ColorModel = ColorModel::YCbCr;

    fn grammar() -> &'static Regex {
        &YCBCR_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<YCbCrColor> {
        Ok(YCbCrColor {
            y: grammar::finite_field(caps, 1, "Y", Self::MODEL, text)?,
            cb: grammar::finite_field(caps, 2, "Cb", Self::MODEL, text)?,
            cr: grammar::finite_field(caps, 3, "Cr", Self::MODEL, text)?,
        })
    }

    fn from_rgb(rgb: RGBColor) -> YCbCrColor {
        let [r, g, b] = rgb.to_unit();
        YCbCrColor {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            cb: -0.168736 * r - 0.331264 * g + 0.5 * b + 0.5,
            cr: 0.5 * r - 0.418688 * g - 0.081312 * b + 0.5,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let cb = self.cb - 0.5;
        let cr = self.cr - 0.5;
        RGBColor::from_unit(
            self.y + 1.402 * cr,
            self.y - 0.344136 * cb - 0.714136 * cr,
            self.y + 1.772 * cb,
        )
    }
}

impl fmt::Display for YCbCrColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ycbcr({}, {}, {})",
            fixed(self.y, 6),
            fixed(self.cb, 6),
            fixed(self.cr, 6)
        )
    }
}

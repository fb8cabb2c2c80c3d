//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but does make the hue and saturation a
//! bit more meaningful than HSL.

use std::fmt;

use regex::{Captures, Regex};

use super::{hexagon, unhexagon};
use crate::color::{to_degrees, to_percent, Color, ColorModel, RGBColor};
use crate::error::Result;
use crate::grammar::{self, INT, PERCENT};

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use colorcodes::prelude::*;
/// # use colorcodes::colors::{HSVColor, HexColor};
/// let red = HSVColor { h: 0, s: 50, v: 80 };
/// let yellow = HSVColor { h: 50, s: 50, v: 80 };
/// assert_eq!(red.convert::<HexColor>().code(), "#CC6666");
/// assert_eq!(yellow.convert::<HexColor>().code(), "#CCBB66");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HSVColor {
    /// The hue, in whole degrees from 0 to 359.
    pub h: u16,
    /// The saturation, defined as the distance between the color and the equivalent-value
    /// grayscale. A percentage from 0 to 100.
    pub s: u8,
    /// The value, defined as the largest RGB primary value of a color. A percentage from 0 to 100.
    pub v: u8,
}

lazy_static! {
    static ref HSV_GRAMMAR: Regex = grammar::functional("hsv", true, &[INT, PERCENT, PERCENT]);
}

impl Color for HSVColor {
    const MODEL: ColorModel = ColorModel::HSV;

    fn grammar() -> &'static Regex {
        &HSV_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<HSVColor> {
        let h: u16 = grammar::field(caps, 1, "hue", Self::MODEL, text)?;
        let s: u16 = grammar::field(caps, 2, "saturation", Self::MODEL, text)?;
        let v: u16 = grammar::field(caps, 3, "value", Self::MODEL, text)?;
        Ok(HSVColor {
            h: h % 360,
            s: s.min(100) as u8,
            v: v.min(100) as u8,
        })
    }

    fn from_rgb(rgb: RGBColor) -> HSVColor {
        let hex = hexagon(rgb);
        // value is just the largest component
        let value = hex.max;
        let saturation = if value == 0.0 { 0.0 } else { hex.chroma / value };

        HSVColor {
            h: to_degrees(hex.hue),
            s: to_percent(saturation),
            v: to_percent(value),
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let s = f64::from(self.s) / 100.0;
        let v = f64::from(self.v) / 100.0;
        let chroma = s * v;
        unhexagon(f64::from(self.h), chroma, v - chroma)
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}

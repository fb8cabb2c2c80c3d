//! This file implements HSL: a simple transformation of sRGB into a cylindrical space of hue,
//! saturation and lightness. HSL and HSV are very similar but have an important difference: *value*
//! in HSV runs from black to fully saturated colors, whereas *lightness* in HSL runs from black to
//! fully saturated in the middle to white at the end. This makes the saturation component of HSL
//! fairly inaccurate, because light colors can have a very high saturation even if they are extremely
//! close to white.
//!
//! Like the notation itself, every component here is an integer: degrees for hue, percentages for
//! the other two. That makes HSL lossy: there are only 101 lightness levels against RGB's 256, so a
//! round trip through HSL can move a channel by a couple of units.
//!
//! Converting gray into HSL gives a hue of 0 degrees and a saturation of 0, although any hue could be
//! used in its place.

use std::fmt;

use regex::{Captures, Regex};

use super::{hexagon, unhexagon};
use crate::color::{to_degrees, to_percent, Color, ColorModel, RGBColor};
use crate::error::Result;
use crate::grammar::{self, INT, PERCENT};

/// A color in the HSL color space, a direct transformation of the sRGB space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HSLColor {
    /// The hue component, in whole degrees from 0 to 359. Exactly the same as the hue component of
    /// HSV.
    pub h: u16,
    /// The saturation component, as a percentage from 0 to 100.
    pub s: u8,
    /// The lightness component, as a percentage from 0 to 100. Defined in HSL as the average of the
    /// largest and smallest color components in RGB, which sacrifices accuracy for convenience.
    pub l: u8,
}

lazy_static! {
    static ref HSL_GRAMMAR: Regex = grammar::functional("hsl", false, &[INT, PERCENT, PERCENT]);
}

impl Color for HSLColor {
    const MODEL: ColorModel = ColorModel::HSL;

    fn grammar() -> &'static Regex {
        &HSL_GRAMMAR
    }

    /// Hues wrap around the circle, so `hsl(480, ...)` is `hsl(120, ...)`. Percentages above 100
    /// are clamped.
    fn from_captures(caps: &Captures, text: &str) -> Result<HSLColor> {
        let h: u16 = grammar::field(caps, 1, "hue", Self::MODEL, text)?;
        let s: u16 = grammar::field(caps, 2, "saturation", Self::MODEL, text)?;
        let l: u16 = grammar::field(caps, 3, "lightness", Self::MODEL, text)?;
        Ok(HSLColor {
            h: h % 360,
            s: s.min(100) as u8,
            l: l.min(100) as u8,
        })
    }

    fn from_rgb(rgb: RGBColor) -> HSLColor {
        let hex = hexagon(rgb);

        // lightness is the average of the largest and smallest components. This essentially
        // translates to a double hex cone
        let lightness = (hex.max + hex.min) / 2.0;
        // saturation is chroma relative to the largest chroma possible at this lightness, which
        // shrinks to nothing at black and white
        let saturation = if hex.chroma == 0.0 {
            0.0
        } else {
            hex.chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: to_degrees(hex.hue),
            s: to_percent(saturation),
            l: to_percent(lightness),
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        // first get back chroma
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        // now we add the right value to each component to get the correct lightness
        let offset = l - chroma / 2.0;
        unhexagon(f64::from(self.h), chroma, offset)
    }
}

impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

//! A module that implements the Adobe RGB (1998) color space. Adobe RGB differs from sRGB in its
//! primaries, which give it a wider coverage (over half of CIE 1931), most noticeably in the
//! greens and cyans, and in its transfer curve. Both spaces share the D65 white, so converting
//! between them is a matrix on linear light with the two gamma curves on either side.
//!
//! Because every sRGB color fits inside Adobe RGB, the same 8-bit channels are spread over a larger
//! gamut: dark sRGB channels next to a bright one can move by a few units over a round trip.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::{Color, ColorModel, RGBColor};
use crate::consts::{transform, ADOBE_RGB_TO_SRGB, SRGB_TO_ADOBE_RGB};
use crate::error::Result;
use crate::grammar::{self, INT};

/// An Adobe RGB color, with 8-bit integer channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdobeRGBColor {
    /// The red primary component.
    pub r: u8,
    /// The green primary component.
    pub g: u8,
    /// The blue primary component.
    pub b: u8,
}

lazy_static! {
    static ref ADOBE_RGB_GRAMMAR: Regex = grammar::functional("AdobeRGB", false, &[INT, INT, INT]);
}

fn clamp(x: f64) -> f64 {
    num::clamp(x, 0.0, 1.0)
}

/// Adobe RGB's transfer curve, on linear light.
fn gamma(x: f64) -> f64 {
    if x <= 0.018 {
        x * 4.5
    } else {
        1.099 * x.powf(1.0 / 2.19921875) - 0.099
    }
}

/// Undoes `gamma`.
fn ungamma(x: f64) -> f64 {
    if x <= 0.081 {
        x / 4.5
    } else {
        ((x + 0.099) / 1.099).powf(2.19921875)
    }
}

impl Color for AdobeRGBColor {
    const MODEL: ColorModel = ColorModel::AdobeRGB;

    fn grammar() -> &'static Regex {
        &ADOBE_RGB_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<AdobeRGBColor> {
        let channel = |idx: usize, name: &str| -> Result<u8> {
            let c: u16 = grammar::field(caps, idx, name, Self::MODEL, text)?;
            Ok(c.min(255) as u8)
        };
        Ok(AdobeRGBColor {
            r: channel(1, "red")?,
            g: channel(2, "green")?,
            b: channel(3, "blue")?,
        })
    }

    /// sRGB fits entirely within Adobe RGB, so the clamp only catches rounding error at the edges.
    fn from_rgb(rgb: RGBColor) -> AdobeRGBColor {
        let adobe = transform(&SRGB_TO_ADOBE_RGB, rgb.to_linear());
        let encode = |x: f64| (gamma(clamp(x)) * 255.0).round() as u8;
        AdobeRGBColor {
            r: encode(adobe[0]),
            g: encode(adobe[1]),
            b: encode(adobe[2]),
        }
    }

    /// Values outside of the sRGB gamut are clipped.
    fn to_rgb(&self) -> RGBColor {
        let decode = |c: u8| ungamma(f64::from(c) / 255.0);
        let [r, g, b] = transform(
            &ADOBE_RGB_TO_SRGB,
            [decode(self.r), decode(self.g), decode(self.b)],
        );
        RGBColor::from_linear(clamp(r), clamp(g), clamp(b))
    }
}

impl fmt::Display for AdobeRGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AdobeRGB({}, {}, {})", self.r, self.g, self.b)
    }
}

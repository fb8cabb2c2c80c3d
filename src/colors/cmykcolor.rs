//! The CMYK model of process printing: cyan, magenta and yellow inks plus a separate black (key)
//! ink. This is the naive, device-independent version, with no ink limits or profiles: black ink
//! replaces as much of the other three as possible.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::{to_percent, Color, ColorModel, RGBColor};
use crate::error::Result;
use crate::grammar::{self, OPT_PERCENT};

/// A CMYK color, each component an integer percentage of ink coverage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CMYKColor {
    /// Cyan ink, from 0 to 100.
    pub c: u8,
    /// Magenta ink, from 0 to 100.
    pub m: u8,
    /// Yellow ink, from 0 to 100.
    pub y: u8,
    /// Black ink, from 0 to 100.
    pub k: u8,
}

lazy_static! {
    static ref CMYK_GRAMMAR: Regex = grammar::functional(
        "cmyk",
        false,
        &[OPT_PERCENT, OPT_PERCENT, OPT_PERCENT, OPT_PERCENT]
    );
}

impl Color for CMYKColor {
    const MODEL: ColorModel = ColorModel::CMYK;

    fn grammar() -> &'static Regex {
        &CMYK_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<CMYKColor> {
        let mut inks = [0u8; 4];
        for (i, name) in ["cyan", "magenta", "yellow", "black"].iter().enumerate() {
            let ink: u16 = grammar::field(caps, i + 1, name, Self::MODEL, text)?;
            inks[i] = ink.min(100) as u8;
        }
        Ok(CMYKColor {
            c: inks[0],
            m: inks[1],
            y: inks[2],
            k: inks[3],
        })
    }

    fn from_rgb(rgb: RGBColor) -> CMYKColor {
        let [r, g, b] = rgb.to_unit();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            // pure black: the other inks are undefined, and dividing by 1 - k would give NaN
            return CMYKColor {
                c: 0,
                m: 0,
                y: 0,
                k: 100,
            };
        }
        let ink = |channel: f64| to_percent((1.0 - channel - k) / (1.0 - k));
        CMYKColor {
            c: ink(r),
            m: ink(g),
            y: ink(b),
            k: to_percent(k),
        }
    }

    fn to_rgb(&self) -> RGBColor {
        let k = f64::from(self.k) / 100.0;
        let channel = |ink: u8| (1.0 - f64::from(ink) / 100.0) * (1.0 - k);
        RGBColor::from_unit(channel(self.c), channel(self.m), channel(self.y))
    }
}

impl fmt::Display for CMYKColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cmyk({}%, {}%, {}%, {}%)", self.c, self.m, self.y, self.k)
    }
}

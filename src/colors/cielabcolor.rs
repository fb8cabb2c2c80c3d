//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `L`, `a`,
//! and `b` in this module.
//!
//! CIELAB is defined relative to a white point. Here that is always D65, the white of sRGB, so no
//! chromatic adaptation is ever needed.

use std::fmt;

use regex::{Captures, Regex};

use super::XYZColor;
use crate::color::{Color, ColorModel, RGBColor};
use crate::consts::D65_WHITE;
use crate::error::Result;
use crate::grammar::{self, fixed, SIGNED_DECIMAL};

/// The cutoff below which the cube root is replaced by a line, to avoid an infinite slope at 0.
const EPSILON: f64 = 0.008856;
/// The slope of that line.
const KAPPA: f64 = 7.787;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis. By convention, this is usually between -128 and 127, with -128
    /// being fully green and 127 being fully magenta.
    pub a: f64,
    /// The second opponent color axis, also between -128 and 127 by convention. -128 is fully blue;
    /// 127 is fully yellow.
    pub b: f64,
}

lazy_static! {
    static ref LAB_GRAMMAR: Regex = grammar::functional(
        "lab",
        false,
        &[SIGNED_DECIMAL, SIGNED_DECIMAL, SIGNED_DECIMAL]
    );
}

impl Color for CIELABColor {
    const MODEL: ColorModel = ColorModel::LAB;

    fn grammar() -> &'static Regex {
        &LAB_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<CIELABColor> {
        Ok(CIELABColor {
            l: grammar::finite_field(caps, 1, "L", Self::MODEL, text)?,
            a: grammar::finite_field(caps, 2, "a", Self::MODEL, text)?,
            b: grammar::finite_field(caps, 3, "b", Self::MODEL, text)?,
        })
    }

    fn from_rgb(rgb: RGBColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |t: f64| {
            if t > EPSILON {
                t.cbrt()
            } else {
                KAPPA * t + 16.0 / 116.0
            }
        };
        let xyz = XYZColor::from_rgb(rgb);
        let fx = f(xyz.x / D65_WHITE[0]);
        let fy = f(xyz.y / D65_WHITE[1]);
        let fz = f(xyz.z / D65_WHITE[2]);

        // the nonlinearity above accounts for human vision, so this is just simple linear formulae
        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    fn to_rgb(&self) -> RGBColor {
        // we need the inverse function of the nonlinearity we introduced earlier
        let f_inv = |t: f64| {
            let cubed = t * t * t;
            if cubed > EPSILON {
                cubed
            } else {
                (t - 16.0 / 116.0) / KAPPA
            }
        };
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        XYZColor {
            x: f_inv(fx) * D65_WHITE[0],
            y: f_inv(fy) * D65_WHITE[1],
            z: f_inv(fz) * D65_WHITE[2],
        }
        .to_rgb()
    }
}

impl fmt::Display for CIELABColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "lab({}, {}, {})",
            fixed(self.l, 2),
            fixed(self.a, 2),
            fixed(self.b, 2)
        )
    }
}

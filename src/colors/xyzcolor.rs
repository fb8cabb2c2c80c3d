//! The CIE 1931 XYZ color space, the device-independent space that the other CIE spaces are
//! defined in terms of. This is XYZ relative to the sRGB D65 white, scaled so that white has a Y
//! (luminance) of 100.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::{Color, ColorModel, RGBColor};
use crate::consts::{transform, SRGB_TO_XYZ, XYZ_TO_SRGB};
use crate::error::Result;
use crate::grammar::{self, fixed, DECIMAL};

/// A point in the CIE 1931 XYZ color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XYZColor {
    /// The X axis, a mix of the cone responses that is always positive for real colors.
    pub x: f64,
    /// The Y axis, luminance. 100 is the luminance of reference white.
    pub y: f64,
    /// The Z axis, roughly the response of the short-wavelength (blue) cones.
    pub z: f64,
}

lazy_static! {
    static ref XYZ_GRAMMAR: Regex = grammar::functional("xyz", true, &[DECIMAL, DECIMAL, DECIMAL]);
}

impl Color for XYZColor {
    const MODEL: ColorModel = ColorModel::XYZ;

    fn grammar() -> &'static Regex {
        &XYZ_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<XYZColor> {
        Ok(XYZColor {
            x: grammar::finite_field(caps, 1, "X", Self::MODEL, text)?,
            y: grammar::finite_field(caps, 2, "Y", Self::MODEL, text)?,
            z: grammar::finite_field(caps, 3, "Z", Self::MODEL, text)?,
        })
    }

    fn from_rgb(rgb: RGBColor) -> XYZColor {
        let [r, g, b] = rgb.to_linear();
        let [x, y, z] = transform(&SRGB_TO_XYZ, [r * 100.0, g * 100.0, b * 100.0]);
        XYZColor { x, y, z }
    }

    /// Colors outside of the sRGB gamut are clamped to its edge.
    fn to_rgb(&self) -> RGBColor {
        let [r, g, b] = transform(&XYZ_TO_SRGB, [self.x / 100.0, self.y / 100.0, self.z / 100.0]);
        RGBColor::from_linear(r, g, b)
    }
}

impl fmt::Display for XYZColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "xyz({}, {}, {})",
            fixed(self.x, 4),
            fixed(self.y, 4),
            fixed(self.z, 4)
        )
    }
}

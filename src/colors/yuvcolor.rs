//! The analog YUV encoding used by PAL television: a luma component and two scaled color-difference
//! components. U and V are signed, centered on 0 for gray.

use std::fmt;

use regex::{Captures, Regex};

use crate::color::{Color, ColorModel, RGBColor};
use crate::error::Result;
use crate::grammar::{self, fixed, SIGNED_FLOAT_EXP};

/// A YUV color, with every component on the scale of 0-1 RGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct YUVColor {
    /// Luma, from 0 to 1.
    pub y: f64,
    /// The blue-difference component, from about -0.436 to 0.436.
    pub u: f64,
    /// The red-difference component, from about -0.615 to 0.615.
    pub v: f64,
}

lazy_static! {
    static ref YUV_GRAMMAR: Regex = grammar::functional(
        "yuv",
        true,
        &[SIGNED_FLOAT_EXP, SIGNED_FLOAT_EXP, SIGNED_FLOAT_EXP]
    );
}

impl Color for YUVColor {
    const MODEL: ColorModel = ColorModel::YUV;

    fn grammar() -> &'static Regex {
        &YUV_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<YUVColor> {
        Ok(YUVColor {
            y: grammar::finite_field(caps, 1, "Y", Self::MODEL, text)?,
            u: grammar::finite_field(caps, 2, "U", Self::MODEL, text)?,
            v: grammar::finite_field(caps, 3, "V", Self::MODEL, text)?,
        })
    }

    fn from_rgb(rgb: RGBColor) -> YUVColor {
        let [r, g, b] = rgb.to_unit();
        YUVColor {
            y: 0.299 * r + 0.587 * g + 0.114 * b,
            u: -0.14713 * r - 0.28886 * g + 0.436 * b,
            v: 0.615 * r - 0.51499 * g - 0.10001 * b,
        }
    }

    fn to_rgb(&self) -> RGBColor {
        RGBColor::from_unit(
            self.y + 1.13983 * self.v,
            self.y - 0.39465 * self.u - 0.58060 * self.v,
            self.y + 2.03211 * self.u,
        )
    }
}

impl fmt::Display for YUVColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "yuv({}, {}, {})",
            fixed(self.y, 6),
            fixed(self.u, 6),
            fixed(self.v, 6)
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_yuv_primaries() {
        let red = YUVColor::from_rgb(RGBColor { r: 255, g: 0, b: 0 });
        assert_eq!(red.code(), "yuv(0.299000, -0.147130, 0.615000)");
        assert_eq!(red.to_rgb(), RGBColor { r: 255, g: 0, b: 0 });
        let green = YUVColor::from_rgb(RGBColor { r: 0, g: 255, b: 0 });
        assert_eq!(green.code(), "yuv(0.587000, -0.288860, -0.514990)");
    }

    #[test]
    fn test_yuv_parsing() {
        // negative components and exponents
        let yuv = YUVColor::parse("yuv(0.311718, -0.091638, 0.166903)").unwrap();
        assert_eq!(yuv.to_rgb(), RGBColor { r: 128, g: 64, b: 32 });
        let yuv = YUVColor::parse("YUV(1, 1e-5, 0)").unwrap();
        assert_eq!(yuv.to_rgb(), RGBColor { r: 255, g: 255, b: 255 });
        // syntactically a float, but not a number that means anything
        assert!(YUVColor::recognize("yuv(1e999, 0, 0)"));
        assert!(YUVColor::parse("yuv(1e999, 0, 0)").is_err());
    }
}

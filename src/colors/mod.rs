//! This module contains various modules that implement types that implement [`Color`], one for each
//! notation besides plain `rgb()`. For convenience, each main type is imported into this module's
//! namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod adobergbcolor;
pub mod cielabcolor;
pub mod cmykcolor;
pub mod hexcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod rgbacolor;
pub mod xyzcolor;
pub mod ycbcrcolor;
pub mod yuvcolor;

// for convenience, use this namespace for the color objects
pub use self::adobergbcolor::AdobeRGBColor;
pub use self::cielabcolor::CIELABColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hexcolor::HexColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::rgbacolor::RGBAColor;
pub use self::xyzcolor::XYZColor;
pub use self::ycbcrcolor::YCbCrColor;
pub use self::yuvcolor::YUVColor;

use crate::color::RGBColor;

/// The parts of an RGB color that HSL and HSV share: both project the RGB cube onto a hexagon and
/// only differ in how they measure the third axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Hexagon {
    /// Angle around the hexagon in degrees, in [0, 360). 0 for grays.
    pub hue: f64,
    /// Largest component, from 0 to 1.
    pub max: f64,
    /// Smallest component, from 0 to 1.
    pub min: f64,
    /// `max - min`.
    pub chroma: f64,
}

/// Projects an RGB color onto the hue hexagon.
pub(crate) fn hexagon(rgb: RGBColor) -> Hexagon {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;
    // the hue is which edge of the hexagon we're on, plus how far along it
    let hue = if chroma == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / chroma + 6.0) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / chroma + 2.0)
    } else {
        60.0 * ((r - g) / chroma + 4.0)
    };
    Hexagon {
        hue,
        max,
        min,
        chroma,
    }
}

/// Goes back from a hue and chroma to RGB, adding `offset` to every component.
pub(crate) fn unhexagon(hue: f64, chroma: f64, offset: f64) -> RGBColor {
    // the second-largest component, which ramps up and down across each sector
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let (r, g, b) = match (hue / 60.0).floor() as i64 % 6 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    RGBColor::from_unit(r + offset, g + offset, b + offset)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::color::to_degrees;
    use float_cmp::approx_eq;

    #[test]
    fn test_hexagon() {
        let hex = hexagon(RGBColor { r: 255, g: 0, b: 0 });
        assert_eq!(hex.hue, 0.0);
        assert_eq!(hex.chroma, 1.0);
        let hex = hexagon(RGBColor { r: 0, g: 0, b: 255 });
        assert_eq!(hex.hue, 240.0);
        // magenta-ish reds wrap around instead of going negative
        let hex = hexagon(RGBColor { r: 255, g: 0, b: 51 });
        assert!(approx_eq!(f64, hex.hue, 348.0, epsilon = 1e-9));
        let hex = hexagon(RGBColor { r: 255, g: 0, b: 1 });
        assert!(hex.hue > 359.0 && hex.hue < 360.0, "{}", hex.hue);
        assert_eq!(to_degrees(hex.hue), 0);
        let gray = hexagon(RGBColor { r: 90, g: 90, b: 90 });
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.chroma, 0.0);
    }

    #[test]
    fn test_unhexagon() {
        assert_eq!(unhexagon(0.0, 1.0, 0.0), RGBColor { r: 255, g: 0, b: 0 });
        assert_eq!(unhexagon(120.0, 1.0, 0.0), RGBColor { r: 0, g: 255, b: 0 });
        assert_eq!(unhexagon(240.0, 1.0, 0.0), RGBColor { r: 0, g: 0, b: 255 });
        assert_eq!(unhexagon(60.0, 0.5, 0.25), RGBColor { r: 191, g: 191, b: 64 });
        assert_eq!(unhexagon(200.0, 0.0, 0.5), RGBColor { r: 128, g: 128, b: 128 });
    }
}

//! The conversion hub: given text in any supported notation, work out which notation it is, read it
//! into RGB, and then write that RGB color back out in every notation at once.
//!
//! ```
//! # use colorcodes::convert::{convert, Conversion};
//! # use colorcodes::color::ColorModel;
//! let codes = match convert("hsl(0, 100%, 50%)").unwrap() {
//!     Conversion::Recognized(codes) => codes,
//!     Conversion::Unrecognized => unreachable!(),
//! };
//! assert_eq!(codes.len(), 11);
//! assert_eq!(codes.get(ColorModel::HEX).unwrap().code(), "#FF0000");
//! assert_eq!(codes.get(ColorModel::CMYK).unwrap().code(), "cmyk(0%, 100%, 100%, 0%)");
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::color::{Color, ColorModel, RGBColor};
use crate::colors::*;
use crate::error::Result;
use crate::registry::{Registry, REGISTRY};

/// A color in one particular notation: one variant for each [`ColorModel`].
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum ColorValue {
    /// `rgb()`
    RGB(RGBColor),
    /// `rgba()`
    RGBA(RGBAColor),
    /// `#RRGGBB`
    HEX(HexColor),
    /// `hsl()`
    HSL(HSLColor),
    /// `hsv()`
    HSV(HSVColor),
    /// `cmyk()`
    CMYK(CMYKColor),
    /// `lab()`
    LAB(CIELABColor),
    /// `xyz()`
    XYZ(XYZColor),
    /// `yuv()`
    YUV(YUVColor),
    /// `ycbcr()`
    YCbCr(YCbCrColor),
    /// `AdobeRGB()`
    AdobeRGB(AdobeRGBColor),
}

// runs the same expression against whichever color is inside a ColorValue
macro_rules! each_value {
    ($value:expr, $color:ident => $body:expr) => {
        match $value {
            ColorValue::RGB($color) => $body,
            ColorValue::RGBA($color) => $body,
            ColorValue::HEX($color) => $body,
            ColorValue::HSL($color) => $body,
            ColorValue::HSV($color) => $body,
            ColorValue::CMYK($color) => $body,
            ColorValue::LAB($color) => $body,
            ColorValue::XYZ($color) => $body,
            ColorValue::YUV($color) => $body,
            ColorValue::YCbCr($color) => $body,
            ColorValue::AdobeRGB($color) => $body,
        }
    };
}

macro_rules! impl_from_color {
    ($($variant:ident($color:ty)),*) => {
        $(
            impl From<$color> for ColorValue {
                fn from(color: $color) -> ColorValue {
                    ColorValue::$variant(color)
                }
            }
        )*
    };
}

impl_from_color!(
    RGB(RGBColor),
    RGBA(RGBAColor),
    HEX(HexColor),
    HSL(HSLColor),
    HSV(HSVColor),
    CMYK(CMYKColor),
    LAB(CIELABColor),
    XYZ(XYZColor),
    YUV(YUVColor),
    YCbCr(YCbCrColor),
    AdobeRGB(AdobeRGBColor)
);

fn model_of<T: Color>(_: &T) -> ColorModel {
    T::MODEL
}

impl ColorValue {
    /// The notation this value is written in.
    pub fn model(&self) -> ColorModel {
        each_value!(self, color => model_of(color))
    }

    /// The canonical text of this value.
    pub fn code(&self) -> String {
        each_value!(self, color => color.code())
    }

    /// Converts this value back to RGB.
    pub fn to_rgb(&self) -> RGBColor {
        each_value!(self, color => color.to_rgb())
    }
}

/// A color's fields next to its code, so `HSL(0, 100%, 50%)` serializes as
/// `{"H": 0, "S": 100, "L": 50, "Code": "hsl(0, 100%, 50%)"}`.
#[derive(Serialize)]
struct Coded<'a, T: 'a> {
    #[serde(flatten)]
    fields: &'a T,
    #[serde(rename = "Code")]
    code: String,
}

fn serialize_coded<T, S>(color: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Color + Serialize,
    S: Serializer,
{
    Coded {
        fields: color,
        code: color.code(),
    }
    .serialize(serializer)
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        each_value!(self, color => serialize_coded(color, serializer))
    }
}

/// The same color written in every notation of a registry, keyed and ordered by [`ColorModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCodes {
    rgb: RGBColor,
    codes: BTreeMap<ColorModel, ColorValue>,
}

impl ColorCodes {
    /// Writes `rgb` in every notation in `registry`. The RGB entry is always present, whether or not
    /// the registry has an RGB codec.
    pub fn fan_out(registry: &Registry, rgb: RGBColor) -> ColorCodes {
        let mut codes = BTreeMap::new();
        codes.insert(ColorModel::RGB, ColorValue::RGB(rgb));
        for codec in registry.codecs() {
            if codec.model() == ColorModel::RGB {
                continue;
            }
            let value = codec.from_rgb(rgb);
            trace!("{} -> {}", codec.model(), value.code());
            codes.insert(codec.model(), value);
        }
        debug!("wrote {} in {} notations", rgb, codes.len());
        ColorCodes { rgb, codes }
    }

    /// The RGB color every other entry was generated from.
    pub fn rgb(&self) -> RGBColor {
        self.rgb
    }

    /// The entry for a single notation.
    pub fn get(&self, model: ColorModel) -> Option<&ColorValue> {
        self.codes.get(&model)
    }

    /// How many notations there are.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if there are no entries, which never happens for a finished conversion.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Every entry, in [`ColorModel`] order.
    pub fn iter(&self) -> btree_map::Iter<ColorModel, ColorValue> {
        self.codes.iter()
    }
}

impl<'a> IntoIterator for &'a ColorCodes {
    type Item = (&'a ColorModel, &'a ColorValue);
    type IntoIter = btree_map::Iter<'a, ColorModel, ColorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ColorCodes {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.codes.len()))?;
        for (model, value) in &self.codes {
            map.serialize_entry(model.name(), value)?;
        }
        map.end()
    }
}

/// The outcome of converting a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// The text was in a known notation: here it is in every notation.
    Recognized(ColorCodes),
    /// The text isn't in any known notation. This is an ordinary outcome, not an error.
    Unrecognized,
}

impl Conversion {
    /// The codes, if the text was recognized.
    pub fn codes(&self) -> Option<&ColorCodes> {
        match self {
            Conversion::Recognized(codes) => Some(codes),
            Conversion::Unrecognized => None,
        }
    }
}

impl Serialize for Conversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Conversion::Recognized(codes) => codes.serialize(serializer),
            Conversion::Unrecognized => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Unknown", &true)?;
                map.end()
            }
        }
    }
}

impl Registry {
    /// Detects the notation of `text`, reads it, and writes it back out in every notation.
    /// # Errors
    /// If the notation is detected but the text can't be read, that notation's error is returned
    /// as is. Text that isn't in any notation is [`Conversion::Unrecognized`], not an error.
    pub fn convert(&self, text: &str) -> Result<Conversion> {
        let codec = match self.detect(text) {
            Some(codec) => codec,
            None => return Ok(Conversion::Unrecognized),
        };
        let rgb = codec.parse_to_rgb(text)?;
        Ok(Conversion::Recognized(ColorCodes::fan_out(self, rgb)))
    }
}

/// Converts `text` to every notation, using the standard registry. See [`Registry::convert`].
pub fn convert(text: &str) -> Result<Conversion> {
    REGISTRY.convert(text)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::error::ColorParseError;
    use float_cmp::approx_eq;
    use maplit::btreeset;
    use std::collections::{BTreeMap, BTreeSet};

    fn codes_of(text: &str) -> ColorCodes {
        match convert(text).unwrap() {
            Conversion::Recognized(codes) => codes,
            Conversion::Unrecognized => panic!("{:?} not recognized", text),
        }
    }

    #[test]
    fn test_fan_out_completeness() {
        let codes = codes_of("rgb(255,0,0)");
        assert_eq!(codes.len(), 11);
        assert_eq!(codes.rgb(), RGBColor { r: 255, g: 0, b: 0 });
        assert_eq!(codes.get(ColorModel::RGB).unwrap().code(), "rgb(255, 0, 0)");
        let models: Vec<ColorModel> = codes.iter().map(|(model, _)| *model).collect();
        assert_eq!(models, ColorModel::ALL.to_vec());
        for (model, value) in &codes {
            assert_eq!(value.model(), *model);
        }
    }

    #[test]
    fn test_red_everywhere() {
        let codes = codes_of("#f00");
        let code = |model| codes.get(model).unwrap().code();
        assert_eq!(code(ColorModel::RGBA), "rgba(255, 0, 0, 1)");
        assert_eq!(code(ColorModel::HEX), "#FF0000");
        assert_eq!(code(ColorModel::HSL), "hsl(0, 100%, 50%)");
        assert_eq!(code(ColorModel::HSV), "hsv(0, 100%, 100%)");
        assert_eq!(code(ColorModel::CMYK), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(code(ColorModel::LAB), "lab(53.23, 80.11, 67.22)");
        assert_eq!(code(ColorModel::XYZ), "xyz(41.2400, 21.2600, 1.9300)");
        assert_eq!(code(ColorModel::YUV), "yuv(0.299000, -0.147130, 0.615000)");
        assert_eq!(code(ColorModel::YCbCr), "ycbcr(0.299000, 0.331264, 1.000000)");
        assert_eq!(code(ColorModel::AdobeRGB), "AdobeRGB(215, 0, 0)");
    }

    #[test]
    fn test_achromatic() {
        let black = codes_of("rgb(0, 0, 0)");
        assert_eq!(black.get(ColorModel::HSL).unwrap().code(), "hsl(0, 0%, 0%)");
        assert_eq!(black.get(ColorModel::HSV).unwrap().code(), "hsv(0, 0%, 0%)");
        assert_eq!(black.get(ColorModel::CMYK).unwrap().code(), "cmyk(0%, 0%, 0%, 100%)");
        let white = codes_of("#FFF");
        assert_eq!(white.get(ColorModel::HSL).unwrap().code(), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(convert("not a color").unwrap(), Conversion::Unrecognized);
        assert_eq!(convert("").unwrap(), Conversion::Unrecognized);
        assert!(convert("hsl(0, 100, 50)").unwrap().codes().is_none());
    }

    #[test]
    fn test_parse_errors_propagate() {
        // the grammar's \d accepts any Unicode digit, but u16 parsing doesn't
        match convert("rgb(\u{0661}, 2, 3)") {
            Err(ColorParseError::InvalidField { model, .. }) => assert_eq!(model, ColorModel::RGB),
            other => panic!("expected an invalid field, got {:?}", other),
        }
        match convert("yuv(1e999, 0, 0)") {
            Err(err) => assert_eq!(err.model(), ColorModel::YUV),
            Ok(conversion) => panic!("expected an error, got {:?}", conversion),
        }
    }

    #[test]
    fn test_round_trips() {
        let samples = [
            RGBColor { r: 0, g: 0, b: 0 },
            RGBColor { r: 255, g: 255, b: 255 },
            RGBColor { r: 255, g: 0, b: 0 },
            RGBColor { r: 0, g: 255, b: 0 },
            RGBColor { r: 0, g: 0, b: 255 },
            RGBColor { r: 128, g: 64, b: 32 },
        ];
        let tolerance = |model| match model {
            ColorModel::RGB | ColorModel::RGBA | ColorModel::HEX => 0,
            ColorModel::HSL | ColorModel::HSV | ColorModel::CMYK => 3,
            _ => 1,
        };
        for rgb in samples.iter() {
            for codec in REGISTRY.codecs() {
                let code = codec.from_rgb(*rgb).code();
                let back = codec.parse_to_rgb(&code).unwrap();
                let error = [
                    (i16::from(back.r) - i16::from(rgb.r)).abs(),
                    (i16::from(back.g) - i16::from(rgb.g)).abs(),
                    (i16::from(back.b) - i16::from(rgb.b)).abs(),
                ];
                let worst = error.iter().cloned().max().unwrap_or(0);
                assert!(
                    worst <= tolerance(codec.model()),
                    "{} came back as {} from {}",
                    rgb,
                    back,
                    code
                );
            }
        }
    }

    #[test]
    fn test_round_trip_bounds_over_cube() {
        // integer grammars quantize: percentages for HSL, HSV and CMYK, and 8-bit channels spread
        // over the wider Adobe RGB gamut
        let bound = |model| match model {
            ColorModel::HSL => 5,
            ColorModel::HSV => 3,
            ColorModel::CMYK => 2,
            ColorModel::AdobeRGB => 10,
            _ => 0,
        };
        let mut worst: BTreeMap<ColorModel, i16> = BTreeMap::new();
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(7) {
                    let rgb = RGBColor { r, g, b };
                    for codec in REGISTRY.codecs() {
                        let code = codec.from_rgb(rgb).code();
                        let back = codec.parse_to_rgb(&code).unwrap();
                        let error = (i16::from(back.r) - i16::from(r))
                            .abs()
                            .max((i16::from(back.g) - i16::from(g)).abs())
                            .max((i16::from(back.b) - i16::from(b)).abs());
                        assert!(
                            error <= bound(codec.model()),
                            "{} came back as {} from {}",
                            rgb,
                            back,
                            code
                        );
                        let entry = worst.entry(codec.model()).or_insert(0);
                        *entry = (*entry).max(error);
                    }
                }
            }
        }
        // the quantized notations really do lose precision somewhere in the cube
        assert_eq!(worst[&ColorModel::HSL], 5);
        assert_eq!(worst[&ColorModel::AdobeRGB], 10);
    }

    #[test]
    fn test_every_code_converts_back() {
        let codes = codes_of("rgb(128, 64, 32)");
        for (model, value) in &codes {
            let again = codes_of(&value.code());
            assert_eq!(again.len(), 11, "{}", model);
        }
    }

    #[test]
    fn test_partial_registry() {
        let registry = Registry::new(vec![
            crate::registry::Codec::of::<HexColor>(),
            crate::registry::Codec::of::<HSLColor>(),
        ]);
        let codes = registry.convert("#FF0000").unwrap().codes().cloned().unwrap();
        let models: BTreeSet<ColorModel> = codes.iter().map(|(model, _)| *model).collect();
        assert_eq!(
            models,
            btreeset! {ColorModel::RGB, ColorModel::HEX, ColorModel::HSL}
        );
        assert_eq!(registry.convert("rgb(1, 2, 3)").unwrap(), Conversion::Unrecognized);
    }

    #[test]
    fn test_results_in_model_order() {
        let registry = Registry::new(vec![
            crate::registry::Codec::of::<AdobeRGBColor>(),
            crate::registry::Codec::of::<HSLColor>(),
            crate::registry::Codec::of::<HexColor>(),
        ]);
        let codes = registry.convert("#00FF00").unwrap().codes().cloned().unwrap();
        let models: Vec<ColorModel> = codes.iter().map(|(model, _)| *model).collect();
        assert_eq!(
            models,
            vec![ColorModel::RGB, ColorModel::HEX, ColorModel::HSL, ColorModel::AdobeRGB]
        );
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(convert("nope").unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"Unknown": true}));

        let json = serde_json::to_value(convert("rgb(255, 0, 0)").unwrap()).unwrap();
        let keys: BTreeSet<String> = json.as_object().unwrap().keys().cloned().collect();
        let expected: BTreeSet<String> =
            ColorModel::ALL.iter().map(|model| model.name().to_string()).collect();
        assert_eq!(keys, expected);
        assert_eq!(
            json["RGB"],
            serde_json::json!({"R": 255, "G": 0, "B": 0, "Code": "rgb(255, 0, 0)"})
        );
        assert_eq!(
            json["HSL"],
            serde_json::json!({"H": 0, "S": 100, "L": 50, "Code": "hsl(0, 100%, 50%)"})
        );
        assert_eq!(
            json["HEX"],
            serde_json::json!({"Hex": "FF0000", "Code": "#FF0000"})
        );
        let cb = json["YCbCr"]["Cb"].as_f64().unwrap();
        assert!(approx_eq!(f64, cb, 0.331264, epsilon = 1e-9));
        assert_eq!(json["RGBA"]["A"], serde_json::json!(1.0));
    }
}

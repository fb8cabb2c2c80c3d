//! The registry is the fixed, ordered list of every notation this crate understands. Each entry is a
//! [`Codec`]: the type-erased face of a [`Color`] implementation, so that the notations can be
//! walked over at runtime without knowing their types.
//!
//! The order of the registry decides detection: each grammar is tried in turn and the first that
//! matches wins. Conversion results don't follow it: they are always listed in [`ColorModel`] order,
//! which the standard registry shares.

use std::fmt;

use crate::color::{Color, ColorModel, RGBColor};
use crate::colors::*;
use crate::convert::ColorValue;
use crate::error::Result;

/// A single notation, detached from its concrete type.
#[derive(Copy, Clone)]
pub struct Codec {
    model: ColorModel,
    recognize: fn(&str) -> bool,
    parse_to_rgb: fn(&str) -> Result<RGBColor>,
    from_rgb: fn(RGBColor) -> ColorValue,
}

fn encode<T: Color + Into<ColorValue>>(rgb: RGBColor) -> ColorValue {
    T::from_rgb(rgb).into()
}

impl Codec {
    /// The codec for any [`Color`].
    pub fn of<T: Color + Into<ColorValue>>() -> Codec {
        Codec {
            model: T::MODEL,
            recognize: T::recognize,
            parse_to_rgb: T::parse_to_rgb,
            from_rgb: encode::<T>,
        }
    }

    /// The notation this codec reads and writes.
    pub fn model(&self) -> ColorModel {
        self.model
    }

    /// Returns `true` if `text` is written in this codec's notation.
    pub fn recognize(&self, text: &str) -> bool {
        (self.recognize)(text)
    }

    /// Parses `text` in this codec's notation and converts it to RGB.
    /// # Errors
    /// Fails with the notation's [`ColorParseError`](crate::error::ColorParseError) if `text`
    /// doesn't match its grammar or has a malformed field.
    pub fn parse_to_rgb(&self, text: &str) -> Result<RGBColor> {
        (self.parse_to_rgb)(text)
    }

    /// Writes an RGB color in this codec's notation.
    pub fn from_rgb(&self, rgb: RGBColor) -> ColorValue {
        (self.from_rgb)(rgb)
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Codec").field("model", &self.model).finish()
    }
}

/// An ordered collection of codecs.
#[derive(Debug, Clone)]
pub struct Registry {
    codecs: Vec<Codec>,
}

lazy_static! {
    /// The registry of every supported notation, in [`ColorModel`] order.
    pub static ref REGISTRY: Registry = Registry::standard();
}

impl Registry {
    /// Builds a registry from codecs, kept in the given order.
    pub fn new(codecs: Vec<Codec>) -> Registry {
        Registry { codecs }
    }

    /// Builds the registry of every supported notation. Most code should use [`REGISTRY`] instead
    /// of building a new one.
    pub fn standard() -> Registry {
        Registry::new(vec![
            Codec::of::<RGBColor>(),
            Codec::of::<RGBAColor>(),
            Codec::of::<HexColor>(),
            Codec::of::<HSLColor>(),
            Codec::of::<HSVColor>(),
            Codec::of::<CMYKColor>(),
            Codec::of::<CIELABColor>(),
            Codec::of::<XYZColor>(),
            Codec::of::<YUVColor>(),
            Codec::of::<YCbCrColor>(),
            Codec::of::<AdobeRGBColor>(),
        ])
    }

    /// Every codec, in order.
    pub fn codecs(&self) -> &[Codec] {
        &self.codecs
    }

    /// The models of every codec, in order.
    pub fn models(&self) -> Vec<ColorModel> {
        self.codecs.iter().map(Codec::model).collect()
    }

    /// Looks up the codec for a model, if this registry has one.
    pub fn codec(&self, model: ColorModel) -> Option<&Codec> {
        self.codecs.iter().find(|codec| codec.model == model)
    }

    /// Finds the first codec, in order, whose grammar matches `text`. `None` means the text isn't
    /// written in any notation this registry knows about.
    pub fn detect(&self, text: &str) -> Option<&Codec> {
        let found = self.codecs.iter().find(|codec| codec.recognize(text));
        match found {
            Some(codec) => debug!("detected {} in {:?}", codec.model, text),
            None => debug!("no notation matches {:?}", text),
        }
        found
    }
}

/// Detects which notation `text` is written in, using the standard registry.
/// ```
/// # use colorcodes::registry::detect;
/// # use colorcodes::color::ColorModel;
/// assert_eq!(detect("hsl(120, 100%, 50%)"), Some(ColorModel::HSL));
/// assert_eq!(detect("#0f0"), Some(ColorModel::HEX));
/// assert_eq!(detect("green"), None);
/// ```
pub fn detect(text: &str) -> Option<ColorModel> {
    REGISTRY.detect(text).map(Codec::model)
}

//! Hexadecimal RGB notation, as in HTML and CSS: `#FF8000`, or the shorthand `#F80` where each
//! digit is doubled. The `#` is optional on input, but always written on output, and output never
//! uses the shorthand.

use std::fmt;
use std::iter;

use regex::{Captures, Regex};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::color::{Color, ColorModel, RGBColor};
use crate::error::{ColorParseError, Result};

/// An RGB color written as hex digits. The channels are kept as numbers and only turned back into
/// digits for display.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    rgb: RGBColor,
}

impl HexColor {
    /// Six uppercase hex digits, without the `#`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HexColor", 1)?;
        state.serialize_field("Hex", &self.hex())?;
        state.end()
    }
}

lazy_static! {
    static ref HEX_GRAMMAR: Regex =
        Regex::new(r"^\s*#?([0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})\s*$").expect("valid hex grammar");
}

impl Color for HexColor {
    const MODEL: ColorModel = ColorModel::HEX;

    fn grammar() -> &'static Regex {
        &HEX_GRAMMAR
    }

    fn from_captures(caps: &Captures, text: &str) -> Result<HexColor> {
        let invalid = |reason: String| ColorParseError::InvalidField {
            model: Self::MODEL,
            text: text.to_string(),
            reason,
        };
        let digits = caps
            .get(1)
            .ok_or_else(|| invalid("missing hex digits".to_string()))?
            .as_str();
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| iter::repeat(c).take(2)).collect()
        } else {
            digits.to_string()
        };
        let channel = |i: usize, name: &str| -> Result<u8> {
            let pair = full
                .get(i..i + 2)
                .ok_or_else(|| invalid(format!("missing {} digits", name)))?;
            u8::from_str_radix(pair, 16)
                .map_err(|e| invalid(format!("{} digits {:?}: {}", name, pair, e)))
        };
        Ok(HexColor {
            rgb: RGBColor {
                r: channel(0, "red")?,
                g: channel(2, "green")?,
                b: channel(4, "blue")?,
            },
        })
    }

    fn from_rgb(rgb: RGBColor) -> HexColor {
        HexColor { rgb }
    }

    fn to_rgb(&self) -> RGBColor {
        self.rgb
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

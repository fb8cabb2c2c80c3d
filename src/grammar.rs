//! This file holds the pieces shared by every notation's grammar: the regex fragments for the
//! different kinds of numbers that show up inside color functions, a builder that assembles them into
//! a full functional notation like `hsl(120, 50%, 50%)`, and helpers that pull typed fields back out
//! of a match. Each color type keeps its own compiled grammar; nothing here holds any state.
//!
//! Every grammar is anchored at both ends and tolerates whitespace around each token, so `" rgb ( 1
//! ,2, 3 ) "` is fine but `"rgb(1, 2, 3) and more"` is not.

use std::fmt::Display;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::color::ColorModel;
use crate::error::{ColorParseError, Result};

/// An integer of one to three digits, like the components of `rgb(255, 0, 0)`.
pub(crate) const INT: &str = r"(\d{1,3})";
/// An integer percentage with a mandatory sign: `50%`.
pub(crate) const PERCENT: &str = r"(\d{1,3})%";
/// An integer percentage where the `%` may be left off, as CMYK allows.
pub(crate) const OPT_PERCENT: &str = r"(\d{1,3})%?";
/// An alpha value: 0, 1, 1.0, or a decimal between them with an optional leading zero.
pub(crate) const ALPHA: &str = r"(0|0?\.\d+|1(?:\.0)?)";
/// A signed number of up to three integral digits with an optional fraction, as used by CIELAB.
pub(crate) const SIGNED_DECIMAL: &str = r"([-+]?\d{1,3}(?:\.\d+)?)";
/// An unsigned decimal number, as used by XYZ.
pub(crate) const DECIMAL: &str = r"(\d{1,20}(?:\.\d+)?)";
/// A signed float with an optional exponent: `-0.147`, `.5`, `1e-5`.
pub(crate) const SIGNED_FLOAT_EXP: &str = r"([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)";
/// A signed float without an exponent.
pub(crate) const SIGNED_FLOAT: &str = r"([-+]?\d*\.?\d+)";

/// Builds the grammar for a functional notation `label(arg, arg, ...)`. Each argument fragment must
/// contain exactly one capture group, so that group `i + 1` of a match is argument `i`. If
/// `ignore_case` is set, only the label is matched case-insensitively: the arguments are numbers
/// anyway.
pub(crate) fn functional(label: &str, ignore_case: bool, args: &[&str]) -> Regex {
    let label = if ignore_case {
        format!("(?i:{})", label)
    } else {
        label.to_string()
    };
    let pattern = format!(
        r"^\s*{}\s*\(\s*{}\s*\)\s*$",
        label,
        args.join(r"\s*,\s*")
    );
    Regex::new(&pattern).expect("color grammars are fixed and valid")
}

/// Matches `text` against `grammar`, or gives a format mismatch for `model`.
pub(crate) fn captures<'t>(
    grammar: &Regex,
    model: ColorModel,
    text: &'t str,
) -> Result<Captures<'t>> {
    grammar
        .captures(text)
        .ok_or_else(|| ColorParseError::FormatMismatch {
            model,
            text: text.to_string(),
        })
}

/// Reads capture group `idx` as a `T`. `name` is the human-readable name of the field, used in
/// the error message if the group is missing or can't be parsed.
pub(crate) fn field<T>(
    caps: &Captures,
    idx: usize,
    name: &str,
    model: ColorModel,
    text: &str,
) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let invalid = |reason: String| ColorParseError::InvalidField {
        model,
        text: text.to_string(),
        reason,
    };
    let raw = caps
        .get(idx)
        .ok_or_else(|| invalid(format!("missing {} component", name)))?
        .as_str();
    raw.parse()
        .map_err(|e| invalid(format!("{} component {:?}: {}", name, raw, e)))
}

/// Like `field`, but also refuses infinite and NaN floats: `1e999` is valid float syntax, but it
/// isn't a color.
pub(crate) fn finite_field(
    caps: &Captures,
    idx: usize,
    name: &str,
    model: ColorModel,
    text: &str,
) -> Result<f64> {
    let value: f64 = field(caps, idx, name, model, text)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorParseError::InvalidField {
            model,
            text: text.to_string(),
            reason: format!("{} component is not finite", name),
        })
    }
}

/// Renders a float with a fixed number of decimal places, never printing a negative zero: `-0.00`
/// would still parse, but it's misleading.
pub(crate) fn fixed(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    // -0.0 + 0.0 is 0.0
    format!("{:.*}", places, rounded + 0.0)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_functional_grammar() {
        let grammar = functional("hsl", false, &[INT, PERCENT, PERCENT]);
        assert!(grammar.is_match("hsl(120, 50%, 25%)"));
        assert!(grammar.is_match("  hsl ( 120 ,50% ,  25% )  "));
        assert!(!grammar.is_match("HSL(120, 50%, 25%)"));
        assert!(!grammar.is_match("hsl(120, 50, 25%)"));
        assert!(!grammar.is_match("hsl(120, 50%, 25%) trailing"));
        assert!(!grammar.is_match("hsl(1200, 50%, 25%)"));

        let caps = grammar.captures("hsl(120, 50%, 25%)").unwrap();
        assert_eq!(&caps[1], "120");
        assert_eq!(&caps[2], "50");
        assert_eq!(&caps[3], "25");
    }

    #[test]
    fn test_case_insensitive_label() {
        let grammar = functional("hsv", true, &[INT, PERCENT, PERCENT]);
        assert!(grammar.is_match("HSV(1, 2%, 3%)"));
        assert!(grammar.is_match("hSv(1, 2%, 3%)"));
    }

    #[test]
    fn test_number_fragments() {
        let alpha = Regex::new(&format!("^{}$", ALPHA)).unwrap();
        for ok in &["0", "1", "1.0", "0.5", ".25"] {
            assert!(alpha.is_match(ok), "{}", ok);
        }
        for bad in &["2", "1.5", "-0.5", "0.", "10"] {
            assert!(!alpha.is_match(bad), "{}", bad);
        }

        let float = Regex::new(&format!("^{}$", SIGNED_FLOAT_EXP)).unwrap();
        for ok in &["0.299", "-0.14713", ".5", "+3", "1e-5", "2.5E+3"] {
            assert!(float.is_match(ok), "{}", ok);
        }
        assert!(!float.is_match("1e"));
        assert!(!float.is_match("--1"));
    }

    #[test]
    fn test_field_extraction() {
        let grammar = functional("rgb", false, &[INT, INT, INT]);
        let text = "rgb(12, 34, 56)";
        let caps = captures(&grammar, ColorModel::RGB, text).unwrap();
        let g: u16 = field(&caps, 2, "green", ColorModel::RGB, text).unwrap();
        assert_eq!(g, 34);
        // there is no group 4
        assert!(field::<u16>(&caps, 4, "alpha", ColorModel::RGB, text).is_err());

        assert_eq!(
            captures(&grammar, ColorModel::RGB, "rgb(1, 2)").unwrap_err(),
            ColorParseError::FormatMismatch {
                model: ColorModel::RGB,
                text: "rgb(1, 2)".to_string(),
            }
        );
    }

    #[test]
    fn test_non_ascii_digits() {
        // \d is Unicode-aware, so these match the grammar but aren't numbers Rust can read
        let grammar = functional("rgb", false, &[INT, INT, INT]);
        let text = "rgb(\u{0661}, 2, 3)";
        let caps = captures(&grammar, ColorModel::RGB, text).unwrap();
        match field::<u16>(&caps, 1, "red", ColorModel::RGB, text) {
            Err(ColorParseError::InvalidField { model, .. }) => assert_eq!(model, ColorModel::RGB),
            other => panic!("expected an invalid field, got {:?}", other),
        }
    }

    #[test]
    fn test_finite_field() {
        let grammar = functional("yuv", true, &[SIGNED_FLOAT_EXP]);
        let text = "yuv(1e999)";
        let caps = captures(&grammar, ColorModel::YUV, text).unwrap();
        assert!(finite_field(&caps, 1, "Y", ColorModel::YUV, text).is_err());
    }

    #[test]
    fn test_fixed() {
        assert_eq!(fixed(0.299, 6), "0.299000");
        assert_eq!(fixed(-0.0000001, 6), "0.000000");
        assert_eq!(fixed(-0.001, 2), "0.00");
        assert_eq!(fixed(53.2329, 2), "53.23");
        assert_eq!(fixed(-86.1847, 2), "-86.18");
    }
}

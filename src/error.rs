//! Errors that can come out of parsing color notation. Detection failing to find any notation is
//! *not* an error (see [`Conversion::Unrecognized`](crate::convert::Conversion)): these only come
//! up once a specific notation has been picked and the text turns out to not fit it.

use thiserror::Error;

use crate::color::ColorModel;

/// Shorthand for results in this crate.
pub type Result<T> = std::result::Result<T, ColorParseError>;

/// An error in parsing a color string in a given notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The text does not match the grammar of the notation it was parsed as, e.g., `"hsl(1, 2, 3)"`
    /// given to the RGB parser.
    #[error("{model} format mismatch: {text:?} is not valid {model} notation")]
    FormatMismatch {
        /// The notation that was attempted.
        model: ColorModel,
        /// The raw input.
        text: String,
    },
    /// The text has the right shape, but one of the fields inside of it couldn't be read as a number
    /// or described something that isn't a number, like an infinite float.
    #[error("{model} parse error in {text:?}: {reason}")]
    InvalidField {
        /// The notation that was attempted.
        model: ColorModel,
        /// The raw input.
        text: String,
        /// What went wrong with the field.
        reason: String,
    },
}

impl ColorParseError {
    /// The notation the failed parse was attempted in.
    pub fn model(&self) -> ColorModel {
        match self {
            ColorParseError::FormatMismatch { model, .. } => *model,
            ColorParseError::InvalidField { model, .. } => *model,
        }
    }
}

//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes the [`Color`] trait, the ubiquitous
//! [`RGBColor`], the [`ColorModel`] list, the conversion entry points and their results, and the
//! parse error [`ColorParseError`]. Of particular note is that the individual notations found in the
//! [`colors`](crate::colors) module are not included.

pub use crate::color::{Color, ColorModel, RGBColor};
pub use crate::convert::{convert, ColorCodes, ColorValue, Conversion};
pub use crate::error::ColorParseError;
pub use crate::registry::detect;

//! colorcodes reads a color written in any of a handful of common notations and writes it back out
//! in all of them: `rgb(255, 0, 0)` in, `#FF0000`, `hsl(0, 100%, 50%)`, `lab(53.23, 80.11,
//! 67.22)` and friends out. There is no need to say which notation the input is in; each notation
//! has a grammar, and the first grammar that matches decides.
//!
//! Every notation is a type implementing [`Color`](color::Color), and every conversion goes through
//! [`RGBColor`](color::RGBColor). The [`registry`] lists the notations in a fixed order, and
//! [`convert`](convert::convert) ties detection, parsing and the fan-out to every notation
//! together:
//!
//! ```
//! use colorcodes::prelude::*;
//!
//! let conversion = convert("hsv(120, 100%, 100%)").unwrap();
//! let codes = conversion.codes().unwrap();
//! assert_eq!(codes.rgb(), RGBColor { r: 0, g: 255, b: 0 });
//! assert_eq!(codes.get(ColorModel::HEX).unwrap().code(), "#00FF00");
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate rulinalg;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod color;
pub mod colors;
mod consts;
pub mod convert;
pub mod error;
mod grammar;
pub mod prelude;
pub mod registry;

//! Resistance values and 4-band resistor color codes.
//!
//! Text and bands are two views of the same value:
//!
//! ```text
//! "4.7kΩ" --parse--> 4700 --decompose--> (2, 4, 7) --encode--> yellow violet red
//!   ^                                                               |
//!   +--------------format----------- 4700 <------------decode-------+
//! ```
//!
//! Every value is canonicalised to two significant digits (round half-up), so the
//! round trip is exact for every decade a 4-band code can express (`0.1Ω` to `99GΩ`).

pub mod bands;
pub mod color;
pub mod error;
pub mod literal;
pub mod notation;
pub mod reading;
pub mod series;
pub mod significant;
pub mod value;

#[allow(dead_code)]
#[cfg(test)]
mod testing;

pub use bands::{Band, BandSet, Bands, color_to_code, decode_bands, digit_to_color, encode_bands, exponent_to_color};
pub use color::{BandRole, ResistorColor};
pub use error::ResistanceError;
pub use literal::is_valid as validate;
pub use notation::format_engineering as format;
pub use reading::{Indication, Reading};
pub use series::is_standard as classify_standard;
pub use significant::{Decomposition, REPRESENTABLE_EXPONENTS, decompose};
pub use value::{ResistanceValue, parse};

mod complex;
mod decode;
mod engine;
mod error;
mod factor;
mod json;
mod kind;
mod logical;
mod pair;
mod render;
/// Native expression type codes and the decode dispatch table.
pub mod sexp;
mod value;

/// Complex number scalar.
pub use complex::Complex;
/// Decoding entry points.
pub use decode::{decode, decode_attribute};
/// Engine primitive interface and expression handle.
pub use engine::{Engine, Handle};
/// Error and result aliases.
pub use error::{Result, RexError};
/// Factor content representation.
pub use factor::Factor;
/// JSON projection of decoded values.
pub use json::value_to_json;
/// Decoded kind tags and display names.
pub use kind::Kind;
/// Tri-state logical scalar.
pub use logical::Logical;
/// Dotted-pair chain node and iterator.
pub use pair::{Pair, PairIter};
/// Rendering limits and string quoting helper.
pub use render::{MAX_RENDERED_ITEMS, quote_string};
/// Decoded value node and content payloads.
pub use value::{Content, Rexp};

//! Layout reconstruction primitives.
//!
//! Rows, tokens, and tolerance clustering over positioned glyphs.

pub mod clustering;
pub mod params;
pub mod rows;
pub mod tokens;
pub mod types;

pub use params::{Alignment, ExtractParams, TokenMerge, VarianceMode};
pub use types::{BBox, Glyph, Token};

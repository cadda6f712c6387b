//! navlens - fund-summary table extraction from positioned text.
//!
//! Reconstructs the NAV/AUM and month-to-date return rows of a financial
//! summary table from the positioned text fragments of a report page, and
//! reconciles the extracted figures against a trusted reference table of
//! funds. Upstream concerns (PDF decoding, spreadsheet reading) are
//! delegated to the caller: the inputs here are already-positioned glyphs
//! and already-typed reference rows.

pub mod dates;
pub mod error;
pub mod layout;
pub mod names;
pub mod table;

pub use error::{ExtractError, Result};
pub use layout::params::{Alignment, ExtractParams, TokenMerge, VarianceMode};
pub use layout::types::{BBox, Glyph, Token};
pub use names::{FundLabel, NameResolver, Resolution};
pub use table::{NameColumn, ReferenceRow, ResultRow, RowRole, SummaryExtractor, SummaryTable};

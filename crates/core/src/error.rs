//! Error types for the navlens extraction library.
//!
//! Every failure here is terminal for the call: no retries, and no partial
//! results once a hard invariant is violated. Total failure is preferred
//! over a silently misaligned table.

use thiserror::Error;

use crate::table::classify::RowRole;

/// Primary error type for extraction and reconciliation.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no text extracted from document")]
    NoTextExtracted,

    #[error("{role} row not found by density scoring")]
    TableRowNotFound { role: RowRole },

    #[error("{role} value count ({actual}) does not match reference rows ({expected})")]
    ColumnCountMismatch {
        role: RowRole,
        expected: usize,
        actual: usize,
    },

    #[error("reference table filter produced zero rows")]
    NoReferenceRows,

    #[error("missing prior NAV for fund {0}")]
    MissingPriorNav(String),

    #[error("column {index} unresolved by positional alignment")]
    UnresolvedColumn { index: usize },
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

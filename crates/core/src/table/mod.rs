//! Fund-summary table extraction.
//!
//! Reconstructs the NAV/AUM row and the month-to-date return row of a
//! financial summary table from positioned glyphs, producing two aligned
//! numeric sequences in stable left-to-right column order, then joins them
//! to a trusted reference table.

pub mod align;
pub mod classify;
pub mod columns;
pub mod reconcile;
pub mod values;

pub use classify::RowRole;
pub use columns::NameColumn;
pub use reconcile::{ReferenceRow, ResultRow};

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::layout::params::{Alignment, ExtractParams};
use crate::layout::rows::group_rows;
use crate::layout::tokens::merge_tokens;
use crate::layout::types::Glyph;

/// The numeric sequences reconstructed from one page, in left-to-right
/// column order, plus the fund-name header columns when requested.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryTable {
    pub nav_values: Vec<f64>,
    pub mtd_values: Vec<f64>,
    pub name_columns: Option<Vec<NameColumn>>,
}

/// Extracts the fund-summary table from positioned glyphs and reconciles
/// it against a reference table.
///
/// Stateless across calls: every extraction recomputes rows, tokens, and
/// columns from the glyphs it is given, so concurrent calls over different
/// documents are independent.
#[derive(Clone, Debug, Default)]
pub struct SummaryExtractor {
    params: ExtractParams,
}

impl SummaryExtractor {
    pub fn new(params: ExtractParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ExtractParams {
        &self.params
    }

    /// Reconstruct the NAV and MTD value sequences from one page of glyphs.
    ///
    /// In `Alignment::Positional` mode the NAV token centers define the
    /// fund columns and MTD values are assigned to the nearest column;
    /// in `Alignment::Index` mode both sequences keep extraction order.
    pub fn extract(&self, glyphs: &[Glyph]) -> Result<SummaryTable> {
        if glyphs.is_empty() {
            return Err(ExtractError::NoTextExtracted);
        }
        let params = &self.params;

        let rows = group_rows(glyphs, params.row_quantize_places);
        let (nav_y, mtd_y) = classify::classify_rows(&rows, params)?;
        debug!(
            nav_y = nav_y.into_inner(),
            mtd_y = mtd_y.into_inner(),
            "classified value rows"
        );

        let nav_tokens = merge_tokens(
            &rows[&nav_y],
            params.merge_strategy,
            params.column_gap_tolerance,
        );
        let mtd_tokens = merge_tokens(
            &rows[&mtd_y],
            params.merge_strategy,
            params.column_gap_tolerance,
        );

        let nav = values::nav_values(&nav_tokens, params);
        let mtd = values::mtd_values(&mtd_tokens);
        let centers: Vec<f64> = nav.iter().map(|v| v.center).collect();

        let name_columns = (params.extract_names || params.alignment == Alignment::Positional)
            .then(|| columns::name_columns(glyphs, nav_y.into_inner(), &centers, params));

        let nav_values: Vec<f64> = nav.iter().map(|v| v.value).collect();
        let mtd_values = match params.alignment {
            Alignment::Index => mtd.iter().map(|v| v.value).collect(),
            Alignment::Positional => {
                align::align_by_position(&mtd, &centers, params.column_center_tolerance)?
            }
        };

        Ok(SummaryTable {
            nav_values,
            mtd_values,
            name_columns,
        })
    }

    /// Join an extracted table to the reference rows by index and compute
    /// variance. Results come back sorted ascending by variance (largest
    /// discrepancies last).
    pub fn reconcile(&self, table: &SummaryTable, refs: &[ReferenceRow]) -> Result<Vec<ResultRow>> {
        reconcile::reconcile(
            refs,
            &table.nav_values,
            &table.mtd_values,
            self.params.variance_mode,
        )
    }

    /// Extract and reconcile in one call.
    ///
    /// The reference table is validated before any layout work: a filter
    /// that produced zero funds means there is nothing to reconcile
    /// against, whatever the document contains.
    pub fn extract_and_reconcile(
        &self,
        glyphs: &[Glyph],
        refs: &[ReferenceRow],
    ) -> Result<Vec<ResultRow>> {
        if refs.is_empty() {
            return Err(ExtractError::NoReferenceRows);
        }
        let table = self.extract(glyphs)?;
        self.reconcile(&table, refs)
    }
}

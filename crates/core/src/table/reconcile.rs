//! Join to the reference table, variance computation, output ordering.
//!
//! The reference ("workflow") table is the source of truth for fund order
//! and cardinality. Extracted values join it strictly one-to-one; the
//! count guard here is the invariant the whole design exists to protect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::align::check_count;
use super::classify::RowRole;
use crate::dates::next_quarter_end;
use crate::error::{ExtractError, Result};
use crate::layout::params::VarianceMode;

/// One fund row from the trusted workflow table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub fund_id: String,
    pub fund_name: String,
    /// Prior-period NAV, when the workflow carries history.
    pub prior_nav: Option<f64>,
    /// As-of date of the prior NAV.
    pub as_of: Option<NaiveDate>,
}

/// One reconciled output record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub fund_id: String,
    pub fund_name: String,
    /// Reporting date the extracted NAV applies to: the end of the quarter
    /// after the reference as-of date, when one is available.
    pub nav_date: Option<NaiveDate>,
    pub nav: f64,
    pub mtd: f64,
    pub prior_nav: Option<f64>,
    pub variance: f64,
}

/// Join extracted values to reference rows by index and compute variance.
///
/// Output is sorted ascending by variance, so the largest discrepancies
/// appear last.
pub(crate) fn reconcile(
    refs: &[ReferenceRow],
    nav: &[f64],
    mtd: &[f64],
    mode: VarianceMode,
) -> Result<Vec<ResultRow>> {
    if refs.is_empty() {
        return Err(ExtractError::NoReferenceRows);
    }
    check_count(RowRole::Nav, nav.len(), refs.len())?;
    check_count(RowRole::Mtd, mtd.len(), refs.len())?;

    let mut rows = Vec::with_capacity(refs.len());
    for (i, r) in refs.iter().enumerate() {
        let variance = match mode {
            VarianceMode::PriorNav => {
                let prior = r
                    .prior_nav
                    .ok_or_else(|| ExtractError::MissingPriorNav(r.fund_id.clone()))?;
                ((nav[i] - prior) / prior * 100.0).abs()
            }
            VarianceMode::MtdMagnitude => mtd[i].abs(),
        };
        debug!(fund = %r.fund_id, nav = nav[i], mtd = mtd[i], variance, "reconciled");
        rows.push(ResultRow {
            fund_id: r.fund_id.clone(),
            fund_name: r.fund_name.clone(),
            nav_date: r.as_of.map(next_quarter_end),
            nav: nav[i],
            mtd: mtd[i],
            prior_nav: r.prior_nav,
            variance,
        });
    }

    rows.sort_by(|a, b| {
        a.variance
            .partial_cmp(&b.variance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(rows)
}

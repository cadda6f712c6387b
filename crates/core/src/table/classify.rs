//! NAV/MTD row selection by numeric-density scoring.
//!
//! Every row is scored on how many of its tokens match the role pattern;
//! the densest row wins. Watermarks and headers inject stray punctuation
//! that defeats first-match strategies, so the full pass is required.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::layout::params::ExtractParams;
use crate::layout::rows::row_text;
use crate::layout::tokens::merge_tokens;
use crate::layout::types::{Glyph, KeyF64, Token};

/// Which semantic table row a value or failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowRole {
    Nav,
    Mtd,
}

impl fmt::Display for RowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRole::Nav => write!(f, "NAV"),
            RowRole::Mtd => write!(f, "MTD"),
        }
    }
}

/// Thousands-grouped integer, e.g. `12,345,678`. At least one comma, so
/// bare digit runs (years, day numbers) never match.
pub(crate) fn grouped_int_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,3}(?:,\d{3})+$").unwrap())
}

/// Signed decimal percentage, e.g. `-2.35%`.
pub(crate) fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+\.\d+%$").unwrap())
}

/// True if a token is a date fragment. Date fragments are never NAV or
/// MTD candidates, whatever else they contain.
pub(crate) fn is_date_fragment(text: &str) -> bool {
    text.contains('/')
}

/// Candidate counts for one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RowScore {
    pub nav: usize,
    pub mtd: usize,
}

pub(crate) fn score_tokens(tokens: &[Token]) -> RowScore {
    let mut score = RowScore::default();
    for tok in tokens {
        if is_date_fragment(&tok.text) {
            continue;
        }
        if grouped_int_re().is_match(&tok.text) {
            score.nav += 1;
        } else if percent_re().is_match(&tok.text) {
            score.mtd += 1;
        }
    }
    score
}

/// Pick the NAV row and the MTD row out of all page rows.
///
/// Returns the quantized vertical keys of the two rows. Ties go to the
/// topmost row, which is the first encountered in map order.
pub(crate) fn classify_rows(
    rows: &BTreeMap<KeyF64, Vec<&Glyph>>,
    params: &ExtractParams,
) -> Result<(KeyF64, KeyF64)> {
    // Column-level tokenization: one token per cell, so each fund's value
    // counts once.
    let gap = params.column_gap_tolerance;

    let mut nav_best: Option<(KeyF64, usize)> = None;
    let mut mtd_best: Option<(KeyF64, usize)> = None;

    for (&y, row) in rows {
        let tokens = merge_tokens(row, params.merge_strategy, gap);
        let score = score_tokens(&tokens);
        if score.nav > 0 || score.mtd > 0 {
            debug!(
                y = y.into_inner(),
                nav = score.nav,
                mtd = score.mtd,
                text = %row_text(row),
                "row score"
            );
        }
        if score.nav > nav_best.map_or(0, |(_, n)| n) {
            nav_best = Some((y, score.nav));
        }
        if score.mtd > mtd_best.map_or(0, |(_, n)| n) {
            mtd_best = Some((y, score.mtd));
        }
    }

    let (nav_y, _) = nav_best.ok_or(ExtractError::TableRowNotFound { role: RowRole::Nav })?;
    let (mtd_y, _) = mtd_best.ok_or(ExtractError::TableRowNotFound { role: RowRole::Mtd })?;
    Ok((nav_y, mtd_y))
}

//! Fund-name header assembly.
//!
//! Fund names sit in a header region above the value row, one column per
//! fund, frequently corrupted by watermark artifacts. Each name is
//! reassembled from the glyphs in a vertical strip centered on the fund's
//! value column, then cleaned of noise.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::layout::clustering::cluster_objects;
use crate::layout::params::{ExtractParams, TokenMerge};
use crate::layout::tokens::merge_tokens;
use crate::layout::types::Glyph;

// Header glyphs must sit clear of the value row itself, and header lines
// are clustered with a tight band since names render at one font size.
const HEADER_ROW_CLEARANCE: f64 = 10.0;
const HEADER_LINE_TOLERANCE: f64 = 2.0;

/// A fund-name column recovered from the header region.
#[derive(Clone, Debug, PartialEq)]
pub struct NameColumn {
    pub text: String,
    /// Horizontal center of the value column the name belongs to.
    pub center: f64,
}

/// Stray single lowercase letters are watermark bleed, not name content.
fn single_lower_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[a-z]\b").unwrap())
}

/// Strip watermark artifacts and structural table labels from an
/// assembled header name.
pub(crate) fn clean_noise(text: &str, noise_words: &[String]) -> String {
    let stripped = single_lower_re().replace_all(text, "");
    stripped
        .split_whitespace()
        .filter(|w| !noise_words.iter().any(|n| n.eq_ignore_ascii_case(w)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assemble one header name per value-column center.
///
/// Collects the glyphs in a `header_window` strip above the value row,
/// orders them top-down then left-to-right, and joins them into a cleaned
/// display name. Columns always come back 1:1 with `centers`; an
/// unreadable header yields an empty name rather than a dropped column.
pub(crate) fn name_columns(
    glyphs: &[Glyph],
    value_row_top: f64,
    centers: &[f64],
    params: &ExtractParams,
) -> Vec<NameColumn> {
    centers
        .iter()
        .map(|&cx| {
            let strip: Vec<&Glyph> = glyphs
                .iter()
                .filter(|g| {
                    g.x0 < cx + params.header_window
                        && g.x1 > cx - params.header_window
                        && g.top < value_row_top - HEADER_ROW_CLEARANCE
                        && g.top > value_row_top - params.header_max_height
                })
                .collect();

            let mut pieces: Vec<String> = Vec::new();
            for line in cluster_objects(&strip, |g| g.top, HEADER_LINE_TOLERANCE) {
                let row: Vec<&Glyph> = line.into_iter().copied().collect();
                // Names are prose, not numerics; gap merging applies even
                // when the numeric rows use character-class merging.
                for tok in merge_tokens(&row, TokenMerge::Gap, params.token_gap_tolerance) {
                    pieces.push(tok.text);
                }
            }

            let text = clean_noise(&pieces.join(" "), &params.header_noise_words);
            if text.is_empty() {
                debug!(center = cx, "empty header column");
            }
            NameColumn { text, center: cx }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x0: f64, top: f64) -> Glyph {
        let width = text.chars().count() as f64 * 5.0;
        Glyph::new(text, x0, x0 + width, top, top + 10.0)
    }

    #[test]
    fn clean_noise_drops_artifacts_and_labels() {
        let noise: Vec<String> = ["beginning", "of", "month", "aum"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        let cleaned = clean_noise("a Harbor o Fund II c Beginning of Month AUM", &noise);
        assert_eq!(cleaned, "Harbor Fund II");
    }

    #[test]
    fn names_assemble_per_column() {
        // Two columns at centers 50 and 150; two header lines each.
        let glyphs = vec![
            word("Harbor", 40.0, 30.0),
            word("Fund", 45.0, 45.0),
            word("Beacon", 140.0, 30.0),
            word("Fund", 145.0, 45.0),
            // value row itself, must not leak into headers
            word("1,000", 40.0, 100.0),
            word("2,000", 140.0, 100.0),
        ];
        let params = ExtractParams::default();
        let cols = name_columns(&glyphs, 100.0, &[50.0, 150.0], &params);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].text, "Harbor Fund");
        assert_eq!(cols[1].text, "Beacon Fund");
        assert_eq!(cols[0].center, 50.0);
    }

    #[test]
    fn unreadable_header_keeps_its_column() {
        let glyphs = vec![word("1,000", 40.0, 100.0)];
        let params = ExtractParams::default();
        let cols = name_columns(&glyphs, 100.0, &[50.0], &params);
        assert_eq!(cols.len(), 1);
        assert!(cols[0].text.is_empty());
    }
}

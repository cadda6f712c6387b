//! Token reconstruction within one row.
//!
//! Merges a row's glyphs back into semantic tokens using one of two
//! strategies: horizontal-gap splitting, or character-class merging for
//! wide-tracked fonts where kerning gaps lie about token boundaries.

use tracing::trace;

use super::clustering::bbox_from_glyphs;
use super::params::TokenMerge;
use super::types::{Glyph, Token};

/// Character class accepted by `TokenMerge::CharClass`: the constituents
/// of a grouped integer or signed decimal percentage.
fn is_numeric_class(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '%' | '.' | '-'))
}

fn glyphs_to_token(run: &[&Glyph]) -> Token {
    let bbox = bbox_from_glyphs(run);
    // Interior whitespace never survives into a token.
    let text = run
        .iter()
        .flat_map(|g| g.text.chars().filter(|c| !c.is_whitespace()))
        .collect();
    Token {
        text,
        x0: bbox.x0,
        x1: bbox.x1,
        top: bbox.top,
    }
}

/// Merge a row of glyphs into tokens, left to right.
pub fn merge_tokens(row: &[&Glyph], strategy: TokenMerge, gap_tolerance: f64) -> Vec<Token> {
    if row.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&Glyph> = row.to_vec();
    ordered.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));

    let mut tokens: Vec<Token> = Vec::new();
    let mut current: Vec<&Glyph> = vec![ordered[0]];

    for g in &ordered[1..] {
        let prev = current[current.len() - 1];
        let gap_ok = g.x0 - prev.x1 <= gap_tolerance;
        let same_token = match strategy {
            TokenMerge::Gap => gap_ok,
            // Class boundaries beat proximity: a label hugging a number
            // still splits, while kerning gaps inside a number do not.
            TokenMerge::CharClass => {
                gap_ok && is_numeric_class(&prev.text) && is_numeric_class(&g.text)
            }
        };
        if same_token {
            current.push(g);
        } else {
            trace!(at = g.x0, "token boundary");
            tokens.push(glyphs_to_token(&current));
            current.clear();
            current.push(g);
        }
    }
    tokens.push(glyphs_to_token(&current));
    tokens
}

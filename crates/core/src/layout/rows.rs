//! Row grouping by quantized vertical position.
//!
//! Glyphs sharing a quantized `top` belong to the same row regardless of
//! font-size variation. Quantizing to one decimal place absorbs sub-pixel
//! jitter from the rendering engine.

use std::collections::BTreeMap;

use super::types::{Glyph, KeyF64, key_f64};

pub(crate) fn quantize(v: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (v * scale).round() / scale
}

/// Group glyphs into rows keyed by quantized vertical position.
///
/// The map iterates top-to-bottom, which downstream code relies on for
/// deterministic tie-breaking.
pub fn group_rows(glyphs: &[Glyph], places: u32) -> BTreeMap<KeyF64, Vec<&Glyph>> {
    let mut rows: BTreeMap<KeyF64, Vec<&Glyph>> = BTreeMap::new();
    for g in glyphs {
        rows.entry(key_f64(quantize(g.top, places)))
            .or_default()
            .push(g);
    }
    rows
}

/// Reconstruct the text of one row, left to right.
pub fn row_text(row: &[&Glyph]) -> String {
    let mut ordered: Vec<&&Glyph> = row.iter().collect();
    ordered.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));
    ordered.iter().map(|g| g.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_jittered_glyphs_into_one_row() {
        let glyphs = vec![
            Glyph::new("1", 10.0, 15.0, 100.02, 110.0),
            Glyph::new("2", 16.0, 21.0, 99.98, 110.0),
            Glyph::new("x", 10.0, 15.0, 120.0, 130.0),
        ];
        let rows = group_rows(&glyphs, 1);
        assert_eq!(rows.len(), 2);
        let first = rows.values().next().unwrap();
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn row_text_is_x_sorted() {
        let b = Glyph::new("b", 20.0, 25.0, 50.0, 60.0);
        let a = Glyph::new("a", 10.0, 15.0, 50.0, 60.0);
        assert_eq!(row_text(&[&b, &a]), "ab");
    }

    #[test]
    fn rows_iterate_top_to_bottom() {
        let glyphs = vec![
            Glyph::new("low", 0.0, 10.0, 300.0, 310.0),
            Glyph::new("high", 0.0, 10.0, 50.0, 60.0),
        ];
        let rows = group_rows(&glyphs, 1);
        let texts: Vec<String> = rows.values().map(|r| row_text(r)).collect();
        assert_eq!(texts, vec!["high".to_string(), "low".to_string()]);
    }
}

//! Numeric value extraction from classified rows.
//!
//! Filters are ordered cheapest-first: emptiness, date fragments, then the
//! role pattern. Per-token parse failures are skipped, not fatal; a row may
//! carry incidental non-numeric fragments.

use tracing::debug;

use super::classify::{grouped_int_re, is_date_fragment};
use crate::layout::params::ExtractParams;
use crate::layout::types::Token;

/// A parsed numeric value and the horizontal center it was found at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ValueToken {
    pub value: f64,
    pub center: f64,
}

/// Extract NAV values from the NAV row's tokens, left to right.
///
/// Bare digit runs are accepted only when the row yields no comma-grouped
/// candidate at all and the fallback is enabled.
pub(crate) fn nav_values(tokens: &[Token], params: &ExtractParams) -> Vec<ValueToken> {
    let mut out = Vec::new();
    for tok in tokens {
        if tok.text.is_empty() || is_date_fragment(&tok.text) {
            continue;
        }
        if !grouped_int_re().is_match(&tok.text) {
            continue;
        }
        if let Ok(value) = tok.text.replace(',', "").parse::<f64>() {
            out.push(ValueToken {
                value,
                center: tok.center(),
            });
        }
    }

    if out.is_empty() && params.allow_plain_digit_nav {
        for tok in tokens {
            if is_date_fragment(&tok.text) {
                continue;
            }
            if tok.text.len() < params.min_plain_digit_len
                || !tok.text.chars().all(|c| c.is_ascii_digit())
            {
                continue;
            }
            if let Ok(value) = tok.text.parse::<f64>() {
                out.push(ValueToken {
                    value,
                    center: tok.center(),
                });
            }
        }
        if !out.is_empty() {
            debug!(count = out.len(), "plain-digit NAV fallback used");
        }
    }
    out
}

/// Extract MTD percentages from the MTD row's tokens, left to right.
///
/// The value is the percentage number itself (`-2.35` for `-2.35%`), not a
/// fraction.
pub(crate) fn mtd_values(tokens: &[Token]) -> Vec<ValueToken> {
    let mut out = Vec::new();
    for tok in tokens {
        if tok.text.is_empty() || is_date_fragment(&tok.text) {
            continue;
        }
        let cleaned = tok.text.replace('%', "");
        let Ok(value) = cleaned.parse::<f64>() else {
            continue;
        };
        out.push(ValueToken {
            value,
            center: tok.center(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str, x0: f64) -> Token {
        Token {
            text: text.to_string(),
            x0,
            x1: x0 + 10.0,
            top: 100.0,
        }
    }

    #[test]
    fn grouped_nav_tokens_parse() {
        let tokens = vec![tok("12,345,678", 0.0), tok("9,876,543", 50.0)];
        let vals = nav_values(&tokens, &ExtractParams::default());
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[0].value, 12_345_678.0);
        assert_eq!(vals[1].value, 9_876_543.0);
    }

    #[test]
    fn ungrouped_digits_rejected_by_default() {
        let tokens = vec![tok("1234567", 0.0)];
        assert!(nav_values(&tokens, &ExtractParams::default()).is_empty());
    }

    #[test]
    fn plain_digit_fallback_is_opt_in() {
        let tokens = vec![tok("1234567", 0.0), tok("2025", 50.0)];
        let params = ExtractParams {
            allow_plain_digit_nav: true,
            ..Default::default()
        };
        let vals = nav_values(&tokens, &params);
        // The short run (a year fragment) stays excluded.
        assert_eq!(vals.len(), 1);
        assert_eq!(vals[0].value, 1_234_567.0);
    }

    #[test]
    fn fallback_never_fires_when_grouped_candidates_exist() {
        let tokens = vec![tok("1,234,567", 0.0), tok("7654321", 50.0)];
        let params = ExtractParams {
            allow_plain_digit_nav: true,
            ..Default::default()
        };
        let vals = nav_values(&tokens, &params);
        assert_eq!(vals.len(), 1);
        assert_eq!(vals[0].value, 1_234_567.0);
    }

    #[test]
    fn dates_are_never_nav_values() {
        let tokens = vec![tok("10/1/2025", 0.0)];
        let params = ExtractParams {
            allow_plain_digit_nav: true,
            ..Default::default()
        };
        assert!(nav_values(&tokens, &params).is_empty());
    }

    #[test]
    fn mtd_values_keep_sign_and_skip_garbage() {
        let tokens = vec![
            tok("-2.35%", 0.0),
            tok("0.50%", 30.0),
            tok("n/a", 60.0),
            tok("watermark", 90.0),
        ];
        let vals = mtd_values(&tokens);
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[0].value, -2.35);
        assert_eq!(vals[1].value, 0.5);
    }
}

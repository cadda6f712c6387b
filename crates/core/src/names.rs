//! Fund-label parsing and resolution against a reference list.
//!
//! Extracted header names rarely equal the reference spellings: watermarks
//! corrupt them and legal decorations move around. Resolution is
//! two-stage: exact match on the parsed feature tuple first, then
//! approximate base-name similarity with an explicit threshold. Multiple
//! surviving candidates are ambiguous and resolve to no match, never a
//! guessed pick.

use std::sync::OnceLock;

use regex::Regex;
use strsim::jaro_winkler;
use tracing::debug;

const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.92;

/// Entity class marker in a fund label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityClass {
    Partners,
    Master,
}

/// Jurisdiction marker in a fund label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jurisdiction {
    Cayman,
    Offshore,
}

/// Legal-form suffix of a fund label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalForm {
    Lp,
    Llc,
}

/// Structured features parsed from a raw fund label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FundLabel {
    /// Uppercased name up to the first parenthesis or comma.
    pub base: String,
    pub entity: Option<EntityClass>,
    pub jurisdiction: Option<Jurisdiction>,
    /// Roman series numeral (I through V).
    pub series: Option<String>,
    pub legal: Option<LegalForm>,
}

fn series_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(I{1,3}|IV|V)\b").unwrap())
}

fn lp_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bLP\b").unwrap())
}

/// Parse a raw fund label into its comparable features.
pub fn parse_label(raw: &str) -> FundLabel {
    let upper = raw.to_uppercase();
    let upper = upper.trim();

    let base = upper
        .split(['(', ','])
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    let entity = if upper.contains("PARTNERS") {
        Some(EntityClass::Partners)
    } else if upper.contains("MASTER") {
        Some(EntityClass::Master)
    } else {
        None
    };

    let jurisdiction = if upper.contains("CAYMAN") {
        Some(Jurisdiction::Cayman)
    } else if upper.contains("OFFSHORE") {
        Some(Jurisdiction::Offshore)
    } else {
        None
    };

    let series = series_re()
        .find(upper)
        .map(|m| m.as_str().to_string());

    let legal = if lp_re().is_match(upper) {
        Some(LegalForm::Lp)
    } else if upper.contains("LLC") {
        Some(LegalForm::Llc)
    } else {
        None
    };

    FundLabel {
        base,
        entity,
        jurisdiction,
        series,
        legal,
    }
}

/// Outcome of resolving one extracted label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Index of the single matching reference name.
    Match(usize),
    /// More than one reference name survived the feature filter.
    Ambiguous(Vec<usize>),
    NoMatch,
}

/// Resolves extracted fund labels against a fixed reference name list.
#[derive(Clone, Debug)]
pub struct NameResolver {
    threshold: f64,
    entries: Vec<FundLabel>,
}

impl NameResolver {
    pub fn new<'a, I>(reference_names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            entries: reference_names.into_iter().map(parse_label).collect(),
        }
    }

    /// Override the base-name similarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Resolve a raw label to a reference index; ambiguity is no match.
    pub fn resolve(&self, raw: &str) -> Option<usize> {
        match self.resolve_detailed(raw) {
            Resolution::Match(i) => Some(i),
            _ => None,
        }
    }

    /// Resolve a raw label, reporting ambiguity for audit.
    pub fn resolve_detailed(&self, raw: &str) -> Resolution {
        let probe = parse_label(raw);

        // Stage 1: exact feature-tuple match.
        let exact: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == probe)
            .map(|(i, _)| i)
            .collect();
        match exact.len() {
            1 => return Resolution::Match(exact[0]),
            0 => {}
            _ => return Resolution::Ambiguous(exact),
        }

        // Stage 2: approximate base-name match, then re-filter on the
        // remaining features.
        let best = self
            .entries
            .iter()
            .map(|e| jaro_winkler(&probe.base, &e.base))
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let Some((best_idx, score)) = best else {
            return Resolution::NoMatch;
        };
        if score < self.threshold {
            debug!(label = raw, score, "base name below similarity threshold");
            return Resolution::NoMatch;
        }

        let matched_base = &self.entries[best_idx].base;
        let survivors: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.base == *matched_base
                    && e.entity == probe.entity
                    && e.jurisdiction == probe.jurisdiction
                    && e.series == probe.series
                    && e.legal == probe.legal
            })
            .map(|(i, _)| i)
            .collect();

        match survivors.len() {
            1 => Resolution::Match(survivors[0]),
            0 => Resolution::NoMatch,
            _ => Resolution::Ambiguous(survivors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_all_features() {
        let label = parse_label("Harbor Global Partners II (Cayman), LP");
        assert_eq!(label.base, "HARBOR GLOBAL PARTNERS II");
        assert_eq!(label.entity, Some(EntityClass::Partners));
        assert_eq!(label.jurisdiction, Some(Jurisdiction::Cayman));
        assert_eq!(label.series.as_deref(), Some("II"));
        assert_eq!(label.legal, Some(LegalForm::Lp));
    }

    #[test]
    fn parse_handles_bare_names() {
        let label = parse_label("Beacon Fund");
        assert_eq!(label.base, "BEACON FUND");
        assert_eq!(label.entity, None);
        assert_eq!(label.jurisdiction, None);
        assert_eq!(label.series, None);
        assert_eq!(label.legal, None);
    }

    #[test]
    fn exact_match_wins_without_fuzzy() {
        let resolver = NameResolver::new(["Harbor Master Fund, LP", "Harbor Partners Fund, LP"]);
        assert_eq!(resolver.resolve("HARBOR MASTER FUND, LP"), Some(0));
    }

    #[test]
    fn fuzzy_match_tolerates_small_corruption() {
        let resolver = NameResolver::new(["Harbor Global Fund, LP"]);
        // One dropped character from watermark bleed.
        assert_eq!(resolver.resolve("Harbr Global Fund, LP"), Some(0));
    }

    #[test]
    fn dissimilar_names_do_not_match() {
        let resolver = NameResolver::new(["Harbor Global Fund, LP"]);
        assert_eq!(resolver.resolve("Beacon Credit Fund, LP"), None);
    }

    #[test]
    fn ambiguity_is_no_match() {
        // Two references identical in every parsed feature.
        let resolver = NameResolver::new(["Harbor Fund, LP", "Harbor Fund, LP"]);
        let outcome = resolver.resolve_detailed("Harbor Fund, LP");
        assert!(matches!(outcome, Resolution::Ambiguous(ref v) if v.len() == 2));
        assert_eq!(resolver.resolve("Harbor Fund, LP"), None);
    }

    #[test]
    fn feature_mismatch_blocks_fuzzy_match() {
        let resolver = NameResolver::new(["Harbor Fund (Cayman), LP"]);
        // Base is nearly identical but the jurisdiction differs.
        assert_eq!(resolver.resolve("Harbor Fund (Offshore), LP"), None);
    }
}

//! Fund-name resolution tests against a realistic reference list.

use navlens_core::names::{NameResolver, Resolution, parse_label};

const REFERENCE: [&str; 6] = [
    "Arena Special Opportunities Fund, LP",
    "Arena Special Opportunities Partners (Cayman), LP",
    "Arena Special Opportunities Fund II, LP",
    "Arena Master Fund (Offshore), LP",
    "Beacon Structured Credit LLC",
    "Crestline Diversified Fund, LP",
];

#[test]
fn exact_labels_resolve_to_their_row() {
    let resolver = NameResolver::new(REFERENCE);
    for (i, name) in REFERENCE.iter().enumerate() {
        assert_eq!(resolver.resolve(name), Some(i), "label {name}");
    }
}

#[test]
fn series_numeral_separates_sibling_funds() {
    let resolver = NameResolver::new(REFERENCE);
    assert_eq!(resolver.resolve("ARENA SPECIAL OPPORTUNITIES FUND II, LP"), Some(2));
    assert_eq!(resolver.resolve("ARENA SPECIAL OPPORTUNITIES FUND, LP"), Some(0));
}

#[test]
fn entity_and_jurisdiction_disambiguate() {
    let resolver = NameResolver::new(REFERENCE);
    assert_eq!(
        resolver.resolve("Arena Special Opportunities Partners (Cayman), LP"),
        Some(1)
    );
    assert_eq!(resolver.resolve("Arena Master Fund (Offshore), LP"), Some(3));
}

#[test]
fn corrupted_label_recovers_through_fuzzy_stage() {
    let resolver = NameResolver::new(REFERENCE);
    // Watermark bleed dropped two characters.
    assert_eq!(
        resolver.resolve("Crestlne Diversifed Fund, LP"),
        Some(5)
    );
}

#[test]
fn unknown_fund_is_no_match() {
    let resolver = NameResolver::new(REFERENCE);
    assert_eq!(resolver.resolve("Northgate Recovery Fund, LP"), None);
    assert_eq!(
        resolver.resolve_detailed("Northgate Recovery Fund, LP"),
        Resolution::NoMatch
    );
}

#[test]
fn duplicate_references_are_ambiguous_not_guessed() {
    let resolver = NameResolver::new(["Arena Fund, LP", "Arena Fund, LP"]);
    assert_eq!(resolver.resolve("Arena Fund, LP"), None);
    assert!(matches!(
        resolver.resolve_detailed("Arena Fund, LP"),
        Resolution::Ambiguous(_)
    ));
}

#[test]
fn threshold_is_adjustable() {
    let strict = NameResolver::new(["Crestline Diversified Fund, LP"]).with_threshold(1.0);
    assert_eq!(strict.resolve("Crestlne Diversified Fund, LP"), None);

    let loose = NameResolver::new(["Crestline Diversified Fund, LP"]).with_threshold(0.8);
    assert_eq!(loose.resolve("Crestlne Diversified Fund, LP"), Some(0));
}

#[test]
fn parse_is_case_insensitive() {
    let a = parse_label("arena master fund (offshore), lp");
    let b = parse_label("ARENA MASTER FUND (OFFSHORE), LP");
    assert_eq!(a, b);
}

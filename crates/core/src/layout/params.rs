//! Extraction parameters.
//!
//! Every threshold in the pipeline lives here. The defaults are tuned for
//! one known family of fund-summary report layouts and should not be
//! assumed to generalize; callers working with a different layout family
//! are expected to re-tune them.

const DEFAULT_ROW_QUANTIZE_PLACES: u32 = 1;
const DEFAULT_TOKEN_GAP_TOLERANCE: f64 = 5.0;
const DEFAULT_COLUMN_GAP_TOLERANCE: f64 = 20.0;
const DEFAULT_COLUMN_CENTER_TOLERANCE: f64 = 30.0;
const DEFAULT_HEADER_WINDOW: f64 = 20.0;
const DEFAULT_HEADER_MAX_HEIGHT: f64 = 150.0;
const DEFAULT_MIN_PLAIN_DIGIT_LEN: usize = 6;

/// Strategy for merging row glyphs into tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenMerge {
    /// Start a new token whenever the horizontal gap between consecutive
    /// glyphs exceeds the gap tolerance.
    Gap,
    /// Merge adjacent glyphs regardless of gap size as long as both belong
    /// to the numeric character class (digits, comma, percent, sign, dot).
    /// More robust on wide-tracked fonts whose kerning defeats gap merging.
    CharClass,
}

/// How extracted value sequences are joined to reference rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// The i-th extracted value belongs to the i-th reference row. Requires
    /// exact count agreement; the primary, documented design.
    Index,
    /// Each value is assigned to the fund-name column with the nearest
    /// horizontal center, within `column_center_tolerance`. Ties and
    /// misses are unresolvable, never guessed.
    Positional,
}

/// How the variance figure is computed for a result row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VarianceMode {
    /// `abs((nav - prior) / prior * 100)`; requires a prior-period NAV on
    /// every reference row.
    PriorNav,
    /// `abs(mtd)` as a proxy magnitude-of-change signal when the reference
    /// table carries no history.
    MtdMagnitude,
}

/// Parameters for summary-table extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractParams {
    /// Decimal places the vertical position is quantized to when grouping
    /// glyphs into rows. One place absorbs sub-pixel jitter from the
    /// rendering engine while keeping distinct lines apart.
    pub row_quantize_places: u32,

    /// Maximum horizontal gap between consecutive glyphs of one token
    /// (tight digit runs).
    pub token_gap_tolerance: f64,

    /// Maximum horizontal gap within one column-level cell. Used when a
    /// row is split into candidate columns.
    pub column_gap_tolerance: f64,

    /// Maximum distance between a value center and a fund-column center
    /// for positional alignment.
    pub column_center_tolerance: f64,

    /// Half-width of the vertical strip scanned for header glyphs above a
    /// value column.
    pub header_window: f64,

    /// How far above the value row header glyphs are collected.
    pub header_max_height: f64,

    /// Token merge strategy applied to classified rows.
    pub merge_strategy: TokenMerge,

    /// Accept bare digit runs as NAV values when a row yields no
    /// comma-grouped candidates at all. Off by default; opt-in.
    pub allow_plain_digit_nav: bool,

    /// Minimum length of a bare digit run accepted by the fallback.
    /// Filters date fragments such as `2025`.
    pub min_plain_digit_len: usize,

    /// Extract fund-name header columns above the value row.
    /// Implied by `Alignment::Positional`.
    pub extract_names: bool,

    /// Words stripped from assembled header names. Structural table labels
    /// bleed into the header strip on the known layouts.
    pub header_noise_words: Vec<String>,

    pub alignment: Alignment,
    pub variance_mode: VarianceMode,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            row_quantize_places: DEFAULT_ROW_QUANTIZE_PLACES,
            token_gap_tolerance: DEFAULT_TOKEN_GAP_TOLERANCE,
            column_gap_tolerance: DEFAULT_COLUMN_GAP_TOLERANCE,
            column_center_tolerance: DEFAULT_COLUMN_CENTER_TOLERANCE,
            header_window: DEFAULT_HEADER_WINDOW,
            header_max_height: DEFAULT_HEADER_MAX_HEIGHT,
            merge_strategy: TokenMerge::Gap,
            allow_plain_digit_nav: false,
            min_plain_digit_len: DEFAULT_MIN_PLAIN_DIGIT_LEN,
            extract_names: false,
            header_noise_words: default_noise_words(),
            alignment: Alignment::Index,
            variance_mode: VarianceMode::PriorNav,
        }
    }
}

fn default_noise_words() -> Vec<String> {
    ["beginning", "of", "month", "aum", "net", "returns"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

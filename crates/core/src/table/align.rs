//! Alignment of extracted values to fund columns.
//!
//! Index alignment is the primary design: left-to-right extraction order
//! corresponds one-to-one to reference row order, and any count mismatch
//! aborts the call. Positional alignment is the alternate mode used when
//! fund-name columns are extracted; it never guesses on a tie.

use tracing::{debug, warn};

use super::classify::RowRole;
use super::values::ValueToken;
use crate::error::{ExtractError, Result};

const TIE_EPSILON: f64 = 1e-9;

/// Enforce the count invariant: an extracted sequence joins the reference
/// table one-to-one, in order, or not at all. Zipping mismatched lengths
/// would attribute a fund's numbers to the wrong fund.
pub(crate) fn check_count(role: RowRole, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(ExtractError::ColumnCountMismatch {
            role,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Find the nearest column center for a value; `None` when the two
/// nearest centers are equidistant (ambiguous, unresolvable).
fn nearest_center(value_center: f64, centers: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut second: f64 = f64::INFINITY;
    for (i, &c) in centers.iter().enumerate() {
        let d = (value_center - c).abs();
        match best {
            None => best = Some((i, d)),
            Some((_, bd)) if d < bd => {
                second = bd;
                best = Some((i, d));
            }
            Some(_) => second = second.min(d),
        }
    }
    let (i, d) = best?;
    if (second - d).abs() <= TIE_EPSILON {
        None
    } else {
        Some((i, d))
    }
}

/// Assign each extracted value to the column with the nearest horizontal
/// center, within `tolerance`. Returns the values in column order.
///
/// A column that no value lands in, or that two values contest at equal
/// distance, is unresolved and fails the call.
pub(crate) fn align_by_position(
    values: &[ValueToken],
    centers: &[f64],
    tolerance: f64,
) -> Result<Vec<f64>> {
    let mut slots: Vec<Option<f64>> = vec![None; centers.len()];
    let mut best_dist: Vec<f64> = vec![f64::INFINITY; centers.len()];
    let mut contested: Vec<bool> = vec![false; centers.len()];

    for v in values {
        let Some((idx, dist)) = nearest_center(v.center, centers) else {
            warn!(center = v.center, "value equidistant to two columns");
            continue;
        };
        if dist > tolerance {
            debug!(center = v.center, dist, "value outside any column");
            continue;
        }
        if (dist - best_dist[idx]).abs() <= TIE_EPSILON {
            warn!(column = idx, "column contested at equal distance");
            contested[idx] = true;
        } else if dist < best_dist[idx] {
            slots[idx] = Some(v.value);
            best_dist[idx] = dist;
        }
    }

    slots
        .into_iter()
        .zip(contested)
        .enumerate()
        .map(|(index, (slot, tied))| {
            if tied {
                return Err(ExtractError::UnresolvedColumn { index });
            }
            slot.ok_or(ExtractError::UnresolvedColumn { index })
        })
        .collect()
}

//! Tolerance-based spatial clustering.
//!
//! Groups values or objects whose positions agree within a tolerance band.
//! Used for assembling header name columns and for bucketing value centers.

use super::types::{BBox, Glyph};

/// Cluster a list of f64 values based on tolerance.
///
/// Values are sorted; a new cluster starts whenever the next value is more
/// than `tolerance` above the previous one.
pub fn cluster_list(mut xs: Vec<f64>, tolerance: f64) -> Vec<Vec<f64>> {
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    if tolerance == 0.0 || xs.len() < 2 {
        return xs.into_iter().map(|x| vec![x]).collect();
    }
    let mut groups: Vec<Vec<f64>> = Vec::new();
    let mut current = vec![xs[0]];
    let mut last = xs[0];
    for x in xs.into_iter().skip(1) {
        if x <= last + tolerance {
            current.push(x);
        } else {
            groups.push(std::mem::take(&mut current));
            current.push(x);
        }
        last = x;
    }
    groups.push(current);
    groups
}

/// Cluster objects by a position key function and tolerance.
///
/// Objects are sorted by key; consecutive objects whose keys lie within
/// `tolerance` of each other share a cluster. Clusters come back in
/// ascending key order.
pub fn cluster_objects<T, F>(xs: &[T], key_fn: F, tolerance: f64) -> Vec<Vec<&T>>
where
    F: Fn(&T) -> f64,
{
    let mut ordered: Vec<&T> = xs.iter().collect();
    ordered.sort_by(|a, b| {
        key_fn(a)
            .partial_cmp(&key_fn(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut groups: Vec<Vec<&T>> = Vec::new();
    let mut current: Vec<&T> = Vec::new();
    let mut last: Option<f64> = None;
    for obj in ordered {
        let key = key_fn(obj);
        match last {
            Some(prev) if key > prev + tolerance => {
                groups.push(std::mem::take(&mut current));
            }
            _ => {}
        }
        current.push(obj);
        last = Some(key);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Compute a bounding box from a slice of glyph references.
pub fn bbox_from_glyphs(glyphs: &[&Glyph]) -> BBox {
    let mut x0 = f64::INFINITY;
    let mut top = f64::INFINITY;
    let mut x1 = f64::NEG_INFINITY;
    let mut bottom = f64::NEG_INFINITY;
    for g in glyphs {
        x0 = x0.min(g.x0);
        top = top.min(g.top);
        x1 = x1.max(g.x1);
        bottom = bottom.max(g.bottom);
    }
    BBox {
        x0,
        top,
        x1,
        bottom,
    }
}

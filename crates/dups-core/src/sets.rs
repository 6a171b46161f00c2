//! Set overlap measures over n-gram sets.
//!
//! Both measures assume the two sets were built with the same n-gram size.
//! Mixed sizes are not detected and simply produce a meaningless score.

use std::collections::HashSet;
use std::hash::Hash;

/// How much of `b` is contained in `a`: `|A ∩ B| / |B|`.
pub fn containment<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if b.is_empty() { return 0.0; }
    let intersection = a.intersection(b).count();
    intersection as f64 / b.len() as f64
}

/// Jaccard resemblance: `|A ∩ B| / |A ∪ B|`.
pub fn resemblance<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 { 0.0 } else { intersection as f64 / union as f64 }
}

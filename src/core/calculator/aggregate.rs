//! Folding per-project overlaps into per-pair totals.

use crate::core::calculator::Tally;
use crate::models::{PairKey, ProjectPairKey};

/// Drops the project id from every key and sums what lands on the same pair.
/// The pair keeps the order it was built with; nothing is re-sorted here.
pub fn pair_totals(per_project: &Tally<ProjectPairKey>) -> Tally<PairKey> {
    let mut totals = Tally::new();
    for (key, shared) in per_project.iter() {
        totals.add(key.pair, shared);
    }
    totals
}

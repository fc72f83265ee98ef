//! Per-project pairwise overlap of work intervals.

use crate::core::calculator::Tally;
use crate::core::loader::ProjectIndex;
use crate::models::{PairOrder, ProjectPairKey, WorkRecord};

/// Shared time of every two distinct employees on every project.
///
/// Records are compared by position `(i, j)` with `i < j`. Pairs with the
/// same employee id, or whose intervals only touch, create no entry.
pub fn project_overlaps(index: &ProjectIndex, order: PairOrder) -> Tally<ProjectPairKey> {
    let mut tally = Tally::new();

    for (project_id, records) in index.iter() {
        collect_project(project_id, records, order, &mut tally);
    }

    tracing::debug!(entries = tally.len(), "project overlaps computed");
    tally
}

fn collect_project(
    project_id: u32,
    records: &[WorkRecord],
    order: PairOrder,
    tally: &mut Tally<ProjectPairKey>,
) {
    for (i, earlier) in records.iter().enumerate() {
        for later in &records[i + 1..] {
            if earlier.employee_id() == later.employee_id() {
                continue;
            }

            if let Some(shared) = earlier.intersection(later) {
                let (first, second) = order.arrange(earlier.employee_id(), later.employee_id());
                tally.add(ProjectPairKey::new(first, second, project_id), shared);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::load_str;
    use crate::core::parser::RecordParser;
    use chrono::Duration;

    fn overlaps(content: &str, order: PairOrder) -> Vec<(ProjectPairKey, Duration)> {
        let idx = load_str(content, &RecordParser::new()).unwrap();
        project_overlaps(&idx, order).iter().collect()
    }

    #[test]
    fn overlapping_employees_get_one_entry() {
        let got = overlaps(
            "1, 10, 2021-01-01, 2021-01-10\n\
             2, 10, 2021-01-05, 2021-01-15\n",
            PairOrder::Positional,
        );
        assert_eq!(got, vec![(ProjectPairKey::new(1, 2, 10), Duration::days(5))]);
    }

    #[test]
    fn touching_intervals_create_no_entry() {
        let got = overlaps(
            "1, 10, 2021-01-01, 2021-01-05\n\
             2, 10, 2021-01-05, 2021-01-10\n",
            PairOrder::Positional,
        );
        assert!(got.is_empty());
    }

    #[test]
    fn same_employee_is_never_paired() {
        let got = overlaps(
            "1, 10, 2021-01-01, 2021-01-05\n\
             1, 10, 2021-01-05, 2021-01-10\n",
            PairOrder::Positional,
        );
        assert!(got.is_empty());
    }

    #[test]
    fn employees_on_different_projects_are_not_paired() {
        let got = overlaps(
            "1, 10, 2021-01-01, 2021-01-10\n\
             2, 11, 2021-01-01, 2021-01-10\n",
            PairOrder::Positional,
        );
        assert!(got.is_empty());
    }

    #[test]
    fn repeated_stints_accumulate_on_one_key() {
        let got = overlaps(
            "1, 10, 2021-01-01, 2021-01-31\n\
             2, 10, 2021-01-10, 2021-01-12\n\
             2, 10, 2021-01-20, 2021-01-23\n",
            PairOrder::Positional,
        );
        assert_eq!(got, vec![(ProjectPairKey::new(1, 2, 10), Duration::days(5))]);
    }

    #[test]
    fn positional_order_follows_the_record_list() {
        let got = overlaps(
            "7, 10, 2021-01-01, 2021-01-10\n\
             3, 10, 2021-01-01, 2021-01-10\n",
            PairOrder::Positional,
        );
        assert_eq!(got[0].0, ProjectPairKey::new(7, 3, 10));
    }

    #[test]
    fn ascending_order_sorts_the_pair() {
        let got = overlaps(
            "7, 10, 2021-01-01, 2021-01-10\n\
             3, 10, 2021-01-01, 2021-01-10\n",
            PairOrder::Ascending,
        );
        assert_eq!(got[0].0, ProjectPairKey::new(3, 7, 10));
    }

    #[test]
    fn sub_day_overlaps_are_kept_exactly() {
        let got = overlaps(
            "1, 10, 2021-01-01 08:00:00, 2021-01-01 17:00:00\n\
             2, 10, 2021-01-01 12:30:00, 2021-01-02 00:00:00\n",
            PairOrder::Positional,
        );
        assert_eq!(
            got[0].1,
            Duration::hours(4) + Duration::minutes(30)
        );
    }

    #[test]
    fn three_employees_produce_three_pairs() {
        let got = overlaps(
            "1, 10, 2021-01-01, 2021-01-10\n\
             2, 10, 2021-01-02, 2021-01-10\n\
             3, 10, 2021-01-03, 2021-01-10\n",
            PairOrder::Positional,
        );
        let keys: Vec<_> = got.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["1 - 2 - 10", "1 - 3 - 10", "2 - 3 - 10"]);
    }
}

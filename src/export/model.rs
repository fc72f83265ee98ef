// src/export/model.rs

use crate::core::ranking::PairReport;
use crate::models::PairKey;
use crate::utils::time::whole_days;
use chrono::Duration;
use serde::Serialize;

/// Flat row for CSV / JSON exports.
/// `project_id` is empty for whole-pair totals.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub employee_a: u32,
    pub employee_b: u32,
    pub project_id: Option<u32>,
    pub days: i64,
    pub seconds: i64,
}

impl ReportRow {
    fn new(pair: PairKey, project_id: Option<u32>, duration: Duration) -> Self {
        Self {
            employee_a: pair.first,
            employee_b: pair.second,
            project_id,
            days: whole_days(duration),
            seconds: duration.num_seconds(),
        }
    }
}

/// One row per project the winning pair shared.
pub(crate) fn report_rows(report: &PairReport) -> Vec<ReportRow> {
    report
        .projects
        .iter()
        .map(|share| ReportRow::new(report.pair, Some(share.project_id), share.duration))
        .collect()
}

/// One row per pair total.
pub(crate) fn pair_rows(ranked: &[(PairKey, Duration)]) -> Vec<ReportRow> {
    ranked
        .iter()
        .map(|&(pair, total)| ReportRow::new(pair, None, total))
        .collect()
}

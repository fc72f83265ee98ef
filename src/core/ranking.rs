//! Picking the pair that worked together the longest and describing it.

use crate::core::calculator::Tally;
use crate::models::{PairKey, ProjectPairKey};
use crate::utils::time::whole_days;
use chrono::Duration;
use std::fmt;

pub const NO_PAIR_MESSAGE: &str = "There is no pair of employees that worked together!";

/// One project the winning pair shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectShare {
    pub project_id: u32,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairReport {
    pub pair: PairKey,
    pub total: Duration,
    pub projects: Vec<ProjectShare>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    NoPair,
    Best(PairReport),
}

/// Entry with the strictly greatest duration; on ties the first one wins.
pub fn best_pair(totals: &Tally<PairKey>) -> Option<(PairKey, Duration)> {
    let mut best: Option<(PairKey, Duration)> = None;
    for (pair, total) in totals.iter() {
        if best.is_none_or(|(_, max)| total > max) {
            best = Some((pair, total));
        }
    }
    best
}

pub fn build_report(per_project: &Tally<ProjectPairKey>, totals: &Tally<PairKey>) -> Report {
    let Some((pair, total)) = best_pair(totals) else {
        return Report::NoPair;
    };

    let projects = per_project
        .iter()
        .filter(|(key, _)| key.pair == pair)
        .map(|(key, duration)| ProjectShare {
            project_id: key.project_id,
            duration,
        })
        .collect();

    Report::Best(PairReport {
        pair,
        total,
        projects,
    })
}

/// Every pair, longest first. Equal totals keep insertion order.
pub fn rank_pairs(totals: &Tally<PairKey>) -> Vec<(PairKey, Duration)> {
    let mut ranked: Vec<_> = totals.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

impl PairReport {
    pub fn days(&self) -> i64 {
        whole_days(self.total)
    }
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} worked together for {} days.", self.pair, self.days())?;
        for share in &self.projects {
            write!(
                f,
                "\n{} - {} for {} days",
                self.pair,
                share.project_id,
                whole_days(share.duration)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoPair => f.write_str(NO_PAIR_MESSAGE),
            Report::Best(best) => fmt::Display::fmt(best, f),
        }
    }
}

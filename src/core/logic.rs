use crate::core::calculator::{Tally, aggregate, overlap};
use crate::core::loader::{self, ProjectIndex};
use crate::core::parser::RecordParser;
use crate::core::ranking::{self, Report};
use crate::errors::LoadError;
use crate::models::{PairKey, PairOrder, ProjectPairKey};

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub per_project: Tally<ProjectPairKey>,
    pub totals: Tally<PairKey>,
    pub report: Report,
}

pub struct Core;

impl Core {
    /// Runs overlap → aggregation → ranking over a loaded dataset.
    pub fn analyze(index: &ProjectIndex, order: PairOrder) -> Analysis {
        if index.is_empty() {
            tracing::warn!("dataset is empty");
        }
        tracing::debug!(pair_order = order.as_str(), "analysing dataset");

        let per_project = overlap::project_overlaps(index, order);
        let totals = aggregate::pair_totals(&per_project);
        let report = ranking::build_report(&per_project, &totals);

        if let Report::Best(best) = &report {
            tracing::info!(
                pair = %best.pair,
                days = best.days(),
                projects = best.projects.len(),
                "best pair found"
            );
        } else {
            tracing::info!("no pair of employees worked together");
        }

        Analysis {
            per_project,
            totals,
            report,
        }
    }

    /// Loads `content` and analyses it. Any validation error aborts the run.
    pub fn analyze_str(
        content: &str,
        parser: &RecordParser,
        order: PairOrder,
    ) -> Result<Analysis, LoadError> {
        let index = loader::load_str(content, parser)?;
        Ok(Self::analyze(&index, order))
    }
}

//! Dataset loader: parses every line, rejects overlapping duplicates and
//! groups the accepted records by project.
//!
//! Validation is all-or-nothing. The first bad line or overlapping duplicate
//! fails the whole dataset.

use crate::core::parser::RecordParser;
use crate::errors::LoadError;
use crate::models::WorkRecord;
use std::collections::HashMap;
use tracing::{debug, info};

/// Records grouped by project. Projects and the records inside each project
/// keep the order in which they were first seen.
#[derive(Debug, Default, Clone)]
pub struct ProjectIndex {
    projects: Vec<(u32, Vec<WorkRecord>)>,
    positions: HashMap<u32, usize>,
}

impl ProjectIndex {
    fn push(&mut self, record: WorkRecord) {
        let project_id = record.project_id();
        match self.positions.get(&project_id) {
            Some(&pos) => self.projects[pos].1.push(record),
            None => {
                self.positions.insert(project_id, self.projects.len());
                self.projects.push((project_id, vec![record]));
            }
        }
    }

    /// `(project_id, records)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[WorkRecord])> {
        self.projects.iter().map(|(id, recs)| (*id, recs.as_slice()))
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn record_count(&self) -> usize {
        self.projects.iter().map(|(_, recs)| recs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub fn load_str(content: &str, parser: &RecordParser) -> Result<ProjectIndex, LoadError> {
    load_lines(content.lines(), parser)
}

/// Loads a dataset from individual lines. Every line is a record.
///
/// The duplicate check compares each candidate with the records already
/// accepted for the same employee and project, so the worst case is O(n²).
pub fn load_lines<I, S>(lines: I, parser: &RecordParser) -> Result<ProjectIndex, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = ProjectIndex::default();
    let mut accepted: HashMap<(u32, u32), Vec<WorkRecord>> = HashMap::new();

    for (i, line) in lines.into_iter().enumerate() {
        let line_no = i + 1;
        let record = parser
            .parse(line.as_ref())
            .map_err(|source| LoadError::Record {
                line: line_no,
                source,
            })?;

        let key = (record.employee_id(), record.project_id());
        let previous = accepted.entry(key).or_default();

        if previous.iter().any(|existing| existing.overlaps(&record)) {
            return Err(LoadError::DuplicateOverlap {
                line: line_no,
                employee_id: record.employee_id(),
                project_id: record.project_id(),
            });
        }

        debug!(
            line = line_no,
            employee = record.employee_id(),
            project = record.project_id(),
            "record accepted"
        );

        previous.push(record);
        index.push(record);
    }

    info!(
        records = index.record_count(),
        projects = index.project_count(),
        "dataset loaded"
    );

    Ok(index)
}

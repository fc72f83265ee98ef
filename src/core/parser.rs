//! Record parser/validator: one raw input line → one [`WorkRecord`].

use crate::errors::RecordError;
use crate::models::WorkRecord;
use crate::utils::date;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

const ROW_LENGTH: usize = 4;
const NULL_DATE: &str = "NULL";

static FIELD_DELIMITER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*").expect("field delimiter pattern is valid")
});

/// Parses input lines. `NULL` dates resolve through the parser's clock,
/// which is the local wall clock unless a fixed one is injected.
#[derive(Clone, Copy)]
pub struct RecordParser {
    clock: fn() -> NaiveDateTime,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self { clock: date::now }
    }
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Self {
        Self { clock }
    }

    pub fn parse(&self, line: &str) -> Result<WorkRecord, RecordError> {
        let fields = split_fields(line);
        if fields.len() != ROW_LENGTH {
            return Err(RecordError::InvalidRowLength {
                found: fields.len(),
            });
        }

        let employee_id = parse_id("employee", fields[0])?;
        let project_id = parse_id("project", fields[1])?;

        let date_from = self.parse_date(fields[2])?;
        let date_to = self.parse_date(fields[3])?;

        if date_from > date_to {
            return Err(RecordError::DateAnomaly {
                from: date_from,
                to: date_to,
            });
        }

        Ok(WorkRecord::new(employee_id, project_id, date_from, date_to))
    }

    fn parse_date(&self, field: &str) -> Result<NaiveDateTime, RecordError> {
        if field.eq_ignore_ascii_case(NULL_DATE) {
            return Ok((self.clock)());
        }

        date::parse_timestamp(field).ok_or_else(|| RecordError::UnsupportedDateFormat {
            value: field.to_string(),
        })
    }
}

/// Splits on a comma plus any following whitespace. Trailing empty fields are
/// dropped, so a line ending in a comma still counts four fields.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = FIELD_DELIMITER.split(line.trim_end()).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

fn parse_id(field: &'static str, raw: &str) -> Result<u32, RecordError> {
    raw.parse::<u32>().map_err(|_| RecordError::InvalidId {
        field,
        value: raw.to_string(),
    })
}

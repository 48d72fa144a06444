//! Parsing pasted spreadsheet text into vacation records.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Vacation, VacationType};
use crate::validation::{IssueKind, ValidationIssue, ValidationReport};

use super::columns::Column;

/// Delimiters tried when none is configured, in tie-break order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Options controlling how pasted text is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Field delimiter. Detected from the header line when unset.
    pub delimiter: Option<char>,
}

/// The records read from pasted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    /// Rows that converted into vacations, in input order.
    pub vacations: Vec<Vacation>,
    /// Problems with rows that could not be converted.
    pub issues: ValidationReport,
    /// Number of data rows read, blank lines excluded.
    pub row_count: usize,
}

impl ImportBatch {
    /// Returns true when every row converted.
    pub fn is_clean(&self) -> bool {
        self.issues.is_valid()
    }
}

/// Picks the delimiter that occurs most often in the first non-blank line.
///
/// Comma wins ties and is used when no candidate occurs at all.
pub fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");

    let mut best = (b',', 0);
    for candidate in CANDIDATE_DELIMITERS {
        let count = header.bytes().filter(|b| *b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

/// Reads a delimited table with a header row into vacations.
///
/// Columns are matched by header name (see [`Column::from_header`]); unknown
/// columns are ignored. Blank lines are skipped and fields are trimmed. Each
/// data row, numbered from 1, either becomes a [`Vacation`] or adds issues:
/// a missing or empty required column, or an unrecognized vacation type.
///
/// # Example
///
/// ```
/// use vacation_ledger::import::{ImportOptions, parse_vacation_table};
///
/// let text = "type\temployeeId\temployeeName\tstartDate\tendDate\n\
///             Regular\tE1\tAna\t2024-01-10\t2024-01-15\n";
/// let batch = parse_vacation_table(text, &ImportOptions::default())?;
///
/// assert!(batch.is_clean());
/// assert_eq!(batch.vacations[0].employee_id, "E1");
/// # Ok::<(), vacation_ledger::error::LedgerError>(())
/// ```
pub fn parse_vacation_table(text: &str, options: &ImportOptions) -> LedgerResult<ImportBatch> {
    let delimiter = match options.delimiter {
        Some(c) => u8::try_from(c).map_err(|_| LedgerError::Import {
            message: format!("delimiter '{}' is not a single-byte character", c),
        })?,
        None => detect_delimiter(text),
    };

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LedgerError::Import {
            message: format!("cannot read header row: {}", e),
        })?
        .clone();

    let mut positions: HashMap<Column, usize> = HashMap::new();
    for (position, header) in headers.iter().enumerate() {
        if let Some(column) = Column::from_header(header) {
            positions.entry(column).or_insert(position);
        }
    }
    debug!(
        delimiter = %char::from(delimiter),
        recognized = positions.len(),
        "Read import header"
    );

    let mut batch = ImportBatch::default();
    for record in reader.records() {
        let record = record.map_err(|e| LedgerError::Import {
            message: e.to_string(),
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        batch.row_count += 1;
        match convert_row(batch.row_count, &record, &positions) {
            Ok(vacation) => batch.vacations.push(vacation),
            Err(issues) => issues.into_iter().for_each(|issue| batch.issues.push(issue)),
        }
    }

    info!(
        rows = batch.row_count,
        converted = batch.vacations.len(),
        issues = batch.issues.len(),
        "Parsed import table"
    );
    Ok(batch)
}

/// Converts one data row, or returns every issue found in it.
fn convert_row(
    row: usize,
    record: &StringRecord,
    positions: &HashMap<Column, usize>,
) -> Result<Vacation, Vec<ValidationIssue>> {
    let field = |column: Column| {
        positions
            .get(&column)
            .and_then(|position| record.get(*position))
            .filter(|value| !value.is_empty())
    };

    let mut issues: Vec<ValidationIssue> = Column::ALL
        .into_iter()
        .filter(|column| column.is_required() && field(*column).is_none())
        .map(|column| {
            ValidationIssue::new(row, IssueKind::MissingColumn(column.header_name().to_string()))
        })
        .collect();

    let vacation_type = field(Column::Type).and_then(|value| match value.parse::<VacationType>() {
        Ok(vacation_type) => Some(vacation_type),
        Err(unknown) => {
            issues.push(ValidationIssue::new(row, IssueKind::UnknownType(unknown.0)));
            None
        }
    });

    match (
        vacation_type,
        field(Column::EmployeeId),
        field(Column::EmployeeName),
        field(Column::StartDate),
        field(Column::EndDate),
    ) {
        (Some(vacation_type), Some(employee_id), Some(employee_name), Some(start), Some(end))
            if issues.is_empty() =>
        {
            Ok(Vacation {
                vacation_type,
                employee_id: employee_id.to_string(),
                employee_name: employee_name.to_string(),
                start_date: start.to_string(),
                end_date: end.to_string(),
                department: field(Column::Department).map(str::to_string),
            })
        }
        _ => Err(issues),
    }
}

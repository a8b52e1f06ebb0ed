//! CSV serialization of export rows.
//!
//! Structured and freeform rows share one file. The header is the union of
//! both row shapes; cells a row does not have are written empty.

use std::io::Write;
use std::path::Path;

use crate::errors::CoreError;
use crate::flatten::{ExportRow, RowDetail};

/// Export file header, in column order.
pub const COLUMNS: [&str; 13] = [
    "created_date",
    "current_list",
    "card_name",
    "card_label",
    "member_name",
    "reporting_team",
    "requestor_email",
    "reporting_manager_email",
    "type_of_requirement",
    "description_pre_standardise",
    "list_from",
    "list_to",
    "transaction_date",
];

/// Layout of `created_date` cells (`2022-06-28 08:03:12+00:00`).
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%:z";

impl ExportRow {
    /// Cells of this row, aligned with [`COLUMNS`].
    #[must_use]
    pub fn to_record(&self) -> [&str; 13] {
        let (team, requestor, manager, requirement, freeform) = match &self.detail {
            RowDetail::Structured {
                reporting_team,
                requestor_email,
                reporting_manager_email,
                type_of_requirement,
            } => (
                reporting_team.as_str(),
                requestor_email.as_str(),
                reporting_manager_email.as_str(),
                type_of_requirement.as_str(),
                "",
            ),
            RowDetail::Freeform {
                description_pre_standardise,
            } => ("", "", "", "", description_pre_standardise.as_str()),
        };

        [
            "", // created_date, filled by the writer
            &self.current_list,
            &self.card_name,
            &self.card_label,
            &self.member_name,
            team,
            requestor,
            manager,
            requirement,
            freeform,
            &self.list_from,
            &self.list_to,
            &self.transaction_date,
        ]
    }
}

/// Write `rows` as CSV, header first.
///
/// # Errors
///
/// Returns [`CoreError::Csv`] if the underlying writer fails.
pub fn write_rows<W: Write>(writer: W, rows: &[ExportRow]) -> Result<(), CoreError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;

    for row in rows {
        let created = row
            .created_date
            .map(|date| date.format(CREATED_DATE_FORMAT).to_string())
            .unwrap_or_default();
        let mut record = row.to_record();
        record[0] = &created;
        csv.write_record(record)?;
    }

    csv.flush()?;
    Ok(())
}

/// Write `rows` to a CSV file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`CoreError`] if the file cannot be created or written.
pub fn write_rows_to_path(path: &Path, rows: &[ExportRow]) -> Result<(), CoreError> {
    let file = std::fs::File::create(path)?;
    write_rows(std::io::BufWriter::new(file), rows)
}

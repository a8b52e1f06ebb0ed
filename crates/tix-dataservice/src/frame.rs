//! Tabular buffer for data-service responses.
//!
//! A response is a sequence of groups, each a sequence of records whose
//! `values` object is one row. The nesting depth is not part of the
//! contract, so records are collected by walking arrays until an object is
//! reached. Columns are the union of all row keys in first-seen order.

use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DataServiceError;

/// Key holding a record's row data.
pub const VALUES_KEY: &str = "values";

/// One row: column name → cell value.
pub type Row = Map<String, Value>;

/// Rows accumulated from one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl FetchResult {
    /// Extract every record of a response.
    ///
    /// All-or-nothing: a record without a `values` object fails the whole
    /// response, so a retried call never appends half a response twice.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError::MissingValues`] naming the offending record.
    pub fn from_response(response: &Value) -> Result<Self, DataServiceError> {
        let mut result = Self::default();
        collect(response, &mut String::new(), &mut result)?;
        Ok(result)
    }

    /// Append one row, extending the column set with any new keys.
    pub fn push(&mut self, row: Row) {
        for key in row.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    /// Append every row of `other`.
    pub fn append(&mut self, other: Self) {
        for row in other.rows {
            self.push(row);
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write as CSV: an unnamed row-index column, then every column.
    ///
    /// Cells a row lacks are written empty, as are JSON nulls.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError::Csv`] if the writer fails.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), DataServiceError> {
        let mut csv = csv::Writer::from_writer(writer);

        let header = std::iter::once("").chain(self.columns.iter().map(String::as_str));
        csv.write_record(header)?;

        for (index, row) in self.rows.iter().enumerate() {
            let mut record = Vec::with_capacity(self.columns.len() + 1);
            record.push(index.to_string());
            record.extend(
                self.columns
                    .iter()
                    .map(|column| row.get(column).map_or_else(String::new, cell)),
            );
            csv.write_record(&record)?;
        }

        csv.flush()?;
        Ok(())
    }

    /// Write as CSV to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`DataServiceError`] if the file cannot be created or written.
    pub fn write_csv_to_path(&self, path: &Path) -> Result<(), DataServiceError> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))
    }
}

fn collect(
    value: &Value,
    path: &mut String,
    out: &mut FetchResult,
) -> Result<(), DataServiceError> {
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{index}]"));
                collect(item, path, out)?;
                path.truncate(len);
            }
            Ok(())
        }
        Value::Object(record) => match record.get(VALUES_KEY) {
            Some(Value::Object(values)) => {
                out.push(values.clone());
                Ok(())
            }
            _ => Err(DataServiceError::MissingValues {
                path: location(path),
            }),
        },
        _ => Err(DataServiceError::MissingValues {
            path: location(path),
        }),
    }
}

fn location(path: &str) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        path.to_string()
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

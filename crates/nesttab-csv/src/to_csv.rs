// NestTab - Nested Data to Tabular Transformation
//
// Copyright (c) 2026 NestTab contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Render a [`Table`] to CSV.

use std::io::Write;

use nesttab_core::Table;
use serde_json::Value;

use crate::error::{CsvError, Result};

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Render a table to a CSV string with default configuration.
///
/// The header row is the index-column names followed by the data-column
/// labels; null cells render empty.
///
/// # Example
/// ```
/// use nesttab_core::{Pattern, Transformer};
/// use nesttab_csv::to_csv;
///
/// let mut t = Transformer::new(".a.<id>.b".parse().unwrap());
/// t.add_json(r#"{"a": {"x": {"b": 1}}}"#).unwrap();
/// let csv = to_csv(&t.to_table()).unwrap();
/// assert_eq!(csv, "id,a_b\nx,1\n");
/// ```
pub fn to_csv(table: &Table) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Render a table to a CSV string with custom configuration.
pub fn to_csv_with_config(table: &Table, config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::new();
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a table as CSV with default configuration.
pub fn to_csv_writer<W: Write>(table: &Table, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a table as CSV with custom configuration.
pub fn to_csv_writer_with_config<W: Write>(
    table: &Table,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        let header: Vec<&str> = table
            .index_columns
            .iter()
            .chain(table.columns.iter())
            .map(String::as_str)
            .collect();
        wtr.write_record(&header)
            .map_err(|e| CsvError::Other(format!("Failed to write CSV header: {}", e)))?;
    }

    for (row_pos, row) in table.rows.iter().enumerate() {
        let record: Vec<String> = row.iter().map(value_to_csv_string).collect();
        wtr.write_record(&record).map_err(|e| {
            CsvError::Other(format!("Failed to write CSV record {}: {}", row_pos, e))
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render one cell. Scalars render bare, nulls empty; leaves the pattern
/// never fully descended into render as compact JSON.
fn value_to_csv_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

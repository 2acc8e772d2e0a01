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

//! NestTab - transform nested data into flat tables.
//!
//! A compact path pattern selects which parts of a nested JSON document
//! become rows and which become columns. This crate re-exports the core
//! API; enable the `csv` feature for CSV rendering of the resulting
//! tables.
//!
//! # One-shot conversion
//!
//! ```
//! let table = nesttab::table_from_json(
//!     ".a.<id>.b",
//!     r#"{"a": {"x": {"b": 1}, "y": {"b": 2}}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(table.index_columns, vec!["id"]);
//! assert_eq!(table.rows.len(), 2);
//! ```
//!
//! # Incremental ingestion
//!
//! ```
//! use nesttab::{Pattern, Transformer};
//!
//! let mut transformer = Transformer::new(".<id>.*".parse().unwrap());
//! transformer.add_json(r#"{"r1": {"a": 1}}"#).unwrap();
//! transformer.add_json(r#"{"r2": {"b": 2}}"#).unwrap();
//!
//! let table = transformer.to_table();
//! assert_eq!(table.columns, vec!["a", "b"]);
//! ```

pub use nesttab_core::{
    match_chunk, Chunk, Component, Key, MatchRecord, Pattern, Result, Segment, Table,
    TransformError, Transformer, LABEL_SEPARATOR,
};

#[cfg(feature = "csv")]
pub use nesttab_csv;

use serde_json::Value;

/// Parse `pattern`, ingest one decoded document, and return the table.
pub fn table_from_value(pattern: &str, data: &Value) -> Result<Table> {
    let mut transformer = Transformer::new(Pattern::parse(pattern)?);
    transformer.add_data(data)?;
    Ok(transformer.to_table())
}

/// Parse `pattern`, decode and ingest one JSON document, and return the
/// table.
pub fn table_from_json(pattern: &str, json: &str) -> Result<Table> {
    let mut transformer = Transformer::new(Pattern::parse(pattern)?);
    transformer.add_json(json)?;
    Ok(transformer.to_table())
}

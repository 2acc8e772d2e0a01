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

//! The transformer: pattern-driven ingestion and table emission.

use serde_json::Value;

use crate::error::{Result, TransformError};
use crate::matcher::{self, Segment};
use crate::matrix::Matrix;
use crate::pattern::{Chunk, Component, Key, Pattern};
use crate::table::{self, Table, LABEL_SEPARATOR};

/// Accumulates nested documents into a flat table, guided by a
/// [`Pattern`].
///
/// Feed it decoded values with [`add_data`] or raw JSON with
/// [`add_json`]; each call runs the matcher once per pattern chunk and
/// merges the results into one growing matrix. Read the result with
/// [`to_table`].
///
/// A `Transformer` is not safe for concurrent ingestion: callers sharing
/// one instance must serialize `add_data` calls. The [`Pattern`] itself
/// is immutable and can be shared across transformers and threads.
///
/// [`add_data`]: Self::add_data
/// [`add_json`]: Self::add_json
/// [`to_table`]: Self::to_table
#[derive(Debug, Clone)]
pub struct Transformer {
    pattern: Pattern,
    default_labels: Option<Vec<String>>,
    matrix: Matrix,
}

impl Transformer {
    /// Create a transformer with derived column labels.
    ///
    /// Records whose column path is empty (chunks with no glob or `{...}`
    /// component) are labeled with the chunk's literal keys joined by
    /// `_`, so `".<id>.x .<id>.y"` yields columns `x` and `y`.
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            default_labels: None,
            matrix: Matrix::default(),
        }
    }

    /// Use `label` as the column label for every chunk's empty-column-path
    /// records, instead of the derived label.
    pub fn with_default_label(pattern: Pattern, label: impl Into<String>) -> Self {
        let labels = vec![label.into(); pattern.chunks().len()];
        Self {
            pattern,
            default_labels: Some(labels),
            matrix: Matrix::default(),
        }
    }

    /// Per-chunk default column labels.
    ///
    /// # Errors
    ///
    /// [`TransformError::ChunkCount`] unless `labels` has exactly one
    /// entry per pattern chunk.
    pub fn with_default_labels(pattern: Pattern, labels: Vec<String>) -> Result<Self> {
        if labels.len() != pattern.chunks().len() {
            return Err(TransformError::ChunkCount {
                expected: pattern.chunks().len(),
                found: labels.len(),
            });
        }
        Ok(Self {
            pattern,
            default_labels: Some(labels),
            matrix: Matrix::default(),
        })
    }

    /// The pattern this transformer was built with.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Ingest one decoded document.
    ///
    /// Runs the matcher over `data` once per chunk, in declared order.
    /// Every emitted record is written into the matrix; a record landing
    /// on an already-written (index, column) pair overwrites it, so
    /// re-ingesting identical data leaves the table unchanged. Absent
    /// keys and non-enumerable values never fail the whole call.
    pub fn add_data(&mut self, data: &Value) -> Result<()> {
        for (chunk_pos, chunk) in self.pattern.chunks().iter().enumerate() {
            let default = self
                .default_labels
                .as_ref()
                .map(|labels| labels[chunk_pos].clone())
                .unwrap_or_else(|| derived_label(chunk));
            for record in matcher::match_chunk(data, chunk)? {
                let column = if record.column_path.is_empty() {
                    vec![Segment::Key(default.clone())]
                } else {
                    record.column_path
                };
                self.matrix.insert(record.index_path, column, record.value);
            }
        }
        Ok(())
    }

    /// Decode `json` and ingest it.
    ///
    /// # Errors
    ///
    /// [`TransformError::Json`] when the text is not valid JSON; any
    /// error [`add_data`](Self::add_data) can produce.
    pub fn add_json(&mut self, json: &str) -> Result<()> {
        let data: Value = serde_json::from_str(json)?;
        self.add_data(&data)
    }

    /// Flatten the accumulated matrix into a dense table snapshot.
    ///
    /// Before any ingestion this yields the declared index-column names
    /// with zero rows and zero data columns.
    pub fn to_table(&self) -> Table {
        table::flatten(&self.matrix, self.pattern.index_columns())
    }
}

/// Column label for a chunk whose records carry no column path: its
/// literal keys joined by the label separator (`".<id>.x"` → `"x"`,
/// `"."` → `""`).
fn derived_label(chunk: &Chunk) -> String {
    chunk
        .components()
        .iter()
        .filter_map(|component| match component {
            Component::Literal(Key::Name(name)) => Some(name.clone()),
            Component::Literal(Key::Int(n)) => Some(n.to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn transformer(pattern: &str) -> Transformer {
        Transformer::new(Pattern::parse(pattern).unwrap())
    }

    #[test]
    fn test_round_trip_single_chunk() {
        let mut t = transformer(".a.<id>.b");
        t.add_data(&json!({"a": {"x": {"b": 1}, "y": {"b": 2}}}))
            .unwrap();
        let table = t.to_table();
        assert_eq!(table.index_columns, vec!["id".to_string()]);
        assert_eq!(table.columns, vec!["a_b".to_string()]);
        assert_eq!(
            table.rows,
            vec![vec![json!("x"), json!(1)], vec![json!("y"), json!(2)]]
        );
    }

    #[test]
    fn test_multi_chunk_join_produces_two_columns() {
        let mut t = transformer(".<id>.x .<id>.y");
        t.add_data(&json!({"1": {"x": 10, "y": 20}})).unwrap();
        let table = t.to_table();
        assert_eq!(table.index_columns, vec!["id".to_string()]);
        assert_eq!(table.columns, vec!["x".to_string(), "y".to_string()]);
        assert_eq!(table.rows, vec![vec![json!("1"), json!(10), json!(20)]]);
    }

    #[test]
    fn test_explicit_default_label_overrides_derived() {
        let pattern = Pattern::parse(".a.<id>.b").unwrap();
        let mut t = Transformer::with_default_label(pattern, "value");
        t.add_data(&json!({"a": {"x": {"b": 1}}})).unwrap();
        assert_eq!(t.to_table().columns, vec!["value".to_string()]);
    }

    #[test]
    fn test_per_chunk_default_labels() {
        let pattern = Pattern::parse(".<id>.x .<id>.y").unwrap();
        let mut t = Transformer::with_default_labels(
            pattern,
            vec!["first".to_string(), "second".to_string()],
        )
        .unwrap();
        t.add_data(&json!({"1": {"x": 10, "y": 20}})).unwrap();
        assert_eq!(
            t.to_table().columns,
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_label_count_mismatch_rejected() {
        let pattern = Pattern::parse(".<id>.x .<id>.y").unwrap();
        let err = Transformer::with_default_labels(pattern, vec!["only".to_string()]).unwrap_err();
        assert_eq!(
            err,
            TransformError::ChunkCount {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_default_label_not_used_when_columns_present() {
        let pattern = Pattern::parse(".<id>.*").unwrap();
        let mut t = Transformer::with_default_label(pattern, "ignored");
        t.add_data(&json!({"r": {"a": 1}})).unwrap();
        assert_eq!(t.to_table().columns, vec!["a".to_string()]);
    }

    #[test]
    fn test_multiple_add_data_calls_accumulate() {
        let mut t = transformer(".<id>.v");
        t.add_data(&json!({"a": {"v": 1}})).unwrap();
        t.add_data(&json!({"b": {"v": 2}})).unwrap();
        let table = t.to_table();
        assert_eq!(
            table.rows,
            vec![vec![json!("a"), json!(1)], vec![json!("b"), json!(2)]]
        );
    }

    #[test]
    fn test_reingest_identical_data_is_idempotent() {
        let mut t = transformer(".<id>.*");
        let doc = json!({"r": {"a": 1, "b": 2}});
        t.add_data(&doc).unwrap();
        let first = t.to_table();
        t.add_data(&doc).unwrap();
        assert_eq!(t.to_table(), first);
    }

    #[test]
    fn test_later_ingestion_overwrites_same_cell() {
        let mut t = transformer(".<id>.v");
        t.add_data(&json!({"r": {"v": 1}})).unwrap();
        t.add_data(&json!({"r": {"v": 9}})).unwrap();
        let table = t.to_table();
        assert_eq!(table.rows, vec![vec![json!("r"), json!(9)]]);
    }

    #[test]
    fn test_column_union_with_null_padding() {
        let mut t = transformer(".<id>.*");
        t.add_data(&json!({"r1": {"a": 1}})).unwrap();
        t.add_data(&json!({"r2": {"b": 2}})).unwrap();
        let table = t.to_table();
        assert_eq!(table.columns, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            table.rows,
            vec![
                vec![json!("r1"), json!(1), Value::Null],
                vec![json!("r2"), Value::Null, json!(2)],
            ]
        );
    }

    #[test]
    fn test_absent_branch_does_not_abort_call() {
        let mut t = transformer(".a.<id>.v .b.<id>.w");
        // "b" is missing entirely; the call still ingests the "a" chunk
        t.add_data(&json!({"a": {"r": {"v": 1}}})).unwrap();
        let table = t.to_table();
        assert_eq!(table.columns, vec!["a_v".to_string()]);
        assert_eq!(table.rows, vec![vec![json!("r"), json!(1)]]);
    }

    #[test]
    fn test_to_table_before_ingestion_is_empty() {
        let t = transformer(".a.<id>.b");
        let table = t.to_table();
        assert_eq!(table.index_columns, vec!["id".to_string()]);
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_add_json_decodes_then_ingests() {
        let mut t = transformer(".<id>.v");
        t.add_json(r#"{"r": {"v": 42}}"#).unwrap();
        assert_eq!(t.to_table().rows, vec![vec![json!("r"), json!(42)]]);
    }

    #[test]
    fn test_add_json_rejects_malformed_input() {
        let mut t = transformer(".<id>.v");
        let err = t.add_json("{not json").unwrap_err();
        assert!(matches!(err, TransformError::Json(_)));
        // nothing was ingested
        assert!(t.to_table().is_empty());
    }

    #[test]
    fn test_empty_pattern_chunk_tabulates_root() {
        let mut t = transformer(".");
        t.add_data(&json!(42)).unwrap();
        let table = t.to_table();
        assert!(table.index_columns.is_empty());
        assert_eq!(table.columns, vec!["".to_string()]);
        assert_eq!(table.rows, vec![vec![json!(42)]]);
    }

    #[test]
    fn test_skip_on_absence_yields_single_column() {
        let mut t = transformer(".{a,b}");
        t.add_data(&json!({"a": 1})).unwrap();
        let table = t.to_table();
        assert_eq!(table.columns, vec!["a".to_string()]);
        assert_eq!(table.rows, vec![vec![json!(1)]]);
    }

    #[test]
    fn test_opaque_leaf_passes_through() {
        let mut t = transformer(".<id>");
        t.add_data(&json!({"r": {"nested": [1, 2]}})).unwrap();
        let table = t.to_table();
        assert_eq!(table.rows, vec![vec![json!("r"), json!({"nested": [1, 2]})]]);
    }

    #[test]
    fn test_derived_label_uses_literal_keys() {
        let chunk = Pattern::parse(".a.<id>.[0].b").unwrap().chunks()[0].clone();
        assert_eq!(derived_label(&chunk), "a_0_b");
    }
}

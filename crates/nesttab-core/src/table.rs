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

//! The dense output table and the flattening step that produces it.

use serde_json::Value;

use crate::matcher::Segment;
use crate::matrix::Matrix;

/// Separator used when joining a column tuple into a display label.
pub const LABEL_SEPARATOR: &str = "_";

/// The construction request handed to a tabular-data collaborator.
///
/// Rows are sorted by index tuple, columns by their originating column
/// tuples; every row has `index_columns.len() + columns.len()` cells and
/// missing cells are `Value::Null`. A `Table` is an owned snapshot: data
/// ingested after it was built is not reflected in it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    /// Labels of the leading index columns (possibly empty).
    pub index_columns: Vec<String>,
    /// Labels of the data columns.
    pub columns: Vec<String>,
    /// Row tuples: index values followed by data values.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Total number of cells per row.
    pub fn width(&self) -> usize {
        self.index_columns.len() + self.columns.len()
    }

    /// True when no rows have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flatten the sparse matrix into a dense, column-aligned table.
pub(crate) fn flatten(matrix: &Matrix, index_columns: &[String]) -> Table {
    let column_tuples: Vec<&Vec<Segment>> = matrix.column_set().into_iter().collect();
    let columns = column_tuples.iter().map(|tuple| join_label(tuple)).collect();

    let mut rows = Vec::with_capacity(matrix.row_count());
    for (index, cells) in matrix.rows() {
        let mut row = Vec::with_capacity(index.len() + column_tuples.len());
        row.extend(index.iter().map(Segment::to_value));
        for tuple in &column_tuples {
            row.push(cells.get(*tuple).cloned().unwrap_or(Value::Null));
        }
        rows.push(row);
    }

    Table {
        index_columns: index_columns.to_vec(),
        columns,
        rows,
    }
}

fn join_label(tuple: &[Segment]) -> String {
    tuple
        .iter()
        .map(Segment::to_string)
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_empty_matrix_keeps_index_columns() {
        let table = flatten(&Matrix::default(), &["id".to_string()]);
        assert_eq!(table.index_columns, vec!["id".to_string()]);
        assert!(table.columns.is_empty());
        assert!(table.is_empty());
        assert_eq!(table.width(), 1);
    }

    #[test]
    fn test_flatten_pads_missing_cells_with_null() {
        let mut matrix = Matrix::default();
        matrix.insert(
            vec![Segment::Key("r1".to_string())],
            vec![Segment::Key("a".to_string())],
            json!(1),
        );
        matrix.insert(
            vec![Segment::Key("r2".to_string())],
            vec![Segment::Key("b".to_string())],
            json!(2),
        );
        let table = flatten(&matrix, &["id".to_string()]);
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
    fn test_column_labels_join_segments_with_separator() {
        let mut matrix = Matrix::default();
        matrix.insert(
            Vec::new(),
            vec![Segment::Key("a".to_string()), Segment::Pos(0)],
            json!(true),
        );
        let table = flatten(&matrix, &[]);
        assert_eq!(table.columns, vec!["a_0".to_string()]);
    }

    #[test]
    fn test_position_index_segments_render_as_numbers() {
        let mut matrix = Matrix::default();
        matrix.insert(
            vec![Segment::Pos(2)],
            vec![Segment::Key("v".to_string())],
            json!("x"),
        );
        let table = flatten(&matrix, &["n".to_string()]);
        assert_eq!(table.rows, vec![vec![json!(2), json!("x")]]);
    }
}

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

//! The sparse accumulation matrix: index-tuple → column-tuple → value.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::matcher::Segment;

/// Sparse intermediate table built across one or more ingestion calls.
///
/// Grows monotonically. Inserting at an existing (index, column) pair
/// overwrites: last write wins, regardless of which chunk or ingestion
/// call produced the earlier value. BTree ordering makes row and column
/// iteration deterministic.
#[derive(Debug, Clone, Default)]
pub(crate) struct Matrix {
    cells: BTreeMap<Vec<Segment>, BTreeMap<Vec<Segment>, Value>>,
}

impl Matrix {
    pub fn insert(&mut self, index: Vec<Segment>, column: Vec<Segment>, value: Value) {
        self.cells.entry(index).or_default().insert(column, value);
    }

    /// Sorted union of every column tuple observed across all rows.
    pub fn column_set(&self) -> BTreeSet<&Vec<Segment>> {
        self.cells.values().flat_map(|row| row.keys()).collect()
    }

    /// Rows in sorted index-tuple order.
    pub fn rows(&self) -> impl Iterator<Item = (&Vec<Segment>, &BTreeMap<Vec<Segment>, Value>)> {
        self.cells.iter()
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }
}

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

//! Pattern-driven flattening of nested data into tables.
//!
//! A compact path pattern describes a traversal over nested JSON-shaped
//! data: index components (`<name>`) select which matched keys become
//! rows, while globs (`*`), column selections (`{a,b}`), and literal keys
//! shape the columns. A [`Transformer`] ingests any number of documents
//! and emits a dense, column-aligned [`Table`].
//!
//! # Pattern syntax
//!
//! Space-separated chunks, each starting with `.`, with `.`-separated
//! parts:
//!
//! - `*` — match every entry; the key becomes a column-path segment
//! - `<name>` — match every entry; the key becomes part of the row index
//! - `{a,b,c}` — descend into each listed key that is present
//! - `[n]` — descend into sequence position `n` (negative counts from
//!   the end)
//! - any other token — descend into that map key
//! - a bare `.` — the root value itself
//!
//! All chunks of one pattern must declare the same index columns, in the
//! same order.
//!
//! # Example
//!
//! ```
//! use nesttab_core::{Pattern, Transformer};
//!
//! let pattern: Pattern = ".a.<id>.b".parse().unwrap();
//! let mut transformer = Transformer::new(pattern);
//! transformer
//!     .add_json(r#"{"a": {"x": {"b": 1}, "y": {"b": 2}}}"#)
//!     .unwrap();
//!
//! let table = transformer.to_table();
//! assert_eq!(table.index_columns, vec!["id"]);
//! assert_eq!(table.columns, vec!["a_b"]);
//! assert_eq!(table.rows.len(), 2);
//! ```

mod error;
mod matcher;
mod matrix;
mod parser;
mod pattern;
mod table;
mod transform;

pub use error::{Result, TransformError};
pub use matcher::{match_chunk, MatchRecord, Segment};
pub use pattern::{Chunk, Component, Key, Pattern};
pub use table::{Table, LABEL_SEPARATOR};
pub use transform::Transformer;

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

//! CSV rendering for NestTab tables.
//!
//! The core hands a tabular collaborator an ordered set of index-column
//! names, data-column labels, and dense row tuples; this crate is that
//! collaborator for CSV output.
//!
//! # Example
//!
//! ```
//! use nesttab_core::{Pattern, Transformer};
//! use nesttab_csv::to_csv;
//!
//! let mut transformer = Transformer::new(".<id>.x .<id>.y".parse().unwrap());
//! transformer.add_json(r#"{"1": {"x": 10, "y": 20}}"#).unwrap();
//!
//! let csv = to_csv(&transformer.to_table()).unwrap();
//! assert_eq!(csv, "id,x,y\n1,10,20\n");
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig};

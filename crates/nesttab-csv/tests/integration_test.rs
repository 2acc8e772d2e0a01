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

//! End-to-end: ingest nested JSON, flatten, render as CSV.

use nesttab_core::{Pattern, Transformer};
use nesttab_csv::{to_csv, to_csv_with_config, ToCsvConfig};

#[test]
fn test_transform_then_render() {
    let mut transformer = Transformer::new(Pattern::parse(".users.<id>.{name,age}").unwrap());
    transformer
        .add_json(r#"{"users": {"u1": {"name": "Alice", "age": 30}, "u2": {"name": "Bob"}}}"#)
        .unwrap();

    // columns sort by their tuples: age before name
    let csv = to_csv(&transformer.to_table()).unwrap();
    assert_eq!(csv, "id,age,name\nu1,30,Alice\nu2,,Bob\n");
}

#[test]
fn test_missing_cells_render_empty_across_documents() {
    let mut transformer = Transformer::new(Pattern::parse(".<id>.*").unwrap());
    transformer.add_json(r#"{"r1": {"a": 1}}"#).unwrap();
    transformer.add_json(r#"{"r2": {"b": 2}}"#).unwrap();

    let csv = to_csv(&transformer.to_table()).unwrap();
    assert_eq!(csv, "id,a,b\nr1,1,\nr2,,2\n");
}

#[test]
fn test_headerless_semicolon_output() {
    let mut transformer = Transformer::new(Pattern::parse(".<id>.v").unwrap());
    transformer.add_json(r#"{"r": {"v": 7}}"#).unwrap();

    let config = ToCsvConfig {
        delimiter: b';',
        include_headers: false,
        ..Default::default()
    };
    let csv = to_csv_with_config(&transformer.to_table(), config).unwrap();
    assert_eq!(csv, "r;7\n");
}

#[test]
fn test_empty_table_has_header_only() {
    let transformer = Transformer::new(Pattern::parse(".a.<id>.b").unwrap());
    let csv = to_csv(&transformer.to_table()).unwrap();
    assert_eq!(csv, "id\n");
}

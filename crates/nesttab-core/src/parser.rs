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

//! Textual pattern parsing.
//!
//! Grammar per part: `*` is a glob, `<name>` an index, `{a,b,c}` a column
//! selection, `[n]` an integer literal key, anything else a string literal
//! key. An empty remainder after the leading `.` is a valid empty chunk.

use crate::error::{Result, TransformError};
use crate::pattern::{Chunk, Component, Key, Pattern};

/// Parse pattern text into a [`Pattern`], validating syntax and the
/// cross-chunk index-column invariant.
pub(crate) fn parse_pattern(text: &str) -> Result<Pattern> {
    let mut chunks = Vec::new();
    let mut index_columns: Option<Vec<String>> = None;

    for chunk_text in text.split(' ') {
        let rest = chunk_text.strip_prefix('.').ok_or_else(|| {
            TransformError::syntax(chunk_text, "chunk must start with '.'")
        })?;
        let chunk = parse_chunk(chunk_text, rest)?;

        let names: Vec<String> = chunk
            .index_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        match &index_columns {
            None => index_columns = Some(names),
            Some(expected) if *expected != names => {
                return Err(TransformError::IndexMismatch {
                    expected: expected.clone(),
                    found: names,
                });
            }
            Some(_) => {}
        }
        chunks.push(chunk);
    }

    // split always yields at least one chunk, so index_columns is set
    Ok(Pattern::from_parts(
        chunks,
        index_columns.unwrap_or_default(),
    ))
}

fn parse_chunk(chunk_text: &str, rest: &str) -> Result<Chunk> {
    if rest.is_empty() {
        // bare "." selects the root value itself
        return Ok(Chunk::default());
    }
    rest.split('.')
        .map(|part| parse_part(chunk_text, part))
        .collect::<Result<Vec<_>>>()
        .map(Chunk::new)
}

fn parse_part(chunk_text: &str, part: &str) -> Result<Component> {
    if part == "*" {
        return Ok(Component::Glob);
    }
    if let Some(name) = part.strip_prefix('<').and_then(|p| p.strip_suffix('>')) {
        return Ok(Component::Index(name.to_string()));
    }
    if let Some(names) = part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
        let names = names.split(',').map(str::to_string).collect();
        return Ok(Component::Columns(names));
    }
    if let Some(digits) = part.strip_prefix('[').and_then(|p| p.strip_suffix(']')) {
        let n: i64 = digits.parse().map_err(|_| {
            TransformError::syntax(
                chunk_text,
                format!("'[{}]' does not contain an integer index", digits),
            )
        })?;
        return Ok(Component::Literal(Key::Int(n)));
    }
    Ok(Component::Literal(Key::Name(part.to_string())))
}

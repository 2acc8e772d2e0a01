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

//! Recursive pattern matching over nested JSON values.
//!
//! [`match_chunk`] walks one chunk depth-first over a value, accumulating
//! an index path and a column path, and emits a [`MatchRecord`] for every
//! point where the chunk is exhausted. Absences are tolerated, not errors:
//! a glob or index over a scalar enumerates nothing, a missing `{...}`
//! name is skipped, and a missing literal key drops the whole branch.

use std::fmt;

use serde_json::Value;

use crate::error::Result;
use crate::pattern::{Chunk, Component, Key};

/// One element of an index or column path.
///
/// The derived order sorts sequence positions before map keys, giving a
/// total, deterministic ordering for row and column tuples even when a
/// glob ranges over both maps and sequences.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// 0-based position within a sequence.
    Pos(usize),
    /// String key within a map.
    Key(String),
}

impl Segment {
    /// Render the segment as a JSON value for use in an output row.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Pos(n) => Value::from(*n),
            Self::Key(k) => Value::String(k.clone()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pos(n) => write!(f, "{}", n),
            Self::Key(k) => write!(f, "{}", k),
        }
    }
}

/// One match emitted by [`match_chunk`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    /// Values collected at `Index` components, in order of occurrence.
    pub index_path: Vec<Segment>,
    /// Path segments collected at `Glob` and `Columns` components.
    pub column_path: Vec<Segment>,
    /// The value reached when the chunk was exhausted; structures the
    /// chunk did not fully descend into pass through unchanged.
    pub value: Value,
}

/// Match one chunk against a value, depth-first.
///
/// Pure: returns every (index path, column path, leaf value) triple the
/// chunk selects, in traversal order, without touching shared state.
/// Errors from deeper recursion are rewrapped at each level with the
/// component that was active.
///
/// Recursion depth is bounded only by the nesting depth of `data`;
/// pathologically deep input can exhaust the call stack. This is a known
/// resource limit.
pub fn match_chunk(data: &Value, chunk: &Chunk) -> Result<Vec<MatchRecord>> {
    let mut records = Vec::new();
    let mut paths = Paths::default();
    recurse(data, chunk.components(), &mut paths, &mut records)?;
    Ok(records)
}

#[derive(Default)]
struct Paths {
    index: Vec<Segment>,
    column: Vec<Segment>,
}

fn recurse(
    data: &Value,
    components: &[Component],
    paths: &mut Paths,
    out: &mut Vec<MatchRecord>,
) -> Result<()> {
    let Some((component, rest)) = components.split_first() else {
        out.push(MatchRecord {
            index_path: paths.index.clone(),
            column_path: paths.column.clone(),
            value: data.clone(),
        });
        return Ok(());
    };
    apply(component, rest, data, paths, out).map_err(|e| e.in_component(component))
}

fn apply(
    component: &Component,
    rest: &[Component],
    data: &Value,
    paths: &mut Paths,
    out: &mut Vec<MatchRecord>,
) -> Result<()> {
    match component {
        Component::Glob => {
            for (segment, child) in entries(data) {
                paths.column.push(segment);
                let result = recurse(child, rest, paths, out);
                paths.column.pop();
                result?;
            }
        }
        Component::Index(_) => {
            // name is carried for output labeling only
            for (segment, child) in entries(data) {
                paths.index.push(segment);
                let result = recurse(child, rest, paths, out);
                paths.index.pop();
                result?;
            }
        }
        Component::Columns(names) => {
            for name in names {
                let Some(child) = data.as_object().and_then(|map| map.get(name)) else {
                    continue;
                };
                paths.column.push(Segment::Key(name.clone()));
                let result = recurse(child, rest, paths, out);
                paths.column.pop();
                result?;
            }
        }
        Component::Literal(key) => {
            if let Some(child) = lookup(data, key) {
                recurse(child, rest, paths, out)?;
            }
        }
    }
    Ok(())
}

/// Enumerate the entries of a value: key/value pairs for maps, 0-based
/// position/value pairs for sequences, nothing for scalars.
fn entries(value: &Value) -> Box<dyn Iterator<Item = (Segment, &Value)> + '_> {
    match value {
        Value::Object(map) => Box::new(map.iter().map(|(k, v)| (Segment::Key(k.clone()), v))),
        Value::Array(items) => Box::new(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Segment::Pos(i), v)),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

/// Containment-checked lookup; `None` is a tolerated absence.
fn lookup<'a>(value: &'a Value, key: &Key) -> Option<&'a Value> {
    match (value, key) {
        (Value::Object(map), Key::Name(name)) => map.get(name),
        (Value::Object(map), Key::Int(n)) => map.get(&n.to_string()),
        (Value::Array(items), Key::Int(n)) => {
            let index = if *n < 0 {
                items.len().checked_sub(n.unsigned_abs() as usize)?
            } else {
                *n as usize
            };
            items.get(index)
        }
        _ => None,
    }
}

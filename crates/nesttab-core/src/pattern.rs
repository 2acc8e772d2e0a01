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

//! The pattern AST: the compiled form of the path-pattern mini-language.
//!
//! A [`Pattern`] is an ordered join of [`Chunk`]s; each chunk is an ordered
//! list of [`Component`]s matched against the root value independently.
//! Patterns are immutable once parsed and freely shareable across
//! transformer instances and threads.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransformError};

/// A literal lookup key.
///
/// `Int` keys come from `[n]` pattern syntax. A negative `n` indexes a
/// sequence from its end; against a map, the decimal string form of `n`
/// is looked up (JSON object keys are strings).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// String key into a map.
    Name(String),
    /// Integer index into a sequence.
    Int(i64),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Int(n) => write!(f, "[{}]", n),
        }
    }
}

/// One element of a pattern chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    /// `*` — match every entry of the current value, routing the entry's
    /// key into the column path.
    Glob,
    /// `<name>` — match every entry, routing the entry's key into the row
    /// index; `name` labels the index column in the output.
    Index(String),
    /// `{a,b,...}` — descend into each listed key that is present,
    /// routing the key into the column path; absent names are skipped.
    Columns(Vec<String>),
    /// A bare key or `[n]` — descend into exactly that entry; if absent,
    /// the branch contributes nothing.
    Literal(Key),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glob => write!(f, "*"),
            Self::Index(name) => write!(f, "<{}>", name),
            Self::Columns(names) => write!(f, "{{{}}}", names.join(",")),
            Self::Literal(key) => write!(f, "{}", key),
        }
    }
}

/// One `.`-prefixed segment of a pattern.
///
/// A chunk may be empty (pattern text `"."`), in which case it matches
/// the root value itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chunk {
    components: Vec<Component>,
}

impl Chunk {
    pub(crate) fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    /// The chunk's components, in match order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// True for the bare `"."` chunk that selects the root value.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Names of the `Index` components, in order of occurrence.
    pub fn index_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Index(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return write!(f, ".");
        }
        for component in &self.components {
            write!(f, ".{}", component)?;
        }
        Ok(())
    }
}

/// A parsed pattern: an ordered join of chunks sharing one index-column
/// tuple.
///
/// Obtained from [`Pattern::parse`] or [`str::parse`]. Two parses of the
/// same text yield structurally equal patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    chunks: Vec<Chunk>,
    index_columns: Vec<String>,
}

impl Pattern {
    pub(crate) fn from_parts(chunks: Vec<Chunk>, index_columns: Vec<String>) -> Self {
        Self {
            chunks,
            index_columns,
        }
    }

    /// Parse pattern text.
    ///
    /// Chunks are separated by a single space; each chunk starts with `.`
    /// and its parts are separated by `.`. See the crate docs for the part
    /// grammar.
    ///
    /// # Errors
    ///
    /// [`TransformError::Syntax`] for malformed text,
    /// [`TransformError::IndexMismatch`] when chunks declare different
    /// index columns.
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse_pattern(text)
    }

    /// The pattern's chunks, in declared order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Index-column names shared by every chunk, in order of occurrence.
    pub fn index_columns(&self) -> &[String] {
        &self.index_columns
    }
}

impl FromStr for Pattern {
    type Err = TransformError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.chunks.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", chunk)?;
        }
        Ok(())
    }
}

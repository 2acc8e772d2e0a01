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

//! Error types for pattern parsing and data transformation.

use thiserror::Error;

/// An error produced while parsing a pattern or transforming data.
///
/// Parse-time errors ([`Syntax`], [`IndexMismatch`]) are always fatal and
/// surface before any data is ingested. [`Traversal`] wraps an error that
/// bubbled out of recursive matching, annotated at each recursion level
/// with the pattern component that was active; absent keys and
/// non-enumerable values are tolerated during matching and never produce
/// an error.
///
/// [`Syntax`]: TransformError::Syntax
/// [`IndexMismatch`]: TransformError::IndexMismatch
/// [`Traversal`]: TransformError::Traversal
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// Malformed pattern text.
    #[error("syntax error in pattern chunk '{chunk}': {message}")]
    Syntax {
        /// The offending chunk, as written.
        chunk: String,
        /// What was wrong with it.
        message: String,
    },

    /// Structurally valid chunks that declare different index columns.
    #[error("pattern chunks disagree on index columns: expected {expected:?}, found {found:?}")]
    IndexMismatch {
        /// Index-column names declared by the first chunk.
        expected: Vec<String>,
        /// Conflicting names declared by a later chunk.
        found: Vec<String>,
    },

    /// An error raised by deeper recursion while matching, annotated with
    /// the component that was being applied.
    #[error("while applying pattern component '{component}': {source}")]
    Traversal {
        /// Display form of the active component.
        component: String,
        /// The underlying error.
        #[source]
        source: Box<TransformError>,
    },

    /// Default column labels that do not line up with the pattern's chunks.
    #[error("expected {expected} default column labels (one per chunk), got {found}")]
    ChunkCount {
        /// Number of chunks in the pattern.
        expected: usize,
        /// Number of labels supplied.
        found: usize,
    },

    /// Input text that could not be decoded as JSON.
    #[error("invalid JSON input: {0}")]
    Json(String),
}

impl TransformError {
    pub(crate) fn syntax(chunk: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Syntax {
            chunk: chunk.into(),
            message: message.into(),
        }
    }

    /// Wrap an error from deeper recursion with the component that was
    /// active when it surfaced, preserving the root cause.
    pub(crate) fn in_component(self, component: &crate::pattern::Component) -> Self {
        Self::Traversal {
            component: component.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type for NestTab operations.
pub type Result<T> = std::result::Result<T, TransformError>;

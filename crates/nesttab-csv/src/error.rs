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

//! Error types for CSV rendering.

use thiserror::Error;

/// CSV rendering error.
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O error while writing CSV output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output that was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being produced when the invalid bytes appeared.
        context: String,
    },

    /// Any other CSV serialization failure.
    #[error("{0}")]
    Other(String),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

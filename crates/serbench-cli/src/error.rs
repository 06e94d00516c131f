// serbench - Serialization Format Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! Structured error types for the serbench CLI.
//!
//! All commands return `Result<T, CliError>` so `main` can map every failure
//! to a message and a non-zero exit code.

use serbench::BenchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for serbench CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (creating the output directory, writing a report).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// An argument could not be parsed or combined with the others.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The benchmark library rejected the configuration or failed a run.
    #[error(transparent)]
    Bench(#[from] BenchError),
}

impl CliError {
    /// Create an I/O error with path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use serbench_cli::error::CliError;
    /// use std::fs;
    ///
    /// let result = fs::create_dir_all("results")
    ///     .map_err(|e| CliError::io_error("results", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Convenience alias for CLI results.
pub type Result<T> = std::result::Result<T, CliError>;

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

//! Error types for serbench operations.
//!
//! A single error enum covers dataset generation, adapter failures, the
//! round-trip gate, baseline scoring and result export. Adapter and
//! round-trip errors are normally captured by the runner and turned into
//! failure rows instead of being propagated.

use thiserror::Error;

/// Maximum dataset size (10 million records).
///
/// The whole dataset is held in memory in both shapes for the duration of a
/// run, so requests above this limit are rejected up front.
pub const MAX_DATASET_SIZE: usize = 10_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    /// Dataset size exceeds maximum allowed limit
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// An adapter failed to encode a dataset
    #[error("{format} encode failed: {message}")]
    Encode {
        /// Format name
        format: String,
        /// Error message from the codec
        message: String,
    },

    /// An adapter failed to decode its own output
    #[error("{format} decode failed: {message}")]
    Decode {
        /// Format name
        format: String,
        /// Error message from the codec
        message: String,
    },

    /// Malformed length-prefixed stream
    #[error("Framing error: {0}")]
    Framing(String),

    /// Decoded item count differs from the encoded item count
    #[error("Round-trip cardinality mismatch: encoded {expected} items, decoded {actual}")]
    CardinalityMismatch {
        /// Items handed to the serializer
        expected: usize,
        /// Items returned by the deserializer
        actual: usize,
    },

    /// The baseline row needed for scoring is absent or failed
    #[error("Baseline result '{key}' is missing")]
    MissingBaseline {
        /// Composed key of the missing baseline row
        key: String,
    },

    /// The row being scored is absent or failed
    #[error("Result '{key}' is missing or failed")]
    MissingResult {
        /// Composed key of the row
        key: String,
    },

    /// A zero average would make the baseline ratio infinite or NaN
    #[error("Cannot score against a zero {side} average")]
    ZeroDuration {
        /// Which operand was zero ("baseline" or "result")
        side: &'static str,
    },

    /// A result row was written twice
    #[error("Result '{key}' was already recorded")]
    DuplicateResult {
        /// Composed key of the row
        key: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Export serialization error (JSON or CSV)
    #[error("Export error: {0}")]
    ExportError(String),
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::ExportError(err.to_string())
    }
}

impl From<csv::Error> for BenchError {
    fn from(err: csv::Error) -> Self {
        BenchError::ExportError(err.to_string())
    }
}

impl BenchError {
    /// Creates an [`BenchError::InvalidConfig`] error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`BenchError::Encode`] error.
    pub fn encode(format: &str, message: impl ToString) -> Self {
        BenchError::Encode {
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a [`BenchError::Decode`] error.
    pub fn decode(format: &str, message: impl ToString) -> Self {
        BenchError::Decode {
            format: format.to_string(),
            message: message.to_string(),
        }
    }
}

/// Validate that a dataset size is within acceptable limits
///
/// # Examples
///
/// ```
/// use serbench::error::{validate_dataset_size, MAX_DATASET_SIZE};
///
/// assert!(validate_dataset_size(1000).is_ok());
/// assert!(validate_dataset_size(MAX_DATASET_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(size: usize) -> Result<()> {
    if size > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}

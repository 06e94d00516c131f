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

//! Result collection.
//!
//! Every benchmarked combination produces two rows, one per operation.
//! Rows are keyed by (format, shape, operation, items), written once and
//! kept sorted by that key.

use crate::core::baselines::{score, Score};
use crate::core::Measurement;
use crate::error::{BenchError, Result};
use crate::formats::Shape;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which half of the round trip a row measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Serialization.
    Dump,
    /// Deserialization.
    Load,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Dump, Operation::Load];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Dump => "dump",
            Operation::Load => "load",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identity of a result row.
///
/// Orders by name, then shape, then operation, then item count (numerically).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResultKey {
    pub name: String,
    pub shape: Shape,
    pub operation: Operation,
    pub items: usize,
}

impl ResultKey {
    pub fn new(name: impl Into<String>, shape: Shape, operation: Operation, items: usize) -> Self {
        Self {
            name: name.into(),
            shape,
            operation,
            items,
        }
    }

    /// The same tier, shape and operation for another format.
    pub fn for_format(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for ResultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}_{}", self.name, self.shape, self.operation, self.items)
    }
}

/// Outcome of one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success {
        #[serde(flatten)]
        measurement: Measurement,
        /// Mean of the dump and load averages.
        avg_serde: f64,
        /// Encoded size in bytes.
        serialized_size: usize,
        #[serde(rename = "baseline-speedup")]
        baseline_speedup: Option<f64>,
        #[serde(rename = "baseline-ratio")]
        baseline_ratio: Option<f64>,
        /// Scoring problem, empty if none.
        error: String,
    },
    /// The adapter failed or the round trip lost records.
    Failure { reason: String },
}

/// One row of results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub name: String,
    pub shape: Shape,
    pub operation: Operation,
    pub items: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl BenchmarkResult {
    /// A measured row, not yet scored.
    pub fn success(
        key: ResultKey,
        measurement: Measurement,
        avg_serde: f64,
        serialized_size: usize,
    ) -> Self {
        Self::from_key(
            key,
            Outcome::Success {
                measurement,
                avg_serde,
                serialized_size,
                baseline_speedup: None,
                baseline_ratio: None,
                error: String::new(),
            },
        )
    }

    pub fn failure(key: ResultKey, reason: impl Into<String>) -> Self {
        Self::from_key(
            key,
            Outcome::Failure {
                reason: reason.into(),
            },
        )
    }

    fn from_key(key: ResultKey, outcome: Outcome) -> Self {
        Self {
            name: key.name,
            shape: key.shape,
            operation: key.operation,
            items: key.items,
            outcome,
        }
    }

    pub fn key(&self) -> ResultKey {
        ResultKey::new(self.name.clone(), self.shape, self.operation, self.items)
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    /// Measurement of a successful row.
    pub fn measurement(&self) -> Option<&Measurement> {
        match &self.outcome {
            Outcome::Success { measurement, .. } => Some(measurement),
            Outcome::Failure { .. } => None,
        }
    }

    /// Baseline score, if one was recorded.
    pub fn score(&self) -> Option<Score> {
        match self.outcome {
            Outcome::Success {
                baseline_speedup: Some(speedup),
                baseline_ratio: Some(ratio),
                ..
            } => Some(Score { speedup, ratio }),
            _ => None,
        }
    }

    /// Failure reason or scoring annotation; `None` for a clean row.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { error, .. } if error.is_empty() => None,
            Outcome::Success { error, .. } => Some(error),
            Outcome::Failure { reason } => Some(reason),
        }
    }
}

/// A combination that was not run because the format cannot represent the
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRun {
    pub name: String,
    pub shape: Shape,
    pub items: usize,
}

/// All rows of a run, sorted by [`ResultKey`].
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: BTreeMap<ResultKey, BenchmarkResult>,
    skipped: Vec<SkippedRun>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::DuplicateResult`] if the key is already present.
    pub fn insert(&mut self, result: BenchmarkResult) -> Result<()> {
        let key = result.key();
        if self.results.contains_key(&key) {
            return Err(BenchError::DuplicateResult {
                key: key.to_string(),
            });
        }
        self.results.insert(key, result);
        Ok(())
    }

    pub fn get(&self, key: &ResultKey) -> Option<&BenchmarkResult> {
        self.results.get(key)
    }

    /// Rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.results.values()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of failed rows.
    pub fn failure_count(&self) -> usize {
        self.iter().filter(|r| !r.is_success()).count()
    }

    pub fn record_skip(&mut self, name: &str, shape: Shape, items: usize) {
        self.skipped.push(SkippedRun {
            name: name.to_string(),
            shape,
            items,
        });
    }

    pub fn skipped(&self) -> &[SkippedRun] {
        &self.skipped
    }

    /// Scores the row at `key` against `baseline`'s row for the same tier,
    /// shape and operation.
    ///
    /// # Errors
    ///
    /// - [`BenchError::MissingResult`] if `key` is absent or failed
    /// - [`BenchError::MissingBaseline`] if the baseline row is absent or failed
    /// - [`BenchError::ZeroDuration`] if either average is zero
    pub fn score_against_baseline(&self, key: &ResultKey, baseline: &str) -> Result<Score> {
        let result = self
            .get(key)
            .and_then(BenchmarkResult::measurement)
            .ok_or_else(|| BenchError::MissingResult {
                key: key.to_string(),
            })?;

        let baseline_key = key.for_format(baseline);
        let reference = self
            .get(&baseline_key)
            .and_then(BenchmarkResult::measurement)
            .ok_or_else(|| BenchError::MissingBaseline {
                key: baseline_key.to_string(),
            })?;

        score(result, reference)
    }

    /// Records a scoring outcome on a successful row: the score itself, or
    /// the error as an annotation. Failed rows are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::MissingResult`] if `key` is absent.
    pub fn annotate(&mut self, key: &ResultKey, scored: Result<Score>) -> Result<()> {
        let row = self
            .results
            .get_mut(key)
            .ok_or_else(|| BenchError::MissingResult {
                key: key.to_string(),
            })?;

        if let Outcome::Success {
            baseline_speedup,
            baseline_ratio,
            error,
            ..
        } = &mut row.outcome
        {
            match scored {
                Ok(score) => {
                    *baseline_speedup = Some(score.speedup);
                    *baseline_ratio = Some(score.ratio);
                }
                Err(err) => *error = err.to_string(),
            }
        }
        Ok(())
    }
}

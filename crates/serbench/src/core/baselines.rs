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

//! Baseline-relative scoring.
//!
//! A result is compared with the baseline format's row for the same tier,
//! shape and operation:
//!
//! - `speedup = baseline.avg / result.avg` (above 1.0 means faster)
//! - `ratio = result.avg * 100 / baseline.avg` (percent of baseline time)

use crate::core::measurement::{round_to, Measurement};
use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};

/// Decimal digits kept for speedup and ratio.
pub const SCORE_PRECISION: u32 = 4;

/// Speedup and ratio of one result against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub speedup: f64,
    /// Percent of the baseline's average time.
    pub ratio: f64,
}

/// Scores `result` against `baseline`.
///
/// # Errors
///
/// Returns [`BenchError::ZeroDuration`] if either average is zero (or not a
/// positive finite number), rather than producing infinity or NaN.
///
/// # Example
///
/// ```
/// use serbench::core::baselines::score;
/// use serbench::core::measurement::{Measurement, Precision};
/// use std::time::Duration;
///
/// let fast = Measurement::from_durations(&[Duration::from_millis(5)], Precision::default());
/// let slow = Measurement::from_durations(&[Duration::from_millis(10)], Precision::default());
///
/// let s = score(&fast, &slow).unwrap();
/// assert_eq!(s.speedup, 2.0);
/// assert_eq!(s.ratio, 50.0);
/// ```
pub fn score(result: &Measurement, baseline: &Measurement) -> Result<Score> {
    if !is_positive(baseline.avg) {
        return Err(BenchError::ZeroDuration { side: "baseline" });
    }
    if !is_positive(result.avg) {
        return Err(BenchError::ZeroDuration { side: "result" });
    }

    Ok(Score {
        speedup: round_to(baseline.avg / result.avg, SCORE_PRECISION),
        ratio: round_to(result.avg * 100.0 / baseline.avg, SCORE_PRECISION),
    })
}

fn is_positive(avg: f64) -> bool {
    avg.is_finite() && avg > 0.0
}

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

//! Repeated CPU-time measurement.
//!
//! Every repetition calls the measured closure in full and records
//! `clock.now()` after minus before. Durations are process CPU time, so
//! unrelated system activity does not inflate the numbers.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default repetitions per operation.
pub const DEFAULT_REPEATS: u32 = 10;

/// Default decimal digits for avg/min/max/stdev (seconds).
pub const DEFAULT_STATS_PRECISION: u32 = 6;

/// Default decimal digits for raw per-run timings (seconds).
pub const DEFAULT_TIMING_PRECISION: u32 = 5;

/// Source of monotonically increasing CPU time.
pub trait CpuClock {
    /// CPU time consumed so far.
    fn now(&self) -> Duration;
}

/// Process-wide CPU time (all threads of this process).
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCpuClock;

#[cfg(unix)]
impl CpuClock for ProcessCpuClock {
    fn now(&self) -> Duration {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        // SAFETY: `ts` is a valid, writable timespec and the clock id is a
        // constant supported on every unix target libc exposes it for.
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts) };
        if rc != 0 {
            return Duration::ZERO;
        }
        Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
    }
}

#[cfg(not(unix))]
impl CpuClock for ProcessCpuClock {
    fn now(&self) -> Duration {
        use std::sync::OnceLock;
        use std::time::Instant;

        // Wall clock fallback where no process CPU clock is available.
        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed()
    }
}

/// Rounding applied to a [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    /// Digits for avg/min/max/stdev.
    pub stats: u32,
    /// Digits for raw timings.
    pub timings: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            stats: DEFAULT_STATS_PRECISION,
            timings: DEFAULT_TIMING_PRECISION,
        }
    }
}

/// Dispersion statistics of repeated timings, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Mean duration.
    pub avg: f64,
    /// Shortest run.
    pub min: f64,
    /// Longest run.
    pub max: f64,
    /// Population standard deviation.
    pub stdev: f64,
    /// Per-run durations in execution order.
    pub timings: Vec<f64>,
}

impl Measurement {
    /// Computes statistics over `durations`.
    ///
    /// Statistics are computed on the unrounded values and rounded last.
    /// An empty slice yields all zeros.
    pub fn from_durations(durations: &[Duration], precision: Precision) -> Self {
        if durations.is_empty() {
            return Self {
                avg: 0.0,
                min: 0.0,
                max: 0.0,
                stdev: 0.0,
                timings: Vec::new(),
            };
        }

        let secs: Vec<f64> = durations.iter().map(Duration::as_secs_f64).collect();
        let n = secs.len() as f64;

        let avg = secs.iter().sum::<f64>() / n;
        let min = secs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = secs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = secs.iter().map(|s| (s - avg) * (s - avg)).sum::<f64>() / n;

        Self {
            avg: round_to(avg, precision.stats),
            min: round_to(min, precision.stats),
            max: round_to(max, precision.stats),
            stdev: round_to(variance.sqrt(), precision.stats),
            timings: secs.iter().map(|&s| round_to(s, precision.timings)).collect(),
        }
    }

    /// Number of repetitions measured.
    pub fn runs(&self) -> usize {
        self.timings.len()
    }
}

/// Rounds `value` to `digits` decimal places, half away from zero.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

fn check_repeats(repeats: u32) -> Result<()> {
    if repeats == 0 {
        return Err(BenchError::invalid_config("repeats", "must be at least 1"));
    }
    Ok(())
}

/// Runs `f` `repeats` times and measures each call.
///
/// Returns the value of the final call alongside the statistics. Values of
/// earlier calls are dropped after the clock is read, outside the timed
/// region.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] if `repeats` is zero.
///
/// # Example
///
/// ```
/// use serbench::core::measurement::{measure, Precision, ProcessCpuClock};
///
/// let (sum, stats) = measure(&ProcessCpuClock, 5, Precision::default(), || {
///     (0..10_000u64).sum::<u64>()
/// })
/// .unwrap();
/// assert_eq!(sum, 49_995_000);
/// assert_eq!(stats.runs(), 5);
/// ```
pub fn measure<C, T, F>(
    clock: &C,
    repeats: u32,
    precision: Precision,
    mut f: F,
) -> Result<(T, Measurement)>
where
    C: CpuClock + ?Sized,
    F: FnMut() -> T,
{
    try_measure(clock, repeats, precision, || Ok(f()))
}

/// Like [`measure`], for fallible operations.
///
/// Stops at the first error and returns it; no statistics are produced for a
/// partially failed run.
pub fn try_measure<C, T, F>(
    clock: &C,
    repeats: u32,
    precision: Precision,
    mut f: F,
) -> Result<(T, Measurement)>
where
    C: CpuClock + ?Sized,
    F: FnMut() -> Result<T>,
{
    check_repeats(repeats)?;

    let mut durations = Vec::with_capacity(repeats as usize);
    let mut last = None;

    for _ in 0..repeats {
        let before = clock.now();
        let value = f();
        let after = clock.now();

        durations.push(after.saturating_sub(before));
        last = Some(value?);
    }

    let value = last.ok_or_else(|| BenchError::invalid_config("repeats", "must be at least 1"))?;
    Ok((value, Measurement::from_durations(&durations, precision)))
}

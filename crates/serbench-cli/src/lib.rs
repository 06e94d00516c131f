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

//! serbench CLI library for argument parsing and execution.
//!
//! The binary is a thin wrapper: it parses [`cli::BenchArgs`], installs the
//! tracing subscriber and calls [`cli::BenchArgs::execute`].
//!
//! # Examples
//!
//! ```no_run
//! use serbench::core::{BenchConfig, QUICK_TIERS};
//! use serbench_cli::commands::run;
//!
//! # fn main() -> Result<(), serbench_cli::error::CliError> {
//! let config = BenchConfig::new(QUICK_TIERS)
//!     .with_repeats(3)
//!     .with_output_dir("results");
//! run(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All commands return `Result<(), CliError>`. Library errors are carried
//! through unchanged; file system errors carry the offending path.

pub mod cli;
pub mod commands;
pub mod error;

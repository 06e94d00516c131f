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

//! serbench Command Line Interface
//!
//! # Usage
//!
//! ```bash
//! # Full run over the standard tiers
//! serbench --output-dir results
//!
//! # Quick comparison of two formats
//! serbench --tiers 1,100,1000 --formats cbor,msgpack --repeats 3
//!
//! # With debug logging
//! RUST_LOG=serbench=debug serbench --tiers 1
//! ```

use clap::Parser;
use serbench_cli::cli::BenchArgs;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// serbench - serialization format benchmarks
///
/// Measures encode and decode CPU time and encoded size for every registered
/// format over a deterministic synthetic dataset, scores each result against
/// a baseline format, and writes a detailed JSON report and a CSV summary.
#[derive(Parser)]
#[command(name = "serbench")]
#[command(author, version, about = "serbench - serialization format benchmarks", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: BenchArgs,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("serbench=info,serbench_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli.args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

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

//! Benchmark reporters.
//!
//! # Modules
//!
//! - `console`: Header, progress and listing output
//! - `json`: Detailed JSON export
//! - `summary`: Flattened CSV summary

pub mod console;
pub mod json;
pub mod summary;

// Re-export commonly used functions
pub use console::{format_listing, machine_info, print_header, print_listing, print_progress};
pub use json::{detailed_json, export_detailed};
pub use summary::{export_summary, write_summary, SUMMARY_HEADER};

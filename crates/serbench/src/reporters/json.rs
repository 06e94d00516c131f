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

//! JSON export of detailed results.

use crate::error::Result;
use crate::harness::ResultStore;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::path::Path;

/// Serializes a store as one object keyed by `name_shape_operation_items`,
/// in result-key order.
struct DetailedResults<'a>(&'a ResultStore);

impl Serialize for DetailedResults<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for result in self.0.iter() {
            map.serialize_entry(&result.key().to_string(), result)?;
        }
        map.end()
    }
}

/// Renders the detailed results as pretty-printed JSON.
pub fn detailed_json(store: &ResultStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&DetailedResults(store))?)
}

/// Exports the detailed results as JSON.
///
/// # Arguments
///
/// * `store` - Results of the run
/// * `path` - Output file path
pub fn export_detailed(store: &ResultStore, path: &Path) -> Result<()> {
    let json = detailed_json(store)?;
    fs::write(path, json)?;
    Ok(())
}

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

//! Human-readable formats.

use super::{Decoded, FormatAdapter, FormatFamily, Shape, ShapedData};
use crate::error::{BenchError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Json,
    Yaml,
}

/// JSON or YAML through serde.
///
/// Associative records become objects/mappings, positional records become
/// arrays/sequences.
#[derive(Debug, Clone, Copy)]
pub struct TextualAdapter {
    syntax: Syntax,
}

impl TextualAdapter {
    /// Compact JSON via `serde_json`. This is the default baseline.
    pub fn json() -> Self {
        Self {
            syntax: Syntax::Json,
        }
    }

    /// Block-style YAML via `serde_yaml`.
    pub fn yaml() -> Self {
        Self {
            syntax: Syntax::Yaml,
        }
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>> {
        match self.syntax {
            Syntax::Json => {
                serde_json::to_vec(value).map_err(|e| BenchError::encode(self.name(), e))
            }
            Syntax::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| BenchError::encode(self.name(), e)),
        }
    }

    fn decode<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<Vec<T>> {
        match self.syntax {
            Syntax::Json => {
                serde_json::from_slice(raw).map_err(|e| BenchError::decode(self.name(), e))
            }
            Syntax::Yaml => {
                serde_yaml::from_slice(raw).map_err(|e| BenchError::decode(self.name(), e))
            }
        }
    }
}

impl FormatAdapter for TextualAdapter {
    fn name(&self) -> &'static str {
        match self.syntax {
            Syntax::Json => "json",
            Syntax::Yaml => "yaml",
        }
    }

    fn family(&self) -> FormatFamily {
        FormatFamily::Textual
    }

    fn serialize(&self, data: ShapedData<'_>) -> Result<Vec<u8>> {
        match data {
            ShapedData::Associative(records) => self.encode(&records),
            ShapedData::Positional(records) => self.encode(&records),
        }
    }

    fn deserialize(&self, raw: &[u8], shape: Shape) -> Result<Decoded> {
        match shape {
            Shape::Associative => self.decode(raw).map(Decoded::Records),
            Shape::Positional => self.decode(raw).map(Decoded::Positional),
        }
    }
}

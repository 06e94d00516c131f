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

//! Binary object notations driven by serde.
//!
//! CBOR and MessagePack keep field names for the associative shape, so both
//! shapes decode back into the matching Rust type. bincode has no field
//! names at all; its two shapes differ only in the Rust type driving it.

use super::{Decoded, FormatAdapter, FormatFamily, Shape, ShapedData};
use crate::error::{BenchError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Codec {
    Bincode,
    Cbor,
    MessagePack,
}

/// bincode, CBOR or MessagePack.
#[derive(Debug, Clone, Copy)]
pub struct BinaryObjectAdapter {
    codec: Codec,
}

impl BinaryObjectAdapter {
    pub fn bincode() -> Self {
        Self {
            codec: Codec::Bincode,
        }
    }

    pub fn cbor() -> Self {
        Self { codec: Codec::Cbor }
    }

    /// MessagePack; associative records are written as maps.
    pub fn msgpack() -> Self {
        Self {
            codec: Codec::MessagePack,
        }
    }

    fn encode<T: Serialize>(&self, value: &T, shape: Shape) -> Result<Vec<u8>> {
        let encoded = match self.codec {
            Codec::Bincode => bincode::serialize(value).map_err(|e| e.to_string()),
            Codec::Cbor => serde_cbor::to_vec(value).map_err(|e| e.to_string()),
            Codec::MessagePack if shape == Shape::Associative => {
                rmp_serde::to_vec_named(value).map_err(|e| e.to_string())
            }
            Codec::MessagePack => rmp_serde::to_vec(value).map_err(|e| e.to_string()),
        };
        encoded.map_err(|message| BenchError::encode(self.name(), message))
    }

    fn decode<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<Vec<T>> {
        let decoded = match self.codec {
            Codec::Bincode => bincode::deserialize(raw).map_err(|e| e.to_string()),
            Codec::Cbor => serde_cbor::from_slice(raw).map_err(|e| e.to_string()),
            Codec::MessagePack => rmp_serde::from_slice(raw).map_err(|e| e.to_string()),
        };
        decoded.map_err(|message| BenchError::decode(self.name(), message))
    }
}

impl FormatAdapter for BinaryObjectAdapter {
    fn name(&self) -> &'static str {
        match self.codec {
            Codec::Bincode => "bincode",
            Codec::Cbor => "cbor",
            Codec::MessagePack => "msgpack",
        }
    }

    fn family(&self) -> FormatFamily {
        FormatFamily::BinaryObject
    }

    fn serialize(&self, data: ShapedData<'_>) -> Result<Vec<u8>> {
        let shape = data.shape();
        match data {
            ShapedData::Associative(records) => self.encode(&records, shape),
            ShapedData::Positional(records) => self.encode(&records, shape),
        }
    }

    fn deserialize(&self, raw: &[u8], shape: Shape) -> Result<Decoded> {
        match shape {
            Shape::Associative => self.decode(raw).map(Decoded::Records),
            Shape::Positional => self.decode(raw).map(Decoded::Positional),
        }
    }
}

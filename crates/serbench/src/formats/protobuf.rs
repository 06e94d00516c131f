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

//! Protocol Buffers messages in a length-prefixed stream.
//!
//! Each positional record is converted into a [`BookMessage`], encoded on
//! its own and written as one frame (see [`super::framing`]).

use super::framing::{FrameReader, FrameWriter, HEADER_SIZE};
use super::{Decoded, FormatAdapter, FormatFamily, Shape, ShapedData};
use crate::datasets::{PositionalRecord, PositionalReview};
use crate::error::{BenchError, Result};
use prost::Message;

const NAME: &str = "protobuf";

/// Rough encoded size of one book message, used to pre-size the stream.
const TYPICAL_MESSAGE_SIZE: usize = 128;

#[derive(Clone, PartialEq, Message)]
pub struct ReviewMessage {
    #[prost(string, tag = "1")]
    pub author: String,
    #[prost(string, tag = "2")]
    pub comment: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct BookMessage {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub author: String,
    #[prost(int32, tag = "3")]
    pub sales: i32,
    #[prost(bool, tag = "4")]
    pub is_published: bool,
    #[prost(string, repeated, tag = "5")]
    pub languages: Vec<String>,
    #[prost(message, repeated, tag = "6")]
    pub reviews: Vec<ReviewMessage>,
    #[prost(double, tag = "7")]
    pub price: f64,
}

impl From<&PositionalReview> for ReviewMessage {
    fn from(review: &PositionalReview) -> Self {
        Self {
            author: review.0.clone(),
            comment: review.1.clone(),
        }
    }
}

impl From<&PositionalRecord> for BookMessage {
    fn from(record: &PositionalRecord) -> Self {
        Self {
            title: record.0.clone(),
            author: record.1.clone(),
            sales: record.2,
            is_published: record.3,
            languages: record.4.clone(),
            reviews: record.5.iter().map(ReviewMessage::from).collect(),
            price: record.6,
        }
    }
}

/// Protobuf via `prost`, one frame per record.
///
/// Only the positional shape is supported; there is no schema for arbitrary
/// named records.
#[derive(Debug, Clone, Copy, Default)]
pub struct FramedMessageAdapter;

impl FramedMessageAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FormatAdapter for FramedMessageAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> FormatFamily {
        FormatFamily::FramedMessage
    }

    fn serialize(&self, data: ShapedData<'_>) -> Result<Vec<u8>> {
        let records = match data {
            ShapedData::Positional(records) => records,
            ShapedData::Associative(_) => {
                return Err(BenchError::encode(
                    NAME,
                    "associative shape requires a predefined schema",
                ))
            }
        };

        let mut writer =
            FrameWriter::with_capacity(records.len() * (HEADER_SIZE + TYPICAL_MESSAGE_SIZE));
        let mut scratch = Vec::with_capacity(TYPICAL_MESSAGE_SIZE);
        for record in records {
            scratch.clear();
            BookMessage::from(record)
                .encode(&mut scratch)
                .map_err(|e| BenchError::encode(NAME, e))?;
            writer.push(&scratch)?;
        }

        Ok(writer.into_inner())
    }

    fn deserialize(&self, raw: &[u8], shape: Shape) -> Result<Decoded> {
        if shape == Shape::Associative {
            return Err(BenchError::decode(
                NAME,
                "associative shape requires a predefined schema",
            ));
        }

        let mut messages = Vec::new();
        for frame in FrameReader::new(raw) {
            let message = BookMessage::decode(frame?).map_err(|e| BenchError::decode(NAME, e))?;
            messages.push(message);
        }

        Ok(Decoded::Messages(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;

    #[test]
    fn test_messages_match_records() {
        let dataset = Dataset::generate(40, 5).unwrap();
        let records = dataset.positional(40);
        let adapter = FramedMessageAdapter::new();

        let bytes = adapter.serialize(ShapedData::Positional(records)).unwrap();
        let messages = match adapter.deserialize(&bytes, Shape::Positional).unwrap() {
            Decoded::Messages(messages) => messages,
            other => panic!("unexpected {:?}", other),
        };

        assert_eq!(messages.len(), records.len());
        for (message, record) in messages.iter().zip(records) {
            assert_eq!(message, &BookMessage::from(record));
        }
    }

    #[test]
    fn test_stream_is_one_frame_per_message() {
        let dataset = Dataset::generate(25, 9).unwrap();
        let records = dataset.positional(25);
        let bytes = FramedMessageAdapter::new()
            .serialize(ShapedData::Positional(records))
            .unwrap();

        let expected: usize = records
            .iter()
            .map(|r| HEADER_SIZE + BookMessage::from(r).encoded_len())
            .sum();
        assert_eq!(bytes.len(), expected);
        assert_eq!(FrameReader::new(&bytes).count(), records.len());
    }

    #[test]
    fn test_empty_tier() {
        let adapter = FramedMessageAdapter::new();
        let bytes = adapter.serialize(ShapedData::Positional(&[])).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(adapter.deserialize(&bytes, Shape::Positional).unwrap().len(), 0);
    }

    #[test]
    fn test_frame_errors_surface() {
        let dataset = Dataset::generate(3, 5).unwrap();
        let adapter = FramedMessageAdapter::new();
        let bytes = adapter
            .serialize(ShapedData::Positional(dataset.positional(3)))
            .unwrap();

        let err = adapter
            .deserialize(&bytes[..bytes.len() - 1], Shape::Positional)
            .unwrap_err();
        assert!(matches!(err, BenchError::Framing(_)));
    }
}

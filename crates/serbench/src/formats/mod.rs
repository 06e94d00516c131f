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

//! Format adapters.
//!
//! Every codec sits behind [`FormatAdapter`]: it turns a shaped slice of the
//! dataset into bytes and the bytes back into something with a length. The
//! driver only checks that length, so adapters are free to decode into
//! whatever native representation their codec prefers.
//!
//! # Modules
//!
//! - `textual`: JSON and YAML
//! - `binary`: bincode, CBOR and MessagePack
//! - `columnar`: Parquet via Arrow record batches
//! - `protobuf`: prost messages in a length-prefixed stream
//! - `framing`: the length-prefixed stream itself

pub mod binary;
pub mod columnar;
pub mod framing;
pub mod protobuf;
pub mod textual;

pub use binary::BinaryObjectAdapter;
pub use columnar::ColumnarAdapter;
pub use framing::{FrameReader, FrameWriter};
pub use protobuf::{BookMessage, FramedMessageAdapter, ReviewMessage};
pub use textual::TextualAdapter;

use crate::datasets::{Dataset, PositionalRecord, Record};
use crate::error::Result;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical layout of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// Named fields, nested named reviews.
    Associative,
    /// Fixed-order tuples.
    Positional,
}

impl Shape {
    /// Both shapes in benchmark order.
    pub const ALL: [Shape; 2] = [Shape::Associative, Shape::Positional];

    /// Returns the shape as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Associative => "associative",
            Shape::Positional => "positional",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed tier of the dataset in one shape.
#[derive(Debug, Clone, Copy)]
pub enum ShapedData<'a> {
    Associative(&'a [Record]),
    Positional(&'a [PositionalRecord]),
}

impl<'a> ShapedData<'a> {
    /// Borrows the first `items` records of `dataset` in `shape`.
    pub fn from_dataset(dataset: &'a Dataset, shape: Shape, items: usize) -> Self {
        match shape {
            Shape::Associative => ShapedData::Associative(dataset.associative(items)),
            Shape::Positional => ShapedData::Positional(dataset.positional(items)),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            ShapedData::Associative(_) => Shape::Associative,
            ShapedData::Positional(_) => Shape::Positional,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ShapedData::Associative(records) => records.len(),
            ShapedData::Positional(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of [`FormatAdapter::deserialize`].
#[derive(Debug, Clone)]
pub enum Decoded {
    Records(Vec<Record>),
    Positional(Vec<PositionalRecord>),
    /// Arrow batches; the length is the total row count.
    Batches(Vec<RecordBatch>),
    Messages(Vec<BookMessage>),
}

impl Decoded {
    /// Number of decoded records.
    pub fn len(&self) -> usize {
        match self {
            Decoded::Records(records) => records.len(),
            Decoded::Positional(records) => records.len(),
            Decoded::Batches(batches) => batches.iter().map(RecordBatch::num_rows).sum(),
            Decoded::Messages(messages) => messages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Broad codec family an adapter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// Human-readable text.
    Textual,
    /// Self-describing binary object notation.
    BinaryObject,
    /// Column-oriented batches.
    Columnar,
    /// Schema-defined messages in a length-prefixed stream.
    FramedMessage,
}

impl FormatFamily {
    /// Returns the family as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatFamily::Textual => "textual",
            FormatFamily::BinaryObject => "binary-object",
            FormatFamily::Columnar => "columnar",
            FormatFamily::FramedMessage => "framed-message",
        }
    }
}

/// Uniform serialize/deserialize contract over one codec.
///
/// For every shape an adapter supports, `deserialize(serialize(d)?, shape)?`
/// must have the same length as `d`. Unsupported shapes return
/// [`crate::BenchError::Encode`] or [`crate::BenchError::Decode`]; the
/// registry's skip set keeps the driver from asking for them.
pub trait FormatAdapter {
    /// Unique, stable identifier used in result keys.
    fn name(&self) -> &'static str;

    fn family(&self) -> FormatFamily;

    /// Encodes a whole tier into one buffer.
    fn serialize(&self, data: ShapedData<'_>) -> Result<Vec<u8>>;

    /// Decodes a buffer produced by [`FormatAdapter::serialize`] for `shape`.
    fn deserialize(&self, raw: &[u8], shape: Shape) -> Result<Decoded>;
}

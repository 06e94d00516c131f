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

//! Length-prefixed frame encoding.
//!
//! Concatenates opaque payloads into one buffer and splits them apart again.
//!
//! Frame format:
//! ```text
//! +----------------------+-----------------+
//! | length (4, i32 LE)   | payload         |
//! +----------------------+-----------------+
//! ```
//!
//! A zero-length payload is a valid frame.

use crate::error::{BenchError, Result};

/// Size of the length header in bytes.
pub const HEADER_SIZE: usize = 4;

/// Appends length-prefixed frames to an in-memory buffer.
#[derive(Debug, Default)]
pub struct FrameWriter {
    buf: Vec<u8>,
    frames: usize,
}

impl FrameWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates `bytes` of output.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
            frames: 0,
        }
    }

    /// Appends one frame.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Framing`] if the payload does not fit a signed
    /// 32-bit length.
    pub fn push(&mut self, payload: &[u8]) -> Result<()> {
        let len = i32::try_from(payload.len()).map_err(|_| {
            BenchError::Framing(format!(
                "payload of {} bytes exceeds the maximum frame size of {} bytes",
                payload.len(),
                i32::MAX
            ))
        })?;

        self.buf.extend_from_slice(&len.to_le_bytes());
        self.buf.extend_from_slice(payload);
        self.frames += 1;
        Ok(())
    }

    /// Frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

/// Iterates over the payloads of a framed buffer.
///
/// Yields borrowed payload slices until the input is exhausted. After the
/// first error the iterator is fused and yields nothing further.
///
/// # Example
///
/// ```
/// use serbench::formats::{FrameReader, FrameWriter};
///
/// let mut writer = FrameWriter::new();
/// writer.push(b"hello").unwrap();
/// writer.push(b"").unwrap();
/// let buf = writer.into_inner();
///
/// let frames: Vec<&[u8]> = FrameReader::new(&buf).collect::<Result<_, _>>().unwrap();
/// assert_eq!(frames, vec![&b"hello"[..], &b""[..]]);
/// ```
#[derive(Debug, Clone)]
pub struct FrameReader<'a> {
    remaining: &'a [u8],
    offset: usize,
    failed: bool,
}

impl<'a> FrameReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            remaining: buf,
            offset: 0,
            failed: false,
        }
    }

    fn fail(&mut self, message: String) -> Option<Result<&'a [u8]>> {
        self.failed = true;
        Some(Err(BenchError::Framing(message)))
    }
}

impl<'a> Iterator for FrameReader<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.remaining.is_empty() {
            return None;
        }

        if self.remaining.len() < HEADER_SIZE {
            let message = format!(
                "truncated length header at offset {}: {} of {} bytes",
                self.offset,
                self.remaining.len(),
                HEADER_SIZE
            );
            return self.fail(message);
        }

        let (header, rest) = self.remaining.split_at(HEADER_SIZE);
        let len = i32::from_le_bytes([header[0], header[1], header[2], header[3]]);

        if len < 0 {
            let message = format!("negative frame length {} at offset {}", len, self.offset);
            return self.fail(message);
        }

        let len = len as usize;
        if rest.len() < len {
            let message = format!(
                "truncated payload at offset {}: expected {} bytes, found {}",
                self.offset + HEADER_SIZE,
                len,
                rest.len()
            );
            return self.fail(message);
        }

        let (payload, tail) = rest.split_at(len);
        self.remaining = tail;
        self.offset += HEADER_SIZE + len;
        Some(Ok(payload))
    }
}

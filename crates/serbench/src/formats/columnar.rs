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

//! Parquet through Arrow record batches.
//!
//! Positional records are transposed into seven columns named by field
//! position:
//!
//! | column | type |
//! |--------|------|
//! | `"0"` title | Utf8 |
//! | `"1"` author | Utf8 |
//! | `"2"` sales | Int32 |
//! | `"3"` is_published | Boolean |
//! | `"4"` languages | List<Utf8> |
//! | `"5"` reviews | List<List<Utf8>> |
//! | `"6"` price | Float64 |
//!
//! The associative shape needs a predefined schema and is not supported.

use super::{Decoded, FormatAdapter, FormatFamily, Shape, ShapedData};
use crate::datasets::PositionalRecord;
use crate::error::{BenchError, Result};
use arrow::array::{
    ArrayRef, BooleanBuilder, Float64Builder, Int32Builder, ListBuilder, StringBuilder,
};
use arrow::record_batch::RecordBatch;
use bytes::Bytes;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use std::sync::Arc;

const NAME: &str = "parquet";

/// Parquet file written into memory, one record batch per tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnarAdapter;

impl ColumnarAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// Transposes positional records into a single record batch.
pub fn to_record_batch(records: &[PositionalRecord]) -> Result<RecordBatch> {
    let mut titles = StringBuilder::new();
    let mut authors = StringBuilder::new();
    let mut sales = Int32Builder::with_capacity(records.len());
    let mut published = BooleanBuilder::with_capacity(records.len());
    let mut languages = ListBuilder::new(StringBuilder::new());
    let mut reviews = ListBuilder::new(ListBuilder::new(StringBuilder::new()));
    let mut prices = Float64Builder::with_capacity(records.len());

    for record in records {
        titles.append_value(&record.0);
        authors.append_value(&record.1);
        sales.append_value(record.2);
        published.append_value(record.3);

        for language in &record.4 {
            languages.values().append_value(language);
        }
        languages.append(true);

        for review in &record.5 {
            let pair = reviews.values();
            pair.values().append_value(&review.0);
            pair.values().append_value(&review.1);
            pair.append(true);
        }
        reviews.append(true);

        prices.append_value(record.6);
    }

    let columns: Vec<(&str, ArrayRef)> = vec![
        ("0", Arc::new(titles.finish()) as ArrayRef),
        ("1", Arc::new(authors.finish()) as ArrayRef),
        ("2", Arc::new(sales.finish()) as ArrayRef),
        ("3", Arc::new(published.finish()) as ArrayRef),
        ("4", Arc::new(languages.finish()) as ArrayRef),
        ("5", Arc::new(reviews.finish()) as ArrayRef),
        ("6", Arc::new(prices.finish()) as ArrayRef),
    ];

    RecordBatch::try_from_iter(columns).map_err(|e| BenchError::encode(NAME, e))
}

impl FormatAdapter for ColumnarAdapter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn family(&self) -> FormatFamily {
        FormatFamily::Columnar
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

        let batch = to_record_batch(records)?;
        let mut buf = Vec::new();
        let mut writer = ArrowWriter::try_new(&mut buf, batch.schema(), None)
            .map_err(|e| BenchError::encode(NAME, e))?;
        writer.write(&batch).map_err(|e| BenchError::encode(NAME, e))?;
        writer.close().map_err(|e| BenchError::encode(NAME, e))?;

        Ok(buf)
    }

    fn deserialize(&self, raw: &[u8], shape: Shape) -> Result<Decoded> {
        if shape == Shape::Associative {
            return Err(BenchError::decode(
                NAME,
                "associative shape requires a predefined schema",
            ));
        }

        let reader = ParquetRecordBatchReaderBuilder::try_new(Bytes::copy_from_slice(raw))
            .and_then(|builder| builder.build())
            .map_err(|e| BenchError::decode(NAME, e))?;

        let batches = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| BenchError::decode(NAME, e))?;

        Ok(Decoded::Batches(batches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Dataset;
    use arrow::array::{Array, Int32Array, ListArray, StringArray};
    use arrow::datatypes::DataType;

    #[test]
    fn test_schema_columns() {
        let dataset = Dataset::generate(3, 42).unwrap();
        let batch = to_record_batch(dataset.positional(3)).unwrap();

        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 7);

        let schema = batch.schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, ["0", "1", "2", "3", "4", "5", "6"]);

        assert_eq!(schema.field(0).data_type(), &DataType::Utf8);
        assert_eq!(schema.field(2).data_type(), &DataType::Int32);
        assert_eq!(schema.field(3).data_type(), &DataType::Boolean);
        assert_eq!(schema.field(6).data_type(), &DataType::Float64);
        assert!(matches!(schema.field(4).data_type(), DataType::List(_)));
        match schema.field(5).data_type() {
            DataType::List(inner) => assert!(matches!(inner.data_type(), DataType::List(_))),
            other => panic!("unexpected reviews type {:?}", other),
        }
    }

    #[test]
    fn test_column_values() {
        let dataset = Dataset::generate(1, 42).unwrap();
        let batch = to_record_batch(dataset.positional(1)).unwrap();

        let titles = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(titles.value(0), "S\"E3F,d0~ODeQ");

        let sales = batch
            .column(2)
            .as_any()
            .downcast_ref::<Int32Array>()
            .unwrap();
        assert_eq!(sales.value(0), 199714216);

        let languages = batch
            .column(4)
            .as_any()
            .downcast_ref::<ListArray>()
            .unwrap();
        assert_eq!(languages.value(0).len(), 4);
    }

    #[test]
    fn test_round_trip_row_count() {
        let dataset = Dataset::generate(1_000, 42).unwrap();
        let adapter = ColumnarAdapter::new();

        for items in [0, 1, 1_000] {
            let bytes = adapter
                .serialize(ShapedData::Positional(dataset.positional(items)))
                .unwrap();
            let decoded = adapter.deserialize(&bytes, Shape::Positional).unwrap();
            assert_eq!(decoded.len(), items);
        }
    }

    #[test]
    fn test_associative_rejected() {
        let dataset = Dataset::generate(1, 42).unwrap();
        let err = ColumnarAdapter::new()
            .serialize(ShapedData::Associative(dataset.associative(1)))
            .unwrap_err();
        assert!(matches!(err, BenchError::Encode { .. }));
    }

    #[test]
    fn test_not_parquet_is_decode_error() {
        let err = ColumnarAdapter::new()
            .deserialize(b"definitely not parquet", Shape::Positional)
            .unwrap_err();
        assert!(matches!(err, BenchError::Decode { .. }));
    }
}

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

use serbench::core::FormatRegistry;
use serbench::formats::Shape;

/// Formats one line per registered format: name, family and the shapes it
/// runs.
pub fn format_table(registry: &FormatRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|adapter| {
            let shapes: Vec<&str> = Shape::ALL
                .into_iter()
                .filter(|&shape| !registry.is_skipped(shape, adapter.name()))
                .map(|shape| shape.as_str())
                .collect();
            format!(
                "{:<10} {:<15} {}",
                adapter.name(),
                adapter.family().as_str(),
                shapes.join(", ")
            )
        })
        .collect()
}

/// Prints the standard registry.
pub fn list_formats() {
    let registry = FormatRegistry::standard();
    println!("{:<10} {:<15} SHAPES", "FORMAT", "FAMILY");
    for line in format_table(&registry) {
        println!("{}", line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_format_in_order() {
        let registry = FormatRegistry::standard();
        let lines = format_table(&registry);

        assert_eq!(lines.len(), registry.len());
        assert!(lines[0].starts_with("json "));
        for (line, name) in lines.iter().zip(registry.names()) {
            assert!(line.starts_with(name));
        }
    }

    #[test]
    fn test_table_omits_skipped_shapes() {
        let lines = format_table(&FormatRegistry::standard());
        let parquet = lines.iter().find(|l| l.starts_with("parquet")).unwrap();
        assert!(parquet.contains("columnar"));
        assert!(parquet.ends_with("positional"));
        assert!(!parquet.contains("associative"));

        let cbor = lines.iter().find(|l| l.starts_with("cbor")).unwrap();
        assert!(cbor.ends_with("associative, positional"));
    }
}

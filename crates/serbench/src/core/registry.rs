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

//! Format registry.
//!
//! An ordered list of adapters plus the (shape, format) pairs that are
//! structurally incompatible and must be skipped. Iteration order is
//! registration order; the driver relies on the baseline coming first.

use crate::error::{BenchError, Result};
use crate::formats::{
    BinaryObjectAdapter, ColumnarAdapter, FormatAdapter, FramedMessageAdapter, Shape,
    TextualAdapter,
};
use std::collections::BTreeSet;
use std::fmt;

/// Ordered collection of format adapters.
#[derive(Default)]
pub struct FormatRegistry {
    adapters: Vec<Box<dyn FormatAdapter>>,
    skipped: BTreeSet<(Shape, String)>,
}

impl FormatRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in format, baseline (`json`) first, with the default skip
    /// set: parquet and protobuf need a predefined schema, so neither runs on
    /// the associative shape.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(TextualAdapter::json())
            .register(BinaryObjectAdapter::bincode())
            .register(TextualAdapter::yaml())
            .register(ColumnarAdapter::new())
            .register(FramedMessageAdapter::new())
            .register(BinaryObjectAdapter::cbor())
            .register(BinaryObjectAdapter::msgpack());
        registry
            .skip(Shape::Associative, "parquet")
            .skip(Shape::Associative, "protobuf");
        registry
    }

    /// Adds an adapter at the end, or replaces one with the same name in
    /// place.
    pub fn register<A>(&mut self, adapter: A) -> &mut Self
    where
        A: FormatAdapter + 'static,
    {
        let boxed: Box<dyn FormatAdapter> = Box::new(adapter);
        match self.position(boxed.name()) {
            Some(index) => self.adapters[index] = boxed,
            None => self.adapters.push(boxed),
        }
        self
    }

    /// Marks `(shape, name)` as incompatible.
    pub fn skip(&mut self, shape: Shape, name: &str) -> &mut Self {
        self.skipped.insert((shape, name.to_string()));
        self
    }

    pub fn is_skipped(&self, shape: Shape, name: &str) -> bool {
        self.skipped.contains(&(shape, name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&dyn FormatAdapter> {
        self.adapters
            .iter()
            .find(|a| a.name() == name)
            .map(|a| &**a)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Names in iteration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|a| a.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn FormatAdapter> {
        self.adapters.iter().map(|a| &**a)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Keeps only the named formats, plus `baseline`. Order is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if a name is not registered.
    pub fn retain<S: AsRef<str>>(&mut self, names: &[S], baseline: &str) -> Result<()> {
        if let Some(unknown) = names.iter().find(|n| !self.contains(n.as_ref())) {
            return Err(BenchError::invalid_config(
                "formats",
                format!(
                    "unknown format '{}' (available: {})",
                    unknown.as_ref(),
                    self.names().join(", ")
                ),
            ));
        }

        self.adapters
            .retain(|a| a.name() == baseline || names.iter().any(|n| n.as_ref() == a.name()));
        Ok(())
    }

    /// Moves `name` to the front of the iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if `name` is not registered.
    pub fn promote(&mut self, name: &str) -> Result<()> {
        let index = self.position(name).ok_or_else(|| {
            BenchError::invalid_config("baseline", format!("format '{}' is not registered", name))
        })?;
        let adapter = self.adapters.remove(index);
        self.adapters.insert(0, adapter);
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.adapters.iter().position(|a| a.name() == name)
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("adapters", &self.names())
            .field("skipped", &self.skipped)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::FormatFamily;

    #[test]
    fn test_standard_order() {
        let registry = FormatRegistry::standard();
        assert_eq!(
            registry.names(),
            vec!["json", "bincode", "yaml", "parquet", "protobuf", "cbor", "msgpack"]
        );
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_standard_skips() {
        let registry = FormatRegistry::standard();
        assert!(registry.is_skipped(Shape::Associative, "parquet"));
        assert!(registry.is_skipped(Shape::Associative, "protobuf"));
        assert!(!registry.is_skipped(Shape::Positional, "parquet"));
        assert!(!registry.is_skipped(Shape::Associative, "json"));
    }

    #[test]
    fn test_get_and_family() {
        let registry = FormatRegistry::standard();
        assert_eq!(registry.get("cbor").unwrap().family(), FormatFamily::BinaryObject);
        assert_eq!(registry.get("parquet").unwrap().family(), FormatFamily::Columnar);
        assert!(registry.get("xml").is_none());
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = FormatRegistry::new();
        registry
            .register(TextualAdapter::json())
            .register(BinaryObjectAdapter::cbor())
            .register(TextualAdapter::json());
        assert_eq!(registry.names(), vec!["json", "cbor"]);
    }

    #[test]
    fn test_retain_keeps_baseline() {
        let mut registry = FormatRegistry::standard();
        registry.retain(&["msgpack", "parquet"], "json").unwrap();
        assert_eq!(registry.names(), vec!["json", "parquet", "msgpack"]);
    }

    #[test]
    fn test_retain_unknown() {
        let mut registry = FormatRegistry::standard();
        let err = registry.retain(&["pickle"], "json").unwrap_err();
        assert!(err.to_string().contains("pickle"));
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_promote() {
        let mut registry = FormatRegistry::standard();
        registry.promote("msgpack").unwrap();
        assert_eq!(registry.names()[0], "msgpack");
        assert_eq!(registry.names()[1], "json");
        assert!(registry.promote("nope").is_err());
    }
}

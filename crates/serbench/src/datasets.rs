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

//! Synthetic book dataset.
//!
//! Generates deterministic book records in two shapes:
//!
//! - **associative**: [`Record`] with named fields and named [`Review`]s
//! - **positional**: [`PositionalRecord`] tuples with [`PositionalReview`]s
//!
//! All records come from a single [`StdRng`] seeded once per call. Within a
//! record the fields are drawn in declaration order (title, author, sales,
//! is_published, languages, reviews, price), so changing that order changes
//! every record after the first draw. Because the stream is consumed record by
//! record, `generate(k, seed)` is always a prefix of `generate(n, seed)` for
//! `k <= n`.

use crate::error::{validate_dataset_size, Result};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Seed used when no seed is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Language codes sampled without replacement for each record.
pub const LANGUAGES: [&str; 4] = ["en", "he", "es", "de"];

/// Maximum length of titles, authors and review authors.
pub const MAX_TEXT_LEN: usize = 24;

/// Maximum length of review comments.
pub const MAX_COMMENT_LEN: usize = 100;

/// Maximum number of reviews per record.
pub const MAX_REVIEWS: usize = 4;

/// Decimal digits kept in prices.
pub const PRICE_DIGITS: i32 = 8;

/// Printable ASCII alphabet: digits, letters, punctuation, whitespace.
const PRINTABLE: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\u{0b}\u{0c}",
);

/// Inclusive code point ranges of the review comment alphabet.
const UNICODE_RANGES: [(u32, u32); 13] = [
    (0x0021, 0x0021),
    (0x0023, 0x0026),
    (0x0028, 0x007E),
    (0x00A1, 0x00AC),
    (0x00AE, 0x00FF),
    (0x0100, 0x017F),
    (0x0180, 0x024F),
    (0x2C60, 0x2C7F),
    (0x16A0, 0x16F0),
    (0x0370, 0x0377),
    (0x037A, 0x037E),
    (0x0384, 0x038A),
    (0x038C, 0x038C),
];

/// A review attached to a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub comment: String,
}

/// A book record in the associative (named field) shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub author: String,
    pub sales: i32,
    pub is_published: bool,
    pub languages: Vec<String>,
    pub reviews: Vec<Review>,
    pub price: f64,
}

/// A review in the positional shape: `(author, comment)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionalReview(pub String, pub String);

/// A book record in the positional shape:
/// `(title, author, sales, is_published, languages, reviews, price)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionalRecord(
    pub String,
    pub String,
    pub i32,
    pub bool,
    pub Vec<String>,
    pub Vec<PositionalReview>,
    pub f64,
);

impl From<&Review> for PositionalReview {
    fn from(review: &Review) -> Self {
        PositionalReview(review.author.clone(), review.comment.clone())
    }
}

impl From<&Record> for PositionalRecord {
    fn from(record: &Record) -> Self {
        let reviews = record.reviews.iter().map(PositionalReview::from).collect();
        PositionalRecord(
            record.title.clone(),
            record.author.clone(),
            record.sales,
            record.is_published,
            record.languages.clone(),
            reviews,
            record.price,
        )
    }
}

/// Record generator holding the random stream and the character alphabets.
struct BookGenerator {
    rng: StdRng,
    printable: Vec<char>,
    unicode: Vec<char>,
}

impl BookGenerator {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            printable: PRINTABLE.chars().collect(),
            unicode: unicode_alphabet(),
        }
    }

    fn next_record(&mut self) -> Record {
        let title = random_text(&mut self.rng, &self.printable, MAX_TEXT_LEN);
        let author = random_text(&mut self.rng, &self.printable, MAX_TEXT_LEN);
        let sales = self.rng.gen_range(0..=i32::MAX);
        let is_published: bool = self.rng.gen();
        let languages = self.languages();

        let review_count = self.rng.gen_range(0..=MAX_REVIEWS);
        let reviews = (0..review_count)
            .map(|_| Review {
                author: random_text(&mut self.rng, &self.printable, MAX_TEXT_LEN),
                comment: random_text(&mut self.rng, &self.unicode, MAX_COMMENT_LEN),
            })
            .collect();

        let price = round_price(self.rng.gen::<f64>() * 100.0);

        Record {
            title,
            author,
            sales,
            is_published,
            languages,
            reviews,
            price,
        }
    }

    /// Draws 1-4 distinct language codes, in draw order.
    fn languages(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(1..=LANGUAGES.len());
        let mut pool: Vec<&str> = LANGUAGES.to_vec();
        let mut picked = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = self.rng.gen_range(0..pool.len());
            picked.push(pool.remove(idx).to_string());
        }
        picked
    }
}

fn random_text(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

fn round_price(value: f64) -> f64 {
    let factor = 10f64.powi(PRICE_DIGITS);
    (value * factor).round() / factor
}

/// Returns the review comment alphabet in range order.
pub fn unicode_alphabet() -> Vec<char> {
    UNICODE_RANGES
        .iter()
        .flat_map(|&(start, end)| (start..=end).filter_map(char::from_u32))
        .collect()
}

/// Generate `count` associative records from `seed`.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`](crate::BenchError::DatasetTooLarge)
/// if `count` exceeds [`MAX_DATASET_SIZE`](crate::MAX_DATASET_SIZE).
///
/// # Examples
///
/// ```
/// use serbench::datasets::{generate, DEFAULT_SEED};
///
/// let books = generate(10, DEFAULT_SEED).unwrap();
/// assert_eq!(books.len(), 10);
/// assert_eq!(books[..3], generate(3, DEFAULT_SEED).unwrap()[..]);
/// ```
pub fn generate(count: usize, seed: u64) -> Result<Vec<Record>> {
    validate_dataset_size(count)?;

    let mut generator = BookGenerator::new(seed);
    let records: Vec<Record> = (0..count).map(|_| generator.next_record()).collect();

    tracing::debug!(count, seed, "generated dataset");
    Ok(records)
}

/// Project associative records into the positional shape.
///
/// Reviews are converted first, then the enclosing record. The input is only
/// borrowed; the output owns copies of every field.
pub fn to_positional(records: &[Record]) -> Vec<PositionalRecord> {
    records.iter().map(PositionalRecord::from).collect()
}

/// The maximum dataset of a run in both shapes.
///
/// Tiers borrow prefixes of these vectors instead of regenerating data.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    associative: Vec<Record>,
    positional: Vec<PositionalRecord>,
}

impl Dataset {
    /// Generates `count` records and their positional projection.
    pub fn generate(count: usize, seed: u64) -> Result<Self> {
        let associative = generate(count, seed)?;
        Ok(Self::from_records(associative))
    }

    /// Wraps already generated records.
    pub fn from_records(associative: Vec<Record>) -> Self {
        let positional = to_positional(&associative);
        Self {
            associative,
            positional,
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.associative.len()
    }

    /// Returns true if the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.associative.is_empty()
    }

    /// The first `items` associative records.
    ///
    /// # Panics
    ///
    /// Panics if `items` exceeds [`Dataset::len`].
    pub fn associative(&self, items: usize) -> &[Record] {
        &self.associative[..items]
    }

    /// The first `items` positional records.
    ///
    /// # Panics
    ///
    /// Panics if `items` exceeds [`Dataset::len`].
    pub fn positional(&self, items: usize) -> &[PositionalRecord] {
        &self.positional[..items]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BenchError, MAX_DATASET_SIZE};

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate(200, DEFAULT_SEED).unwrap();
        let b = generate(200, DEFAULT_SEED).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_prefix_property() {
        let full = generate(300, DEFAULT_SEED).unwrap();
        for k in [0, 1, 2, 17, 150, 300] {
            let prefix = generate(k, DEFAULT_SEED).unwrap();
            assert_eq!(prefix[..], full[..k], "prefix of length {} differs", k);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(20, 1).unwrap();
        let b = generate(20, 2).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_zero_is_empty() {
        assert!(generate(0, DEFAULT_SEED).unwrap().is_empty());
    }

    #[test]
    fn test_generate_rejects_oversized_request() {
        let result = generate(MAX_DATASET_SIZE + 1, DEFAULT_SEED);
        assert!(matches!(result, Err(BenchError::DatasetTooLarge { .. })));
    }

    #[test]
    fn test_golden_record() {
        let records = generate(1, 42).unwrap();
        assert_eq!(records.len(), 1);

        let book = &records[0];
        assert_eq!(book.title, "S\"E3F,d0~ODeQ");
        assert_eq!(book.author, "15#[N");
        assert_eq!(book.sales, 199_714_216);
        assert!(!book.is_published);
        assert_eq!(book.languages, vec!["de", "en", "es", "he"]);
        assert!(book.reviews.is_empty());
        assert!((book.price - 42.826_199_42).abs() < 1e-9);
    }

    #[test]
    fn test_field_ranges() {
        let printable: Vec<char> = PRINTABLE.chars().collect();
        let unicode = unicode_alphabet();

        for book in generate(2_000, DEFAULT_SEED).unwrap() {
            assert!(book.title.chars().count() <= MAX_TEXT_LEN);
            assert!(book.author.chars().all(|c| printable.contains(&c)));
            assert!(book.sales >= 0);

            assert!((1..=4).contains(&book.languages.len()));
            let mut langs = book.languages.clone();
            langs.sort();
            langs.dedup();
            assert_eq!(langs.len(), book.languages.len(), "duplicate language");
            assert!(langs.iter().all(|l| LANGUAGES.contains(&l.as_str())));

            assert!(book.reviews.len() <= MAX_REVIEWS);
            for review in &book.reviews {
                assert!(review.author.chars().count() <= MAX_TEXT_LEN);
                assert!(review.comment.chars().count() <= MAX_COMMENT_LEN);
                assert!(review.comment.chars().all(|c| unicode.contains(&c)));
            }

            assert!((0.0..100.0).contains(&book.price));
            let scaled = book.price * 1e8;
            assert!((scaled - scaled.round()).abs() < 1e-3);
        }
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(PRINTABLE.chars().count(), 100);
        assert_eq!(unicode_alphabet().len(), 656);
    }

    #[test]
    fn test_to_positional_is_pure() {
        let records = generate(50, DEFAULT_SEED).unwrap();
        let snapshot = records.clone();

        let first = to_positional(&records);
        let second = to_positional(&records);

        assert_eq!(records, snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_positional_field_order() {
        let records = generate(30, DEFAULT_SEED).unwrap();
        let rows = to_positional(&records);

        for (record, row) in records.iter().zip(&rows) {
            assert_eq!(row.0, record.title);
            assert_eq!(row.1, record.author);
            assert_eq!(row.2, record.sales);
            assert_eq!(row.3, record.is_published);
            assert_eq!(row.4, record.languages);
            assert_eq!(row.5.len(), record.reviews.len());
            for (review, pair) in record.reviews.iter().zip(&row.5) {
                assert_eq!(pair.0, review.author);
                assert_eq!(pair.1, review.comment);
            }
            assert_eq!(row.6, record.price);
        }
    }

    #[test]
    fn test_dataset_slices() {
        let dataset = Dataset::generate(100, DEFAULT_SEED).unwrap();
        assert_eq!(dataset.len(), 100);
        assert_eq!(dataset.associative(10).len(), 10);
        assert_eq!(dataset.positional(10).len(), 10);
        assert_eq!(dataset.positional(5), to_positional(dataset.associative(5)));
    }
}

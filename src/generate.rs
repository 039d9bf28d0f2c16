//! Seeded generation of the sample columns.
//!
//! All random columns are drawn from one ChaCha8 stream, column by column:
//! every `value` first, then every `flag`, then every `text`. Changing that
//! order changes the fixture.

use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray, TimestampMicrosecondArray,
};
use chrono::DateTime;
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::schema::field;
use crate::writer::NamedColumn;

/// `2024-01-01T00:00:00` as microseconds since the Unix epoch.
pub const BASE_TIMESTAMP_MICROS: i64 = 1_704_067_200_000_000;
/// Exclusive upper bound of the `value` column.
pub const VALUE_UPPER_BOUND: f64 = 1000.0;
pub const TEXT_LEN: usize = 12;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Column vectors for one generated table, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleColumns {
    pub ids: Vec<i64>,
    pub values: Vec<f64>,
    pub flags: Vec<bool>,
    pub texts: Vec<String>,
    /// Naive timestamps in microseconds
    pub timestamps: Vec<i64>,
}

impl SampleColumns {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Convert into Arrow arrays named and ordered as the sample schema.
    pub fn into_named_columns(self) -> Vec<NamedColumn> {
        vec![
            (field::ID, Arc::new(Int64Array::from(self.ids)) as ArrayRef),
            (
                field::VALUE,
                Arc::new(Float64Array::from(self.values)) as ArrayRef,
            ),
            (
                field::FLAG,
                Arc::new(BooleanArray::from(self.flags)) as ArrayRef,
            ),
            (
                field::TEXT,
                Arc::new(StringArray::from(self.texts)) as ArrayRef,
            ),
            (
                field::TS,
                Arc::new(TimestampMicrosecondArray::from(self.timestamps)) as ArrayRef,
            ),
        ]
    }
}

/// Produces the fixture table for a given row count and seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGenerator {
    rows: usize,
    seed: u64,
}

impl SampleGenerator {
    pub fn new(rows: usize, seed: u64) -> Self {
        Self { rows, seed }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.rows, config.seed)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate every column. A fresh RNG is seeded on each call, so repeated
    /// calls return identical data.
    pub fn generate(&self) -> SampleColumns {
        let rows = self.rows;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let ids: Vec<i64> = (1..=rows as i64).collect();
        let values: Vec<f64> = (0..rows)
            .map(|_| rng.gen_range(0.0..VALUE_UPPER_BOUND))
            .collect();
        let flags: Vec<bool> = (0..rows).map(|_| rng.gen::<bool>()).collect();
        let texts: Vec<String> = (0..rows).map(|_| random_text(&mut rng, TEXT_LEN)).collect();
        let timestamps: Vec<i64> = (0..rows as i64)
            .map(|i| BASE_TIMESTAMP_MICROS + i * MICROS_PER_SECOND)
            .collect();

        tracing::debug!(
            rows,
            seed = self.seed,
            first_ts = %format_micros(timestamps.first().copied()),
            last_ts = %format_micros(timestamps.last().copied()),
            "Generated sample columns"
        );

        SampleColumns {
            ids,
            values,
            flags,
            texts,
            timestamps,
        }
    }
}

fn random_text<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn format_micros(micros: Option<i64>) -> String {
    micros
        .and_then(DateTime::from_timestamp_micros)
        .map(|dt| dt.naive_utc().to_string())
        .unwrap_or_else(|| "-".to_string())
}

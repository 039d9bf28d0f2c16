use parquet::basic::Compression;
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

use crate::config::{GeneratorConfig, OutputCompression, OutputConfig};

pub const METADATA_VERSION_KEY: &str = "megrez_sample.version";
pub const METADATA_SEED_KEY: &str = "megrez_sample.seed";
pub const METADATA_ROWS_KEY: &str = "megrez_sample.rows";

fn compression_setting(compression: OutputCompression) -> Compression {
    match compression {
        OutputCompression::Snappy => Compression::SNAPPY,
        OutputCompression::Uncompressed => Compression::UNCOMPRESSED,
    }
}

/// Build writer properties for one fixture file.
///
/// - Configurable compression (Snappy by default)
/// - Dictionary encoding enabled
/// - 32k rows per group by default (configurable)
/// - Generator version, seed and row count embedded in the footer
pub fn writer_properties(output: &OutputConfig, generator: &GeneratorConfig) -> WriterProperties {
    let metadata = vec![
        KeyValue {
            key: METADATA_VERSION_KEY.to_string(),
            value: Some(env!("CARGO_PKG_VERSION").to_string()),
        },
        KeyValue {
            key: METADATA_SEED_KEY.to_string(),
            value: Some(generator.seed.to_string()),
        },
        KeyValue {
            key: METADATA_ROWS_KEY.to_string(),
            value: Some(generator.rows.to_string()),
        },
    ];

    WriterProperties::builder()
        .set_dictionary_enabled(true)
        .set_statistics_enabled(EnabledStatistics::Page)
        .set_compression(compression_setting(output.compression))
        .set_max_row_group_size(output.row_group_size)
        .set_key_value_metadata(Some(metadata))
        .build()
}

//! Reproducible synthetic Parquet fixtures.
//!
//! Builds a fixed-schema table (`id`, `value`, `flag`, `text`, `ts`) from a
//! seeded generator and writes it as a single Parquet file:
//!
//! ```no_run
//! use megrez_sample::{run, SampleConfig};
//!
//! let path = run(&SampleConfig::default())?;
//! println!("{}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use std::path::PathBuf;

pub mod config;
pub mod generate;
mod init;
pub mod schema;
pub mod writer;

pub use config::{LogFormat, OutputCompression, SampleConfig};
pub use generate::{SampleColumns, SampleGenerator};
pub use init::init_tracing;
pub use writer::{ParquetFileWriter, TableWriter, WriterError};

/// Generate the sample table and hand it to `writer`.
///
/// Creates the destination's parent directory first. Returns the destination
/// path exactly as configured (or the temp-dir default).
pub fn generate_sample<W: TableWriter>(
    config: &SampleConfig,
    writer: &mut W,
) -> writer::Result<PathBuf> {
    let path = config.output_path();
    let generator = SampleGenerator::from_config(&config.generator);

    tracing::info!(
        rows = generator.rows(),
        seed = generator.seed(),
        compression = %config.output.compression,
        "Generating sample table for {}",
        path.display()
    );

    let table = writer.build_table(generator.generate().into_named_columns())?;
    writer::ensure_parent_dir(&path)?;
    writer.write_table(&table, &path)?;

    Ok(path)
}

/// Validate `config` and write the sample as Parquet.
pub fn run(config: &SampleConfig) -> Result<PathBuf> {
    config.validate().context("Invalid configuration")?;

    let mut writer = ParquetFileWriter::from_config(config);
    let path = generate_sample(config, &mut writer)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, RecordBatch};
    use std::path::Path;
    use tempfile::TempDir;

    /// Records what it was asked to write instead of touching the filesystem.
    #[derive(Default)]
    struct RecordingWriter {
        written: Vec<(PathBuf, RecordBatch)>,
    }

    impl TableWriter for RecordingWriter {
        fn write_table(&mut self, table: &RecordBatch, path: &Path) -> writer::Result<()> {
            self.written.push((path.to_path_buf(), table.clone()));
            Ok(())
        }
    }

    fn config_with_path(path: PathBuf) -> SampleConfig {
        let mut config = SampleConfig::default();
        config.output.path = Some(path);
        config
    }

    #[test]
    fn hands_one_table_to_the_writer() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out.parquet");
        let mut writer = RecordingWriter::default();

        let path = generate_sample(&config_with_path(target.clone()), &mut writer).unwrap();

        assert_eq!(path, target);
        assert_eq!(writer.written.len(), 1);
        let (written_path, table) = &writer.written[0];
        assert_eq!(written_path, &target);
        assert_eq!(table.num_rows(), 10_000);
        assert_eq!(table.schema(), schema::sample_schema_arc());
    }

    #[test]
    fn ids_reach_the_writer_in_order() {
        let temp = TempDir::new().unwrap();
        let mut config = config_with_path(temp.path().join("out.parquet"));
        config.generator.rows = 25;
        let mut writer = RecordingWriter::default();

        generate_sample(&config, &mut writer).unwrap();

        let table = &writer.written[0].1;
        let ids = table
            .column_by_name(schema::field::ID)
            .unwrap()
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(ids.values().to_vec(), (1..=25).collect::<Vec<i64>>());
    }

    #[test]
    fn creates_parent_directory_before_writing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("deeper").join("out.parquet");
        let mut writer = RecordingWriter::default();

        generate_sample(&config_with_path(target), &mut writer).unwrap();
        assert!(temp.path().join("nested").join("deeper").is_dir());
    }

    #[test]
    fn same_config_same_table() {
        let temp = TempDir::new().unwrap();
        let mut first = RecordingWriter::default();
        let mut second = RecordingWriter::default();

        generate_sample(&config_with_path(temp.path().join("a.parquet")), &mut first).unwrap();
        generate_sample(&config_with_path(temp.path().join("b.parquet")), &mut second).unwrap();

        assert_eq!(first.written[0].1, second.written[0].1);
    }

    #[test]
    fn run_rejects_invalid_config() {
        let mut config = SampleConfig::default();
        config.generator.rows = 0;
        let err = run(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("generator.rows"));
    }
}

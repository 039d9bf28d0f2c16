//! Parquet output for the sample table.
//!
//! The file is staged beside the destination and renamed into place once the
//! footer is written, so a failed run never leaves a half-written file at
//! the destination path.

use arrow::array::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::path::Path;
use tempfile::NamedTempFile;

use super::encoding::writer_properties;
use super::error::{Result, WriterError};
use super::storage::parent_dir;
use super::table::TableWriter;
use crate::config::SampleConfig;

/// Writes tables as single Parquet files.
#[derive(Debug, Clone)]
pub struct ParquetFileWriter {
    properties: WriterProperties,
}

impl ParquetFileWriter {
    pub fn new(properties: WriterProperties) -> Self {
        Self { properties }
    }

    pub fn from_config(config: &SampleConfig) -> Self {
        Self::new(writer_properties(&config.output, &config.generator))
    }

    fn staging_file(&self, path: &Path) -> Result<NamedTempFile> {
        let dir = parent_dir(path).unwrap_or_else(|| Path::new("."));

        let mut builder = tempfile::Builder::new();
        builder.prefix(".megrez-sample-").suffix(".partial");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o644));
        }

        builder.tempfile_in(dir).map_err(|e| {
            WriterError::write_failure(
                path,
                format!("Failed to create staging file in '{}': {}", dir.display(), e),
            )
        })
    }
}

impl TableWriter for ParquetFileWriter {
    fn write_table(&mut self, table: &RecordBatch, path: &Path) -> Result<()> {
        tracing::debug!("Writing {} rows to {}", table.num_rows(), path.display());

        let mut staged = self.staging_file(path)?;

        let mut writer = ArrowWriter::try_new(
            staged.as_file_mut(),
            table.schema(),
            Some(self.properties.clone()),
        )
        .map_err(|e| WriterError::encode(path, e.to_string()))?;
        writer
            .write(table)
            .map_err(|e| WriterError::encode(path, e.to_string()))?;
        writer
            .close()
            .map_err(|e| WriterError::encode(path, e.to_string()))?;

        let bytes_written = staged
            .as_file()
            .metadata()
            .map_err(|e| WriterError::write_failure(path, e.to_string()))?
            .len();

        staged
            .persist(path)
            .map_err(|e| WriterError::write_failure(path, e.error.to_string()))?;

        tracing::info!(
            "✓ Wrote {} rows to '{}' ({} bytes)",
            table.num_rows(),
            path.display(),
            bytes_written
        );

        Ok(())
    }
}

//! Table assembly and Parquet output.
//!
//! The generator only talks to [`TableWriter`]; [`ParquetFileWriter`] is the
//! implementation backed by the `parquet` crate.

mod encoding;
mod error;
mod storage;
mod table;
mod write;

pub use encoding::{
    writer_properties, METADATA_ROWS_KEY, METADATA_SEED_KEY, METADATA_VERSION_KEY,
};
pub use error::{ErrorCode, Result, WriterError};
pub use storage::{ensure_parent_dir, parent_dir};
pub use table::{build_record_batch, NamedColumn, TableWriter};
pub use write::ParquetFileWriter;

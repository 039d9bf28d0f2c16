//! Error types for table assembly and Parquet output.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Destination directory could not be created
    E001CreateDirectory,
    /// E002: Columns could not be assembled into a table
    E002BuildTable,
    /// E003: Parquet encoding failed
    E003Encode,
    /// E004: Writing or renaming the output file failed
    E004WriteFailure,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E001CreateDirectory => "E001",
            Self::E002BuildTable => "E002",
            Self::E003Encode => "E003",
            Self::E004WriteFailure => "E004",
        }
    }
}

/// Errors that can occur while building or writing the sample table
#[derive(Debug, Error)]
pub enum WriterError {
    #[error("[{code}] Failed to create directory '{}': {source}", .path.display())]
    CreateDirectory {
        code: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("[{code}] Failed to build table: {message}")]
    BuildTable { code: &'static str, message: String },

    #[error("[{code}] Failed to encode Parquet for '{}': {message}", .path.display())]
    Encode {
        code: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("[{code}] Write operation failed for '{}': {message}", .path.display())]
    WriteFailure {
        code: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl WriterError {
    pub fn create_directory(path: &Path, source: std::io::Error) -> Self {
        Self::CreateDirectory {
            code: ErrorCode::E001CreateDirectory.as_str(),
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn build_table(message: String) -> Self {
        Self::BuildTable {
            code: ErrorCode::E002BuildTable.as_str(),
            message,
        }
    }

    pub fn encode(path: &Path, message: String) -> Self {
        Self::Encode {
            code: ErrorCode::E003Encode.as_str(),
            path: path.to_path_buf(),
            message,
        }
    }

    pub fn write_failure(path: &Path, message: String) -> Self {
        Self::WriteFailure {
            code: ErrorCode::E004WriteFailure.as_str(),
            path: path.to_path_buf(),
            message,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::CreateDirectory { .. } => ErrorCode::E001CreateDirectory,
            Self::BuildTable { .. } => ErrorCode::E002BuildTable,
            Self::Encode { .. } => ErrorCode::E003Encode,
            Self::WriteFailure { .. } => ErrorCode::E004WriteFailure,
        }
    }
}

/// Result type alias for WriterError
pub type Result<T> = std::result::Result<T, WriterError>;

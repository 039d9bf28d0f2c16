use arrow::array::{ArrayRef, RecordBatch};
use arrow::datatypes::{Field, Schema};
use std::path::Path;
use std::sync::Arc;

use super::error::{Result, WriterError};

/// A column name paired with its values.
pub type NamedColumn = (&'static str, ArrayRef);

/// The columnar library as seen by the generator: assemble named columns
/// into a table, then persist that table at a path.
pub trait TableWriter {
    fn build_table(&self, columns: Vec<NamedColumn>) -> Result<RecordBatch> {
        build_record_batch(columns)
    }

    /// Write `table` to `path`. The parent directory already exists.
    fn write_table(&mut self, table: &RecordBatch, path: &Path) -> Result<()>;
}

/// Build a record batch whose schema follows the given column order.
/// Columns without nulls are declared non-nullable.
pub fn build_record_batch(columns: Vec<NamedColumn>) -> Result<RecordBatch> {
    let fields: Vec<Field> = columns
        .iter()
        .map(|(name, array)| Field::new(*name, array.data_type().clone(), array.null_count() > 0))
        .collect();
    let arrays: Vec<ArrayRef> = columns.into_iter().map(|(_, array)| array).collect();

    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .map_err(|e| WriterError::build_table(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringArray};

    #[test]
    fn keeps_column_order_and_names() {
        let batch = build_record_batch(vec![
            ("b", Arc::new(Int64Array::from(vec![1, 2])) as ArrayRef),
            ("a", Arc::new(StringArray::from(vec!["x", "y"])) as ArrayRef),
        ])
        .unwrap();

        let schema = batch.schema();
        assert_eq!(schema.field(0).name(), "b");
        assert_eq!(schema.field(1).name(), "a");
        assert!(!schema.field(0).is_nullable());
        assert_eq!(batch.num_rows(), 2);
    }

    #[test]
    fn columns_with_nulls_are_nullable() {
        let batch = build_record_batch(vec![(
            "maybe",
            Arc::new(Int64Array::from(vec![Some(1), None])) as ArrayRef,
        )])
        .unwrap();
        assert!(batch.schema().field(0).is_nullable());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = build_record_batch(vec![
            ("a", Arc::new(Int64Array::from(vec![1, 2, 3])) as ArrayRef),
            ("b", Arc::new(Int64Array::from(vec![1])) as ArrayRef),
        ])
        .unwrap_err();
        assert!(matches!(err, WriterError::BuildTable { .. }));
    }
}

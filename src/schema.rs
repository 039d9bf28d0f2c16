// Arrow schema for the sample fixture
//
// Column order is part of the fixture contract: id, value, flag, text, ts.
// Timestamps are naive (no timezone) at microsecond precision.

use arrow::datatypes::{DataType, Field, Schema, SchemaRef, TimeUnit};
use std::sync::{Arc, OnceLock};

pub mod field {
    pub const ID: &str = "id";
    pub const VALUE: &str = "value";
    pub const FLAG: &str = "flag";
    pub const TEXT: &str = "text";
    pub const TS: &str = "ts";
}

/// Column names in on-disk order.
pub const COLUMN_NAMES: [&str; 5] = [field::ID, field::VALUE, field::FLAG, field::TEXT, field::TS];

/// Returns the Arrow schema of a sample table.
pub fn sample_schema() -> Schema {
    sample_schema_arc().as_ref().clone()
}

/// Returns a cached `Arc<Schema>` for the sample table.
pub fn sample_schema_arc() -> SchemaRef {
    static SCHEMA: OnceLock<SchemaRef> = OnceLock::new();
    Arc::clone(SCHEMA.get_or_init(|| Arc::new(build_schema())))
}

fn build_schema() -> Schema {
    Schema::new(vec![
        Field::new(field::ID, DataType::Int64, false),
        Field::new(field::VALUE, DataType::Float64, false),
        Field::new(field::FLAG, DataType::Boolean, false),
        Field::new(field::TEXT, DataType::Utf8, false),
        Field::new(
            field::TS,
            DataType::Timestamp(TimeUnit::Microsecond, None),
            false,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_columns_are_in_fixture_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, COLUMN_NAMES);
    }

    #[test]
    fn schema_has_no_nullable_columns() {
        assert!(sample_schema().fields().iter().all(|f| !f.is_nullable()));
    }

    #[test]
    fn ts_column_is_naive_microseconds() {
        let schema = sample_schema_arc();
        let ts = schema.field_with_name(field::TS).unwrap();
        assert_eq!(
            ts.data_type(),
            &DataType::Timestamp(TimeUnit::Microsecond, None)
        );
    }

    #[test]
    fn cached_schema_is_shared() {
        assert!(Arc::ptr_eq(&sample_schema_arc(), &sample_schema_arc()));
    }
}

//! Bundled integrations.

use super::{FieldKind, FieldSpec, Integration};

/// Reads rows from a CSV file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvSource;

impl Integration for CsvSource {
    fn name(&self) -> &str {
        "CSV"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::text("CSVSourceFileName")]
    }
}

/// Writes rows to a CSV file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOutput;

impl Integration for CsvOutput {
    fn name(&self) -> &str {
        "CSV Output"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::text("CSVDestinationFileName")]
    }
}

/// Relational database table, usable on either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlDatabase;

impl Integration for SqlDatabase {
    fn name(&self) -> &str {
        "SQL Database"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("ConnectionString"),
            FieldSpec::text("TableName"),
        ]
    }
}

/// Document database collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSqlDatabase;

impl Integration for NoSqlDatabase {
    fn name(&self) -> &str {
        "NoSQL Database"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("ConnectionURI"),
            FieldSpec::text("DatabaseName"),
            FieldSpec::text("CollectionName"),
        ]
    }
}

/// Kafka topic, usable on either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct KafkaQueue;

impl Integration for KafkaQueue {
    fn name(&self) -> &str {
        "Kafka Queue"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("BrokerAddress"),
            FieldSpec::text("Topic"),
            FieldSpec::text("GroupID"),
        ]
    }
}

/// Object storage bucket, usable on either side.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudStorage;

impl Integration for CloudStorage {
    fn name(&self) -> &str {
        "Cloud Storage"
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Provider"),
            FieldSpec::text("Bucket"),
            FieldSpec::text("Region"),
            FieldSpec::text("ObjectKey"),
            FieldSpec::new("Parallelism", FieldKind::Unsigned),
        ]
    }
}

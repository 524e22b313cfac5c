//! Entity module for database models

pub mod prelude;
pub mod test_records;

/// Row written and read back by the database round-trip test
pub type TestRecord = test_records::Model;

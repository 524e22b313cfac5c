//! Prelude module for convenient imports

pub use super::test_records::Entity as TestRecords;

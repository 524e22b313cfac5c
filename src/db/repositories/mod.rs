// Database repository management

mod test_record_repository;

pub use test_record_repository::TestRecordRepository;

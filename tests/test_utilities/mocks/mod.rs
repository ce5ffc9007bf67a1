/// Mock implementations for testing
mod mock_database_probe;
mod mock_progress_reporter;
mod mock_requirements_reader;

pub use mock_database_probe::MockDatabaseProbe;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_requirements_reader::MockRequirementsReader;

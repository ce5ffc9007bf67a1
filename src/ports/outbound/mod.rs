/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, database).
pub mod database_probe;
pub mod output_presenter;
pub mod progress_reporter;
pub mod requirements_reader;

pub use database_probe::DatabaseProbe;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use requirements_reader::RequirementsReader;

/// Use cases module containing application business logic orchestration
mod prune_requirements;
mod wait_for_database;

pub use prune_requirements::PruneRequirementsUseCase;
pub use wait_for_database::WaitForDatabaseUseCase;

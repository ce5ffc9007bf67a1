/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod prune_request;
mod prune_response;
mod wait_request;

pub use prune_request::PruneRequest;
pub use prune_response::PruneResponse;
pub use wait_request::WaitRequest;

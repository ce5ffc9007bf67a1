//! deploy-utils - container entrypoint helpers
//!
//! Two independent tools built on one hexagonal layout:
//!
//! - `prune-requirements` drops requirements that a base list already
//!   provides, matching on normalized package names.
//! - `wait-for-db` polls PostgreSQL until it accepts a trivial query,
//!   a deadline passes, or the process is asked to stop.
//!
//! # Architecture
//!
//! - **Domain** (`requirements`, `readiness`): pure logic and value types
//! - **Application** (`application`): use cases and DTOs
//! - **Ports** (`ports`): interfaces to files, console and database
//! - **Adapters** (`adapters`): concrete implementations of the ports
//! - **Shared** (`shared`): error types and exit codes
//!
//! # Example
//!
//! ```no_run
//! use deploy_utils::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = PruneRequirementsUseCase::new(FileSystemReader::new());
//! let request = PruneRequest::new(
//!     PathBuf::from("base-requirements.txt"),
//!     PathBuf::from("requirements.txt"),
//! );
//! let response = use_case.execute(request)?;
//! StdoutPresenter::new().present(&response.content)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod readiness;
pub mod requirements;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::spawn_signal_listener;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::postgres::PostgresProbe;
    pub use crate::application::dto::{PruneRequest, PruneResponse, WaitRequest};
    pub use crate::application::use_cases::{PruneRequirementsUseCase, WaitForDatabaseUseCase};
    pub use crate::config::WaitConfig;
    pub use crate::ports::outbound::{
        DatabaseProbe, OutputPresenter, ProgressReporter, RequirementsReader,
    };
    pub use crate::readiness::domain::{
        Backoff, ConnectionComponents, ConnectionTarget, ProbeFailure, SslMode, TlsSettings,
        WaitOutcome,
    };
    pub use crate::requirements::domain::{
        normalize_name, BaseNameSet, PackageName, RequirementLine,
    };
    pub use crate::requirements::services::{PrunedRequirements, RequirementsPruner};
    pub use crate::shared::error::{ExitCode, ToolError};
    pub use crate::shared::Result;
}

use crate::readiness::domain::ProbeFailure;
use async_trait::async_trait;
use std::time::Duration;

/// DatabaseProbe port for a single readiness attempt
///
/// An implementation opens a connection, runs a trivial validation query
/// and releases the connection again, whatever the outcome.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Performs one connect + query attempt
    ///
    /// # Arguments
    /// * `timeout` - Upper bound for the whole attempt
    ///
    /// # Errors
    /// Returns the class of the failure; implementations log the full
    /// driver error themselves.
    async fn probe(&self, timeout: Duration) -> Result<(), ProbeFailure>;
}

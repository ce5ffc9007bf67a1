//! Environment configuration for `wait-for-db`.
//!
//! Every setting comes from an environment variable. Loading goes through a
//! lookup function so the rules can be tested without touching the process
//! environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::readiness::domain::{ConnectionComponents, ConnectionTarget, TlsSettings, DEFAULT_PORT};
use crate::shared::error::ToolError;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const POSTGRES_HOST: &str = "POSTGRES_HOST";
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";
pub const POSTGRES_DB: &str = "POSTGRES_DB";
pub const POSTGRES_USER: &str = "POSTGRES_USER";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const PGSSLMODE: &str = "PGSSLMODE";
pub const PGSSLROOTCERT: &str = "PGSSLROOTCERT";
pub const WAIT_TIMEOUT: &str = "WAIT_TIMEOUT";
pub const WAIT_INTERVAL: &str = "WAIT_INTERVAL";
pub const WAIT_BACKOFF: &str = "WAIT_BACKOFF";
pub const PGCONNECT_TIMEOUT: &str = "PGCONNECT_TIMEOUT";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Fully resolved settings for one readiness wait
#[derive(Debug, Clone, PartialEq)]
pub struct WaitConfig {
    pub target: ConnectionTarget,
    pub tls: TlsSettings,
    /// Overall deadline, measured from process start
    pub timeout: Duration,
    /// Base sleep between attempts
    pub interval: Duration,
    /// Upper bound for a single connect + query attempt
    pub connect_timeout: Duration,
    pub backoff: bool,
}

impl WaitConfig {
    /// Loads the configuration from the process environment
    pub fn from_env() -> Result<Self, ToolError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration from an arbitrary variable lookup
    ///
    /// # Errors
    /// - [`ToolError::MissingEnv`] when `DATABASE_URL` is unset and any of
    ///   the required `POSTGRES_*` variables is missing or empty
    /// - [`ToolError::InvalidEnv`] when a duration is not a non-negative
    ///   number of seconds
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ToolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = connection_target(&lookup)?;
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Ok(Self {
            target,
            tls: TlsSettings {
                default_mode: non_empty(PGSSLMODE),
                root_cert: non_empty(PGSSLROOTCERT).map(PathBuf::from),
            },
            timeout: seconds(&lookup, WAIT_TIMEOUT, DEFAULT_TIMEOUT)?,
            interval: seconds(&lookup, WAIT_INTERVAL, DEFAULT_INTERVAL)?,
            connect_timeout: seconds(&lookup, PGCONNECT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)?,
            backoff: lookup(WAIT_BACKOFF).map_or(false, |v| parse_bool(&v)),
        })
    }
}

fn connection_target<F>(lookup: &F) -> Result<ConnectionTarget, ToolError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(url) = non_empty(DATABASE_URL) {
        return Ok(ConnectionTarget::Url(url));
    }

    let host = non_empty(POSTGRES_HOST);
    let database = non_empty(POSTGRES_DB);
    let user = non_empty(POSTGRES_USER);
    let password = non_empty(POSTGRES_PASSWORD);

    match (host, database, user, password) {
        (Some(host), Some(database), Some(user), Some(password)) => {
            Ok(ConnectionTarget::Components(ConnectionComponents {
                host,
                port: non_empty(POSTGRES_PORT).unwrap_or_else(|| DEFAULT_PORT.to_string()),
                database,
                user,
                password,
                ssl_mode: non_empty(PGSSLMODE),
            }))
        }
        (host, database, user, password) => {
            let names = [
                (POSTGRES_HOST, host.is_none()),
                (POSTGRES_DB, database.is_none()),
                (POSTGRES_USER, user.is_none()),
                (POSTGRES_PASSWORD, password.is_none()),
            ]
            .into_iter()
            .filter(|(_, missing)| *missing)
            .map(|(name, _)| name.to_string())
            .collect();
            Err(ToolError::MissingEnv { names })
        }
    }
}

fn seconds<F>(lookup: &F, name: &str, default: Duration) -> Result<Duration, ToolError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };

    let invalid = |reason: &str| ToolError::InvalidEnv {
        name: name.to_string(),
        value: raw.clone(),
        reason: reason.to_string(),
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("expected a number of seconds"))?;

    Duration::try_from_secs_f64(value).map_err(|_| invalid("must be a finite, non-negative number"))
}

/// Interprets an environment flag: `1`, `true`, `yes` and `on` are true,
/// case-insensitively; anything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

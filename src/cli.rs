//! Command-line definitions for both binaries.

use clap::Parser;
use std::path::PathBuf;

/// Where `prune-requirements` writes its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl std::str::FromStr for OutputTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("Output path must not be empty; use '-' for stdout".to_string()),
            "-" => Ok(OutputTarget::Stdout),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

/// Prune requirements by removing packages present in a base list
/// (ignoring versions, extras and markers)
#[derive(Parser, Debug)]
#[command(name = "prune-requirements")]
#[command(version)]
#[command(
    about = "Prune requirements by removing packages present in base list (ignoring versions/extras/markers)",
    long_about = None
)]
pub struct PruneArgs {
    /// Path to base/common requirements (e.g., base-requirements.txt)
    #[arg(long, value_name = "PATH")]
    pub base: PathBuf,

    /// Path to input requirements.txt
    #[arg(long, value_name = "PATH")]
    pub req: PathBuf,

    /// Output file, or '-' for stdout
    #[arg(long, value_name = "PATH", default_value = "-")]
    pub out: OutputTarget,
}

impl PruneArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

const WAIT_LONG_ABOUT: &str = "\
Wait for PostgreSQL to become reachable.

Configured entirely through the environment:
  POSTGRES_HOST, POSTGRES_DB,
  POSTGRES_USER, POSTGRES_PASSWORD   required unless DATABASE_URL is set
  POSTGRES_PORT=5432
  DATABASE_URL                       used verbatim when set
  PGSSLMODE                          disable, allow, prefer (default), require,
                                     verify-ca or verify-full
  PGSSLROOTCERT                      PEM file of trusted roots for verify-*
                                     (default: bundled Mozilla roots)
  WAIT_TIMEOUT=60                    total seconds before giving up
  WAIT_INTERVAL=1                    seconds between attempts
  WAIT_BACKOFF=false                 grow the interval 1.5x per failure, up to 5s
  PGCONNECT_TIMEOUT=2                seconds per attempt

Exit codes:
  0    database reachable
  1    other error
  2    misconfiguration
  124  timeout
  143  terminated by signal";

/// Wait for PostgreSQL to become reachable
#[derive(Parser, Debug)]
#[command(name = "wait-for-db")]
#[command(version)]
#[command(about = "Wait for PostgreSQL to become reachable", long_about = WAIT_LONG_ABOUT)]
pub struct WaitArgs {}

impl WaitArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

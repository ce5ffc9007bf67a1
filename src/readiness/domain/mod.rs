pub mod backoff;
pub mod connection_target;
pub mod probe_failure;
pub mod ssl_mode;
pub mod wait_outcome;

pub use backoff::{Backoff, BACKOFF_FACTOR, MAX_BACKOFF_INTERVAL};
pub use connection_target::{ConnectionComponents, ConnectionTarget, DEFAULT_PORT};
pub use probe_failure::ProbeFailure;
pub use ssl_mode::{negotiable_connection_string, CertificateCheck, SslMode, TlsSettings};
pub use wait_outcome::WaitOutcome;

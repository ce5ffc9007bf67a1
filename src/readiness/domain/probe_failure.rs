use std::fmt;

/// Coarse class of a failed readiness attempt
///
/// Only the class is shown to users; driver messages are logged at debug
/// level so a normal startup race produces one short line per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// The attempt did not finish within the per-attempt timeout
    Timeout,
    /// Socket-level failure, named after the I/O error kind
    Io(String),
    /// The server answered with an error; carries the SQLSTATE code
    Server(String),
    /// The connection was closed before the query completed
    ConnectionClosed,
    /// The TLS handshake failed (untrusted certificate, wrong host name)
    Tls,
    /// The connection settings were rejected before any connection was made
    Config,
    /// Anything the driver reports without more detail
    Other,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Timeout => write!(f, "Timeout"),
            ProbeFailure::Io(kind) => write!(f, "{}", kind),
            ProbeFailure::Server(code) => write!(f, "DbError({})", code),
            ProbeFailure::ConnectionClosed => write!(f, "ConnectionClosed"),
            ProbeFailure::Tls => write!(f, "TlsError"),
            ProbeFailure::Config => write!(f, "ConfigError"),
            ProbeFailure::Other => write!(f, "Error"),
        }
    }
}

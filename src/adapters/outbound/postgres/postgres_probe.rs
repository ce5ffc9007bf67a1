use super::tls::make_connector;
use crate::ports::outbound::DatabaseProbe;
use crate::readiness::domain::{
    negotiable_connection_string, ConnectionTarget, ProbeFailure, SslMode, TlsSettings,
};
use async_trait::async_trait;
use std::error::Error as _;
use std::str::FromStr;
use std::time::Duration;
use tokio_postgres::config::SslMode as DriverSslMode;
use tokio_postgres::Config;
use tokio_postgres_rustls::MakeRustlsConnect;

const VALIDATION_QUERY: &str = "SELECT 1";

/// PostgresProbe adapter checking readiness with tokio-postgres
///
/// Each probe opens a fresh connection, runs `SELECT 1` and closes the
/// connection again. TLS goes through rustls and follows the libpq
/// `sslmode` semantics, `verify-ca` and `verify-full` included.
///
/// Connection settings the driver rejects do not end the wait: every
/// attempt reports them as [`ProbeFailure::Config`] until the deadline.
pub struct PostgresProbe {
    session: Result<Session, ProbeFailure>,
}

/// Driver configuration and TLS connector shared by all attempts
struct Session {
    config: Config,
    ssl_mode: SslMode,
    tls: MakeRustlsConnect,
}

impl PostgresProbe {
    pub fn new(target: &ConnectionTarget, tls: &TlsSettings) -> Self {
        let session = Session::prepare(&target.dsn(), tls).map_err(|details| {
            tracing::warn!(dsn = %target.redacted(), %details, "connection settings rejected");
            ProbeFailure::Config
        });

        Self { session }
    }

    /// Effective libpq `sslmode`, or `None` when the settings were rejected
    pub fn ssl_mode(&self) -> Option<SslMode> {
        self.session.as_ref().ok().map(|session| session.ssl_mode)
    }
}

impl Session {
    fn prepare(dsn: &str, tls: &TlsSettings) -> Result<Self, String> {
        let (dsn, dsn_mode) = negotiable_connection_string(dsn);
        let ssl_mode = match dsn_mode {
            Some(mode) => mode,
            None => match tls.default_mode.as_deref() {
                Some(raw) => raw.parse::<SslMode>()?,
                None => SslMode::Prefer,
            },
        };

        let mut config =
            Config::from_str(&dsn).map_err(|e| format!("invalid connection string: {}", e))?;
        config.ssl_mode(match ssl_mode.negotiated() {
            SslMode::Disable => DriverSslMode::Disable,
            SslMode::Require => DriverSslMode::Require,
            _ => DriverSslMode::Prefer,
        });

        let tls = make_connector(ssl_mode.certificate_check(), tls.root_cert.as_deref())?;

        Ok(Self {
            config,
            ssl_mode,
            tls,
        })
    }

    async fn connect_and_query(&self) -> Result<(), tokio_postgres::Error> {
        let (client, connection) = self.config.connect(self.tls.clone()).await?;

        // Drive the connection in the background
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::debug!("postgres connection error: {e}");
            }
        });

        let result = client.query_one(VALIDATION_QUERY, &[]).await.map(|_| ());

        // Dropping the client terminates the session and ends the driver task
        drop(client);
        let _ = driver.await;

        result
    }
}

#[async_trait]
impl DatabaseProbe for PostgresProbe {
    async fn probe(&self, timeout: Duration) -> Result<(), ProbeFailure> {
        let session = self.session.as_ref().map_err(Clone::clone)?;

        match tokio::time::timeout(timeout, session.connect_and_query()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                tracing::debug!(error = %e, "readiness attempt failed");
                Err(classify(&e))
            }
            Err(_) => {
                tracing::debug!(?timeout, "readiness attempt timed out");
                Err(ProbeFailure::Timeout)
            }
        }
    }
}

fn classify(error: &tokio_postgres::Error) -> ProbeFailure {
    if let Some(db_error) = error.as_db_error() {
        return ProbeFailure::Server(db_error.code().code().to_string());
    }
    if error.is_closed() {
        return ProbeFailure::ConnectionClosed;
    }

    let mut source = error.source();
    while let Some(cause) = source {
        if cause.downcast_ref::<rustls::Error>().is_some() {
            return ProbeFailure::Tls;
        }
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            // The TLS stream reports handshake failures wrapped in io::Error
            let tls_failure = io_error
                .get_ref()
                .is_some_and(|inner| inner.downcast_ref::<rustls::Error>().is_some());
            if tls_failure {
                return ProbeFailure::Tls;
            }
            return ProbeFailure::Io(format!("{:?}", io_error.kind()));
        }
        source = cause.source();
    }

    ProbeFailure::Other
}

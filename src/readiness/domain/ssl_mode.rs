use regex::{Captures, Regex};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

static SSL_MODE_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[?&\s])sslmode\s*=\s*('[^']*'|[^&#\s]*)").unwrap()
});

/// libpq `sslmode` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SslMode {
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

/// How much of the server certificate is checked during the TLS handshake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateCheck {
    /// Any certificate is accepted; the session is encrypted only
    None,
    /// The chain must end in a trusted root
    Chain,
    /// The chain must be trusted and the certificate must name the host
    ChainAndHostname,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }

    /// The closest of the three negotiation modes the driver understands
    /// (`disable`, `prefer`, `require`)
    ///
    /// `allow` is negotiated like `prefer`. The `verify-*` modes require
    /// TLS and move their checks to [`SslMode::certificate_check`].
    pub fn negotiated(&self) -> SslMode {
        match self {
            SslMode::Disable => SslMode::Disable,
            SslMode::Allow | SslMode::Prefer => SslMode::Prefer,
            SslMode::Require | SslMode::VerifyCa | SslMode::VerifyFull => SslMode::Require,
        }
    }

    pub fn certificate_check(&self) -> CertificateCheck {
        match self {
            SslMode::VerifyCa => CertificateCheck::Chain,
            SslMode::VerifyFull => CertificateCheck::ChainAndHostname,
            _ => CertificateCheck::None,
        }
    }
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            _ => Err(format!(
                "invalid sslmode {:?}: expected disable, allow, prefer, require, verify-ca or verify-full",
                s
            )),
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// TLS settings that apply on top of the connection string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsSettings {
    /// `PGSSLMODE`, used when the connection string names no `sslmode`
    pub default_mode: Option<String>,
    /// `PGSSLROOTCERT`: PEM bundle of trusted roots for the `verify-*` modes
    pub root_cert: Option<PathBuf>,
}

/// Rewrites every recognized `sslmode` parameter of a connection string to
/// its negotiated form and returns the last one found.
///
/// Both URL query parameters (`?sslmode=verify-full`) and key/value pairs
/// (`sslmode='require'`) are handled. Unknown values are left untouched so
/// the driver reports them.
pub fn negotiable_connection_string(dsn: &str) -> (String, Option<SslMode>) {
    let mut found = None;
    let rewritten = SSL_MODE_PARAMETER.replace_all(dsn, |caps: &Captures<'_>| {
        match caps[2].trim_matches('\'').parse::<SslMode>() {
            Ok(mode) => {
                found = Some(mode);
                format!("{}sslmode={}", &caps[1], mode.negotiated())
            }
            Err(_) => caps[0].to_string(),
        }
    });

    (rewritten.into_owned(), found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_libpq_mode() {
        for mode in [
            SslMode::Disable,
            SslMode::Allow,
            SslMode::Prefer,
            SslMode::Require,
            SslMode::VerifyCa,
            SslMode::VerifyFull,
        ] {
            assert_eq!(mode.as_str().parse::<SslMode>(), Ok(mode));
        }
        assert!("sometimes".parse::<SslMode>().is_err());
        assert!("REQUIRE".parse::<SslMode>().is_err());
    }

    #[test]
    fn test_negotiated_modes() {
        assert_eq!(SslMode::Disable.negotiated(), SslMode::Disable);
        assert_eq!(SslMode::Allow.negotiated(), SslMode::Prefer);
        assert_eq!(SslMode::Prefer.negotiated(), SslMode::Prefer);
        assert_eq!(SslMode::Require.negotiated(), SslMode::Require);
        assert_eq!(SslMode::VerifyCa.negotiated(), SslMode::Require);
        assert_eq!(SslMode::VerifyFull.negotiated(), SslMode::Require);
    }

    #[test]
    fn test_certificate_checks() {
        assert_eq!(SslMode::Require.certificate_check(), CertificateCheck::None);
        assert_eq!(SslMode::VerifyCa.certificate_check(), CertificateCheck::Chain);
        assert_eq!(
            SslMode::VerifyFull.certificate_check(),
            CertificateCheck::ChainAndHostname
        );
    }

    #[test]
    fn test_rewrite_url_parameter() {
        let (dsn, mode) =
            negotiable_connection_string("postgresql://u:pw@db:5432/app?sslmode=verify-full");
        assert_eq!(dsn, "postgresql://u:pw@db:5432/app?sslmode=require");
        assert_eq!(mode, Some(SslMode::VerifyFull));

        let (dsn, mode) =
            negotiable_connection_string("postgresql://db/app?application_name=x&sslmode=allow");
        assert_eq!(dsn, "postgresql://db/app?application_name=x&sslmode=prefer");
        assert_eq!(mode, Some(SslMode::Allow));
    }

    #[test]
    fn test_rewrite_key_value_parameter() {
        let (dsn, mode) = negotiable_connection_string("host=db sslmode='verify-ca' user=u");
        assert_eq!(dsn, "host=db sslmode=require user=u");
        assert_eq!(mode, Some(SslMode::VerifyCa));

        let (dsn, mode) = negotiable_connection_string("sslmode=disable host=db");
        assert_eq!(dsn, "sslmode=disable host=db");
        assert_eq!(mode, Some(SslMode::Disable));
    }

    #[test]
    fn test_rewrite_leaves_unknown_and_missing_modes() {
        let url = "postgresql://db/app?sslmode=sometimes";
        assert_eq!(negotiable_connection_string(url), (url.to_string(), None));

        let url = "postgresql://db/app?nosslmode=1";
        assert_eq!(negotiable_connection_string(url), (url.to_string(), None));
    }
}

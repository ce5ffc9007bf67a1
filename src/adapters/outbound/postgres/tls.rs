use crate::readiness::domain::CertificateCheck;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::client::verify_server_cert_signed_by_trust_anchor;
use rustls::crypto::{self, WebPkiSupportedAlgorithms};
use rustls::pki_types::pem::PemObject;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::server::ParsedCertificate;
use rustls::{ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme};
use std::path::Path;
use std::sync::Arc;
use tokio_postgres_rustls::MakeRustlsConnect;

/// `PGSSLROOTCERT` value selecting the bundled roots explicitly
pub const SYSTEM_ROOTS: &str = "system";

/// Builds the rustls connector for one certificate policy
///
/// Root certificates are only loaded when the policy verifies the chain.
/// Without `root_cert` (or with `system`) the bundled Mozilla roots are used.
pub fn make_connector(
    check: CertificateCheck,
    root_cert: Option<&Path>,
) -> Result<MakeRustlsConnect, String> {
    let provider = Arc::new(crypto::ring::default_provider());
    let algorithms = provider.signature_verification_algorithms;
    let builder = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| format!("TLS setup failed: {}", e))?;

    let config = match check {
        CertificateCheck::ChainAndHostname => builder
            .with_root_certificates(load_roots(root_cert)?)
            .with_no_client_auth(),
        CertificateCheck::Chain => builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(PostgresCertVerifier {
                roots: Some(Arc::new(load_roots(root_cert)?)),
                algorithms,
            }))
            .with_no_client_auth(),
        CertificateCheck::None => builder
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(PostgresCertVerifier {
                roots: None,
                algorithms,
            }))
            .with_no_client_auth(),
    };

    Ok(MakeRustlsConnect::new(config))
}

fn load_roots(root_cert: Option<&Path>) -> Result<RootCertStore, String> {
    let Some(path) = root_cert.filter(|p| *p != Path::new(SYSTEM_ROOTS)) else {
        return Ok(RootCertStore {
            roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
        });
    };

    let certs = CertificateDer::pem_file_iter(path)
        .and_then(|certs| certs.collect::<Result<Vec<_>, _>>())
        .map_err(|e| {
            format!(
                "cannot load root certificates from {}: {:?}",
                path.display(),
                e
            )
        })?;

    let mut roots = RootCertStore::empty();
    let (added, _ignored) = roots.add_parsable_certificates(certs);
    if added == 0 {
        return Err(format!(
            "no usable root certificates in {}",
            path.display()
        ));
    }
    Ok(roots)
}

/// Server certificate check for `prefer`, `require` and `verify-ca`
///
/// The host name is never compared. With `roots` set the chain must end in
/// one of them; without it any certificate is accepted. Handshake signatures
/// are always verified.
#[derive(Debug)]
struct PostgresCertVerifier {
    roots: Option<Arc<RootCertStore>>,
    algorithms: WebPkiSupportedAlgorithms,
}

impl ServerCertVerifier for PostgresCertVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        if let Some(roots) = &self.roots {
            let cert = ParsedCertificate::try_from(end_entity)?;
            verify_server_cert_signed_by_trust_anchor(
                &cert,
                roots,
                intermediates,
                now,
                self.algorithms.all,
            )?;
        }
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        crypto::verify_tls12_signature(message, cert, dss, &self.algorithms)
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        crypto::verify_tls13_signature(message, cert, dss, &self.algorithms)
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.algorithms.supported_schemes()
    }
}

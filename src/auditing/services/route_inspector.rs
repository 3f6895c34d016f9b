use crate::auditing::domain::{TerminationMode, TlsConfig};
use crate::auditing::services::certificate_matcher::{host_matches, key_matches};
use crate::auditing::services::certificate_parser::parse_certificate;
use crate::shared::error::AuditError;

/// A per-route problem encountered while inspecting TLS material.
///
/// Issues are returned as values instead of being logged here, so the
/// orchestrating use case owns the log-and-continue decision.
#[derive(Debug)]
pub enum TlsIssue {
    /// The embedded certificate could not be decoded.
    CertificateUnreadable(AuditError),
    /// The key/certificate pairing could not be evaluated.
    KeyPairingUnverifiable(AuditError),
}

/// Outcome of inspecting one route's TLS declaration.
#[derive(Debug)]
pub struct TlsInspection {
    pub tls: TlsConfig,
    pub issues: Vec<TlsIssue>,
}

/// Inspects the TLS block of a route against its host.
///
/// Pure and side-effect free. Any parse or match failure degrades the
/// affected optional fields to absent and surfaces as an issue value; one
/// bad certificate never turns into an error for the whole route. The host
/// match is computed only when a certificate was supplied and parsed; the
/// key match additionally requires a key. Passthrough routes legitimately
/// carry neither.
pub fn inspect_tls(
    host: &str,
    termination: TerminationMode,
    certificate_pem: Option<&str>,
    key_pem: Option<&str>,
) -> TlsInspection {
    let mut issues = Vec::new();
    let mut certificate_info = None;
    let mut host_match = None;
    let mut key_match = None;

    if let Some(cert_pem) = certificate_pem {
        match parse_certificate(cert_pem) {
            Ok(identity) => {
                host_match = Some(host_matches(host, &identity));
                if let Some(key_pem) = key_pem {
                    match key_matches(cert_pem, key_pem) {
                        Ok(matches) => key_match = Some(matches),
                        Err(cause) => issues.push(TlsIssue::KeyPairingUnverifiable(cause)),
                    }
                }
                certificate_info = Some(identity);
            }
            Err(cause) => issues.push(TlsIssue::CertificateUnreadable(cause)),
        }
    }

    TlsInspection {
        tls: TlsConfig {
            termination,
            certificate_info,
            host_matches_certificate: host_match,
            private_key_matches_certificate: key_match,
        },
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcgen::{
        string::Ia5String, CertificateParams, DistinguishedName, DnType, DnValue, KeyPair, SanType,
    };

    fn generate(common_name: &str, dns_sans: &[&str]) -> (String, String) {
        let mut params = CertificateParams::default();
        let mut dn = DistinguishedName::new();
        dn.push(
            DnType::CommonName,
            DnValue::Utf8String(common_name.to_string()),
        );
        params.distinguished_name = dn;
        params.subject_alt_names = dns_sans
            .iter()
            .map(|san| SanType::DnsName(Ia5String::try_from(san.to_string()).unwrap()))
            .collect();

        let key_pair = KeyPair::generate().unwrap();
        let cert = params.self_signed(&key_pair).unwrap();
        (cert.pem(), key_pair.serialize_pem())
    }

    #[test]
    fn passthrough_without_material_yields_all_absent() {
        let inspection = inspect_tls("app.example.com", TerminationMode::Passthrough, None, None);

        assert_eq!(inspection.tls.termination, TerminationMode::Passthrough);
        assert!(inspection.tls.certificate_info.is_none());
        assert!(inspection.tls.host_matches_certificate.is_none());
        assert!(inspection.tls.private_key_matches_certificate.is_none());
        assert!(inspection.issues.is_empty());
    }

    #[test]
    fn matching_material_yields_both_matches_true() {
        let (cert_pem, key_pem) = generate("app.example.com", &["app.example.com"]);
        let inspection = inspect_tls(
            "app.example.com",
            TerminationMode::Edge,
            Some(&cert_pem),
            Some(&key_pem),
        );

        assert!(inspection.tls.certificate_info.is_some());
        assert_eq!(inspection.tls.host_matches_certificate, Some(true));
        assert_eq!(inspection.tls.private_key_matches_certificate, Some(true));
        assert!(inspection.issues.is_empty());
    }

    #[test]
    fn certificate_without_key_leaves_key_match_absent() {
        let (cert_pem, _) = generate("app.example.com", &[]);
        let inspection = inspect_tls(
            "app.example.com",
            TerminationMode::Edge,
            Some(&cert_pem),
            None,
        );

        assert_eq!(inspection.tls.host_matches_certificate, Some(true));
        assert!(inspection.tls.private_key_matches_certificate.is_none());
    }

    #[test]
    fn unreadable_certificate_degrades_all_derived_fields() {
        let inspection = inspect_tls(
            "app.example.com",
            TerminationMode::Edge,
            Some("not a certificate"),
            Some("not a key"),
        );

        assert!(inspection.tls.certificate_info.is_none());
        assert!(inspection.tls.host_matches_certificate.is_none());
        assert!(inspection.tls.private_key_matches_certificate.is_none());
        assert!(matches!(
            inspection.issues.as_slice(),
            [TlsIssue::CertificateUnreadable(_)]
        ));
    }

    #[test]
    fn unreadable_key_degrades_only_the_key_match() {
        let (cert_pem, _) = generate("app.example.com", &[]);
        let inspection = inspect_tls(
            "app.example.com",
            TerminationMode::Reencrypt,
            Some(&cert_pem),
            Some("not a key"),
        );

        assert!(inspection.tls.certificate_info.is_some());
        assert_eq!(inspection.tls.host_matches_certificate, Some(true));
        assert!(inspection.tls.private_key_matches_certificate.is_none());
        assert!(matches!(
            inspection.issues.as_slice(),
            [TlsIssue::KeyPairingUnverifiable(_)]
        ));
    }

    #[test]
    fn wrong_key_is_a_conclusive_mismatch_not_an_issue() {
        let (cert_pem, _) = generate("app.example.com", &[]);
        let (_, other_key) = generate("other.example.com", &[]);
        let inspection = inspect_tls(
            "app.example.com",
            TerminationMode::Edge,
            Some(&cert_pem),
            Some(&other_key),
        );

        assert_eq!(inspection.tls.private_key_matches_certificate, Some(false));
        assert!(inspection.issues.is_empty());
    }
}

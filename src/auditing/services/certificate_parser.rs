use sha2::{Digest, Sha256};
use x509_parser::extensions::GeneralName;
use x509_parser::pem::parse_x509_pem;
use x509_parser::prelude::*;

use crate::auditing::domain::CertificateIdentity;
use crate::shared::error::AuditError;

/// Decodes one PEM-encoded X.509 certificate into an identity record.
///
/// Decoding is all-or-nothing: malformed base64, PEM markers, or DER all
/// fail with a decode error and never yield a partially populated record.
///
/// The fingerprint is a SHA-256 digest over the certificate's DER bytes,
/// rendered as uppercase colon-separated hex. The serial number uses the
/// colon-separated hex form x509-parser produces for raw serials, so both
/// values are stable across repeated runs on identical input.
pub fn parse_certificate(pem: &str) -> std::result::Result<CertificateIdentity, AuditError> {
    let (_, pem_block) = parse_x509_pem(pem.as_bytes()).map_err(|e| {
        AuditError::CertificateDecode {
            details: e.to_string(),
        }
    })?;

    let (_, cert) =
        X509Certificate::from_der(&pem_block.contents).map_err(|e| AuditError::CertificateDecode {
            details: e.to_string(),
        })?;

    let subject_common_name = cert
        .subject()
        .iter_common_name()
        .next()
        .and_then(|attribute| attribute.as_str().ok())
        .map(str::to_string);

    let valid_from = chrono::DateTime::from_timestamp(cert.validity().not_before.timestamp(), 0)
        .ok_or_else(|| AuditError::CertificateDecode {
            details: "notBefore timestamp out of range".to_string(),
        })?;
    let valid_to = chrono::DateTime::from_timestamp(cert.validity().not_after.timestamp(), 0)
        .ok_or_else(|| AuditError::CertificateDecode {
            details: "notAfter timestamp out of range".to_string(),
        })?;

    let subject_alt_names = match cert.subject_alternative_name() {
        Ok(Some(extension)) => Some(
            extension
                .value
                .general_names
                .iter()
                .map(format_general_name)
                .collect(),
        ),
        Ok(None) => None,
        Err(e) => {
            return Err(AuditError::CertificateDecode {
                details: format!("malformed subjectAltName extension: {}", e),
            });
        }
    };

    Ok(CertificateIdentity {
        subject: cert.subject().to_string(),
        issuer: cert.issuer().to_string(),
        subject_common_name,
        valid_from,
        valid_to,
        serial_number: cert.raw_serial_as_string(),
        fingerprint: fingerprint_sha256(&pem_block.contents),
        subject_alt_names,
    })
}

/// SHA-256 over DER, uppercase hex pairs joined by colons.
fn fingerprint_sha256(der: &[u8]) -> String {
    Sha256::digest(der)
        .iter()
        .map(|byte| format!("{:02X}", byte))
        .collect::<Vec<_>>()
        .join(":")
}

/// Renders a SAN entry with its type tag, `TYPE:value`.
fn format_general_name(name: &GeneralName) -> String {
    match name {
        GeneralName::DNSName(dns) => format!("DNS:{}", dns),
        GeneralName::IPAddress(bytes) => format!("IP:{}", format_ip_address(*bytes)),
        GeneralName::RFC822Name(email) => format!("EMAIL:{}", email),
        GeneralName::URI(uri) => format!("URI:{}", uri),
        _ => "OTHER:unsupported".to_string(),
    }
}

fn format_ip_address(bytes: &[u8]) -> String {
    match bytes.len() {
        4 => std::net::Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]).to_string(),
        16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            std::net::Ipv6Addr::from(octets).to_string()
        }
        _ => "invalid".to_string(),
    }
}

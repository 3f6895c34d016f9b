use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity record extracted from a single X.509 certificate.
///
/// Constructed only from a successfully decoded PEM certificate; there is
/// no partially populated variant. Snapshots are immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateIdentity {
    /// Subject distinguished name, e.g. `CN=app.example.com, O=Example`
    pub subject: String,
    /// Issuer distinguished name
    pub issuer: String,
    /// Common Name attribute of the subject, extracted as a structured
    /// attribute (never via substring scanning of the DN string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_common_name: Option<String>,
    /// Start of the validity window
    pub valid_from: DateTime<Utc>,
    /// End of the validity window
    pub valid_to: DateTime<Utc>,
    /// Serial number in the colon-separated hex form produced by x509-parser
    pub serial_number: String,
    /// SHA-256 digest over the DER bytes, uppercase colon-separated hex.
    /// The algorithm is fixed so fingerprints are comparable across runs.
    pub fingerprint: String,
    /// Subject Alternative Name entries as `TYPE:value` strings
    /// (e.g. `DNS:*.example.com`). `None` when the certificate carries no
    /// SAN extension; never an empty-but-present list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_alt_names: Option<Vec<String>>,
}

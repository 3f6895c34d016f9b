use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::certificate::CertificateIdentity;

/// TLS termination mode of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TerminationMode {
    /// TLS ends at the router
    Edge,
    /// TLS is passed through to the backend untouched
    Passthrough,
    /// TLS ends at the router and is re-established to the backend
    Reencrypt,
}

impl fmt::Display for TerminationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationMode::Edge => write!(f, "edge"),
            TerminationMode::Passthrough => write!(f, "passthrough"),
            TerminationMode::Reencrypt => write!(f, "reencrypt"),
        }
    }
}

/// Result of auditing the TLS declaration of a single route.
///
/// The two match fields are present only when the inputs needed to compute
/// them were supplied and parseable. `None` means "not applicable" and is
/// distinct from an explicit `Some(false)` mismatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsConfig {
    pub termination: TerminationMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_info: Option<CertificateIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_matches_certificate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_matches_certificate: Option<bool>,
}

/// Immutable snapshot of one OpenShift route, built fresh per audit run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub name: String,
    pub namespace: String,
    /// The single authoritative string matched against certificate identities.
    pub host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Name of the backing service
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsConfig>,
}

use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - audit completed and output was rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (cluster API error, bad configuration, render failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for cluster auditing.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A PEM-encoded certificate could not be decoded into an identity record.
    #[error("failed to decode certificate: {details}")]
    CertificateDecode { details: String },

    /// A PEM-encoded private key could not be decoded.
    #[error("failed to decode private key: {details}")]
    PrivateKeyDecode { details: String },

    /// The key/certificate pairing could not be evaluated at all.
    /// Distinct from a conclusive mismatch, which is reported as `Ok(false)`.
    #[error("cannot evaluate key pairing: {details}")]
    KeyPairingUnverifiable { details: String },

    /// A namespace-scoped listing call failed.
    #[error("failed to list {kind} in namespace {namespace}: {details}\n\n💡 Hint: Verify the token has permission to list {kind} in that namespace")]
    NamespaceList {
        kind: &'static str,
        namespace: String,
        details: String,
    },

    /// Every requested namespace failed to list.
    #[error("no namespace could be audited: {details}")]
    AllNamespacesFailed { details: String },

    /// The cluster client could not be configured.
    #[error("failed to configure cluster client: {details}\n\n💡 Hint: Pass --server together with --token, or run with a valid kubeconfig")]
    ClientConfig { details: String },

    /// No namespaces were supplied via flags or config file.
    #[error("no namespaces specified\n\n💡 Hint: Pass --namespaces ns1,ns2 or set 'namespaces' in cluster-audit.config.yml")]
    NoNamespaces,

    /// Rendering the audit report failed.
    #[error("failed to render {format} output: {details}")]
    Render { format: String, details: String },

    /// Configuration file could not be read or validated.
    #[error("invalid configuration: {details}\n\n💡 Hint: Check cluster-audit.config.yml for syntax errors")]
    Config { details: String },
}

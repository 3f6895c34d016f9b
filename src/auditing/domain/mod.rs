/// Domain entities - immutable, read-only snapshots built per audit run.
pub mod certificate;
pub mod route;
pub mod workload;

pub use certificate::CertificateIdentity;
pub use route::{RouteRecord, TerminationMode, TlsConfig};
pub use workload::{MetricsConfig, WorkloadKind, WorkloadRecord};

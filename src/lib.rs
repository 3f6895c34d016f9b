//! cluster-audit - read-only audits for OpenShift routes and Kubernetes
//! workloads
//!
//! This library lists OpenShift Routes and Kubernetes
//! Deployments/StatefulSets across namespaces and reports whether route
//! TLS certificates match their hosts and keys, and whether workloads are
//! annotated for Prometheus scraping.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Auditing Core** (`auditing`): Domain entities and pure services
//!   (certificate parsing, host/key matching, annotation extraction)
//! - **Application Layer** (`application`): Use cases owning the
//!   per-namespace aggregation policies
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Cluster API, console, and renderer
//!   implementations of the ports
//! - **Shared** (`shared`): Common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use cluster_audit::prelude::*;
//!
//! # async fn run() -> cluster_audit::shared::Result<()> {
//! let client = create_client(&ClusterConnectOptions::default()).await?;
//!
//! let use_case = AuditRouteCertificatesUseCase::new(
//!     KubeRouteLister::new(client),
//!     StderrProgressReporter::new(),
//! );
//! let routes = use_case
//!     .execute(RouteAuditRequest::new(vec!["prod".to_string()], false))
//!     .await?;
//!
//! let report = JsonRenderer::new().render_routes(&routes)?;
//! StdoutPresenter::new().present(&report)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod auditing;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::kube::{
        create_client, ClusterConnectOptions, KubeRouteLister, KubeWorkloadLister,
    };
    pub use crate::adapters::outbound::renderers::{CsvRenderer, JsonRenderer, TableRenderer};
    pub use crate::application::dto::{RouteAuditRequest, WorkloadAuditRequest};
    pub use crate::application::use_cases::{
        AuditRouteCertificatesUseCase, AuditWorkloadMetricsUseCase,
    };
    pub use crate::auditing::domain::{
        CertificateIdentity, MetricsConfig, RouteRecord, TerminationMode, TlsConfig, WorkloadKind,
        WorkloadRecord,
    };
    pub use crate::auditing::services::{
        extract_metrics_config, host_matches, inspect_tls, key_matches, parse_certificate,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportRenderer, Route, RouteLister, RoutePort,
        RouteSpec, RouteTargetReference, RouteTlsSpec, TargetPort, WorkloadLister,
    };
    pub use crate::shared::Result;
}

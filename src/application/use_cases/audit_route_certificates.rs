use crate::application::dto::RouteAuditRequest;
use crate::auditing::domain::RouteRecord;
use crate::auditing::services::route_inspector::{inspect_tls, TlsIssue};
use crate::ports::outbound::{ProgressReporter, Route, RouteLister};
use crate::shared::error::AuditError;
use crate::shared::Result;

/// AuditRouteCertificatesUseCase - lists routes across namespaces and
/// checks each route's TLS material against its host.
///
/// Aggregation policy: namespaces are visited sequentially in input order.
/// A namespace whose listing call fails is recorded and skipped; the rest
/// continue. Only when *every* namespace fails does the audit itself fail,
/// with a message joining all per-namespace causes. Partial success is
/// success. Output preserves namespace-then-discovery order.
///
/// Per-route problems (unreadable certificate, unverifiable key pairing)
/// degrade that route's optional fields and are narrated through the
/// progress reporter; they never abort the batch.
///
/// # Type Parameters
/// * `RL` - RouteLister implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditRouteCertificatesUseCase<RL, PR> {
    route_lister: RL,
    progress_reporter: PR,
}

impl<RL, PR> AuditRouteCertificatesUseCase<RL, PR>
where
    RL: RouteLister,
    PR: ProgressReporter,
{
    /// Creates the use case with injected dependencies
    pub fn new(route_lister: RL, progress_reporter: PR) -> Self {
        Self {
            route_lister,
            progress_reporter,
        }
    }

    /// Executes the route certificate audit
    ///
    /// # Panics
    /// Panics if the request carries an empty namespace list; the CLI
    /// surface makes that unrepresentable.
    pub async fn execute(&self, request: RouteAuditRequest) -> Result<Vec<RouteRecord>> {
        assert!(
            !request.namespaces.is_empty(),
            "namespace list must not be empty"
        );

        let total = request.namespaces.len();
        let mut records = Vec::new();
        let mut failures: Vec<String> = Vec::new();
        let mut succeeded = 0usize;

        for (index, namespace) in request.namespaces.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(namespace.as_str()));

            match self.route_lister.list_routes(namespace).await {
                Ok(routes) => {
                    succeeded += 1;
                    records.extend(routes.into_iter().map(|route| self.audit_route(route)));
                }
                Err(cause) => {
                    let message = format!(
                        "Failed to get routes from namespace {}: {}",
                        namespace, cause
                    );
                    self.progress_reporter.report_error(&message);
                    failures.push(message);
                }
            }
        }

        if succeeded == 0 {
            return Err(AuditError::AllNamespacesFailed {
                details: failures.join("; "),
            }
            .into());
        }

        if request.filter_no_cert {
            records.retain(|record| {
                record
                    .tls
                    .as_ref()
                    .is_some_and(|tls| tls.certificate_info.is_some())
            });
        }

        Ok(records)
    }

    /// Maps one raw route to an audited record, narrating degraded fields.
    fn audit_route(&self, route: Route) -> RouteRecord {
        let name = route.metadata.name.clone().unwrap_or_default();
        let namespace = route.metadata.namespace.clone().unwrap_or_default();
        let spec = route.spec;

        let tls = spec.tls.as_ref().map(|tls_spec| {
            let inspection = inspect_tls(
                &spec.host,
                tls_spec.termination,
                tls_spec.certificate.as_deref(),
                tls_spec.key.as_deref(),
            );
            for issue in &inspection.issues {
                match issue {
                    TlsIssue::CertificateUnreadable(cause) => {
                        self.progress_reporter.report_error(&format!(
                            "Failed to parse certificate for route {}/{}: {}",
                            namespace, name, cause
                        ));
                    }
                    TlsIssue::KeyPairingUnverifiable(cause) => {
                        self.progress_reporter.report_error(&format!(
                            "Failed to validate private key for route {}/{}: {}",
                            namespace, name, cause
                        ));
                    }
                }
            }
            inspection.tls
        });

        RouteRecord {
            name,
            namespace,
            host: spec.host,
            path: spec.path,
            service: spec.to.name,
            port: spec.port.map(|port| port.target_port.to_string()),
            tls,
        }
    }
}

use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};

use crate::application::dto::WorkloadAuditRequest;
use crate::auditing::domain::{WorkloadKind, WorkloadRecord};
use crate::auditing::services::extract_metrics_config;
use crate::ports::outbound::{ProgressReporter, WorkloadLister};
use crate::shared::error::AuditError;
use crate::shared::Result;

/// AuditWorkloadMetricsUseCase - lists Deployments and StatefulSets across
/// namespaces and reads their Prometheus scrape annotations.
///
/// Aggregation policy: fail-fast. Any single listing failure, for either
/// kind in any namespace, aborts the whole audit. This is deliberately
/// asymmetric with the route audit's partial-success tolerance and is kept
/// that way until the operational intent is confirmed.
///
/// # Type Parameters
/// * `WL` - WorkloadLister implementation
/// * `PR` - ProgressReporter implementation
pub struct AuditWorkloadMetricsUseCase<WL, PR> {
    workload_lister: WL,
    progress_reporter: PR,
}

impl<WL, PR> AuditWorkloadMetricsUseCase<WL, PR>
where
    WL: WorkloadLister,
    PR: ProgressReporter,
{
    /// Creates the use case with injected dependencies
    pub fn new(workload_lister: WL, progress_reporter: PR) -> Self {
        Self {
            workload_lister,
            progress_reporter,
        }
    }

    /// Executes the workload metrics audit
    ///
    /// # Panics
    /// Panics if the request carries an empty namespace list; the CLI
    /// surface makes that unrepresentable.
    pub async fn execute(&self, request: WorkloadAuditRequest) -> Result<Vec<WorkloadRecord>> {
        assert!(
            !request.namespaces.is_empty(),
            "namespace list must not be empty"
        );

        let total = request.namespaces.len();
        let selector = request.label_selector.as_deref();
        let mut records = Vec::new();

        for (index, namespace) in request.namespaces.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(namespace.as_str()));

            let deployments = self
                .workload_lister
                .list_deployments(namespace, selector)
                .await
                .map_err(|cause| AuditError::NamespaceList {
                    kind: "deployments",
                    namespace: namespace.clone(),
                    details: cause.to_string(),
                })?;
            let stateful_sets = self
                .workload_lister
                .list_stateful_sets(namespace, selector)
                .await
                .map_err(|cause| AuditError::NamespaceList {
                    kind: "statefulsets",
                    namespace: namespace.clone(),
                    details: cause.to_string(),
                })?;

            records.extend(deployments.into_iter().map(map_deployment));
            records.extend(stateful_sets.into_iter().map(map_stateful_set));
        }

        if request.only_no_metrics {
            records.retain(|record| {
                record
                    .metrics
                    .as_ref()
                    .is_none_or(|metrics| metrics.scrape_enabled.is_none())
            });
        }

        Ok(records)
    }
}

fn map_deployment(deployment: Deployment) -> WorkloadRecord {
    let annotations = deployment
        .spec
        .as_ref()
        .and_then(|spec| spec.template.metadata.as_ref())
        .and_then(|metadata| metadata.annotations.as_ref());
    let metrics = Some(extract_metrics_config(annotations));

    WorkloadRecord {
        name: deployment.metadata.name.clone().unwrap_or_default(),
        namespace: deployment.metadata.namespace.clone().unwrap_or_default(),
        kind: WorkloadKind::Deployment,
        replicas: deployment.spec.as_ref().and_then(|spec| spec.replicas),
        ready_replicas: deployment
            .status
            .as_ref()
            .and_then(|status| status.ready_replicas),
        created_at: deployment.metadata.creation_timestamp.map(|time| time.0),
        metrics,
    }
}

fn map_stateful_set(stateful_set: StatefulSet) -> WorkloadRecord {
    let annotations = stateful_set
        .spec
        .as_ref()
        .and_then(|spec| spec.template.metadata.as_ref())
        .and_then(|metadata| metadata.annotations.as_ref());
    let metrics = Some(extract_metrics_config(annotations));

    WorkloadRecord {
        name: stateful_set.metadata.name.clone().unwrap_or_default(),
        namespace: stateful_set.metadata.namespace.clone().unwrap_or_default(),
        kind: WorkloadKind::StatefulSet,
        replicas: stateful_set.spec.as_ref().and_then(|spec| spec.replicas),
        ready_replicas: stateful_set
            .status
            .as_ref()
            .and_then(|status| status.ready_replicas),
        created_at: stateful_set.metadata.creation_timestamp.map(|time| time.0),
        metrics,
    }
}

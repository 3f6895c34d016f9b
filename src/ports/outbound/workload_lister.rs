use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};

use crate::shared::Result;

/// WorkloadLister port - namespace-scoped listing of Deployments and
/// StatefulSets.
///
/// The two listing calls are deliberately separate operations so the use
/// case can issue them independently per namespace. An optional label
/// selector is forwarded verbatim to the API server.
///
/// # Errors
/// Each method returns an error when its listing call fails; the use case
/// decides whether that aborts the whole audit.
#[async_trait]
pub trait WorkloadLister: Send + Sync {
    async fn list_deployments(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<Deployment>>;

    async fn list_stateful_sets(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<StatefulSet>>;
}

use anyhow::Context;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use kube::api::ListParams;
use kube::{Api, Client};

use crate::ports::outbound::WorkloadLister;
use crate::shared::Result;

/// KubeWorkloadLister adapter - lists Deployments and StatefulSets through
/// an authenticated kube client.
pub struct KubeWorkloadLister {
    client: Client,
}

impl KubeWorkloadLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn list_params(label_selector: Option<&str>) -> ListParams {
        let mut params = ListParams::default();
        if let Some(selector) = label_selector {
            params = params.labels(selector);
        }
        params
    }
}

#[async_trait]
impl WorkloadLister for KubeWorkloadLister {
    async fn list_deployments(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<Deployment>> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        let deployments = api
            .list(&Self::list_params(label_selector))
            .await
            .with_context(|| format!("listing deployments in namespace {}", namespace))?;
        Ok(deployments.items)
    }

    async fn list_stateful_sets(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<StatefulSet>> {
        let api: Api<StatefulSet> = Api::namespaced(self.client.clone(), namespace);
        let stateful_sets = api
            .list(&Self::list_params(label_selector))
            .await
            .with_context(|| format!("listing statefulsets in namespace {}", namespace))?;
        Ok(stateful_sets.items)
    }
}

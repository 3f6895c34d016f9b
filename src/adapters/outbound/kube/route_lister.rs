use anyhow::Context;
use async_trait::async_trait;
use kube::api::ListParams;
use kube::{Api, Client};

use crate::ports::outbound::{Route, RouteLister};
use crate::shared::Result;

/// KubeRouteLister adapter - lists `route.openshift.io/v1` routes through
/// an authenticated kube client.
pub struct KubeRouteLister {
    client: Client,
}

impl KubeRouteLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RouteLister for KubeRouteLister {
    async fn list_routes(&self, namespace: &str) -> Result<Vec<Route>> {
        let api: Api<Route> = Api::namespaced(self.client.clone(), namespace);
        let routes = api
            .list(&ListParams::default())
            .await
            .with_context(|| format!("listing routes in namespace {}", namespace))?;
        Ok(routes.items)
    }
}

use async_trait::async_trait;
use cluster_audit::prelude::*;
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock WorkloadLister for testing
///
/// Deployment and StatefulSet responses are configured independently per
/// namespace, mirroring the two separate listing calls. Label selectors
/// passed by the use case are recorded for assertions.
pub struct MockWorkloadLister {
    deployments: HashMap<String, std::result::Result<Vec<Deployment>, String>>,
    stateful_sets: HashMap<String, std::result::Result<Vec<StatefulSet>, String>>,
    seen_selectors: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockWorkloadLister {
    pub fn new() -> Self {
        Self {
            deployments: HashMap::new(),
            stateful_sets: HashMap::new(),
            seen_selectors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_deployments(mut self, namespace: &str, items: Vec<Deployment>) -> Self {
        self.deployments.insert(namespace.to_string(), Ok(items));
        self
    }

    pub fn with_stateful_sets(mut self, namespace: &str, items: Vec<StatefulSet>) -> Self {
        self.stateful_sets.insert(namespace.to_string(), Ok(items));
        self
    }

    pub fn with_deployment_failure(mut self, namespace: &str, message: &str) -> Self {
        self.deployments
            .insert(namespace.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_stateful_set_failure(mut self, namespace: &str, message: &str) -> Self {
        self.stateful_sets
            .insert(namespace.to_string(), Err(message.to_string()));
        self
    }

    /// Handle onto the recorded label selectors, usable after the lister
    /// has been moved into a use case.
    pub fn selectors_handle(&self) -> Arc<Mutex<Vec<Option<String>>>> {
        Arc::clone(&self.seen_selectors)
    }

    fn record_selector(&self, label_selector: Option<&str>) {
        self.seen_selectors
            .lock()
            .unwrap()
            .push(label_selector.map(str::to_string));
    }
}

impl Default for MockWorkloadLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkloadLister for MockWorkloadLister {
    async fn list_deployments(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<Deployment>> {
        self.record_selector(label_selector);
        match self.deployments.get(namespace) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(message)) => anyhow::bail!("{}", message),
            None => Ok(Vec::new()),
        }
    }

    async fn list_stateful_sets(
        &self,
        namespace: &str,
        label_selector: Option<&str>,
    ) -> Result<Vec<StatefulSet>> {
        self.record_selector(label_selector);
        match self.stateful_sets.get(namespace) {
            Some(Ok(items)) => Ok(items.clone()),
            Some(Err(message)) => anyhow::bail!("{}", message),
            None => Ok(Vec::new()),
        }
    }
}

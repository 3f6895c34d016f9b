use async_trait::async_trait;
use cluster_audit::prelude::*;
use std::collections::HashMap;

/// Mock RouteLister for testing
///
/// Responses are configured per namespace; unconfigured namespaces list
/// as empty.
pub struct MockRouteLister {
    responses: HashMap<String, std::result::Result<Vec<Route>, String>>,
}

impl MockRouteLister {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with_routes(mut self, namespace: &str, routes: Vec<Route>) -> Self {
        self.responses.insert(namespace.to_string(), Ok(routes));
        self
    }

    pub fn with_failure(mut self, namespace: &str, message: &str) -> Self {
        self.responses
            .insert(namespace.to_string(), Err(message.to_string()));
        self
    }
}

impl Default for MockRouteLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RouteLister for MockRouteLister {
    async fn list_routes(&self, namespace: &str) -> Result<Vec<Route>> {
        match self.responses.get(namespace) {
            Some(Ok(routes)) => Ok(routes.clone()),
            Some(Err(message)) => anyhow::bail!("{}", message),
            None => Ok(Vec::new()),
        }
    }
}

use async_trait::async_trait;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::auditing::domain::TerminationMode;
use crate::shared::Result;

/// Spec of the `route.openshift.io/v1` Route resource, limited to the
/// fields the audit consumes. Unknown fields returned by the API server
/// are ignored during deserialization.
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "route.openshift.io",
    version = "v1",
    kind = "Route",
    plural = "routes",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    /// Externally reachable host name
    #[serde(default)]
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Primary backend the route points at
    pub to: RouteTargetReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<RoutePort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<RouteTlsSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteTargetReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoutePort {
    pub target_port: TargetPort,
}

/// Route target ports are either a numeric port or a named port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TargetPort {
    Number(i32),
    Name(String),
}

impl fmt::Display for TargetPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetPort::Number(port) => write!(f, "{}", port),
            TargetPort::Name(name) => write!(f, "{}", name),
        }
    }
}

/// TLS block of a route spec. Termination is always present when TLS is
/// declared; certificate and key are independently optional (passthrough
/// routes legitimately omit both).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteTlsSpec {
    pub termination: TerminationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// RouteLister port - namespace-scoped listing of OpenShift routes.
///
/// Implementations carry an already-authenticated cluster client; the
/// use case supplies one namespace per call and owns all aggregation
/// policy across namespaces.
///
/// # Errors
/// Returns an error when the listing call fails for that namespace
/// (transport failure, missing permissions, unknown resource).
#[async_trait]
pub trait RouteLister: Send + Sync {
    async fn list_routes(&self, namespace: &str) -> Result<Vec<Route>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_spec_deserializes_from_api_shape() {
        let json = r#"{
            "host": "app.example.com",
            "to": { "kind": "Service", "name": "app-svc", "weight": 100 },
            "port": { "targetPort": 8443 },
            "tls": { "termination": "edge", "certificate": "PEM", "key": "PEM" }
        }"#;

        let spec: RouteSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.host, "app.example.com");
        assert_eq!(spec.to.name, "app-svc");
        assert_eq!(
            spec.port.unwrap().target_port,
            TargetPort::Number(8443)
        );
        assert_eq!(spec.tls.unwrap().termination, TerminationMode::Edge);
    }

    #[test]
    fn named_target_port_deserializes_and_displays() {
        let port: TargetPort = serde_json::from_str("\"https\"").unwrap();
        assert_eq!(port, TargetPort::Name("https".to_string()));
        assert_eq!(port.to_string(), "https");
        assert_eq!(TargetPort::Number(8080).to_string(), "8080");
    }

    #[test]
    fn tls_block_tolerates_missing_certificate_and_key() {
        let json = r#"{ "termination": "passthrough" }"#;
        let tls: RouteTlsSpec = serde_json::from_str(json).unwrap();
        assert_eq!(tls.termination, TerminationMode::Passthrough);
        assert!(tls.certificate.is_none());
        assert!(tls.key.is_none());
    }
}

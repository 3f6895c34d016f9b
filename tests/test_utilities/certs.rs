use cluster_audit::prelude::*;
use k8s_openapi::api::apps::v1::{
    Deployment, DeploymentSpec, DeploymentStatus, StatefulSet, StatefulSetSpec, StatefulSetStatus,
};
use chrono::Utc;
use k8s_openapi::api::core::v1::PodTemplateSpec;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta, Time};
use rcgen::{
    string::Ia5String, CertificateParams, DistinguishedName, DnType, DnValue, KeyPair, SanType,
};
use std::collections::BTreeMap;

/// A generated certificate and its private key, both PEM-encoded.
pub struct GeneratedCert {
    pub cert_pem: String,
    pub key_pem: String,
}

/// Generates a self-signed certificate at test time, mirroring how route
/// certificates look in the wild: a CN plus optional DNS SANs.
pub fn generate_cert(common_name: &str, dns_sans: &[&str]) -> GeneratedCert {
    let mut params = CertificateParams::default();
    let mut dn = DistinguishedName::new();
    dn.push(
        DnType::CommonName,
        DnValue::Utf8String(common_name.to_string()),
    );
    dn.push(
        DnType::OrganizationName,
        DnValue::Utf8String("Audit Test".to_string()),
    );
    params.distinguished_name = dn;
    params.subject_alt_names = dns_sans
        .iter()
        .map(|san| SanType::DnsName(Ia5String::try_from(san.to_string()).unwrap()))
        .collect();

    let key_pair = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key_pair).unwrap();
    GeneratedCert {
        cert_pem: cert.pem(),
        key_pem: key_pair.serialize_pem(),
    }
}

/// Builds a Route the way the API server would return it.
pub fn route(name: &str, namespace: &str, host: &str, tls: Option<RouteTlsSpec>) -> Route {
    let mut route = Route::new(
        name,
        RouteSpec {
            host: host.to_string(),
            path: None,
            to: RouteTargetReference {
                kind: Some("Service".to_string()),
                name: format!("{}-svc", name),
                weight: Some(100),
            },
            port: Some(RoutePort {
                target_port: TargetPort::Number(8443),
            }),
            tls,
        },
    );
    route.metadata.namespace = Some(namespace.to_string());
    route
}

fn annotation_map(annotations: &[(&str, &str)]) -> BTreeMap<String, String> {
    annotations
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Builds a Deployment with the given pod-template annotations.
pub fn deployment(
    name: &str,
    namespace: &str,
    annotations: Option<&[(&str, &str)]>,
) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            creation_timestamp: Some(Time(Utc::now())),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(2),
            selector: LabelSelector::default(),
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    annotations: annotations.map(annotation_map),
                    ..Default::default()
                }),
                spec: None,
            },
            ..Default::default()
        }),
        status: Some(DeploymentStatus {
            ready_replicas: Some(2),
            ..Default::default()
        }),
    }
}

/// Builds a StatefulSet with the given pod-template annotations.
pub fn stateful_set(
    name: &str,
    namespace: &str,
    annotations: Option<&[(&str, &str)]>,
) -> StatefulSet {
    StatefulSet {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            creation_timestamp: Some(Time(Utc::now())),
            ..Default::default()
        },
        spec: Some(StatefulSetSpec {
            replicas: Some(1),
            selector: LabelSelector::default(),
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    annotations: annotations.map(annotation_map),
                    ..Default::default()
                }),
                spec: None,
            },
            ..Default::default()
        }),
        status: Some(StatefulSetStatus {
            ready_replicas: Some(1),
            ..Default::default()
        }),
    }
}

use crate::auditing::domain::{RouteRecord, WorkloadRecord};
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;

/// CsvRenderer adapter - one header row plus one row per record, with
/// RFC-4180-style quoting for values containing commas, quotes or
/// newlines. Absent optionals render as empty fields.
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self::new()
    }
}

const ROUTE_HEADERS: [&str; 16] = [
    "Name",
    "Namespace",
    "Host",
    "Path",
    "Service",
    "Port",
    "TLS Termination",
    "Certificate Subject",
    "Certificate Issuer",
    "Certificate Valid From",
    "Certificate Valid To",
    "Certificate Serial Number",
    "Certificate Fingerprint",
    "Certificate Subject Alt Names",
    "Host Matches Certificate",
    "Private Key Matches Certificate",
];

const WORKLOAD_HEADERS: [&str; 9] = [
    "Name",
    "Namespace",
    "Type",
    "Replicas",
    "Ready Replicas",
    "Metrics Enabled",
    "Metrics Port",
    "Metrics Path",
    "Created At",
];

fn escape_csv_value(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line(values: &[String]) -> String {
    values
        .iter()
        .map(|value| escape_csv_value(value))
        .collect::<Vec<_>>()
        .join(",")
}

fn optional_bool(value: Option<bool>) -> String {
    value.map(|b| b.to_string()).unwrap_or_default()
}

impl ReportRenderer for CsvRenderer {
    fn render_routes(&self, routes: &[RouteRecord]) -> Result<String> {
        let mut lines = vec![ROUTE_HEADERS.join(",")];
        for route in routes {
            let tls = route.tls.as_ref();
            let cert = tls.and_then(|t| t.certificate_info.as_ref());
            lines.push(csv_line(&[
                route.name.clone(),
                route.namespace.clone(),
                route.host.clone(),
                route.path.clone().unwrap_or_default(),
                route.service.clone(),
                route.port.clone().unwrap_or_default(),
                tls.map(|t| t.termination.to_string()).unwrap_or_default(),
                cert.map(|c| c.subject.clone()).unwrap_or_default(),
                cert.map(|c| c.issuer.clone()).unwrap_or_default(),
                cert.map(|c| c.valid_from.to_rfc3339()).unwrap_or_default(),
                cert.map(|c| c.valid_to.to_rfc3339()).unwrap_or_default(),
                cert.map(|c| c.serial_number.clone()).unwrap_or_default(),
                cert.map(|c| c.fingerprint.clone()).unwrap_or_default(),
                cert.and_then(|c| c.subject_alt_names.as_ref())
                    .map(|sans| sans.join("; "))
                    .unwrap_or_default(),
                optional_bool(tls.and_then(|t| t.host_matches_certificate)),
                optional_bool(tls.and_then(|t| t.private_key_matches_certificate)),
            ]));
        }
        Ok(lines.join("\n"))
    }

    fn render_workloads(&self, workloads: &[WorkloadRecord]) -> Result<String> {
        let mut lines = vec![WORKLOAD_HEADERS.join(",")];
        for workload in workloads {
            let metrics = workload.metrics.as_ref();
            lines.push(csv_line(&[
                workload.name.clone(),
                workload.namespace.clone(),
                workload.kind.to_string(),
                workload.replicas.map(|r| r.to_string()).unwrap_or_default(),
                workload
                    .ready_replicas
                    .map(|r| r.to_string())
                    .unwrap_or_default(),
                optional_bool(metrics.and_then(|m| m.scrape_enabled)),
                metrics
                    .and_then(|m| m.port.clone())
                    .unwrap_or_default(),
                metrics
                    .and_then(|m| m.path.clone())
                    .unwrap_or_default(),
                workload
                    .created_at
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default(),
            ]));
        }
        Ok(lines.join("\n"))
    }
}

use owo_colors::OwoColorize;

use crate::auditing::domain::{RouteRecord, WorkloadRecord};
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;

/// TableRenderer adapter - fixed-width text table for terminals.
///
/// Sentinel strings (`N/A`, checkmarks) live only here; the records keep
/// true three-state optionals.
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

const ROUTE_WIDTHS: [usize; 6] = [30, 15, 30, 12, 12, 12];
const ROUTE_HEADERS: [&str; 6] = ["Name", "Namespace", "Host", "TLS", "Host Match", "Key Match"];

const WORKLOAD_WIDTHS: [usize; 6] = [30, 15, 12, 15, 12, 15];
const WORKLOAD_HEADERS: [&str; 6] = [
    "Name",
    "Namespace",
    "Type",
    "Metrics Enabled",
    "Metrics Port",
    "Metrics Path",
];

fn cell(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

fn header_line(headers: &[&str], widths: &[usize]) -> String {
    let row = headers
        .iter()
        .zip(widths)
        .map(|(header, width)| cell(header, *width))
        .collect::<Vec<_>>()
        .join("  ");
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");
    format!("{}\n{}", row, rule)
}

/// `✓` / `✗` / `N/A`, colorized after padding so column widths stay exact.
fn check_cell(value: Option<bool>, width: usize) -> String {
    match value {
        Some(true) => cell("✓", width).green().to_string(),
        Some(false) => cell("✗", width).red().to_string(),
        None => cell("N/A", width),
    }
}

impl ReportRenderer for TableRenderer {
    fn render_routes(&self, routes: &[RouteRecord]) -> Result<String> {
        let mut output = header_line(&ROUTE_HEADERS, &ROUTE_WIDTHS);
        for route in routes {
            let termination = route
                .tls
                .as_ref()
                .map(|tls| tls.termination.to_string())
                .unwrap_or_else(|| "None".to_string());
            let host_match = route.tls.as_ref().and_then(|tls| tls.host_matches_certificate);
            let key_match = route
                .tls
                .as_ref()
                .and_then(|tls| tls.private_key_matches_certificate);

            let row = [
                cell(&route.name, ROUTE_WIDTHS[0]),
                cell(&route.namespace, ROUTE_WIDTHS[1]),
                cell(&route.host, ROUTE_WIDTHS[2]),
                cell(&termination, ROUTE_WIDTHS[3]),
                check_cell(host_match, ROUTE_WIDTHS[4]),
                check_cell(key_match, ROUTE_WIDTHS[5]),
            ]
            .join("  ");
            output.push('\n');
            output.push_str(&row);
        }
        Ok(output)
    }

    fn render_workloads(&self, workloads: &[WorkloadRecord]) -> Result<String> {
        let mut output = header_line(&WORKLOAD_HEADERS, &WORKLOAD_WIDTHS);
        for workload in workloads {
            let metrics = workload.metrics.as_ref();
            let enabled = metrics.and_then(|m| m.scrape_enabled);
            let port = metrics.and_then(|m| m.port.as_deref()).unwrap_or("N/A");
            let path = metrics.and_then(|m| m.path.as_deref()).unwrap_or("N/A");

            let row = [
                cell(&workload.name, WORKLOAD_WIDTHS[0]),
                cell(&workload.namespace, WORKLOAD_WIDTHS[1]),
                cell(&workload.kind.to_string(), WORKLOAD_WIDTHS[2]),
                check_cell(enabled, WORKLOAD_WIDTHS[3]),
                cell(port, WORKLOAD_WIDTHS[4]),
                cell(path, WORKLOAD_WIDTHS[5]),
            ]
            .join("  ");
            output.push('\n');
            output.push_str(&row);
        }
        Ok(output)
    }
}

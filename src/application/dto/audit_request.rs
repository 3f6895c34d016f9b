/// Request for the route certificate audit.
#[derive(Debug, Clone)]
pub struct RouteAuditRequest {
    /// Namespaces to audit, in the order results should appear.
    /// Must not be empty - an empty list is a caller contract violation.
    pub namespaces: Vec<String>,
    /// Drop routes without a parsed certificate before returning.
    pub filter_no_cert: bool,
}

impl RouteAuditRequest {
    pub fn new(namespaces: Vec<String>, filter_no_cert: bool) -> Self {
        Self {
            namespaces,
            filter_no_cert,
        }
    }
}

/// Request for the workload metrics annotation audit.
#[derive(Debug, Clone)]
pub struct WorkloadAuditRequest {
    /// Namespaces to audit, in the order results should appear.
    /// Must not be empty - an empty list is a caller contract violation.
    pub namespaces: Vec<String>,
    /// Label selector forwarded verbatim to both listing calls.
    pub label_selector: Option<String>,
    /// Keep only workloads whose scrape annotation is absent.
    pub only_no_metrics: bool,
}

impl WorkloadAuditRequest {
    pub fn new(
        namespaces: Vec<String>,
        label_selector: Option<String>,
        only_no_metrics: bool,
    ) -> Self {
        Self {
            namespaces,
            label_selector,
            only_no_metrics,
        }
    }
}

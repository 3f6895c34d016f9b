use crate::auditing::domain::{RouteRecord, WorkloadRecord};
use crate::ports::outbound::ReportRenderer;
use crate::shared::error::AuditError;
use crate::shared::Result;

/// JsonRenderer adapter - compact JSON, camelCase keys.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render_routes(&self, routes: &[RouteRecord]) -> Result<String> {
        serde_json::to_string(routes).map_err(|e| {
            AuditError::Render {
                format: "json".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn render_workloads(&self, workloads: &[WorkloadRecord]) -> Result<String> {
        serde_json::to_string(workloads).map_err(|e| {
            AuditError::Render {
                format: "json".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

use crate::auditing::domain::{RouteRecord, WorkloadRecord};
use crate::shared::Result;

/// ReportRenderer port for turning audit records into output text.
///
/// Renderers own every display decision: sentinel strings like `N/A` and
/// checkmarks exist only here. The records themselves keep true
/// three-state optionals (absent / true / false).
pub trait ReportRenderer {
    /// Renders the route certificate audit report
    fn render_routes(&self, routes: &[RouteRecord]) -> Result<String>;

    /// Renders the workload metrics annotation report
    fn render_workloads(&self, workloads: &[WorkloadRecord]) -> Result<String>;
}

/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_route_lister;
mod mock_workload_lister;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_route_lister::MockRouteLister;
pub use mock_workload_lister::MockWorkloadLister;

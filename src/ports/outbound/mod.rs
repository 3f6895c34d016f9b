/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (cluster API, console, renderers).
pub mod output_presenter;
pub mod progress_reporter;
pub mod renderer;
pub mod route_lister;
pub mod workload_lister;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use renderer::ReportRenderer;
pub use route_lister::{
    Route, RouteLister, RoutePort, RouteSpec, RouteTargetReference, RouteTlsSpec, TargetPort,
};
pub use workload_lister::WorkloadLister;

/// Use cases orchestrating domain services through ports.
pub mod audit_route_certificates;
pub mod audit_workload_metrics;

pub use audit_route_certificates::AuditRouteCertificatesUseCase;
pub use audit_workload_metrics::AuditWorkloadMetricsUseCase;

/// Data transfer objects crossing the application boundary.
pub mod audit_request;

pub use audit_request::{RouteAuditRequest, WorkloadAuditRequest};

/// Pure domain services: certificate decoding and matching, annotation
/// extraction, per-route TLS inspection. None of these log or perform I/O;
/// failures surface as explicit result values for the use cases to act on.
pub mod annotation_extractor;
pub mod certificate_matcher;
pub mod certificate_parser;
pub mod route_inspector;

pub use annotation_extractor::extract_metrics_config;
pub use certificate_matcher::{host_matches, key_matches};
pub use certificate_parser::parse_certificate;
pub use route_inspector::{inspect_tls, TlsInspection, TlsIssue};

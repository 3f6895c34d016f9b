/// Ports layer - interface definitions for infrastructure.
pub mod outbound;

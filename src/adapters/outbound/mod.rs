/// Outbound adapters - concrete implementations of the outbound ports.
pub mod console;
pub mod kube;
pub mod renderers;
